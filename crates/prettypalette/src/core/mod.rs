mod conversion;
mod math;
mod string;

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, gray_level, hex_to_rgb, hsl_to_hsv, hsv_to_hsl, hsv_to_rgb, rgb_to_cmyk,
    rgb_to_hex, rgb_to_hsv, rgb_to_websafe, yiq_luminance,
};

// math
pub(crate) use math::{channel, round_half_up, shift_hue, unit};

// string
pub(crate) use string::{detect, parse, parse_hex};
