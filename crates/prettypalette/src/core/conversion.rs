//! The conversion kernels between the seven notations.
//!
//! RGB is the pivot representation: every conversion without a direct
//! formula routes through it. The formulas reproduce the documented rounding
//! and boundary behavior exactly, since the round-trip guarantees depend on
//! them.

use super::math::{channel, shift_hue};
use crate::notation::{Cmyk, Hex, Hsl, Hsv, Rgb};
use crate::Float;

/// Convert an RGB color to hashed hexadecimal.
///
/// Channels are truncated to integers and clamped into `0x00..=0xff` before
/// encoding, so out-of-range intermediates cannot corrupt neighboring hex
/// digits.
pub(crate) fn rgb_to_hex(rgb: &Rgb) -> Hex {
    Hex::new(
        channel(rgb.r.trunc()) as u8,
        channel(rgb.g.trunc()) as u8,
        channel(rgb.b.trunc()) as u8,
    )
}

/// Convert a hashed hexadecimal color to RGB.
pub(crate) fn hex_to_rgb(hex: &Hex) -> Rgb {
    let [r, g, b] = *hex.as_ref();
    Rgb::new(r as Float, g as Float, b as Float)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert an RGB color to HSV.
///
/// Uses the classic max/min/delta formulation with 60° sectors. On the
/// red-max branch, `g >= b` picks the unwrapped sector and `g < b` the +360°
/// wrap. Saturation is zero for black.
pub(crate) fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { 1.0 - min / max };

    let h = if max == min {
        0.0
    } else if max == r && g >= b {
        60.0 * ((g - b) / delta)
    } else if max == r {
        60.0 * ((g - b) / delta) + 360.0
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };

    Hsv::new(h, s, v)
}

/// Convert an HSV color to RGB.
///
/// The hue is normalized onto the wheel before sector selection, so the
/// `h == 360` edge folds into sector 0. The computation runs on the 0–100
/// scale and rounds into 8-bit channels at the end.
pub(crate) fn hsv_to_rgb(hsv: &Hsv) -> Rgb {
    let h = shift_hue(hsv.h, 0.0);
    let s = hsv.s * 100.0;
    let v = hsv.v * 100.0;

    let sector = (h / 60.0).floor() as u8;
    let v_min = (100.0 - s) * v / 100.0;
    let spread = (v - v_min) * ((h % 60.0) / 60.0);
    let v_inc = v_min + spread;
    let v_dec = v - spread;

    let (r, g, b) = match sector {
        0 => (v, v_inc, v_min),
        1 => (v_dec, v, v_min),
        2 => (v_min, v, v_inc),
        3 => (v_min, v_dec, v),
        4 => (v_inc, v_min, v),
        _ => (v, v_min, v_dec),
    };

    Rgb::new(
        (r * 255.0 / 100.0).round(),
        (g * 255.0 / 100.0).round(),
        (b * 255.0 / 100.0).round(),
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert an RGB color to CMYK, scaled to integer percents.
pub(crate) fn rgb_to_cmyk(rgb: &Rgb) -> Cmyk {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);

    let component = |value: Float| {
        if 1.0 - k == 0.0 {
            0.0
        } else {
            (1.0 - value - k) / (1.0 - k)
        }
    };

    Cmyk::new(
        (component(r) * 100.0).round(),
        (component(g) * 100.0).round(),
        (component(b) * 100.0).round(),
        (k * 100.0).round(),
    )
}

/// Convert a CMYK color to RGB.
///
/// The red channel floors while green and blue ceil. The asymmetry is
/// load-bearing for compatibility with existing round-trip expectations and
/// must not be "fixed" to a symmetric rounding rule.
pub(crate) fn cmyk_to_rgb(cmyk: &Cmyk) -> Rgb {
    let key = 1.0 - cmyk.k / 100.0;

    Rgb::new(
        (255.0 * (1.0 - cmyk.c / 100.0) * key).floor(),
        (255.0 * (1.0 - cmyk.m / 100.0) * key).ceil(),
        (255.0 * (1.0 - cmyk.y / 100.0) * key).ceil(),
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert an HSV color to HSL.
///
/// The hue truncates to an integer in this direction. Degenerate inputs can
/// drive the intermediate terms to NaN; the result normalizes those to zero
/// instead of letting them propagate.
pub(crate) fn hsv_to_hsl(hsv: &Hsv) -> Hsl {
    let h = hsv.h.trunc();
    let mut l = (2.0 - hsv.s) * hsv.v;
    let mut s = hsv.s * hsv.v;

    if l == 0.0 {
        s = 0.0;
    } else {
        let d = if l <= 1.0 { l } else { 2.0 - l };
        if d == 0.0 {
            s = 0.0;
        } else {
            s /= d;
        }
    }
    l /= 2.0;

    if s.is_nan() {
        s = 0.0;
    }
    if l.is_nan() {
        l = 0.0;
    }

    Hsl::new(h, s, l)
}

/// Convert an HSL color to HSV.
pub(crate) fn hsl_to_hsv(hsl: &Hsl) -> Hsv {
    let h = hsl.h;
    let l = hsl.l * 2.0;
    let mut s = hsl.s * if l <= 1.0 { l } else { 2.0 - l };

    let v = (l + s) / 2.0;
    s = if l + s == 0.0 { 0.0 } else { (2.0 * s) / (l + s) };

    Hsv::new(h, s, v)
}

// --------------------------------------------------------------------------------------------------------------------

/// Snap each RGB channel to the nearest multiple of 51, the legacy websafe
/// quantization.
pub(crate) fn rgb_to_websafe(rgb: &Rgb) -> Rgb {
    Rgb::new(
        (rgb.r / 51.0).round() * 51.0,
        (rgb.g / 51.0).round() * 51.0,
        (rgb.b / 51.0).round() * 51.0,
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the YIQ luminance used to classify colors as dark or light.
pub(crate) fn yiq_luminance(rgb: &Rgb) -> Float {
    (rgb.r * 299.0 + rgb.g * 587.0 + rgb.b * 114.0) / 1000.0
}

/// Compute the rounded gray level for grayscale conversion.
pub(crate) fn gray_level(rgb: &Rgb) -> Float {
    (rgb.r * 0.2125 + rgb.g * 0.7154 + rgb.b * 0.0721).round()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        cmyk_to_rgb, gray_level, hex_to_rgb, hsl_to_hsv, hsv_to_hsl, hsv_to_rgb, rgb_to_cmyk,
        rgb_to_hex, rgb_to_hsv, rgb_to_websafe, yiq_luminance,
    };
    use crate::notation::{Cmyk, Hex, Hsl, Hsv, Rgb};

    #[test]
    fn test_hex_round_trip() {
        for value in [0x000000_u32, 0xff0000, 0x00ff00, 0x0000ff, 0x123456, 0xffffff] {
            let rgb = Rgb::new(
                ((value >> 16) & 0xff) as crate::Float,
                ((value >> 8) & 0xff) as crate::Float,
                (value & 0xff) as crate::Float,
            );
            assert_eq!(hex_to_rgb(&rgb_to_hex(&rgb)), rgb);
        }

        // Sample the channel lattice more densely.
        for r in (0..=255_u16).step_by(17) {
            for g in (0..=255_u16).step_by(51) {
                for b in (0..=255_u16).step_by(85) {
                    let rgb = Rgb::new(
                        r as crate::Float,
                        g as crate::Float,
                        b as crate::Float,
                    );
                    assert_eq!(hex_to_rgb(&rgb_to_hex(&rgb)), rgb);
                }
            }
        }
    }

    #[test]
    fn test_hex_clamps_out_of_range() {
        assert_eq!(rgb_to_hex(&Rgb::new(300.0, -4.0, 128.0)), Hex::new(255, 0, 128));
    }

    #[test]
    fn test_rgb_to_hsv() {
        assert_eq!(rgb_to_hsv(&Rgb::new(255.0, 0.0, 0.0)), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(&Rgb::new(0.0, 255.0, 0.0)), Hsv::new(120.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(&Rgb::new(0.0, 0.0, 255.0)), Hsv::new(240.0, 1.0, 1.0));
        // Black has no chroma and no meaningful hue.
        assert_eq!(rgb_to_hsv(&Rgb::new(0.0, 0.0, 0.0)), Hsv::new(0.0, 0.0, 0.0));
        // Red-max with b > g wraps through +360.
        let hsv = rgb_to_hsv(&Rgb::new(255.0, 0.0, 128.0));
        assert!(300.0 < hsv.h && hsv.h < 360.0, "hue {} should sit in the magenta range", hsv.h);
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(&Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(&Hsv::new(120.0, 1.0, 1.0)), Rgb::new(0.0, 255.0, 0.0));
        assert_eq!(hsv_to_rgb(&Hsv::new(240.0, 1.0, 1.0)), Rgb::new(0.0, 0.0, 255.0));
        // The h == 360 edge folds into sector 0 rather than indexing a
        // seventh sector.
        assert_eq!(hsv_to_rgb(&Hsv::new(360.0, 1.0, 1.0)), Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(
            rgb_to_cmyk(&Rgb::new(255.0, 0.0, 0.0)),
            Cmyk::new(0.0, 100.0, 100.0, 0.0)
        );
        assert_eq!(
            rgb_to_cmyk(&Rgb::new(0.0, 0.0, 0.0)),
            Cmyk::new(0.0, 0.0, 0.0, 100.0)
        );
        assert_eq!(
            cmyk_to_rgb(&Cmyk::new(0.0, 100.0, 100.0, 0.0)),
            Rgb::new(255.0, 0.0, 0.0)
        );
        assert_eq!(
            cmyk_to_rgb(&Cmyk::new(0.0, 0.0, 0.0, 100.0)),
            Rgb::new(0.0, 0.0, 0.0)
        );

        // The round trip is lossy by design. Check proximity, not equality.
        let rgb = Rgb::new(123.0, 45.0, 67.0);
        let back = cmyk_to_rgb(&rgb_to_cmyk(&rgb));
        assert!((back.r - rgb.r).abs() <= 3.0);
        assert!((back.g - rgb.g).abs() <= 3.0);
        assert!((back.b - rgb.b).abs() <= 3.0);
    }

    #[test]
    fn test_hsv_hsl() {
        assert_eq!(hsv_to_hsl(&Hsv::new(0.0, 1.0, 1.0)), Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(hsv_to_hsl(&Hsv::new(0.0, 0.0, 0.0)), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(hsl_to_hsv(&Hsl::new(0.0, 1.0, 0.5)), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(hsl_to_hsv(&Hsl::new(0.0, 0.0, 0.0)), Hsv::new(0.0, 0.0, 0.0));
        // The hue truncates toward HSL.
        assert_eq!(hsv_to_hsl(&Hsv::new(36.6, 1.0, 1.0)).h, 36.0);
    }

    #[test]
    fn test_websafe() {
        let snapped = rgb_to_websafe(&Rgb::new(18.0, 52.0, 86.0));
        assert_eq!(snapped, Rgb::new(0.0, 51.0, 102.0));
        // Snapping is idempotent.
        assert_eq!(rgb_to_websafe(&snapped), snapped);
    }

    #[test]
    fn test_luminance() {
        assert_eq!(yiq_luminance(&Rgb::new(0.0, 0.0, 0.0)), 0.0);
        assert_eq!(yiq_luminance(&Rgb::new(255.0, 255.0, 255.0)), 255.0);
        assert_eq!(gray_level(&Rgb::new(255.0, 0.0, 0.0)), 54.0);
    }
}
