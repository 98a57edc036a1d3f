//! Color scheme generation.
//!
//! A scheme is an ordered set of colors derived from a base color by a
//! named hue or lightness algorithm. Nine algorithms produce sequences;
//! the tenth, [`SchemeKind::Material`], produces a keyed palette instead.
//! All hue arithmetic goes through the crate's single wheel normalization.

use crate::core::{channel, hsv_to_rgb, rgb_to_hsv, shift_hue, unit};
use crate::error::ColorError;
use crate::notation::{Hex, Hsv, Notation, Rgb};
use crate::object::Color;
use crate::Float;

/// The named scheme algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Five tints and shades of the base color. [`SchemeOptions::algorithm`]
    /// selects among four variants.
    Monochromatic,
    /// The base color and its opposite on the wheel.
    Complementary,
    /// Two complementary pairs separated by [`SchemeOptions::angle`].
    DoubleComplementary,
    /// The base color flanked at ±[`SchemeOptions::angle`].
    Analogous,
    /// Three colors at 120° intervals.
    Triadic,
    /// Four colors from two complementary pairs.
    Tetradic,
    /// Four colors at 90° intervals.
    Square,
    /// The base color and the two colors flanking its complement.
    SplitComplementary,
    /// The material-design palette with primary and accent entries.
    Material,
}

impl SchemeKind {
    /// Get this scheme's canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            SchemeKind::Monochromatic => "monochromatic",
            SchemeKind::Complementary => "complementary",
            SchemeKind::DoubleComplementary => "double-complementary",
            SchemeKind::Analogous => "analogous",
            SchemeKind::Triadic => "triadic",
            SchemeKind::Tetradic => "tetradic",
            SchemeKind::Square => "square",
            SchemeKind::SplitComplementary => "split-complementary",
            SchemeKind::Material => "material",
        }
    }
}

impl std::str::FromStr for SchemeKind {
    type Err = ColorError;

    /// Resolve a scheme name or one of its documented aliases. Names are
    /// case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use SchemeKind::*;

        match s {
            "monochromatic" | "mono" => Ok(Monochromatic),
            "complementary" | "complement" | "comp" => Ok(Complementary),
            "double-complementary" | "double-complement" | "double" => Ok(DoubleComplementary),
            "analogous" | "analog" => Ok(Analogous),
            "triadic" | "triad" => Ok(Triadic),
            "tetradic" | "tetra" => Ok(Tetradic),
            "square" => Ok(Square),
            "split-complementary" | "split-complement" | "split" => Ok(SplitComplementary),
            "material" => Ok(Material),
            _ => Err(ColorError::UnknownScheme(s.to_string())),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The dark anchor color for material schemes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BaseDark {
    /// Derive the anchor by multiplying the base color with itself.
    SelfMultiply,
    /// Use the given color.
    Fixed(Color),
}

/// The options consumed by scheme generation.
///
/// The defaults match the documented derivation defaults; the `with_*`
/// builders override individual fields.
///
/// ```
/// # use prettypalette::scheme::SchemeOptions;
/// let options = SchemeOptions::default().with_angle(45.0).with_algorithm(3);
/// assert_eq!(options.angle, 45.0);
/// assert_eq!(options.distance, 5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SchemeOptions {
    /// Hue separation in degrees for the analogous, double, tetradic, and
    /// split schemes.
    pub angle: Float,
    /// Monochromatic variant selector, 1 through 4. Values outside 1–3
    /// behave as variant 4.
    pub algorithm: u8,
    /// Per-step delta for monochromatic variants 2 through 4.
    pub step: Float,
    /// Step count for monochromatic variants 2 and 3.
    pub distance: usize,
    /// Lightening fraction for the first monochromatic tint.
    pub tint1: Float,
    /// Lightening fraction for the second monochromatic tint.
    pub tint2: Float,
    /// Darkening fraction for the first monochromatic shade.
    pub shade1: Float,
    /// Darkening fraction for the second monochromatic shade.
    pub shade2: Float,
    /// Alpha channel for results in alpha-carrying notations.
    pub alpha: Float,
    /// Light anchor for material schemes.
    pub base_light: Color,
    /// Dark anchor for material schemes.
    pub base_dark: BaseDark,
}

impl Default for SchemeOptions {
    fn default() -> Self {
        Self {
            angle: 30.0,
            algorithm: 1,
            step: 0.1,
            distance: 5,
            tint1: 0.8,
            tint2: 0.4,
            shade1: 0.6,
            shade2: 0.3,
            alpha: 1.0,
            base_light: Color::Hex(Hex::WHITE),
            base_dark: BaseDark::SelfMultiply,
        }
    }
}

impl SchemeOptions {
    /// Use the given hue separation angle.
    pub fn with_angle(mut self, angle: Float) -> Self {
        self.angle = angle;
        self
    }

    /// Use the given monochromatic variant.
    pub fn with_algorithm(mut self, algorithm: u8) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Use the given per-step delta.
    pub fn with_step(mut self, step: Float) -> Self {
        self.step = step;
        self
    }

    /// Use the given step count.
    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = distance;
        self
    }

    /// Use the given tint fractions.
    pub fn with_tints(mut self, tint1: Float, tint2: Float) -> Self {
        self.tint1 = tint1;
        self.tint2 = tint2;
        self
    }

    /// Use the given shade fractions.
    pub fn with_shades(mut self, shade1: Float, shade2: Float) -> Self {
        self.shade1 = shade1;
        self.shade2 = shade2;
        self
    }

    /// Use the given alpha for alpha-carrying result notations.
    pub fn with_alpha(mut self, alpha: Float) -> Self {
        self.alpha = alpha;
        self
    }

    /// Use the given light anchor for material schemes.
    pub fn with_base_light(mut self, color: Color) -> Self {
        self.base_light = color;
        self
    }

    /// Use the given dark anchor for material schemes.
    pub fn with_base_dark(mut self, base_dark: BaseDark) -> Self {
        self.base_dark = base_dark;
        self
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The material-design palette: ten primary entries keyed `50` and `100`
/// through `900`, and four accent entries keyed `A100`, `A200`, `A400`, and
/// `A700`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MaterialPalette {
    /// The primary entries, from lightest to darkest.
    pub primary: [Hex; 10],
    /// The accent entries.
    pub accent: [Hex; 4],
}

impl MaterialPalette {
    /// The keys of the primary entries, in order.
    pub const PRIMARY_KEYS: [&'static str; 10] = [
        "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
    ];

    /// The keys of the accent entries, in order.
    pub const ACCENT_KEYS: [&'static str; 4] = ["A100", "A200", "A400", "A700"];

    /// Look up an entry by its key.
    pub fn get(&self, key: &str) -> Option<Hex> {
        Self::PRIMARY_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|index| self.primary[index])
            .or_else(|| {
                Self::ACCENT_KEYS
                    .iter()
                    .position(|k| *k == key)
                    .map(|index| self.accent[index])
            })
    }
}

/// A generated color scheme.
#[derive(Clone, Debug, PartialEq)]
pub enum Scheme {
    /// An ordered sequence of related colors.
    Sequence(Vec<Color>),
    /// The keyed material palette.
    Material(MaterialPalette),
}

impl Scheme {
    /// Get the number of colors in this scheme.
    pub fn len(&self) -> usize {
        match self {
            Scheme::Sequence(colors) => colors.len(),
            Scheme::Material(_) => 14,
        }
    }

    /// Determine whether this scheme has no colors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access the ordered colors of a sequence scheme.
    pub fn colors(&self) -> Option<&[Color]> {
        match self {
            Scheme::Sequence(colors) => Some(colors),
            Scheme::Material(_) => None,
        }
    }

    /// Access the palette of a material scheme.
    pub fn material(&self) -> Option<&MaterialPalette> {
        match self {
            Scheme::Sequence(_) => None,
            Scheme::Material(palette) => Some(palette),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Create the named scheme for the given color.
///
/// Sequence schemes convert their points into the requested notation, with
/// [`SchemeOptions::alpha`] feeding alpha-carrying targets. The material
/// scheme ignores the notation and always produces hexadecimal entries.
///
/// ```
/// # use prettypalette::scheme::{create_color_scheme, SchemeKind, SchemeOptions};
/// # use prettypalette::{Color, Notation};
/// let red: Color = "#ff0000".parse().unwrap();
/// let scheme = create_color_scheme(
///     &red,
///     SchemeKind::Complementary,
///     Notation::Hex,
///     &SchemeOptions::default(),
/// );
/// assert_eq!(scheme.len(), 2);
/// ```
pub fn create_color_scheme(
    color: &Color,
    kind: SchemeKind,
    notation: Notation,
    options: &SchemeOptions,
) -> Scheme {
    use SchemeKind::*;

    if kind == Material {
        return Scheme::Material(material(color, options));
    }

    let hsv = color.to_hsv();
    let points = match kind {
        Monochromatic => monochromatic(hsv, options),
        Complementary => complementary(hsv),
        DoubleComplementary => double_complementary(hsv, options.angle),
        Analogous => analogous(hsv, options.angle),
        Triadic => spaced(hsv, 120.0, 3),
        Tetradic => tetradic(hsv, options.angle),
        Square => spaced(hsv, 90.0, 4),
        SplitComplementary => split_complementary(hsv, options.angle),
        Material => unreachable!("material schemes return early"),
    };

    Scheme::Sequence(
        points
            .into_iter()
            .map(|point| Color::Hsv(point).to_notation(notation, Some(options.alpha)))
            .collect(),
    )
}

/// Create the scheme named by the string, resolving aliases.
pub fn color_scheme(
    color: &Color,
    name: &str,
    notation: Notation,
    options: &SchemeOptions,
) -> Result<Scheme, ColorError> {
    Ok(create_color_scheme(
        color,
        name.parse()?,
        notation,
        options,
    ))
}

// --------------------------------------------------------------------------------------------------------------------

fn monochromatic(hsv: Hsv, options: &SchemeOptions) -> Vec<Hsv> {
    match options.algorithm {
        1 => {
            let rgb = hsv_to_rgb(&hsv);
            let tint = |f: Float| {
                Rgb::new(
                    channel((rgb.r + (255.0 - rgb.r) * f).round()),
                    channel((rgb.g + (255.0 - rgb.g) * f).round()),
                    channel((rgb.b + (255.0 - rgb.b) * f).round()),
                )
            };
            let shade = |f: Float| {
                Rgb::new(
                    channel((rgb.r * f).round()),
                    channel((rgb.g * f).round()),
                    channel((rgb.b * f).round()),
                )
            };

            vec![
                rgb_to_hsv(&tint(options.tint1)),
                rgb_to_hsv(&tint(options.tint2)),
                hsv,
                rgb_to_hsv(&shade(options.shade1)),
                rgb_to_hsv(&shade(options.shade2)),
            ]
        }
        2 => {
            let mut points = vec![hsv];
            let mut s = hsv.s;
            let mut v = hsv.v;
            for _ in 0..options.distance {
                v = unit(v - options.step);
                s = unit(s - options.step);
                points.push(Hsv::new(hsv.h, s, v));
            }
            points
        }
        3 => {
            let mut points = vec![hsv];
            let mut v = hsv.v;
            for _ in 0..options.distance {
                v = unit(v - options.step);
                points.push(Hsv::new(hsv.h, hsv.s, v));
            }
            points
        }
        _ => vec![
            Hsv::new(hsv.h, hsv.s, unit(hsv.v + options.step * 2.0)),
            Hsv::new(hsv.h, hsv.s, unit(hsv.v + options.step)),
            hsv,
            Hsv::new(hsv.h, hsv.s, unit(hsv.v - options.step)),
            Hsv::new(hsv.h, hsv.s, unit(hsv.v - options.step * 2.0)),
        ],
    }
}

fn complementary(hsv: Hsv) -> Vec<Hsv> {
    vec![hsv, Hsv::new(shift_hue(hsv.h, 180.0), hsv.s, hsv.v)]
}

fn double_complementary(hsv: Hsv, angle: Float) -> Vec<Hsv> {
    let mut points = vec![hsv];
    let mut h = hsv.h;
    for delta in [180.0, angle, 180.0] {
        h = shift_hue(h, delta);
        points.push(Hsv::new(h, hsv.s, hsv.v));
    }
    points
}

fn analogous(hsv: Hsv, angle: Float) -> Vec<Hsv> {
    vec![
        Hsv::new(shift_hue(hsv.h, angle), hsv.s, hsv.v),
        hsv,
        Hsv::new(shift_hue(hsv.h, -angle), hsv.s, hsv.v),
    ]
}

/// Evenly spaced hues: 120° steps for triadic, 90° for square.
fn spaced(hsv: Hsv, delta: Float, count: usize) -> Vec<Hsv> {
    let mut points = vec![hsv];
    let mut h = hsv.h;
    for _ in 1..count {
        h = shift_hue(h, delta);
        points.push(Hsv::new(h, hsv.s, hsv.v));
    }
    points
}

fn tetradic(hsv: Hsv, angle: Float) -> Vec<Hsv> {
    let opposite = shift_hue(hsv.h, 180.0);
    let shifted = shift_hue(hsv.h, -angle);
    vec![
        hsv,
        Hsv::new(opposite, hsv.s, hsv.v),
        Hsv::new(shifted, hsv.s, hsv.v),
        Hsv::new(shift_hue(shifted, 180.0), hsv.s, hsv.v),
    ]
}

fn split_complementary(hsv: Hsv, angle: Float) -> Vec<Hsv> {
    vec![
        Hsv::new(shift_hue(hsv.h, 180.0 - angle), hsv.s, hsv.v),
        hsv,
        Hsv::new(shift_hue(hsv.h, 180.0 + angle), hsv.s, hsv.v),
    ]
}

fn material(color: &Color, options: &SchemeOptions) -> MaterialPalette {
    let base_light = options.base_light;
    let base_dark = match options.base_dark {
        BaseDark::SelfMultiply => Color::Hex(color.multiply(color)),
        BaseDark::Fixed(anchor) => anchor,
    };

    let light = |weight: Float| base_light.mix(color, weight);
    let dark = |weight: Float| base_dark.mix(color, weight);
    let accent = |base: Hex, saturation: Float, lightness: Float| {
        Color::Hex(base)
            .saturate(saturation)
            .lighten(lightness)
            .to_hex()
    };

    MaterialPalette {
        primary: [
            light(10.0),
            light(30.0),
            light(50.0),
            light(70.0),
            light(85.0),
            light(100.0),
            dark(92.0),
            dark(83.0),
            dark(74.0),
            dark(65.0),
        ],
        accent: [
            accent(dark(15.0), 80.0, 65.0),
            accent(dark(15.0), 80.0, 55.0),
            accent(light(100.0), 55.0, 10.0),
            accent(dark(83.0), 65.0, 10.0),
        ],
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        color_scheme, create_color_scheme, BaseDark, MaterialPalette, Scheme, SchemeKind,
        SchemeOptions,
    };
    use crate::error::ColorError;
    use crate::notation::{Hex, Notation};
    use crate::object::Color;

    fn red() -> Color {
        Color::Hex(Hex::new(0xff, 0, 0))
    }

    fn hues(scheme: &Scheme) -> Vec<crate::Float> {
        scheme
            .colors()
            .expect("sequence scheme expected")
            .iter()
            .map(|color| color.to_hsv().h)
            .collect()
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(
            "mono".parse::<SchemeKind>().unwrap(),
            SchemeKind::Monochromatic
        );
        assert_eq!(
            "split-complement".parse::<SchemeKind>().unwrap(),
            SchemeKind::SplitComplementary
        );
        // Names are case-sensitive.
        assert!(matches!(
            "Mono".parse::<SchemeKind>(),
            Err(ColorError::UnknownScheme(_))
        ));
        assert_eq!(SchemeKind::DoubleComplementary.name(), "double-complementary");
    }

    #[test]
    fn test_monochromatic_lengths() {
        let options = SchemeOptions::default();
        let scheme =
            create_color_scheme(&red(), SchemeKind::Monochromatic, Notation::Hex, &options);
        assert_eq!(scheme.len(), 5);

        // Variants 2 and 3 emit the original plus one point per step.
        for algorithm in [2, 3] {
            let options = SchemeOptions::default().with_algorithm(algorithm);
            let scheme =
                create_color_scheme(&red(), SchemeKind::Monochromatic, Notation::Hex, &options);
            assert_eq!(scheme.len(), 1 + options.distance);
        }

        let options = SchemeOptions::default().with_algorithm(4);
        let scheme =
            create_color_scheme(&red(), SchemeKind::Monochromatic, Notation::Hex, &options);
        assert_eq!(scheme.len(), 5);
    }

    #[test]
    fn test_monochromatic_tints_and_shades() {
        let options = SchemeOptions::default();
        let scheme =
            create_color_scheme(&red(), SchemeKind::Monochromatic, Notation::Hex, &options);
        let colors = scheme.colors().unwrap();

        // tint1 = 0.8 blends red toward white, shade1 = 0.6 toward black.
        assert_eq!(colors[0].to_string(), "#ffcccc");
        assert_eq!(colors[2].to_string(), "#ff0000");
        assert_eq!(colors[3].to_string(), "#990000");
    }

    #[test]
    fn test_complementary() {
        let scheme = create_color_scheme(
            &red(),
            SchemeKind::Complementary,
            Notation::Hex,
            &SchemeOptions::default(),
        );
        assert_eq!(scheme.len(), 2);
        assert_eq!(scheme.colors().unwrap()[1].to_string(), "#00ffff");
    }

    #[test]
    fn test_hue_sequences() {
        let options = SchemeOptions::default();

        let triad = create_color_scheme(&red(), SchemeKind::Triadic, Notation::Hsv, &options);
        assert_eq!(hues(&triad), vec![0.0, 120.0, 240.0]);

        let square = create_color_scheme(&red(), SchemeKind::Square, Notation::Hsv, &options);
        assert_eq!(hues(&square), vec![0.0, 90.0, 180.0, 270.0]);

        let analog = create_color_scheme(&red(), SchemeKind::Analogous, Notation::Hsv, &options);
        assert_eq!(hues(&analog), vec![30.0, 0.0, 330.0]);

        let split = create_color_scheme(
            &red(),
            SchemeKind::SplitComplementary,
            Notation::Hsv,
            &options,
        );
        assert_eq!(hues(&split), vec![150.0, 0.0, 210.0]);

        let double = create_color_scheme(
            &red(),
            SchemeKind::DoubleComplementary,
            Notation::Hsv,
            &options,
        );
        assert_eq!(hues(&double), vec![0.0, 180.0, 210.0, 30.0]);

        let tetrad = create_color_scheme(&red(), SchemeKind::Tetradic, Notation::Hsv, &options);
        assert_eq!(hues(&tetrad), vec![0.0, 180.0, 330.0, 150.0]);
    }

    #[test]
    fn test_sequence_alpha() {
        let options = SchemeOptions::default().with_alpha(0.5);
        let scheme = create_color_scheme(
            &red(),
            SchemeKind::Complementary,
            Notation::Rgba,
            &options,
        );
        for color in scheme.colors().unwrap() {
            assert_eq!(color.alpha(), Some(0.5));
        }
    }

    #[test]
    fn test_material() {
        let scheme = create_color_scheme(
            &red(),
            SchemeKind::Material,
            // The notation is ignored for material schemes.
            Notation::Cmyk,
            &SchemeOptions::default(),
        );
        assert_eq!(scheme.len(), 14);
        let palette = scheme.material().unwrap();

        assert_eq!(palette.get("50"), Some(palette.primary[0]));
        assert_eq!(palette.get("500").unwrap().to_string(), "#ff0000");
        assert_eq!(palette.get("50").unwrap().to_string(), "#ffe6e6");
        assert_eq!(palette.get("A400").unwrap().to_string(), "#ff3333");
        assert_eq!(palette.get("950"), None);

        // A fixed dark anchor replaces the self-multiplied one.
        let options =
            SchemeOptions::default().with_base_dark(BaseDark::Fixed(Color::Hex(Hex::BLACK)));
        let scheme = create_color_scheme(&red(), SchemeKind::Material, Notation::Hex, &options);
        let palette = scheme.material().unwrap();
        // 900 mixes black toward red by 65%.
        assert_eq!(palette.get("900").unwrap().to_string(), "#a60000");
    }

    #[test]
    fn test_material_keys() {
        assert_eq!(MaterialPalette::PRIMARY_KEYS.len(), 10);
        assert_eq!(MaterialPalette::ACCENT_KEYS.len(), 4);
    }

    #[test]
    fn test_scheme_by_name() -> Result<(), ColorError> {
        let scheme = color_scheme(
            &red(),
            "comp",
            Notation::Hex,
            &SchemeOptions::default(),
        )?;
        assert_eq!(scheme.len(), 2);

        assert!(matches!(
            color_scheme(&red(), "nope", Notation::Hex, &SchemeOptions::default()),
            Err(ColorError::UnknownScheme(_))
        ));
        Ok(())
    }
}
