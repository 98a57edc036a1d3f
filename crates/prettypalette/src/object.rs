use crate::core::{
    cmyk_to_rgb, gray_level, hex_to_rgb, hsl_to_hsv, hsv_to_hsl, hsv_to_rgb, rgb_to_cmyk,
    rgb_to_hex, rgb_to_hsv, rgb_to_websafe, round_half_up, shift_hue, unit, yiq_luminance,
};
use crate::error::ColorError;
use crate::notation::{Cmyk, Hex, Hsl, Hsla, Hsv, Notation, Rgb, Rgba};
use crate::Float;

use rand::Rng;

/// A color in one of the seven notations.
///
/// Every color carries exactly one [`Notation`] as its discriminant and the
/// corresponding value type as payload. Conversions and derivations never
/// mutate their receiver; they return fresh values.
///
/// # Conversion
///
/// RGB is the pivot: [`Color::to_rgb`] has a direct formula from every
/// variant, and the remaining conversions route through it. On typed values
/// conversion is infallible; only string inputs can fail, when parsing.
///
/// # Derivation
///
/// The derivation methods ([`lighten`](Color::lighten),
/// [`darken`](Color::darken), [`saturate`](Color::saturate),
/// [`spin`](Color::spin), [`hue_shift`](Color::hue_shift),
/// [`brighten`](Color::brighten), [`grayscale`](Color::grayscale),
/// [`shade`](Color::shade), and [`websafe`](Color::websafe)) preserve their
/// receiver's notation, converting the result back before returning. An
/// existing alpha channel travels along where the operation's contract says
/// so. [`mix`](Color::mix) and [`multiply`](Color::multiply) always produce
/// hexadecimal colors instead.
///
/// ```
/// # use prettypalette::Color;
/// let red: Color = "#ff0000".parse().unwrap();
/// assert_eq!(red.hue_shift(120.0).to_string(), "#00ff00");
/// assert_eq!(red.lighten(20.0).to_string(), "#ff6666");
/// assert_eq!(red.grayscale().to_string(), "#363636");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Color {
    Hex(Hex),
    Rgb(Rgb),
    Rgba(Rgba),
    Hsv(Hsv),
    Hsl(Hsl),
    Hsla(Hsla),
    Cmyk(Cmyk),
}

impl Color {
    /// Parse the string into a color.
    ///
    /// Parsing resolves palette names, accepts the hexadecimal shorthand,
    /// and dispatches the functional notations permissively; see the crate
    /// documentation for the exact grammar. [`Notation::detect`] is the
    /// strict counterpart.
    ///
    /// ```
    /// # use prettypalette::{Color, Rgba};
    /// let smoke = Color::parse("rgba(0,0,0,.2)").unwrap();
    /// assert_eq!(smoke, Color::Rgba(Rgba::new(0.0, 0.0, 0.0, 0.2)));
    /// ```
    pub fn parse(s: &str) -> Result<Color, ColorError> {
        crate::core::parse(s)
    }

    /// Parse the string into a color in the given notation, falling back to
    /// black for unparseable input.
    pub fn create(notation: Notation, from: &str) -> Color {
        Color::parse(from)
            .unwrap_or_default()
            .to_notation(notation, None)
    }

    /// Create a random color in hexadecimal notation, with each channel
    /// drawn uniformly from `0..=255`.
    pub fn random() -> Color {
        let mut rng = rand::rng();
        Color::Hex(Hex::new(
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
        ))
    }

    /// Create a random color in the given notation.
    pub fn random_in(notation: Notation, alpha: Float) -> Color {
        Self::random().to_notation(notation, Some(alpha))
    }

    /// Get this color's notation.
    pub const fn notation(&self) -> Notation {
        match self {
            Color::Hex(_) => Notation::Hex,
            Color::Rgb(_) => Notation::Rgb,
            Color::Rgba(_) => Notation::Rgba,
            Color::Hsv(_) => Notation::Hsv,
            Color::Hsl(_) => Notation::Hsl,
            Color::Hsla(_) => Notation::Hsla,
            Color::Cmyk(_) => Notation::Cmyk,
        }
    }

    /// Get this color's alpha channel, if its notation carries one.
    pub const fn alpha(&self) -> Option<Float> {
        match self {
            Color::Rgba(c) => Some(c.a),
            Color::Hsla(c) => Some(c.a),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------------------------------ conversions

    /// Convert this color to RGB, the pivot notation.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(c) => *c,
            Color::Rgba(c) => Rgb::new(c.r, c.g, c.b),
            Color::Hsv(c) => hsv_to_rgb(c),
            Color::Hsl(c) => hsv_to_rgb(&hsl_to_hsv(c)),
            Color::Hsla(c) => hsv_to_rgb(&hsl_to_hsv(&Hsl::new(c.h, c.s, c.l))),
            Color::Hex(c) => hex_to_rgb(c),
            Color::Cmyk(c) => cmyk_to_rgb(c),
        }
    }

    /// Convert this color to RGBA.
    ///
    /// For an RGBA receiver, `alpha` overrides the existing channel when
    /// given. For every other notation, a carried alpha wins over the
    /// `alpha` argument and the default is fully opaque.
    pub fn to_rgba(&self, alpha: Option<Float>) -> Rgba {
        if let Color::Rgba(c) = *self {
            return Rgba {
                a: alpha.unwrap_or(c.a),
                ..c
            };
        }

        let rgb = self.to_rgb();
        let a = self.alpha().or(alpha).unwrap_or(1.0);
        Rgba::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Convert this color to HSV.
    pub fn to_hsv(&self) -> Hsv {
        if let Color::Hsv(c) = *self {
            c
        } else {
            rgb_to_hsv(&self.to_rgb())
        }
    }

    /// Convert this color to HSL.
    ///
    /// Any notation other than HSL itself pivots through RGB and HSV; in
    /// particular, HSLA values take the full route rather than just
    /// dropping their alpha channel.
    pub fn to_hsl(&self) -> Hsl {
        if let Color::Hsl(c) = *self {
            c
        } else {
            hsv_to_hsl(&rgb_to_hsv(&self.to_rgb()))
        }
    }

    /// Convert this color to HSLA, with the same alpha handling as
    /// [`Color::to_rgba`].
    pub fn to_hsla(&self, alpha: Option<Float>) -> Hsla {
        if let Color::Hsla(c) = *self {
            return Hsla {
                a: alpha.unwrap_or(c.a),
                ..c
            };
        }

        let hsl = hsv_to_hsl(&rgb_to_hsv(&self.to_rgb()));
        let a = self.alpha().or(alpha).unwrap_or(1.0);
        Hsla::new(hsl.h, hsl.s, hsl.l, a)
    }

    /// Convert this color to CMYK.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let red: Color = "#ff0000".parse().unwrap();
    /// assert_eq!(red.to_cmyk().to_string(), "cmyk(0,100,100,0)");
    /// ```
    pub fn to_cmyk(&self) -> Cmyk {
        if let Color::Cmyk(c) = *self {
            c
        } else {
            rgb_to_cmyk(&self.to_rgb())
        }
    }

    /// Convert this color to hashed hexadecimal.
    pub fn to_hex(&self) -> Hex {
        if let Color::Hex(c) = *self {
            c
        } else {
            rgb_to_hex(&self.to_rgb())
        }
    }

    /// Convert this color to the given notation.
    ///
    /// The `alpha` argument feeds the alpha-carrying notations and is
    /// ignored by the others.
    pub fn to_notation(&self, notation: Notation, alpha: Option<Float>) -> Color {
        match notation {
            Notation::Hex => Color::Hex(self.to_hex()),
            Notation::Rgb => Color::Rgb(self.to_rgb()),
            Notation::Rgba => Color::Rgba(self.to_rgba(alpha)),
            Notation::Hsv => Color::Hsv(self.to_hsv()),
            Notation::Hsl => Color::Hsl(self.to_hsl()),
            Notation::Hsla => Color::Hsla(self.to_hsla(alpha)),
            Notation::Cmyk => Color::Cmyk(self.to_cmyk()),
        }
    }

    /// Snap this color onto the legacy websafe grid, preserving its
    /// notation.
    ///
    /// HSL results land back in HSL via HSV; RGBA keeps its alpha; HSLA
    /// values pass through unchanged.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let color: Color = "#123456".parse().unwrap();
    /// assert_eq!(color.websafe().to_string(), "#003366");
    /// ```
    pub fn websafe(&self) -> Color {
        match *self {
            Color::Hex(c) => Color::Hex(rgb_to_hex(&rgb_to_websafe(&hex_to_rgb(&c)))),
            Color::Rgb(c) => Color::Rgb(rgb_to_websafe(&c)),
            Color::Rgba(c) => {
                let safe = rgb_to_websafe(&Rgb::new(c.r, c.g, c.b));
                Color::Rgba(Rgba::new(safe.r, safe.g, safe.b, c.a))
            }
            Color::Hsv(_) => Color::Hsv(rgb_to_hsv(&rgb_to_websafe(&self.to_rgb()))),
            Color::Hsl(_) => Color::Hsl(hsv_to_hsl(&rgb_to_hsv(&rgb_to_websafe(&self.to_rgb())))),
            Color::Hsla(_) => *self,
            Color::Cmyk(c) => Color::Cmyk(rgb_to_cmyk(&rgb_to_websafe(&cmyk_to_rgb(&c)))),
        }
    }

    // ------------------------------------------------------------------------------------------------ derivations

    /// Lighten this color by the given percent of lightness.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let red: Color = "#ff0000".parse().unwrap();
    /// assert_eq!(red.lighten(20.0).to_string(), "#ff6666");
    /// ```
    pub fn lighten(&self, amount: Float) -> Color {
        let mut hsla = self.to_hsla(None);
        hsla.l = unit(hsla.l + amount / 100.0);
        Color::Hsla(hsla).to_notation(self.notation(), None)
    }

    /// Darken this color by the given percent of lightness.
    pub fn darken(&self, amount: Float) -> Color {
        self.lighten(-amount.abs())
    }

    /// Increase this color's saturation by the given percent.
    pub fn saturate(&self, amount: Float) -> Color {
        let mut hsla = self.to_hsla(None);
        hsla.s = unit(hsla.s + amount / 100.0);
        Color::Hsla(hsla).to_notation(self.notation(), None)
    }

    /// Decrease this color's saturation by the given percent.
    pub fn desaturate(&self, amount: Float) -> Color {
        self.saturate(-amount.abs())
    }

    /// Rotate this color on the color wheel by the given angle, in HSL
    /// space.
    pub fn spin(&self, amount: Float) -> Color {
        let alpha = self.alpha();
        let mut hsl = self.to_hsl();
        hsl.h = shift_hue(hsl.h, amount);
        Color::Hsl(hsl).to_notation(self.notation(), alpha)
    }

    /// Rotate this color on the color wheel by the given angle, in HSV
    /// space.
    ///
    /// The result carries a fully opaque alpha channel when its notation
    /// has one; unlike [`Color::spin`], an existing alpha does not travel
    /// along.
    pub fn hue_shift(&self, angle: Float) -> Color {
        let mut hsv = self.to_hsv();
        hsv.h = shift_hue(hsv.h, angle);
        Color::Hsv(hsv).to_notation(self.notation(), Some(1.0))
    }

    /// Brighten this color by the given percent of HSV value.
    pub fn brighten(&self, amount: Float) -> Color {
        let alpha = self.alpha().unwrap_or(1.0);
        let mut hsv = self.to_hsv();
        hsv.v = unit(hsv.v + amount / 100.0);
        Color::Hsv(hsv).to_notation(self.notation(), Some(alpha))
    }

    /// Replace this color with its gray point.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let red: Color = "#ff0000".parse().unwrap();
    /// assert_eq!(red.grayscale().to_string(), "#363636");
    /// ```
    pub fn grayscale(&self) -> Color {
        let rgb = self.to_rgb();
        let gray = gray_level(&rgb);
        Color::Rgb(Rgb::new(gray, gray, gray)).to_notation(self.notation(), None)
    }

    /// Blend this color toward white (positive amount) or black (negative
    /// amount) by the given percent.
    pub fn shade(&self, amount: Float) -> Color {
        let amount = amount / 100.0;
        let rgb = self.to_rgb();
        let target = if amount < 0.0 { 0.0 } else { 255.0 };
        let p = amount.abs();

        let shaded = Rgb::new(
            round_half_up((target - rgb.r) * p) + rgb.r,
            round_half_up((target - rgb.g) * p) + rgb.g,
            round_half_up((target - rgb.b) * p) + rgb.b,
        );
        Color::Rgb(shaded).to_notation(self.notation(), self.alpha())
    }

    /// Mix this color toward the other color by the given percent.
    ///
    /// The result is always hexadecimal, regardless of the operands'
    /// notations.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let red: Color = "#ff0000".parse().unwrap();
    /// let blue: Color = "#0000ff".parse().unwrap();
    /// assert_eq!(red.mix(&blue, 50.0).to_string(), "#800080");
    /// ```
    pub fn mix(&self, other: &Color, amount: Float) -> Hex {
        let rgb1 = self.to_rgb();
        let rgb2 = other.to_rgb();
        let p = amount / 100.0;

        rgb_to_hex(&Rgb::new(
            ((rgb2.r - rgb1.r) * p + rgb1.r).round(),
            ((rgb2.g - rgb1.g) * p + rgb1.g).round(),
            ((rgb2.b - rgb1.b) * p + rgb1.b).round(),
        ))
    }

    /// Multiply this color with the other color channel by channel.
    ///
    /// The result is always hexadecimal.
    pub fn multiply(&self, other: &Color) -> Hex {
        let rgb1 = self.to_rgb();
        let rgb2 = other.to_rgb();

        rgb_to_hex(&Rgb::new(
            (rgb1.r * rgb2.r / 255.0).floor(),
            (rgb1.g * rgb2.g / 255.0).floor(),
            (rgb1.b * rgb2.b / 255.0).floor(),
        ))
    }

    /// Average this color with the other color channel by channel,
    /// including alpha, and convert the result to the given notation.
    pub fn add(&self, other: &Color, notation: Notation) -> Color {
        let c1 = self.to_rgba(None);
        let c2 = other.to_rgba(None);

        let sum = Rgba::new(
            ((c1.r + c2.r) / 2.0).round(),
            ((c1.g + c2.g) / 2.0).round(),
            ((c1.b + c2.b) / 2.0).round(),
            ((c1.a + c2.a) / 2.0).round(),
        );
        Color::Rgba(sum).to_notation(notation, Some(sum.a))
    }

    // ------------------------------------------------------------------------------------------------ predicates

    /// Determine whether this color is visually dark, i.e., has a YIQ
    /// luminance below 128.
    pub fn is_dark(&self) -> bool {
        yiq_luminance(&self.to_rgb()) < 128.0
    }

    /// Determine whether this color is visually light.
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Determine whether the two colors are the same color, comparing their
    /// hexadecimal forms exactly.
    ///
    /// Unlike `==`, this compares across notations.
    ///
    /// ```
    /// # use prettypalette::Color;
    /// let hex: Color = "#000000".parse().unwrap();
    /// let rgb: Color = "rgb(0,0,0)".parse().unwrap();
    /// assert!(hex.equals(&rgb));
    /// ```
    pub fn equals(&self, other: &Color) -> bool {
        self.to_hex() == other.to_hex()
    }
}

// ====================================================================================================================

impl Default for Color {
    /// Create the default color, black in hexadecimal notation.
    fn default() -> Self {
        Color::Hex(Hex::BLACK)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl std::fmt::Display for Color {
    /// Format this color in its notation's canonical serialization.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Color::Hex(c) => c.fmt(f),
            Color::Rgb(c) => c.fmt(f),
            Color::Rgba(c) => c.fmt(f),
            Color::Hsv(c) => c.fmt(f),
            Color::Hsl(c) => c.fmt(f),
            Color::Hsla(c) => c.fmt(f),
            Color::Cmyk(c) => c.fmt(f),
        }
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Color::Rgba(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Color::Hsv(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl From<Hsla> for Color {
    fn from(value: Hsla) -> Self {
        Color::Hsla(value)
    }
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Color::Cmyk(value)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, ColorError, Notation};
    use crate::notation::{Hex, Hsl, Hsla, Hsv, Rgb, Rgba};

    #[test]
    fn test_parse_round_trips() -> Result<(), ColorError> {
        assert_eq!(Color::parse("#0ff")?.to_string(), "#00ffff");
        assert_eq!(Color::parse("#00ff00")?.to_rgb(), Rgb::new(0.0, 255.0, 0.0));
        assert_eq!(
            Color::parse("rgba(0,0,0,.2)")?,
            Color::Rgba(Rgba::new(0.0, 0.0, 0.0, 0.2))
        );
        assert_eq!(Color::parse("rgb(0,0,0)")?.to_hex(), Hex::BLACK);
        Ok(())
    }

    #[test]
    fn test_conversion_targets() -> Result<(), ColorError> {
        let red = Color::parse("#ff0000")?;
        assert_eq!(red.to_rgb().to_string(), "rgb(255,0,0)");
        assert_eq!(red.to_rgba(Some(0.5)).to_string(), "rgba(255,0,0,0.5)");
        assert_eq!(red.to_hsv(), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(red.to_hsl(), Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(red.to_hsla(Some(0.5)).a, 0.5);
        assert_eq!(red.to_cmyk().m, 100.0);
        assert_eq!(
            red.to_notation(Notation::Rgb, None),
            Color::Rgb(Rgb::new(255.0, 0.0, 0.0))
        );
        Ok(())
    }

    #[test]
    fn test_alpha_propagation() {
        let translucent = Color::Rgba(Rgba::new(255.0, 0.0, 0.0, 0.3));
        // A carried alpha wins over the argument on the cross-notation path.
        assert_eq!(translucent.to_hsla(Some(0.9)).a, 0.3);
        // Lighten keeps the channel; hue_shift resets it to opaque.
        assert_eq!(translucent.lighten(10.0).alpha(), Some(0.3));
        assert_eq!(translucent.hue_shift(40.0).alpha(), Some(1.0));
        // Spin carries it along.
        assert_eq!(translucent.spin(90.0).alpha(), Some(0.3));
    }

    #[test]
    fn test_lighten_darken() -> Result<(), ColorError> {
        let red = Color::parse("#ff0000")?;
        assert_eq!(red.lighten(20.0).to_string(), "#ff6666");
        assert_eq!(red.darken(20.0).to_string(), "#990000");
        // Darkening by a negative amount still darkens.
        assert_eq!(red.darken(-20.0).to_string(), "#990000");
        // Lightness saturates at the ends of its range.
        assert_eq!(red.lighten(1000.0).to_string(), "#ffffff");
        assert_eq!(red.darken(1000.0).to_string(), "#000000");
        Ok(())
    }

    #[test]
    fn test_saturation() {
        let gray = Color::Hsl(Hsl::new(0.0, 0.5, 0.5));
        let more = gray.saturate(20.0);
        let less = gray.desaturate(20.0);
        let Color::Hsl(more) = more else {
            panic!("saturate should preserve notation, got {:?}", more);
        };
        let Color::Hsl(less) = less else {
            panic!("desaturate should preserve notation, got {:?}", less);
        };
        assert!(more.s > 0.5, "saturation {} should exceed 0.5", more.s);
        assert!(less.s < 0.5, "saturation {} should fall below 0.5", less.s);
    }

    #[test]
    fn test_hue_rotation() -> Result<(), ColorError> {
        assert_eq!(Color::parse("#ff0000")?.hue_shift(120.0).to_string(), "#00ff00");
        assert_eq!(Color::parse("#ff0000")?.hue_shift(-120.0).to_string(), "#0000ff");

        let teal = Color::Hsl(Hsl::new(0.0, 1.0, 0.5)).spin(90.0);
        assert_eq!(teal.to_hsl().h, 90.0);

        // A full rotation is the identity on the hue.
        for hue in [0.0, 42.0, 359.0] {
            let color = Color::Hsl(Hsl::new(hue, 1.0, 0.5));
            assert_eq!(color.spin(360.0).to_hsl().h, hue);
        }
        Ok(())
    }

    #[test]
    fn test_brighten() {
        let maroon = Color::Rgb(Rgb::new(128.0, 0.0, 0.0));
        let Color::Rgb(brighter) = maroon.brighten(20.0) else {
            panic!("brighten should preserve notation");
        };
        assert!(brighter.r > 128.0, "channel {} should grow", brighter.r);
    }

    #[test]
    fn test_grayscale() -> Result<(), ColorError> {
        assert_eq!(Color::parse("#ff0000")?.grayscale().to_string(), "#363636");
        // Notation is preserved.
        let gray = Color::Rgb(Rgb::new(255.0, 0.0, 0.0)).grayscale();
        assert_eq!(gray, Color::Rgb(Rgb::new(54.0, 54.0, 54.0)));
        Ok(())
    }

    #[test]
    fn test_shade() -> Result<(), ColorError> {
        assert_eq!(Color::parse("#ff0000")?.shade(50.0).to_string(), "#ff8080");
        assert_eq!(Color::parse("#ff0000")?.shade(-50.0).to_string(), "#800000");
        Ok(())
    }

    #[test]
    fn test_mix_multiply_add() -> Result<(), ColorError> {
        let red = Color::parse("#ff0000")?;
        let blue = Color::parse("#0000ff")?;
        assert_eq!(red.mix(&blue, 50.0).to_string(), "#800080");
        assert_eq!(red.mix(&blue, 0.0).to_string(), "#ff0000");
        assert_eq!(red.mix(&blue, 100.0).to_string(), "#0000ff");

        assert_eq!(red.multiply(&blue).to_string(), "#000000");
        let gray = Color::parse("#808080")?;
        assert_eq!(gray.multiply(&gray).to_string(), "#404040");

        assert_eq!(
            red.add(&blue, Notation::Rgb),
            Color::Rgb(Rgb::new(128.0, 0.0, 128.0))
        );
        Ok(())
    }

    #[test]
    fn test_websafe() -> Result<(), ColorError> {
        let snapped = Color::parse("#123456")?.websafe();
        assert_eq!(snapped.to_string(), "#003366");
        // Snapping is idempotent.
        assert_eq!(snapped.websafe(), snapped);

        let rgba = Color::Rgba(Rgba::new(18.0, 52.0, 86.0, 0.4)).websafe();
        assert_eq!(rgba, Color::Rgba(Rgba::new(0.0, 51.0, 102.0, 0.4)));

        // HSLA values pass through untouched.
        let hsla = Color::Hsla(Hsla::new(10.0, 0.5, 0.5, 0.5));
        assert_eq!(hsla.websafe(), hsla);
        Ok(())
    }

    #[test]
    fn test_predicates() -> Result<(), ColorError> {
        assert!(Color::parse("#000000")?.is_dark());
        assert!(Color::parse("#ffffff")?.is_light());

        assert!(Color::parse("#000000")?.equals(&Color::parse("rgb(0,0,0)")?));
        assert!(!Color::parse("#000000")?.equals(&Color::parse("#000001")?));
        Ok(())
    }

    #[test]
    fn test_random() {
        for _ in 0..8 {
            let color = Color::random();
            assert_eq!(color.notation(), Notation::Hex);

            let rgba = Color::random_in(Notation::Rgba, 0.5);
            assert_eq!(rgba.alpha(), Some(0.5));
        }
    }

    #[test]
    fn test_create_falls_back_to_black() {
        assert_eq!(
            Color::create(Notation::Rgb, "later-gator"),
            Color::Rgb(Rgb::new(0.0, 0.0, 0.0))
        );
        assert_eq!(
            Color::create(Notation::Hex, "rgb(255,0,0)"),
            Color::Hex(Hex::new(255, 0, 0))
        );
    }
}
