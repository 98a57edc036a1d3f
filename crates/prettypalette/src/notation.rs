//! The seven color notations and their value types.
//!
//! Each notation has a dedicated value type with a zero-default constructor
//! and a canonical string serialization. The types do not validate or clamp
//! their components; operations clamp and round exactly where their contract
//! requires it. [`Notation`] tags the seven kinds and doubles as the strict
//! string format detector.

use crate::error::ColorError;
use crate::Float;

/// The seven supported color notations.
///
/// The [`UNKNOWN`](Notation::detect) case of detection is expressed as
/// `None`, not as an eighth variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Hashed hexadecimal, e.g., `#663399`.
    Hex,
    /// `rgb(r,g,b)` with channels nominally `0..=255`.
    Rgb,
    /// `rgba(r,g,b,a)` with alpha nominally `0..=1`.
    Rgba,
    /// `hsv(h, s%, v%)` with the hue on the color wheel.
    Hsv,
    /// `hsl(h, s%, l%)`.
    Hsl,
    /// `hsla(h, s%, l%, a)`.
    Hsla,
    /// `cmyk(c,m,y,k)` with components nominally `0..=100`.
    Cmyk,
}

impl Notation {
    /// Get this notation's lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "rgb",
            Notation::Rgba => "rgba",
            Notation::Hsv => "hsv",
            Notation::Hsl => "hsl",
            Notation::Hsla => "hsla",
            Notation::Cmyk => "cmyk",
        }
    }

    /// Determine whether values in this notation carry an alpha channel.
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Notation::Rgba | Notation::Hsla)
    }

    /// Detect the notation of the given string.
    ///
    /// Detection applies the strict format grammar: exact function names and
    /// punctuation, integer components for RGB/HSV/HSL/CMYK, and an alpha
    /// component between 0 and 1 written with a leading digit. Candidates
    /// are checked in the fixed priority order HEX, RGB, RGBA, HSV, HSL,
    /// HSLA, CMYK; no match is `None`.
    ///
    /// Detection is deliberately stricter than
    /// [`Color::parse`](crate::Color::parse), which accepts, e.g.,
    /// percent-suffixed and fractional components.
    ///
    /// ```
    /// # use prettypalette::Notation;
    /// assert_eq!(Notation::detect("#0f0"), Some(Notation::Hex));
    /// assert_eq!(Notation::detect("rgb(0, 128, 255)"), Some(Notation::Rgb));
    /// assert_eq!(Notation::detect("rgba(0,0,0,1.5)"), None);
    /// assert_eq!(Notation::detect("later-gator"), None);
    /// ```
    pub fn detect(s: &str) -> Option<Notation> {
        crate::core::detect(s)
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Notation {
    type Err = ColorError;

    /// Resolve a lowercase notation name, e.g., for string-driven
    /// conversion.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Notation::Hex),
            "rgb" => Ok(Notation::Rgb),
            "rgba" => Ok(Notation::Rgba),
            "hsv" => Ok(Notation::Hsv),
            "hsl" => Ok(Notation::Hsl),
            "hsla" => Ok(Notation::Hsla),
            "cmyk" => Ok(Notation::Cmyk),
            _ => Err(ColorError::UnknownNotation(s.to_string())),
        }
    }
}

// ====================================================================================================================

/// A 24-bit color in hashed hexadecimal notation.
///
/// In the textual notations, hexadecimal colors are strings; as a value,
/// this type stores the three decoded bytes. [`FromStr`](std::str::FromStr)
/// accepts the three-digit shorthand, expanding each digit by duplication,
/// and tolerates a missing `#`. [`Display`](std::fmt::Display) always
/// produces the canonical lowercase six-digit form.
///
/// ```
/// # use prettypalette::Hex;
/// let rebecca: Hex = "#639".parse().unwrap();
/// assert_eq!(rebecca, Hex::new(0x66, 0x33, 0x99));
/// assert_eq!(rebecca.to_string(), "#663399");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hex([u8; 3]);

impl Hex {
    /// Black, the default color.
    pub const BLACK: Hex = Hex([0, 0, 0]);

    /// White, the default light anchor for material schemes.
    pub const WHITE: Hex = Hex([0xff, 0xff, 0xff]);

    /// Create a new hexadecimal color from its three bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl AsRef<[u8; 3]> for Hex {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Hex {
    type Output = u8;

    /// Access the byte with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Hex {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Hex> for [u8; 3] {
    fn from(value: Hex) -> Self {
        value.0
    }
}

impl std::str::FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parse_hex(s)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "#{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2]
        ))
    }
}

// ====================================================================================================================

/// An RGB color with channels nominally `0..=255`.
///
/// Channels are floating point so that out-of-range and fractional
/// intermediates remain representable; conversions round and clamp on their
/// own terms. The canonical serialization is `rgb(r,g,b)` without spaces.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("rgb({},{},{})", self.r, self.g, self.b))
    }
}

// ====================================================================================================================

/// An RGB color with an alpha channel nominally `0..=1`.
///
/// This type has two serializers: the canonical compact form
/// `rgba(r,g,b,a)` with the alpha printed as given, and the alternate form
/// `rgba(r, g, b, a)` with spaces and the alpha at exactly two decimals.
///
/// ```
/// # use prettypalette::Rgba;
/// let smoke = Rgba::new(245.0, 245.0, 245.0, 0.5);
/// assert_eq!(smoke.to_string(), "rgba(245,245,245,0.5)");
/// assert_eq!(format!("{:#}", smoke), "rgba(245, 245, 245, 0.50)");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub a: Float,
}

impl Rgba {
    /// Create a new RGB color with alpha.
    pub const fn new(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgb> for Rgba {
    /// Convert an RGB color by adding a fully opaque alpha channel.
    fn from(value: Rgb) -> Self {
        Self::new(value.r, value.g, value.b, 1.0)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if f.alternate() {
            f.write_fmt(format_args!(
                "rgba({}, {}, {}, {:.2})",
                self.r, self.g, self.b, self.a
            ))
        } else {
            f.write_fmt(format_args!(
                "rgba({},{},{},{})",
                self.r, self.g, self.b, self.a
            ))
        }
    }
}

// ====================================================================================================================

/// An HSV color with the hue in degrees and saturation and value nominally
/// `0..=1`.
///
/// The hue wraps on the color wheel. Constructors accept raw, including
/// out-of-range, hues; operations that compute a new hue normalize into
/// `0..360`. The serialization rounds the hue to an integer and saturation
/// and value to integer percents.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
}

impl Hsv {
    /// Create a new HSV color.
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v }
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "hsv({}, {}%, {}%)",
            self.h.round(),
            (self.s * 100.0).round(),
            (self.v * 100.0).round()
        ))
    }
}

// ====================================================================================================================

/// An HSL color with the hue in degrees and saturation and lightness
/// nominally `0..=1`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "hsl({}, {}%, {}%)",
            self.h.round(),
            (self.s * 100.0).round(),
            (self.l * 100.0).round()
        ))
    }
}

// ====================================================================================================================

/// An HSL color with an alpha channel.
///
/// The serialization prints the alpha at exactly two decimals, e.g.,
/// `hsla(120, 50%, 50%, 0.50)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hsla {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    pub a: Float,
}

impl Hsla {
    /// Create a new HSL color with alpha.
    pub const fn new(h: Float, s: Float, l: Float, a: Float) -> Self {
        Self { h, s, l, a }
    }
}

impl From<Hsl> for Hsla {
    /// Convert an HSL color by adding a fully opaque alpha channel.
    fn from(value: Hsl) -> Self {
        Self::new(value.h, value.s, value.l, 1.0)
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "hsla({}, {}%, {}%, {:.2})",
            self.h.round(),
            (self.s * 100.0).round(),
            (self.l * 100.0).round(),
            self.a
        ))
    }
}

// ====================================================================================================================

/// A CMYK color with components as percents nominally `0..=100`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cmyk {
    pub c: Float,
    pub m: Float,
    pub y: Float,
    pub k: Float,
}

impl Cmyk {
    /// Create a new CMYK color.
    pub const fn new(c: Float, m: Float, y: Float, k: Float) -> Self {
        Self { c, m, y, k }
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "cmyk({},{},{},{})",
            self.c, self.m, self.y, self.k
        ))
    }
}

// ====================================================================================================================
