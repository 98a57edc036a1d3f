//! Utility module with the owned-value color holder.

use crate::error::ColorError;
use crate::notation::{Cmyk, Hex, Hsl, Hsla, Hsv, Notation, Rgb, Rgba};
use crate::object::Color;
use crate::scheme::{color_scheme, create_color_scheme, Scheme, SchemeKind, SchemeOptions};
use crate::Float;

/// An editable color channel across the notations.
///
/// Editing a channel converts the held color into the channel's home
/// notation, sets the field, and converts back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Hue,
    Saturation,
    Value,
    Lightness,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

/// A mutable color behind a single owned handle.
///
/// A swatch holds one current [`Color`] together with the
/// [`SchemeOptions`] used for schemes and default alphas. Every mutator
/// delegates to the engine, replaces the held value, and returns `&mut
/// Self` for chaining; the getters convert without mutating. There is no
/// aliasing between the two: getters hand out fresh values.
///
/// ```
/// # use prettypalette::Swatch;
/// let mut swatch = Swatch::parse("#ff0000").unwrap();
/// swatch.darken(20.0).hue_shift(120.0);
/// assert_eq!(swatch.hex().to_string(), "#009900");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    value: Color,
    options: SchemeOptions,
}

impl Default for Swatch {
    /// Create a black swatch with default options.
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl Swatch {
    /// Create a new swatch holding the given color.
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            value: color.into(),
            options: SchemeOptions::default(),
        }
    }

    /// Parse the string into a new swatch.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        Ok(Self::new(Color::parse(s)?))
    }

    /// Use the given options for schemes and default alphas.
    pub fn with_options(mut self, options: SchemeOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the held color.
    pub fn value(&self) -> Color {
        self.value
    }

    /// Replace the held color.
    pub fn set_value(&mut self, color: impl Into<Color>) -> &mut Self {
        self.value = color.into();
        self
    }

    /// Get the options.
    pub fn options(&self) -> &SchemeOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: SchemeOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Get the held color's notation.
    pub fn notation(&self) -> Notation {
        self.value.notation()
    }

    // --------------------------------------------------------------------------------------------------- getters

    /// Get the held color in hexadecimal notation.
    pub fn hex(&self) -> Hex {
        self.value.to_hex()
    }

    /// Get the held color in RGB notation.
    pub fn rgb(&self) -> Rgb {
        self.value.to_rgb()
    }

    /// Get the held color in RGBA notation, defaulting the alpha channel
    /// from the options.
    pub fn rgba(&self) -> Rgba {
        match self.value {
            Color::Rgba(c) => c,
            _ => self.value.to_rgba(Some(self.options.alpha)),
        }
    }

    /// Get the held color in HSV notation.
    pub fn hsv(&self) -> Hsv {
        self.value.to_hsv()
    }

    /// Get the held color in HSL notation.
    pub fn hsl(&self) -> Hsl {
        self.value.to_hsl()
    }

    /// Get the held color in HSLA notation, defaulting the alpha channel
    /// from the options.
    pub fn hsla(&self) -> Hsla {
        match self.value {
            Color::Hsla(c) => c,
            _ => self.value.to_hsla(Some(self.options.alpha)),
        }
    }

    /// Get the held color in CMYK notation.
    pub fn cmyk(&self) -> Cmyk {
        self.value.to_cmyk()
    }

    /// Get the held color snapped onto the websafe grid.
    pub fn websafe(&self) -> Color {
        self.value.websafe()
    }

    // ------------------------------------------------------------------------------------------------ converters

    /// Convert the held color to hexadecimal notation.
    pub fn to_hex(&mut self) -> &mut Self {
        self.value = Color::Hex(self.value.to_hex());
        self
    }

    /// Convert the held color to RGB notation.
    pub fn to_rgb(&mut self) -> &mut Self {
        self.value = Color::Rgb(self.value.to_rgb());
        self
    }

    /// Convert the held color to RGBA notation.
    ///
    /// Without an override, a held RGBA value keeps its alpha channel and
    /// any other value defaults the channel from the options.
    pub fn to_rgba(&mut self, alpha: Option<Float>) -> &mut Self {
        self.value = match self.value {
            Color::Rgba(_) if alpha.is_none() => self.value,
            Color::Rgba(_) => Color::Rgba(self.value.to_rgba(alpha)),
            _ => Color::Rgba(self.value.to_rgba(alpha.or(Some(self.options.alpha)))),
        };
        self
    }

    /// Convert the held color to HSV notation.
    pub fn to_hsv(&mut self) -> &mut Self {
        self.value = Color::Hsv(self.value.to_hsv());
        self
    }

    /// Convert the held color to HSL notation.
    pub fn to_hsl(&mut self) -> &mut Self {
        self.value = Color::Hsl(self.value.to_hsl());
        self
    }

    /// Convert the held color to HSLA notation, with the same alpha
    /// handling as [`Swatch::to_rgba`].
    pub fn to_hsla(&mut self, alpha: Option<Float>) -> &mut Self {
        self.value = match self.value {
            Color::Hsla(_) if alpha.is_none() => self.value,
            Color::Hsla(_) => Color::Hsla(self.value.to_hsla(alpha)),
            _ => Color::Hsla(self.value.to_hsla(alpha.or(Some(self.options.alpha)))),
        };
        self
    }

    /// Convert the held color to CMYK notation.
    pub fn to_cmyk(&mut self) -> &mut Self {
        self.value = Color::Cmyk(self.value.to_cmyk());
        self
    }

    /// Snap the held color onto the websafe grid in place.
    pub fn to_websafe(&mut self) -> &mut Self {
        self.value = self.value.websafe();
        self
    }

    // -------------------------------------------------------------------------------------------------- mutators

    /// Lighten the held color by the given percent.
    pub fn lighten(&mut self, amount: Float) -> &mut Self {
        self.value = self.value.lighten(amount);
        self
    }

    /// Darken the held color by the given percent.
    pub fn darken(&mut self, amount: Float) -> &mut Self {
        self.value = self.value.darken(amount);
        self
    }

    /// Increase the held color's saturation by the given percent.
    pub fn saturate(&mut self, amount: Float) -> &mut Self {
        self.value = self.value.saturate(amount);
        self
    }

    /// Decrease the held color's saturation by the given percent.
    pub fn desaturate(&mut self, amount: Float) -> &mut Self {
        self.value = self.value.desaturate(amount);
        self
    }

    /// Rotate the held color on the color wheel in HSL space.
    pub fn spin(&mut self, amount: Float) -> &mut Self {
        self.value = self.value.spin(amount);
        self
    }

    /// Rotate the held color on the color wheel in HSV space.
    pub fn hue_shift(&mut self, angle: Float) -> &mut Self {
        self.value = self.value.hue_shift(angle);
        self
    }

    /// Brighten the held color by the given percent.
    pub fn brighten(&mut self, amount: Float) -> &mut Self {
        self.value = self.value.brighten(amount);
        self
    }

    /// Replace the held color with its gray point.
    pub fn grayscale(&mut self) -> &mut Self {
        self.value = self.value.grayscale();
        self
    }

    /// Blend the held color toward white or black by the given percent.
    pub fn shade(&mut self, amount: Float) -> &mut Self {
        self.value = self.value.shade(amount);
        self
    }

    /// Mix the held color toward the other color, leaving a hexadecimal
    /// value.
    pub fn mix(&mut self, other: &Color, amount: Float) -> &mut Self {
        self.value = Color::Hex(self.value.mix(other, amount));
        self
    }

    /// Multiply the held color with the other color, leaving a hexadecimal
    /// value.
    pub fn multiply(&mut self, other: &Color) -> &mut Self {
        self.value = Color::Hex(self.value.multiply(other));
        self
    }

    /// Average the held color with the other color, leaving an RGBA value.
    pub fn add(&mut self, other: &Color) -> &mut Self {
        self.value = self.value.add(other, Notation::Rgba);
        self
    }

    /// Replace the held color with a random one in hexadecimal notation.
    pub fn random(&mut self) -> &mut Self {
        self.value = Color::random();
        self
    }

    /// Set a single channel of the held color.
    ///
    /// The value is interpreted on the channel's own scale: `0..=255` for
    /// the RGB channels, degrees for the hue, `0..=1` for saturation,
    /// value, lightness, and alpha, and `0..=100` for the CMYK channels.
    /// The held color's notation is preserved, as is its alpha channel.
    /// Setting [`Channel::Alpha`] on a notation without one is a no-op.
    pub fn set_channel(&mut self, channel: Channel, value: Float) -> &mut Self {
        use Channel::*;

        let original = self.value.notation();
        let alpha = self.value.alpha();

        match channel {
            Red | Green | Blue => {
                let mut rgb = self.value.to_rgb();
                match channel {
                    Red => rgb.r = value,
                    Green => rgb.g = value,
                    _ => rgb.b = value,
                }
                self.value = Color::Rgb(rgb).to_notation(original, alpha);
            }
            Alpha => match &mut self.value {
                Color::Rgba(c) => c.a = value,
                Color::Hsla(c) => c.a = value,
                _ => {}
            },
            Hue | Saturation | Value => {
                let mut hsv = self.value.to_hsv();
                match channel {
                    Hue => hsv.h = value,
                    Saturation => hsv.s = value,
                    _ => hsv.v = value,
                }
                self.value = Color::Hsv(hsv).to_notation(original, alpha);
            }
            Lightness => {
                let mut hsl = self.value.to_hsl();
                hsl.l = value;
                self.value = Color::Hsl(hsl).to_notation(original, alpha);
            }
            Cyan | Magenta | Yellow | Black => {
                let mut cmyk = self.value.to_cmyk();
                match channel {
                    Cyan => cmyk.c = value,
                    Magenta => cmyk.m = value,
                    Yellow => cmyk.y = value,
                    _ => cmyk.k = value,
                }
                self.value = Color::Cmyk(cmyk).to_notation(original, alpha);
            }
        }
        self
    }

    // ----------------------------------------------------------------------------------------- schemes and tests

    /// Create the given scheme for the held color.
    pub fn scheme(&self, kind: SchemeKind, notation: Notation) -> Scheme {
        create_color_scheme(&self.value, kind, notation, &self.options)
    }

    /// Create the scheme named by the string for the held color.
    pub fn scheme_by_name(&self, name: &str, notation: Notation) -> Result<Scheme, ColorError> {
        color_scheme(&self.value, name, notation, &self.options)
    }

    /// Determine whether the held color is visually dark.
    pub fn is_dark(&self) -> bool {
        self.value.is_dark()
    }

    /// Determine whether the held color is visually light.
    pub fn is_light(&self) -> bool {
        self.value.is_light()
    }

    /// Determine whether the held color equals the other color, comparing
    /// hexadecimal forms.
    pub fn equals(&self, other: &Color) -> bool {
        self.value.equals(other)
    }
}

impl std::fmt::Display for Swatch {
    /// Format the held color in its canonical serialization.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

impl From<Color> for Swatch {
    fn from(value: Color) -> Self {
        Self::new(value)
    }
}

// ====================================================================================================================
