//! # Pretty 🎨 Palette
//!
//! Prettypalette converts, manipulates, and derives colors across seven
//! notations: hashed hexadecimal, RGB, RGBA, HSV, HSL, HSLA, and CMYK.
//!
//!
//! ## 1. Overview
//!
//! Prettypalette's main abstractions are:
//!
//!   * [`Color`] combines a [`Notation`] discriminant with one of the seven
//!     value types [`Hex`], [`Rgb`], [`Rgba`], [`Hsv`], [`Hsl`], [`Hsla`],
//!     and [`Cmyk`]. Its methods expose most of prettypalette's
//!     functionality: parsing, conversion between notations with RGB as the
//!     pivot, and algorithmic derivation, from lightening and darkening
//!     over hue rotation, mixing, shading, and grayscale to websafe
//!     quantization and random generation.
//!   * The [`palette`] module holds the two static name-to-color tables,
//!     the standard CSS-style names and the alternate metro names, which
//!     [`Color::parse`] resolves transparently.
//!   * The [`scheme`] module derives ordered color sequences and material
//!     palettes from a base color via ten named algorithms, configured by
//!     [`SchemeOptions`](scheme::SchemeOptions).
//!   * [`Swatch`] owns a mutable "current color" with chainable mutators,
//!     for callers that prefer stateful editing over value-style
//!     derivation.
//!
//! Parsing is permissive while detection ([`Notation::detect`]) is strict;
//! the crate documentation of those two items spells out the difference.
//! All errors are [`ColorError`](error::ColorError) values; typed colors
//! are valid by construction and never fail to convert.
//!
//!
//! ## 2. One-Two-Three: Colors!
//!
//! Parse a color, derive variations, and serialize the results:
//!
//! ```
//! # use prettypalette::{Color, Notation};
//! # use prettypalette::scheme::{create_color_scheme, SchemeKind, SchemeOptions};
//! // 1. Parse
//! let coral: Color = "coral".parse()?;
//! assert_eq!(coral.to_string(), "#ff7f50");
//!
//! // 2. Derive
//! let darker = coral.darken(20.0);
//! let scheme = create_color_scheme(
//!     &coral,
//!     SchemeKind::Triadic,
//!     Notation::Hex,
//!     &SchemeOptions::default(),
//! );
//!
//! // 3. Serialize
//! assert_eq!(darker.to_string(), "#e93e00");
//! assert_eq!(scheme.len(), 3);
//! # Ok::<(), prettypalette::error::ColorError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettypalette supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type
//!     [`Float`] instead of `f32`. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod error;
mod notation;
mod object;
pub mod palette;
pub mod scheme;
mod swatch;

pub use notation::{Cmyk, Hex, Hsl, Hsla, Hsv, Notation, Rgb, Rgba};
pub use object::Color;
pub use swatch::{Channel, Swatch};
