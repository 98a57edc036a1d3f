//! Utility module with prettypalette's errors.

/// An erroneous color, scheme, or notation argument.
///
/// Every variant carries the offending text. Since typed [`Color`](crate::Color)
/// values are structurally valid by construction, these errors arise only at
/// the string boundary, i.e., when parsing colors, notation names, or scheme
/// names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// An input that matches none of the seven supported notations. For
    /// example, `later-gator` names neither a color nor a notation function.
    UnknownFormat(String),

    /// A hashed hexadecimal color with the wrong number of digits or with
    /// non-hexadecimal digits. For example, `#ff` is too short, whereas
    /// `#ggg` has the correct length but unsuitable characters.
    MalformedHex(String),

    /// A numeric component that cannot be parsed. For example, the second
    /// component of `rgb(0,1.2.3,0)` is not a number.
    MalformedComponent(String),

    /// A scheme name that matches neither a scheme nor one of its documented
    /// aliases. Scheme names are case-sensitive, so `Mono` does not name the
    /// monochromatic scheme but `mono` does.
    UnknownScheme(String),

    /// A notation name other than `hex`, `rgb`, `rgba`, `hsv`, `hsl`,
    /// `hsla`, or `cmyk`.
    UnknownNotation(String),
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorError::*;

        match self {
            UnknownFormat(s) => f.write_fmt(format_args!(
                "`{}` matches none of the supported color notations",
                s
            )),
            MalformedHex(s) => f.write_fmt(format_args!(
                "`{}` is not a valid hexadecimal color",
                s
            )),
            MalformedComponent(s) => f.write_fmt(format_args!(
                "`{}` is not a valid color component",
                s
            )),
            UnknownScheme(s) => {
                f.write_fmt(format_args!("`{}` does not name a color scheme", s))
            }
            UnknownNotation(s) => {
                f.write_fmt(format_args!("`{}` does not name a color notation", s))
            }
        }
    }
}

impl std::error::Error for ColorError {}

// ====================================================================================================================
