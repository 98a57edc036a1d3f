//! Parsing and detection of textual color notations.
//!
//! Parsing is permissive: it resolves palette names, tolerates stray
//! characters, accepts fractional and percent-suffixed components, defaults
//! missing components to zero, and ignores surplus ones. Detection is
//! strict: it accepts only the canonical grammar of each notation. The two
//! layers deliberately differ, so a parseable string is not necessarily a
//! detectable one.

use crate::error::ColorError;
use crate::notation::{Cmyk, Hex, Hsl, Hsla, Hsv, Notation, Rgb, Rgba};
use crate::object::Color;
use crate::Float;

/// Parse a color in hashed hexadecimal format, tolerating a missing hash
/// and expanding the three-digit shorthand by digit duplication.
pub(crate) fn parse_hex(s: &str) -> Result<Hex, ColorError> {
    let body = {
        let t = s.trim();
        t.strip_prefix('#').unwrap_or(t)
    };
    if body.len() != 3 && body.len() != 6 {
        return Err(ColorError::MalformedHex(s.to_string()));
    }

    fn parse_coordinate(body: &str, index: usize) -> Result<u8, ColorError> {
        let factor = body.len() / 3;
        let t = body
            .get(factor * index..factor * (index + 1))
            .ok_or_else(|| ColorError::MalformedHex(body.to_string()))?;
        let n =
            u8::from_str_radix(t, 16).map_err(|_| ColorError::MalformedHex(body.to_string()))?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(body, 0)?;
    let c2 = parse_coordinate(body, 1)?;
    let c3 = parse_coordinate(body, 2)?;
    Ok(Hex::new(c1, c2, c3))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a single numeric token.
///
/// This is the canonical component normalizer shared by every notation: a
/// `%` suffix divides the value by 100, an empty token is the zero default,
/// and anything else must parse as a number.
fn parse_component(token: &str) -> Result<Float, ColorError> {
    let (body, percent) = match token.strip_suffix('%') {
        Some(body) => (body, true),
        None => (token, false),
    };
    if body.is_empty() {
        return Ok(0.0);
    }

    let value: Float = body
        .parse()
        .map_err(|_| ColorError::MalformedComponent(token.to_string()))?;
    Ok(if percent { value / 100.0 } else { value })
}

/// Extract the comma-separated numeric components of a functional notation,
/// stripping every character that is not a digit, `.`, `,`, or `%`.
fn parse_components(s: &str) -> Result<Vec<Float>, ColorError> {
    let filtered: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%'))
        .collect();
    filtered.split(',').map(parse_component).collect()
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// After trimming and lowercasing, the string is resolved against the
/// standard and metro palettes. A `#`-prefixed result parses as hashed
/// hexadecimal. Otherwise the functional notations dispatch by substring
/// containment in the fixed precedence order `rgba`, `rgb`, `cmyk`, `hsv`,
/// `hsla`, `hsl`; missing trailing components default to zero and surplus
/// components are ignored.
pub(crate) fn parse(s: &str) -> Result<Color, ColorError> {
    let lowercase = s.trim().to_ascii_lowercase();
    let resolved: &str = crate::palette::resolve(&lowercase).unwrap_or(&lowercase);

    if resolved.starts_with('#') {
        return parse_hex(resolved).map(Color::Hex);
    }

    let notation = if resolved.contains("rgba") {
        Notation::Rgba
    } else if resolved.contains("rgb") {
        Notation::Rgb
    } else if resolved.contains("cmyk") {
        Notation::Cmyk
    } else if resolved.contains("hsv") {
        Notation::Hsv
    } else if resolved.contains("hsla") {
        Notation::Hsla
    } else if resolved.contains("hsl") {
        Notation::Hsl
    } else {
        return Err(ColorError::UnknownFormat(lowercase));
    };

    let components = parse_components(resolved)?;
    let pick = |index: usize| components.get(index).copied().unwrap_or(0.0);

    Ok(match notation {
        Notation::Rgba => Color::Rgba(Rgba::new(pick(0), pick(1), pick(2), pick(3))),
        Notation::Rgb => Color::Rgb(Rgb::new(pick(0), pick(1), pick(2))),
        Notation::Cmyk => Color::Cmyk(Cmyk::new(pick(0), pick(1), pick(2), pick(3))),
        Notation::Hsv => Color::Hsv(Hsv::new(pick(0), pick(1), pick(2))),
        Notation::Hsla => Color::Hsla(Hsla::new(pick(0), pick(1), pick(2), pick(3))),
        Notation::Hsl => Color::Hsl(Hsl::new(pick(0), pick(1), pick(2))),
        Notation::Hex => unreachable!("hex parsing returns early"),
    })
}

// --------------------------------------------------------------------------------------------------------------------

fn is_hex_format(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|body| {
        (body.len() == 3 || body.len() == 6) && body.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// Strip `name(` and `)` from the candidate, returning the component list.
fn functional_body<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

/// An unsigned integer component, optionally surrounded by whitespace.
fn is_integer(t: &str) -> bool {
    let t = t.trim();
    !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())
}

/// An alpha component between 0 and 1 with a leading digit: `0`, `0.37`,
/// `1`, or `1.0`.
fn is_alpha_value(t: &str) -> bool {
    let t = t.trim();
    if let Some(rest) = t.strip_prefix('0') {
        rest.is_empty()
            || rest
                .strip_prefix('.')
                .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
    } else if let Some(rest) = t.strip_prefix('1') {
        rest.is_empty()
            || rest
                .strip_prefix('.')
                .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b == b'0'))
    } else {
        false
    }
}

fn is_functional(s: &str, name: &str, count: usize, with_alpha: bool) -> bool {
    let Some(body) = functional_body(s, name) else {
        return false;
    };
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != count {
        return false;
    }

    let integers = count - usize::from(with_alpha);
    parts[..integers].iter().all(|t| is_integer(t))
        && parts[integers..].iter().all(|t| is_alpha_value(t))
}

/// Detect the notation of the given string with the strict grammar.
///
/// Candidates are checked in the fixed priority order HEX, RGB, RGBA, HSV,
/// HSL, HSLA, CMYK, and the first match wins.
pub(crate) fn detect(s: &str) -> Option<Notation> {
    if is_hex_format(s) {
        Some(Notation::Hex)
    } else if is_functional(s, "rgb", 3, false) {
        Some(Notation::Rgb)
    } else if is_functional(s, "rgba", 4, true) {
        Some(Notation::Rgba)
    } else if is_functional(s, "hsv", 3, false) {
        Some(Notation::Hsv)
    } else if is_functional(s, "hsl", 3, false) {
        Some(Notation::Hsl)
    } else if is_functional(s, "hsla", 4, true) {
        Some(Notation::Hsla)
    } else if is_functional(s, "cmyk", 4, false) {
        Some(Notation::Cmyk)
    } else {
        None
    }
}

// ====================================================================================================================
