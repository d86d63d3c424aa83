//! Pure numeric helpers shared by the color representations.

/// Golden ratio conjugate, used by the golden derived-color variants.
pub const GOLDEN_RATIO: f64 = 0.618033988749895;

/// Default lightness step for lighter/darker/monochromatic variants.
pub const DEFAULT_AMOUNT: f64 = 0.2;

/// Default hue shift in degrees for analogous variants.
pub const DEFAULT_ANALOGOUS_SHIFT: f64 = 30.0;

/// Clamps an integer into the [0, 255] channel range.
pub fn clamp_to_255(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamps a float into the [0, 100] percentage range.
pub fn clamp_to_100(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Clamps a float into the [0, 1] unit range.
pub fn clamp_to_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Piecewise hue interpolation for HSL-to-RGB channel reconstruction.
///
/// `t` is the hue fraction already offset by ±1/3 for the channel being
/// reconstructed; it is wrapped back into [0, 1] before the piecewise
/// evaluation between the two chroma bounds.
pub fn hue_to_rgb(chroma_low: f64, chroma_high: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        chroma_low + (chroma_high - chroma_low) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        chroma_high
    } else if t < 2.0 / 3.0 {
        chroma_low + (chroma_high - chroma_low) * (2.0 / 3.0 - t) * 6.0
    } else {
        chroma_low
    }
}

/// Splits a `name(a, b, c)` style color string into its arguments.
///
/// The keyword match is case-insensitive. Whitespace is accepted after each
/// comma and nowhere else, matching the rgb()/hsl() grammars.
pub(crate) fn parse_call<'a>(input: &'a str, name: &str) -> Option<Vec<&'a str>> {
    if input.len() < name.len() + 2 {
        return None;
    }
    let head = input.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    let rest = &input[name.len()..];
    let body = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(
        body.split(',')
            .enumerate()
            .map(|(i, raw)| if i == 0 { raw } else { raw.trim_start() })
            .collect(),
    )
}

/// Parses a bare decimal integer (digits only, no sign or whitespace).
pub(crate) fn parse_integer(arg: &str) -> Option<i64> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}

/// Parses a float made of digits and dots only (no sign, exponent, or
/// whitespace), the shape the rgba()/hsla() grammars allow.
pub(crate) fn parse_float(arg: &str) -> Option<f64> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    arg.parse().ok()
}
