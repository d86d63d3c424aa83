//! Two-hex-digit-per-channel string representation with optional alpha.

use std::fmt::{self, Display};

use crate::{
    error::{TinctError, TinctResult},
    hsl::Hsl,
    rgb::Rgb,
};

/// An immutable hexadecimal color.
///
/// Each channel is held as a validated 2-digit hex pair with the input's
/// digit case preserved. Alpha defaults to `"FF"` when the source string
/// omitted it. Derived-color operations delegate through [`Rgb`] (and from
/// there through [`Hsl`]), so a hex-space call runs the full
/// hex→rgb→hsl→rgb→hex chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hex {
    red: String,
    green: String,
    blue: String,
    alpha: String,
}

impl Hex {
    /// Parses a hex string: an optional `#` followed by exactly 3, 4, 6, or
    /// 8 hex digits. Short forms duplicate each nibble.
    pub fn parse(input: &str) -> TinctResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !matches!(digits.len(), 3 | 4 | 6 | 8)
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(TinctError::format(
                input.to_string(),
                (0, input.len()),
                "expected 3, 4, 6, or 8 hexadecimal digits, with an optional leading #",
            ));
        }

        let widen = |i: usize| {
            let nibble = &digits[i..=i];
            format!("{nibble}{nibble}")
        };
        Ok(match digits.len() {
            3 => Self {
                red: widen(0),
                green: widen(1),
                blue: widen(2),
                alpha: String::from("FF"),
            },
            4 => Self {
                red: widen(0),
                green: widen(1),
                blue: widen(2),
                alpha: widen(3),
            },
            6 => Self {
                red: digits[0..2].to_string(),
                green: digits[2..4].to_string(),
                blue: digits[4..6].to_string(),
                alpha: String::from("FF"),
            },
            _ => Self {
                red: digits[0..2].to_string(),
                green: digits[2..4].to_string(),
                blue: digits[4..6].to_string(),
                alpha: digits[6..8].to_string(),
            },
        })
    }

    /// Internal constructor for pairs already known to be valid hex.
    pub(crate) fn from_pairs(red: String, green: String, blue: String, alpha: String) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn red(&self) -> &str {
        &self.red
    }

    pub fn green(&self) -> &str {
        &self.green
    }

    pub fn blue(&self) -> &str {
        &self.blue
    }

    pub fn alpha(&self) -> &str {
        &self.alpha
    }

    /// Returns a copy with the red pair replaced; the pair must be exactly
    /// two hex digits.
    pub fn set_red(&self, pair: &str) -> TinctResult<Self> {
        Self::check_pair(pair)?;
        Self::parse(&format!("#{pair}{}{}{}", self.green, self.blue, self.alpha))
    }

    pub fn set_green(&self, pair: &str) -> TinctResult<Self> {
        Self::check_pair(pair)?;
        Self::parse(&format!("#{}{pair}{}{}", self.red, self.blue, self.alpha))
    }

    pub fn set_blue(&self, pair: &str) -> TinctResult<Self> {
        Self::check_pair(pair)?;
        Self::parse(&format!("#{}{}{pair}{}", self.red, self.green, self.alpha))
    }

    pub fn set_alpha(&self, pair: &str) -> TinctResult<Self> {
        Self::check_pair(pair)?;
        Self::parse(&format!("#{}{}{}{pair}", self.red, self.green, self.blue))
    }

    fn check_pair(pair: &str) -> TinctResult<()> {
        if pair.len() == 2 && pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(())
        } else {
            Err(TinctError::format(
                pair.to_string(),
                (0, pair.len()),
                "expected a 2-digit hexadecimal channel pair",
            ))
        }
    }

    /// Converts to RGB; alpha becomes a [0, 1] fraction.
    pub fn to_rgb(&self) -> Rgb {
        // Pairs are validated hex at construction, so radix parsing here
        // cannot fail.
        let pair = |p: &str| u8::from_str_radix(p, 16).unwrap_or(0);
        Rgb::from_channels(
            pair(&self.red),
            pair(&self.green),
            pair(&self.blue),
            f64::from(pair(&self.alpha)) / 255.0,
        )
    }

    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Uniformly random opaque color.
    pub fn random() -> Self {
        Rgb::random().to_hex()
    }

    #[must_use]
    pub fn invert(&self) -> Self {
        self.to_rgb().invert().to_hex()
    }

    #[must_use]
    pub fn complementary(&self) -> Self {
        self.to_rgb().complementary().to_hex()
    }

    #[must_use]
    pub fn lighter(&self, amount: f64) -> Self {
        self.to_rgb().lighter(amount).to_hex()
    }

    #[must_use]
    pub fn darker(&self, amount: f64) -> Self {
        self.to_rgb().darker(amount).to_hex()
    }

    #[must_use]
    pub fn analogous(&self, amount: f64) -> Self {
        self.to_rgb().analogous(amount).to_hex()
    }

    #[must_use]
    pub fn triadic(&self) -> Self {
        self.to_rgb().triadic().to_hex()
    }

    #[must_use]
    pub fn tetradic(&self) -> Self {
        self.to_rgb().tetradic().to_hex()
    }

    #[must_use]
    pub fn split_complementary(&self) -> Self {
        self.to_rgb().split_complementary().to_hex()
    }

    #[must_use]
    pub fn monochromatic(&self, amount: f64) -> Self {
        self.to_rgb().monochromatic(amount).to_hex()
    }

    #[must_use]
    pub fn golden(&self) -> Self {
        self.to_rgb().golden().to_hex()
    }

    #[must_use]
    pub fn blend(&self, overlay: &Hex, weight: f64) -> Self {
        self.to_rgb().blend(overlay.to_rgb(), weight).to_hex()
    }
}

/// Always emits a computed alpha pair, even for opaque colors — the
/// counterpart to [`Rgb::to_hex`]'s opaque elision.
impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Self {
        Self {
            red: format!("{:02x}", rgb.r()),
            green: format!("{:02x}", rgb.g()),
            blue: format!("{:02x}", rgb.b()),
            alpha: format!("{:02x}", (rgb.a() * 255.0).round() as u8),
        }
    }
}

impl From<Hsl> for Hex {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb().into()
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{}{}{}", self.red, self.green, self.blue, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_six_digits() {
        let hex = Hex::parse("#ff5733").unwrap();
        assert_eq!(hex.red(), "ff");
        assert_eq!(hex.green(), "57");
        assert_eq!(hex.blue(), "33");
        assert_eq!(hex.alpha(), "FF");
        assert_eq!(hex.to_string(), "#ff5733FF");
    }

    #[test]
    fn test_parse_eight_digits() {
        let hex = Hex::parse("#ff573380").unwrap();
        assert_eq!(hex.alpha(), "80");
    }

    #[test]
    fn test_parse_short_forms_duplicate_nibbles() {
        let rgb3 = Hex::parse("#f80").unwrap();
        assert_eq!(rgb3.to_string(), "#ff8800FF");

        let rgba4 = Hex::parse("#f80a").unwrap();
        assert_eq!(rgba4.to_string(), "#ff8800aa");
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(Hex::parse("ff5733").unwrap(), Hex::parse("#ff5733").unwrap());
    }

    #[test]
    fn test_parse_preserves_case() {
        let hex = Hex::parse("#FF5733").unwrap();
        assert_eq!(hex.red(), "FF");
        assert_eq!(hex.to_string(), "#FF5733FF");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["#12", "#12345", "#1234567", "#123456789", "#gg0000", "", "#"] {
            assert!(
                matches!(Hex::parse(bad), Err(TinctError::Format { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_from_rgb_always_emits_alpha() {
        let opaque: Hex = Rgb::opaque(255, 128, 0).into();
        assert_eq!(opaque.to_string(), "#ff8000ff");

        let translucent: Hex = Rgb::new(255, 128, 0, 0.5).unwrap().into();
        assert_eq!(translucent.to_string(), "#ff800080");
    }

    #[test]
    fn test_from_hsl_end_to_end() {
        let hex: Hex = Hsl::new(120.0, 50.0, 50.0, 1.0).unwrap().into();
        assert_eq!(hex.to_string(), "#40bf40ff");
    }

    #[test]
    fn test_to_rgb() {
        let rgb = Hex::parse("#ff573380").unwrap().to_rgb();
        assert_eq!((rgb.r(), rgb.g(), rgb.b()), (255, 87, 51));
        assert!((rgb.a() - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_through_rgb() {
        for input in ["#ff5733", "#ff573380", "#000000", "#ffffffff"] {
            let hex = Hex::parse(input).unwrap();
            let back = hex.to_rgb().to_hex();
            assert!(
                back.to_string().eq_ignore_ascii_case(&hex.to_string()),
                "{input} round-tripped to {back}"
            );
        }
    }

    #[test]
    fn test_setters_validate_pairs() {
        let hex = Hex::parse("#ff5733").unwrap();
        let red = hex.set_red("00").unwrap();
        assert_eq!(red.to_string(), "#005733FF");

        let alpha = hex.set_alpha("80").unwrap();
        assert_eq!(alpha.to_string(), "#ff573380");

        assert!(matches!(hex.set_red("0"), Err(TinctError::Format { .. })));
        assert!(matches!(hex.set_green("zz"), Err(TinctError::Format { .. })));
        assert!(matches!(hex.set_blue("123"), Err(TinctError::Format { .. })));
    }

    #[test]
    fn test_invert_is_involution() {
        let hex = Hex::parse("#0cc84d").unwrap();
        let twice = hex.invert().invert();
        assert!(twice.to_string().eq_ignore_ascii_case(&hex.to_string()));
    }

    #[test]
    fn test_derived_ops_delegate_through_rgb() {
        let hex = Hex::parse("#40bf40").unwrap();
        assert_eq!(hex.complementary(), hex.to_rgb().complementary().to_hex());
        assert_eq!(hex.golden(), hex.to_rgb().golden().to_hex());

        let other = Hex::parse("#000000").unwrap();
        assert_eq!(
            hex.blend(&other, 0.5),
            hex.to_rgb().blend(other.to_rgb(), 0.5).to_hex()
        );
    }

    #[test]
    fn test_random_is_valid() {
        for _ in 0..16 {
            let hex = Hex::random();
            assert_eq!(hex.to_string().len(), 9);
            // Opaque random colors take the elided-alpha default.
            assert_eq!(hex.alpha(), "FF");
        }
    }
}
