//! 8-bit-per-channel RGB color with a floating-point alpha.

use rand::Rng;
use std::fmt::{self, Display};

use crate::{
    error::{TinctError, TinctResult},
    hex::Hex,
    hsl::Hsl,
    utils,
};

/// An immutable RGB color: integer channels in [0, 255] plus a [0, 1] alpha.
///
/// Every mutator returns a new value; equality is structural. The hue-based
/// derived colors (complement, analogs, blends, ...) are computed in HSL
/// space and converted back, so the hue arithmetic lives in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl Rgb {
    /// Creates a color, validating that alpha lies in [0, 1].
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> TinctResult<Self> {
        if !(0.0..=1.0).contains(&a) {
            return Err(TinctError::range("alpha", a, 0.0, 1.0));
        }
        Ok(Self { r, g, b, a })
    }

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Internal constructor for values already known to be valid.
    pub(crate) const fn from_channels(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Returns a copy with the red channel clamped into [0, 255].
    #[must_use]
    pub fn set_red(&self, value: i64) -> Self {
        Self {
            r: utils::clamp_to_255(value),
            ..*self
        }
    }

    /// Returns a copy with the green channel clamped into [0, 255].
    #[must_use]
    pub fn set_green(&self, value: i64) -> Self {
        Self {
            g: utils::clamp_to_255(value),
            ..*self
        }
    }

    /// Returns a copy with the blue channel clamped into [0, 255].
    #[must_use]
    pub fn set_blue(&self, value: i64) -> Self {
        Self {
            b: utils::clamp_to_255(value),
            ..*self
        }
    }

    /// Returns a copy with alpha clamped into [0, 1].
    #[must_use]
    pub fn set_alpha(&self, value: f64) -> Self {
        Self {
            a: utils::clamp_to_unit(value),
            ..*self
        }
    }

    /// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// The keyword is case-insensitive; channels are integers and alpha a
    /// float. Channel values that fit the grammar but exceed 255 fail with a
    /// range error rather than a format error.
    pub fn parse(input: &str) -> TinctResult<Self> {
        if let Some(args) = utils::parse_call(input, "rgb") {
            if args.len() == 3 {
                if let (Some(r), Some(g), Some(b)) = (
                    utils::parse_integer(args[0]),
                    utils::parse_integer(args[1]),
                    utils::parse_integer(args[2]),
                ) {
                    return Self::new(
                        Self::channel("r", r)?,
                        Self::channel("g", g)?,
                        Self::channel("b", b)?,
                        1.0,
                    );
                }
            }
        }
        if let Some(args) = utils::parse_call(input, "rgba") {
            if args.len() == 4 {
                if let (Some(r), Some(g), Some(b), Some(a)) = (
                    utils::parse_integer(args[0]),
                    utils::parse_integer(args[1]),
                    utils::parse_integer(args[2]),
                    utils::parse_float(args[3]),
                ) {
                    return Self::new(
                        Self::channel("r", r)?,
                        Self::channel("g", g)?,
                        Self::channel("b", b)?,
                        a,
                    );
                }
            }
        }
        Err(TinctError::format(
            input.to_string(),
            (0, input.len()),
            "expected rgb(r, g, b) or rgba(r, g, b, a)",
        ))
    }

    fn channel(component: &'static str, value: i64) -> TinctResult<u8> {
        u8::try_from(value).map_err(|_| TinctError::range(component, value as f64, 0.0, 255.0))
    }

    /// Converts to HSL with the standard max/min derivation.
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl::from_parts(h * 360.0, s * 100.0, l * 100.0, self.a)
    }

    /// Converts to hex, omitting the alpha pair when the color is opaque.
    ///
    /// An opaque color therefore takes the parser's `"FF"` default alpha,
    /// while [`Hex::from`] always emits a computed pair.
    pub fn to_hex(&self) -> Hex {
        let alpha = (self.a * 255.0).round() as u8;
        Hex::from_pairs(
            format!("{:02x}", self.r),
            format!("{:02x}", self.g),
            format!("{:02x}", self.b),
            if alpha == 255 {
                String::from("FF")
            } else {
                format!("{:02x}", alpha)
            },
        )
    }

    /// Uniformly random opaque color.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            r: rng.gen_range(0..=255),
            g: rng.gen_range(0..=255),
            b: rng.gen_range(0..=255),
            a: 1.0,
        }
    }

    /// Channel-wise inversion; alpha is unchanged.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }

    #[must_use]
    pub fn complementary(&self) -> Self {
        self.to_hsl().complementary().to_rgb()
    }

    /// See [`utils::DEFAULT_AMOUNT`] for the conventional step.
    #[must_use]
    pub fn lighter(&self, amount: f64) -> Self {
        self.to_hsl().lighter(amount).to_rgb()
    }

    #[must_use]
    pub fn darker(&self, amount: f64) -> Self {
        self.to_hsl().darker(amount).to_rgb()
    }

    /// See [`utils::DEFAULT_ANALOGOUS_SHIFT`] for the conventional shift.
    #[must_use]
    pub fn analogous(&self, amount: f64) -> Self {
        self.to_hsl().analogous(amount).to_rgb()
    }

    #[must_use]
    pub fn triadic(&self) -> Self {
        self.to_hsl().triadic().to_rgb()
    }

    #[must_use]
    pub fn tetradic(&self) -> Self {
        self.to_hsl().tetradic().to_rgb()
    }

    #[must_use]
    pub fn split_complementary(&self) -> Self {
        self.to_hsl().split_complementary().to_rgb()
    }

    #[must_use]
    pub fn monochromatic(&self, amount: f64) -> Self {
        self.to_hsl().monochromatic(amount).to_rgb()
    }

    /// Scales each channel by the golden ratio.
    ///
    /// Unlike the other derived colors this is not a hue rotation; the HSL
    /// counterpart [`Hsl::golden`] rotates hue instead. Both definitions are
    /// intentional.
    #[must_use]
    pub fn golden(&self) -> Self {
        Self {
            r: (f64::from(self.r) * utils::GOLDEN_RATIO).round() as u8,
            g: (f64::from(self.g) * utils::GOLDEN_RATIO).round() as u8,
            b: (f64::from(self.b) * utils::GOLDEN_RATIO).round() as u8,
            a: self.a,
        }
    }

    /// Blends toward `overlay` in HSL space; `weight` 0 keeps self, 1 takes
    /// the overlay.
    #[must_use]
    pub fn blend(&self, overlay: Rgb, weight: f64) -> Self {
        self.to_hsl().blend(overlay.to_hsl(), weight).to_rgb()
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_bad_alpha() {
        assert!(matches!(
            Rgb::new(0, 0, 0, 1.5),
            Err(TinctError::Range { component: "alpha", .. })
        ));
        assert!(matches!(Rgb::new(0, 0, 0, -0.1), Err(TinctError::Range { .. })));
        assert!(Rgb::new(255, 255, 255, 0.0).is_ok());
    }

    #[test]
    fn test_setters_clamp() {
        let color = Rgb::opaque(10, 20, 30);
        assert_eq!(color.set_red(300).r(), 255);
        assert_eq!(color.set_green(-5).g(), 0);
        assert_eq!(color.set_blue(40).b(), 40);
        assert_eq!(color.set_alpha(2.0).a(), 1.0);
        // Untouched channels survive.
        assert_eq!(color.set_red(300).g(), 20);
    }

    #[test]
    fn test_display_always_four_components() {
        assert_eq!(Rgb::opaque(255, 0, 0).to_string(), "rgba(255, 0, 0, 1)");
        let half = Rgb::new(0, 0, 0, 0.5).unwrap();
        assert_eq!(half.to_string(), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_parse_rgb() {
        let color = Rgb::parse("rgb(255, 0, 0)").unwrap();
        assert_eq!(color, Rgb::opaque(255, 0, 0));
    }

    #[test]
    fn test_parse_rgba() {
        let color = Rgb::parse("rgba(0,0,0,0.5)").unwrap();
        assert_eq!(color.a(), 0.5);
        assert_eq!(color.r(), 0);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert!(Rgb::parse("RGB(1, 2, 3)").is_ok());
        assert!(Rgb::parse("Rgba(1, 2, 3, 0.25)").is_ok());
    }

    #[test]
    fn test_parse_channel_overflow_is_range_error() {
        assert!(matches!(
            Rgb::parse("rgb(256,0,0)"),
            Err(TinctError::Range { component: "r", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4)",
            "rgba(1, 2, 3)",
            "rgb(a, b, c)",
            "rgb(-1, 0, 0)",
            "notacolor",
            "rgb( 1, 2, 3)",
        ] {
            assert!(
                matches!(Rgb::parse(bad), Err(TinctError::Format { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_to_hsl_primaries() {
        let red = Rgb::opaque(255, 0, 0).to_hsl();
        assert_eq!((red.h(), red.s(), red.l()), (0.0, 100.0, 50.0));

        let blue = Rgb::opaque(0, 0, 255).to_hsl();
        assert_eq!((blue.h(), blue.s(), blue.l()), (240.0, 100.0, 50.0));

        let gray = Rgb::opaque(128, 128, 128).to_hsl();
        assert_eq!(gray.s(), 0.0);
        assert_eq!(gray.h(), 0.0);
    }

    #[test]
    fn test_hsl_round_trip_within_one() {
        for (r, g, b) in [(12u8, 200u8, 77u8), (255, 255, 0), (1, 2, 3), (250, 128, 114)] {
            let color = Rgb::new(r, g, b, 0.25).unwrap();
            let back = color.to_hsl().to_rgb();
            assert!((i16::from(back.r()) - i16::from(r)).abs() <= 1);
            assert!((i16::from(back.g()) - i16::from(g)).abs() <= 1);
            assert!((i16::from(back.b()) - i16::from(b)).abs() <= 1);
            assert_eq!(back.a(), 0.25);
        }
    }

    #[test]
    fn test_to_hex_omits_opaque_alpha_pair() {
        let opaque = Rgb::opaque(255, 128, 0).to_hex();
        assert_eq!(opaque.to_string(), "#ff8000FF");

        let translucent = Rgb::new(255, 128, 0, 0.5).unwrap().to_hex();
        assert_eq!(translucent.to_string(), "#ff800080");
    }

    #[test]
    fn test_invert_is_involution() {
        let color = Rgb::new(12, 200, 77, 0.5).unwrap();
        assert_eq!(color.invert().invert(), color);
        assert_eq!(color.invert(), Rgb::new(243, 55, 178, 0.5).unwrap());
    }

    #[test]
    fn test_golden_scales_channels() {
        let color = Rgb::opaque(255, 100, 0);
        let golden = color.golden();
        assert_eq!(golden.r(), 158);
        assert_eq!(golden.g(), 62);
        assert_eq!(golden.b(), 0);
        assert_eq!(golden.a(), 1.0);
    }

    #[test]
    fn test_blend_midpoint_is_mid_gray() {
        let blended = Rgb::opaque(0, 0, 0).blend(Rgb::opaque(255, 255, 255), 0.5);
        let l = blended.to_hsl().l();
        assert!((l - 50.0).abs() <= 1.0, "lightness was {l}");
        assert_eq!(blended.to_hsl().s(), 0.0);
    }

    #[test]
    fn test_delegated_ops_match_hsl() {
        let color = Rgb::opaque(64, 191, 64);
        assert_eq!(color.complementary(), color.to_hsl().complementary().to_rgb());
        assert_eq!(color.triadic(), color.to_hsl().triadic().to_rgb());
        assert_eq!(
            color.monochromatic(0.2),
            color.to_hsl().monochromatic(0.2).to_rgb()
        );
    }

    #[test]
    fn test_random_in_range() {
        for _ in 0..32 {
            let color = Rgb::random();
            assert_eq!(color.a(), 1.0);
            // u8 channels are in range by construction; just exercise it.
            let _ = (color.r(), color.g(), color.b());
        }
    }
}
