//! Hue/saturation/lightness color with a dual-mode alpha component.

use rand::Rng;
use std::fmt::{self, Display};

use crate::{
    error::{TinctError, TinctResult},
    hex::Hex,
    rgb::Rgb,
    utils,
};

/// How an HSL alpha value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    /// Alpha is a [0, 1] fraction.
    Fraction,
    /// Alpha is a [0, 100] percentage.
    Percentage,
}

/// An immutable HSL color.
///
/// Hue is stored reduced modulo 360 (sign-preserving, so it may be negative
/// or fractional); saturation and lightness are [0, 100] percentages. The
/// alpha component carries an [`AlphaMode`] tag deciding whether it is a
/// fraction or a percentage; any alpha above 1 at construction forces
/// percentage interpretation. The mode travels with the value and governs
/// both validation and string rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
    a: f64,
    alpha_mode: AlphaMode,
}

impl Hsl {
    /// Creates a color; saturation and lightness must lie in [0, 100].
    ///
    /// The alpha mode is inferred: values above 1 are percentages, anything
    /// else is a fraction.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> TinctResult<Self> {
        Self::with_alpha_mode(h, s, l, a, AlphaMode::Fraction)
    }

    /// Like [`Hsl::new`], but lets the caller force percentage interpretation
    /// for alpha values that do not exceed 1.
    pub fn with_alpha_mode(
        h: f64,
        s: f64,
        l: f64,
        a: f64,
        alpha_mode: AlphaMode,
    ) -> TinctResult<Self> {
        if !(0.0..=100.0).contains(&s) {
            return Err(TinctError::range("saturation", s, 0.0, 100.0));
        }
        if !(0.0..=100.0).contains(&l) {
            return Err(TinctError::range("lightness", l, 0.0, 100.0));
        }
        let alpha_mode = if a > 1.0 {
            AlphaMode::Percentage
        } else {
            alpha_mode
        };
        match alpha_mode {
            AlphaMode::Fraction if !(0.0..=1.0).contains(&a) => {
                return Err(TinctError::range("alpha", a, 0.0, 1.0));
            }
            AlphaMode::Percentage if !(0.0..=100.0).contains(&a) => {
                return Err(TinctError::range("alpha", a, 0.0, 100.0));
            }
            _ => {}
        }
        Ok(Self {
            h: h % 360.0,
            s,
            l,
            a,
            alpha_mode,
        })
    }

    /// Internal constructor for component values already known to be valid.
    /// Re-infers the alpha mode from magnitude, like public construction.
    pub(crate) fn from_parts(h: f64, s: f64, l: f64, a: f64) -> Self {
        let alpha_mode = if a > 1.0 {
            AlphaMode::Percentage
        } else {
            AlphaMode::Fraction
        };
        Self {
            h: h % 360.0,
            s,
            l,
            a,
            alpha_mode,
        }
    }

    pub const fn h(&self) -> f64 {
        self.h
    }

    pub const fn s(&self) -> f64 {
        self.s
    }

    pub const fn l(&self) -> f64 {
        self.l
    }

    pub const fn a(&self) -> f64 {
        self.a
    }

    pub const fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }

    /// Returns a copy with the hue wrapped modulo 360 (no clamping).
    #[must_use]
    pub fn set_hue(&self, hue: f64) -> Self {
        Self::from_parts(hue, self.s, self.l, self.a)
    }

    /// Returns a copy with saturation clamped into [0, 100].
    #[must_use]
    pub fn set_saturation(&self, saturation: f64) -> Self {
        Self::from_parts(self.h, utils::clamp_to_100(saturation), self.l, self.a)
    }

    /// Returns a copy with lightness clamped into [0, 100].
    #[must_use]
    pub fn set_lightness(&self, lightness: f64) -> Self {
        Self::from_parts(self.h, self.s, utils::clamp_to_100(lightness), self.a)
    }

    /// Returns a copy with alpha clamped into [0, 1], in fraction mode.
    #[must_use]
    pub fn set_alpha(&self, alpha: f64) -> Self {
        Self::from_parts(self.h, self.s, self.l, utils::clamp_to_unit(alpha))
    }

    /// Parses `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    ///
    /// Hue is an integer, saturation and lightness float percentages, alpha
    /// a float. Percentages outside [0, 100] fail with a range error.
    pub fn parse(input: &str) -> TinctResult<Self> {
        fn percent(arg: &str) -> Option<f64> {
            utils::parse_float(arg.strip_suffix('%')?)
        }

        if let Some(args) = utils::parse_call(input, "hsl") {
            if args.len() == 3 {
                if let (Some(h), Some(s), Some(l)) = (
                    utils::parse_integer(args[0]),
                    percent(args[1]),
                    percent(args[2]),
                ) {
                    return Self::new(h as f64, s, l, 1.0);
                }
            }
        }
        if let Some(args) = utils::parse_call(input, "hsla") {
            if args.len() == 4 {
                if let (Some(h), Some(s), Some(l), Some(a)) = (
                    utils::parse_integer(args[0]),
                    percent(args[1]),
                    percent(args[2]),
                    utils::parse_float(args[3]),
                ) {
                    return Self::new(h as f64, s, l, a);
                }
            }
        }
        Err(TinctError::format(
            input.to_string(),
            (0, input.len()),
            "expected hsl(h, s%, l%) or hsla(h, s%, l%, a)",
        ))
    }

    /// Converts to RGB via the chroma-bounds reconstruction.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let a = match self.alpha_mode {
            AlphaMode::Fraction => self.a,
            AlphaMode::Percentage => self.a / 100.0,
        };

        let (r, g, b) = if s == 0.0 {
            // Achromatic: all channels carry the lightness.
            (l, l, l)
        } else {
            let chroma_high = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let chroma_low = 2.0 * l - chroma_high;
            (
                utils::hue_to_rgb(chroma_low, chroma_high, h + 1.0 / 3.0),
                utils::hue_to_rgb(chroma_low, chroma_high, h),
                utils::hue_to_rgb(chroma_low, chroma_high, h - 1.0 / 3.0),
            )
        };

        Rgb::from_channels(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a,
        )
    }

    /// Converts to hex. This path always emits an explicit alpha pair,
    /// unlike [`Rgb::to_hex`].
    pub fn to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    /// Uniformly random color: integer hue in [0, 360], saturation and
    /// lightness in [0, 100], opaque.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::from_parts(
            f64::from(rng.gen_range(0..=360)),
            f64::from(rng.gen_range(0..=100)),
            f64::from(rng.gen_range(0..=100)),
            1.0,
        )
    }

    /// Mirrors hue around 360 and flips saturation and lightness.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self::from_parts(
            (360.0 - self.h) % 360.0,
            100.0 - self.s,
            100.0 - self.l,
            self.a,
        )
    }

    /// Opposite point on the hue wheel.
    #[must_use]
    pub fn complementary(&self) -> Self {
        Self::from_parts((self.h + 180.0) % 360.0, self.s, self.l, self.a)
    }

    /// Raises lightness by `amount * 100`, saturating at 100.
    #[must_use]
    pub fn lighter(&self, amount: f64) -> Self {
        Self::from_parts(self.h, self.s, (self.l + amount * 100.0).min(100.0), self.a)
    }

    /// Lowers lightness by `amount * 100`, bottoming out at 0.
    #[must_use]
    pub fn darker(&self, amount: f64) -> Self {
        Self::from_parts(self.h, self.s, (self.l - amount * 100.0).max(0.0), self.a)
    }

    /// Rotates hue by `amount` degrees.
    #[must_use]
    pub fn analogous(&self, amount: f64) -> Self {
        Self::from_parts((self.h + amount) % 360.0, self.s, self.l, self.a)
    }

    #[must_use]
    pub fn triadic(&self) -> Self {
        Self::from_parts((self.h + 120.0) % 360.0, self.s, self.l, self.a)
    }

    #[must_use]
    pub fn tetradic(&self) -> Self {
        Self::from_parts((self.h + 90.0) % 360.0, self.s, self.l, self.a)
    }

    #[must_use]
    pub fn split_complementary(&self) -> Self {
        Self::from_parts((self.h + 150.0) % 360.0, self.s, self.l, self.a)
    }

    /// Desaturates completely and lightens like [`Hsl::lighter`].
    #[must_use]
    pub fn monochromatic(&self, amount: f64) -> Self {
        Self::from_parts(self.h, 0.0, (self.l + amount * 100.0).min(100.0), self.a)
    }

    /// Rotates hue by the golden ratio.
    ///
    /// The RGB counterpart [`Rgb::golden`] scales channels instead; the two
    /// definitions are intentionally different.
    #[must_use]
    pub fn golden(&self) -> Self {
        Self::from_parts(
            (self.h * utils::GOLDEN_RATIO) % 360.0,
            self.s,
            self.l,
            self.a,
        )
    }

    /// Linear interpolation of h, s, l, and a toward `overlay`.
    ///
    /// `weight` is expected in [0, 1]: 0 keeps self, 1 takes the overlay.
    /// Hue is interpolated on the number line, not along the shortest arc,
    /// so blending across the 0/360 wrap passes through the far side.
    #[must_use]
    pub fn blend(&self, overlay: Hsl, weight: f64) -> Self {
        Self::from_parts(
            self.h + (overlay.h - self.h) * weight,
            self.s + (overlay.s - self.s) * weight,
            self.l + (overlay.l - self.l) * weight,
            self.a + (overlay.a - self.a) * weight,
        )
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.2}, {:.2}%, {:.2}%", self.h, self.s, self.l)?;
        if self.a != 1.0 {
            match self.alpha_mode {
                AlphaMode::Fraction => write!(f, ", {:.2}", self.a)?,
                AlphaMode::Percentage => write!(f, ", {:.2}%", self.a)?,
            }
        }
        write!(f, ")")
    }
}
