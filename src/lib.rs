#![forbid(unsafe_code)]

//! # Tinct
//!
//! A tri-notation sRGB color model for Rust.
//!
//! ## Overview
//!
//! The library is built around three interchangeable color representations
//! and lossless (up to rounding) conversion between them:
//!
//! - **Immutable values**: every mutator returns a new color; nothing is
//!   modified after construction
//! - **Validated construction**: out-of-range components fail fast instead of
//!   being silently clamped
//! - **Derived colors**: complement, analogs, triads, tetrads, blends, and
//!   golden-ratio variants, with the hue arithmetic owned by HSL
//! - **Design tokens**: a small pipeline that turns a token JSON document
//!   into CSS/SCSS/TS/JSON artifacts
//!
//! ## Core Components
//!
//! - [`Rgb`]: 8-bit channels plus floating alpha
//! - [`Hsl`]: hue/saturation/lightness with a dual-mode alpha ([`AlphaMode`])
//! - [`Hex`]: validated 2-digit-per-channel hex string form
//! - [`Color`]: a facade holding all three views in sync
//! - [`TokenPipeline`]: the design-token artifact builder
//!
//! ## Example Usage
//!
//! ```rust
//! use tinct::{Color, TinctResult};
//!
//! fn main() -> TinctResult<()> {
//!     let green = Color::parse("hsl(120, 50%, 50%)")?;
//!     assert_eq!(green.rgb().to_string(), "rgba(64, 191, 64, 1)");
//!     assert_eq!(green.hex().to_string(), "#40bf40FF");
//!
//!     let complement = green.hsl().complementary();
//!     assert_eq!(complement.h(), 300.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `casing`: identifier case conversion for token emission
//! - `color`: the synchronized facade and format identification
//! - `error`: error types and handling
//! - `hex`, `hsl`, `rgb`: the three color representations
//! - `tokens`: the design-token build pipeline
//! - `utils`: clamping and hue-interpolation helpers
//!
//! ## Error Handling
//!
//! The library uses [`TinctResult`] and [`TinctError`] with detailed
//! diagnostics via `miette`: range violations, malformed color strings, and
//! token-document failures each carry their own diagnostic code.

/// Re-exports of core components
pub use casing::Casing;
pub use color::{identify_color_format, Color, ColorFormat};
pub use error::{TinctError, TinctResult};
pub use hex::Hex;
pub use hsl::{AlphaMode, Hsl};
pub use rgb::Rgb;
pub use tokens::{build_tokens, Token, TokenMap, TokenPipeline};
pub use utils::GOLDEN_RATIO;

/// Identifier case conversion
pub mod casing;
/// Synchronized color facade and format identification
pub mod color;
/// Error types and handling
pub mod error;
/// Hexadecimal string representation
pub mod hex;
/// Hue/saturation/lightness representation
pub mod hsl;
/// RGB representation
pub mod rgb;
/// Design-token build pipeline
pub mod tokens;
/// Numeric helpers shared across representations
pub mod utils;
