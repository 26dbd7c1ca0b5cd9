//! # Huechord
//!
//! Huechord finds harmonious color palettes hiding in arbitrary color
//! collections.
//!
//!
//! ## 1. Overview
//!
//! Huechord's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. Its methods expose
//!     conversion between color spaces, perceptual distance, and nearest
//!     neighbor search over candidate colors.
//!   * [`HarmonyPattern`] enumerates the five classic **color harmonies**,
//!     i.e., the analogous, triadic, tetradic, complementary, and split
//!     complementary hue arrangements.
//!   * [`TemplateSet`] turns a base color into the **palette templates** for
//!     all harmony patterns by rotating the base color's hue in CIELCh.
//!   * [`discover`] greedily matches every template against a pool of
//!     candidate colors and keeps, per pattern, the [`MatchedPalette`] whose
//!     colors sit closest to their targets.
//!
//! All perceptual computations use the CIELCh color space with a D50 white
//! point, with the 1976 CIE color difference ΔE*ab as distance metric.
//!
//!
//! ## 2. One-Two-Three: Palettes!
//!
//! Huechord's workflow for palette discovery works like this. First, collect
//! candidate colors, e.g., by parsing their hexadecimal representations.
//!
//! ```
//! # use huechord::Color;
//! # use huechord::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! // 1. Collect candidate colors
//! let pool = ["#ffb97a", "#ff727f", "#f02f87", "#9a007f", "#33006b"]
//!     .into_iter()
//!     .map(Color::try_from)
//!     .collect::<Result<Vec<_>, _>>()?;
//! # Ok(())
//! # }
//! ```
//!
//! Second, discover the best matching palettes. The pool must have at least
//! as many distinct colors as the largest pattern has targets, i.e., four.
//!
//! ```
//! # use huechord::{discover, Color};
//! # use huechord::error::ColorFormatError;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let pool = ["#ffb97a", "#ff727f", "#f02f87", "#9a007f", "#33006b"]
//! #     .into_iter()
//! #     .map(Color::try_from)
//! #     .collect::<Result<Vec<_>, ColorFormatError>>()?;
//! // 2. Discover palettes
//! let palettes = discover(&pool)?;
//! # Ok(())
//! # }
//! ```
//!
//! Third, pick the palette for a harmony pattern and use its colors.
//!
//! ```
//! # use huechord::{discover, Color, HarmonyPattern};
//! # use huechord::error::ColorFormatError;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let pool = ["#ffb97a", "#ff727f", "#f02f87", "#9a007f", "#33006b"]
//! #     .into_iter()
//! #     .map(Color::try_from)
//! #     .collect::<Result<Vec<_>, ColorFormatError>>()?;
//! # let palettes = discover(&pool)?;
//! // 3. Use the complementary palette
//! let complementary = &palettes[HarmonyPattern::Complementary];
//! assert_eq!(complementary.colors().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Huechord supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!
//!
//! ## 4. Acknowledgements
//!
//! Huechord reuses [Color.js](https://colorjs.io)' formulae for conversion
//! between color spaces, as published by [Lea Verou](http://lea.verou.me/)
//! and [Chris Lilley](https://svgees.us/) alongside the [CSS Color
//! 4](https://www.w3.org/TR/css-color-4/) specification. Thank you!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
mod discover;
pub mod error;
mod harmony;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{normalize_hue, ColorSpace};
pub use discover::{discover, DiscoveredPalettes, MatchedPalette};
pub use harmony::{
    HarmonyPattern, HarmonyPatternIterator, PaletteTemplate, TemplateSet, PATTERN_COUNT,
};
pub use object::Color;
