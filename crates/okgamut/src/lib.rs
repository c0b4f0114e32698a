//! # okgamut
//!
//! Okgamut converts colors between 24-bit RGB, hexadecimal codes, and the
//! perceptually uniform [Oklab/Oklch](https://bottosson.github.io/posts/oklab/)
//! color space. On top of that, it manipulates colors so that the results stay
//! inside the sRGB gamut: It lightens and darkens, chromatizes and
//! dechromatizes, interpolates, and clips colors.
//!
//!
//! ## 1. Overview
//!
//! Okgamut's main abstractions are:
//!
//!   * The four **color representations** [`Rgb`], [`Hex`], [`Oklab`], and
//!     [`Oklch`], which all implement the [`ColorModel`] trait with its
//!     conversions, gamut test, and arithmetic. The [`Color`] enumeration
//!     wraps any one of them.
//!   * The **gamut boundary [`Solver`]**, which finds the cusp, i.e., the
//!     color with maximum chroma, for a hue and intersects lines in the
//!     lightness/chroma plane with the curved boundary of the sRGB gamut.
//!   * The **manipulation functions** in [`adjust`], which build on the solver
//!     to change chroma or lightness, to interpolate between colors, and to
//!     clip out-of-gamut colors.
#![cfg_attr(
    feature = "named",
    doc = "  * The [`named`] module with the **web colors** and lookup by name or
    by perceptual distance."
)]
//!   * The [`swatch`] module for **previewing colors** in 24-bit terminals.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use okgamut::{adjust, ColorModel, Hex, Oklch};
//! # use okgamut::adjust::{AdjustMethod, ChromaTarget};
//! # use okgamut::error::AdjustError;
//! # fn main() -> Result<(), AdjustError> {
//! let pink: Hex = "#DB7093".parse().expect("valid hex code");
//! let vivid = adjust::chromatize(
//!     0.5,
//!     &ChromaTarget::Color(pink.into()),
//!     AdjustMethod::Relative,
//! )?;
//!
//! assert!(vivid.is_in_gamut());
//! assert!(vivid.c() > pink.to_oklch().c());
//!
//! let clipped = adjust::gamut_clip_preserve_lightness(&Oklch::new(0.5, 10.0, 30.0));
//! assert!(clipped.is_in_gamut());
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Logging
//!
//! The crate logs through [`tracing`](https://docs.rs/tracing). The solver
//! emits `trace` events for its refinement steps, manipulations emit `debug`
//! events when they need to clip a result, and the solver emits a `warn` event
//! if it fails to converge. The crate never installs a subscriber.

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

pub mod adjust;
mod core;
pub mod error;
#[cfg(feature = "named")]
pub mod named;
mod object;
mod solver;
pub mod swatch;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ColorSpace, HuePath};
pub use object::{Color, ColorModel, Hex, Oklab, Oklch, Rgb};
pub use solver::{
    find_chroma_max, find_cusp, find_gamut_intersection, find_gamut_intersection_for,
    find_lightness_bounds, max_saturation, Anchor, Solver,
};
