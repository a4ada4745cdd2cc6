//! Blit Core: pixel-level colour adjustments for RGBA images.
//!
//! Threshold and quadratic "curves" operators over planar `f32` images.
//! No decoding, encoding or colour-space handling; callers hand in planes
//! already in `[0, 1]`.

pub mod adjust;
pub mod error;
pub mod image;
pub mod recipe;

// Re-exports for convenience.
pub use adjust::{
    ChannelSpec, ControlPoint, ControlTriple, Curve, CurveCoefficients, Threshold, curves, curves2,
    curves2_from_args, threshold,
};
pub use error::{BlitError, Result};
pub use crate::image::{Channel, Image};
pub use recipe::{Adjustment, Recipe};
