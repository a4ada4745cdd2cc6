//! Error type shared by every adjustment operator.

use crate::image::Channel;

/// Errors produced while building or applying an adjustment.
#[derive(Debug, thiserror::Error)]
pub enum BlitError {
    /// Two control points share an input value, so no unique quadratic exists.
    #[error("degenerate curve: control point inputs {inputs:?} are not pairwise distinct")]
    DegenerateCurve {
        /// Normalized input coordinates of the offending triple.
        inputs: [f32; 3],
    },
    /// A channel plane does not hold `width * height` samples.
    #[error("{channel} plane has {found} samples, expected {expected}")]
    ShapeMismatch {
        channel: Channel,
        expected: usize,
        found: usize,
    },
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
    #[error("recipe JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlitError>;
