//! Elementwise channel mapping.
//!
//! Every sample is transformed independently, so mapping is spread across
//! the rayon thread pool with no ordering requirement.

use rayon::prelude::*;

use crate::adjust::solver::CurveCoefficients;

/// Apply `f` to every sample of a channel, returning a new plane.
pub fn map_channel<F>(values: &[f32], f: F) -> Vec<f32>
where
    F: Fn(f32) -> f32 + Sync + Send,
{
    values.par_iter().map(|&v| f(v)).collect()
}

/// Evaluate `a·v² + b·v + c` for every sample and saturate into `[0, 1]`.
///
/// Out-of-range results are clamped, never reported.
pub fn apply_curve(values: &[f32], coefficients: &CurveCoefficients) -> Vec<f32> {
    let co = *coefficients;
    map_channel(values, move |v| {
        co.evaluate(f64::from(v)).clamp(0.0, 1.0) as f32
    })
}
