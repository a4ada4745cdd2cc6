//! Quadratic curve fitting through three control points.
//!
//! Given `(x₁, y₁), (x₂, y₂), (x₃, y₃)` with pairwise distinct `x`, finds the
//! unique `y = a·x² + b·x + c` passing through all three.
//!
//! # Algorithm
//! Expands the degree-2 Lagrange basis. With `dᵢ = Π_{j≠i} (xᵢ − xⱼ)`:
//! ```text
//! a =   Σ yᵢ / dᵢ
//! b = − Σ yᵢ (xⱼ + xₖ) / dᵢ
//! c =   Σ yᵢ xⱼ xₖ / dᵢ
//! ```
//! where `j, k` are the two other indices.
//!
//! # Complexity
//! O(1): a fixed handful of multiplications per channel.

use serde::{Deserialize, Serialize};

use crate::adjust::normalize::normalize;
use crate::error::{BlitError, Result};

/// An `(input, output)` pair in the 0–255 level domain.
///
/// Serialized as a two-element array, `[input, output]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct ControlPoint {
    pub input: f32,
    pub output: f32,
}

impl ControlPoint {
    pub const fn new(input: f32, output: f32) -> Self {
        Self { input, output }
    }

    /// Both coordinates mapped into `[0, 1]`.
    pub fn normalized(self) -> [f32; 2] {
        [normalize(self.input), normalize(self.output)]
    }
}

impl From<[f32; 2]> for ControlPoint {
    fn from([input, output]: [f32; 2]) -> Self {
        Self { input, output }
    }
}

impl From<ControlPoint> for [f32; 2] {
    fn from(point: ControlPoint) -> Self {
        [point.input, point.output]
    }
}

/// Three control points, conventionally in ascending input order.
pub type ControlTriple = [ControlPoint; 3];

/// Coefficients of `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl CurveCoefficients {
    /// `y = x`.
    pub const IDENTITY: Self = Self {
        a: 0.0,
        b: 1.0,
        c: 0.0,
    };

    /// Evaluate the polynomial without clamping.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

/// Fit a quadratic through three normalized `[x, y]` points.
///
/// Fails with [`BlitError::DegenerateCurve`] when two `x` values coincide
/// (or the inputs are not finite). Unsorted inputs are accepted.
pub fn solve(points: [[f32; 2]; 3]) -> Result<CurveCoefficients> {
    let inputs = [points[0][0], points[1][0], points[2][0]];
    let [x1, x2, x3] = inputs.map(f64::from);
    let [y1, y2, y3] = [points[0][1], points[1][1], points[2][1]].map(f64::from);

    let d1 = (x1 - x2) * (x1 - x3);
    let d2 = (x2 - x1) * (x2 - x3);
    let d3 = (x3 - x1) * (x3 - x2);
    if d1 == 0.0 || d2 == 0.0 || d3 == 0.0 {
        return Err(BlitError::DegenerateCurve { inputs });
    }

    if !(x1 < x2 && x2 < x3) {
        tracing::warn!("curve control points are not in ascending input order: {inputs:?}");
    }

    let (w1, w2, w3) = (y1 / d1, y2 / d2, y3 / d3);
    let coefficients = CurveCoefficients {
        a: w1 + w2 + w3,
        b: -(w1 * (x2 + x3) + w2 * (x1 + x3) + w3 * (x1 + x2)),
        c: w1 * x2 * x3 + w2 * x1 * x3 + w3 * x1 * x2,
    };
    if !coefficients.is_finite() {
        return Err(BlitError::DegenerateCurve { inputs });
    }

    tracing::debug!(
        "solved curve a={:.6} b={:.6} c={:.6}",
        coefficients.a,
        coefficients.b,
        coefficients.c
    );
    Ok(coefficients)
}

/// Normalize a 0–255 triple and fit it.
pub fn solve_triple(triple: &ControlTriple) -> Result<CurveCoefficients> {
    solve((*triple).map(ControlPoint::normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_coefficients(got: CurveCoefficients, a: f64, b: f64, c: f64) {
        assert!(
            (got.a - a).abs() < EPSILON && (got.b - b).abs() < EPSILON && (got.c - c).abs() < EPSILON,
            "got a={:.9} b={:.9} c={:.9}, expected a={a} b={b} c={c}",
            got.a,
            got.b,
            got.c
        );
    }

    #[test]
    fn test_collinear_points_give_line() {
        let co = solve([[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]).unwrap();
        assert_coefficients(co, 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_parabola_is_recovered() {
        let co = solve([[0.0, 0.0], [0.5, 0.25], [1.0, 1.0]]).unwrap();
        assert_coefficients(co, 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_curve_passes_through_control_points() {
        let points = [[0.1, 0.3], [0.4, 0.9], [0.8, 0.2]];
        let co = solve(points).unwrap();
        for [x, y] in points {
            assert!((co.evaluate(f64::from(x)) - f64::from(y)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_point_order_does_not_change_curve() {
        let sorted = solve([[0.1, 0.3], [0.4, 0.9], [0.8, 0.2]]).unwrap();
        let shuffled = solve([[0.8, 0.2], [0.1, 0.3], [0.4, 0.9]]).unwrap();
        assert_coefficients(shuffled, sorted.a, sorted.b, sorted.c);
    }

    #[test]
    fn test_repeated_input_is_degenerate() {
        let triple = [
            ControlPoint::new(0.0, 10.0),
            ControlPoint::new(0.0, 20.0),
            ControlPoint::new(255.0, 255.0),
        ];
        assert!(matches!(
            solve_triple(&triple),
            Err(BlitError::DegenerateCurve { .. })
        ));
    }

    #[test]
    fn test_nan_input_is_degenerate() {
        let result = solve([[0.0, 0.0], [f32::NAN, 0.5], [1.0, 1.0]]);
        assert!(matches!(result, Err(BlitError::DegenerateCurve { .. })));
    }

    #[test]
    fn test_solve_triple_normalizes_levels() {
        let triple = [
            ControlPoint::new(0.0, 255.0),
            ControlPoint::new(128.0, 128.0),
            ControlPoint::new(255.0, 0.0),
        ];
        let co = solve_triple(&triple).unwrap();
        assert!((co.evaluate(0.0) - 1.0).abs() < 1e-6);
        assert!(co.evaluate(1.0).abs() < 1e-6);
        // 128/255 is not exactly mid-grey, so the fit bows slightly off 1 - x.
        for i in 0..=10 {
            let x = f64::from(i) / 10.0;
            assert!((co.evaluate(x) - (1.0 - x)).abs() < 0.005);
        }
    }

    #[test]
    fn test_control_point_serializes_as_pair() {
        let point: ControlPoint = serde_json::from_str("[153, 102]").unwrap();
        assert_eq!(point, ControlPoint::new(153.0, 102.0));
        assert_eq!(serde_json::to_string(&point).unwrap(), "[153.0,102.0]");
    }
}
