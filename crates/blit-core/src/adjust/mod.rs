//! Pixel adjustments: threshold and quadratic curves.

pub mod channel_spec;
pub mod curves;
pub mod mapper;
pub mod normalize;
pub mod solver;
pub mod threshold;

pub use channel_spec::ChannelSpec;
pub use curves::{Curve, curves, curves2, curves2_from_args};
pub use solver::{ControlPoint, ControlTriple, CurveCoefficients};
pub use threshold::{Threshold, threshold};
