//! Curve adjustments inspired by the Photoshop "Curves" tool.
//!
//! Both operators fit one quadratic per colour channel through three control
//! points and remap every sample through it, clamped to `[0, 1]`. Alpha is
//! copied unchanged.
//!
//! - [`curves`] maps black/grey/white input levels to 0, 0.5 and 1.
//! - [`curves2`] takes arbitrary `(input, output)` triples, shared or per channel.

use crate::adjust::channel_spec::ChannelSpec;
use crate::adjust::mapper::apply_curve;
use crate::adjust::normalize::normalize;
use crate::adjust::solver::{ControlTriple, CurveCoefficients, solve, solve_triple};
use crate::error::Result;
use crate::image::Image;

/// Output levels that `curves` pins the black, grey and white inputs to.
const BLACK_GREY_WHITE_OUT: [f32; 3] = [0.0, 0.5, 1.0];

/// Solved coefficients for the red, green and blue channels.
///
/// Solving happens once; the same curve can then be applied to any number of
/// images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub coefficients: [CurveCoefficients; 3],
}

impl Curve {
    /// The identity curve on every channel.
    pub const IDENTITY: Self = Self {
        coefficients: [CurveCoefficients::IDENTITY; 3],
    };

    /// Curve sending the given black, grey and white input levels (0–255)
    /// to black, 50% grey and white on every channel.
    pub fn levels(black_grey_white: [f32; 3]) -> Result<Self> {
        let points = [0, 1, 2].map(|i| {
            [
                normalize(black_grey_white[i]),
                BLACK_GREY_WHITE_OUT[i],
            ]
        });
        let co = solve(points)?;
        Ok(Self {
            coefficients: [co; 3],
        })
    }

    /// Fit one curve per channel. A uniform spec is solved only once.
    pub fn from_spec(maps: &ChannelSpec<ControlTriple>) -> Result<Self> {
        let coefficients = match maps {
            ChannelSpec::Uniform(triple) => [solve_triple(triple)?; 3],
            ChannelSpec::PerChannel(red, green, blue) => [
                solve_triple(red)?,
                solve_triple(green)?,
                solve_triple(blue)?,
            ],
        };
        Ok(Self { coefficients })
    }

    pub fn apply(&self, image: &Image) -> Result<Image> {
        image.validate()?;
        let [red, green, blue] = &self.coefficients;
        Ok(Image {
            width: image.width,
            height: image.height,
            red: apply_curve(&image.red, red),
            green: apply_curve(&image.green, green),
            blue: apply_curve(&image.blue, blue),
            alpha: image.alpha.clone(),
        })
    }
}

/// Push the `black`, `grey` and `white` input levels to 0, 50% and 100%.
///
/// Darken a light image by moving light grey `0xCC` to mid grey:
/// `curves(&image, [0.0, 204.0, 255.0])`.
pub fn curves(image: &Image, black_grey_white: [f32; 3]) -> Result<Image> {
    Curve::levels(black_grey_white)?.apply(image)
}

/// Remap channels through quadratics fitted to `(input, output)` triples.
///
/// `[[0, 255], [128, 128], [255, 0]]` as a uniform spec is a monochrome
/// inversion.
pub fn curves2(image: &Image, maps: &ChannelSpec<ControlTriple>) -> Result<Image> {
    Curve::from_spec(maps)?.apply(image)
}

/// [`curves2`] with the red map reused unless both green and blue are given.
pub fn curves2_from_args(
    image: &Image,
    red: ControlTriple,
    green: Option<ControlTriple>,
    blue: Option<ControlTriple>,
) -> Result<Image> {
    curves2(image, &ChannelSpec::from_args(red, green, blue))
}
