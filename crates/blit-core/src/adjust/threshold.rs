//! Binary per-channel threshold.

use crate::adjust::channel_spec::ChannelSpec;
use crate::adjust::mapper::map_channel;
use crate::adjust::normalize::normalize;
use crate::error::Result;
use crate::image::Image;

/// Per-channel cutoffs, stored normalized.
///
/// A sample becomes `1.0` when strictly greater than its channel's cutoff and
/// `0.0` otherwise, so a sample equal to the cutoff maps to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    cutoffs: [f32; 3],
}

impl Threshold {
    /// Build from 0–255 cutoffs.
    pub fn new(levels: ChannelSpec<f32>) -> Self {
        Self {
            cutoffs: levels.map(normalize).resolve(),
        }
    }

    /// Build from a red cutoff and optional green/blue cutoffs.
    pub fn from_args(red: f32, green: Option<f32>, blue: Option<f32>) -> Self {
        Self::new(ChannelSpec::from_args(red, green, blue))
    }

    /// Normalized `[red, green, blue]` cutoffs.
    pub fn cutoffs(&self) -> [f32; 3] {
        self.cutoffs
    }

    pub fn apply(&self, image: &Image) -> Result<Image> {
        image.validate()?;
        let [red, green, blue] = self.cutoffs;
        Ok(Image {
            width: image.width,
            height: image.height,
            red: step(&image.red, red),
            green: step(&image.green, green),
            blue: step(&image.blue, blue),
            alpha: image.alpha.clone(),
        })
    }
}

fn step(values: &[f32], cutoff: f32) -> Vec<f32> {
    map_channel(values, move |v| if v > cutoff { 1.0 } else { 0.0 })
}

/// Threshold adjustment as an image-to-image function.
///
/// If either `green` or `blue` is missing, `red` is used for all channels.
pub fn threshold(
    red: f32,
    green: Option<f32>,
    blue: Option<f32>,
) -> impl Fn(&Image) -> Result<Image> {
    let op = Threshold::from_args(red, green, blue);
    move |image: &Image| op.apply(image)
}
