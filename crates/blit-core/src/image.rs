//! Planar RGBA image representation for the adjustment operators.

use std::fmt;

use image::Rgba32FImage;

use crate::error::{BlitError, Result};

/// One plane of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Alpha => write!(f, "alpha"),
        }
    }
}

/// Four same-shaped planes of `f32` samples, row-major, nominally in `[0, 1]`.
///
/// Fields are public so collaborators can hand over their own buffers; every
/// operator calls [`Image::validate`] before reading them.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    pub red: Vec<f32>,
    pub green: Vec<f32>,
    pub blue: Vec<f32>,
    /// Never modified by the adjustment operators.
    pub alpha: Vec<f32>,
}

impl Image {
    /// Assemble an image from four planes, checking that each has
    /// `width * height` samples.
    pub fn new(
        width: u32,
        height: u32,
        red: Vec<f32>,
        green: Vec<f32>,
        blue: Vec<f32>,
        alpha: Vec<f32>,
    ) -> Result<Self> {
        let image = Self {
            width,
            height,
            red,
            green,
            blue,
            alpha,
        };
        image.validate()?;
        Ok(image)
    }

    /// Solid image where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [f32; 4]) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            red: vec![rgba[0]; len],
            green: vec![rgba[1]; len],
            blue: vec![rgba[2]; len],
            alpha: vec![rgba[3]; len],
        }
    }

    /// Number of pixels each plane must hold.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that all four planes share the image dimensions.
    pub fn validate(&self) -> Result<()> {
        let expected = self.pixel_count();
        for channel in [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha] {
            let found = self.channel(channel).len();
            if found != expected {
                return Err(BlitError::ShapeMismatch {
                    channel,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    pub fn channel(&self, channel: Channel) -> &[f32] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Alpha => &self.alpha,
        }
    }

    /// Sample at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        Some([
            *self.red.get(idx)?,
            *self.green.get(idx)?,
            *self.blue.get(idx)?,
            *self.alpha.get(idx)?,
        ])
    }

    /// Split interleaved RGBA pixels into planes.
    pub fn from_interleaved(width: u32, height: u32, pixels: &[[f32; 4]]) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BlitError::ShapeMismatch {
                channel: Channel::Red,
                expected,
                found: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            red: pixels.iter().map(|p| p[0]).collect(),
            green: pixels.iter().map(|p| p[1]).collect(),
            blue: pixels.iter().map(|p| p[2]).collect(),
            alpha: pixels.iter().map(|p| p[3]).collect(),
        })
    }

    /// Interleave the planes back into RGBA pixels.
    pub fn to_interleaved(&self) -> Result<Vec<[f32; 4]>> {
        self.validate()?;
        Ok(self
            .red
            .iter()
            .zip(&self.green)
            .zip(&self.blue)
            .zip(&self.alpha)
            .map(|(((&r, &g), &b), &a)| [r, g, b, a])
            .collect())
    }

    /// Copy an `image` crate float buffer into planes.
    pub fn from_rgba32f(buffer: &Rgba32FImage) -> Self {
        let (width, height) = buffer.dimensions();
        let len = width as usize * height as usize;
        let mut red = Vec::with_capacity(len);
        let mut green = Vec::with_capacity(len);
        let mut blue = Vec::with_capacity(len);
        let mut alpha = Vec::with_capacity(len);
        for p in buffer.pixels() {
            red.push(p.0[0]);
            green.push(p.0[1]);
            blue.push(p.0[2]);
            alpha.push(p.0[3]);
        }
        Self {
            width,
            height,
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Interleave into an `image` crate float buffer.
    pub fn to_rgba32f(&self) -> Result<Rgba32FImage> {
        let samples: Vec<f32> = self.to_interleaved()?.into_iter().flatten().collect();
        let found = samples.len();
        Rgba32FImage::from_raw(self.width, self.height, samples).ok_or(BlitError::ShapeMismatch {
            channel: Channel::Red,
            expected: self.pixel_count() * 4,
            found,
        })
    }
}
