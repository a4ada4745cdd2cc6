//! Conversion from 8-bit levels to the `[0, 1]` working domain.

/// Largest 8-bit level.
pub const MAX_LEVEL: f32 = 255.0;

/// Map a 0–255 level into the working domain.
///
/// Values outside `[0, 255]` are passed through unchecked.
pub fn normalize(level: f32) -> f32 {
    level / MAX_LEVEL
}
