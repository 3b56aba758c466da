//! Internal utility functions for imageops-matte.
//!
//! This module contains common functionality used across the matting stages.

use image::Primitive;
use imageproc::definitions::Clamp;

use crate::error::MatteError;

/// Number of interleaved channels in an RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Clamps a floating-point value to the range of a primitive type.
///
/// # Arguments
///
/// * `value` - The floating-point value to clamp
///
/// # Returns
///
/// The clamped value as the target primitive type
#[inline]
pub fn clamp_f32_to_primitive<T: Primitive + Clamp<f32>>(value: f32) -> T {
    T::clamp(value)
}

/// Validates that an RGBA8 buffer matches the declared dimensions.
///
/// Zero-sized dimensions are rejected, as is any size whose byte length
/// does not fit in `usize`.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
/// * `buffer_len` - The length of the interleaved buffer in bytes
///
/// # Returns
///
/// The number of pixels if the buffer is valid, otherwise `MatteError::InvalidImage`
pub fn validate_frame_dimensions(
    width: u32,
    height: u32,
    buffer_len: usize,
) -> Result<usize, MatteError> {
    let invalid = || MatteError::InvalidImage {
        width,
        height,
        buffer_len,
    };

    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(invalid)?;
    let expected_len = pixel_count
        .checked_mul(RGBA_CHANNELS)
        .ok_or_else(invalid)?;

    if expected_len != buffer_len {
        return Err(invalid());
    }

    Ok(pixel_count)
}
