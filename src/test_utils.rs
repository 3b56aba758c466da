//! Test utilities for imageops-matte
//!
//! This module provides common functionality for testing the matting stages.
//! It is only compiled when running tests.

use image::{Rgb, Rgba};
use imageproc::definitions::Image;
use itertools::iproduct;

/// Creates an opaque interleaved RGBA8 buffer filled with one colour.
///
/// # Returns
/// A buffer of `width × height × 4` bytes with every alpha at 255
pub fn create_uniform_rgba_data(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
    let Rgb([red, green, blue]) = color;
    [red, green, blue, u8::MAX].repeat(width as usize * height as usize)
}

/// Creates an opaque RGBA8 buffer with a one-pixel `border` frame around `interior`.
///
/// For a 3x3 buffer only the centre pixel is interior.
pub fn create_bordered_rgba_data(
    width: u32,
    height: u32,
    border: Rgb<u8>,
    interior: Rgb<u8>,
) -> Vec<u8> {
    iproduct!(0..height, 0..width)
        .flat_map(|(y, x)| {
            let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            let Rgb([red, green, blue]) = if on_border { border } else { interior };
            [red, green, blue, u8::MAX]
        })
        .collect()
}

/// Creates an opaque RGBA image with a one-pixel `border` frame around `interior`.
pub fn create_bordered_rgba_image(
    width: u32,
    height: u32,
    border: Rgb<u8>,
    interior: Rgb<u8>,
) -> Image<Rgba<u8>> {
    let data = create_bordered_rgba_data(width, height, border, interior);
    Image::from_raw(width, height, data).unwrap()
}

/// Extracts the alpha channel of an interleaved RGBA8 buffer.
pub fn alpha_channel(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(4).map(|pixel| pixel[3]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn create_uniform_rgba_data_fills_every_pixel() {
        let data = create_uniform_rgba_data(3, 2, Rgb([1, 2, 3]));
        assert_eq!(data.len(), 24);
        assert!(data.chunks_exact(4).all(|pixel| pixel == [1, 2, 3, 255]));
    }

    #[test]
    fn create_bordered_rgba_data_marks_interior() {
        let data = create_bordered_rgba_data(3, 3, Rgb([9, 9, 9]), Rgb([1, 1, 1]));
        let interior: Vec<usize> = data
            .chunks_exact(4)
            .positions(|pixel| pixel[0] == 1)
            .collect();
        assert_eq!(interior, vec![4]);
    }

    #[test]
    fn create_bordered_rgba_image_matches_buffer() {
        let image = create_bordered_rgba_image(4, 3, Rgb([9, 9, 9]), Rgb([1, 1, 1]));
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(1, 1), &Rgba([1, 1, 1, 255]));
        assert_eq!(image.get_pixel(3, 2), &Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn alpha_channel_picks_fourth_bytes() {
        assert_eq!(alpha_channel(&[1, 2, 3, 4, 5, 6, 7, 8]), vec![4, 8]);
    }
}
