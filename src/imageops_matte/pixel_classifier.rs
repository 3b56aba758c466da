use image::{Pixel, Rgb, Rgba};
use log::trace;

use crate::imageops_matte::frame::{RgbaFrame, ALPHA};

/// Background threshold at sensitivity 1.0
pub const MIN_THRESHOLD: f32 = 30.0;

/// Width of the threshold range swept by sensitivity
pub const THRESHOLD_SPAN: f32 = 70.0;

/// Colour-distance threshold below which a pixel counts as background.
///
/// `30 + 70 × (1 − sensitivity)`, so the threshold falls from 100 at
/// sensitivity 0 to 30 at sensitivity 1. Higher sensitivity removes fewer
/// pixels.
///
/// # Examples
///
/// ```
/// use imageops_matte::threshold;
///
/// assert_eq!(threshold(0.0), 100.0);
/// assert_eq!(threshold(0.5), 65.0);
/// assert_eq!(threshold(1.0), 30.0);
/// ```
#[inline]
pub fn threshold(sensitivity: f32) -> f32 {
    MIN_THRESHOLD + THRESHOLD_SPAN * (1.0 - sensitivity)
}

/// Euclidean distance between two colours in RGB space.
#[inline]
pub fn color_distance(color: Rgb<u8>, reference: Rgb<u8>) -> f32 {
    let Rgb(channels) = color;
    let Rgb(reference) = reference;

    let squared: u32 = channels
        .into_iter()
        .zip(reference)
        .map(|(channel, reference)| u32::from(channel.abs_diff(reference)).pow(2))
        .sum();

    (squared as f32).sqrt()
}

/// Clears alpha on every pixel closer than `threshold` to `reference`.
///
/// Pixels at or beyond the threshold keep their alpha for the refinement
/// pass. Colour channels are never written.
///
/// # Returns
///
/// The number of pixels classified as background
pub fn classify_pixels(frame: &mut RgbaFrame<'_>, reference: Rgb<u8>, threshold: f32) -> usize {
    let classify = |pixel: &mut Rgba<u8>| usize::from(classify_pixel(pixel, reference, threshold));

    #[cfg(feature = "rayon")]
    let background: usize = {
        use rayon::prelude::*;
        frame.par_pixels_mut().map(classify).sum()
    };

    #[cfg(not(feature = "rayon"))]
    let background: usize = frame.pixels_mut().map(classify).sum();

    trace!(
        "classified {background} of {} pixels as background",
        frame.pixel_count()
    );

    background
}

#[inline]
fn classify_pixel(pixel: &mut Rgba<u8>, reference: Rgb<u8>, threshold: f32) -> bool {
    let is_background = color_distance(pixel.to_rgb(), reference) < threshold;
    if is_background {
        pixel[ALPHA] = 0;
    }
    is_background
}
