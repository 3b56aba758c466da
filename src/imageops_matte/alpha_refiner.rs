use image::Rgb;
use log::trace;

use crate::{
    imageops_matte::{config::MatteConfig, frame::RgbaFrame, pixel_classifier::color_distance},
    utils::clamp_f32_to_primitive,
};

/// Width of the detail band, as a multiple of the background threshold
pub const DETAIL_BAND_FACTOR: f32 = 1.5;

/// Number of pixels whose alpha each refinement raised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefineCounts {
    /// Pixels raised by edge smoothing
    pub edge: usize,
    /// Pixels raised by detail preservation
    pub detail: usize,
}

/// Merges a computed alpha into the current one without ever lowering it.
///
/// Both refinements write through this function, so a refined pixel can
/// only become more opaque.
#[inline]
pub fn merge_alpha(current: u8, computed: u8) -> u8 {
    current.max(computed)
}

/// Alpha given to foreground pixels that border removed background.
///
/// `round(255 × (0.5 + smoothness × 0.5))`, clamped to `[0, 255]`.
///
/// # Examples
///
/// ```
/// use imageops_matte::edge_alpha;
///
/// assert_eq!(edge_alpha(0.0), 128);
/// assert_eq!(edge_alpha(1.0), 255);
/// ```
#[inline]
pub fn edge_alpha(smoothness: f32) -> u8 {
    let edge_factor = smoothness * 0.5;
    quantize_alpha(255.0 * (0.5 + edge_factor))
}

/// Partial alpha for a pixel inside the detail band above the threshold.
///
/// Returns `None` when `distance` is at or beyond `threshold × 1.5`.
/// Otherwise the alpha grows linearly with distance:
/// `round(255 × distance / (threshold × 1.5))`.
///
/// # Examples
///
/// ```
/// use imageops_matte::detail_alpha;
///
/// assert_eq!(detail_alpha(48.75, 65.0), Some(128));
/// assert_eq!(detail_alpha(97.5, 65.0), None);
/// ```
#[inline]
pub fn detail_alpha(distance: f32, threshold: f32) -> Option<u8> {
    let band = threshold * DETAIL_BAND_FACTOR;
    (distance < band).then(|| quantize_alpha(255.0 * distance / band))
}

/// Raises alpha on foreground pixels according to the enabled refinements.
///
/// Runs in raster order over a frame that [`classify_pixels`] has already
/// processed with the same `reference` and `threshold`. A pixel is foreground
/// when its distance to `reference` is at least `threshold`; background
/// pixels are skipped.
///
/// * Edge smoothing (`auto_enhance`): when the previous or next pixel in
///   raster order has alpha 0, merge in [`edge_alpha`]. The first and last
///   pixel of the frame have only one neighbour and are skipped.
/// * Detail preservation (`preserve_hair`): merge in [`detail_alpha`] when
///   the pixel falls inside the detail band.
///
/// Applying this twice with the same arguments changes nothing the second
/// time.
///
/// [`classify_pixels`]: crate::classify_pixels
pub fn refine_alpha(
    frame: &mut RgbaFrame<'_>,
    reference: Rgb<u8>,
    threshold: f32,
    config: &MatteConfig,
) -> RefineCounts {
    let mut counts = RefineCounts::default();
    if !config.refines() {
        return counts;
    }

    let last = frame.pixel_count() - 1;
    let edge = edge_alpha(config.smoothness());

    for index in 0..=last {
        let distance = color_distance(frame.rgb(index), reference);
        if distance < threshold {
            continue;
        }

        let current = frame.alpha(index);
        let mut alpha = current;

        let interior = index > 0 && index < last;
        if config.auto_enhance() && interior && borders_background(frame, index) {
            let merged = merge_alpha(alpha, edge);
            if merged != alpha {
                counts.edge += 1;
            }
            alpha = merged;
        }

        if config.preserve_hair() {
            if let Some(detail) = detail_alpha(distance, threshold) {
                let merged = merge_alpha(alpha, detail);
                if merged != alpha {
                    counts.detail += 1;
                }
                alpha = merged;
            }
        }

        if alpha != current {
            frame.set_alpha(index, alpha);
        }
    }

    trace!(
        "refined {} edge and {} detail pixels",
        counts.edge,
        counts.detail
    );

    counts
}

#[inline]
fn borders_background(frame: &RgbaFrame<'_>, index: usize) -> bool {
    frame.alpha(index - 1) == 0 || frame.alpha(index + 1) == 0
}

#[inline]
fn quantize_alpha(value: f32) -> u8 {
    clamp_f32_to_primitive(value.round())
}
