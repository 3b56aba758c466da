use image::Rgb;
use log::trace;

use crate::imageops_matte::frame::RgbaFrame;

/// Number of border pixels sampled to estimate the background colour
pub const SAMPLE_POINT_COUNT: usize = 8;

/// Border coordinates sampled for the background estimate.
///
/// The four corners followed by the four edge midpoints. For frames
/// narrower or shorter than three pixels several points coincide; each
/// still counts as a separate sample.
pub fn sample_points(width: u32, height: u32) -> [(u32, u32); SAMPLE_POINT_COUNT] {
    let right = width.saturating_sub(1);
    let bottom = height.saturating_sub(1);
    let mid_x = width / 2;
    let mid_y = height / 2;

    [
        (0, 0),
        (right, 0),
        (0, bottom),
        (right, bottom),
        (mid_x, 0),
        (mid_x, bottom),
        (0, mid_y),
        (right, mid_y),
    ]
}

/// Estimates the uniform background colour of a frame.
///
/// Each channel is summed over the eight [`sample_points`] and divided by
/// eight with floor division. Alpha is ignored.
///
/// # Examples
///
/// ```
/// use imageops_matte::{estimate_background, RgbaFrame};
/// use image::Rgb;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut data = [90u8, 60, 30, 255].repeat(9);
/// let frame = RgbaFrame::new(3, 3, &mut data)?;
///
/// assert_eq!(estimate_background(&frame), Rgb([90, 60, 30]));
/// # Ok(())
/// # }
/// ```
pub fn estimate_background(frame: &RgbaFrame<'_>) -> Rgb<u8> {
    let (width, height) = frame.dimensions();

    let sums = sample_points(width, height)
        .into_iter()
        .map(|(x, y)| frame.rgb_at(x, y))
        .fold([0u32; 3], |mut sums, Rgb(channels)| {
            sums.iter_mut()
                .zip(channels)
                .for_each(|(sum, channel)| *sum += u32::from(channel));
            sums
        });

    trace!("border sample sums: {sums:?}");

    // The mean of eight u8 samples always fits in u8
    Rgb(sums.map(|sum| (sum / SAMPLE_POINT_COUNT as u32) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_bordered_rgba_data, create_uniform_rgba_data};

    #[test]
    fn sample_points_cover_corners_and_midpoints() {
        let points = sample_points(5, 3);
        assert_eq!(
            points,
            [(0, 0), (4, 0), (0, 2), (4, 2), (2, 0), (2, 2), (0, 1), (4, 1)]
        );
    }

    #[test]
    fn sample_points_collapse_for_single_pixel() {
        assert!(sample_points(1, 1).iter().all(|&point| point == (0, 0)));
    }

    #[test]
    fn uniform_frame_estimates_its_colour() {
        let mut data = create_uniform_rgba_data(6, 4, Rgb([12, 200, 77]));
        let frame = RgbaFrame::new(6, 4, &mut data).unwrap();

        assert_eq!(estimate_background(&frame), Rgb([12, 200, 77]));
    }

    #[test]
    fn interior_pixels_do_not_affect_estimate() {
        let mut data = create_bordered_rgba_data(3, 3, Rgb([200, 200, 200]), Rgb([10, 10, 10]));
        let frame = RgbaFrame::new(3, 3, &mut data).unwrap();

        assert_eq!(estimate_background(&frame), Rgb([200, 200, 200]));
    }

    #[test]
    fn estimate_uses_floor_division() {
        // One sampled corner differs: (7 * 100 + 107) / 8 = 100.875
        let mut data = create_uniform_rgba_data(4, 4, Rgb([100, 100, 100]));
        data[..3].copy_from_slice(&[107, 107, 107]);
        let frame = RgbaFrame::new(4, 4, &mut data).unwrap();

        assert_eq!(estimate_background(&frame), Rgb([100, 100, 100]));
    }

    #[test]
    fn single_pixel_frame_estimates_that_pixel() {
        let mut data = vec![3, 141, 59, 255];
        let frame = RgbaFrame::new(1, 1, &mut data).unwrap();

        assert_eq!(estimate_background(&frame), Rgb([3, 141, 59]));
    }

    #[test]
    fn duplicated_samples_are_weighted() {
        // 1x2: points hit (0,0) three times and (0,1) five times
        let mut data = vec![0, 0, 0, 255, 80, 80, 80, 255];
        let frame = RgbaFrame::new(1, 2, &mut data).unwrap();

        assert_eq!(estimate_background(&frame), Rgb([50, 50, 50]));
    }
}
