use image::{Rgb, Rgba};
use imageproc::{definitions::Image, map::map_colors};
use log::debug;

use crate::{
    error::MatteError,
    imageops_matte::{
        alpha_refiner::refine_alpha,
        background_estimator::estimate_background,
        config::MatteConfig,
        frame::RgbaFrame,
        pixel_classifier::{classify_pixels, threshold},
    },
};

/// Summary of one background removal run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatteReport {
    /// Background colour estimated from the border samples
    pub background: Rgb<u8>,
    /// Colour-distance threshold derived from the sensitivity
    pub threshold: f32,
    /// Total number of pixels in the frame
    pub pixel_count: usize,
    /// Pixels whose alpha was cleared
    pub background_pixels: usize,
    /// Foreground pixels raised by edge smoothing
    pub edge_pixels: usize,
    /// Foreground pixels raised by detail preservation
    pub detail_pixels: usize,
}

impl MatteReport {
    /// Number of pixels left in the foreground.
    #[inline]
    pub const fn foreground_pixels(&self) -> usize {
        self.pixel_count - self.background_pixels
    }
}

/// Removes a uniform background from an interleaved RGBA8 buffer in place.
///
/// The buffer is validated before anything is written. On success every
/// background pixel has alpha 0 and foreground pixels keep or gain alpha
/// according to `config`. Colour channels are never modified.
///
/// # Arguments
///
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `data` - Row-major RGBA8 pixels, `width × height × 4` bytes
/// * `config` - Matte settings
///
/// # Errors
///
/// * `MatteError::InvalidImage` - When a dimension is zero or the buffer
///   length does not match; `data` is left untouched
///
/// # Examples
///
/// ```
/// use imageops_matte::{remove_background, MatteConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut data = [200u8, 200, 200, 255].repeat(9);
/// data[16..19].copy_from_slice(&[10, 10, 10]);
///
/// let report = remove_background(3, 3, &mut data, &MatteConfig::default())?;
///
/// assert_eq!(report.background_pixels, 8);
/// assert_eq!(data[19], 255);
/// # Ok(())
/// # }
/// ```
pub fn remove_background(
    width: u32,
    height: u32,
    data: &mut [u8],
    config: &MatteConfig,
) -> Result<MatteReport, MatteError> {
    let mut frame = RgbaFrame::new(width, height, data)?;
    Ok(remove_background_frame(&mut frame, config))
}

/// Runs estimation, classification and refinement over an already validated frame.
pub fn remove_background_frame(frame: &mut RgbaFrame<'_>, config: &MatteConfig) -> MatteReport {
    let background = estimate_background(frame);
    let threshold = threshold(config.sensitivity());
    debug!(
        "removing background {background:?} from {}x{} frame with threshold {threshold}",
        frame.width(),
        frame.height()
    );

    let background_pixels = classify_pixels(frame, background, threshold);
    let refined = refine_alpha(frame, background, threshold, config);

    let report = MatteReport {
        background,
        threshold,
        pixel_count: frame.pixel_count(),
        background_pixels,
        edge_pixels: refined.edge,
        detail_pixels: refined.detail,
    };
    debug!("{report:?}");
    report
}

/// Trait for removing a uniform background from RGBA images
///
/// # Examples
///
/// ```no_run
/// use imageops_matte::{Image, MatteConfig, RemoveBackgroundExt};
/// use image::Rgba;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let image: Image<Rgba<u8>> = Image::new(100, 100);
/// let config = MatteConfig::new(0.6, 0.4)?.with_auto_enhance(true);
///
/// let matted = image.remove_background(&config)?;
/// # Ok(())
/// # }
/// ```
pub trait RemoveBackgroundExt {
    /// Removes the background and returns the matted image.
    ///
    /// This consumes the original image.
    ///
    /// # Errors
    ///
    /// * `MatteError::InvalidImage` - When the image is empty
    fn remove_background(self, config: &MatteConfig) -> Result<Self, MatteError>
    where
        Self: Sized;

    /// Removes the background in place and reports what changed.
    ///
    /// # Errors
    ///
    /// * `MatteError::InvalidImage` - When the image is empty; the image is left untouched
    fn remove_background_mut(&mut self, config: &MatteConfig) -> Result<MatteReport, MatteError>;
}

impl RemoveBackgroundExt for Image<Rgba<u8>> {
    fn remove_background(mut self, config: &MatteConfig) -> Result<Self, MatteError> {
        self.remove_background_mut(config)?;
        Ok(self)
    }

    fn remove_background_mut(&mut self, config: &MatteConfig) -> Result<MatteReport, MatteError> {
        let (width, height) = self.dimensions();
        remove_background(width, height, &mut **self, config)
    }
}

/// Trait for giving RGB images a fully opaque alpha channel
///
/// Background removal expects every pixel to start opaque; this is the
/// conversion to use for decoded images without alpha.
pub trait AddOpaqueAlphaExt {
    fn add_opaque_alpha(&self) -> Image<Rgba<u8>>;
}

impl AddOpaqueAlphaExt for Image<Rgb<u8>> {
    fn add_opaque_alpha(&self) -> Image<Rgba<u8>> {
        map_colors(self, |Rgb([red, green, blue])| {
            Rgba([red, green, blue, u8::MAX])
        })
    }
}
