use image::{Pixel, Rgb, Rgba};

use crate::{
    error::MatteError,
    utils::{validate_frame_dimensions, RGBA_CHANNELS},
};

/// Index of the alpha channel within an RGBA pixel
pub(crate) const ALPHA: usize = 3;

/// A typed, borrowed view over a caller-owned interleaved RGBA8 buffer
///
/// The buffer is validated once on construction: both dimensions must be
/// non-zero and the length must equal `width × height × 4`. After that,
/// pixels are addressed by raster index (left-to-right, top-to-bottom) or by
/// `(x, y)` through named channel accessors. Colour channels are exposed
/// read-only; only alpha can be written.
///
/// The frame holds the only mutable borrow of the buffer for as long as it
/// lives, so no other code can observe or modify the pixels mid-run.
///
/// # Examples
///
/// ```
/// use imageops_matte::RgbaFrame;
/// use image::Rgb;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut data = vec![10, 20, 30, 255, 40, 50, 60, 255];
/// let mut frame = RgbaFrame::new(2, 1, &mut data)?;
///
/// assert_eq!(frame.rgb_at(1, 0), Rgb([40, 50, 60]));
/// frame.set_alpha(0, 0);
/// assert_eq!(frame.alpha(0), 0);
/// # Ok(())
/// # }
/// ```
///
/// Colour channels cannot be reached mutably from outside the crate:
///
/// ```compile_fail
/// use imageops_matte::RgbaFrame;
///
/// let mut data = vec![9, 9, 9, 255];
/// let mut frame = RgbaFrame::new(1, 1, &mut data).unwrap();
/// frame.pixels_mut().for_each(|pixel| pixel[0] = 0);
/// ```
#[derive(Debug)]
pub struct RgbaFrame<'a> {
    width: u32,
    height: u32,
    pixel_count: usize,
    data: &'a mut [u8],
}

impl<'a> RgbaFrame<'a> {
    /// Wraps `data` as a `width × height` RGBA8 frame.
    ///
    /// # Errors
    ///
    /// * `MatteError::InvalidImage` - When either dimension is zero or the
    ///   buffer length differs from `width × height × 4`
    pub fn new(width: u32, height: u32, data: &'a mut [u8]) -> Result<Self, MatteError> {
        let pixel_count = validate_frame_dimensions(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            pixel_count,
            data,
        })
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels in the frame, always at least one.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Raster index of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Frame index {:?} out of bounds {:?}",
            (x, y),
            (self.width, self.height)
        );
        y as usize * self.width as usize + x as usize
    }

    /// Colour channels of the pixel at raster `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`pixel_count`](Self::pixel_count).
    #[inline]
    pub fn rgb(&self, index: usize) -> Rgb<u8> {
        self.pixel(index).to_rgb()
    }

    /// Colour channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame.
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> Rgb<u8> {
        self.rgb(self.index_of(x, y))
    }

    /// Alpha of the pixel at raster `index`.
    #[inline]
    pub fn alpha(&self, index: usize) -> u8 {
        self.pixel(index)[ALPHA]
    }

    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.alpha(self.index_of(x, y))
    }

    /// Overwrites the alpha of the pixel at raster `index`.
    #[inline]
    pub fn set_alpha(&mut self, index: usize, alpha: u8) {
        self.pixel_mut(index)[ALPHA] = alpha;
    }

    /// Iterates all pixels in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = &Rgba<u8>> + '_ {
        self.data.chunks_exact(RGBA_CHANNELS).map(Rgba::<u8>::from_slice)
    }

    /// Iterates all pixels mutably in raster order.
    #[cfg_attr(feature = "rayon", allow(dead_code))]
    pub(crate) fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Rgba<u8>> + '_ {
        self.data
            .chunks_exact_mut(RGBA_CHANNELS)
            .map(Rgba::<u8>::from_slice_mut)
    }

    /// Iterates all pixels mutably, splitting the work across rows.
    #[cfg(feature = "rayon")]
    pub(crate) fn par_pixels_mut(
        &mut self,
    ) -> impl rayon::iter::ParallelIterator<Item = &mut Rgba<u8>> + '_ {
        use rayon::prelude::*;

        let row_stride = self.width as usize * RGBA_CHANNELS;
        self.data
            .par_chunks_exact_mut(row_stride)
            .flat_map_iter(|row| {
                row.chunks_exact_mut(RGBA_CHANNELS)
                    .map(Rgba::<u8>::from_slice_mut)
            })
    }

    #[inline]
    fn pixel(&self, index: usize) -> &Rgba<u8> {
        let start = index * RGBA_CHANNELS;
        Rgba::<u8>::from_slice(&self.data[start..start + RGBA_CHANNELS])
    }

    #[inline]
    fn pixel_mut(&mut self, index: usize) -> &mut Rgba<u8> {
        let start = index * RGBA_CHANNELS;
        Rgba::<u8>::from_slice_mut(&mut self.data[start..start + RGBA_CHANNELS])
    }
}
