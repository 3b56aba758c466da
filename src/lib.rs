//! Uniform background removal for RGBA8 images.
//!
//! The background colour is estimated from eight border samples, pixels
//! closer to it than a sensitivity-derived threshold lose their alpha, and
//! the remaining foreground can optionally be refined with edge smoothing
//! and detail preservation. Everything runs in place over a caller-owned
//! buffer.

mod error;
mod imageops_matte;
#[cfg(test)]
mod test_utils;
mod utils;

pub use error::{ConfigError, MatteError};
pub use imageops_matte::alpha_refiner::{
    detail_alpha, edge_alpha, merge_alpha, refine_alpha, RefineCounts, DETAIL_BAND_FACTOR,
};
pub use imageops_matte::background_estimator::{
    estimate_background, sample_points, SAMPLE_POINT_COUNT,
};
pub use imageops_matte::config::MatteConfig;
pub use imageops_matte::frame::RgbaFrame;
pub use imageops_matte::pixel_classifier::{
    classify_pixels, color_distance, threshold, MIN_THRESHOLD, THRESHOLD_SPAN,
};
pub use imageops_matte::remove_background::{
    remove_background, remove_background_frame, AddOpaqueAlphaExt, MatteReport,
    RemoveBackgroundExt,
};
pub use imageproc::definitions::Image;
