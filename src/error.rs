use thiserror::Error;

/// Error type for background removal operations
///
/// This error type covers the precondition failures that can occur
/// when a pixel buffer is handed to the matting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatteError {
    /// Image dimensions are zero or inconsistent with the buffer length
    ///
    /// This error is returned before any pixel is touched, so the
    /// caller's buffer is left exactly as it was passed in.
    #[error("Invalid image: a {width}x{height} RGBA8 frame cannot be backed by a buffer of {buffer_len} bytes")]
    InvalidImage {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
        /// Actual length of the buffer in bytes
        buffer_len: usize,
    },
}

/// Error type for matte configuration
///
/// Configuration is validated when it is built, never while an image
/// is being scanned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter is outside the closed range `[0, 1]` or not finite
    #[error("{parameter} must be within [0, 1], got {value}")]
    OutOfRange {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Rejected value
        value: f32,
    },
}
