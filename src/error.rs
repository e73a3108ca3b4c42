use thiserror::Error;

/// Error type returned by smartresize operations.
#[derive(Debug, Error)]
pub enum SmartResizeError {
    /// The input bytes could not be decoded as a supported image format.
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    /// The source image has a zero width or height.
    #[error("source image dimensions are zero")]
    InvalidImage,

    /// A target frame has a zero width or height.
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidTarget {
        /// Requested target width.
        width: u32,
        /// Requested target height.
        height: u32,
    },

    /// JPEG quality outside the 1–100 range.
    #[error("quality must be between 1 and 100, got {0}")]
    InvalidQuality(u8),

    /// Encoding the output crop failed.
    #[error("failed to encode image: {0}")]
    EncodeError(String),

    /// The face detection model could not be loaded.
    #[cfg(feature = "rustface")]
    #[error("failed to load detection model: {0}")]
    ModelError(String),
}
