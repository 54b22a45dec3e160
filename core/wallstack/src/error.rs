use thiserror::Error;

use crate::fit::CropRegion;

/// Error type returned by wallstack operations.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed to decode image: {0}")]
    DecodeFailure(String),

    #[error("dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("unsupported color mode: {0}")]
    UnsupportedColorMode(String),

    #[error("crop {region:?} exceeds scaled image bounds {width}x{height}")]
    CropOutOfBounds {
        region: CropRegion,
        width: u32,
        height: u32,
    },

    #[error("failed to encode image: {0}")]
    EncodeFailure(String),

    #[error("quality must be between 0.0 and 1.0, got {0}")]
    InvalidQuality(f32),

    #[error("failed to write {path}: {message}")]
    WriteFailure { path: String, message: String },
}
