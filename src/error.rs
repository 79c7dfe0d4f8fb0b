//! Custom error types for assetgen.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the assetgen library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image or crop dimensions are not usable.
    #[error("unsupported image dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// A colour string could not be parsed.
    #[error("invalid colour {value:?}: expected #RRGGBB")]
    InvalidColor { value: String },

    /// Failed to create an output directory.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for assetgen operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
