//! Error types for the fallible edges of the canvas.
//!
//! Canvas operations themselves never fail: stale ids and history bounds
//! degrade to no-ops. Only image loading and settings persistence can error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an image for placement
#[derive(Error, Debug)]
pub enum LoadError {
    /// IO error reading the file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a recognized or decodable image
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Header decoded but reports an empty image
    #[error("Image has zero size ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// The background loader went away before delivering a result
    #[error("Image loader disconnected")]
    Disconnected,
}

/// Result type alias for image loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur reading or writing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform config directory is available
    #[error("No config directory available")]
    NoConfigDir,
}
