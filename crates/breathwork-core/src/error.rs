//! Core error types for breathwork-core.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::color::ColorError;

/// Core error type for breathwork-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State data loading/decoding errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Color parsing errors
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors loading or decoding the state data file.
///
/// These are non-fatal at the playback level: `StateCatalog::load` logs
/// them and falls back to the bookend-only catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the data file
    #[error("Failed to read state data at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file contents were not a valid state array
    #[error("Failed to decode state data: {0}")]
    DecodeFailed(#[source] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
