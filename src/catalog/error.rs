//! Error types for catalog operations
//!
//! Provides unified error handling for loading, validating, and watching
//! catalog files.

use thiserror::Error;

/// Errors that can occur while loading or watching a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two members share the same id
    #[error("Duplicate member id: {id}")]
    DuplicateMember { id: String },

    /// File watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<String> for CatalogError {
    fn from(s: String) -> Self {
        CatalogError::Other(s)
    }
}

impl From<&str> for CatalogError {
    fn from(s: &str) -> Self {
        CatalogError::Other(s.to_string())
    }
}
