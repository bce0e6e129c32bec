//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service.

use crate::adapters::catalog_file::CatalogFileError;
use crate::config::ConfigError;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog document could not be read or failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogFileError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
