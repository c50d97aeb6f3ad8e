//! Error types for the catalog crate.
//!
//! Everything that can go wrong while loading or validating listings is
//! reported here, at the listing-source boundary. Downstream crates never
//! see a malformed record.

use thiserror::Error;

/// Errors that can occur while loading, parsing, or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fixture file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a fixture
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Fixture content couldn't be decoded
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Two listings share an id
    #[error("Duplicate listing id: {id}")]
    DuplicateListing { id: String },

    /// A field had a value outside its closed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
