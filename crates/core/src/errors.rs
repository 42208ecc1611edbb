//! Core error types for the AdLocal application.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for store operations.
///
/// The in-memory store and any future persistent store both map their
/// failures into this shape.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A collection lock was poisoned by a panicking writer.
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),

    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(i64),
}

impl Error {
    /// Shorthand for a `NotFound` store error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::Store(StoreError::NotFound(what.into()))
    }

    /// True when the error is a missing-record failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound(_)))
    }
}

// === From implementations for common error types ===

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
