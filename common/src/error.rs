//! Error handling for the roda-common crate.
//!
//! Two failure kinds exist: one for stores and one for datasets. Neither
//! carries a subtaxonomy; each holds a developer facing message and an
//! optional underlying cause.

use thiserror::Error;

/// Any error related to a store.
///
/// Raised when a backing resource is unavailable or when enumerating the
/// datasets of a store fails.
#[derive(Error, Debug)]
#[error("Object store operation failed: {message}")]
pub struct ObjectStoreError {
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// Any error related to a dataset.
///
/// Raised for malformed records and failed lookups.
#[derive(Error, Debug)]
#[error("Dataset operation failed: {message}")]
pub struct DatasetError {
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// Result type alias for store operations.
pub type ObjectStoreResult<T> = std::result::Result<T, ObjectStoreError>;

/// Result type alias for dataset operations.
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

impl ObjectStoreError {
    /// Create a store error with a custom message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error with a custom message and source error.
    pub fn with_source<S: Into<String>, E: Into<anyhow::Error>>(message: S, source: E) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The message this error was created with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl DatasetError {
    /// Create a dataset error with a custom message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a dataset error with a custom message and source error.
    pub fn with_source<S: Into<String>, E: Into<anyhow::Error>>(message: S, source: E) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The message this error was created with.
    pub fn message(&self) -> &str {
        &self.message
    }
}
