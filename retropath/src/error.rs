//! Error types for the retropath library.
//!
//! This module provides the error hierarchy for path composition, special
//! directory resolution and settings handling, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a retropath error.
///
/// # Examples
///
/// ```
/// use retropath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the retropath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A composed path (plus its terminator) does not fit the destination.
    ///
    /// The destination buffer is left empty when this is returned.
    #[error("buffer too small: {required} bytes required, capacity is {capacity}")]
    BufferTooSmall {
        /// Bytes needed, terminator included.
        required: usize,
        /// Capacity declared by the caller.
        capacity: usize,
    },

    /// No strategy could determine a path.
    #[error("could not resolve {what}")]
    PathNotResolved {
        /// What was being located (e.g. "application path").
        what: String,
    },

    /// A directory kind name was not recognized.
    #[error("unknown directory kind '{name}'")]
    UnknownKind {
        /// The unrecognized name.
        name: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A settings file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Returns true when this error is a capacity violation.
    #[must_use]
    pub const fn is_buffer_too_small(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. })
    }
}
