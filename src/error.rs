//! Error handling for the filter-uniq library
//!
//! The deduplication routines themselves are total and never fail. Errors only
//! come out of the sequence generators, configuration handling and the checked
//! bit set accessors.

use thiserror::Error;

/// Main error type for the filter-uniq library
#[derive(Error, Debug)]
pub enum DedupError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied argument was outside its valid range
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message describing the rejected argument
        message: String,
    },

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl DedupError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidArgument { .. } => "argument",
            Self::OutOfBounds { .. } => "bounds",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DedupError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(DedupError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
