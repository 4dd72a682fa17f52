//! Core error type for strip-bom operations

use alloc::string::String;
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

use super::ErrorCategory;

/// Errors raised by the stripping operations themselves
///
/// Invalid UTF-8 behind a BOM is not an error for any stripping operation:
/// the input is simply returned unchanged.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripBomError {
    /// Stream chunk size of zero requested
    InvalidChunkSize { requested: usize },

    /// UTF-8 encoding errors
    Utf8Error { position: usize, message: String },
}

impl StripBomError {
    /// Create UTF-8 error with position
    #[must_use]
    pub const fn utf8_error(position: usize, message: String) -> Self {
        Self::Utf8Error { position, message }
    }

    /// Get the category of this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChunkSize { .. } => ErrorCategory::Contract,
            Self::Utf8Error { .. } => ErrorCategory::Encoding,
        }
    }
}

impl fmt::Display for StripBomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChunkSize { requested } => {
                write!(f, "Invalid chunk size {requested}: must be at least 1 byte")
            }
            Self::Utf8Error { position, message } => {
                write!(f, "UTF-8 encoding error at position {position}: {message}")
            }
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, StripBomError>;
