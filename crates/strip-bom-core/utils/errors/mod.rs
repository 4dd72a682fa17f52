//! Error types for the stripping operations
//!
//! Read failures of a [`ByteSource`](crate::ByteSource) are never wrapped
//! here: streams hand them back in the source's own error type. This module
//! only covers what the crate itself can reject.
//!
//! # Examples
//!
//! ```rust
//! use strip_bom_core::{ErrorCategory, StreamOptions, StripBomError};
//!
//! let err = StreamOptions::new(0).unwrap_err();
//! assert_eq!(err, StripBomError::InvalidChunkSize { requested: 0 });
//! assert_eq!(err.category(), ErrorCategory::Contract);
//! ```

mod category;
mod core;

pub use category::ErrorCategory;
pub use self::core::{Result, StripBomError};

use alloc::format;

/// Convert from `core::str::Utf8Error`, keeping the failing position
impl From<::core::str::Utf8Error> for StripBomError {
    fn from(err: ::core::str::Utf8Error) -> Self {
        let position = err.valid_up_to();
        let message = err.error_len().map_or_else(
            || format!("Incomplete UTF-8 sequence at position {position}"),
            |len| format!("Invalid UTF-8 sequence of {len} bytes at position {position}"),
        );
        Self::utf8_error(position, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString};

    #[test]
    fn error_display() {
        let error = StripBomError::InvalidChunkSize { requested: 0 };
        let display_str = format!("{error}");
        assert!(display_str.contains("Invalid chunk size"));
        assert!(display_str.contains('0'));

        let error = StripBomError::utf8_error(7, "bad byte".to_string());
        assert_eq!(
            error.to_string(),
            "UTF-8 encoding error at position 7: bad byte"
        );
    }

    #[test]
    fn error_categories() {
        assert_eq!(
            StripBomError::InvalidChunkSize { requested: 0 }.category(),
            ErrorCategory::Contract
        );
        assert_eq!(
            StripBomError::utf8_error(0, "x".to_string()).category(),
            ErrorCategory::Encoding
        );
    }

    #[test]
    fn error_from_utf8_error() {
        let bytes = [b'o', b'k', 0xC3];
        let err: StripBomError = ::core::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(
            err,
            StripBomError::utf8_error(2, "Incomplete UTF-8 sequence at position 2".to_string())
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&StripBomError::InvalidChunkSize { requested: 0 });
    }
}
