//! Strict UTF-8 validation
//!
//! Both entry points rely on `core::str::from_utf8`, which rejects overlong
//! encodings, encoded surrogates, code points above U+10FFFF and sequences
//! truncated at the end of the input.

use crate::utils::StripBomError;
use core::str;

/// Check whether a byte sequence is complete, well-formed UTF-8
///
/// Empty input is valid. Malformed input yields `false`, never an error.
///
/// # Examples
///
/// ```rust
/// # use strip_bom_core::is_utf8;
/// assert!(is_utf8(b""));
/// assert!(is_utf8("Hello 世界 🌍".as_bytes()));
/// assert!(!is_utf8(&[0xC0, 0xAF])); // overlong '/'
/// assert!(!is_utf8(&[0xE4, 0xB8])); // truncated
/// ```
#[must_use]
pub fn is_utf8(bytes: &[u8]) -> bool {
    str::from_utf8(bytes).is_ok()
}

/// Validate UTF-8 and report where it breaks
///
/// # Examples
///
/// ```rust
/// # use strip_bom_core::{validate_utf8, StripBomError};
/// assert!(validate_utf8("Hello, 世界!".as_bytes()).is_ok());
///
/// let err = validate_utf8(&[b'H', b'i', 0xFF]).unwrap_err();
/// assert!(matches!(err, StripBomError::Utf8Error { position: 2, .. }));
/// ```
///
/// # Errors
///
/// Returns [`StripBomError::Utf8Error`] carrying the byte offset of the
/// first invalid or incomplete sequence.
pub fn validate_utf8(bytes: &[u8]) -> Result<(), StripBomError> {
    str::from_utf8(bytes).map(|_| ()).map_err(StripBomError::from)
}
