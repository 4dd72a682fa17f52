//! Byte order mark removal for raw byte buffers
//!
//! A buffer only loses its leading `EF BB BF` when the whole buffer, mark
//! included, is valid UTF-8. Binary data that merely happens to start with
//! those three bytes is never modified.

use crate::utils::utf8::{is_utf8, starts_with_bom, BOM_LEN};
use alloc::vec::Vec;
use log::debug;

/// Check whether a buffer qualifies for stripping
fn should_strip(bytes: &[u8]) -> bool {
    if !starts_with_bom(bytes) {
        return false;
    }
    if is_utf8(bytes) {
        true
    } else {
        debug!("buffer of {} bytes is not valid UTF-8; byte order mark kept", bytes.len());
        false
    }
}

/// Strip the UTF-8 byte order mark from a byte buffer
///
/// The mark is removed if and only if the buffer is at least three bytes
/// long, starts with exactly `EF BB BF`, and is valid UTF-8 as a whole.
/// In every other case the input slice itself is returned.
///
/// # Examples
///
/// ```rust
/// # use strip_bom_core::strip_bom_buffer;
/// assert_eq!(strip_bom_buffer(b"\xEF\xBB\xBFunicorn"), b"unicorn");
///
/// // Invalid UTF-8 after the mark: left untouched
/// let binary = b"\xEF\xBB\xBF\xFF\xFE";
/// assert_eq!(strip_bom_buffer(binary), binary);
/// ```
#[must_use]
pub fn strip_bom_buffer(bytes: &[u8]) -> &[u8] {
    if should_strip(bytes) {
        &bytes[BOM_LEN..]
    } else {
        bytes
    }
}

/// Strip the UTF-8 byte order mark from a caller-owned buffer
///
/// Same rule as [`strip_bom_buffer`]. The remaining bytes are shifted down
/// in place and the capacity is kept. Returns whether a mark was removed.
///
/// # Examples
///
/// ```rust
/// # use strip_bom_core::strip_bom_buffer_in_place;
/// let mut bytes = b"\xEF\xBB\xBFunicorn".to_vec();
/// assert!(strip_bom_buffer_in_place(&mut bytes));
/// assert_eq!(bytes, b"unicorn");
/// ```
pub fn strip_bom_buffer_in_place(bytes: &mut Vec<u8>) -> bool {
    if should_strip(bytes) {
        bytes.drain(..BOM_LEN);
        true
    } else {
        false
    }
}
