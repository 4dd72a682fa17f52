//! UTF-8 byte order mark signature
//!
//! Only the UTF-8 mark is known here. Marks of other encodings (UTF-16,
//! UTF-32) are never detected, so input starting with them passes through
//! every stripping operation untouched.

/// UTF-8 encoding of the byte order mark (EF BB BF)
pub const BOM_BYTES: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Byte order mark as it appears in decoded text
pub const BOM_CHAR: char = '\u{FEFF}';

/// Length of [`BOM_BYTES`] in bytes
pub const BOM_LEN: usize = BOM_BYTES.len();

/// Check whether `bytes` begins with the full UTF-8 byte order mark
///
/// This is a prefix test only. A partial mark (one or two bytes) does not
/// match, and the rest of the buffer is not validated.
///
/// # Examples
///
/// ```rust
/// # use strip_bom_core::starts_with_bom;
/// assert!(starts_with_bom(b"\xEF\xBB\xBFHi"));
/// assert!(!starts_with_bom(b"\xEF\xBBHi"));
/// assert!(!starts_with_bom(b"Hi\xEF\xBB\xBF"));
/// ```
#[must_use]
pub fn starts_with_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&BOM_BYTES)
}
