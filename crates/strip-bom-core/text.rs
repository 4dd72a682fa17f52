//! Byte order mark removal for decoded text
//!
//! Once UTF-8 has been decoded, the mark `EF BB BF` shows up as a single
//! leading `U+FEFF` character, so no validation is needed at this level.

use crate::utils::utf8::{BOM_CHAR, BOM_LEN};
use alloc::string::String;

/// Strip a single leading byte order mark from text
///
/// Returns a subslice without the mark if the text starts with `U+FEFF`.
/// Otherwise the input slice itself is returned, so callers can use pointer
/// equality to tell that nothing changed.
///
/// # Examples
///
/// ```rust
/// # use strip_bom_core::strip_bom;
/// assert_eq!(strip_bom("\u{FEFF}unicorn"), "unicorn");
///
/// let text = "unicorn";
/// assert!(core::ptr::eq(strip_bom(text), text));
/// ```
#[must_use]
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM_CHAR).unwrap_or(text)
}

/// Strip a leading byte order mark from an owned string
///
/// Shifts the remaining text down without reallocating. Returns whether a
/// mark was removed.
///
/// # Examples
///
/// ```rust
/// # use strip_bom_core::strip_bom_in_place;
/// let mut text = String::from("\u{FEFF}unicorn");
/// assert!(strip_bom_in_place(&mut text));
/// assert_eq!(text, "unicorn");
/// assert!(!strip_bom_in_place(&mut text));
/// ```
pub fn strip_bom_in_place(text: &mut String) -> bool {
    if text.starts_with(BOM_CHAR) {
        text.drain(..BOM_LEN);
        true
    } else {
        false
    }
}
