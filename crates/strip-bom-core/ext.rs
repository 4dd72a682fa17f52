//! Method-call syntax for the stripping functions

use crate::{buffer::strip_bom_buffer, text::strip_bom};

/// Strip a leading UTF-8 byte order mark from borrowed data
///
/// Text follows [`strip_bom`]; bytes follow [`strip_bom_buffer`] and are
/// only stripped when they are valid UTF-8.
///
/// # Examples
///
/// ```rust
/// use strip_bom_core::StripBom;
///
/// assert_eq!("\u{FEFF}{}".strip_bom(), "{}");
/// assert_eq!(b"\xEF\xBB\xBF{}".as_slice().strip_bom(), b"{}");
/// ```
pub trait StripBom {
    /// Return the data without a leading byte order mark
    #[must_use]
    fn strip_bom(self) -> Self;
}

impl StripBom for &str {
    fn strip_bom(self) -> Self {
        strip_bom(self)
    }
}

impl StripBom for &[u8] {
    fn strip_bom(self) -> Self {
        strip_bom_buffer(self)
    }
}
