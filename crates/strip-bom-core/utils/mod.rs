//! Shared helpers for the stripping operations
//!
//! Holds the BOM constants, the UTF-8 validity predicate and the crate's
//! error types. Everything here is `nostd` compatible.

pub mod errors;
pub mod utf8;

pub use errors::{ErrorCategory, Result, StripBomError};
pub use utf8::{is_utf8, starts_with_bom, validate_utf8, BOM_BYTES, BOM_CHAR, BOM_LEN};
