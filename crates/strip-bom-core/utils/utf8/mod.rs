//! UTF-8 byte order mark constants and validation utilities
//!
//! # Examples
//!
//! ```rust
//! use strip_bom_core::utils::utf8::{is_utf8, starts_with_bom, BOM_BYTES};
//!
//! assert!(starts_with_bom(&BOM_BYTES));
//! assert!(is_utf8("Hello, 世界! 🎵".as_bytes()));
//! assert!(!is_utf8(&[0xFF, 0xFE]));
//! ```

mod bom;
mod validation;

pub use bom::{starts_with_bom, BOM_BYTES, BOM_CHAR, BOM_LEN};
pub use validation::{is_utf8, validate_utf8};
