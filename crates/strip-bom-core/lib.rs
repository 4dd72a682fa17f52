//! # strip-bom core
//!
//! Removes the UTF-8 byte order mark (`EF BB BF`, decoded as `U+FEFF`) from
//! the start of text, raw byte buffers and chunked byte streams, so parsers
//! and loaders downstream never have to care about it.
//!
//! ## Features
//!
//! - **Zero-copy**: unchanged input is handed back as the very same slice
//! - **UTF-8 gated**: byte buffers are only stripped when they are valid UTF-8
//! - **Lazy streams**: chunked sources are read on demand, one chunk per pull
//! - **`no_std`**: only `alloc` is required without the `std` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use strip_bom_core::{strip_bom, strip_bom_buffer, strip_bom_stream};
//!
//! assert_eq!(strip_bom("\u{FEFF}unicorn"), "unicorn");
//! assert_eq!(strip_bom_buffer(b"\xEF\xBB\xBFunicorn"), b"unicorn");
//!
//! let source: &[u8] = b"\xEF\xBB\xBFunicorn";
//! let chunks = strip_bom_stream(source).collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(chunks.concat(), b"unicorn");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Only the UTF-8 mark at offset zero is ever removed. UTF-16 and UTF-32
//! marks, marks further into the data and line endings are left alone.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod ext;
pub mod stream;
pub mod text;
pub mod utils;

pub use buffer::{strip_bom_buffer, strip_bom_buffer_in_place};
pub use ext::StripBom;
pub use stream::{
    strip_bom_stream, strip_bom_stream_with, ByteSource, StreamOptions, StripBomStream,
    DEFAULT_CHUNK_SIZE,
};
pub use text::{strip_bom, strip_bom_in_place};
pub use utils::errors::{ErrorCategory, Result, StripBomError};
pub use utils::utf8::{is_utf8, starts_with_bom, validate_utf8, BOM_BYTES, BOM_CHAR, BOM_LEN};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
