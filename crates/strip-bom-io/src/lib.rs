//! # strip-bom io
//!
//! File helpers on top of `strip-bom-core`: read a whole file with its UTF-8
//! byte order mark removed, or open it as a lazy chunked stream.
//!
//! ```rust,no_run
//! use strip_bom_io::{open_stream, read_to_string, StreamOptions};
//!
//! let script = read_to_string("episode01.ass")?;
//! assert!(!script.starts_with('\u{FEFF}'));
//!
//! for chunk in open_stream("episode01.ass", StreamOptions::default())? {
//!     println!("{} bytes", chunk?.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Enable the `async` feature for tokio based equivalents of the whole-file
//! readers.

#![deny(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "async")]
pub mod async_file;
pub mod error;
pub mod file;
pub mod mode;

#[cfg(feature = "async")]
pub use async_file::{read_async, read_to_string_async, strip_bom_file_async};
pub use error::{FileError, Result};
pub use file::{open_stream, read, read_to_string, strip_bom_file};
pub use mode::{FileContents, ReadMode};
pub use strip_bom_core::{StreamOptions, StripBomStream};
