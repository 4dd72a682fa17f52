//! Tokio based whole-file readers
//!
//! These mirror the blocking helpers in [`crate::file`] and share their
//! stripping rules.

use crate::{
    error::{FileError, Result},
    file::{check_metadata, decode_text, finish_contents, strip_binary},
    mode::{FileContents, ReadMode},
};
use std::path::Path;

/// Read a whole regular file without blocking
async fn read_bytes_async(path: &Path) -> Result<Vec<u8>> {
    check_metadata(path, tokio::fs::metadata(path).await)?;
    tokio::fs::read(path)
        .await
        .map_err(|err| FileError::from_io(path, err))
}

/// Read a file asynchronously and strip its byte order mark
///
/// # Errors
///
/// Same as [`crate::strip_bom_file`].
pub async fn strip_bom_file_async(
    path: impl AsRef<Path>,
    mode: ReadMode,
) -> Result<FileContents> {
    let path = path.as_ref();
    finish_contents(path, read_bytes_async(path).await?, mode)
}

/// Read a UTF-8 file asynchronously into a string without its byte order mark
///
/// # Errors
///
/// Same as [`crate::read_to_string`].
pub async fn read_to_string_async(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    decode_text(path, read_bytes_async(path).await?)
}

/// Read a file's bytes asynchronously without its byte order mark
///
/// # Errors
///
/// Same as [`crate::read`].
pub async fn read_async(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    Ok(strip_binary(path, read_bytes_async(path).await?))
}
