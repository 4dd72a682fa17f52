//! Blocking file helpers
//!
//! Every helper checks the path first so that missing files and directories
//! surface as their own error variants, then reads the file in one go. File
//! handles never outlive the call, except for [`open_stream`] where the
//! returned stream owns the handle.

use crate::{
    error::{FileError, Result},
    mode::{FileContents, ReadMode},
};
use log::debug;
use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};
use strip_bom_core::{
    strip_bom_buffer_in_place, strip_bom_in_place, strip_bom_stream_with, StreamOptions,
    StripBomStream,
};

/// Reject paths that cannot be read as a regular file
pub(crate) fn check_metadata(
    path: &Path,
    metadata: std::io::Result<fs::Metadata>,
) -> Result<()> {
    let metadata = metadata.map_err(|err| FileError::from_io(path, err))?;
    if metadata.is_dir() {
        debug!("refusing to read directory {}", path.display());
        return Err(FileError::IsADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Decode file content as UTF-8 and strip a leading `U+FEFF`
pub(crate) fn decode_text(path: &Path, bytes: Vec<u8>) -> Result<String> {
    let mut text = String::from_utf8(bytes).map_err(|err| FileError::InvalidUtf8 {
        path: path.to_path_buf(),
        source: err.utf8_error().into(),
    })?;
    if strip_bom_in_place(&mut text) {
        debug!("stripped byte order mark from {}", path.display());
    }
    Ok(text)
}

/// Strip `EF BB BF` from raw file content if it is valid UTF-8
pub(crate) fn strip_binary(path: &Path, mut bytes: Vec<u8>) -> Vec<u8> {
    if strip_bom_buffer_in_place(&mut bytes) {
        debug!("stripped byte order mark from {}", path.display());
    }
    bytes
}

/// Strip the byte order mark from raw file content according to `mode`
pub(crate) fn finish_contents(
    path: &Path,
    bytes: Vec<u8>,
    mode: ReadMode,
) -> Result<FileContents> {
    match mode {
        ReadMode::Text => decode_text(path, bytes).map(FileContents::Text),
        ReadMode::Binary => Ok(FileContents::Binary(strip_binary(path, bytes))),
    }
}

/// Read a whole regular file
fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    check_metadata(path, fs::metadata(path))?;
    fs::read(path).map_err(|err| FileError::from_io(path, err))
}

/// Read a file and strip its byte order mark
///
/// Text mode decodes the file as UTF-8 and removes a leading `U+FEFF`.
/// Binary mode keeps raw bytes and removes `EF BB BF` only when the whole
/// file is valid UTF-8. Line endings are left as they are.
///
/// # Example
///
/// ```rust,no_run
/// use strip_bom_io::{strip_bom_file, FileContents};
///
/// let contents = strip_bom_file("subtitles.srt", "r".parse()?)?;
/// if let FileContents::Text(text) = contents {
///     println!("{text}");
/// }
/// # Ok::<(), strip_bom_io::FileError>(())
/// ```
///
/// # Errors
///
/// Returns [`FileError::NotFound`], [`FileError::IsADirectory`],
/// [`FileError::InvalidUtf8`] (text mode only) or [`FileError::Io`].
pub fn strip_bom_file(path: impl AsRef<Path>, mode: ReadMode) -> Result<FileContents> {
    let path = path.as_ref();
    finish_contents(path, read_bytes(path)?, mode)
}

/// Read a UTF-8 file into a string without its byte order mark
///
/// # Errors
///
/// Same as [`strip_bom_file`] in text mode.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    decode_text(path, read_bytes(path)?)
}

/// Read a file's bytes without its byte order mark
///
/// # Errors
///
/// Same as [`strip_bom_file`] in binary mode.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    Ok(strip_binary(path, read_bytes(path)?))
}

/// Open a file as a lazy stream of chunks without its byte order mark
///
/// The returned stream owns the file handle; it is closed when the stream is
/// dropped, whether or not it was read to the end.
///
/// # Errors
///
/// Returns [`FileError::NotFound`], [`FileError::IsADirectory`] or
/// [`FileError::Io`] when the file cannot be opened. Read failures while
/// streaming are yielded by the stream itself.
pub fn open_stream(
    path: impl AsRef<Path>,
    options: StreamOptions,
) -> Result<StripBomStream<BufReader<File>>> {
    let path = path.as_ref();
    check_metadata(path, fs::metadata(path))?;
    let file = File::open(path).map_err(|err| FileError::from_io(path, err))?;
    debug!(
        "streaming {} in chunks of {} bytes",
        path.display(),
        options.chunk_size()
    );
    Ok(strip_bom_stream_with(BufReader::new(file), options))
}
