//! Error types for file stripping

use std::{
    io,
    path::{Path, PathBuf},
};
use strip_bom_core::StripBomError;
use thiserror::Error;

/// Errors raised while reading a file with its byte order mark stripped
///
/// Each file system condition a caller may want to react to has its own
/// variant; everything else ends up in [`FileError::Io`].
#[derive(Debug, Error)]
pub enum FileError {
    /// The path does not exist
    #[error("File not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path names a directory
    #[error("Is a directory: {}", path.display())]
    IsADirectory { path: PathBuf },

    /// The requested mode is not one of `r`, `rt` or `rb`
    #[error("Mode must be 'r', 'rt', or 'rb', got '{0}'")]
    UnsupportedMode(String),

    /// Text mode was requested but the file is not UTF-8
    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: StripBomError,
    },

    /// Any other I/O failure
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Map an I/O error for `path` onto the matching variant
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Path the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::IsADirectory { path }
            | Self::InvalidUtf8 { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::UnsupportedMode(_) => None,
        }
    }

    /// Check if the error is about the path rather than the content
    #[must_use]
    pub const fn is_path_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::IsADirectory { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FileError>;
