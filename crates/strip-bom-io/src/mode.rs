//! File read modes and the content they produce

use crate::error::FileError;
use std::{fmt, str::FromStr};

/// How a file's content is materialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadMode {
    /// Decode as UTF-8 text and strip `U+FEFF` (`"r"` or `"rt"`)
    #[default]
    Text,
    /// Keep raw bytes and strip `EF BB BF` if valid UTF-8 (`"rb"`)
    Binary,
}

impl ReadMode {
    /// Canonical mode string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "r",
            Self::Binary => "rb",
        }
    }
}

impl FromStr for ReadMode {
    type Err = FileError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "r" | "rt" => Ok(Self::Text),
            "rb" => Ok(Self::Binary),
            other => Err(FileError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File content with the byte order mark stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    /// Content read in text mode
    Text(String),
    /// Content read in binary mode
    Binary(Vec<u8>),
}

impl FileContents {
    /// Borrow the content as bytes regardless of mode
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// Borrow the text, if read in text mode
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }

    /// Take the content as bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }
}
