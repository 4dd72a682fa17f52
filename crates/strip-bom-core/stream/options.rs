//! Configuration for stream stripping

use crate::utils::{utf8::BOM_LEN, Result, StripBomError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of bytes requested per read
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Stream stripping configuration
///
/// # Example
///
/// ```rust
/// # use strip_bom_core::{StreamOptions, DEFAULT_CHUNK_SIZE};
/// let options = StreamOptions::default();
/// assert_eq!(options.chunk_size(), DEFAULT_CHUNK_SIZE);
///
/// let small = StreamOptions::new(1)?;
/// assert_eq!(small.first_read_size(), 3);
/// # Ok::<(), strip_bom_core::StripBomError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct StreamOptions {
    /// Bytes requested per read after the first one
    chunk_size: usize,
}

impl StreamOptions {
    /// Create options with a custom chunk size
    ///
    /// # Errors
    ///
    /// Returns [`StripBomError::InvalidChunkSize`] for a chunk size of zero.
    pub const fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(StripBomError::InvalidChunkSize {
                requested: chunk_size,
            });
        }
        Ok(Self { chunk_size })
    }

    /// Bytes requested by every read after the first
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Bytes requested by the first read
    ///
    /// Never less than the length of the byte order mark, so a full mark can
    /// always be recognized.
    #[must_use]
    pub const fn first_read_size(&self) -> usize {
        if self.chunk_size > BOM_LEN {
            self.chunk_size
        } else {
            BOM_LEN
        }
    }
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl TryFrom<usize> for StreamOptions {
    type Error = StripBomError;

    fn try_from(chunk_size: usize) -> Result<Self> {
        Self::new(chunk_size)
    }
}

impl From<StreamOptions> for usize {
    fn from(options: StreamOptions) -> Self {
        options.chunk_size
    }
}
