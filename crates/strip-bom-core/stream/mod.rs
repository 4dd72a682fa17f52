//! Byte order mark removal for chunked byte streams
//!
//! Wraps a [`ByteSource`] in a lazy iterator of byte chunks. The first read
//! is probed for the mark with the buffer rule; every later chunk is passed
//! through untouched.
//!
//! # Features
//!
//! - Pull-driven: the source is read only inside [`Iterator::next`]
//! - Cancellation is dropping the iterator; no cleanup, no extra reads
//! - Read failures come back as the source's own error, exactly once
//!
//! # First-chunk boundary
//!
//! Only the bytes of the first read are checked for UTF-8 validity, not the
//! whole stream. When a multi-byte character straddles the end of the first
//! chunk, that chunk alone is invalid UTF-8 and the mark is kept even though
//! the full stream is valid. This matches buffer stripping applied to the
//! first chunk; no lookahead is done.
//!
//! # Example
//!
//! ```rust
//! use strip_bom_core::{strip_bom_stream_with, StreamOptions};
//!
//! let mut data = b"\xEF\xBB\xBF".to_vec();
//! data.extend_from_slice(&[b'x'; 20_000]);
//!
//! let chunks = strip_bom_stream_with(data.as_slice(), StreamOptions::new(1000)?)
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert!(chunks.len() > 1);
//! assert_eq!(chunks.concat(), vec![b'x'; 20_000]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod options;
mod source;
mod state;

pub use options::{StreamOptions, DEFAULT_CHUNK_SIZE};
pub use source::ByteSource;
pub use state::StreamState;

use crate::{buffer::strip_bom_buffer_in_place, utils::utf8::starts_with_bom};
use alloc::vec::Vec;
use core::iter::FusedIterator;
use log::{debug, trace};

/// Strip the byte order mark from a stream using the default chunk size
///
/// Equivalent to [`strip_bom_stream_with`] with [`StreamOptions::default`]
/// (8192 bytes per read). Nothing is read until the first pull.
///
/// # Example
///
/// ```rust
/// # use strip_bom_core::strip_bom_stream;
/// let source: &[u8] = b"\xEF\xBB\xBFx";
/// let chunks: Vec<Vec<u8>> = strip_bom_stream(source).collect::<Result<_, _>>()?;
/// assert_eq!(chunks, vec![b"x".to_vec()]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn strip_bom_stream<S: ByteSource>(source: S) -> StripBomStream<S> {
    StripBomStream::new(source, StreamOptions::default())
}

/// Strip the byte order mark from a stream with custom options
pub fn strip_bom_stream_with<S: ByteSource>(
    source: S,
    options: StreamOptions,
) -> StripBomStream<S> {
    StripBomStream::new(source, options)
}

/// Lazy sequence of byte chunks with the leading byte order mark removed
///
/// Yields `Ok(chunk)` for every non-empty chunk and `Err(error)` once if the
/// source fails, after which it is finished. Never yields empty chunks.
#[derive(Debug)]
pub struct StripBomStream<S> {
    /// Caller-supplied source
    source: S,
    /// Chunk size configuration
    options: StreamOptions,
    /// Position in the state machine
    state: StreamState,
    /// Whether the probing read lost its byte order mark
    bom_stripped: Option<bool>,
}

impl<S: ByteSource> StripBomStream<S> {
    /// Wrap a source without reading from it
    #[must_use]
    pub const fn new(source: S, options: StreamOptions) -> Self {
        Self {
            source,
            options,
            state: StreamState::AwaitingFirstRead,
            bom_stripped: None,
        }
    }

    /// Chunk size used for reads after the first
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.options.chunk_size()
    }

    /// Current state of the stream
    #[must_use]
    pub const fn state(&self) -> StreamState {
        self.state
    }

    /// Whether the byte order mark was stripped
    ///
    /// `None` until the first chunk has been read.
    #[must_use]
    pub const fn bom_stripped(&self) -> Option<bool> {
        self.bom_stripped
    }

    /// Borrow the underlying source
    #[must_use]
    pub const fn get_ref(&self) -> &S {
        &self.source
    }

    /// Give the source back, positioned after the last completed read
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Read one chunk, finishing the stream on failure or end of data
    fn read(&mut self, max_len: usize) -> Option<Result<Vec<u8>, S::Error>> {
        match self.source.read_chunk(max_len) {
            Ok(chunk) if chunk.is_empty() => {
                trace!("source exhausted");
                self.state.finish();
                None
            }
            Ok(chunk) => {
                trace!("read {} of {max_len} requested bytes", chunk.len());
                Some(Ok(chunk))
            }
            Err(err) => {
                debug!("source read failed; stream finished");
                self.state.finish();
                Some(Err(err))
            }
        }
    }

    /// Probe the first chunk and strip the mark from it
    ///
    /// Validity is judged on this chunk alone (see the module docs on the
    /// first-chunk boundary).
    fn read_first(&mut self) -> Option<Result<Vec<u8>, S::Error>> {
        let mut chunk = match self.read(self.options.first_read_size())? {
            Ok(chunk) => chunk,
            Err(err) => return Some(Err(err)),
        };
        self.state.start_streaming();

        let stripped = strip_bom_buffer_in_place(&mut chunk);
        self.bom_stripped = Some(stripped);
        if stripped {
            debug!("stripped UTF-8 byte order mark from first chunk");
        } else if starts_with_bom(&chunk) {
            debug!("first chunk is not valid UTF-8; byte order mark kept");
        }

        if chunk.is_empty() {
            // The first read held nothing but the mark
            return self.read(self.options.chunk_size());
        }
        Some(Ok(chunk))
    }
}

impl<S: ByteSource> Iterator for StripBomStream<S> {
    type Item = Result<Vec<u8>, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            StreamState::AwaitingFirstRead => self.read_first(),
            StreamState::Streaming => self.read(self.options.chunk_size()),
            StreamState::Done => None,
        }
    }
}

impl<S: ByteSource> FusedIterator for StripBomStream<S> {}
