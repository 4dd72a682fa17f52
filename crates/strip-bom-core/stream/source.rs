//! Chunked byte sources for stream stripping

use alloc::vec::Vec;

/// A readable supply of bytes, pulled in chunks
///
/// Implementors return up to `max_len` bytes per call and return fewer
/// (including zero) only at end of data. Errors are surfaced unchanged to
/// whoever drives the stream.
///
/// With the `std` feature every [`std::io::Read`] is a source. Pass
/// `&mut reader` to keep ownership of the reader and its position.
/// A reader that fails mid-chunk keeps the position it reached; the bytes
/// of that unfinished chunk are not yielded.
pub trait ByteSource {
    /// Error raised by a failed read
    type Error;

    /// Read the next chunk of at most `max_len` bytes
    ///
    /// # Errors
    ///
    /// Returns the source's own error when the read fails.
    fn read_chunk(&mut self, max_len: usize) -> Result<Vec<u8>, Self::Error>;
}

/// Upper bound on the buffer reserved up front for a single read
#[cfg(feature = "std")]
const MAX_PREALLOCATION: usize = 64 * 1024;

#[cfg(feature = "std")]
impl<R: std::io::Read + ?Sized> ByteSource for R {
    type Error = std::io::Error;

    /// Fill a chunk from the reader
    ///
    /// `io::Read::read` may return short counts before end of data, so this
    /// keeps reading until `max_len` bytes are collected or the reader is
    /// exhausted. Interrupted reads are retried.
    ///
    /// When a read fails partway through a chunk, the bytes already taken
    /// from the reader for that chunk are dropped along with it. The reader
    /// is left after those bytes, not at the start of the failed chunk.
    fn read_chunk(&mut self, max_len: usize) -> std::io::Result<Vec<u8>> {
        use std::io::Read;

        let limit = u64::try_from(max_len).unwrap_or(u64::MAX);
        let mut chunk = Vec::with_capacity(max_len.min(MAX_PREALLOCATION));
        Read::take(&mut *self, limit).read_to_end(&mut chunk)?;
        Ok(chunk)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use std::io::{self, Read};

    /// Reader that hands out at most `step` bytes per call
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn slice_source_reads_in_chunks() {
        let mut source: &[u8] = b"abcdefg";
        assert_eq!(source.read_chunk(3).unwrap(), b"abc");
        assert_eq!(source.read_chunk(3).unwrap(), b"def");
        assert_eq!(source.read_chunk(3).unwrap(), b"g");
        assert!(source.read_chunk(3).unwrap().is_empty());
    }

    #[test]
    fn short_reads_are_filled() {
        let mut source = Trickle {
            data: b"abcdefghij",
            step: 2,
        };
        assert_eq!(source.read_chunk(7).unwrap(), b"abcdefg");
        assert_eq!(source.read_chunk(7).unwrap(), b"hij");
    }

    #[test]
    fn zero_length_read() {
        let mut source: &[u8] = b"abc";
        assert!(source.read_chunk(0).unwrap().is_empty());
        assert_eq!(source, b"abc");
    }

    /// Reader that hands out two bytes per call and fails at `fail_at`
    struct FailingAt {
        data: io::Cursor<Vec<u8>>,
        fail_at: u64,
    }

    impl Read for FailingAt {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.position() >= self.fail_at {
                return Err(io::Error::new(io::ErrorKind::Other, "boom"));
            }
            let len = buf.len().min(2);
            self.data.read(&mut buf[..len])
        }
    }

    #[test]
    fn failed_read_drops_partial_chunk() {
        let mut source = FailingAt {
            data: io::Cursor::new(b"abcdefgh".to_vec()),
            fail_at: 4,
        };
        let err = source.read_chunk(8).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        // "abcd" was consumed but never returned
        assert_eq!(source.data.position(), 4);
    }

    #[test]
    fn borrowed_reader_keeps_position() {
        let mut cursor = io::Cursor::new(b"abcdef".to_vec());
        assert_eq!(ByteSource::read_chunk(&mut &mut cursor, 4).unwrap(), b"abcd");
        assert_eq!(cursor.position(), 4);
    }
}
