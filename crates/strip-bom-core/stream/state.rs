//! State management for stream stripping
//!
//! The stream is a pull-driven state machine. It only moves forward:
//! `AwaitingFirstRead -> Streaming -> Done`, or straight to `Done` when the
//! first read is empty or fails.

/// Stream stripping state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Nothing read yet; the next pull probes for the byte order mark
    AwaitingFirstRead,
    /// First chunk handled; later chunks pass through verbatim
    Streaming,
    /// Source exhausted or failed; no further reads will happen
    Done,
}

impl StreamState {
    /// Check whether the stream can still produce chunks
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Done)
    }

    /// Move past the probing read
    pub fn start_streaming(&mut self) {
        *self = Self::Streaming;
    }

    /// Finish the stream for good
    pub fn finish(&mut self) {
        *self = Self::Done;
    }
}

impl Default for StreamState {
    fn default() -> Self {
        Self::AwaitingFirstRead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = StreamState::default();
        assert_eq!(state, StreamState::AwaitingFirstRead);
        assert!(state.is_active());
    }

    #[test]
    fn transitions() {
        let mut state = StreamState::default();
        state.start_streaming();
        assert_eq!(state, StreamState::Streaming);
        assert!(state.is_active());

        state.finish();
        assert_eq!(state, StreamState::Done);
        assert!(!state.is_active());
    }
}
