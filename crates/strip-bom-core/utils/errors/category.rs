//! Error categorization for callers that group failures

use core::fmt;

/// Error category for filtering and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller passed a value the operation cannot accept
    ///
    /// Never retried and never recovered internally.
    Contract,

    /// Text encoding errors
    Encoding,
}

impl ErrorCategory {
    /// Get the human-readable name of this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Encoding => "encoding",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
