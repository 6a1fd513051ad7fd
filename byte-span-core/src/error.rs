//! Error types for checked span operations.

use core::fmt;

/// Error returned by checked element access and runtime extent checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// Index was outside the span's bounds.
    OutOfRange {
        /// The requested byte index.
        index: usize,
        /// The span length in bytes.
        len: usize,
    },
    /// Source length did not match a fixed-extent span type.
    ExtentMismatch {
        /// The byte length the span type requires.
        expected: usize,
        /// The byte length the source provided.
        actual: usize,
    },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for span of {len} bytes")
            }
            Self::ExtentMismatch { expected, actual } => {
                write!(
                    f,
                    "fixed extent requires {expected} bytes, source has {actual}"
                )
            }
        }
    }
}

// Rust 1.81+
impl core::error::Error for SpanError {}

/// Convenience alias for span results.
pub type Result<T> = core::result::Result<T, SpanError>;
