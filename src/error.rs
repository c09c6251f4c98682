//! Error types for medner.

use thiserror::Error;

/// Result type for medner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for medner operations.
///
/// All pipeline failures are local validation errors surfaced at the
/// boundary; the core stages themselves are total over validated input.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Entity span with `start >= end`.
    #[error("invalid span [{start}, {end}): start must be less than end")]
    InvalidSpan {
        /// Start character offset of the rejected span.
        start: usize,
        /// End character offset of the rejected span.
        end: usize,
    },

    /// Confidence score outside `[0.0, 1.0]` (or non-finite).
    #[error("invalid score {score}: must be finite and within [0.0, 1.0]")]
    InvalidScore {
        /// The rejected score.
        score: f64,
    },

    /// Entity span that reaches past the end of the source text.
    #[error("span [{start}, {end}) out of bounds for text of {len} characters")]
    SpanOutOfBounds {
        /// Start character offset of the rejected span.
        start: usize,
        /// End character offset of the rejected span.
        end: usize,
        /// Character length of the source text.
        len: usize,
    },

    /// Entity surface form that does not match the source text at its span.
    #[error("surface form mismatch at [{start}, {end}): entity says {found:?}, text says {expected:?}")]
    SurfaceMismatch {
        /// The surface form carried by the entity.
        found: String,
        /// The substring actually covered by the span.
        expected: String,
        /// Start character offset of the span.
        start: usize,
        /// End character offset of the span.
        end: usize,
    },

    /// Upstream recognizer failed to produce spans.
    #[error("recognizer error: {0}")]
    Recognition(String),
}

impl Error {
    /// Create a recognition error.
    #[must_use]
    pub fn recognition(msg: impl Into<String>) -> Self {
        Error::Recognition(msg.into())
    }
}
