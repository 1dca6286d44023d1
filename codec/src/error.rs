//! Error types for codec operations.

use std::fmt;

use buffer::BufferError;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a value.
///
/// Every error is fatal to the top-level call that produced it: no partial
/// value is returned and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A decode tried to read past the end of the input.
    #[error("not enough data: requested {requested} bytes, {available} available")]
    NotEnoughData {
        /// Number of bytes the failing read needed.
        requested: usize,
        /// Number of bytes left after the cursor.
        available: usize,
    },

    /// A string decode reached the end of the input without a zero terminator.
    #[error("no zero-terminated string in the remaining {scanned} bytes")]
    NoCString {
        /// Number of bytes scanned.
        scanned: usize,
    },

    /// The value asked for something the format cannot express.
    #[error("operation not supported: {operation}")]
    NotSupported {
        /// The rejected operation.
        operation: UnsupportedOperation,
    },
}

/// Operations the format has no representation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedOperation {
    /// Encoding an absent value. The format has no null.
    EncodeNil,
    /// Asking a sequence whether its next element is absent.
    DecodeNilInSequence,
}

impl CodecError {
    pub(crate) const fn not_supported(operation: UnsupportedOperation) -> Self {
        Self::NotSupported { operation }
    }
}

impl From<BufferError> for CodecError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::NotEnoughData {
                requested,
                available,
            } => Self::NotEnoughData {
                requested,
                available,
            },
            BufferError::NoCString { scanned } => Self::NoCString { scanned },
        }
    }
}

impl fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EncodeNil => write!(f, "encoding nil"),
            Self::DecodeNilInSequence => write!(f, "decoding nil from a sequence"),
        }
    }
}
