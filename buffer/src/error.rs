//! Error types for buffer operations.

use thiserror::Error;

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur while reading from a [`ByteReader`](crate::ByteReader).
///
/// Writing never fails: the writer grows its backing `Vec` as needed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("attempted to read {requested} bytes but only {available} bytes available")]
    NotEnoughData {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes remaining after the cursor.
        available: usize,
    },

    /// Scanned to the end of the buffer without finding a zero terminator.
    #[error("no zero terminator found in the remaining {scanned} bytes")]
    NoCString {
        /// Number of bytes scanned before giving up.
        scanned: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_enough_data() {
        let err = BufferError::NotEnoughData {
            requested: 4,
            available: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("4 bytes"), "should mention requested bytes");
        assert!(msg.contains("2 bytes"), "should mention available bytes");
        assert!(msg.contains("read"), "should mention read operation");
    }

    #[test]
    fn error_display_no_cstring() {
        let err = BufferError::NoCString { scanned: 17 };
        let msg = err.to_string();
        assert!(msg.contains("17"), "should mention scanned bytes");
        assert!(msg.contains("terminator"));
    }

    #[test]
    fn error_equality() {
        let err1 = BufferError::NotEnoughData {
            requested: 8,
            available: 3,
        };
        let err2 = BufferError::NotEnoughData {
            requested: 8,
            available: 3,
        };
        let err3 = BufferError::NotEnoughData {
            requested: 8,
            available: 4,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_debug() {
        let err = BufferError::NoCString { scanned: 0 };
        let debug = format!("{err:?}");
        assert!(debug.contains("NoCString"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<BufferError>();
    }
}
