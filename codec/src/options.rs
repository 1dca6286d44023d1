//! Options for top-level encoding.

/// Default minimum capacity of a fresh encode buffer, in bytes.
pub const DEFAULT_MINIMUM_CAPACITY: usize = 16;

/// Tuning knobs for [`ByteEncoder`](crate::ByteEncoder).
///
/// Neither option changes the encoded bytes; they only affect allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncoderOptions {
    /// Capacity reserved when the encode buffer is created.
    pub minimum_capacity: usize,
    /// Reserve the estimated encoded size before each encode.
    pub reserve_size_hint: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            minimum_capacity: DEFAULT_MINIMUM_CAPACITY,
            reserve_size_hint: true,
        }
    }

    /// Creates options suitable for testing: no up-front allocation, so any
    /// reservation observed in a test comes from the size estimate.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            minimum_capacity: 0,
            reserve_size_hint: true,
        }
    }

    /// Sets the minimum capacity of the encode buffer.
    #[must_use]
    pub const fn with_minimum_capacity(self, minimum_capacity: usize) -> Self {
        Self {
            minimum_capacity,
            ..self
        }
    }

    /// Enables or disables reserving the estimated size before encoding.
    #[must_use]
    pub const fn with_size_hint(self, reserve_size_hint: bool) -> Self {
        Self {
            reserve_size_hint,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = EncoderOptions::default();
        assert_eq!(options.minimum_capacity, 16);
        assert!(options.reserve_size_hint);
        assert_eq!(options, EncoderOptions::new());
    }

    #[test]
    fn testing_options_allocate_nothing_up_front() {
        let options = EncoderOptions::for_testing();
        assert_eq!(options.minimum_capacity, 0);
        assert!(options.reserve_size_hint);
    }

    #[test]
    fn builders() {
        let options = EncoderOptions::new()
            .with_minimum_capacity(1024)
            .with_size_hint(false);
        assert_eq!(options.minimum_capacity, 1024);
        assert!(!options.reserve_size_hint);
    }
}
