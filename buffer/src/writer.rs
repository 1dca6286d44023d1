//! Append-only byte writer used as the encode target.

use crate::raw::RawValue;

/// An append-only byte writer.
///
/// Every write lands at the end of the buffer; there is no random-access
/// overwrite. Call [`finish`](Self::finish) to take the bytes out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the current allocated capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Reserves room for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.bytes.reserve(additional);
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Appends the native byte pattern of a fixed-width scalar.
    pub fn write_raw<T: RawValue>(&mut self, value: T) {
        self.bytes.extend_from_slice(value.to_raw_bytes().as_ref());
    }

    /// Appends the UTF-8 bytes of `value` followed by a single zero byte.
    ///
    /// Embedded zero bytes are not checked; a reader will stop at the first one.
    pub fn write_cstr(&mut self, value: &str) {
        self.bytes.reserve(value.len() + 1);
        self.bytes.extend_from_slice(value.as_bytes());
        self.bytes.push(0);
    }

    /// Shortens the buffer to `len` bytes, dropping anything written after it.
    ///
    /// Has no effect if `len` is not smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    /// Removes all written bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}

impl AsRef<[u8]> for ByteWriter {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
