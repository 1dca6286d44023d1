//! Forward-only byte reader with bounded operations.

use crate::error::{BufferError, BufferResult};
use crate::raw::RawValue;

/// A forward-only cursor over a byte slice.
///
/// All read operations are bounds-checked and return errors on failure. A
/// failed read never moves the cursor.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the total length of the underlying data.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining after the cursor.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Moves the cursor back to `position`.
    ///
    /// The cursor only ever moves backwards here; a position past the current
    /// one is ignored.
    pub fn rewind(&mut self, position: usize) {
        self.pos = self.pos.min(position);
    }

    /// Reads exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> BufferResult<&'a [u8]> {
        self.ensure_bytes(count)?;
        let start = self.pos;
        self.pos += count;
        Ok(&self.data[start..self.pos])
    }

    /// Reads a fixed-width scalar from its native byte pattern.
    pub fn read_raw<T: RawValue>(&mut self) -> BufferResult<T> {
        let src = self.read_bytes(T::SIZE)?;
        let mut bytes = T::Bytes::default();
        bytes.as_mut().copy_from_slice(src);
        Ok(T::from_raw_bytes(bytes))
    }

    /// Reads a zero-terminated byte string.
    ///
    /// Returns the bytes before the terminator and leaves the cursor just past
    /// it.
    pub fn read_cstr(&mut self) -> BufferResult<&'a [u8]> {
        let data = self.data;
        let rest = &data[self.pos..];
        let Some(end) = rest.iter().position(|&b| b == 0) else {
            return Err(BufferError::NoCString {
                scanned: rest.len(),
            });
        };
        self.pos += end + 1;
        Ok(&rest[..end])
    }

    fn ensure_bytes(&self, count: usize) -> BufferResult<()> {
        let available = self.remaining();
        if count > available {
            return Err(BufferError::NotEnoughData {
                requested: count,
                available,
            });
        }
        Ok(())
    }
}
