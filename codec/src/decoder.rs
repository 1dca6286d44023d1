//! Decode sessions and containers.
//!
//! Mirrors [`encoder`](crate::encoder): a [`Decoder`] is a session over a
//! shared [`ByteReader`], and a value reads itself back through a
//! [`KeyedDecoder`], [`UnkeyedDecoder`] or [`SingleValueDecoder`].
//!
//! The format carries no lengths, tags or names. A value must read its fields
//! in the order it wrote them, and a sequence must be bounded by a count the
//! value decoded earlier.

use buffer::{ByteReader, RawValue};

use crate::error::{CodecError, CodecResult, UnsupportedOperation};

/// A value that can read itself back through a [`Decoder`].
pub trait Decode: Sized {
    /// Reads a value from the decoder's buffer.
    fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self>;
}

/// A decode session over a shared byte cursor.
#[derive(Debug)]
pub struct Decoder<'a, 'de> {
    reader: &'a mut ByteReader<'de>,
}

impl<'a, 'de> Decoder<'a, 'de> {
    /// Starts a session reading from `reader`'s current position.
    pub fn new(reader: &'a mut ByteReader<'de>) -> Self {
        Self { reader }
    }

    /// Starts a nested session over the same cursor.
    pub fn nested(&mut self) -> Decoder<'_, 'de> {
        Decoder {
            reader: &mut *self.reader,
        }
    }

    /// Views the value being decoded as a set of named fields.
    pub fn keyed(&mut self) -> KeyedDecoder<'_, 'de> {
        KeyedDecoder {
            decoder: self.nested(),
        }
    }

    /// Views the value being decoded as a sequence of elements.
    pub fn unkeyed(&mut self) -> UnkeyedDecoder<'_, 'de> {
        UnkeyedDecoder {
            decoder: self.nested(),
        }
    }

    /// Views the value being decoded as one indivisible value.
    pub fn single_value(&mut self) -> SingleValueDecoder<'_, 'de> {
        SingleValueDecoder {
            decoder: self.nested(),
        }
    }

    /// Reads exactly `count` bytes.
    pub fn decode_bytes(&mut self, count: usize) -> CodecResult<&'de [u8]> {
        Ok(self.reader.read_bytes(count)?)
    }

    /// Reads exactly `count` bytes as text.
    ///
    /// The text ends at the first zero byte inside those bytes, so zero-padded
    /// fixed-width fields decode to their content. The cursor always moves by
    /// `count`.
    pub fn decode_fixed_string(&mut self, count: usize) -> CodecResult<String> {
        let bytes = self.reader.read_bytes(count)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(text_from_bytes(&bytes[..end]))
    }

    /// Current cursor position in the shared buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Bytes left after the cursor.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    fn decode_value<T: Decode>(&mut self) -> CodecResult<T> {
        T::decode(&mut self.nested())
    }

    fn decode_raw<T: RawValue>(&mut self) -> CodecResult<T> {
        Ok(self.reader.read_raw()?)
    }

    fn decode_string(&mut self) -> CodecResult<String> {
        let bytes = self.reader.read_cstr()?;
        Ok(text_from_bytes(bytes))
    }
}

/// Invalid UTF-8 is replaced rather than rejected.
fn text_from_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Named-field view of a decode session.
#[derive(Debug)]
pub struct KeyedDecoder<'a, 'de> {
    decoder: Decoder<'a, 'de>,
}

impl<'de> KeyedDecoder<'_, 'de> {
    /// Decodes the next named field.
    pub fn decode<T: Decode>(&mut self, _key: &str) -> CodecResult<T> {
        self.decoder.decode_value()
    }

    /// Decodes a field that was written with `encode_if_present`.
    ///
    /// The format cannot tell an absent field from a present one, so this
    /// always decodes a value.
    pub fn decode_if_present<T: Decode>(&mut self, key: &str) -> CodecResult<Option<T>> {
        self.decode(key).map(Some)
    }

    /// Always `false`: a keyed field is never null.
    pub fn decode_nil(&mut self, _key: &str) -> CodecResult<bool> {
        Ok(false)
    }

    /// Always `true`: field names are not stored, so every key is assumed present.
    pub fn contains(&self, _key: &str) -> bool {
        true
    }

    /// Opens a keyed view for a nested field.
    pub fn nested_keyed(&mut self, _key: &str) -> KeyedDecoder<'_, 'de> {
        self.decoder.keyed()
    }

    /// Opens a sequence view for a nested field.
    pub fn nested_unkeyed(&mut self, _key: &str) -> UnkeyedDecoder<'_, 'de> {
        self.decoder.unkeyed()
    }

    /// Session for decoding a base value's fields from the same buffer.
    pub fn super_decoder(&mut self) -> Decoder<'_, 'de> {
        self.decoder.nested()
    }
}

/// Sequence view of a decode session.
///
/// There is no element count or end marker. The caller decides how many
/// elements to read, usually from a count field decoded first.
#[derive(Debug)]
pub struct UnkeyedDecoder<'a, 'de> {
    decoder: Decoder<'a, 'de>,
}

impl<'de> UnkeyedDecoder<'_, 'de> {
    /// Decodes the next element.
    pub fn decode<T: Decode>(&mut self) -> CodecResult<T> {
        self.decoder.decode_value()
    }

    /// Decodes exactly `count` elements.
    pub fn decode_counted<T: Decode>(&mut self, count: usize) -> CodecResult<Vec<T>> {
        // `count` may come straight from untrusted input.
        let mut items = Vec::with_capacity(count.min(self.decoder.remaining()));
        for _ in 0..count {
            items.push(self.decoder.decode_value()?);
        }
        Ok(items)
    }

    /// Always fails: a sequence cannot tell whether its next element is null.
    pub fn decode_nil(&mut self) -> CodecResult<bool> {
        Err(CodecError::not_supported(
            UnsupportedOperation::DecodeNilInSequence,
        ))
    }

    /// Opens a keyed view for the next element.
    pub fn nested_keyed(&mut self) -> KeyedDecoder<'_, 'de> {
        self.decoder.keyed()
    }

    /// Opens a sequence view for the next element.
    pub fn nested_unkeyed(&mut self) -> UnkeyedDecoder<'_, 'de> {
        self.decoder.unkeyed()
    }

    /// Session for decoding a base value from the same buffer.
    pub fn super_decoder(&mut self) -> Decoder<'_, 'de> {
        self.decoder.nested()
    }
}

/// Single-value view of a decode session.
///
/// Values that lay themselves out by hand use this as their entry container
/// and call it repeatedly, e.g. a count followed by that many elements.
#[derive(Debug)]
pub struct SingleValueDecoder<'a, 'de> {
    decoder: Decoder<'a, 'de>,
}

impl<'de> SingleValueDecoder<'_, 'de> {
    /// Decodes a value through its own [`Decode`] impl.
    pub fn decode<T: Decode>(&mut self) -> CodecResult<T> {
        self.decoder.decode_value()
    }

    /// Reads a fixed-width scalar from its native byte pattern.
    pub fn decode_raw<T: RawValue>(&mut self) -> CodecResult<T> {
        self.decoder.decode_raw()
    }

    /// Reads zero-terminated UTF-8 text.
    pub fn decode_string(&mut self) -> CodecResult<String> {
        self.decoder.decode_string()
    }

    /// Reads exactly `count` bytes.
    pub fn decode_bytes(&mut self, count: usize) -> CodecResult<&'de [u8]> {
        self.decoder.decode_bytes(count)
    }

    /// Reads exactly `count` bytes as text; see [`Decoder::decode_fixed_string`].
    pub fn decode_fixed_string(&mut self, count: usize) -> CodecResult<String> {
        self.decoder.decode_fixed_string(count)
    }

    /// Always `false`: the format has no null.
    pub fn decode_nil(&mut self) -> CodecResult<bool> {
        Ok(false)
    }
}
