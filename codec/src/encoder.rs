//! Encode sessions and containers.
//!
//! An [`Encoder`] is a session over a shared [`ByteWriter`]. A value picks one
//! of three container views to write itself through:
//!
//! - [`KeyedEncoder`] - named fields, written in the order they are encoded.
//!   Names only route the call; they never reach the buffer.
//! - [`UnkeyedEncoder`] - positional elements with no count or terminator.
//! - [`SingleValueEncoder`] - exactly one scalar, string or nested value.
//!
//! Nested values get a fresh session that reborrows the same writer, so a
//! nested encode looks exactly like a top-level one from the value's side and
//! siblings land in contiguous, non-overlapping byte ranges.

use buffer::{ByteWriter, RawValue};

use crate::error::{CodecError, CodecResult, UnsupportedOperation};

/// A value that can write itself through an [`Encoder`].
pub trait Encode {
    /// Writes `self` to the encoder's buffer.
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()>;
}

/// An encode session over a shared byte buffer.
///
/// The session is active while it is borrowed; once dropped nothing more can
/// be written through it.
#[derive(Debug)]
pub struct Encoder<'a> {
    writer: &'a mut ByteWriter,
}

impl<'a> Encoder<'a> {
    /// Starts a session appending to `writer`.
    pub fn new(writer: &'a mut ByteWriter) -> Self {
        Self { writer }
    }

    /// Starts a nested session over the same buffer.
    pub fn nested(&mut self) -> Encoder<'_> {
        Encoder {
            writer: &mut *self.writer,
        }
    }

    /// Views the value being encoded as a set of named fields.
    pub fn keyed(&mut self) -> KeyedEncoder<'_> {
        KeyedEncoder {
            encoder: self.nested(),
        }
    }

    /// Views the value being encoded as a sequence of elements.
    pub fn unkeyed(&mut self) -> UnkeyedEncoder<'_> {
        UnkeyedEncoder {
            encoder: self.nested(),
        }
    }

    /// Views the value being encoded as one indivisible value.
    pub fn single_value(&mut self) -> SingleValueEncoder<'_> {
        SingleValueEncoder {
            encoder: self.nested(),
        }
    }

    /// Appends bytes verbatim, with no terminator or length.
    ///
    /// The matching decode is [`Decoder::decode_bytes`](crate::Decoder::decode_bytes)
    /// with a count the value supplies itself.
    pub fn encode_bytes(&mut self, bytes: &[u8]) {
        self.writer.write_bytes(bytes);
    }

    /// Total bytes in the shared buffer, including those written by
    /// enclosing sessions.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.writer.len()
    }

    fn encode_value<T: Encode + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        value.encode(&mut self.nested())
    }

    fn encode_raw<T: RawValue>(&mut self, value: T) {
        self.writer.write_raw(value);
    }

    fn encode_str(&mut self, value: &str) {
        self.writer.write_cstr(value);
    }
}

/// Named-field view of an encode session.
#[derive(Debug)]
pub struct KeyedEncoder<'a> {
    encoder: Encoder<'a>,
}

impl KeyedEncoder<'_> {
    /// Encodes one named field.
    pub fn encode<T: Encode + ?Sized>(&mut self, _key: &str, value: &T) -> CodecResult<()> {
        self.encoder.encode_value(value)
    }

    /// Encodes a named field if it holds a value; `None` writes nothing.
    pub fn encode_if_present<T: Encode>(
        &mut self,
        _key: &str,
        value: Option<&T>,
    ) -> CodecResult<()> {
        match value {
            Some(value) => self.encoder.encode_value(value),
            None => Ok(()),
        }
    }

    /// Always fails: the format has no null.
    pub fn encode_nil(&mut self, _key: &str) -> CodecResult<()> {
        Err(CodecError::not_supported(UnsupportedOperation::EncodeNil))
    }

    /// Opens a keyed view for a nested field.
    pub fn nested_keyed(&mut self, _key: &str) -> KeyedEncoder<'_> {
        self.encoder.keyed()
    }

    /// Opens a sequence view for a nested field.
    pub fn nested_unkeyed(&mut self, _key: &str) -> UnkeyedEncoder<'_> {
        self.encoder.unkeyed()
    }

    /// Session for encoding a base value's fields into the same buffer.
    pub fn super_encoder(&mut self) -> Encoder<'_> {
        self.encoder.nested()
    }
}

/// Sequence view of an encode session.
///
/// Nothing marks the number of elements; a decoder has to learn it from a
/// count the value encodes separately.
#[derive(Debug)]
pub struct UnkeyedEncoder<'a> {
    encoder: Encoder<'a>,
}

impl UnkeyedEncoder<'_> {
    /// Encodes the next element.
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        self.encoder.encode_value(value)
    }

    /// Encodes every element of `values` in order.
    pub fn encode_all<'v, T, I>(&mut self, values: I) -> CodecResult<()>
    where
        T: Encode + ?Sized + 'v,
        I: IntoIterator<Item = &'v T>,
    {
        values
            .into_iter()
            .try_for_each(|value| self.encoder.encode_value(value))
    }

    /// Always fails: the format has no null.
    pub fn encode_nil(&mut self) -> CodecResult<()> {
        Err(CodecError::not_supported(UnsupportedOperation::EncodeNil))
    }

    /// Opens a keyed view for the next element.
    pub fn nested_keyed(&mut self) -> KeyedEncoder<'_> {
        self.encoder.keyed()
    }

    /// Opens a sequence view for the next element.
    pub fn nested_unkeyed(&mut self) -> UnkeyedEncoder<'_> {
        self.encoder.unkeyed()
    }

    /// Session for encoding a base value into the same buffer.
    pub fn super_encoder(&mut self) -> Encoder<'_> {
        self.encoder.nested()
    }
}

/// Single-value view of an encode session.
///
/// Also usable as the entry container of a value that lays itself out by hand,
/// writing several values one after another.
#[derive(Debug)]
pub struct SingleValueEncoder<'a> {
    encoder: Encoder<'a>,
}

impl SingleValueEncoder<'_> {
    /// Encodes a value through its own [`Encode`] impl.
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        self.encoder.encode_value(value)
    }

    /// Writes the native byte pattern of a fixed-width scalar.
    pub fn encode_raw<T: RawValue>(&mut self, value: T) -> CodecResult<()> {
        self.encoder.encode_raw(value);
        Ok(())
    }

    /// Writes UTF-8 text followed by a zero byte.
    pub fn encode_str(&mut self, value: &str) -> CodecResult<()> {
        self.encoder.encode_str(value);
        Ok(())
    }

    /// Always fails: the format has no null.
    pub fn encode_nil(&mut self) -> CodecResult<()> {
        Err(CodecError::not_supported(UnsupportedOperation::EncodeNil))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i16,
        y: i16,
    }

    impl Encode for Point {
        fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
            let mut container = encoder.keyed();
            container.encode("x", &self.x)?;
            container.encode("y", &self.y)
        }
    }

    struct Labeled {
        label: String,
        point: Point,
    }

    impl Encode for Labeled {
        fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
            let mut container = encoder.keyed();
            container.encode("label", &self.label)?;
            container.encode("point", &self.point)
        }
    }

    fn encode_to_vec<T: Encode + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
        let mut writer = ByteWriter::new();
        value.encode(&mut Encoder::new(&mut writer))?;
        Ok(writer.finish())
    }

    fn ne_i16(v: i16) -> [u8; 2] {
        v.to_ne_bytes()
    }

    #[test]
    fn keyed_fields_concatenate_without_names() {
        let bytes = encode_to_vec(&Point { x: 1, y: -1 }).unwrap();
        let mut expected = ne_i16(1).to_vec();
        expected.extend_from_slice(&ne_i16(-1));
        assert_eq!(bytes, expected);
    }

    #[test]
    fn nested_values_share_the_buffer() {
        let value = Labeled {
            label: "p".into(),
            point: Point { x: 2, y: 3 },
        };
        let bytes = encode_to_vec(&value).unwrap();
        let mut expected = vec![b'p', 0];
        expected.extend_from_slice(&ne_i16(2));
        expected.extend_from_slice(&ne_i16(3));
        assert_eq!(bytes, expected);
    }

    #[test]
    fn unkeyed_has_no_count() {
        let mut writer = ByteWriter::new();
        let mut encoder = Encoder::new(&mut writer);
        let mut seq = encoder.unkeyed();
        seq.encode_all([1u8, 2, 3].iter()).unwrap();
        seq.encode(&4u8).unwrap();
        assert_eq!(writer.finish(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn nil_is_rejected_everywhere() {
        let expected = Err(CodecError::NotSupported {
            operation: UnsupportedOperation::EncodeNil,
        });
        let mut writer = ByteWriter::new();
        let mut encoder = Encoder::new(&mut writer);
        assert_eq!(encoder.keyed().encode_nil("k"), expected);
        assert_eq!(encoder.unkeyed().encode_nil(), expected);
        assert_eq!(encoder.single_value().encode_nil(), expected);
        assert!(writer.is_empty());
    }

    #[test]
    fn encode_if_present_skips_none() {
        let mut writer = ByteWriter::new();
        let mut encoder = Encoder::new(&mut writer);
        let mut container = encoder.keyed();
        container.encode_if_present("a", None::<&u8>).unwrap();
        container.encode_if_present("b", Some(&9u8)).unwrap();
        assert_eq!(writer.finish(), vec![9]);
    }

    #[test]
    fn nested_containers_and_super_encoder() {
        let mut writer = ByteWriter::new();
        let mut encoder = Encoder::new(&mut writer);
        let mut outer = encoder.keyed();
        outer.nested_keyed("inner").encode("v", &1u8).unwrap();
        outer.nested_unkeyed("list").encode(&2u8).unwrap();
        outer.super_encoder().single_value().encode(&3u8).unwrap();
        assert_eq!(writer.finish(), vec![1, 2, 3]);
    }

    #[test]
    fn single_value_primitives_and_bytes_written() {
        let mut writer = ByteWriter::new();
        writer.write_bytes(&[0xEE]);
        let mut encoder = Encoder::new(&mut writer);
        encoder.single_value().encode_raw(true).unwrap();
        encoder.single_value().encode_str("hi").unwrap();
        encoder.encode_bytes(&[7, 7]);
        assert_eq!(encoder.bytes_written(), 1 + 1 + 3 + 2);
        assert_eq!(writer.finish(), vec![0xEE, 1, b'h', b'i', 0, 7, 7]);
    }
}
