//! Top-level encode and decode sessions.
//!
//! [`encode`] and [`decode`] handle a single value. [`ByteEncoder`] and
//! [`ByteDecoder`] are reusable: the encoder appends successive values to one
//! buffer and the decoder reads successive values from one input. Both roll
//! back a failed call so the session stays usable afterwards.

use buffer::{ByteReader, ByteWriter};
use tracing::{debug, trace};

use crate::decoder::{Decode, Decoder};
use crate::encoder::{Encode, Encoder};
use crate::error::CodecResult;
use crate::options::EncoderOptions;
use crate::size::{byte_size, ByteSize};

/// Encodes `value` with default options.
pub fn encode<T: Encode + ByteSize + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    encode_with(value, &EncoderOptions::default())
}

/// Encodes `value` with the given options.
pub fn encode_with<T: Encode + ByteSize + ?Sized>(
    value: &T,
    options: &EncoderOptions,
) -> CodecResult<Vec<u8>> {
    let mut encoder = ByteEncoder::with_options(*options);
    encoder.encode(value)?;
    Ok(encoder.into_bytes())
}

/// Decodes one `T` from the start of `bytes`.
///
/// Trailing bytes after the value are ignored.
pub fn decode<T: Decode>(bytes: &[u8]) -> CodecResult<T> {
    ByteDecoder::new(bytes).decode()
}

/// Reusable encoder that accumulates values in one buffer.
#[derive(Debug)]
pub struct ByteEncoder {
    writer: ByteWriter,
    options: EncoderOptions,
}

impl Default for ByteEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteEncoder {
    /// Creates an encoder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EncoderOptions::default())
    }

    /// Creates an encoder with the given options.
    #[must_use]
    pub fn with_options(options: EncoderOptions) -> Self {
        Self {
            writer: ByteWriter::with_capacity(options.minimum_capacity),
            options,
        }
    }

    /// Returns the options this encoder was created with.
    #[must_use]
    pub const fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Appends `value` and returns everything encoded so far.
    ///
    /// On error the buffer is truncated back to where this call started.
    pub fn encode<T: Encode + ByteSize + ?Sized>(&mut self, value: &T) -> CodecResult<&[u8]> {
        let start = self.writer.len();
        if self.options.reserve_size_hint {
            let estimate = byte_size(value);
            trace!(estimate, start, "reserving encode capacity");
            self.writer.reserve(estimate);
        }

        let result = value.encode(&mut Encoder::new(&mut self.writer));
        if let Err(err) = result {
            debug!(%err, start, written = self.writer.len() - start, "encode failed, truncating");
            self.writer.truncate(start);
            return Err(err);
        }
        Ok(self.writer.as_slice())
    }

    /// Everything encoded so far.
    #[must_use]
    pub fn encoded_data(&self) -> &[u8] {
        self.writer.as_slice()
    }

    /// Number of bytes encoded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writer.len()
    }

    /// Returns `true` if nothing has been encoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writer.is_empty()
    }

    /// Discards the encoded bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.writer.clear();
    }

    /// Consumes the encoder and returns the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.finish()
    }
}

/// Reusable decoder reading successive values from one input.
#[derive(Debug, Clone)]
pub struct ByteDecoder<'de> {
    reader: ByteReader<'de>,
}

impl<'de> ByteDecoder<'de> {
    /// Creates a decoder positioned at the start of `bytes`.
    #[must_use]
    pub const fn new(bytes: &'de [u8]) -> Self {
        Self {
            reader: ByteReader::new(bytes),
        }
    }

    /// Decodes the next value.
    ///
    /// On error the cursor is rewound to where this call started.
    pub fn decode<T: Decode>(&mut self) -> CodecResult<T> {
        let start = self.reader.position();
        trace!(start, remaining = self.reader.remaining(), "decoding value");

        let result = T::decode(&mut Decoder::new(&mut self.reader));
        if let Err(err) = &result {
            debug!(%err, start, reached = self.reader.position(), "decode failed, rewinding");
            self.reader.rewind(start);
        }
        result
    }

    /// Cursor position in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.reader.position()
    }

    /// Bytes left after the cursor.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    /// Returns `true` once every byte has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, UnsupportedOperation};

    #[test]
    fn encode_single_value() {
        assert_eq!(encode(&0x0102u16).unwrap(), 0x0102u16.to_ne_bytes().to_vec());
        assert_eq!(encode("").unwrap(), vec![0]);
    }

    #[test]
    fn encode_with_respects_capacity() {
        let options = EncoderOptions::for_testing().with_size_hint(false);
        let encoder = ByteEncoder::with_options(options);
        assert_eq!(encoder.options(), &options);
        assert!(encoder.is_empty());
        assert_eq!(encode_with(&7u8, &options).unwrap(), vec![7]);
    }

    #[test]
    fn default_capacity_is_reserved() {
        let encoder = ByteEncoder::new();
        assert!(encoder.writer.capacity() >= crate::DEFAULT_MINIMUM_CAPACITY);
    }

    #[test]
    fn size_hint_reserves_estimate() {
        let mut encoder = ByteEncoder::with_options(EncoderOptions::for_testing());
        let value = vec![0u64; 32];
        encoder.encode(&value).unwrap();
        assert_eq!(encoder.len(), 256);
        assert!(encoder.writer.capacity() >= 256);
    }

    #[test]
    fn byte_encoder_appends() {
        let mut encoder = ByteEncoder::default();
        assert_eq!(encoder.encode(&1u8).unwrap(), &[1]);
        assert_eq!(encoder.encode("a").unwrap(), &[1, b'a', 0]);
        assert_eq!(encoder.encoded_data(), &[1, b'a', 0]);
        encoder.clear();
        assert!(encoder.is_empty());
        encoder.encode(&2u8).unwrap();
        assert_eq!(encoder.into_bytes(), vec![2]);
    }

    #[test]
    fn failed_encode_truncates() {
        let mut encoder = ByteEncoder::new();
        encoder.encode(&9u8).unwrap();
        let err = encoder.encode(&vec![Some(1u8), Some(2), None]).unwrap_err();
        assert_eq!(
            err,
            CodecError::NotSupported {
                operation: UnsupportedOperation::EncodeNil
            }
        );
        assert_eq!(encoder.encoded_data(), &[9]);
    }

    #[test]
    fn byte_decoder_reads_successive_values() {
        let bytes = [1u8, b'h', b'i', 0, 2];
        let mut decoder = ByteDecoder::new(&bytes);
        assert_eq!(decoder.decode::<u8>().unwrap(), 1);
        assert_eq!(decoder.decode::<String>().unwrap(), "hi");
        assert_eq!(decoder.position(), 4);
        assert_eq!(decoder.remaining(), 1);
        assert_eq!(decoder.decode::<u8>().unwrap(), 2);
        assert!(decoder.is_empty());
    }

    #[test]
    fn failed_decode_rewinds() {
        let bytes = [1u8, 2, 3];
        let mut decoder = ByteDecoder::new(&bytes);
        assert_eq!(decoder.decode::<u8>().unwrap(), 1);
        let err = decoder.decode::<(u8, u32)>().unwrap_err();
        assert_eq!(
            err,
            CodecError::NotEnoughData {
                requested: 4,
                available: 1
            }
        );
        assert_eq!(decoder.position(), 1);
        assert_eq!(decoder.decode::<u16>().unwrap(), u16::from_ne_bytes([2, 3]));
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        assert_eq!(decode::<u8>(&[5, 6, 7]).unwrap(), 5);
    }

    #[test]
    fn decode_short_input() {
        assert_eq!(
            decode::<u32>(&[0, 0]),
            Err(CodecError::NotEnoughData {
                requested: 4,
                available: 2
            })
        );
    }
}
