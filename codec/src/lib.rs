//! Structured value encoding for the bytecoder format.
//!
//! Values describe themselves through [`Encode`], [`Decode`] and [`ByteSize`].
//! Each picks a keyed, unkeyed or single-value container and the session
//! writes every field straight into one shared buffer.
//!
//! # Format
//!
//! - Fixed-width scalars are their native byte pattern (host endianness).
//! - Text is UTF-8 followed by a single zero byte.
//! - Composites are the concatenation of their fields in encode order.
//! - Sequences carry no count and no terminator.
//!
//! There are no headers, tags, field names or alignment padding. Decoding has
//! to mirror encoding exactly; a value that holds a variable-length sequence
//! encodes its count first and reads it back with
//! [`UnkeyedDecoder::decode_counted`].
//!
//! # Example
//!
//! ```
//! struct Sample {
//!     id: u8,
//!     name: String,
//! }
//!
//! codec::keyed_struct! {
//!     Sample { id, name }
//! }
//!
//! let sample = Sample { id: 7, name: "abc".into() };
//! let bytes = codec::encode(&sample).unwrap();
//! assert_eq!(bytes, [7, b'a', b'b', b'c', 0]);
//! assert_eq!(codec::byte_size(&sample), bytes.len());
//!
//! let back: Sample = codec::decode(&bytes).unwrap();
//! assert_eq!(back.name, "abc");
//! ```
//!
//! # Design Principles
//!
//! - **Zero framing** - The output is exactly the field bytes, nothing else.
//! - **Exact estimates** - [`byte_size`] matches the encoded length.
//! - **Consistent sessions** - A failed top-level call leaves a reusable
//!   session where it was before the call.

mod decoder;
mod encoder;
mod error;
mod flags;
mod impls;
mod macros;
mod options;
mod session;
mod size;

pub use buffer::{ByteReader, ByteWriter, RawValue};
pub use decoder::{Decode, Decoder, KeyedDecoder, SingleValueDecoder, UnkeyedDecoder};
pub use encoder::{Encode, Encoder, KeyedEncoder, SingleValueEncoder, UnkeyedEncoder};
pub use error::{CodecError, CodecResult, UnsupportedOperation};
pub use flags::{decode_flags, encode_flags, flags_size};
pub use options::{EncoderOptions, DEFAULT_MINIMUM_CAPACITY};
pub use session::{decode, encode, encode_with, ByteDecoder, ByteEncoder};
pub use size::{byte_size, ByteSize, FieldSizes, SizeStrategy};
