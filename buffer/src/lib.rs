//! Byte cursor buffer and raw value primitives for the bytecoder codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] plus the two leaf
//! encodings everything else is built from:
//!
//! - **Raw values** ([`RawValue`]) - fixed-width scalars written as their exact
//!   native byte pattern.
//! - **C strings** - UTF-8 bytes followed by a single zero byte.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Byte patterns go through `to_ne_bytes`/`from_ne_bytes`.
//! - **Bounded reads** - Every read is bounds-checked; a failed read leaves the
//!   cursor where it was.
//! - **Append-only writes** - Encoding never seeks or overwrites.
//! - **No domain knowledge** - This crate knows nothing about structured values.
//!
//! # Example
//!
//! ```
//! use buffer::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_raw(42u16);
//! writer.write_cstr("hi");
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_raw::<u16>().unwrap(), 42);
//! assert_eq!(reader.read_cstr().unwrap(), b"hi");
//! ```

mod error;
mod raw;
mod reader;
mod writer;

pub use error::{BufferError, BufferResult};
pub use raw::RawValue;
pub use reader::ByteReader;
pub use writer::ByteWriter;
