//! Encoded size estimation.
//!
//! [`byte_size`] computes how many bytes a value will occupy once encoded,
//! without touching any buffer. [`ByteEncoder`](crate::ByteEncoder) uses it to
//! reserve capacity up front; encoding is still correct if an estimate is off.
//!
//! Each type declares how its size is found through [`ByteSize::STRATEGY`]:
//!
//! - [`SizeStrategy::SelfReported`] - the type knows its exact size
//!   (strings, sequences, flag sets).
//! - [`SizeStrategy::Fields`] - the sum of the fields it visits (structs).
//! - [`SizeStrategy::Footprint`] - its native in-memory size (raw scalars).
//!
//! The strategy is an associated constant, so the dispatch in [`byte_size`]
//! is resolved per type at compile time.

use std::collections::BTreeMap;
use std::mem::size_of_val;

/// How a type's encoded size is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStrategy {
    /// [`ByteSize::reported_size`] is authoritative.
    SelfReported,
    /// Sum of the fields visited by [`ByteSize::visit_fields`].
    Fields,
    /// The type's native in-memory footprint.
    ///
    /// Only correct for atomic values encoded as their raw byte pattern.
    Footprint,
}

/// Size estimation contract.
///
/// Composite types keep the default [`SizeStrategy::Fields`] and visit the
/// same fields, in the same order, as their [`Encode`](crate::Encode) impl.
/// A field holding a "base" value is visited like any other field, which
/// flattens the base's own fields into the total.
///
/// A `Fields` type that visits nothing reports 0, which is exactly what it
/// encodes to. The raw footprint is never used as a fallback.
pub trait ByteSize {
    /// How [`byte_size`] computes this type's size.
    const STRATEGY: SizeStrategy = SizeStrategy::Fields;

    /// Exact encoded size. Consulted only for [`SizeStrategy::SelfReported`].
    fn reported_size(&self) -> usize {
        0
    }

    /// Visits each encoded field. Consulted only for [`SizeStrategy::Fields`].
    fn visit_fields(&self, fields: &mut FieldSizes) {
        let _ = fields;
    }
}

/// Returns the number of bytes `value` will occupy once encoded.
pub fn byte_size<T: ByteSize + ?Sized>(value: &T) -> usize {
    match T::STRATEGY {
        SizeStrategy::SelfReported => value.reported_size(),
        SizeStrategy::Fields => {
            let mut fields = FieldSizes::new();
            value.visit_fields(&mut fields);
            fields.total()
        }
        SizeStrategy::Footprint => size_of_val(value),
    }
}

/// Accumulates field sizes for [`SizeStrategy::Fields`] types.
#[derive(Debug, Default, Clone)]
pub struct FieldSizes {
    total: usize,
    count: usize,
}

impl FieldSizes {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { total: 0, count: 0 }
    }

    /// Adds the encoded size of one field.
    pub fn field<F: ByteSize + ?Sized>(&mut self, value: &F) -> &mut Self {
        self.total += byte_size(value);
        self.count += 1;
        self
    }

    /// Total bytes of the fields visited so far.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of fields visited so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

macro_rules! footprint_size {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ByteSize for $ty {
                const STRATEGY: SizeStrategy = SizeStrategy::Footprint;
            }
        )*
    };
}

footprint_size!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl ByteSize for str {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        self.len() + 1
    }
}

impl ByteSize for String {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        self.as_str().reported_size()
    }
}

impl<T: ByteSize> ByteSize for [T] {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        self.iter().map(byte_size).sum()
    }
}

impl<T: ByteSize> ByteSize for Vec<T> {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        self.as_slice().reported_size()
    }
}

impl<T: ByteSize, const N: usize> ByteSize for [T; N] {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        self.as_slice().reported_size()
    }
}

/// Keys are never encoded; only values count.
impl<V: ByteSize> ByteSize for BTreeMap<String, V> {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        self.values().map(byte_size).sum()
    }
}

impl<T: ByteSize> ByteSize for Option<T> {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        self.as_ref().map_or(0, byte_size)
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Box<T> {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        byte_size(&**self)
    }
}

impl<T: ByteSize + ?Sized> ByteSize for &T {
    const STRATEGY: SizeStrategy = SizeStrategy::SelfReported;

    fn reported_size(&self) -> usize {
        byte_size(&**self)
    }
}

impl ByteSize for () {}

macro_rules! tuple_size {
    ($($name:ident)+) => {
        impl<$($name: ByteSize),+> ByteSize for ($($name,)+) {
            #[allow(non_snake_case)]
            fn visit_fields(&self, fields: &mut FieldSizes) {
                let ($($name,)+) = self;
                $(fields.field($name);)+
            }
        }
    };
}

tuple_size!(A);
tuple_size!(A B);
tuple_size!(A B C);
tuple_size!(A B C D);
