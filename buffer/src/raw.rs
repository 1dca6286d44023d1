//! Fixed-width scalar values and their native byte patterns.

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar that is encoded as its exact in-memory byte pattern.
///
/// The encoded width is always `size_of::<Self>()` and the byte order is the
/// host's native order. Nothing is converted on the way in or out, so encoded
/// data is only meaningful to a reader on the same platform.
///
/// This trait is sealed: the width must come from the type, never from the
/// caller.
pub trait RawValue: Copy + sealed::Sealed {
    /// The byte array holding the value's native representation.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encoded width in bytes.
    const SIZE: usize;

    /// Returns the native byte pattern of `self`.
    fn to_raw_bytes(self) -> Self::Bytes;

    /// Reinterprets a native byte pattern as a value.
    fn from_raw_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_raw_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RawValue for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn to_raw_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline]
                fn from_raw_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_raw_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl sealed::Sealed for bool {}

/// `true` is written as `1`. Any non-zero byte reads back as `true`.
impl RawValue for bool {
    type Bytes = [u8; 1];

    const SIZE: usize = 1;

    #[inline]
    fn to_raw_bytes(self) -> Self::Bytes {
        [u8::from(self)]
    }

    #[inline]
    fn from_raw_bytes(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn sizes_match_native_layout() {
        assert_eq!(<u8 as RawValue>::SIZE, size_of::<u8>());
        assert_eq!(<i16 as RawValue>::SIZE, size_of::<i16>());
        assert_eq!(<u32 as RawValue>::SIZE, size_of::<u32>());
        assert_eq!(<i64 as RawValue>::SIZE, size_of::<i64>());
        assert_eq!(<u128 as RawValue>::SIZE, size_of::<u128>());
        assert_eq!(<usize as RawValue>::SIZE, size_of::<usize>());
        assert_eq!(<isize as RawValue>::SIZE, size_of::<isize>());
        assert_eq!(<f32 as RawValue>::SIZE, size_of::<f32>());
        assert_eq!(<f64 as RawValue>::SIZE, size_of::<f64>());
        assert_eq!(<bool as RawValue>::SIZE, size_of::<bool>());
    }

    #[test]
    fn bytes_len_matches_size() {
        assert_eq!(0xABCDu16.to_raw_bytes().as_ref().len(), u16::SIZE);
        assert_eq!(1.5f64.to_raw_bytes().as_ref().len(), f64::SIZE);
        assert_eq!(true.to_raw_bytes().as_ref().len(), bool::SIZE);
    }

    #[test]
    fn native_byte_order() {
        assert_eq!(0x1234_5678u32.to_raw_bytes(), 0x1234_5678u32.to_ne_bytes());
        assert_eq!((-2i16).to_raw_bytes(), (-2i16).to_ne_bytes());
    }

    #[test]
    fn bool_patterns() {
        assert_eq!(true.to_raw_bytes(), [1]);
        assert_eq!(false.to_raw_bytes(), [0]);
        assert!(bool::from_raw_bytes([1]));
        assert!(bool::from_raw_bytes([0xFF]));
        assert!(!bool::from_raw_bytes([0]));
    }

    #[test]
    fn float_bit_pattern_preserved() {
        let nan = f64::from_bits(0x7FF8_0000_0000_0001);
        let back = f64::from_raw_bytes(nan.to_raw_bytes());
        assert_eq!(back.to_bits(), nan.to_bits());
        assert_eq!(f32::from_raw_bytes((-0.0f32).to_raw_bytes()).to_bits(), (-0.0f32).to_bits());
    }
}
