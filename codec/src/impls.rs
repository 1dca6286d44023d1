//! [`Encode`] and [`Decode`] for standard types.
//!
//! Sequences and maps are encode-only: the format stores no element count, so
//! only the value that owns the sequence knows how many elements to read back
//! (see [`UnkeyedDecoder::decode_counted`](crate::UnkeyedDecoder::decode_counted)).

use std::collections::BTreeMap;

use crate::decoder::{Decode, Decoder};
use crate::encoder::{Encode, Encoder};
use crate::error::CodecResult;

macro_rules! raw_codec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
                    encoder.single_value().encode_raw(*self)
                }
            }

            impl Decode for $ty {
                #[inline]
                fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
                    decoder.single_value().decode_raw()
                }
            }
        )*
    };
}

raw_codec!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Encode for str {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        encoder.single_value().encode_str(self)
    }
}

impl Encode for String {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        encoder.single_value().encode_str(self)
    }
}

impl Decode for String {
    fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
        decoder.single_value().decode_string()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        encoder.unkeyed().encode_all(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        self.as_slice().encode(encoder)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        self.as_slice().encode(encoder)
    }
}

/// Values in key order. Keys route each value but are not written.
impl<V: Encode> Encode for BTreeMap<String, V> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        let mut container = encoder.keyed();
        for (key, value) in self {
            container.encode(key, value)?;
        }
        Ok(())
    }
}

/// `None` is nil, which the format cannot represent.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        let mut container = encoder.single_value();
        match self {
            Some(value) => container.encode(value),
            None => container.encode_nil(),
        }
    }
}

/// Always decodes to `Some`: nothing on the wire marks absence.
impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
        let mut container = decoder.single_value();
        if container.decode_nil()? {
            return Ok(None);
        }
        container.decode().map(Some)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        (**self).encode(encoder)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
        T::decode(decoder).map(Self::new)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        (**self).encode(encoder)
    }
}

impl Encode for () {
    fn encode(&self, _encoder: &mut Encoder<'_>) -> CodecResult<()> {
        Ok(())
    }
}

impl Decode for () {
    fn decode(_decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
        Ok(())
    }
}

macro_rules! tuple_codec {
    ($($name:ident)+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
                let ($($name,)+) = self;
                let mut container = encoder.unkeyed();
                $(container.encode($name)?;)+
                Ok(())
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
                let mut container = decoder.unkeyed();
                Ok(($(container.decode::<$name>()?,)+))
            }
        }
    };
}

tuple_codec!(A);
tuple_codec!(A B);
tuple_codec!(A B C);
tuple_codec!(A B C D);
