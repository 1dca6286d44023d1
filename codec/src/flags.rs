//! Codec glue for [`bitflags`] flag sets.
//!
//! A flag set is encoded as the native byte pattern of its raw bits and
//! reports that width as its exact size. Use [`flags_codec!`](crate::flags_codec)
//! to implement [`Encode`](crate::Encode), [`Decode`](crate::Decode) and
//! [`ByteSize`](crate::ByteSize) for a type generated by `bitflags!`.

use bitflags::Flags;
use buffer::RawValue;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecResult;

/// Writes the raw bits of `flags`.
pub fn encode_flags<F>(flags: &F, encoder: &mut Encoder<'_>) -> CodecResult<()>
where
    F: Flags,
    F::Bits: RawValue,
{
    encoder.single_value().encode_raw(flags.bits())
}

/// Reads raw bits, keeping any bits that name no known flag.
pub fn decode_flags<F>(decoder: &mut Decoder<'_, '_>) -> CodecResult<F>
where
    F: Flags,
    F::Bits: RawValue,
{
    decoder.single_value().decode_raw().map(F::from_bits_retain)
}

/// Encoded width of a flag set of type `F`.
#[must_use]
pub const fn flags_size<F>() -> usize
where
    F: Flags,
    F::Bits: RawValue,
{
    <F::Bits as RawValue>::SIZE
}

/// Implements [`Encode`](crate::Encode), [`Decode`](crate::Decode) and a
/// self-reported [`ByteSize`](crate::ByteSize) for `bitflags!` types.
///
/// ```
/// bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     struct Access: u8 {
///         const READ = 1 << 0;
///         const WRITE = 1 << 1;
///     }
/// }
///
/// codec::flags_codec!(Access);
///
/// let bytes = codec::encode(&(Access::READ | Access::WRITE)).unwrap();
/// assert_eq!(bytes, vec![0b11]);
/// assert_eq!(codec::byte_size(&Access::READ), 1);
/// ```
#[macro_export]
macro_rules! flags_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Encode for $ty {
                fn encode(&self, encoder: &mut $crate::Encoder<'_>) -> $crate::CodecResult<()> {
                    $crate::encode_flags(self, encoder)
                }
            }

            impl $crate::Decode for $ty {
                fn decode(decoder: &mut $crate::Decoder<'_, '_>) -> $crate::CodecResult<Self> {
                    $crate::decode_flags(decoder)
                }
            }

            impl $crate::ByteSize for $ty {
                const STRATEGY: $crate::SizeStrategy = $crate::SizeStrategy::SelfReported;

                fn reported_size(&self) -> usize {
                    $crate::flags_size::<Self>()
                }
            }
        )+
    };
}
