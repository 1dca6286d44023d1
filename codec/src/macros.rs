//! Field-list macro for plain structs.

/// Implements [`Encode`](crate::Encode), [`Decode`](crate::Decode) and
/// [`ByteSize`](crate::ByteSize) for structs from a single field list.
///
/// Fields are encoded through a keyed container, decoded in the same order,
/// and visited in that order for size estimation. Listing a field once keeps
/// all three in step.
///
/// ```
/// struct Header {
///     version: u16,
///     name: String,
/// }
///
/// codec::keyed_struct! {
///     Header { version, name }
/// }
///
/// let header = Header { version: 3, name: "v".into() };
/// let bytes = codec::encode(&header).unwrap();
/// assert_eq!(bytes.len(), codec::byte_size(&header));
///
/// let back: Header = codec::decode(&bytes).unwrap();
/// assert_eq!(back.version, 3);
/// assert_eq!(back.name, "v");
/// ```
#[macro_export]
macro_rules! keyed_struct {
    ($($name:ident { $($field:ident),* $(,)? })+) => {
        $(
            impl $crate::Encode for $name {
                #[allow(unused_mut, unused_variables)]
                fn encode(&self, encoder: &mut $crate::Encoder<'_>) -> $crate::CodecResult<()> {
                    let mut container = encoder.keyed();
                    $(container.encode(stringify!($field), &self.$field)?;)*
                    Ok(())
                }
            }

            impl $crate::Decode for $name {
                #[allow(unused_mut, unused_variables)]
                fn decode(decoder: &mut $crate::Decoder<'_, '_>) -> $crate::CodecResult<Self> {
                    let mut container = decoder.keyed();
                    Ok(Self {
                        $($field: container.decode(stringify!($field))?,)*
                    })
                }
            }

            impl $crate::ByteSize for $name {
                #[allow(unused_variables)]
                fn visit_fields(&self, fields: &mut $crate::FieldSizes) {
                    $(fields.field(&self.$field);)*
                }
            }
        )+
    };
}
