#![allow(dead_code)]

use codec::{ByteSize, CodecResult, Decode, Decoder, Encode, Encoder, FieldSizes};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FlagsOptionSet: i16 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
    }
}

codec::flags_codec!(FlagsOptionSet);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructA {
    pub a: u8,
    pub b: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructB {
    pub inner: StructA,
    pub text: String,
    pub flags: FlagsOptionSet,
}

codec::keyed_struct! {
    StructA { a, b }
    StructB { inner, text, flags }
}

/// Holds its own element count, written ahead of the elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructC {
    pub count: usize,
    pub items: Vec<StructA>,
    pub text: String,
    pub flags: FlagsOptionSet,
}

impl StructC {
    pub fn new(items: Vec<StructA>, text: &str, flags: FlagsOptionSet) -> Self {
        Self {
            count: items.len(),
            items,
            text: text.to_owned(),
            flags,
        }
    }
}

impl Encode for StructC {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        let mut container = encoder.keyed();
        container.encode("count", &self.count)?;
        container.encode("items", &self.items)?;
        container.encode("text", &self.text)?;
        container.encode("flags", &self.flags)
    }
}

impl Decode for StructC {
    fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
        let mut container = decoder.single_value();
        let count: usize = container.decode()?;
        let items = (0..count)
            .map(|_| container.decode())
            .collect::<CodecResult<Vec<StructA>>>()?;
        Ok(Self {
            count,
            items,
            text: container.decode()?,
            flags: container.decode()?,
        })
    }
}

impl ByteSize for StructC {
    fn visit_fields(&self, fields: &mut FieldSizes) {
        fields
            .field(&self.count)
            .field(&self.items)
            .field(&self.text)
            .field(&self.flags);
    }
}

pub fn sample_b() -> StructB {
    StructB {
        inner: StructA { a: 7, b: 8 },
        text: "012".into(),
        flags: FlagsOptionSet::A | FlagsOptionSet::C,
    }
}

pub fn sample_c() -> StructC {
    StructC::new(
        vec![StructA { a: 1, b: 2 }, StructA { a: 3, b: 4 }],
        "0123",
        FlagsOptionSet::B,
    )
}
