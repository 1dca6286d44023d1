#![no_main]

use codec::{ByteDecoder, ByteSize, CodecResult, Decode, Decoder, Encode, Encoder, FieldSizes};
use libfuzzer_sys::fuzz_target;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Flags: i16 {
        const A = 1 << 0;
        const B = 1 << 1;
    }
}

codec::flags_codec!(Flags);

#[derive(Debug, PartialEq)]
struct Item {
    a: u8,
    b: i16,
}

#[derive(Debug, PartialEq)]
struct Labeled {
    item: Item,
    label: String,
    flags: Flags,
}

codec::keyed_struct! {
    Item { a, b }
    Labeled { item, label, flags }
}

#[derive(Debug, PartialEq)]
struct Counted {
    items: Vec<Item>,
    label: String,
}

impl Encode for Counted {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        let mut container = encoder.keyed();
        container.encode("count", &self.items.len())?;
        container.encode("items", &self.items)?;
        container.encode("label", &self.label)
    }
}

impl Decode for Counted {
    fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
        let mut container = decoder.keyed();
        let count: usize = container.decode("count")?;
        let items = container.nested_unkeyed("items").decode_counted(count)?;
        Ok(Self {
            items,
            label: container.decode("label")?,
        })
    }
}

impl ByteSize for Counted {
    fn visit_fields(&self, fields: &mut FieldSizes) {
        fields
            .field(&self.items.len())
            .field(&self.items)
            .field(&self.label);
    }
}

fn check<T: Decode + Encode + ByteSize + PartialEq + std::fmt::Debug>(data: &[u8]) {
    let mut decoder = ByteDecoder::new(data);
    match decoder.decode::<T>() {
        Ok(value) => {
            let bytes = codec::encode(&value).unwrap();
            assert_eq!(bytes.len(), codec::byte_size(&value));
            assert_eq!(codec::decode::<T>(&bytes).unwrap(), value);
        }
        Err(_) => assert_eq!(decoder.position(), 0),
    }
}

fuzz_target!(|data: &[u8]| {
    check::<Labeled>(data);
    check::<Counted>(data);
    check::<(u64, String, bool)>(data);
});
