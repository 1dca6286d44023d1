use buffer::{BufferError, ByteReader, ByteWriter};

#[test]
fn count_prefixed_records_roundtrip() {
    let records = [(1u8, 2i16), (3, 4)];
    let mut writer = ByteWriter::new();
    writer.write_raw(records.len());
    for (a, b) in records {
        writer.write_raw(a);
        writer.write_raw(b);
    }
    let bytes = writer.finish();
    assert_eq!(bytes.len(), std::mem::size_of::<usize>() + 2 * 3);

    let mut reader = ByteReader::new(&bytes);
    let count = reader.read_raw::<usize>().unwrap();
    let decoded: Vec<(u8, i16)> = (0..count)
        .map(|_| (reader.read_raw().unwrap(), reader.read_raw().unwrap()))
        .collect();
    assert_eq!(decoded, records);
    assert!(reader.is_empty());
}

#[test]
fn strings_back_to_back() {
    let mut writer = ByteWriter::new();
    writer.write_cstr("first");
    writer.write_cstr("");
    writer.write_cstr("third");
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_cstr().unwrap(), b"first");
    assert_eq!(reader.read_cstr().unwrap(), b"");
    assert_eq!(reader.read_cstr().unwrap(), b"third");
    assert_eq!(
        reader.read_cstr().unwrap_err(),
        BufferError::NoCString { scanned: 0 }
    );
}

#[test]
fn truncated_scalar_reports_shortfall() {
    let mut writer = ByteWriter::new();
    writer.write_raw(0xDEAD_BEEFu32);
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes[..2]);
    assert_eq!(
        reader.read_raw::<u32>().unwrap_err(),
        BufferError::NotEnoughData {
            requested: 4,
            available: 2
        }
    );
    assert_eq!(reader.position(), 0);
}
