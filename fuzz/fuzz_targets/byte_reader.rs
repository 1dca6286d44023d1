#![no_main]

use buffer::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;
        let before = reader.position();

        let ok = match op {
            0 => reader.read_raw::<u8>().is_ok(),
            1 => reader.read_raw::<i16>().is_ok(),
            2 => reader.read_raw::<u64>().is_ok(),
            3 => reader.read_raw::<f64>().is_ok(),
            4 => reader.read_cstr().is_ok(),
            5 => {
                let count = usize::from(data[idx.saturating_sub(1)] % 32);
                reader.read_bytes(count).is_ok()
            }
            _ => {
                reader.rewind(before / 2);
                true
            }
        };

        if !ok {
            assert_eq!(reader.position(), before);
        }
        assert!(reader.position() <= reader.len());
    }
});
