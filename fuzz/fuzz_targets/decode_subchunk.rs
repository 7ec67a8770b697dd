#![no_main]
use libfuzzer_sys::fuzz_target;

use fastbedrock::{decode_subchunk, encode_subchunk};

fuzz_target!(|data: &[u8]| {
    if let Ok(sub) = decode_subchunk(data) {
        let bs = encode_subchunk(&sub).unwrap();
        assert_eq!(decode_subchunk(&bs).unwrap(), sub);
    }
});
