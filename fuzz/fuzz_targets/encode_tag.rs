#![no_main]
use libfuzzer_sys::fuzz_target;

use fastbedrock::{decode_tag, encode_tag, Tag};

fuzz_target!(|tag: Tag| {
    if let Ok(bs) = encode_tag(&tag) {
        assert_eq!(decode_tag(&bs).unwrap(), tag);
    }
});
