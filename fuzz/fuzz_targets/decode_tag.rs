#![no_main]
use libfuzzer_sys::fuzz_target;

use fastbedrock::{decode_tags_with_opts, encode_tags, DecodeOpts};

fuzz_target!(|data: &[u8]| {
    let opts = DecodeOpts::new().max_seq_len(100).max_depth(64);
    if let Ok(tags) = decode_tags_with_opts(data, opts) {
        let _bs = encode_tags(&tags).unwrap();
    }
});
