#![no_main]

use std::io::Read;

use flate2::read::DeflateDecoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Compression is total over byte sequences; any failure here is a bug
    let compressed = rawdeflate::compress(data).unwrap();

    let mut decoder = DeflateDecoder::new(&compressed[..]);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output).unwrap();

    assert_eq!(output, data);
});
