#![no_main]
use libfuzzer_sys::fuzz_target;
use imgbmp::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the header exactly
    let Ok(decoded) = decode_bmp(data) else {
        return;
    };

    let reencoded = encode_bmp(&decoded).expect("decoded image must re-encode");
    assert_eq!(&reencoded[..54], &data[..54], "header mismatch");
    assert!(reencoded.len() <= data.len());

    let decoded2 = decode_bmp(&reencoded).expect("re-encoded data failed to decode");
    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");
});
