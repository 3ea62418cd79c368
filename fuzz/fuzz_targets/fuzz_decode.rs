#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    let _ = imgbmp::decode_bmp(data);
    let _ = imgbmp::ImageInfo::from_bytes(data);
    let _ = imgbmp::read_bmp(data);
});
