#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32) -> Vec<u8> {
    let stride = 4 * ((width as u32 * 3 + 3) / 4);
    let data_size = stride * height as u32;
    let mut bmp = Vec::with_capacity(54);
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&(data_size + 54).to_le_bytes()); // file size
    bmp.extend_from_slice(&0u32.to_le_bytes()); // reserved
    bmp.extend_from_slice(&54u32.to_le_bytes()); // data offset
    bmp.extend_from_slice(&40u32.to_le_bytes()); // info header size
    bmp.extend_from_slice(&width.to_le_bytes());
    bmp.extend_from_slice(&height.to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes()); // planes
    bmp.extend_from_slice(&24u16.to_le_bytes()); // bpp
    bmp.extend_from_slice(&0u32.to_le_bytes()); // compression
    bmp.extend_from_slice(&data_size.to_le_bytes());
    bmp.extend_from_slice(&11811i32.to_le_bytes()); // h resolution
    bmp.extend_from_slice(&11811i32.to_le_bytes()); // v resolution
    bmp.extend_from_slice(&0i32.to_le_bytes()); // palette colors
    bmp.extend_from_slice(&0x100_0000i32.to_le_bytes()); // important colors
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Empty image
    fs::write(format!("{dir}/bmp_0x0.bmp"), header(0, 0)).unwrap();

    // 1x1: 3 bytes + 1 padding
    let mut bmp = header(1, 1);
    bmp.extend_from_slice(&[0x00, 0x00, 0xff, 0x00]);
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp).unwrap();

    // 2x1 red, green: 6 bytes + 2 padding
    let mut bmp = header(2, 1);
    bmp.extend_from_slice(&[0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0x00, 0x00]);
    fs::write(format!("{dir}/bmp_2x1.bmp"), bmp).unwrap();

    // 3x2 gradient
    let mut bmp = header(3, 2);
    for row in 0..2u8 {
        for col in 0..3u8 {
            bmp.extend_from_slice(&[col * 80, row * 120, 200]);
        }
        bmp.extend_from_slice(&[0, 0, 0]);
    }
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/header_only_1x1.bin"), header(1, 1)).unwrap();
    let mut top_down = header(1, 1);
    top_down[22..26].copy_from_slice(&(-1i32).to_le_bytes());
    top_down.extend_from_slice(&[0, 0, 0, 0]);
    fs::write(format!("{dir}/top_down.bin"), top_down).unwrap();

    println!("Generated seed corpus in {dir}/");
}
