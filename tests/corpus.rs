//! Test corpus: roundtrips over patterns and sizes, and single-field header
//! corruption.

use imgbmp::*;

fn checkerboard(w: u32, h: u32) -> Image {
    let mut img = Image::new(w, h, Color::BLACK);
    for y in 0..h {
        for x in 0..w {
            let c = if (x + y) % 2 == 0 {
                Color::rgb(200, 220, 240)
            } else {
                Color::rgb(10, 40, 70)
            };
            img.set_pixel(x, y, c);
        }
    }
    img
}

fn noise_pattern(w: u32, h: u32) -> Image {
    let mut img = Image::new(w, h, Color::BLACK);
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    for y in 0..h {
        for c in img.line_mut(y) {
            *c = Color::rgb(next(), next(), next());
        }
    }
    img
}

fn assert_roundtrip(img: &Image) -> Vec<u8> {
    let encoded = encode_bmp(img).unwrap();
    let expected_len = bmp::stride(img.width()) * u64::from(img.height()) + 54;
    assert_eq!(encoded.len() as u64, expected_len);
    let decoded = decode_bmp(&encoded).unwrap();
    assert_eq!(&decoded, img, "{}x{}", img.width(), img.height());
    encoded
}

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn flat_checkerboard_roundtrip() {
    assert_roundtrip(&checkerboard(10, 8));
}

#[test]
fn flat_noise_roundtrip() {
    assert_roundtrip(&noise_pattern(16, 12));
}

#[test]
fn single_pixel() {
    let img = Image::new(1, 1, Color::rgb(12, 34, 56));
    let encoded = assert_roundtrip(&img);
    assert_eq!(&encoded[54..], &[56, 34, 12, 0]);
}

#[test]
fn every_small_size() {
    for w in 0..=9 {
        for h in 0..=4 {
            assert_roundtrip(&noise_pattern(w, h));
        }
    }
}

#[test]
fn padding_bytes_are_zero() {
    for w in 1..=8 {
        let img = Image::new(w, 3, Color::WHITE);
        let encoded = encode_bmp(&img).unwrap();
        let stride = bmp::stride(w) as usize;
        let content = w as usize * 3;
        for row in encoded[54..].chunks_exact(stride) {
            assert!(row[..content].iter().all(|&b| b == 255));
            assert!(row[content..].iter().all(|&b| b == 0), "width {w}");
        }
    }
}

#[test]
fn zero_width_with_rows() {
    let img = Image::new(0, 5, Color::BLACK);
    let encoded = assert_roundtrip(&img);
    assert_eq!(encoded.len(), 54);
}

#[test]
fn wide_single_row() {
    assert_roundtrip(&noise_pattern(1001, 1));
}

#[test]
fn very_wide_rows() {
    let img = noise_pattern(40_001, 2);
    let _encoded = assert_roundtrip(&img);
    #[cfg(feature = "std")]
    assert_eq!(read_bmp(&_encoded[..]).unwrap(), img);
}

#[test]
fn tall_single_column() {
    assert_roundtrip(&noise_pattern(1, 513));
}

#[test]
fn stride_formula() {
    for w in [0u32, 1, 2, 3, 4, 5, 10, 100] {
        assert_eq!(bmp::stride(w), 4 * ((u64::from(w) * 3 + 3) / 4), "width {w}");
    }
}

// ── Header corruption ────────────────────────────────────────────────

fn patch(data: &mut [u8], offset: usize, bytes: &[u8]) {
    data[offset..offset + bytes.len()].copy_from_slice(bytes);
}

fn expect_field(data: &[u8], expected_field: &str) {
    match decode_bmp(data) {
        Err(BmpError::InvalidHeader { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected InvalidHeader for {expected_field}, got {other:?}"),
    }
}

#[test]
fn each_field_is_checked() {
    let valid = encode_bmp(&checkerboard(5, 3)).unwrap();
    let cases: Vec<(usize, Vec<u8>, &str)> = vec![
        (0, b"X".to_vec(), "signature byte 0"),
        (1, b"A".to_vec(), "signature byte 1"),
        (2, 1000u32.to_le_bytes().to_vec(), "file size"),
        (6, 1u32.to_le_bytes().to_vec(), "reserved"),
        (10, 55u32.to_le_bytes().to_vec(), "data offset"),
        (14, 108u32.to_le_bytes().to_vec(), "info header size"),
        (26, 2u16.to_le_bytes().to_vec(), "planes"),
        (28, 32u16.to_le_bytes().to_vec(), "bits per pixel"),
        (30, 1u32.to_le_bytes().to_vec(), "compression"),
        (34, 1u32.to_le_bytes().to_vec(), "image data size"),
        (38, 2835i32.to_le_bytes().to_vec(), "horizontal resolution"),
        (42, 2835i32.to_le_bytes().to_vec(), "vertical resolution"),
        (46, 256i32.to_le_bytes().to_vec(), "palette colors"),
        (50, 0i32.to_le_bytes().to_vec(), "important colors"),
    ];
    for (offset, bytes, field) in cases {
        let mut data = valid.clone();
        patch(&mut data, offset, &bytes);
        expect_field(&data, field);
    }
}

#[test]
fn changed_dimensions_fail_size_checks() {
    let valid = encode_bmp(&checkerboard(5, 3)).unwrap();

    let mut data = valid.clone();
    patch(&mut data, 18, &6i32.to_le_bytes());
    expect_field(&data, "file size");

    let mut data = valid.clone();
    patch(&mut data, 22, &4i32.to_le_bytes());
    expect_field(&data, "file size");
}

#[test]
fn top_down_rejected() {
    let mut data = encode_bmp(&checkerboard(2, 2)).unwrap();
    patch(&mut data, 22, &(-2i32).to_le_bytes());
    expect_field(&data, "height");
}

#[test]
fn negative_width_rejected() {
    // Width -1 would give a zero stride and a 54-byte file; it must still fail.
    let mut data = encode_bmp(&Image::new(0, 0, Color::BLACK)).unwrap();
    patch(&mut data, 18, &(-1i32).to_le_bytes());
    expect_field(&data, "width");
}

#[test]
fn consistent_but_huge_header_fails_without_allocating() {
    // Header describes a ~1 GiB image; only the header is present.
    let w = 16_384u32;
    let h = 20_000u32;
    let data_size = (bmp::stride(w) * u64::from(h)) as u32;
    let mut data = encode_bmp(&Image::new(0, 0, Color::BLACK)).unwrap();
    patch(&mut data, 2, &(data_size + 54).to_le_bytes());
    patch(&mut data, 18, &(w as i32).to_le_bytes());
    patch(&mut data, 22, &(h as i32).to_le_bytes());
    patch(&mut data, 34, &data_size.to_le_bytes());

    assert_eq!(
        ImageInfo::from_bytes(&data).unwrap(),
        ImageInfo { width: w, height: h }
    );
    assert!(matches!(decode_bmp(&data), Err(BmpError::UnexpectedEof)));
}

#[test]
fn limits_max_memory() {
    let encoded = encode_bmp(&checkerboard(2, 2)).unwrap();
    let limits = Limits {
        max_memory_bytes: Some(8),
        ..Default::default()
    };
    assert!(decode_bmp_with_limits(&encoded, &limits).is_err());
    let limits = Limits {
        max_memory_bytes: Some(16),
        ..Default::default()
    };
    assert!(decode_bmp_with_limits(&encoded, &limits).is_ok());
}

#[test]
fn garbage_never_panics() {
    let mut state: u32 = 0x1234_5678;
    for len in 0..200 {
        let data: Vec<u8> = (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();
        assert!(decode_bmp(&data).is_err());
    }
}
