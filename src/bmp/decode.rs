//! Validating decoder for uncompressed, bottom-up 24-bit BMP.
//!
//! Every header field is checked against the fixed profile; any deviation is
//! an error and no image is produced.

use alloc::vec;
use alloc::vec::Vec;
use log::{debug, trace};

use super::header::{
    self, FILE_HEADER_SIZE, FileHeader, HEADER_SIZE, INFO_HEADER_SIZE, InfoHeader,
};
use super::utils::{flip_rows, from_bgr};
use crate::error::BmpError;
use crate::image::Image;
use crate::io::Source;
use crate::limits::Limits;
use crate::pixel::Color;

/// Pixels read per `fill` call. Bounds the scratch buffer for wide rows.
const CHUNK_PIXELS: usize = 16 * 1024;

/// Upper bound on pixel capacity reserved before any pixel byte is read.
/// Past this the buffer grows only as rows actually arrive.
const MAX_PREALLOC_PIXELS: usize = 1 << 20;

/// Read and validate both headers, returning the image dimensions.
pub(crate) fn read_headers<S: Source + ?Sized>(
    src: &mut S,
) -> Result<(u32, u32), BmpError> {
    let mut file_bytes = [0u8; FILE_HEADER_SIZE];
    src.fill(&mut file_bytes)?;
    let mut info_bytes = [0u8; INFO_HEADER_SIZE];
    src.fill(&mut info_bytes)?;

    let file = FileHeader::from_bytes(&file_bytes);
    let info = InfoHeader::from_bytes(&info_bytes);
    let (width, height) = header::validate(&file, &info)
        .inspect_err(|e| debug!("Rejecting BMP: {e}"))?;

    trace!("Width: {width}");
    trace!("Height: {height}");
    trace!("File size: {}", file.file_size);
    Ok((width, height))
}

/// Decode a complete image from `src`.
///
/// Memory use is bounded by the bytes the source actually delivers, not by
/// the dimensions the header declares.
pub(crate) fn decode_bmp<S: Source + ?Sized>(
    src: &mut S,
    limits: Option<&Limits>,
) -> Result<Image, BmpError> {
    let (width, height) = read_headers(src)?;
    let too_large = || BmpError::DimensionsTooLarge {
        width: width.into(),
        height: height.into(),
    };

    if let Some(limits) = limits {
        limits.check(width, height)?;
        let out_bytes =
            u64::from(width) * u64::from(height) * core::mem::size_of::<Color>() as u64;
        limits.check_memory(out_bytes)?;
    }

    let data_size = header::stride(width) * u64::from(height);
    if let Some(available) = src.remaining() {
        // Fail early when the input cannot hold the pixel rows.
        if (available as u64) < data_size {
            debug!(
                "Truncated BMP: {available} bytes after the {HEADER_SIZE}-byte header, \
                 need {data_size}"
            );
            return Err(BmpError::UnexpectedEof);
        }
    }

    let w = width as usize;
    let total = w.checked_mul(height as usize).ok_or_else(too_large)?;
    // At most 3 bytes: 3w <= stride <= 3w + 3.
    let pad_len = (header::stride(width) - u64::from(width) * 3) as usize;

    let mut pixels: Vec<Color> = Vec::with_capacity(total.min(MAX_PREALLOC_PIXELS));
    let mut chunk = vec![0u8; w.min(CHUNK_PIXELS) * 3];
    let mut pad = [0u8; 3];
    // Zero-width rows occupy no bytes.
    let rows = if w == 0 { 0 } else { height };
    for _ in 0..rows {
        let mut left = w;
        while left > 0 {
            let n = left.min(CHUNK_PIXELS);
            let bytes = &mut chunk[..n * 3];
            src.fill(bytes)?;
            pixels.extend(bytes.chunks_exact(3).map(from_bgr));
            left -= n;
        }
        src.fill(&mut pad[..pad_len])?;
    }

    // Disk order is bottom-up.
    flip_rows(&mut pixels, w, height);
    Image::from_pixels(width, height, pixels).ok_or_else(too_large)
}
