//! # imgbmp
//!
//! Encoder and strict decoder for one BMP profile: uncompressed, 24 bits per
//! pixel, bottom-up rows, 14-byte file header plus 40-byte info header.
//!
//! Encoding always produces that exact layout. Decoding accepts only files
//! whose every header field matches it, and returns an error otherwise;
//! there is no best-effort or partial decode.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields), palette, or non-24-bit BMP
//! - Top-down rows and alternate info header sizes
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use imgbmp::{Color, Image, decode_bmp, encode_bmp};
//!
//! let mut image = Image::new(2, 1, Color::BLACK);
//! image.set_pixel(0, 0, Color::rgb(255, 0, 0));
//! image.set_pixel(1, 0, Color::rgb(0, 255, 0));
//!
//! let bytes = encode_bmp(&image)?;
//! assert_eq!(bytes.len(), 54 + 8);
//!
//! let decoded = decode_bmp(&bytes)?;
//! assert_eq!(decoded.pixel(1, 0), Some(Color::rgb(0, 255, 0)));
//! # Ok::<(), imgbmp::BmpError>(())
//! ```
//!
//! With the `std` feature (default), [`read_bmp`]/[`write_bmp`] work over
//! `std::io` and [`load_bmp`]/[`save_bmp`] over paths.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod io;
mod limits;
mod pixel;

pub mod bmp;

mod decode;

// Re-exports
pub use decode::DecodeRequest;
pub use error::{BmpError, ErrorKind};
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::Color;

use alloc::vec::Vec;

/// Encode `image` as a 24-bit BMP file.
pub fn encode_bmp(image: &Image) -> Result<Vec<u8>, BmpError> {
    bmp::encode(image)
}

/// Decode a 24-bit BMP file held in memory.
pub fn decode_bmp(data: &[u8]) -> Result<Image, BmpError> {
    bmp::decode(data, None)
}

/// Decode with resource limits.
pub fn decode_bmp_with_limits(data: &[u8], limits: &Limits) -> Result<Image, BmpError> {
    bmp::decode(data, Some(limits))
}

/// Write `image` as a 24-bit BMP file to `writer`.
///
/// The writer is not flushed; wrap it in a `BufWriter` for unbuffered sinks.
#[cfg(feature = "std")]
pub fn write_bmp<W: std::io::Write>(image: &Image, writer: W) -> Result<(), BmpError> {
    bmp::encode_to(image, &mut io::WriteSink(writer))
}

/// Decode a 24-bit BMP file from `reader`.
#[cfg(feature = "std")]
pub fn read_bmp<R: std::io::Read>(reader: R) -> Result<Image, BmpError> {
    DecodeRequest::new().read(reader)
}

/// Write `image` to a new file at `path`, replacing any existing file.
#[cfg(feature = "std")]
pub fn save_bmp<P: AsRef<std::path::Path>>(path: P, image: &Image) -> Result<(), BmpError> {
    use std::io::Write as _;

    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_bmp(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Open and decode the BMP file at `path`.
#[cfg(feature = "std")]
pub fn load_bmp<P: AsRef<std::path::Path>>(path: P) -> Result<Image, BmpError> {
    DecodeRequest::new().load(path)
}
