//! Strict 24-bit BMP codec.
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc. The
//! header layout is public for callers that want to inspect or build
//! headers directly.

mod decode;
mod encode;
pub mod header;
mod utils;

pub use header::{FileHeader, InfoHeader, stride};

use crate::error::BmpError;
use crate::image::Image;
use crate::io::{Sink, SliceSource, Source};
use crate::limits::Limits;
use alloc::vec::Vec;

/// Decode BMP bytes held in memory.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Image, BmpError> {
    decode::decode_bmp(&mut SliceSource::new(data), limits)
}

/// Decode BMP bytes from any source.
pub(crate) fn decode_from(
    src: &mut dyn Source,
    limits: Option<&Limits>,
) -> Result<Image, BmpError> {
    decode::decode_bmp(src, limits)
}

/// Parse and validate only the headers, returning `(width, height)`.
pub(crate) fn probe(data: &[u8]) -> Result<(u32, u32), BmpError> {
    decode::read_headers(&mut SliceSource::new(data))
}

/// Encode to an in-memory BMP file.
pub(crate) fn encode(image: &Image) -> Result<Vec<u8>, BmpError> {
    let (file_header, _) = header::headers_for(image.width(), image.height())?;
    let mut out = Vec::with_capacity(file_header.file_size as usize);
    encode::encode_bmp(image, &mut out)?;
    Ok(out)
}

/// Encode into any sink.
pub(crate) fn encode_to(image: &Image, sink: &mut dyn Sink) -> Result<(), BmpError> {
    encode::encode_bmp(image, sink)
}
