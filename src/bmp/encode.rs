//! BMP encoder: uncompressed, bottom-up 24-bit BMP.

use alloc::vec;
use log::trace;

use super::header::{self, stride};
use super::utils::{flip_row, pack_row};
use crate::error::BmpError;
use crate::image::Image;
use crate::io::Sink;

/// Serialize `image` into `sink`.
///
/// Headers are validated for representability before the first byte is
/// written, so a size error never leaves a partial file behind in the sink.
pub(crate) fn encode_bmp<S: Sink + ?Sized>(
    image: &Image,
    sink: &mut S,
) -> Result<(), BmpError> {
    let width = image.width();
    let height = image.height();
    let (file_header, info_header) = header::headers_for(width, height)?;

    trace!("Width: {width}");
    trace!("Height: {height}");
    trace!("File size: {}", file_header.file_size);

    sink.put(&file_header.to_bytes())?;
    sink.put(&info_header.to_bytes())?;

    if height == 0 {
        return Ok(());
    }

    // With at least one row the stride is bounded by the u32 file size.
    let row_stride = usize::try_from(stride(width)).map_err(|_| BmpError::DimensionsTooLarge {
        width: width.into(),
        height: height.into(),
    })?;
    let mut row = vec![0u8; row_stride];
    for disk_row in 0..height {
        pack_row(image.line(flip_row(height, disk_row)), &mut row);
        sink.put(&row)?;
    }
    Ok(())
}
