//! Channel-order and row-order adapters between `Image` and BMP pixel rows.

use crate::pixel::Color;

/// On-disk byte triple for a color: blue, green, red.
#[inline]
pub(crate) fn to_bgr(c: Color) -> [u8; 3] {
    [c.b, c.g, c.r]
}

/// Opaque color from an on-disk blue, green, red triple.
#[inline]
pub(crate) fn from_bgr(bgr: &[u8]) -> Color {
    Color::rgb(bgr[2], bgr[1], bgr[0])
}

/// Image row (top-down) stored at disk row `disk_row` (bottom-up).
///
/// The mapping is its own inverse: it also turns an image row into the disk
/// row it is written to.
#[inline]
pub(crate) fn flip_row(height: u32, disk_row: u32) -> u32 {
    height - 1 - disk_row
}

/// Pack an image row into `out` as BGR triples. Bytes past `width * 3` are
/// left untouched, so a zeroed buffer keeps its padding zero.
pub(crate) fn pack_row(line: &[Color], out: &mut [u8]) {
    for (dst, &c) in out.chunks_exact_mut(3).zip(line) {
        dst.copy_from_slice(&to_bgr(c));
    }
}

/// Reorder `height` rows of `width` pixels from disk order to image order,
/// in place. Pixels beyond `width * height` are left alone.
pub(crate) fn flip_rows(pixels: &mut [Color], width: usize, height: u32) {
    if width == 0 {
        return;
    }
    for top in 0..height / 2 {
        let bottom = flip_row(height, top) as usize;
        let (upper, lower) = pixels.split_at_mut(bottom * width);
        let top = top as usize * width;
        upper[top..top + width].swap_with_slice(&mut lower[..width]);
    }
}
