//! File header and info header layout for the 24-bit uncompressed profile.
//!
//! Both headers are serialized field by field in little-endian order, so the
//! on-disk sizes are exactly 14 and 40 bytes regardless of struct layout.

use crate::error::BmpError;

/// `"BM"`.
pub const SIGNATURE: [u8; 2] = *b"BM";
/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the info header (BITMAPINFOHEADER) on disk.
pub const INFO_HEADER_SIZE: usize = 40;
/// Combined header size, which is also the pixel-data offset.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const RESERVED: u32 = 0;
pub const DATA_OFFSET: u32 = HEADER_SIZE as u32;
pub const PLANES: u16 = 1;
pub const BITS_PER_PIXEL: u16 = 24;
/// BI_RGB.
pub const COMPRESSION_NONE: u32 = 0;
/// Pixels per meter, roughly 300 DPI.
pub const RESOLUTION: i32 = 11811;
pub const PALETTE_COLORS: i32 = 0;
pub const IMPORTANT_COLORS: i32 = 0x100_0000;

const BYTES_PER_PIXEL: u64 = 3;
const ALIGNMENT: u64 = 4;

/// Padded byte length of one pixel row on disk.
///
/// Computed as `4 * ((width * 3 + 3) / 4)` with integer division, the same
/// formula on both the encode and decode side.
pub const fn stride(width: u32) -> u64 {
    ALIGNMENT * ((width as u64 * BYTES_PER_PIXEL + BYTES_PER_PIXEL) / ALIGNMENT)
}

/// Total pixel-data bytes for an image, `stride(width) * height`.
pub fn pixel_data_size(width: u32, height: u32) -> Option<u64> {
    stride(width).checked_mul(u64::from(height))
}

fn le_u16(b: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([b[off], b[off + 1]])
}

fn le_u32(b: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

fn le_i32(b: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

/// The 14-byte BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
}

impl FileHeader {
    /// Header for a file carrying `pixel_data_size` bytes of pixel rows.
    ///
    /// `pixel_data_size + 54` must fit in `u32`; [`headers_for`] checks this.
    pub fn new(pixel_data_size: u32) -> Self {
        Self {
            signature: SIGNATURE,
            file_size: pixel_data_size + DATA_OFFSET,
            reserved: RESERVED,
            data_offset: DATA_OFFSET,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        out[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        out
    }

    pub fn from_bytes(b: &[u8; FILE_HEADER_SIZE]) -> Self {
        Self {
            signature: [b[0], b[1]],
            file_size: le_u32(b, 2),
            reserved: le_u32(b, 6),
            data_offset: le_u32(b, 10),
        }
    }

    /// Check the fields that do not depend on the image dimensions.
    pub fn validate(&self) -> Result<(), BmpError> {
        if self.signature[0] != SIGNATURE[0] {
            return Err(BmpError::invalid(
                "signature byte 0",
                SIGNATURE[0].into(),
                self.signature[0].into(),
            ));
        }
        if self.signature[1] != SIGNATURE[1] {
            return Err(BmpError::invalid(
                "signature byte 1",
                SIGNATURE[1].into(),
                self.signature[1].into(),
            ));
        }
        check("data offset", DATA_OFFSET.into(), self.data_offset.into())?;
        check("reserved", RESERVED.into(), self.reserved.into())
    }
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: i32,
    pub colors_important: i32,
}

impl InfoHeader {
    /// Header for a bottom-up 24-bit image. Every field other than the
    /// dimensions and `image_size` takes its fixed profile value.
    pub fn new(width: i32, height: i32, image_size: u32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: PLANES,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size,
            x_pels_per_meter: RESOLUTION,
            y_pels_per_meter: RESOLUTION,
            colors_used: PALETTE_COLORS,
            colors_important: IMPORTANT_COLORS,
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_pels_per_meter.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_pels_per_meter.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }

    pub fn from_bytes(b: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            header_size: le_u32(b, 0),
            width: le_i32(b, 4),
            height: le_i32(b, 8),
            planes: le_u16(b, 12),
            bits_per_pixel: le_u16(b, 14),
            compression: le_u32(b, 16),
            image_size: le_u32(b, 20),
            x_pels_per_meter: le_i32(b, 24),
            y_pels_per_meter: le_i32(b, 28),
            colors_used: le_i32(b, 32),
            colors_important: le_i32(b, 36),
        }
    }

    /// Declared dimensions. Negative values (top-down rows, mirrored
    /// widths) are outside the supported profile.
    pub fn dimensions(&self) -> Result<(u32, u32), BmpError> {
        let width = u32::try_from(self.width)
            .map_err(|_| BmpError::invalid("width", 0, self.width.into()))?;
        let height = u32::try_from(self.height)
            .map_err(|_| BmpError::invalid("height", 0, self.height.into()))?;
        Ok((width, height))
    }

    /// Check every fixed-value field.
    pub fn validate(&self) -> Result<(), BmpError> {
        check(
            "info header size",
            INFO_HEADER_SIZE as i64,
            self.header_size.into(),
        )?;
        check("planes", PLANES.into(), self.planes.into())?;
        check(
            "bits per pixel",
            BITS_PER_PIXEL.into(),
            self.bits_per_pixel.into(),
        )?;
        check(
            "compression",
            COMPRESSION_NONE.into(),
            self.compression.into(),
        )?;
        check(
            "horizontal resolution",
            RESOLUTION.into(),
            self.x_pels_per_meter.into(),
        )?;
        check(
            "vertical resolution",
            RESOLUTION.into(),
            self.y_pels_per_meter.into(),
        )?;
        check("palette colors", PALETTE_COLORS.into(), self.colors_used.into())?;
        check(
            "important colors",
            IMPORTANT_COLORS.into(),
            self.colors_important.into(),
        )
    }
}

fn check(field: &'static str, expected: i64, actual: i64) -> Result<(), BmpError> {
    if expected == actual {
        Ok(())
    } else {
        Err(BmpError::invalid(field, expected, actual))
    }
}

/// Build both headers for an image of the given size.
///
/// Fails when the dimensions or the file size cannot be represented in the
/// 32-bit header fields.
pub fn headers_for(width: u32, height: u32) -> Result<(FileHeader, InfoHeader), BmpError> {
    let too_large = || BmpError::DimensionsTooLarge {
        width: width.into(),
        height: height.into(),
    };
    let w = i32::try_from(width).map_err(|_| too_large())?;
    let h = i32::try_from(height).map_err(|_| too_large())?;
    let data_size = pixel_data_size(width, height)
        .filter(|&n| n.saturating_add(HEADER_SIZE as u64) <= u64::from(u32::MAX))
        .ok_or_else(too_large)? as u32;
    Ok((FileHeader::new(data_size), InfoHeader::new(w, h, data_size)))
}

/// Validate a parsed header pair against the fixed profile and return the
/// image dimensions.
pub fn validate(file: &FileHeader, info: &InfoHeader) -> Result<(u32, u32), BmpError> {
    file.validate()?;
    let (width, height) = info.dimensions()?;
    // Both operands are below 2^33 and 2^31, so the product cannot overflow.
    let data_size = stride(width) * u64::from(height);
    check_size(
        "file size",
        data_size + HEADER_SIZE as u64,
        file.file_size,
    )?;
    info.validate()?;
    check_size("image data size", data_size, info.image_size)?;
    Ok((width, height))
}

fn check_size(field: &'static str, expected: u64, actual: u32) -> Result<(), BmpError> {
    if expected == u64::from(actual) {
        Ok(())
    } else {
        let expected = i64::try_from(expected).unwrap_or(i64::MAX);
        Err(BmpError::invalid(field, expected, actual.into()))
    }
}
