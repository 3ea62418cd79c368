use crate::bmp;
use crate::error::BmpError;

/// Dimensions read from a BMP header without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Probe header for dimensions.
    ///
    /// Applies the same header validation as a full decode, so a successful
    /// probe means only the pixel rows remain to be checked.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let (width, height) = bmp::probe(data)?;
        Ok(Self { width, height })
    }

    /// Size of the complete file, headers included.
    pub fn file_size(&self) -> u64 {
        bmp::stride(self.width) * u64::from(self.height) + bmp::header::HEADER_SIZE as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use crate::pixel::Color;

    #[test]
    fn probe_reads_dimensions() {
        let data = bmp::encode(&Image::new(7, 4, Color::BLACK)).unwrap();
        let info = ImageInfo::from_bytes(&data[..54]).unwrap();
        assert_eq!(info, ImageInfo { width: 7, height: 4 });
        assert_eq!(info.file_size(), data.len() as u64);
    }

    #[test]
    fn probe_rejects_bad_signature() {
        let mut data = bmp::encode(&Image::new(1, 1, Color::BLACK)).unwrap();
        data[0] = b'X';
        assert!(ImageInfo::from_bytes(&data).is_err());
    }
}
