use crate::bmp;
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode options: currently only resource [`Limits`].
///
/// ```no_run
/// use imgbmp::{DecodeRequest, Limits};
///
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let data: &[u8] = &[]; // BMP bytes
/// let image = DecodeRequest::new().with_limits(&limits).decode(data)?;
/// # Ok::<(), imgbmp::BmpError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeRequest<'a> {
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject images whose declared size exceeds `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode a BMP file held in memory.
    pub fn decode(&self, data: &[u8]) -> Result<Image, BmpError> {
        bmp::decode(data, self.limits)
    }

    /// Decode a BMP file from a reader.
    #[cfg(feature = "std")]
    pub fn read<R: std::io::Read>(&self, reader: R) -> Result<Image, BmpError> {
        bmp::decode_from(&mut crate::io::ReadSource(reader), self.limits)
    }

    /// Open and decode the BMP file at `path`.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<std::path::Path>>(&self, path: P) -> Result<Image, BmpError> {
        let file = std::fs::File::open(path)?;
        self.read(std::io::BufReader::new(file))
    }
}
