use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::pixel::Color;

/// An owned raster image: `width × height` colors in row-major order.
///
/// Row 0 is the top row. The BMP codec handles the bottom-up translation
/// when reading and writing files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create an image filled with `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` does not fit in `usize`. Use
    /// [`Image::try_new`] for untrusted dimensions.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![fill; count],
        }
    }

    /// Create an image filled with `fill`, failing on overflowing dimensions.
    pub fn try_new(width: u32, height: u32, fill: Color) -> Result<Self, BmpError> {
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge {
                width: width.into(),
                height: height.into(),
            })?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; count],
        })
    }

    /// Wrap an existing pixel buffer. Returns `None` when the length does
    /// not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        let count = (width as usize).checked_mul(height as usize)?;
        (pixels.len() == count).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the image has no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Row `y`, counted from the top.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn line(&self, y: u32) -> &[Color] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Mutable row `y`, counted from the top.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn line_mut(&mut self, y: u32) -> &mut [Color] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    /// Pixel at (`x`, `y`), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Set the pixel at (`x`, `y`). Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
        true
    }

    /// Copy into an [`imgref::ImgVec`] of RGB pixels (alpha dropped).
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        let buf = self.pixels.iter().map(|&c| rgb::RGB8::from(c)).collect();
        imgref::ImgVec::new(buf, self.width as usize, self.height as usize)
    }
}

#[cfg(feature = "imgref")]
impl TryFrom<imgref::ImgRef<'_, rgb::RGB8>> for Image {
    type Error = BmpError;

    fn try_from(img: imgref::ImgRef<'_, rgb::RGB8>) -> Result<Self, Self::Error> {
        let too_large = || BmpError::DimensionsTooLarge {
            width: img.width() as u64,
            height: img.height() as u64,
        };
        let width = u32::try_from(img.width()).map_err(|_| too_large())?;
        let height = u32::try_from(img.height()).map_err(|_| too_large())?;
        let mut pixels = Vec::with_capacity(img.width() * img.height());
        for row in img.rows() {
            pixels.extend(row.iter().map(|&p| Color::from(p)));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}
