/// An 8-bit RGBA color.
///
/// Alpha lives in memory only: the BMP profile stores three channels, so
/// alpha is never written and decoded pixels keep the fill alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the color channels (ignoring alpha) match.
    pub fn same_rgb(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Color {
    fn from(p: rgb::RGB8) -> Self {
        Color::rgb(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGB8 {
    fn from(c: Color) -> Self {
        rgb::RGB8::new(c.r, c.g, c.b)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Color {
    fn from(p: rgb::RGBA8) -> Self {
        Color::rgba(p.r, p.g, p.b, p.a)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGBA8 {
    fn from(c: Color) -> Self {
        rgb::RGBA8::new(c.r, c.g, c.b, c.a)
    }
}
