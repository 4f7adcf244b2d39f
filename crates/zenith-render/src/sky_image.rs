//! Owned 8-bit RGB frame produced by the renderer.

use image::RgbImage;

/// A row-major RGB8 image, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl SkyImage {
    /// Wrap a row-major pixel buffer. Returns `None` if the length does not
    /// match `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Concatenate rendered rows, top first. Each row holds `width` pixels.
    pub(crate) fn from_rows(width: u32, height: u32, rows: Vec<Vec<[u8; 3]>>) -> Self {
        debug_assert_eq!(rows.len(), height as usize);
        debug_assert!(rows.iter().all(|row| row.len() == width as usize));
        Self {
            width,
            height,
            pixels: rows.into_iter().flatten().collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// One row, left to right.
    pub fn row(&self, y: u32) -> &[[u8; 3]] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[[u8; 3]]> {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Convert into an `image` buffer for encoding.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.pixel(x, y)))
    }
}
