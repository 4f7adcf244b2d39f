//! Pixel grid to view-ray mapping.

use zenith_config::{ImageConfig, ViewConfig};
use zenith_math::Direction3;

/// Linearly remap `x` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Values outside the input range extrapolate.
#[inline]
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// A flat view plane at `z = -1`, looking down −Z with +Y up.
///
/// Column 0 maps to `-x_limit`, row 0 (the top row) to `+y_limit`. The far
/// edges `x_limit` / `-y_limit` sit one pixel past the last column and row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub x_limit: f32,
    pub y_limit: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, x_limit: f32, y_limit: f32) -> Self {
        Self {
            width,
            height,
            x_limit,
            y_limit,
        }
    }

    pub fn from_config(image: &ImageConfig, view: &ViewConfig) -> Self {
        Self::new(image.width, image.height, view.x_limit, view.y_limit)
    }

    /// Number of pixels on the grid.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Unnormalized view direction through pixel `(x, y)`.
    pub fn ray_direction(&self, x: u32, y: u32) -> Direction3 {
        Direction3::new(
            map_range(
                x as f32,
                0.0,
                self.width as f32,
                -self.x_limit,
                self.x_limit,
            ),
            map_range(
                y as f32,
                0.0,
                self.height as f32,
                self.y_limit,
                -self.y_limit,
            ),
            -1.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&ImageConfig::default(), &ViewConfig::default())
    }
}
