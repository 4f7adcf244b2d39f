//! Frame rendering and image output for the Zenith sky renderer.
//!
//! [`SkyRenderer`] maps each pixel of a [`Viewport`] to a view ray, integrates
//! it with `zenith-atmosphere`, tone-maps the result and collects rows in
//! parallel into a [`SkyImage`]. [`save_image`] writes plain PPM, PNG or JPEG
//! depending on the output path.

mod error;
mod output;
mod renderer;
mod sky_image;
mod viewport;

pub use error::RenderError;
pub use output::{OutputFormat, STDOUT_PATH, ppm_string, save_image, write_ppm};
pub use renderer::SkyRenderer;
pub use sky_image::SkyImage;
pub use viewport::{Viewport, map_range};
