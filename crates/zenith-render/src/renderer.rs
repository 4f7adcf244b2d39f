//! Parallel sky renderer.
//!
//! Every pixel is an independent call into the scattering integrator, so rows
//! are farmed out to rayon and collected back in order. Nothing is shared
//! mutably between workers.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};
use zenith_atmosphere::{AtmosphereParams, SampleCounts, compute_sky_radiance_with};
use zenith_config::Config;
use zenith_math::{Direction3, Point3, Rgb, to_rgb8};

use crate::error::RenderError;
use crate::sky_image::SkyImage;
use crate::viewport::Viewport;

/// Everything needed to shade one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyRenderer {
    viewport: Viewport,
    observer: Point3,
    sun_direction: Direction3,
    params: AtmosphereParams,
    samples: SampleCounts,
}

impl SkyRenderer {
    /// Checks the grid, the planet and the sample counts up front so that
    /// rendering itself cannot fail.
    pub fn new(
        viewport: Viewport,
        observer: Point3,
        sun_direction: Direction3,
        params: AtmosphereParams,
        samples: SampleCounts,
    ) -> Result<Self, RenderError> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: viewport.width,
                height: viewport.height,
            });
        }
        params.validate()?;
        samples.validate()?;

        Ok(Self {
            viewport,
            observer,
            sun_direction,
            params,
            samples,
        })
    }

    /// Observer stands `view.altitude_m` above the surface on the +Y axis and
    /// the sun lies along `(0, view.sun_height, -1)`.
    pub fn from_config(config: &Config) -> Result<Self, RenderError> {
        let observer = Point3::new(
            0.0,
            config.atmosphere.planet_radius + config.view.altitude_m,
            0.0,
        );
        let sun_direction = Direction3::new(0.0, config.view.sun_height, -1.0);

        Self::new(
            Viewport::from_config(&config.image, &config.view),
            observer,
            sun_direction,
            config.atmosphere,
            config.render.samples,
        )
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn observer(&self) -> Point3 {
        self.observer
    }

    pub fn sun_direction(&self) -> Direction3 {
        self.sun_direction
    }

    /// Linear radiance through pixel `(x, y)`.
    pub fn radiance(&self, x: u32, y: u32) -> Rgb {
        compute_sky_radiance_with(
            self.observer,
            self.viewport.ray_direction(x, y),
            self.sun_direction,
            &self.params,
            self.samples,
        )
    }

    /// Tone-mapped 8-bit color of pixel `(x, y)`.
    pub fn shade(&self, x: u32, y: u32) -> [u8; 3] {
        to_rgb8(self.radiance(x, y))
    }

    fn render_row(&self, y: u32) -> Vec<[u8; 3]> {
        (0..self.viewport.width).map(|x| self.shade(x, y)).collect()
    }

    /// Render on the current rayon pool.
    pub fn render(&self) -> SkyImage {
        let Viewport { width, height, .. } = self.viewport;
        debug!(
            "Rendering {}x{} with {}x{} samples ({} density lookups per pixel) on {} threads",
            width,
            height,
            self.samples.primary,
            self.samples.secondary,
            self.samples.evaluations(),
            rayon::current_num_threads()
        );

        let start = Instant::now();
        let rows: Vec<Vec<[u8; 3]>> = (0..height)
            .into_par_iter()
            .map(|y| self.render_row(y))
            .collect();
        let elapsed = start.elapsed();

        let image = SkyImage::from_rows(width, height, rows);
        info!(
            "Rendered {} pixels in {:.2?} ({:.1} Mpx/s)",
            self.viewport.pixel_count(),
            elapsed,
            self.viewport.pixel_count() as f64 / elapsed.as_secs_f64().max(1e-9) / 1e6
        );
        image
    }

    /// Render on a dedicated pool of `threads` workers. Zero uses the global
    /// pool.
    pub fn render_with_threads(&self, threads: usize) -> Result<SkyImage, RenderError> {
        if threads == 0 {
            return Ok(self.render());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("zenith-worker-{i}"))
            .build()?;
        debug!("Built dedicated pool with {} workers", threads);
        Ok(pool.install(|| self.render()))
    }

    /// Single-threaded reference render.
    pub fn render_sequential(&self) -> SkyImage {
        let Viewport { width, height, .. } = self.viewport;
        let rows = (0..height).map(|y| self.render_row(y)).collect();
        SkyImage::from_rows(width, height, rows)
    }
}
