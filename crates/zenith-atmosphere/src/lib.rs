//! Atmosphere scattering: Rayleigh + Mie single-scattering model.
//!
//! Provides [`AtmosphereParams`] with the [`AtmosphereParams::EARTH`] preset,
//! [`ray_sphere_intersect`] for the shell and ground tests, and
//! [`compute_sky_radiance`], which integrates in-scattered sunlight along a
//! view ray with a fixed [`SampleCounts`] grid (16 view steps × 8 sun steps
//! by default).
//!
//! ```rust
//! use zenith_atmosphere::{AtmosphereParams, compute_sky_radiance};
//! use zenith_math::{Direction3, Point3};
//!
//! let eye = Point3::new(0.0, 6_372e3, 0.0);
//! let color = compute_sky_radiance(
//!     eye,
//!     Direction3::new(0.0, 1.0, 0.0),
//!     Direction3::new(0.0, 1.0, -1.0),
//!     &AtmosphereParams::EARTH,
//! );
//! assert!(color.b() > color.r());
//! ```

mod error;
mod intersect;
mod params;
mod phase;
mod scatter;

pub use error::AtmosphereError;
pub use intersect::{SphereHit, ray_sphere_intersect};
pub use params::{AtmosphereParams, SampleCounts};
pub use phase::{mie_phase, rayleigh_phase};
pub use scatter::{
    MAX_MISS_DISTANCE, OpticalDepth, compute_sky_radiance, compute_sky_radiance_with,
    optical_depth_to_edge,
};
