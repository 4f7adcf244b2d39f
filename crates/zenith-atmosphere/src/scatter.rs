//! Single-scattering sky radiance by nested ray marching.

use std::ops::{Add, AddAssign};

use zenith_math::{Direction3, Point3, Rgb};

use crate::intersect::{SphereHit, ray_sphere_intersect};
use crate::params::{AtmosphereParams, SampleCounts};
use crate::phase::{mie_phase, rayleigh_phase};

/// Far bound, in meters, of a view ray that never meets the ground.
///
/// Grazing paths through the shell are cut at this distance before the
/// primary step width is derived.
pub const MAX_MISS_DISTANCE: f32 = 1e5;

/// Density-weighted path length for the two scattering layers, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OpticalDepth {
    pub rayleigh: f32,
    pub mie: f32,
}

impl OpticalDepth {
    pub const ZERO: OpticalDepth = OpticalDepth {
        rayleigh: 0.0,
        mie: 0.0,
    };

    /// Optical depth of one step of length `step` sampled at `position`,
    /// using exponential density falloff with altitude.
    pub fn of_step(position: Point3, step: f32, params: &AtmosphereParams) -> Self {
        let height = position.length() - params.planet_radius;
        Self {
            rayleigh: (-height / params.rayleigh_scale_height).exp() * step,
            mie: (-height / params.mie_scale_height).exp() * step,
        }
    }

    /// Per-channel extinction `k_mie · mie + k_rlh · rayleigh`.
    pub fn extinction(&self, params: &AtmosphereParams) -> Rgb {
        params.rayleigh() * self.rayleigh + Rgb::splat(params.mie_coefficient * self.mie)
    }

    /// Per-channel transmittance `e^(−extinction)`.
    pub fn transmittance(&self, params: &AtmosphereParams) -> Rgb {
        self.extinction(params).map(|tau| (-tau).exp())
    }
}

impl Add for OpticalDepth {
    type Output = OpticalDepth;

    fn add(self, rhs: OpticalDepth) -> OpticalDepth {
        OpticalDepth {
            rayleigh: self.rayleigh + rhs.rayleigh,
            mie: self.mie + rhs.mie,
        }
    }
}

impl AddAssign for OpticalDepth {
    fn add_assign(&mut self, rhs: OpticalDepth) {
        self.rayleigh += rhs.rayleigh;
        self.mie += rhs.mie;
    }
}

/// Optical depth from `origin` to the top of the atmosphere along a
/// normalized `direction`, in `steps` equal midpoint steps.
///
/// Rays that miss the shell, or whose exit lies behind `origin`, have zero depth.
/// The planet is not treated as an occluder: a path through the ground picks up
/// the (huge) density below the surface, which extinguishes it.
pub fn optical_depth_to_edge(
    origin: Point3,
    direction: Direction3,
    params: &AtmosphereParams,
    steps: u32,
) -> OpticalDepth {
    let length = ray_sphere_intersect(origin, direction, params.atmosphere_radius).far_or_zero();
    let step = length / steps as f32;

    let mut depth = OpticalDepth::ZERO;
    let mut time = 0.0_f32;
    for _ in 0..steps {
        let sample = origin.along(direction, time + step * 0.5);
        depth += OpticalDepth::of_step(sample, step, params);
        time += step;
    }
    depth
}

/// Sky radiance arriving at `origin` from `direction`, with the reference
/// 16 × 8 sample grid.
///
/// Neither direction needs to be normalized. The planet is centred at the
/// coordinate origin. A ray that never meets the atmosphere returns zero.
pub fn compute_sky_radiance(
    origin: Point3,
    direction: Direction3,
    sun_direction: Direction3,
    params: &AtmosphereParams,
) -> Rgb {
    compute_sky_radiance_with(
        origin,
        direction,
        sun_direction,
        params,
        SampleCounts::REFERENCE,
    )
}

/// [`compute_sky_radiance`] with an explicit sample grid.
pub fn compute_sky_radiance_with(
    origin: Point3,
    direction: Direction3,
    sun_direction: Direction3,
    params: &AtmosphereParams,
    samples: SampleCounts,
) -> Rgb {
    let direction = direction.normalize();
    let sun_direction = sun_direction.normalize();

    let Some((near, atmosphere_far)) =
        ray_sphere_intersect(origin, direction, params.atmosphere_radius).interval()
    else {
        return Rgb::ZERO;
    };

    // Truncate at the ground. The planet's near crossing is used even when it
    // lies behind the origin; together with the signed atmosphere near bound
    // this still yields the shell thickness for upward rays. Rays that miss the
    // ground are capped at MAX_MISS_DISTANCE.
    let far = match ray_sphere_intersect(origin, direction, params.planet_radius) {
        SphereHit::Hit { near: ground, .. } => atmosphere_far.min(ground),
        SphereHit::Miss => atmosphere_far.min(MAX_MISS_DISTANCE),
    };

    // The near bound only sets the step width; marching starts at the origin.
    let step = (far - near) / samples.primary as f32;

    let mu = direction.dot(sun_direction);
    let phase_rayleigh = rayleigh_phase(mu);
    let phase_mie = mie_phase(mu, params.mie_direction);

    let mut total_rayleigh = Rgb::ZERO;
    let mut total_mie = Rgb::ZERO;
    let mut view_depth = OpticalDepth::ZERO;
    let mut time = 0.0_f32;

    for _ in 0..samples.primary {
        let sample = origin.along(direction, time + step * 0.5);
        time += step;

        let step_depth = OpticalDepth::of_step(sample, step, params);
        view_depth += step_depth;

        let sun_depth = optical_depth_to_edge(sample, sun_direction, params, samples.secondary);
        let attenuation = (view_depth + sun_depth).transmittance(params);

        // Extinguished samples add nothing; skipping them keeps 0 × ∞ out of
        // the totals when the density below ground overflows.
        if attenuation == Rgb::ZERO {
            continue;
        }

        total_rayleigh += attenuation * step_depth.rayleigh;
        total_mie += attenuation * step_depth.mie;
    }

    params.sun_intensity
        * (phase_rayleigh * (params.rayleigh() * total_rayleigh)
            + phase_mie * params.mie_coefficient * total_mie)
}
