//! Atmosphere parameters, the Earth preset, and integration sample counts.

use serde::{Deserialize, Serialize};
use zenith_math::Rgb;

use crate::error::AtmosphereError;

/// Physical parameters defining a planet's atmosphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereParams {
    /// Sun intensity multiplier.
    pub sun_intensity: f32,
    /// Inner radius: the planet's surface in meters.
    pub planet_radius: f32,
    /// Outer radius: top of the atmosphere in meters.
    pub atmosphere_radius: f32,
    /// Rayleigh scattering coefficients at sea level (per-wavelength, RGB).
    pub rayleigh_coefficients: [f32; 3],
    /// Mie scattering coefficient at sea level (scalar).
    pub mie_coefficient: f32,
    /// Rayleigh scale height in meters.
    pub rayleigh_scale_height: f32,
    /// Mie scale height in meters.
    pub mie_scale_height: f32,
    /// Mie preferred scattering direction (Henyey-Greenstein g parameter).
    pub mie_direction: f32,
}

impl AtmosphereParams {
    /// Standard Earth values.
    pub const EARTH: AtmosphereParams = AtmosphereParams {
        sun_intensity: 22.0,
        planet_radius: 6371e3,
        atmosphere_radius: 6471e3,
        rayleigh_coefficients: [5.5e-6, 13.0e-6, 22.4e-6],
        mie_coefficient: 21e-6,
        rayleigh_scale_height: 8e3,
        mie_scale_height: 1.2e3,
        mie_direction: 0.758,
    };

    /// Rayleigh coefficients as a color triple.
    pub fn rayleigh(&self) -> Rgb {
        Rgb::from(self.rayleigh_coefficients)
    }

    /// Thickness of the atmosphere shell in meters.
    pub fn shell_thickness(&self) -> f32 {
        self.atmosphere_radius - self.planet_radius
    }

    /// Check that the parameters describe a physically meaningful atmosphere.
    ///
    /// The integrator itself never calls this: invalid parameters there just
    /// produce meaningless or non-finite radiance.
    pub fn validate(&self) -> Result<(), AtmosphereError> {
        let lengths = [
            ("planet_radius", self.planet_radius),
            ("atmosphere_radius", self.atmosphere_radius),
            ("rayleigh_scale_height", self.rayleigh_scale_height),
            ("mie_scale_height", self.mie_scale_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(AtmosphereError::NonPositive { name, value });
            }
        }

        if self.shell_thickness() <= 0.0 {
            return Err(AtmosphereError::ShellInverted {
                planet: self.planet_radius,
                atmosphere: self.atmosphere_radius,
            });
        }

        let coefficients = [
            ("sun_intensity", self.sun_intensity),
            ("mie_coefficient", self.mie_coefficient),
            ("rayleigh_coefficients[0]", self.rayleigh_coefficients[0]),
            ("rayleigh_coefficients[1]", self.rayleigh_coefficients[1]),
            ("rayleigh_coefficients[2]", self.rayleigh_coefficients[2]),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(AtmosphereError::Negative { name, value });
            }
        }

        let g = self.mie_direction;
        if !g.is_finite() || g.abs() >= 1.0 {
            return Err(AtmosphereError::AsymmetryOutOfRange(g));
        }

        Ok(())
    }
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Number of integration steps along the view ray and along each sun ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleCounts {
    /// Steps along the primary (view) ray.
    pub primary: u32,
    /// Steps along each secondary (sun) ray.
    pub secondary: u32,
}

impl SampleCounts {
    /// The 16 × 8 grid the reference images were produced with.
    pub const REFERENCE: SampleCounts = SampleCounts {
        primary: 16,
        secondary: 8,
    };

    /// Density evaluations per radiance query.
    pub fn evaluations(&self) -> u32 {
        self.primary * self.secondary
    }

    pub fn validate(&self) -> Result<(), AtmosphereError> {
        if self.primary == 0 || self.secondary == 0 {
            return Err(AtmosphereError::ZeroSamples {
                primary: self.primary,
                secondary: self.secondary,
            });
        }
        Ok(())
    }
}

impl Default for SampleCounts {
    fn default() -> Self {
        Self::REFERENCE
    }
}
