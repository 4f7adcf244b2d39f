//! Angular phase functions, evaluated at `mu = cos(view, sun)`.

use std::f32::consts::PI;

/// Rayleigh phase: `3 / (16π) · (1 + mu²)`.
pub fn rayleigh_phase(mu: f32) -> f32 {
    3.0 / (16.0 * PI) * (1.0 + mu * mu)
}

/// Henyey-Greenstein phase in the Cornette-Shanks form used for Mie scattering.
///
/// `g` biases scattering forward (`g > 0`) or backward (`g < 0`).
pub fn mie_phase(mu: f32, g: f32) -> f32 {
    let mumu = mu * mu;
    let gg = g * g;
    3.0 / (8.0 * PI) * ((1.0 - gg) * (mumu + 1.0))
        / ((1.0 + gg - 2.0 * mu * g).powf(1.5) * (2.0 + gg))
}
