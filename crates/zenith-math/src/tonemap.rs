//! Exposure curve from unbounded radiance to display range.

use crate::Rgb;

/// Largest `f32` below 1.0.
pub const MAX_EXPOSURE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Componentwise `1 − e^(−c)`.
///
/// Maps non-negative radiance into `[0, 1)`: zero stays zero, the curve is
/// monotone, and it saturates toward 1 as radiance grows. Past c ≈ 17 the
/// `f32` result would round to 1.0, so it is held at [`MAX_EXPOSURE`].
pub fn exposure_tone_map(radiance: Rgb) -> Rgb {
    // exp_m1 keeps tiny radiance from rounding to zero.
    radiance.map(|c| (-(-c).exp_m1()).min(MAX_EXPOSURE))
}

/// Tone-map and quantize to 8 bits per channel, rounding to nearest.
pub fn to_rgb8(radiance: Rgb) -> [u8; 3] {
    let exposed = exposure_tone_map(radiance);
    let quantize = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    [
        quantize(exposed.r()),
        quantize(exposed.g()),
        quantize(exposed.b()),
    ]
}
