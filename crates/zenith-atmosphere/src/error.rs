//! Atmosphere validation errors.

/// Reasons a parameter set or sample grid is rejected by validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtmosphereError {
    /// A length that must be strictly positive and finite is not.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// A coefficient or intensity that must be non-negative is not.
    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f32 },

    /// The atmosphere does not enclose the planet.
    #[error("atmosphere radius {atmosphere} must exceed planet radius {planet}")]
    ShellInverted { planet: f32, atmosphere: f32 },

    /// Henyey-Greenstein asymmetry outside (-1, 1).
    #[error("mie direction g must lie in (-1, 1), got {0}")]
    AsymmetryOutOfRange(f32),

    /// One of the integration grids is empty.
    #[error("sample counts must be non-zero, got {primary} x {secondary}")]
    ZeroSamples { primary: u32, secondary: u32 },
}
