//! Physical constants for black-body calculations.

/// Physical constants in SI units.
///
/// Values carry the precision used in classroom worked examples so that
/// results printed by the tools can be reproduced by hand.
pub struct SI {}

impl SI {
    /// Planck's constant
    /// Units: J⋅s
    pub const PLANCK_CONSTANT: f64 = 6.626e-34;

    /// Speed of light in vacuum
    /// Units: m/s
    pub const SPEED_OF_LIGHT: f64 = 3.0e8;

    /// Boltzmann constant
    /// Units: J/K
    pub const BOLTZMANN_CONSTANT: f64 = 1.381e-23;

    /// Stefan-Boltzmann constant
    /// Units: W⋅m⁻²⋅K⁻⁴
    pub const STEFAN_BOLTZMANN: f64 = 5.670e-8;

    /// Wien's displacement constant
    /// Units: m⋅K
    pub const WIEN_CONSTANT: f64 = 2.898e-3;
}

/// Effective temperature of the solar photosphere in Kelvin
pub const SUN_TEMPERATURE_K: f64 = 5778.0;

/// Nanometers per meter
pub const NM_PER_M: f64 = 1e9;
