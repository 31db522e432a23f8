//! Defaults and ranges for every adjustable experiment parameter.
//! The UI builds its sliders from these, and `Simulation::reset()` restores the defaults.

use static_assertions::const_assert;

pub struct Variable {
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

/// Nanometres. Bounded by the visible spectrum.
pub const WAVELENGTH: Variable = Variable {
    default: 500.0,
    min: 380.0,
    max: 750.0,
};

/// Millimetres.
pub const SLIT_WIDTH: Variable = Variable {
    default: 0.1,
    min: 0.05,
    max: 0.5,
};
pub const SLIT_WIDTH_STEP: f64 = 0.05;

/// Millimetres. Unbounded above, any positive distance is accepted.
pub const SCREEN_DISTANCE: Variable = Variable {
    default: 1000.0,
    min: 1.0,
    max: f64::INFINITY,
};

// slit widths and wavelengths reaching the model must stay non-zero
const_assert!(WAVELENGTH.min > 0.0);
const_assert!(SLIT_WIDTH.min > 0.0);
const_assert!(SCREEN_DISTANCE.min > 0.0);
