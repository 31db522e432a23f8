//! Single-slit diffraction model.
//!
//! Wavelengths are in nanometres, slit widths and distances in millimetres.
//! None of these functions validate their input: a zero or negative wavelength or slit width
//! yields non-finite values rather than an error. See `ExperimentParameters` for the checked entry point.

use std::f64::consts::PI;

use super::pattern::IntensityCurve;

/// Brings a nanometre wavelength into the same unit as a millimetre slit width.
const NM_TO_MM: f64 = 1e-6;
/// Scale applied to the slit width in the first minimum formula.
const OFFSET_SCALE: f64 = 1000.0;

/// Phase parameter α = π·a·sin(θ) / λ.
pub fn phase(theta: f64, wavelength: f64, slit_width: f64) -> f64 {
    (PI * slit_width * theta.sin()) / (wavelength * NM_TO_MM)
}

/// Relative intensity (sin α / α)² at angle `theta`, normalised to 1 at the central maximum.
pub fn intensity_at(theta: f64, wavelength: f64, slit_width: f64) -> f64 {
    let alpha = phase(theta, wavelength, slit_width);
    // sinc² limit at the central peak
    if alpha == 0.0 {
        return 1.0;
    }
    let sinc = alpha.sin() / alpha;
    sinc * sinc
}

/// Samples the diffraction intensity across the angular window.
/// Only the wavelength and slit width shape the curve; the screen distance does not.
pub fn intensity_curve(wavelength: f64, slit_width: f64) -> IntensityCurve {
    IntensityCurve::from_function(|theta| intensity_at(theta, wavelength, slit_width))
}

/// Distance on the screen from the centre to the first minimum, y = λL/a.
/// The pattern is symmetric so the minimum sits at ± this value.
pub fn first_minimum_offset(wavelength: f64, slit_width: f64, distance: f64) -> f64 {
    (wavelength * distance) / (slit_width * OFFSET_SCALE)
}
