//! Checked snapshot of the experiment inputs.

use std::fmt;

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq)]
pub enum ParameterError {
    #[error("wavelength must be finite and positive, got {value} nm")]
    InvalidWavelength { value: f64 },
    #[error("slit width must be finite and positive, got {value} mm")]
    InvalidSlitWidth { value: f64 },
    #[error("screen distance must be finite and positive, got {value} mm")]
    InvalidScreenDistance { value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentParameters {
    /// Nanometres.
    pub wavelength: f64,
    /// Millimetres.
    pub slit_width: f64,
    /// Millimetres.
    pub screen_distance: f64,
}

impl ExperimentParameters {
    pub fn new(
        wavelength: f64,
        slit_width: f64,
        screen_distance: f64,
    ) -> Result<Self, ParameterError> {
        if !is_positive(wavelength) {
            return Err(ParameterError::InvalidWavelength { value: wavelength });
        }
        if !is_positive(slit_width) {
            return Err(ParameterError::InvalidSlitWidth { value: slit_width });
        }
        if !is_positive(screen_distance) {
            return Err(ParameterError::InvalidScreenDistance {
                value: screen_distance,
            });
        }
        Ok(ExperimentParameters {
            wavelength,
            slit_width,
            screen_distance,
        })
    }

    /// True when the curve has to be resampled, i.e. wavelength or slit width differ.
    pub fn changes_pattern(&self, other: &ExperimentParameters) -> bool {
        self.wavelength != other.wavelength || self.slit_width != other.slit_width
    }
}

// slider steps leave float noise behind, so the readout rounds
impl fmt::Display for ExperimentParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "λ = {:.0} nm, a = {:.2} mm, L = {:.1} mm",
            self.wavelength, self.slit_width, self.screen_distance
        )
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
