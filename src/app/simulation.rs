//! Holds the current experiment parameters and the outputs derived from them

pub mod diffraction;
pub mod parameters;
pub mod pattern;
pub mod spectrum;
pub mod variables;

use log::debug;

use parameters::{ExperimentParameters, ParameterError};
use pattern::IntensityCurve;
use spectrum::SpectralBand;
use variables::{SCREEN_DISTANCE, SLIT_WIDTH, WAVELENGTH};

pub struct Simulation {
    // edited directly by the UI, applied on the next update()
    pub wavelength: f64,
    pub slit_width: f64,
    pub screen_distance: f64,

    applied: ExperimentParameters,
    pattern: IntensityCurve,
    first_minimum: f64,
}

impl Simulation {
    pub fn new() -> Self {
        let applied = ExperimentParameters {
            wavelength: WAVELENGTH.default,
            slit_width: SLIT_WIDTH.default,
            screen_distance: SCREEN_DISTANCE.default,
        };
        Simulation {
            wavelength: applied.wavelength,
            slit_width: applied.slit_width,
            screen_distance: applied.screen_distance,
            pattern: diffraction::intensity_curve(applied.wavelength, applied.slit_width),
            first_minimum: diffraction::first_minimum_offset(
                applied.wavelength,
                applied.slit_width,
                applied.screen_distance,
            ),
            applied,
        }
    }

    /// Applies any edits made since the last call.
    /// Returns whether anything was recomputed. Invalid edits are reverted to the last applied values.
    pub fn update(&mut self) -> Result<bool, ParameterError> {
        let unchanged = self.wavelength == self.applied.wavelength
            && self.slit_width == self.applied.slit_width
            && self.screen_distance == self.applied.screen_distance;
        if unchanged {
            return Ok(false);
        }

        let next = match ExperimentParameters::new(
            self.wavelength,
            self.slit_width,
            self.screen_distance,
        ) {
            Ok(next) => next,
            Err(err) => {
                self.revert();
                return Err(err);
            }
        };

        if next.changes_pattern(&self.applied) {
            debug!(
                "Resampling pattern for {} nm, {} mm",
                next.wavelength, next.slit_width
            );
            self.pattern = diffraction::intensity_curve(next.wavelength, next.slit_width);
        }
        self.first_minimum =
            diffraction::first_minimum_offset(next.wavelength, next.slit_width, next.screen_distance);
        debug!("First minimum at ±{:.2} mm", self.first_minimum);

        self.applied = next;
        Ok(true)
    }

    pub fn reset(&mut self) {
        *self = Simulation::new();
    }

    fn revert(&mut self) {
        self.wavelength = self.applied.wavelength;
        self.slit_width = self.applied.slit_width;
        self.screen_distance = self.applied.screen_distance;
    }

    pub fn parameters(&self) -> ExperimentParameters {
        self.applied
    }

    pub fn pattern(&self) -> &IntensityCurve {
        &self.pattern
    }

    /// Millimetres from the centre of the screen.
    pub fn first_minimum(&self) -> f64 {
        self.first_minimum
    }

    pub fn band(&self) -> Option<SpectralBand> {
        SpectralBand::containing(self.applied.wavelength)
    }

    pub fn colour(&self) -> (u8, u8, u8) {
        spectrum::wavelength_to_colour(self.applied.wavelength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_defaults() {
        let sim = Simulation::new();
        assert_eq!(sim.parameters().wavelength, 500.0);
        assert_eq!(sim.parameters().slit_width, 0.1);
        assert_eq!(sim.parameters().screen_distance, 1000.0);
        assert!((sim.first_minimum() - 5000.0).abs() < 1e-9);
        assert_eq!(sim.pattern()[sim.pattern().centre()], 1.0);
        assert_eq!(sim.band(), Some(SpectralBand::Green));
    }

    #[test]
    fn update_without_edits_is_a_no_op() {
        let mut sim = Simulation::new();
        assert_eq!(sim.update(), Ok(false));
    }

    #[test]
    fn distance_edit_keeps_pattern() {
        let mut sim = Simulation::new();
        let before: Vec<f64> = sim.pattern().values().to_vec();
        sim.screen_distance = 2000.0;
        assert_eq!(sim.update(), Ok(true));
        assert!((sim.first_minimum() - 10000.0).abs() < 1e-9);
        assert_eq!(sim.pattern().values(), &before[..]);
    }

    #[test]
    fn slit_edit_resamples_pattern() {
        let mut sim = Simulation::new();
        let before = sim.pattern()[101];
        sim.slit_width = 0.5;
        assert_eq!(sim.update(), Ok(true));
        assert!(sim.pattern()[101] < before);
        assert!((sim.first_minimum() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn wavelength_edit_updates_colour() {
        let mut sim = Simulation::new();
        sim.wavelength = 620.0;
        sim.update().expect("valid wavelength");
        assert_eq!(sim.colour(), (255, 127, 0));
        assert_eq!(sim.band(), Some(SpectralBand::Orange));
    }

    #[test]
    fn latest_edit_wins() {
        let mut sim = Simulation::new();
        sim.wavelength = 400.0;
        sim.wavelength = 700.0;
        sim.update().unwrap();
        let expected = diffraction::intensity_curve(700.0, 0.1);
        assert_eq!(sim.pattern().values(), expected.values());
    }

    #[test]
    fn distance_has_no_upper_limit() {
        assert!(SCREEN_DISTANCE.max.is_infinite());
        let mut sim = Simulation::new();
        sim.screen_distance = 1.0e9;
        assert_eq!(sim.update(), Ok(true));
        assert!((sim.first_minimum() - 5.0e9).abs() < 1e-3);
    }

    #[test]
    fn invalid_edit_is_reverted() {
        let mut sim = Simulation::new();
        sim.wavelength = 600.0;
        sim.update().unwrap();

        sim.slit_width = 0.0;
        assert_eq!(
            sim.update(),
            Err(ParameterError::InvalidSlitWidth { value: 0.0 })
        );
        assert_eq!(sim.slit_width, 0.1);
        assert_eq!(sim.wavelength, 600.0);
        assert!(sim.first_minimum().is_finite());
        assert_eq!(sim.update(), Ok(false));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut sim = Simulation::new();
        sim.wavelength = 700.0;
        sim.screen_distance = 10.0;
        sim.update().unwrap();
        sim.reset();
        assert_eq!(sim.parameters().wavelength, WAVELENGTH.default);
        assert_eq!(sim.screen_distance, SCREEN_DISTANCE.default);
        assert!((sim.first_minimum() - 5000.0).abs() < 1e-9);
    }
}
