//! Approximate display colours for visible wavelengths.
//! To add a band, add it to the SpectralBand enum and give it properties in SpectralBand::retrieve_properties().
//! Bands must stay contiguous and ordered, since lookup walks them in declaration order.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Shown for any wavelength outside the visible spectrum.
pub const FALLBACK_COLOUR: (u8, u8, u8) = (255, 255, 255);

// Band picker in the UI is populated from these
#[derive(Debug, Clone, Copy, PartialEq, EnumIter)]
pub enum SpectralBand {
    Violet,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl SpectralBand {
    pub fn properties(&self) -> BandProperties {
        self.retrieve_properties()
    }

    fn retrieve_properties(&self) -> BandProperties {
        match self {
            SpectralBand::Violet => BandProperties {
                name: "Violet",
                lower: 380.0,
                upper: 440.0,
                colour: (138, 43, 226),
            },
            SpectralBand::Blue => BandProperties {
                name: "Blue",
                lower: 440.0,
                upper: 490.0,
                colour: (0, 0, 255),
            },
            SpectralBand::Green => BandProperties {
                name: "Green",
                lower: 490.0,
                upper: 510.0,
                colour: (0, 255, 0),
            },
            SpectralBand::Yellow => BandProperties {
                name: "Yellow",
                lower: 510.0,
                upper: 580.0,
                colour: (255, 255, 0),
            },
            SpectralBand::Orange => BandProperties {
                name: "Orange",
                lower: 580.0,
                upper: 645.0,
                colour: (255, 127, 0),
            },
            SpectralBand::Red => BandProperties {
                name: "Red",
                lower: 645.0,
                upper: 750.0,
                colour: (255, 0, 0),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.properties().name
    }

    pub fn colour(&self) -> (u8, u8, u8) {
        self.properties().colour
    }

    /// Lower and upper bound in nanometres.
    pub fn range(&self) -> (f64, f64) {
        let props = self.properties();
        (props.lower, props.upper)
    }

    pub fn centre(&self) -> f64 {
        let (lower, upper) = self.range();
        (lower + upper) / 2.0
    }

    /// Half-open membership test, [lower, upper).
    pub fn contains(&self, wavelength: f64) -> bool {
        let (lower, upper) = self.range();
        wavelength >= lower && wavelength < upper
    }

    /// The band a wavelength falls in, if it is visible at all.
    pub fn containing(wavelength: f64) -> Option<SpectralBand> {
        // red is closed at the top of the visible spectrum
        if wavelength == SpectralBand::Red.range().1 {
            return Some(SpectralBand::Red);
        }
        SpectralBand::iter().find(|band| band.contains(wavelength))
    }
}

impl fmt::Display for SpectralBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BandProperties {
    pub name: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub colour: (u8, u8, u8), // RGB
}

/// RGB colour for a wavelength in nanometres, white when outside [380, 750].
pub fn wavelength_to_colour(wavelength: f64) -> (u8, u8, u8) {
    SpectralBand::containing(wavelength)
        .map(|band| band.colour())
        .unwrap_or(FALLBACK_COLOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::simulation::variables::WAVELENGTH;

    #[test]
    fn orange_band() {
        assert_eq!(wavelength_to_colour(620.0), (255, 127, 0));
        assert_eq!(SpectralBand::containing(620.0), Some(SpectralBand::Orange));
    }

    #[test]
    fn out_of_range_falls_back_to_white() {
        assert_eq!(wavelength_to_colour(300.0), FALLBACK_COLOUR);
        assert_eq!(wavelength_to_colour(379.9), FALLBACK_COLOUR);
        assert_eq!(wavelength_to_colour(750.1), FALLBACK_COLOUR);
        assert_eq!(wavelength_to_colour(f64::NAN), FALLBACK_COLOUR);
        assert_eq!(SpectralBand::containing(800.0), None);
    }

    #[test]
    fn band_edges_are_half_open() {
        assert_eq!(SpectralBand::containing(380.0), Some(SpectralBand::Violet));
        assert_eq!(SpectralBand::containing(440.0), Some(SpectralBand::Blue));
        assert_eq!(SpectralBand::containing(489.999), Some(SpectralBand::Blue));
        assert_eq!(SpectralBand::containing(490.0), Some(SpectralBand::Green));
        assert_eq!(SpectralBand::containing(510.0), Some(SpectralBand::Yellow));
        assert_eq!(SpectralBand::containing(580.0), Some(SpectralBand::Orange));
        assert_eq!(SpectralBand::containing(645.0), Some(SpectralBand::Red));
    }

    #[test]
    fn red_includes_upper_limit() {
        assert_eq!(SpectralBand::Red.range().1, 750.0);
        assert_eq!(wavelength_to_colour(750.0), (255, 0, 0));
        assert_eq!(SpectralBand::containing(750.0), Some(SpectralBand::Red));
    }

    #[test]
    fn display_uses_band_name() {
        assert_eq!(SpectralBand::Violet.to_string(), "Violet");
        assert_eq!(format!("{}", SpectralBand::Orange), "Orange");
    }

    #[test]
    fn bands_tile_visible_spectrum() {
        let bands: Vec<SpectralBand> = SpectralBand::iter().collect();
        assert_eq!(bands.len(), 6);
        assert_eq!(bands[0].range().0, WAVELENGTH.min);
        assert_eq!(bands[bands.len() - 1].range().1, WAVELENGTH.max);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].range().1, pair[1].range().0);
        }
    }

    #[test]
    fn centre_lies_in_own_band() {
        for band in SpectralBand::iter() {
            assert_eq!(SpectralBand::containing(band.centre()), Some(band));
        }
    }
}
