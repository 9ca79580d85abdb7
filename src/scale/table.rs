
//! Predefined scales: the thermodynamic temperature scales, all
//! anchored to kelvin, plus the astronomical magnitude and spectral
//! class scales.

use super::Scale;
use crate::measure::Measure;
use crate::units::Unit;
use crate::units::table::{KELVIN, ONE};

use once_cell::sync::Lazy;

// Temperature-difference units. These are plain units; the scales
// below give them a zero point.
pub static DEGREE_CELSIUS: Lazy<Unit> = Lazy::new(|| Unit::equivalent("°C", &KELVIN));
pub static DEGREE_FAHRENHEIT: Lazy<Unit> = Lazy::new(|| Unit::multiple(5.0 / 9.0, &KELVIN, Some("°F")));
pub static DEGREE_REAUMUR: Lazy<Unit> = Lazy::new(|| Unit::multiple(5.0 / 4.0, &KELVIN, Some("°Ré")));
pub static DEGREE_RANKINE: Lazy<Unit> = Lazy::new(|| Unit::multiple(5.0 / 9.0, &KELVIN, Some("°R")));

pub static KELVIN_SCALE: Lazy<Scale> = Lazy::new(|| Scale::ratio("K", &KELVIN));

fn temperature_scale(unit: &Unit, absolute_zero: f64) -> Scale {
  Scale::anchored_interval(unit.symbol(), unit, &KELVIN_SCALE, Measure::new(absolute_zero, unit))
    .expect("temperature offsets share the unit of their scale")
}

pub static CELSIUS_SCALE: Lazy<Scale> = Lazy::new(|| temperature_scale(&DEGREE_CELSIUS, -273.15));
pub static FAHRENHEIT_SCALE: Lazy<Scale> = Lazy::new(|| temperature_scale(&DEGREE_FAHRENHEIT, -459.67));
pub static REAUMUR_SCALE: Lazy<Scale> = Lazy::new(|| temperature_scale(&DEGREE_REAUMUR, -218.52));
pub static RANKINE_SCALE: Lazy<Scale> = Lazy::new(|| temperature_scale(&DEGREE_RANKINE, 0.0));

/// Apparent magnitude. Differences are meaningful, but the zero point
/// is a convention and there is no ratio scale behind it.
pub static MAGNITUDE_SCALE: Lazy<Scale> = Lazy::new(|| Scale::interval("mag", &ONE));

/// Morgan-Keenan spectral classes, hottest first.
pub static SPECTRAL_CLASS_SCALE: Lazy<Scale> =
  Lazy::new(|| Scale::ordinal("spectral class", ["O", "B", "A", "F", "G", "K", "M"]));
