
//! Predefined units. Each one is a lazily initialized static; statics
//! defined in terms of other statics force them on first use, so
//! there is no initialization order to get wrong.

use super::prefix::MetricPrefix;
use super::unit::Unit;
use crate::dimension::Dimension;

use once_cell::sync::Lazy;

use std::f64::consts::PI;

static MASS_UNITS: Lazy<(Unit, Unit)> =
  Lazy::new(|| Unit::prefixed_base(MetricPrefix::KILO, "g", Dimension::Mass));

pub static ONE: Lazy<Unit> = Lazy::new(Unit::one);

// SI base units
pub static SECOND: Lazy<Unit> = Lazy::new(|| Unit::base("s", Some(Dimension::Time)));
pub static METRE: Lazy<Unit> = Lazy::new(|| Unit::base("m", Some(Dimension::Length)));
pub static KILOGRAM: Lazy<Unit> = Lazy::new(|| MASS_UNITS.0.clone());
pub static GRAM: Lazy<Unit> = Lazy::new(|| MASS_UNITS.1.clone());
pub static AMPERE: Lazy<Unit> = Lazy::new(|| Unit::base("A", Some(Dimension::ElectricCurrent)));
pub static KELVIN: Lazy<Unit> = Lazy::new(|| Unit::base("K", Some(Dimension::Temperature)));
pub static MOLE: Lazy<Unit> = Lazy::new(|| Unit::base("mol", Some(Dimension::AmountOfSubstance)));
pub static CANDELA: Lazy<Unit> = Lazy::new(|| Unit::base("cd", Some(Dimension::LuminousIntensity)));

// Angles
pub static RADIAN: Lazy<Unit> = Lazy::new(|| Unit::base("rad", None));
pub static DEGREE: Lazy<Unit> = Lazy::new(|| Unit::multiple(PI / 180.0, &RADIAN, Some("°")));
pub static ARCMINUTE: Lazy<Unit> = Lazy::new(|| Unit::multiple(1.0 / 60.0, &DEGREE, Some("′")));
pub static ARCSECOND: Lazy<Unit> = Lazy::new(|| Unit::multiple(1.0 / 60.0, &ARCMINUTE, Some("″")));
pub static MILLIARCSECOND: Lazy<Unit> = Lazy::new(|| Unit::prefixed(MetricPrefix::MILLI, &ARCSECOND));
pub static HOUR_ANGLE: Lazy<Unit> = Lazy::new(|| Unit::multiple(15.0, &DEGREE, Some("ʰ")));
pub static MINUTE_OF_TIME: Lazy<Unit> = Lazy::new(|| Unit::multiple(1.0 / 60.0, &HOUR_ANGLE, Some("ᵐ")));
pub static SECOND_OF_TIME: Lazy<Unit> = Lazy::new(|| Unit::multiple(1.0 / 60.0, &MINUTE_OF_TIME, Some("ˢ")));

// Time
pub static MILLISECOND: Lazy<Unit> = Lazy::new(|| Unit::prefixed(MetricPrefix::MILLI, &SECOND));
pub static MINUTE: Lazy<Unit> = Lazy::new(|| Unit::multiple(60.0, &SECOND, Some("min")));
pub static HOUR: Lazy<Unit> = Lazy::new(|| Unit::multiple(60.0, &MINUTE, Some("h")));
pub static DAY: Lazy<Unit> = Lazy::new(|| Unit::multiple(24.0, &HOUR, Some("d")));
pub static JULIAN_YEAR: Lazy<Unit> = Lazy::new(|| Unit::multiple(365.25, &DAY, Some("a")));

// Length
pub static KILOMETRE: Lazy<Unit> = Lazy::new(|| Unit::prefixed(MetricPrefix::KILO, &METRE));
pub static CENTIMETRE: Lazy<Unit> = Lazy::new(|| Unit::prefixed(MetricPrefix::CENTI, &METRE));
pub static ASTRONOMICAL_UNIT: Lazy<Unit> =
  Lazy::new(|| Unit::multiple(149_597_870_700.0, &METRE, Some("au")));
pub static LIGHT_YEAR: Lazy<Unit> =
  Lazy::new(|| Unit::multiple(9_460_730_472_580_800.0, &METRE, Some("ly")));
pub static PARSEC: Lazy<Unit> =
  Lazy::new(|| Unit::multiple(648_000.0 / PI, &ASTRONOMICAL_UNIT, Some("pc")));

// Named derived SI units
pub static HERTZ: Lazy<Unit> = Lazy::new(|| Unit::equivalent("Hz", &(&*ONE / &*SECOND)));
pub static NEWTON: Lazy<Unit> = Lazy::new(|| {
  let unit = &(&*KILOGRAM * &*METRE) / &Unit::power(&SECOND, 2.0);
  Unit::equivalent("N", &unit)
});
pub static JOULE: Lazy<Unit> = Lazy::new(|| Unit::equivalent("J", &(&*NEWTON * &*METRE)));
pub static WATT: Lazy<Unit> = Lazy::new(|| Unit::equivalent("W", &(&*JOULE / &*SECOND)));
pub static PASCAL: Lazy<Unit> = Lazy::new(|| Unit::equivalent("Pa", &(&*NEWTON / &Unit::power(&METRE, 2.0))));
pub static COULOMB: Lazy<Unit> = Lazy::new(|| Unit::equivalent("C", &(&*AMPERE * &*SECOND)));
pub static VOLT: Lazy<Unit> = Lazy::new(|| Unit::equivalent("V", &(&*WATT / &*AMPERE)));

// Compound units
pub static DEGREE_ARCMIN_ARCSEC: Lazy<Unit> = Lazy::new(|| {
  Unit::compound(
    vec![DEGREE.clone(), ARCMINUTE.clone(), ARCSECOND.clone()],
    vec![MILLIARCSECOND.clone()],
    true,
  ).expect("degrees, arcminutes, arcseconds are strictly decreasing")
});
pub static HOUR_MINUTE_SECOND: Lazy<Unit> = Lazy::new(|| {
  Unit::compound(
    vec![HOUR_ANGLE.clone(), MINUTE_OF_TIME.clone(), SECOND_OF_TIME.clone()],
    vec![],
    false,
  ).expect("hours, minutes, seconds of time are strictly decreasing")
});
