
use super::error::QuantityError;
use crate::config::Tolerances;
use crate::measure::Measure;
use crate::units::Unit;
use crate::units::table::{DEGREE, RADIAN};

use std::f64::consts::TAU;

/// A [`Measure`] whose unit is an angle, i.e. some multiple of the
/// radian.
#[derive(Clone, Debug, PartialEq)]
pub struct Angle {
  measure: Measure,
}

/// An angle between -90° and 90° inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct Latitude {
  angle: Angle,
}

/// An angle normalized into (-180°, 180°].
#[derive(Clone, Debug, PartialEq)]
pub struct Longitude {
  angle: Angle,
}

impl Angle {
  pub fn try_new(measure: Measure) -> Result<Angle, QuantityError> {
    measure.convert_to_unit(&RADIAN)?;
    Ok(Angle { measure })
  }

  pub fn degrees(value: f64) -> Angle {
    Angle { measure: Measure::new(value, &DEGREE) }
  }

  pub fn radians(value: f64) -> Angle {
    Angle { measure: Measure::new(value, &RADIAN) }
  }

  pub fn measure(&self) -> &Measure {
    &self.measure
  }

  pub fn into_measure(self) -> Measure {
    self.measure
  }

  pub fn unit(&self) -> &Unit {
    self.measure.unit()
  }

  pub fn to_radians(&self) -> f64 {
    self.unit().to_base(self.measure.scalar_value())
  }

  pub fn to_degrees(&self) -> f64 {
    self.measure.scalar_value() * self.unit().conversion_factor() / DEGREE.conversion_factor()
  }

  // A full turn in this angle's unit. Turns which are whole numbers up
  // to rounding (360°, 24ʰ) are snapped to them.
  fn full_turn(&self) -> f64 {
    let turn = TAU / self.unit().conversion_factor();
    if Tolerances::DEFAULT.values_eq(turn, turn.round()) {
      turn.round()
    } else {
      turn
    }
  }

  fn with_value(&self, value: f64) -> Angle {
    let measure = Measure::from_parts(value, self.measure.error(), self.unit().clone(), None);
    Angle { measure }
  }

  /// The same angle wrapped into [0°, 360°), in this angle's unit.
  pub fn normalized(&self) -> Angle {
    let turn = self.full_turn();
    self.with_value(self.measure.scalar_value().rem_euclid(turn))
  }

  /// The same angle wrapped into (-180°, 180°], in this angle's unit.
  pub fn normalized_symmetric(&self) -> Angle {
    let turn = self.full_turn();
    let value = self.measure.scalar_value().rem_euclid(turn);
    if value > turn / 2.0 {
      self.with_value(value - turn)
    } else {
      self.with_value(value)
    }
  }
}

impl Latitude {
  pub fn try_new(angle: Angle) -> Result<Latitude, QuantityError> {
    let degrees = angle.to_degrees();
    if (-90.0..=90.0).contains(&degrees) {
      Ok(Latitude { angle })
    } else {
      Err(QuantityError::OutOfRange { quantity: "latitude", value: degrees, min: -90.0, max: 90.0 })
    }
  }

  pub fn degrees(value: f64) -> Result<Latitude, QuantityError> {
    Latitude::try_new(Angle::degrees(value))
  }

  pub fn angle(&self) -> &Angle {
    &self.angle
  }
}

impl Longitude {
  pub fn new(angle: Angle) -> Longitude {
    Longitude { angle: angle.normalized_symmetric() }
  }

  pub fn degrees(value: f64) -> Longitude {
    Longitude::new(Angle::degrees(value))
  }

  pub fn angle(&self) -> &Angle {
    &self.angle
  }
}
