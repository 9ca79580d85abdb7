
//! Elementary functions of measures. Results are dimensionless, or
//! angles in radians for the inverse trigonometric functions, and do
//! not carry errors.

use super::{Measure, MeasureError};
use crate::units::UnitError;
use crate::units::table::{ONE, RADIAN};

impl Measure {
  /// The value of this measure in radians. Angles in any angular
  /// unit are converted. Other dimensionless values are taken to be
  /// radians already.
  fn radians(&self) -> Result<f64, MeasureError> {
    match self.unit.convert_value(self.scalar_value(), &RADIAN) {
      Ok(value) => Ok(value),
      Err(UnitError::NoCommonBaseUnit { .. }) => Ok(self.scalar_value()),
      Err(err) => Err(err.into()),
    }
  }

  /// The value of a dimensionless measure as a pure number.
  fn pure_number(&self) -> Result<f64, MeasureError> {
    match self.unit.convert_value(self.scalar_value(), &ONE) {
      Ok(value) => Ok(value),
      Err(UnitError::NoCommonBaseUnit { .. }) => Ok(self.scalar_value()),
      Err(err) => Err(err.into()),
    }
  }

  fn angle_function(&self, f: fn(f64) -> f64) -> Result<Measure, MeasureError> {
    Ok(Measure::new(f(self.radians()?), &ONE))
  }

  fn inverse_angle_function(&self, f: fn(f64) -> f64) -> Result<Measure, MeasureError> {
    Ok(Measure::new(f(self.pure_number()?), &RADIAN))
  }

  pub fn sin(&self) -> Result<Measure, MeasureError> {
    self.angle_function(f64::sin)
  }

  pub fn cos(&self) -> Result<Measure, MeasureError> {
    self.angle_function(f64::cos)
  }

  pub fn tan(&self) -> Result<Measure, MeasureError> {
    self.angle_function(f64::tan)
  }

  pub fn asin(&self) -> Result<Measure, MeasureError> {
    self.inverse_angle_function(f64::asin)
  }

  pub fn acos(&self) -> Result<Measure, MeasureError> {
    self.inverse_angle_function(f64::acos)
  }

  pub fn atan(&self) -> Result<Measure, MeasureError> {
    self.inverse_angle_function(f64::atan)
  }

  /// The angle of the point `(x, y)`, where `self` is `y`. The two
  /// coordinates need only share a unit family.
  pub fn atan2(&self, x: &Measure) -> Result<Measure, MeasureError> {
    let x = x.unit.convert_value(x.scalar_value(), &self.unit)?;
    Ok(Measure::new(self.scalar_value().atan2(x), &RADIAN))
  }

  // Logarithms and the exponential use the bare number, whatever its
  // unit.

  pub fn ln(&self) -> Measure {
    self.bare_function(f64::ln)
  }

  pub fn log10(&self) -> Measure {
    self.bare_function(f64::log10)
  }

  pub fn log2(&self) -> Measure {
    self.bare_function(f64::log2)
  }

  pub fn exp(&self) -> Measure {
    self.bare_function(f64::exp)
  }

  fn bare_function(&self, f: fn(f64) -> f64) -> Measure {
    Measure::new(f(self.scalar_value()), &ONE)
  }
}
