
//! Arithmetic on measures.
//!
//! Addition and subtraction convert the right-hand side into the
//! left-hand unit and can fail, so they are [`TryAdd`] and [`TrySub`].
//! Products, quotients, and powers always succeed, build a derived
//! unit, and discard any scale.
//!
//! Errors are carried along as simple bookkeeping: sums add absolute
//! errors, products and quotients add relative errors, and a power
//! multiplies the relative error by the absolute value of the
//! exponent.

use super::{Measure, MeasureError};
use crate::scale::ScaleError;
use crate::units::Unit;

use num::pow::Pow;
use try_traits::ops::{TryAdd, TrySub};
use tracing::trace;

use std::ops::{Mul, Div};

fn sum_errors(a: Option<f64>, b: Option<f64>) -> Option<f64> {
  match (a, b) {
    (None, None) => None,
    _ => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
  }
}

impl Measure {
  fn add_signed(&self, rhs: &Measure, sign: f64) -> Result<Measure, MeasureError> {
    if let Some(scale) = &rhs.scale {
      return Err(ScaleError::ScaleInArithmetic { scale: scale.to_string() }.into());
    }
    if let Some(scale) = self.scale.as_ref().filter(|scale| scale.is_label_scale()) {
      return Err(ScaleError::ScaleInArithmetic { scale: scale.to_string() }.into());
    }
    let rhs = rhs.convert_to_unit(&self.unit)?;
    let value = self.scalar_value() + sign * rhs.scalar_value();
    let error = sum_errors(self.error, rhs.error);
    match &self.scale {
      None => Ok(Measure::from_parts(value, error, self.unit.clone(), None)),
      Some(scale) => {
        let mut result = Measure::on_scale(value, scale)?;
        result.error = error;
        Ok(result)
      }
    }
  }

  /// The difference between two points on anchored scales, as a
  /// plain measure in the unit of their common ratio scale.
  fn scale_difference(&self, rhs: &Measure) -> Result<Measure, MeasureError> {
    let Some(scale) = &self.scale else {
      return self.add_signed(rhs, -1.0);
    };
    if scale.is_label_scale() {
      return Err(ScaleError::ScaleInArithmetic { scale: scale.to_string() }.into());
    }
    let ratio_scale = scale.ratio_scale()?;
    let lhs = self.convert_to_scale(&ratio_scale)?;
    let rhs = rhs.convert_to_scale(&ratio_scale)?;
    let value = lhs.scalar_value() - rhs.scalar_value();
    trace!(%ratio_scale, value, "difference of scale values");
    Ok(Measure::from_parts(value, sum_errors(lhs.error, rhs.error), ratio_scale.numeric_unit()?.clone(), None))
  }

  pub fn sqrt(&self) -> Measure {
    self.pow(0.5)
  }
}

impl TryAdd for &Measure {
  type Output = Measure;
  type Error = MeasureError;

  fn try_add(self, rhs: &Measure) -> Result<Measure, MeasureError> {
    self.add_signed(rhs, 1.0)
  }
}

impl TryAdd for Measure {
  type Output = Measure;
  type Error = MeasureError;

  fn try_add(self, rhs: Measure) -> Result<Measure, MeasureError> {
    (&self).try_add(&rhs)
  }
}

impl TrySub for &Measure {
  type Output = Measure;
  type Error = MeasureError;

  fn try_sub(self, rhs: &Measure) -> Result<Measure, MeasureError> {
    if self.is_scale_bound() && rhs.is_scale_bound() {
      self.scale_difference(rhs)
    } else {
      self.add_signed(rhs, -1.0)
    }
  }
}

impl TrySub for Measure {
  type Output = Measure;
  type Error = MeasureError;

  fn try_sub(self, rhs: Measure) -> Result<Measure, MeasureError> {
    (&self).try_sub(&rhs)
  }
}

impl Mul for &Measure {
  type Output = Measure;

  fn mul(self, rhs: &Measure) -> Measure {
    let (a, b) = (self.scalar_value(), rhs.scalar_value());
    let error = match (self.error, rhs.error) {
      (None, None) => None,
      (ea, eb) => Some(b.abs() * ea.unwrap_or(0.0) + a.abs() * eb.unwrap_or(0.0)),
    };
    Measure::from_parts(a * b, error, Unit::product(&self.unit, &rhs.unit), None)
  }
}

impl Mul for Measure {
  type Output = Measure;

  fn mul(self, rhs: Measure) -> Measure {
    &self * &rhs
  }
}

impl Div for &Measure {
  type Output = Measure;

  fn div(self, rhs: &Measure) -> Measure {
    let (a, b) = (self.scalar_value(), rhs.scalar_value());
    let error = match (self.error, rhs.error) {
      (None, None) => None,
      (ea, eb) => Some(ea.unwrap_or(0.0) / b.abs() + a.abs() * eb.unwrap_or(0.0) / (b * b)),
    };
    Measure::from_parts(a / b, error, Unit::quotient(&self.unit, &rhs.unit), None)
  }
}

impl Div for Measure {
  type Output = Measure;

  fn div(self, rhs: Measure) -> Measure {
    &self / &rhs
  }
}

impl Pow<f64> for &Measure {
  type Output = Measure;

  fn pow(self, exponent: f64) -> Measure {
    let base = self.scalar_value();
    let value = base.powf(exponent);
    let error = self.error.map(|error| exponent.abs() * error * (value / base).abs());
    Measure::from_parts(value, error, Unit::power(&self.unit, exponent), None)
  }
}

impl Pow<f64> for Measure {
  type Output = Measure;

  fn pow(self, exponent: f64) -> Measure {
    (&self).pow(exponent)
  }
}
