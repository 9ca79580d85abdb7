
//! Plain text rendering of measures.
//!
//! Values with an error are rounded so that the error keeps one
//! significant digit (two if that digit would be a 1), and the value
//! is shown to the same decimal place. Values in compound units are
//! split into one part per sub-unit.

pub mod decompose;

pub use decompose::{decompose, Decomposition, DecomposedPart};

use crate::measure::{Measure, MeasureValue};

use std::fmt::{self, Formatter, Display};

/// Decimal places shown for the last part of a compound unit when the
/// measure has no error.
pub const FALLBACK_DECIMALS: usize = 3;

/// Rounds `error` to one significant digit, or two if the leading digit
/// is 1, and `value` to the same decimal place. Returns the rounded
/// value, the rounded error, and the number of decimal places to show.
///
/// Errors which are not positive and finite leave the value untouched.
pub fn round_to_error(value: f64, error: f64) -> (f64, f64, usize) {
  if !(error.is_finite() && error > 0.0) {
    return (value, error, 0);
  }
  let exponent = error.log10().floor() as i32;
  // The first two significant digits, rounded, so that 1.9999 counts
  // as a leading 2.
  let two_digits = (error / 10f64.powi(exponent - 1)).round();
  let significant = if two_digits < 20.0 { 2 } else { 1 };
  let place = exponent - (significant - 1);
  let step = 10f64.powi(place);
  let decimals = (-place).max(0) as usize;
  ((value / step).round() * step, (error / step).round() * step, decimals)
}

fn write_plain(f: &mut Formatter, measure: &Measure, value: f64) -> fmt::Result {
  match measure.error() {
    Some(error) => {
      let (value, error, decimals) = round_to_error(value, error);
      write!(f, "{:.*} ± {:.*}", decimals, value, decimals, error)?;
    }
    None => {
      write!(f, "{}", value)?;
    }
  }
  if !measure.unit().symbol().is_empty() {
    write!(f, " {}", measure.unit().symbol())?;
  }
  Ok(())
}

impl Display for Measure {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let value = match self.value() {
      MeasureValue::Label(label) => return write!(f, "{}", label),
      MeasureValue::Scalar(value) => *value,
    };
    if self.unit().compound_parts().is_some() {
      if let Ok(decomposition) = decompose(value, self.unit(), self.error()) {
        return write!(f, "{}", decomposition);
      }
    }
    write_plain(f, self, value)
  }
}
