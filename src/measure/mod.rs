
//! Measured values.
//!
//! A [`Measure`] is a number (or, on a nominal or ordinal scale, a
//! label) together with an optional error, a unit, and an optional
//! scale. Measures are immutable values; every conversion and every
//! arithmetic operation produces a new one.

pub mod compare;
pub mod convert;
pub mod error;
pub mod functions;
pub mod ops;

pub use convert::{ConversionObserver, NoopObserver, ScaleHop, HopDirection};
pub use error::MeasureError;

use crate::scale::{Scale, ScaleError};
use crate::units::Unit;
use crate::units::table::ONE;

use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum MeasureValue {
  Scalar(f64),
  Label(String),
}

#[derive(Clone, Debug)]
pub struct Measure {
  value: MeasureValue,
  error: Option<f64>,
  unit: Unit,
  scale: Option<Scale>,
}

impl Measure {
  /// A plain measure, not bound to any scale.
  pub fn new(value: f64, unit: &Unit) -> Measure {
    Measure {
      value: MeasureValue::Scalar(value),
      error: None,
      unit: unit.clone(),
      scale: None,
    }
  }

  /// A numeric value on an interval or ratio scale, expressed in the
  /// scale's unit. Ratio scales reject negative values.
  pub fn on_scale(value: f64, scale: &Scale) -> Result<Measure, MeasureError> {
    let Some(unit) = scale.unit() else {
      return Err(ScaleError::LabelScale { scale: scale.to_string() }.into());
    };
    if scale.is_ratio() && value < 0.0 {
      debug!(%scale, value, "rejected negative value on ratio scale");
      return Err(ScaleError::NegativeRatioValue { value, scale: scale.to_string() }.into());
    }
    Ok(Measure {
      value: MeasureValue::Scalar(value),
      error: None,
      unit: unit.clone(),
      scale: Some(scale.clone()),
    })
  }

  /// A label on a nominal or ordinal scale.
  pub fn labelled(label: impl Into<String>, scale: &Scale) -> Result<Measure, MeasureError> {
    let label = label.into();
    if !scale.is_label_scale() {
      return Err(ScaleError::NotALabelScale { scale: scale.to_string() }.into());
    }
    if scale.label_index(&label).is_none() {
      return Err(ScaleError::UnknownLabel { label, scale: scale.to_string() }.into());
    }
    Ok(Measure {
      value: MeasureValue::Label(label),
      error: None,
      unit: ONE.clone(),
      scale: Some(scale.clone()),
    })
  }

  /// Attaches an error magnitude, which must be strictly positive.
  pub fn with_error(mut self, error: f64) -> Result<Measure, MeasureError> {
    if error.is_nan() || error <= 0.0 {
      return Err(MeasureError::NonPositiveError { error });
    }
    self.error = Some(error);
    Ok(self)
  }

  /// Builds a measure from already validated parts. Errors which are
  /// not strictly positive are dropped.
  pub(crate) fn from_parts(value: f64, error: Option<f64>, unit: Unit, scale: Option<Scale>) -> Measure {
    Measure {
      value: MeasureValue::Scalar(value),
      error: error.filter(|e| *e > 0.0 && e.is_finite()),
      unit,
      scale,
    }
  }

  pub fn value(&self) -> &MeasureValue {
    &self.value
  }

  /// The numeric value, or NaN for a label.
  pub fn scalar_value(&self) -> f64 {
    match &self.value {
      MeasureValue::Scalar(x) => *x,
      MeasureValue::Label(_) => f64::NAN,
    }
  }

  pub fn label(&self) -> Option<&str> {
    match &self.value {
      MeasureValue::Scalar(_) => None,
      MeasureValue::Label(label) => Some(label),
    }
  }

  pub fn error(&self) -> Option<f64> {
    self.error
  }

  pub fn unit(&self) -> &Unit {
    &self.unit
  }

  pub fn scale(&self) -> Option<&Scale> {
    self.scale.as_ref()
  }

  pub fn is_scale_bound(&self) -> bool {
    self.scale.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scale::table::{KELVIN_SCALE, CELSIUS_SCALE, SPECTRAL_CLASS_SCALE};
  use crate::units::table::METRE;

  #[test]
  fn test_plain_measure() {
    let m = Measure::new(3.0, &METRE);
    assert_eq!(m.scalar_value(), 3.0);
    assert_eq!(m.error(), None);
    assert!(!m.is_scale_bound());
    assert_eq!(m.label(), None);
  }

  #[test]
  fn test_error_must_be_positive() {
    let m = Measure::new(3.0, &METRE);
    assert_eq!(m.clone().with_error(0.5).unwrap().error(), Some(0.5));
    assert_eq!(m.clone().with_error(0.0).unwrap_err(), MeasureError::NonPositiveError { error: 0.0 });
    assert_eq!(m.clone().with_error(-1.0).unwrap_err(), MeasureError::NonPositiveError { error: -1.0 });
    assert!(m.with_error(f64::NAN).is_err());
  }

  #[test]
  fn test_ratio_scale_rejects_negative_values() {
    assert!(Measure::on_scale(0.0, &KELVIN_SCALE).is_ok());
    assert_eq!(
      Measure::on_scale(-1.0, &KELVIN_SCALE).unwrap_err(),
      ScaleError::NegativeRatioValue { value: -1.0, scale: "K".to_owned() }.into(),
    );
    assert!(Measure::on_scale(-40.0, &CELSIUS_SCALE).is_ok());
  }

  #[test]
  fn test_scale_measure_takes_scale_unit() {
    let m = Measure::on_scale(20.0, &CELSIUS_SCALE).unwrap();
    assert_eq!(m.unit().symbol(), "°C");
    assert!(m.is_scale_bound());
  }

  #[test]
  fn test_labelled_measures() {
    let m = Measure::labelled("G", &SPECTRAL_CLASS_SCALE).unwrap();
    assert_eq!(m.label(), Some("G"));
    assert!(m.scalar_value().is_nan());
    assert_eq!(
      Measure::labelled("Q", &SPECTRAL_CLASS_SCALE).unwrap_err(),
      ScaleError::UnknownLabel { label: "Q".to_owned(), scale: "spectral class".to_owned() }.into(),
    );
    assert!(Measure::labelled("G", &KELVIN_SCALE).is_err());
    assert!(Measure::on_scale(1.0, &SPECTRAL_CLASS_SCALE).is_err());
  }
}
