
use super::error::QuantityError;
use crate::measure::Measure;
use crate::scale::{Scale, ScaleKind};
use crate::scale::table::MAGNITUDE_SCALE;
use crate::units::table::ONE;

use std::cmp::Ordering;

/// An astronomical magnitude: a dimensionless value on an interval
/// scale. Smaller magnitudes are brighter.
#[derive(Clone, Debug, PartialEq)]
pub struct Magnitude {
  measure: Measure,
}

impl Magnitude {
  /// A magnitude on the default magnitude scale.
  pub fn new(value: f64) -> Result<Magnitude, QuantityError> {
    Magnitude::try_new(Measure::on_scale(value, &MAGNITUDE_SCALE)?)
  }

  pub fn try_new(measure: Measure) -> Result<Magnitude, QuantityError> {
    match measure.scale() {
      Some(scale) if is_magnitude_scale(scale) => Ok(Magnitude { measure }),
      Some(scale) => Err(QuantityError::IllegalScale { quantity: "magnitude", scale: scale.to_string() }),
      None => Err(QuantityError::IllegalScale { quantity: "magnitude", scale: measure.unit().to_string() }),
    }
  }

  pub fn measure(&self) -> &Measure {
    &self.measure
  }

  pub fn value(&self) -> f64 {
    self.measure.scalar_value()
  }

  /// False if the two magnitudes are on scales which cannot be
  /// compared.
  pub fn brighter_than(&self, other: &Magnitude) -> bool {
    self.measure.partial_cmp(&other.measure) == Some(Ordering::Less)
  }

  /// The ratio of this object's flux to `other`'s, by Pogson's
  /// relation. Both magnitudes must be on the same scale.
  pub fn flux_ratio(&self, other: &Magnitude) -> Result<f64, QuantityError> {
    if self.measure.scale() != other.measure.scale() {
      let scale = other.measure.scale().map_or_else(String::new, Scale::to_string);
      return Err(QuantityError::IllegalScale { quantity: "magnitude", scale });
    }
    Ok(10f64.powf(-0.4 * (self.value() - other.value())))
  }
}

fn is_magnitude_scale(scale: &Scale) -> bool {
  matches!(scale.kind(), ScaleKind::Interval { unit, .. } if unit == &*ONE)
}
