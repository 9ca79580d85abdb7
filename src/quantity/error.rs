
use crate::measure::MeasureError;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum QuantityError {
  #[error(transparent)]
  Measure(#[from] MeasureError),
  #[error("{quantity} of {value} is outside of [{min}, {max}]")]
  OutOfRange {
    quantity: &'static str,
    value: f64,
    min: f64,
    max: f64,
  },
  #[error("{quantity} cannot be measured on scale {scale}")]
  IllegalScale {
    quantity: &'static str,
    scale: String,
  },
}
