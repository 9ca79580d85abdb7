
use crate::scale::ScaleError;
use crate::units::UnitError;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MeasureError {
  #[error(transparent)]
  Unit(#[from] UnitError),
  #[error(transparent)]
  Scale(#[from] ScaleError),
  #[error("Error magnitude must be positive, got {error}")]
  NonPositiveError {
    error: f64,
  },
}
