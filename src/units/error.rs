
use crate::dimension::Dimensions;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum UnitError {
  #[error("Cannot relate {from} ({from_dimensions}) to {to} ({to_dimensions}): different dimensionality")]
  DifferentDimensionality {
    from: String,
    to: String,
    from_dimensions: Dimensions,
    to_dimensions: Dimensions,
  },
  #[error("Cannot relate {from} to {to}: no common base unit")]
  NoCommonBaseUnit {
    from: String,
    to: String,
  },
  #[error("Cannot convert a value in {unit} to a scale")]
  UnitToScale {
    unit: String,
  },
  #[error("Compound unit has no partial units defined")]
  NoPartialUnits,
  #[error("Compound unit parts in illegal order: {coarser} is not larger than {finer}")]
  IllegalOrder {
    coarser: String,
    finer: String,
  },
}
