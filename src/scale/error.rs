
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ScaleError {
  #[error("Cannot convert between scales {from} and {to}: different dimensionality")]
  DifferentDimensionality {
    from: String,
    to: String,
  },
  #[error("Cannot convert between scales {from} and {to}: no common ratio scale")]
  NoCommonRatioScale {
    from: String,
    to: String,
  },
  #[error("Cannot convert a value on scale {scale} to a plain unit")]
  ScaleToUnit {
    scale: String,
  },
  #[error("Scale {scale} is not linked to a ratio scale")]
  NotLinkedToRatioScale {
    scale: String,
  },
  #[error("Scale {scale} is not a ratio scale")]
  NotARatioScale {
    scale: String,
  },
  #[error("Cannot use a value on scale {scale} as an operand here")]
  ScaleInArithmetic {
    scale: String,
  },
  #[error("Cannot convert to or from nominal or ordinal scale {scale}")]
  LabelScale {
    scale: String,
  },
  #[error("Scale {scale} has no labels")]
  NotALabelScale {
    scale: String,
  },
  #[error("Unknown label '{label}' for scale {scale}")]
  UnknownLabel {
    label: String,
    scale: String,
  },
  #[error("Negative value {value} is not allowed on ratio scale {scale}")]
  NegativeRatioValue {
    value: f64,
    scale: String,
  },
}
