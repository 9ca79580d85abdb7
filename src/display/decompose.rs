
use super::{round_to_error, FALLBACK_DECIMALS};
use crate::config::Tolerances;
use crate::units::{Unit, UnitError};

use std::fmt::{self, Formatter, Display};

#[derive(Clone, Debug, PartialEq)]
pub struct DecomposedPart {
  pub value: f64,
  pub unit: Unit,
}

/// A magnitude split over the sub-units of a compound unit, e.g.
/// `12° 30′ 15.120″`. Every part but the last is a whole number.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
  pub negative: bool,
  pub display_sign: bool,
  pub parts: Vec<DecomposedPart>,
  /// Decimal places of the last part.
  pub decimals: usize,
  pub error: Option<(DecomposedPart, usize)>,
}

/// Splits `value`, given in `unit`, over the partial units of `unit`.
/// A unit which is not compound yields a single part.
///
/// If `error` is given, it is expressed in the coarsest of the unit's
/// error units in which it is at least 1, and it determines how many
/// decimals of the last part are shown.
pub fn decompose(value: f64, unit: &Unit, error: Option<f64>) -> Result<Decomposition, UnitError> {
  let units = unit.display_components();
  let last = units.len() - 1;
  let (error_units, display_sign) = match unit.compound_parts() {
    Some(parts) => (parts.error_units().to_vec(), parts.display_sign()),
    None => (vec![unit.clone()], false),
  };

  let (error, decimals) = match error {
    None => (None, FALLBACK_DECIMALS),
    Some(error) => {
      let in_last = unit.convert_value(error, &units[last])?;
      let (_, _, decimals) = round_to_error(0.0, in_last);
      (error_part(error, unit, &error_units)?, decimals)
    }
  };

  let mut remaining = unit.convert_value(value.abs(), &units[0])?;
  let mut values = Vec::with_capacity(units.len());
  for i in 0..last {
    let whole = remaining.floor();
    values.push(whole);
    remaining = units[i].convert_value(remaining - whole, &units[i + 1])?;
  }
  let step = 10f64.powi(decimals as i32);
  values.push((remaining * step).round() / step);

  // Rounding the last part may fill up a whole unit of the part
  // before it, e.g. 59.9996″ at three decimals.
  let tolerances = Tolerances::DEFAULT;
  for i in (1..units.len()).rev() {
    let size = units[i - 1].convert_value(1.0, &units[i])?;
    if values[i] > size || tolerances.values_eq(values[i], size) {
      values[i] = (values[i] - size).max(0.0);
      values[i - 1] += 1.0;
    }
  }

  let parts = values.into_iter()
    .zip(units)
    .map(|(value, unit)| DecomposedPart { value, unit })
    .collect();
  Ok(Decomposition { negative: value < 0.0, display_sign, parts, decimals, error })
}

// The coarsest error unit in which the error is at least 1, else the
// finest. None only if there are no error units to choose from.
fn error_part(error: f64, unit: &Unit, error_units: &[Unit]) -> Result<Option<(DecomposedPart, usize)>, UnitError> {
  let mut chosen = None;
  for error_unit in error_units {
    let converted = unit.convert_value(error, error_unit)?;
    chosen = Some((converted, error_unit));
    if converted >= 1.0 {
      break;
    }
  }
  Ok(chosen.map(|(converted, error_unit)| {
    let (_, rounded, decimals) = round_to_error(0.0, converted);
    (DecomposedPart { value: rounded, unit: error_unit.clone() }, decimals)
  }))
}

impl Display for Decomposition {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.negative {
      write!(f, "-")?;
    } else if self.display_sign {
      write!(f, "+")?;
    }
    let last = self.parts.len().saturating_sub(1);
    for (i, part) in self.parts.iter().enumerate() {
      if i > 0 {
        write!(f, " ")?;
      }
      let decimals = if i == last { self.decimals } else { 0 };
      write!(f, "{:.*}{}", decimals, part.value, part.unit.symbol())?;
    }
    if let Some((error, decimals)) = &self.error {
      write!(f, " ± {:.*}{}", *decimals, error.value, error.unit.symbol())?;
    }
    Ok(())
  }
}
