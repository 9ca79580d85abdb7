
use super::error::UnitError;
use super::unit::Unit;

use tracing::debug;

/// The parts of a compound unit, such as degrees, arcminutes, and
/// arcseconds.
#[derive(Clone, Debug)]
pub struct CompoundParts {
  partial_units: Vec<Unit>,
  // partial_units followed by any extra, finer units.
  error_units: Vec<Unit>,
  display_sign: bool,
}

impl CompoundParts {
  /// Validates and bundles the parts of a compound unit. There must
  /// be at least one partial unit, all units must share dimensions,
  /// and each unit must be strictly larger than the next, both in
  /// `partial_units` and in the full list of error units.
  pub fn new(
    partial_units: Vec<Unit>,
    extra_error_units: Vec<Unit>,
    display_sign: bool,
  ) -> Result<Self, UnitError> {
    let Some(first) = partial_units.first() else {
      debug!("rejected compound unit without partial units");
      return Err(UnitError::NoPartialUnits);
    };
    let error_units: Vec<Unit> = partial_units.iter().chain(&extra_error_units).cloned().collect();
    for unit in &error_units {
      if unit.dimensions() != first.dimensions() {
        debug!(first = %first, unit = %unit, "rejected compound unit with mixed dimensionality");
        return Err(UnitError::DifferentDimensionality {
          from: first.to_string(),
          to: unit.to_string(),
          from_dimensions: first.dimensions(),
          to_dimensions: unit.dimensions(),
        });
      }
    }
    check_strictly_decreasing(&partial_units)?;
    check_strictly_decreasing(&error_units)?;
    Ok(Self { partial_units, error_units, display_sign })
  }

  pub fn partial_units(&self) -> &[Unit] {
    &self.partial_units
  }

  /// The partial units, followed by the extra units used only when
  /// rendering error bars.
  pub fn error_units(&self) -> &[Unit] {
    &self.error_units
  }

  pub fn display_sign(&self) -> bool {
    self.display_sign
  }
}

fn check_strictly_decreasing(units: &[Unit]) -> Result<(), UnitError> {
  for pair in units.windows(2) {
    let (coarser, finer) = (&pair[0], &pair[1]);
    if coarser.convert_value(1.0, finer)? <= 1.0 {
      debug!(coarser = %coarser, finer = %finer, "rejected compound unit in illegal order");
      return Err(UnitError::IllegalOrder {
        coarser: coarser.to_string(),
        finer: finer.to_string(),
      });
    }
  }
  Ok(())
}
