
//! Operator implementations on [`Unit`].
//!
//! `*`, `/` and `pow` build derived units. `try_add` and `try_sub`
//! do not build anything: adding two lengths yields a length in the
//! left-hand unit, so these only check that the two units are
//! dimensionally compatible and return the left-hand side.

use super::error::UnitError;
use super::unit::Unit;

use num::pow::Pow;
use try_traits::ops::{TryAdd, TrySub};

use std::ops::{Mul, Div};

fn check_compatible(lhs: &Unit, rhs: &Unit) -> Result<(), UnitError> {
  if lhs.dimensions() == rhs.dimensions() {
    Ok(())
  } else {
    Err(UnitError::DifferentDimensionality {
      from: rhs.to_string(),
      to: lhs.to_string(),
      from_dimensions: rhs.dimensions(),
      to_dimensions: lhs.dimensions(),
    })
  }
}

impl Mul for &Unit {
  type Output = Unit;

  fn mul(self, rhs: &Unit) -> Unit {
    Unit::product(self, rhs)
  }
}

impl Mul for Unit {
  type Output = Unit;

  fn mul(self, rhs: Unit) -> Unit {
    Unit::product(&self, &rhs)
  }
}

impl Div for &Unit {
  type Output = Unit;

  fn div(self, rhs: &Unit) -> Unit {
    Unit::quotient(self, rhs)
  }
}

impl Div for Unit {
  type Output = Unit;

  fn div(self, rhs: Unit) -> Unit {
    Unit::quotient(&self, &rhs)
  }
}

impl Pow<f64> for &Unit {
  type Output = Unit;

  fn pow(self, exponent: f64) -> Unit {
    Unit::power(self, exponent)
  }
}

impl Pow<f64> for Unit {
  type Output = Unit;

  fn pow(self, exponent: f64) -> Unit {
    Unit::power(&self, exponent)
  }
}

impl TryAdd for &Unit {
  type Output = Unit;
  type Error = UnitError;

  fn try_add(self, rhs: &Unit) -> Result<Unit, UnitError> {
    check_compatible(self, rhs)?;
    Ok(self.clone())
  }
}

impl TrySub for &Unit {
  type Output = Unit;
  type Error = UnitError;

  fn try_sub(self, rhs: &Unit) -> Result<Unit, UnitError> {
    check_compatible(self, rhs)?;
    Ok(self.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dimension::Dimension;
  use crate::units::test_utils::{metres, seconds, kilometres};

  #[test]
  fn test_mul_div_pow() {
    let m = metres();
    let s = seconds();
    let velocity = &m / &s;
    assert_eq!(velocity.dimensions(), Dimension::Length / Dimension::Time);
    let area = (&m).pow(2.0);
    assert_eq!(area, &m * &m);
    assert_eq!(m.clone() * s.clone() / s, m);
  }

  #[test]
  fn test_try_add_returns_lhs() {
    let km = kilometres();
    let sum = (&km).try_add(&metres()).unwrap();
    assert!(sum.is_same_handle(&km));
    let diff = (&metres()).try_sub(&km).unwrap();
    assert_eq!(diff.symbol(), "m");
  }

  #[test]
  fn test_try_add_rejects_incompatible_units() {
    let err = (&metres()).try_add(&seconds()).unwrap_err();
    assert!(matches!(err, UnitError::DifferentDimensionality { .. }));
  }
}
