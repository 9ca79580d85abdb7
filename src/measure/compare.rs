
//! Equality and ordering of measures.
//!
//! Both are total in the sense that they never fail: a pair which
//! cannot be converted into a common unit or scale is simply unequal,
//! and unordered. Arithmetic, by contrast, reports such pairs as
//! errors.

use super::Measure;
use crate::config::Tolerances;

use tracing::debug;

use std::cmp::Ordering;

impl Measure {
  /// Equality with explicit tolerances. Errors are not compared.
  pub fn approx_eq_with(&self, other: &Measure, tolerances: &Tolerances) -> bool {
    match (&self.scale, &other.scale) {
      (Some(lhs), Some(rhs)) => {
        if lhs != rhs {
          match other.convert_to_scale(lhs) {
            Ok(converted) => self.approx_eq_with(&converted, tolerances),
            Err(err) => {
              debug!(%lhs, %rhs, %err, "measures on unconvertible scales are unequal");
              false
            }
          }
        } else if lhs.is_label_scale() {
          self.label() == other.label()
        } else {
          tolerances.values_eq(self.scalar_value(), other.scalar_value())
        }
      }
      (None, None) => {
        if self.unit.is_same_handle(&other.unit) {
          return tolerances.values_eq(self.scalar_value(), other.scalar_value());
        }
        match other.convert_to_unit(&self.unit) {
          Ok(converted) => tolerances.values_eq(self.scalar_value(), converted.scalar_value()),
          Err(err) => {
            debug!(lhs = %self.unit, rhs = %other.unit, %err, "measures in unconvertible units are unequal");
            false
          }
        }
      }
      _ => false,
    }
  }

  fn compare(&self, other: &Measure) -> Option<Ordering> {
    match (&self.scale, &other.scale) {
      (Some(lhs), Some(rhs)) if lhs.is_label_scale() || rhs.is_label_scale() => {
        if lhs != rhs || !lhs.is_ordinal() {
          return None;
        }
        let a = lhs.label_index(self.label()?)?;
        let b = lhs.label_index(other.label()?)?;
        Some(a.cmp(&b))
      }
      (Some(lhs), Some(_)) => {
        let converted = other.convert_to_scale(lhs).ok()?;
        self.scalar_value().partial_cmp(&converted.scalar_value())
      }
      (None, None) => {
        let converted = other.convert_to_unit(&self.unit).ok()?;
        self.scalar_value().partial_cmp(&converted.scalar_value())
      }
      _ => None,
    }
  }
}

impl PartialEq for Measure {
  fn eq(&self, other: &Self) -> bool {
    self.approx_eq_with(other, &Tolerances::DEFAULT)
  }
}

impl PartialOrd for Measure {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self == other {
      return Some(Ordering::Equal);
    }
    let ordering = self.compare(other);
    if ordering.is_none() {
      debug!(lhs = %self.unit, rhs = %other.unit, "measures are not comparable");
    }
    ordering
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scale::Scale;
  use crate::scale::table::{KELVIN_SCALE, CELSIUS_SCALE, FAHRENHEIT_SCALE, MAGNITUDE_SCALE, SPECTRAL_CLASS_SCALE};
  use crate::units::table::{METRE, KILOMETRE, KILOGRAM, KELVIN};

  #[test]
  fn test_equality_across_units() {
    assert_eq!(Measure::new(1.0, &KILOMETRE), Measure::new(1000.0, &METRE));
    assert_ne!(Measure::new(1.0, &KILOMETRE), Measure::new(999.0, &METRE));
  }

  #[test]
  fn test_equality_ignores_error() {
    let a = Measure::new(1.0, &METRE).with_error(0.1).unwrap();
    assert_eq!(a, Measure::new(1.0, &METRE));
  }

  #[test]
  fn test_equality_across_scales() {
    let c = Measure::on_scale(100.0, &CELSIUS_SCALE).unwrap();
    let f = Measure::on_scale(212.0, &FAHRENHEIT_SCALE).unwrap();
    assert_eq!(c, f);
    assert_eq!(f, c);
  }

  #[test]
  fn test_scale_presence_must_match() {
    let plain = Measure::new(300.0, &KELVIN);
    let scaled = Measure::on_scale(300.0, &KELVIN_SCALE).unwrap();
    assert_ne!(plain, scaled);
    assert_eq!(plain.partial_cmp(&scaled), None);
  }

  #[test]
  fn test_unconvertible_scales_are_unequal() {
    let mag = Measure::on_scale(1.0, &MAGNITUDE_SCALE).unwrap();
    let k = Measure::on_scale(1.0, &KELVIN_SCALE).unwrap();
    assert_ne!(mag, k);
    assert!(!(mag < k));
    assert!(!(mag > k));
  }

  #[test]
  fn test_length_and_mass_are_incomparable() {
    let length = Measure::new(1.0, &METRE);
    let mass = Measure::new(1.0, &KILOGRAM);
    assert!(!(length < mass));
    assert!(!(length > mass));
    assert!(!(length <= mass));
    assert!(!(length >= mass));
    assert_ne!(length, mass);
  }

  #[test]
  fn test_ordering_across_units_and_scales() {
    assert!(Measure::new(1.0, &KILOMETRE) > Measure::new(999.0, &METRE));
    assert!(Measure::new(1.0, &METRE) < Measure::new(1.0, &KILOMETRE));
    let warm = Measure::on_scale(30.0, &CELSIUS_SCALE).unwrap();
    let mild = Measure::on_scale(70.0, &FAHRENHEIT_SCALE).unwrap();
    assert!(warm > mild);
    assert!(Measure::new(1.0, &KILOMETRE) >= Measure::new(1000.0, &METRE));
  }

  #[test]
  fn test_ordinal_ordering() {
    let o = Measure::labelled("O", &SPECTRAL_CLASS_SCALE).unwrap();
    let g = Measure::labelled("G", &SPECTRAL_CLASS_SCALE).unwrap();
    assert!(o < g);
    assert!(g > o);
    assert_eq!(g, Measure::labelled("G", &SPECTRAL_CLASS_SCALE).unwrap());
  }

  #[test]
  fn test_nominal_measures_are_unordered() {
    let colours = Scale::nominal("colour", ["red", "green"]);
    let red = Measure::labelled("red", &colours).unwrap();
    let green = Measure::labelled("green", &colours).unwrap();
    assert_ne!(red, green);
    assert!(!(red < green));
    assert!(!(red > green));
    assert_eq!(red, Measure::labelled("red", &colours).unwrap());
  }

  #[test]
  fn test_custom_tolerances() {
    let a = Measure::new(1.0, &METRE);
    let b = Measure::new(1.001, &METRE);
    assert!(!a.approx_eq_with(&b, &Tolerances::DEFAULT));
    assert!(a.approx_eq_with(&b, &Tolerances::DEFAULT.with_value_relative_epsilon(0.01)));
  }
}
