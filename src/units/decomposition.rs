
use crate::config::Tolerances;

use itertools::Itertools;

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// The decomposition of a unit into powers of the base units it was
/// ultimately built from, keyed by base unit symbol.
///
/// Two units with the same [`Dimensions`](crate::dimension::Dimensions)
/// may still be built on different base units (metres versus a custom
/// base unit of length, radians versus the pure number one), and this
/// table is what tells them apart.
///
/// Invariant: no entry has an exponent that rounds to zero.
#[derive(Debug, Clone, Default)]
pub struct BaseDecomposition {
  exponents: BTreeMap<String, f64>,
}

impl BaseDecomposition {
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn singleton(symbol: impl Into<String>) -> Self {
    let mut exponents = BTreeMap::new();
    exponents.insert(symbol.into(), 1.0);
    Self { exponents }
  }

  fn normalized(mut self) -> Self {
    let tolerances = Tolerances::DEFAULT;
    self.exponents.retain(|_, exponent| tolerances.exponent_key(*exponent) != 0);
    self
  }

  pub fn get(&self, symbol: &str) -> f64 {
    self.exponents.get(symbol).copied().unwrap_or(0.0)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
    self.exponents.iter().map(|(k, v)| (k.as_str(), *v))
  }

  pub fn is_empty(&self) -> bool {
    self.exponents.is_empty()
  }

  pub fn product(&self, other: &Self) -> Self {
    let mut exponents = self.exponents.clone();
    for (symbol, exponent) in &other.exponents {
      *exponents.entry(symbol.clone()).or_insert(0.0) += exponent;
    }
    Self { exponents }.normalized()
  }

  pub fn quotient(&self, other: &Self) -> Self {
    self.product(&other.power(-1.0))
  }

  pub fn power(&self, exponent: f64) -> Self {
    let exponents = self.exponents.iter()
      .map(|(symbol, x)| (symbol.clone(), x * exponent))
      .collect();
    Self { exponents }.normalized()
  }

  pub fn approx_eq_with(&self, other: &Self, tolerances: &Tolerances) -> bool {
    self.exponents.keys()
      .chain(other.exponents.keys())
      .unique()
      .all(|symbol| tolerances.exponents_eq(self.get(symbol), other.get(symbol)))
  }

  /// Hashes the rounded decomposition, consistently with
  /// [`BaseDecomposition::approx_eq_with`] under the same tolerances.
  pub fn hash_with<H: Hasher>(&self, tolerances: &Tolerances, state: &mut H) {
    for (symbol, exponent) in &self.exponents {
      let key = tolerances.exponent_key(*exponent);
      if key != 0 {
        symbol.hash(state);
        key.hash(state);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_product_and_quotient() {
    let m = BaseDecomposition::singleton("m");
    let s = BaseDecomposition::singleton("s");
    let velocity = m.quotient(&s);
    assert_eq!(velocity.get("m"), 1.0);
    assert_eq!(velocity.get("s"), -1.0);
    let back = velocity.product(&s);
    assert!(back.approx_eq_with(&m, &Tolerances::DEFAULT));
  }

  #[test]
  fn test_cancelled_entries_are_dropped() {
    let m = BaseDecomposition::singleton("m");
    assert!(m.quotient(&m).is_empty());
    assert!(m.power(2.0).power(0.5).quotient(&m).is_empty());
  }

  #[test]
  fn test_different_bases_are_unequal() {
    let rad = BaseDecomposition::singleton("rad");
    assert!(!rad.approx_eq_with(&BaseDecomposition::empty(), &Tolerances::DEFAULT));
  }
}
