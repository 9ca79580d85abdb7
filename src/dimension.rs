
use crate::config::Tolerances;

use num::One;
use num::pow::Pow;
use serde::{Serialize, Deserialize};

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display};

pub const NDIMS: usize = 7;

/// The seven base physical dimensions. Every unit measures a formal
/// product of (possibly fractional) powers of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
  Time,
  Length,
  Mass,
  ElectricCurrent,
  Temperature,
  AmountOfSubstance,
  LuminousIntensity,
}

/// A formal product of powers of [`Dimension`] values. Exponents are
/// real numbers, since square roots of units are permitted. Missing
/// dimensions have exponent zero.
///
/// Equality forgives floating point drift: exponents are rounded to
/// three decimal places and compared with a small epsilon (see
/// [`Tolerances`]).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Dimensions {
  exponents: [f64; NDIMS],
}

impl Dimension {
  pub const ALL: [Dimension; NDIMS] = [
    Dimension::Time,
    Dimension::Length,
    Dimension::Mass,
    Dimension::ElectricCurrent,
    Dimension::Temperature,
    Dimension::AmountOfSubstance,
    Dimension::LuminousIntensity,
  ];

  fn index(self) -> usize {
    match self {
      Dimension::Time => 0,
      Dimension::Length => 1,
      Dimension::Mass => 2,
      Dimension::ElectricCurrent => 3,
      Dimension::Temperature => 4,
      Dimension::AmountOfSubstance => 5,
      Dimension::LuminousIntensity => 6,
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Dimension::Time => "T",
      Dimension::Length => "L",
      Dimension::Mass => "M",
      Dimension::ElectricCurrent => "I",
      Dimension::Temperature => "Θ",
      Dimension::AmountOfSubstance => "N",
      Dimension::LuminousIntensity => "J",
    }
  }
}

impl Dimensions {
  pub fn dimensionless() -> Self {
    Self::default()
  }

  pub fn singleton(dim: Dimension) -> Self {
    let mut exponents = [0.0; NDIMS];
    exponents[dim.index()] = 1.0;
    Self { exponents }
  }

  pub fn from_components(components: impl IntoIterator<Item = (Dimension, f64)>) -> Self {
    let mut result = Self::default();
    for (dim, exponent) in components {
      result.exponents[dim.index()] += exponent;
    }
    result
  }

  pub fn get(&self, dim: Dimension) -> f64 {
    self.exponents[dim.index()]
  }

  /// The non-zero components of this dimension vector, in the order
  /// of [`Dimension::ALL`].
  pub fn components(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
    Dimension::ALL.iter()
      .copied()
      .zip(self.exponents.iter().copied())
      .filter(|(_, x)| *x != 0.0)
  }

  pub fn is_dimensionless(&self) -> bool {
    self.is_one()
  }

  pub fn approx_eq_with(&self, other: &Self, tolerances: &Tolerances) -> bool {
    self.exponents.iter()
      .zip(other.exponents.iter())
      .all(|(a, b)| tolerances.exponents_eq(*a, *b))
  }
}

impl From<Dimension> for Dimensions {
  fn from(dim: Dimension) -> Self {
    Dimensions::singleton(dim)
  }
}

impl PartialEq for Dimensions {
  fn eq(&self, other: &Self) -> bool {
    self.approx_eq_with(other, &Tolerances::DEFAULT)
  }
}

impl Mul for Dimensions {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    let mut exponents = self.exponents;
    for (a, b) in exponents.iter_mut().zip(rhs.exponents) {
      *a += b;
    }
    Dimensions { exponents }
  }
}

impl Div for Dimensions {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    let mut exponents = self.exponents;
    for (a, b) in exponents.iter_mut().zip(rhs.exponents) {
      *a -= b;
    }
    Dimensions { exponents }
  }
}

impl Pow<f64> for Dimensions {
  type Output = Dimensions;

  fn pow(self, power: f64) -> Dimensions {
    Dimensions {
      exponents: self.exponents.map(|x| x * power),
    }
  }
}

impl Mul<Dimension> for Dimensions {
  type Output = Self;

  fn mul(self, rhs: Dimension) -> Self {
    self * Dimensions::singleton(rhs)
  }
}

impl Div<Dimension> for Dimensions {
  type Output = Self;

  fn div(self, rhs: Dimension) -> Self {
    self / Dimensions::singleton(rhs)
  }
}

impl Mul for Dimension {
  type Output = Dimensions;

  fn mul(self, rhs: Self) -> Dimensions {
    Dimensions::singleton(self) * Dimensions::singleton(rhs)
  }
}

impl Mul<Dimensions> for Dimension {
  type Output = Dimensions;

  fn mul(self, rhs: Dimensions) -> Dimensions {
    Dimensions::singleton(self) * rhs
  }
}

impl Div for Dimension {
  type Output = Dimensions;

  fn div(self, rhs: Self) -> Dimensions {
    Dimensions::singleton(self) / Dimensions::singleton(rhs)
  }
}

impl Div<Dimensions> for Dimension {
  type Output = Dimensions;

  fn div(self, rhs: Dimensions) -> Dimensions {
    Dimensions::singleton(self) / rhs
  }
}

impl Pow<f64> for Dimension {
  type Output = Dimensions;

  fn pow(self, power: f64) -> Dimensions {
    Dimensions::singleton(self).pow(power)
  }
}

impl One for Dimensions {
  fn one() -> Self {
    Self::default()
  }

  fn is_one(&self) -> bool {
    let tolerances = Tolerances::DEFAULT;
    self.exponents.iter().all(|x| tolerances.exponents_eq(*x, 0.0))
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Dimension::Time => write!(f, "time"),
      Dimension::Length => write!(f, "length"),
      Dimension::Mass => write!(f, "mass"),
      Dimension::ElectricCurrent => write!(f, "current"),
      Dimension::Temperature => write!(f, "temperature"),
      Dimension::AmountOfSubstance => write!(f, "amount"),
      Dimension::LuminousIntensity => write!(f, "intensity"),
    }
  }
}

impl Display for Dimensions {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let tolerances = Tolerances::DEFAULT;
    let mut parts: Vec<String> = Vec::new();
    for (dim, power) in self.components() {
      let power = tolerances.round_exponent(power);
      if power == 0.0 {
        continue;
      }
      if power == 1.0 {
        parts.push(dim.symbol().to_owned());
      } else {
        parts.push(format!("{}^{}", dim.symbol(), power));
      }
    }
    if parts.is_empty() {
      write!(f, "1")
    } else {
      write!(f, "{}", parts.join(" "))
    }
  }
}
