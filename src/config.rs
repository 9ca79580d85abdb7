
//! Numerical tolerances used throughout the unit algebra.
//!
//! Repeated compositions of units (products of quotients of powers,
//! and so on) accumulate floating point error in both exponents and
//! conversion factors. Every comparison that has to forgive that
//! drift reads its epsilon from a [`Tolerances`] value, so callers can
//! tighten or loosen them in one place.

use approx::relative_eq;

/// Collection of every epsilon used by the algebra.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
  /// Dimension exponents are rounded to this many decimal places
  /// before being compared.
  pub dimension_decimals: i32,
  /// Two rounded dimension exponents are equal if they differ by less
  /// than this amount.
  pub dimension_epsilon: f64,
  /// Maximum relative difference between two conversion factors that
  /// are still considered the same factor.
  pub factor_relative_epsilon: f64,
  /// Maximum relative difference between two measured values (after
  /// conversion into a common unit) that are still considered equal.
  pub value_relative_epsilon: f64,
  /// Maximum number of decimal places shown when synthesizing the
  /// symbol of a scaled unit from its factor.
  pub symbol_max_decimals: u32,
  /// A scaled factor counts as "integral" for symbol synthesis if it
  /// is within this distance of an integer.
  pub symbol_tolerance: f64,
}

impl Tolerances {
  pub const DEFAULT: Tolerances = Tolerances {
    dimension_decimals: 3,
    dimension_epsilon: 0.0005,
    factor_relative_epsilon: 1e-12,
    value_relative_epsilon: 1e-9,
    symbol_max_decimals: 9,
    symbol_tolerance: 0.001,
  };

  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_dimension_epsilon(mut self, decimals: i32, epsilon: f64) -> Self {
    self.dimension_decimals = decimals;
    self.dimension_epsilon = epsilon;
    self
  }

  pub fn with_factor_relative_epsilon(mut self, epsilon: f64) -> Self {
    self.factor_relative_epsilon = epsilon;
    self
  }

  pub fn with_value_relative_epsilon(mut self, epsilon: f64) -> Self {
    self.value_relative_epsilon = epsilon;
    self
  }

  pub fn with_symbol_precision(mut self, max_decimals: u32, tolerance: f64) -> Self {
    self.symbol_max_decimals = max_decimals;
    self.symbol_tolerance = tolerance;
    self
  }

  /// Rounds a dimension exponent to `dimension_decimals` places.
  pub fn round_exponent(&self, exponent: f64) -> f64 {
    let scale = 10f64.powi(self.dimension_decimals);
    (exponent * scale).round() / scale
  }

  /// Compares two dimension exponents.
  pub fn exponents_eq(&self, a: f64, b: f64) -> bool {
    (self.round_exponent(a) - self.round_exponent(b)).abs() < self.dimension_epsilon
  }

  /// An integer key for a dimension exponent, such that two exponents
  /// which compare equal under [`Tolerances::exponents_eq`] (after
  /// rounding) produce the same key. Used for hashing.
  pub fn exponent_key(&self, exponent: f64) -> i64 {
    let scale = 10f64.powi(self.dimension_decimals);
    (exponent * scale).round() as i64
  }

  pub fn factors_eq(&self, a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = f64::EPSILON, max_relative = self.factor_relative_epsilon)
  }

  pub fn values_eq(&self, a: f64, b: f64) -> bool {
    // Exact equality first so that infinities compare equal to themselves.
    a == b || relative_eq!(a, b, epsilon = f64::EPSILON, max_relative = self.value_relative_epsilon)
  }
}

impl Default for Tolerances {
  fn default() -> Self {
    Self::DEFAULT
  }
}
