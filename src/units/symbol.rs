
//! Symbol synthesis for units built from a bare numerical factor.

use crate::config::Tolerances;

/// Renders `factor` with the fewest decimal places (at most
/// `symbol_max_decimals`) that represent it to within
/// `symbol_tolerance`. Factors that never become integral under that
/// rule fall back to the full float representation.
///
/// For example, `100.0` renders as `"100"` and `100.12310001` as
/// `"100.1231"`.
pub fn factor_symbol(factor: f64, tolerances: &Tolerances) -> String {
  for decimals in 0..=tolerances.symbol_max_decimals {
    let scaled = factor * 10f64.powi(decimals as i32);
    if (scaled - scaled.round()).abs() < tolerances.symbol_tolerance {
      return format!("{:.*}", decimals as usize, factor);
    }
  }
  factor.to_string()
}

/// Renders an exponent for a power-unit symbol, e.g. "m^2" or "s^0.5".
pub fn exponent_symbol(exponent: f64) -> String {
  factor_symbol(exponent, &Tolerances::DEFAULT)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_integral_factor() {
    assert_eq!(factor_symbol(100.0, &Tolerances::DEFAULT), "100");
    assert_eq!(factor_symbol(3600.0, &Tolerances::DEFAULT), "3600");
  }

  #[test]
  fn test_fractional_factor_rounds_at_nine_decimals() {
    assert_eq!(factor_symbol(100.12310001, &Tolerances::DEFAULT), "100.1231");
    assert_eq!(factor_symbol(0.25, &Tolerances::DEFAULT), "0.25");
  }

  #[test]
  fn test_negative_factor() {
    assert_eq!(factor_symbol(-2.5, &Tolerances::DEFAULT), "-2.5");
  }

  #[test]
  fn test_limited_precision_falls_back_to_float() {
    let tolerances = Tolerances::DEFAULT.with_symbol_precision(2, 0.001);
    assert_eq!(factor_symbol(1.23456, &tolerances), "1.23456");
  }

  #[test]
  fn test_exponent_symbol() {
    assert_eq!(exponent_symbol(2.0), "2");
    assert_eq!(exponent_symbol(-1.0), "-1");
    assert_eq!(exponent_symbol(0.5), "0.5");
  }
}
