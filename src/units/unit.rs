
use super::compound::CompoundParts;
use super::decomposition::BaseDecomposition;
use super::error::UnitError;
use super::prefix::MetricPrefix;
use super::symbol::{factor_symbol, exponent_symbol};
use crate::config::Tolerances;
use crate::dimension::{Dimension, Dimensions};

use num::pow::Pow;
use tracing::trace;

use std::fmt::{self, Formatter, Display, Debug};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A unit of measure.
///
/// Every unit knows its [`Dimensions`], its base unit (the root of the
/// coherent system it belongs to), and the factor that converts one
/// of this unit into its base unit. Units are immutable, and `Unit`
/// itself is a cheap, shareable handle, so clone freely.
///
/// Two units compare equal if they are the same handle, or if they
/// agree structurally: same dimensions, same conversion factor, and
/// the same decomposition into base units. In particular, a named
/// [`UnitKind::Equivalent`] unit such as hertz equals the unit it
/// names.
#[derive(Clone)]
pub struct Unit {
  inner: Arc<UnitInner>,
}

struct UnitInner {
  symbol: String,
  dimensions: Dimensions,
  conversion_factor: f64,
  // None if this unit is its own base unit.
  base: Option<Unit>,
  decomposition: BaseDecomposition,
  kind: UnitKind,
}

/// The construction that produced a [`Unit`].
#[derive(Clone, Debug)]
pub enum UnitKind {
  /// A base unit. Conversion factor 1, its own base.
  Base,
  /// A metric prefix applied to another unit.
  Prefixed { prefix: MetricPrefix, unit: Unit },
  /// An arbitrary multiple of another unit, e.g. an hour is 3600
  /// seconds.
  Multiple { factor: f64, unit: Unit },
  /// A new name for an existing unit, e.g. hertz for `1/s`.
  Equivalent { unit: Unit },
  Product { lhs: Unit, rhs: Unit },
  Quotient { lhs: Unit, rhs: Unit },
  /// A unit raised to a real power. Fractional powers come out of
  /// square roots.
  Power { unit: Unit, exponent: f64 },
  /// A sequence of progressively finer units of the same dimension,
  /// such as degrees, arcminutes, and arcseconds.
  Compound(CompoundParts),
}

impl Unit {
  fn from_inner(inner: UnitInner) -> Self {
    Self { inner: Arc::new(inner) }
  }

  /// The dimensionless unit "one". It is a base unit with an empty
  /// base decomposition, so multiplying by it changes nothing.
  pub fn one() -> Unit {
    Unit::from_inner(UnitInner {
      symbol: String::new(),
      dimensions: Dimensions::dimensionless(),
      conversion_factor: 1.0,
      base: None,
      decomposition: BaseDecomposition::empty(),
      kind: UnitKind::Base,
    })
  }

  /// A new base unit. `dimension` is `None` for dimensionless base
  /// units such as the radian, which still count as distinct from
  /// "one" and from each other.
  pub fn base(symbol: impl Into<String>, dimension: Option<Dimension>) -> Unit {
    let symbol = symbol.into();
    let dimensions = dimension.map_or_else(Dimensions::dimensionless, Dimensions::singleton);
    Unit::from_inner(UnitInner {
      decomposition: BaseDecomposition::singleton(symbol.clone()),
      symbol,
      dimensions,
      conversion_factor: 1.0,
      base: None,
      kind: UnitKind::Base,
    })
  }

  /// Declares a prefixed unit as the base unit of its dimension, as
  /// the SI does for the kilogram. Returns the pair `(prefixed,
  /// unprefixed)`: the prefixed unit is a base unit, and the
  /// unprefixed unit is defined as a multiple of it.
  pub fn prefixed_base(prefix: MetricPrefix, symbol: &str, dimension: Dimension) -> (Unit, Unit) {
    let base = Unit::base(format!("{}{}", prefix.symbol, symbol), Some(dimension));
    let unprefixed = Unit::multiple(prefix.factor().recip(), &base, Some(symbol));
    (base, unprefixed)
  }

  pub fn prefixed(prefix: MetricPrefix, unit: &Unit) -> Unit {
    Unit::from_inner(UnitInner {
      symbol: format!("{}{}", prefix.symbol, unit.symbol()),
      dimensions: unit.dimensions(),
      conversion_factor: unit.conversion_factor() * prefix.factor(),
      base: Some(unit.base_unit()),
      decomposition: unit.inner.decomposition.clone(),
      kind: UnitKind::Prefixed { prefix, unit: unit.clone() },
    })
  }

  /// `factor` times `unit`. Without an explicit symbol, the symbol is
  /// synthesized from the factor, e.g. "100m".
  pub fn multiple(factor: f64, unit: &Unit, symbol: Option<&str>) -> Unit {
    let symbol = symbol.map_or_else(
      || format!("{}{}", factor_symbol(factor, &Tolerances::DEFAULT), grouped_symbol(unit)),
      str::to_owned,
    );
    Unit::from_inner(UnitInner {
      symbol,
      dimensions: unit.dimensions(),
      conversion_factor: unit.conversion_factor() * factor,
      base: Some(unit.base_unit()),
      decomposition: unit.inner.decomposition.clone(),
      kind: UnitKind::Multiple { factor, unit: unit.clone() },
    })
  }

  /// A new symbol for an existing unit.
  pub fn equivalent(symbol: impl Into<String>, unit: &Unit) -> Unit {
    Unit::from_inner(UnitInner {
      symbol: symbol.into(),
      dimensions: unit.dimensions(),
      conversion_factor: unit.conversion_factor(),
      base: Some(unit.base_unit()),
      decomposition: unit.inner.decomposition.clone(),
      kind: UnitKind::Equivalent { unit: unit.clone() },
    })
  }

  pub fn product(lhs: &Unit, rhs: &Unit) -> Unit {
    let (conversion_factor, base) = if lhs.is_base_unit() && rhs.is_base_unit() {
      (1.0, None)
    } else {
      let base = Unit::product(&lhs.base_unit(), &rhs.base_unit());
      (lhs.conversion_factor() * rhs.conversion_factor(), Some(base))
    };
    Unit::from_inner(UnitInner {
      symbol: product_symbol(lhs, rhs),
      dimensions: lhs.dimensions() * rhs.dimensions(),
      conversion_factor,
      base,
      decomposition: lhs.inner.decomposition.product(&rhs.inner.decomposition),
      kind: UnitKind::Product { lhs: lhs.clone(), rhs: rhs.clone() },
    })
  }

  pub fn quotient(lhs: &Unit, rhs: &Unit) -> Unit {
    let (conversion_factor, base) = if lhs.is_base_unit() && rhs.is_base_unit() {
      (1.0, None)
    } else {
      let base = Unit::quotient(&lhs.base_unit(), &rhs.base_unit());
      (lhs.conversion_factor() / rhs.conversion_factor(), Some(base))
    };
    Unit::from_inner(UnitInner {
      symbol: quotient_symbol(lhs, rhs),
      dimensions: lhs.dimensions() / rhs.dimensions(),
      conversion_factor,
      base,
      decomposition: lhs.inner.decomposition.quotient(&rhs.inner.decomposition),
      kind: UnitKind::Quotient { lhs: lhs.clone(), rhs: rhs.clone() },
    })
  }

  pub fn power(unit: &Unit, exponent: f64) -> Unit {
    let (conversion_factor, base) = if unit.is_base_unit() {
      (1.0, None)
    } else {
      let base = Unit::power(&unit.base_unit(), exponent);
      (unit.conversion_factor().powf(exponent), Some(base))
    };
    Unit::from_inner(UnitInner {
      symbol: format!("{}^{}", grouped_symbol(unit), exponent_symbol(exponent)),
      dimensions: unit.dimensions().pow(exponent),
      conversion_factor,
      base,
      decomposition: unit.inner.decomposition.power(exponent),
      kind: UnitKind::Power { unit: unit.clone(), exponent },
    })
  }

  /// A compound unit made of `partial_units`, each strictly larger
  /// than the next. `extra_error_units` are finer units, beyond the
  /// last partial unit, which may be used to display error bars.
  pub fn compound(
    partial_units: Vec<Unit>,
    extra_error_units: Vec<Unit>,
    display_sign: bool,
  ) -> Result<Unit, UnitError> {
    let parts = CompoundParts::new(partial_units, extra_error_units, display_sign)?;
    let first = parts.partial_units()[0].clone();
    let symbol = parts.partial_units().iter().map(Unit::symbol).collect::<Vec<_>>().join(" ");
    Ok(Unit::from_inner(UnitInner {
      symbol,
      dimensions: first.dimensions(),
      conversion_factor: first.conversion_factor(),
      base: Some(first.base_unit()),
      decomposition: first.inner.decomposition.clone(),
      kind: UnitKind::Compound(parts),
    }))
  }

  pub fn symbol(&self) -> &str {
    &self.inner.symbol
  }

  pub fn dimensions(&self) -> Dimensions {
    self.inner.dimensions
  }

  /// The amount of the base unit that is equal to one of this unit.
  pub fn conversion_factor(&self) -> f64 {
    self.inner.conversion_factor
  }

  pub fn is_base_unit(&self) -> bool {
    self.inner.base.is_none()
  }

  pub fn base_unit(&self) -> Unit {
    match &self.inner.base {
      None => self.clone(),
      Some(base) => base.clone(),
    }
  }

  pub fn kind(&self) -> &UnitKind {
    &self.inner.kind
  }

  pub fn decomposition(&self) -> &BaseDecomposition {
    &self.inner.decomposition
  }

  pub fn compound_parts(&self) -> Option<&CompoundParts> {
    match &self.inner.kind {
      UnitKind::Compound(parts) => Some(parts),
      _ => None,
    }
  }

  /// The units a display layer should render this unit as: the
  /// partial units of a compound unit, or just this unit otherwise.
  pub fn display_components(&self) -> Vec<Unit> {
    match self.compound_parts() {
      Some(parts) => parts.partial_units().to_vec(),
      None => vec![self.clone()],
    }
  }

  pub fn is_same_handle(&self, other: &Unit) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }

  pub fn structurally_eq_with(&self, other: &Unit, tolerances: &Tolerances) -> bool {
    self.is_same_handle(other) || (
      self.dimensions().approx_eq_with(&other.dimensions(), tolerances) &&
        tolerances.factors_eq(self.conversion_factor(), other.conversion_factor()) &&
        self.inner.decomposition.approx_eq_with(&other.inner.decomposition, tolerances)
    )
  }

  /// Checks that a value in `self` may be expressed in `target`.
  pub fn check_convertible(&self, target: &Unit) -> Result<(), UnitError> {
    if self.dimensions() != target.dimensions() {
      return Err(UnitError::DifferentDimensionality {
        from: self.to_string(),
        to: target.to_string(),
        from_dimensions: self.dimensions(),
        to_dimensions: target.dimensions(),
      });
    }
    if self.base_unit() != target.base_unit() {
      return Err(UnitError::NoCommonBaseUnit {
        from: self.to_string(),
        to: target.to_string(),
      });
    }
    Ok(())
  }

  /// Converts a scalar quantity from this unit into `target`.
  pub fn convert_value(&self, value: f64, target: &Unit) -> Result<f64, UnitError> {
    if self.is_same_handle(target) {
      return Ok(value);
    }
    self.check_convertible(target)?;
    let converted = value * self.conversion_factor() / target.conversion_factor();
    trace!(from = %self, to = %target, value, converted, "converted between units");
    Ok(converted)
  }

  /// Converts a scalar quantity from this unit into its base unit.
  pub fn to_base(&self, value: f64) -> f64 {
    value * self.conversion_factor()
  }

  /// Converts a scalar quantity from the base unit into this unit.
  pub fn from_base(&self, value: f64) -> f64 {
    value / self.conversion_factor()
  }
}

fn is_composite(unit: &Unit) -> bool {
  matches!(
    unit.kind(),
    UnitKind::Product { .. } | UnitKind::Quotient { .. } | UnitKind::Power { .. } | UnitKind::Compound(_),
  )
}

fn grouped_symbol(unit: &Unit) -> String {
  if is_composite(unit) {
    format!("({})", unit.symbol())
  } else {
    unit.symbol().to_owned()
  }
}

fn product_symbol(lhs: &Unit, rhs: &Unit) -> String {
  match (lhs.symbol().is_empty(), rhs.symbol().is_empty()) {
    (true, _) => rhs.symbol().to_owned(),
    (false, true) => lhs.symbol().to_owned(),
    (false, false) => format!("{}·{}", lhs.symbol(), rhs.symbol()),
  }
}

fn quotient_symbol(lhs: &Unit, rhs: &Unit) -> String {
  let numerator = if lhs.symbol().is_empty() { "1".to_owned() } else { lhs.symbol().to_owned() };
  if rhs.symbol().is_empty() {
    numerator
  } else {
    format!("{}/{}", numerator, grouped_symbol(rhs))
  }
}

impl PartialEq for Unit {
  fn eq(&self, other: &Self) -> bool {
    self.structurally_eq_with(other, &Tolerances::DEFAULT)
  }
}

impl Eq for Unit {}

impl Hash for Unit {
  fn hash<H: Hasher>(&self, state: &mut H) {
    // Dimensions and factor are compared with tolerances and cannot
    // be hashed consistently; the decomposition determines the
    // dimensions anyway.
    self.inner.decomposition.hash_with(&Tolerances::DEFAULT, state);
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.symbol().is_empty() {
      write!(f, "1")
    } else {
      write!(f, "{}", self.symbol())
    }
  }
}

impl Debug for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_struct("Unit")
      .field("symbol", &self.inner.symbol)
      .field("dimensions", &self.inner.dimensions)
      .field("conversion_factor", &self.inner.conversion_factor)
      .field("is_base_unit", &self.is_base_unit())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::test_utils::{metres, seconds, minutes, kilometres};

  use approx::assert_relative_eq;

  use std::collections::HashSet;

  #[test]
  fn test_base_unit_is_its_own_base() {
    let m = metres();
    assert!(m.is_base_unit());
    assert_eq!(m.conversion_factor(), 1.0);
    assert!(m.base_unit().is_same_handle(&m));
    assert_eq!(m.dimensions(), Dimensions::singleton(Dimension::Length));
  }

  #[test]
  fn test_prefixed_unit() {
    let km = kilometres();
    assert_eq!(km.symbol(), "km");
    assert_eq!(km.conversion_factor(), 1000.0);
    assert!(!km.is_base_unit());
    assert_eq!(km.base_unit(), metres());
  }

  #[test]
  fn test_prefixed_base_reparents_the_unprefixed_unit() {
    let (kg, g) = Unit::prefixed_base(MetricPrefix::KILO, "g", Dimension::Mass);
    assert!(kg.is_base_unit());
    assert_eq!(kg.symbol(), "kg");
    assert!(!g.is_base_unit());
    assert_eq!(g.symbol(), "g");
    assert!(g.base_unit().is_same_handle(&kg));
    assert_relative_eq!(g.conversion_factor(), 0.001, max_relative = 1e-12);
    let mg = Unit::prefixed(MetricPrefix::MILLI, &g);
    assert_relative_eq!(mg.conversion_factor(), 1e-6, max_relative = 1e-12);
    assert!(mg.base_unit().is_same_handle(&kg));
  }

  #[test]
  fn test_multiple_symbol_synthesis() {
    let m = metres();
    assert_eq!(Unit::multiple(100.0, &m, None).symbol(), "100m");
    assert_eq!(Unit::multiple(100.12310001, &m, None).symbol(), "100.1231m");
    assert_eq!(Unit::multiple(60.0, &seconds(), Some("min")).symbol(), "min");
  }

  #[test]
  fn test_multiple_of_composite_unit_is_grouped() {
    let square_metre = Unit::power(&metres(), 2.0);
    let hectare = Unit::multiple(10000.0, &square_metre, None);
    assert_eq!(hectare.symbol(), "10000(m^2)");
    assert_eq!(Unit::multiple(3.6, &Unit::quotient(&kilometres(), &minutes()), None).symbol(), "3.6(km/min)");
  }

  #[test]
  fn test_product_of_base_units_is_a_base_unit() {
    let unit = Unit::product(&metres(), &seconds());
    assert!(unit.is_base_unit());
    assert_eq!(unit.conversion_factor(), 1.0);
    assert_eq!(unit.symbol(), "m·s");
  }

  #[test]
  fn test_quotient_of_derived_units_combines_bases() {
    let unit = Unit::quotient(&kilometres(), &minutes());
    assert!(!unit.is_base_unit());
    assert_relative_eq!(unit.conversion_factor(), 1000.0 / 60.0, max_relative = 1e-12);
    assert_eq!(unit.base_unit(), Unit::quotient(&metres(), &seconds()));
    assert!(unit.base_unit().is_base_unit());
    assert_eq!(unit.symbol(), "km/min");
  }

  #[test]
  fn test_fractional_power() {
    let area = Unit::power(&kilometres(), 2.0);
    assert_relative_eq!(area.conversion_factor(), 1e6, max_relative = 1e-12);
    let root = Unit::power(&area, 0.5);
    assert_relative_eq!(root.conversion_factor(), 1000.0, max_relative = 1e-12);
    assert_eq!(root, kilometres());
    assert_eq!(root.symbol(), "(km^2)^0.5");
  }

  #[test]
  fn test_equivalent_unit_equals_its_target() {
    let per_second = Unit::quotient(&Unit::one(), &seconds());
    let hertz = Unit::equivalent("Hz", &per_second);
    assert_eq!(hertz.symbol(), "Hz");
    assert_eq!(per_second.symbol(), "1/s");
    assert_eq!(hertz, per_second);
    assert!(!hertz.is_same_handle(&per_second));
  }

  #[test]
  fn test_structurally_identical_units_are_equal_and_hash_alike() {
    let a = Unit::quotient(&metres(), &seconds());
    let b = Unit::quotient(&metres(), &seconds());
    assert_eq!(a, b);
    let set: HashSet<Unit> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_dimensionless_base_units_are_distinct() {
    let radian = Unit::base("rad", None);
    assert_ne!(radian, Unit::one());
    assert_eq!(radian.dimensions(), Unit::one().dimensions());
  }

  #[test]
  fn test_units_with_different_bases_are_unequal() {
    let metre = metres();
    let other_length = Unit::base("ell", Some(Dimension::Length));
    assert_ne!(metre, other_length);
    assert_eq!(
      metre.convert_value(1.0, &other_length),
      Err(UnitError::NoCommonBaseUnit { from: "m".to_owned(), to: "ell".to_owned() }),
    );
  }

  #[test]
  fn test_convert_value() {
    assert_relative_eq!(kilometres().convert_value(2.5, &metres()).unwrap(), 2500.0, max_relative = 1e-12);
    assert_relative_eq!(minutes().convert_value(90.0, &seconds()).unwrap(), 5400.0, max_relative = 1e-12);
    let err = metres().convert_value(1.0, &seconds()).unwrap_err();
    assert!(matches!(err, UnitError::DifferentDimensionality { .. }));
  }

  #[test]
  fn test_one_is_neutral() {
    let unit = Unit::product(&Unit::one(), &metres());
    assert_eq!(unit, metres());
    assert_eq!(unit.symbol(), "m");
  }
}
