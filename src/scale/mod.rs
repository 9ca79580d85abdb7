
//! Measurement scales.
//!
//! A scale says what a number *means*, beyond its unit. Nominal and
//! ordinal scales are finite label sets. Interval scales have a unit
//! but an arbitrary zero, and ratio scales have a unit and an
//! absolute zero. An interval scale can be anchored to a ratio scale
//! by an offset, which is what makes Celsius convertible to Kelvin,
//! and (through Kelvin) to every other anchored temperature scale.

pub mod error;
pub mod table;

pub use error::ScaleError;

use crate::config::Tolerances;
use crate::measure::Measure;
use crate::units::Unit;

use std::fmt::{self, Formatter, Display, Debug};
use std::sync::Arc;

/// A measurement scale. Like [`Unit`], this is a cheap, shareable
/// handle around immutable data.
#[derive(Clone)]
pub struct Scale {
  inner: Arc<ScaleInner>,
}

struct ScaleInner {
  symbol: String,
  kind: ScaleKind,
}

#[derive(Clone, Debug)]
pub enum ScaleKind {
  /// Unordered labels.
  Nominal { labels: Vec<String> },
  /// Labels ordered by their position in `labels`.
  Ordinal { labels: Vec<String> },
  Interval { unit: Unit, anchor: Option<RatioAnchor> },
  Ratio { unit: Unit },
}

/// Links an interval scale to a ratio scale. `offset` is the value,
/// on the interval scale and in the interval scale's unit, of the
/// ratio scale's absolute zero. For Celsius that is -273.15 °C.
#[derive(Clone, Debug)]
pub struct RatioAnchor {
  ratio_scale: Scale,
  offset: Measure,
}

impl Scale {
  fn from_kind(symbol: impl Into<String>, kind: ScaleKind) -> Self {
    Self {
      inner: Arc::new(ScaleInner { symbol: symbol.into(), kind }),
    }
  }

  pub fn nominal<S: Into<String>>(symbol: impl Into<String>, labels: impl IntoIterator<Item = S>) -> Scale {
    let labels = labels.into_iter().map(Into::into).collect();
    Scale::from_kind(symbol, ScaleKind::Nominal { labels })
  }

  pub fn ordinal<S: Into<String>>(symbol: impl Into<String>, labels: impl IntoIterator<Item = S>) -> Scale {
    let labels = labels.into_iter().map(Into::into).collect();
    Scale::from_kind(symbol, ScaleKind::Ordinal { labels })
  }

  pub fn ratio(symbol: impl Into<String>, unit: &Unit) -> Scale {
    Scale::from_kind(symbol, ScaleKind::Ratio { unit: unit.clone() })
  }

  /// An interval scale with no ratio anchor. Values on it can never be
  /// converted to any other scale.
  pub fn interval(symbol: impl Into<String>, unit: &Unit) -> Scale {
    Scale::from_kind(symbol, ScaleKind::Interval { unit: unit.clone(), anchor: None })
  }

  /// An interval scale anchored to `ratio_scale`. The offset is
  /// converted into `unit` if it was given in some other unit.
  pub fn anchored_interval(
    symbol: impl Into<String>,
    unit: &Unit,
    ratio_scale: &Scale,
    offset: Measure,
  ) -> Result<Scale, crate::measure::MeasureError> {
    if !matches!(ratio_scale.kind(), ScaleKind::Ratio { .. }) {
      return Err(ScaleError::NotARatioScale { scale: ratio_scale.to_string() }.into());
    }
    let offset = offset.convert_to_unit(unit)?;
    let anchor = RatioAnchor { ratio_scale: ratio_scale.clone(), offset };
    Ok(Scale::from_kind(symbol, ScaleKind::Interval { unit: unit.clone(), anchor: Some(anchor) }))
  }

  pub fn symbol(&self) -> &str {
    &self.inner.symbol
  }

  pub fn kind(&self) -> &ScaleKind {
    &self.inner.kind
  }

  /// The unit of an interval or ratio scale.
  pub fn unit(&self) -> Option<&Unit> {
    match self.kind() {
      ScaleKind::Interval { unit, .. } | ScaleKind::Ratio { unit } => Some(unit),
      ScaleKind::Nominal { .. } | ScaleKind::Ordinal { .. } => None,
    }
  }

  pub(crate) fn numeric_unit(&self) -> Result<&Unit, ScaleError> {
    self.unit().ok_or_else(|| ScaleError::LabelScale { scale: self.to_string() })
  }

  pub fn labels(&self) -> Option<&[String]> {
    match self.kind() {
      ScaleKind::Nominal { labels } | ScaleKind::Ordinal { labels } => Some(labels),
      ScaleKind::Interval { .. } | ScaleKind::Ratio { .. } => None,
    }
  }

  /// Nominal and ordinal scales carry labels rather than numbers.
  pub fn is_label_scale(&self) -> bool {
    self.labels().is_some()
  }

  pub fn is_ordinal(&self) -> bool {
    matches!(self.kind(), ScaleKind::Ordinal { .. })
  }

  pub fn is_ratio(&self) -> bool {
    matches!(self.kind(), ScaleKind::Ratio { .. })
  }

  pub fn label_index(&self, label: &str) -> Option<usize> {
    self.labels()?.iter().position(|l| l == label)
  }

  pub fn anchor(&self) -> Option<&RatioAnchor> {
    match self.kind() {
      ScaleKind::Interval { anchor, .. } => anchor.as_ref(),
      _ => None,
    }
  }

  /// The ratio scale this scale converts through: itself for a ratio
  /// scale, or the anchor of an interval scale.
  pub fn ratio_scale(&self) -> Result<Scale, ScaleError> {
    match self.kind() {
      ScaleKind::Ratio { .. } => Ok(self.clone()),
      ScaleKind::Interval { anchor: Some(anchor), .. } => Ok(anchor.ratio_scale.clone()),
      ScaleKind::Interval { anchor: None, .. } => {
        Err(ScaleError::NotLinkedToRatioScale { scale: self.to_string() })
      }
      ScaleKind::Nominal { .. } | ScaleKind::Ordinal { .. } => {
        Err(ScaleError::LabelScale { scale: self.to_string() })
      }
    }
  }

  /// The offset of an anchored interval scale, or zero for a ratio
  /// scale.
  pub fn offset_value(&self) -> f64 {
    self.anchor().map_or(0.0, |anchor| anchor.offset.scalar_value())
  }

  pub fn is_same_handle(&self, other: &Scale) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl RatioAnchor {
  pub fn ratio_scale(&self) -> &Scale {
    &self.ratio_scale
  }

  pub fn offset(&self) -> &Measure {
    &self.offset
  }
}

fn kinds_eq(a: &ScaleKind, b: &ScaleKind) -> bool {
  match (a, b) {
    (ScaleKind::Nominal { labels: a }, ScaleKind::Nominal { labels: b }) => a == b,
    (ScaleKind::Ordinal { labels: a }, ScaleKind::Ordinal { labels: b }) => a == b,
    (ScaleKind::Ratio { unit: a }, ScaleKind::Ratio { unit: b }) => a == b,
    (ScaleKind::Interval { unit: unit_a, anchor: anchor_a }, ScaleKind::Interval { unit: unit_b, anchor: anchor_b }) => {
      unit_a == unit_b && match (anchor_a, anchor_b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
          a.ratio_scale == b.ratio_scale
            && Tolerances::DEFAULT.values_eq(a.offset.scalar_value(), b.offset.scalar_value())
        }
        _ => false,
      }
    }
    _ => false,
  }
}

impl PartialEq for Scale {
  fn eq(&self, other: &Self) -> bool {
    self.is_same_handle(other) || (self.symbol() == other.symbol() && kinds_eq(self.kind(), other.kind()))
  }
}

impl Display for Scale {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl Debug for Scale {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_struct("Scale")
      .field("symbol", &self.inner.symbol)
      .field("kind", &self.inner.kind)
      .finish()
  }
}
