
//! Conversion of measures between units and between scales.
//!
//! Interval scales never convert directly into one another. Each one
//! knows only its offset from a ratio scale, and a conversion between
//! two interval scales goes through that ratio scale in two hops.

use super::{Measure, MeasureError};
use crate::scale::{Scale, ScaleError};
use crate::units::{Unit, UnitError};

use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HopDirection {
  ToRatioScale,
  FromRatioScale,
}

/// A single linear step of a scale conversion.
#[derive(Clone, Copy, Debug)]
pub struct ScaleHop<'a> {
  pub from: &'a Scale,
  pub to: &'a Scale,
  pub direction: HopDirection,
  pub input: f64,
  pub output: f64,
}

/// Receives every hop performed by
/// [`Measure::convert_to_scale_observed`]. Any `FnMut(&ScaleHop)`
/// closure is an observer.
pub trait ConversionObserver {
  fn on_hop(&mut self, hop: &ScaleHop<'_>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {
  fn on_hop(&mut self, _hop: &ScaleHop<'_>) {}
}

impl<F> ConversionObserver for F
where F: FnMut(&ScaleHop<'_>) {
  fn on_hop(&mut self, hop: &ScaleHop<'_>) {
    self(hop)
  }
}

impl Measure {
  /// Expresses a plain measure in another unit. Scale-bound measures
  /// must be converted with [`Measure::convert_to_scale`] instead.
  pub fn convert_to_unit(&self, target: &Unit) -> Result<Measure, MeasureError> {
    if let Some(scale) = &self.scale {
      return Err(ScaleError::ScaleToUnit { scale: scale.to_string() }.into());
    }
    let value = self.unit.convert_value(self.scalar_value(), target)?;
    let error = match self.error {
      None => None,
      Some(error) => Some(self.unit.convert_value(error, target)?.abs()),
    };
    Ok(Measure::from_parts(value, error, target.clone(), None))
  }

  pub fn convert_to_scale(&self, target: &Scale) -> Result<Measure, MeasureError> {
    self.convert_to_scale_observed(target, &mut NoopObserver)
  }

  /// As [`Measure::convert_to_scale`], reporting each hop to
  /// `observer`. Converting to the measure's own scale performs no
  /// hops at all.
  pub fn convert_to_scale_observed<O>(&self, target: &Scale, observer: &mut O) -> Result<Measure, MeasureError>
  where O: ConversionObserver + ?Sized {
    let Some(source) = &self.scale else {
      return Err(UnitError::UnitToScale { unit: self.unit.to_string() }.into());
    };
    if source == target {
      return Ok(self.clone());
    }
    for scale in [source, target] {
      if scale.is_label_scale() {
        return Err(ScaleError::LabelScale { scale: scale.to_string() }.into());
      }
    }

    let ratio_scale = source.ratio_scale()?;
    if target.ratio_scale()? != ratio_scale {
      return Err(ScaleError::NoCommonRatioScale { from: source.to_string(), to: target.to_string() }.into());
    }
    let ratio_unit = ratio_scale.numeric_unit()?;
    for unit in [source.numeric_unit()?, target.numeric_unit()?] {
      if unit.dimensions() != ratio_unit.dimensions() {
        return Err(ScaleError::DifferentDimensionality { from: source.to_string(), to: target.to_string() }.into());
      }
      if unit.base_unit() != ratio_unit.base_unit() {
        return Err(UnitError::NoCommonBaseUnit { from: unit.to_string(), to: ratio_unit.to_string() }.into());
      }
    }

    if *target == ratio_scale {
      self.hop(source, target, HopDirection::ToRatioScale, observer)
    } else if *source == ratio_scale {
      self.hop(source, target, HopDirection::FromRatioScale, observer)
    } else {
      let pivot = self.convert_to_scale_observed(&ratio_scale, observer)?;
      pivot.convert_to_scale_observed(target, observer)
    }
  }

  // One of the two scales is a ratio scale, whose offset is zero, so
  // the same formula serves both directions.
  fn hop<O>(&self, source: &Scale, target: &Scale, direction: HopDirection, observer: &mut O) -> Result<Measure, MeasureError>
  where O: ConversionObserver + ?Sized {
    let source_factor = source.numeric_unit()?.conversion_factor();
    let target_factor = target.numeric_unit()?.conversion_factor();
    let input = self.scalar_value();
    let output = (input - source.offset_value()) * source_factor / target_factor + target.offset_value();
    trace!(from = %source, to = %target, ?direction, input, output, "scale hop");
    observer.on_hop(&ScaleHop { from: source, to: target, direction, input, output });

    let mut result = Measure::on_scale(output, target)?;
    // Errors are differences, so the offsets do not apply.
    result.error = self.error.map(|error| (error * source_factor / target_factor).abs());
    Ok(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dimension::Dimension;
  use crate::scale::table::{
    KELVIN_SCALE, CELSIUS_SCALE, FAHRENHEIT_SCALE, REAUMUR_SCALE, RANKINE_SCALE,
    MAGNITUDE_SCALE, SPECTRAL_CLASS_SCALE,
  };
  use crate::units::table::{
    KELVIN, METRE, KILOMETRE, SECOND, HOUR, DAY, PARSEC, LIGHT_YEAR, GRAM, KILOGRAM,
    DEGREE, RADIAN, ARCSECOND, JOULE, NEWTON,
  };

  use approx::{assert_abs_diff_eq, assert_relative_eq};

  fn hop_counter(count: &mut usize) -> impl FnMut(&ScaleHop<'_>) + '_ {
    move |_hop: &ScaleHop<'_>| *count += 1
  }

  #[test]
  fn test_unit_round_trip() {
    let pairs = [
      (&*KILOMETRE, &*METRE),
      (&*HOUR, &*SECOND),
      (&*DAY, &*HOUR),
      (&*PARSEC, &*LIGHT_YEAR),
      (&*GRAM, &*KILOGRAM),
      (&*ARCSECOND, &*RADIAN),
    ];
    for (u1, u2) in pairs {
      for value in [0.0, 1.0, -2.5, 1234.5678, 1e-9] {
        let m = Measure::new(value, u1);
        let back = m.convert_to_unit(u2).unwrap().convert_to_unit(u1).unwrap();
        assert_relative_eq!(back.scalar_value(), value, max_relative = 1e-12);
        assert_eq!(back.unit(), u1);
      }
    }
  }

  #[test]
  fn test_unit_conversion_scales_errors() {
    let m = Measure::new(2.0, &KILOMETRE).with_error(0.1).unwrap();
    let converted = m.convert_to_unit(&METRE).unwrap();
    assert_relative_eq!(converted.scalar_value(), 2000.0, max_relative = 1e-12);
    assert_relative_eq!(converted.error().unwrap(), 100.0, max_relative = 1e-12);
  }

  #[test]
  fn test_dimensional_rejection() {
    let pairs = [(&*METRE, &*SECOND), (&*KILOGRAM, &*METRE), (&*JOULE, &*NEWTON), (&*DEGREE, &*SECOND)];
    for (from, to) in pairs {
      let err = Measure::new(1.0, from).convert_to_unit(to).unwrap_err();
      assert!(
        matches!(err, MeasureError::Unit(UnitError::DifferentDimensionality { .. })),
        "{} -> {}: {:?}", from, to, err,
      );
    }
  }

  #[test]
  fn test_scale_bound_measure_cannot_convert_to_unit() {
    let m = Measure::on_scale(20.0, &CELSIUS_SCALE).unwrap();
    assert_eq!(
      m.convert_to_unit(&KELVIN).unwrap_err(),
      ScaleError::ScaleToUnit { scale: "°C".to_owned() }.into(),
    );
  }

  #[test]
  fn test_plain_measure_cannot_convert_to_scale() {
    let m = Measure::new(20.0, &KELVIN);
    assert_eq!(
      m.convert_to_scale(&KELVIN_SCALE).unwrap_err(),
      UnitError::UnitToScale { unit: "K".to_owned() }.into(),
    );
  }

  #[test]
  fn test_kelvin_celsius_round_trip() {
    let zero = Measure::on_scale(0.0, &KELVIN_SCALE).unwrap();
    let celsius = zero.convert_to_scale(&CELSIUS_SCALE).unwrap();
    assert_abs_diff_eq!(celsius.scalar_value(), -273.15, epsilon = 1e-9);
    let back = celsius.convert_to_scale(&KELVIN_SCALE).unwrap();
    assert_abs_diff_eq!(back.scalar_value(), 0.0, epsilon = 1e-9);
    assert!(back.scale().unwrap().is_same_handle(&KELVIN_SCALE));
  }

  #[test]
  fn test_interval_scale_round_trips() {
    let scales = [&*CELSIUS_SCALE, &*FAHRENHEIT_SCALE, &*REAUMUR_SCALE, &*RANKINE_SCALE];
    for s1 in scales {
      for s2 in scales {
        let m = Measure::on_scale(451.0, s1).unwrap();
        let back = m.convert_to_scale(s2).unwrap().convert_to_scale(s1).unwrap();
        assert_abs_diff_eq!(back.scalar_value(), 451.0, epsilon = 1e-9);
      }
    }
  }

  #[test]
  fn test_pivot_reaumur_to_fahrenheit() {
    let m = Measure::on_scale(100.0, &REAUMUR_SCALE).unwrap();
    let f = m.convert_to_scale(&FAHRENHEIT_SCALE).unwrap();
    assert_abs_diff_eq!(f.scalar_value(), 257.0, epsilon = 1e-6);
    assert_eq!(f.unit().symbol(), "°F");
  }

  #[test]
  fn test_familiar_temperatures() {
    let boiling = Measure::on_scale(100.0, &CELSIUS_SCALE).unwrap();
    assert_abs_diff_eq!(boiling.convert_to_scale(&FAHRENHEIT_SCALE).unwrap().scalar_value(), 212.0, epsilon = 1e-9);
    assert_abs_diff_eq!(boiling.convert_to_scale(&KELVIN_SCALE).unwrap().scalar_value(), 373.15, epsilon = 1e-9);
    assert_abs_diff_eq!(boiling.convert_to_scale(&RANKINE_SCALE).unwrap().scalar_value(), 671.67, epsilon = 1e-9);
    let minus_forty = Measure::on_scale(-40.0, &FAHRENHEIT_SCALE).unwrap();
    assert_abs_diff_eq!(minus_forty.convert_to_scale(&CELSIUS_SCALE).unwrap().scalar_value(), -40.0, epsilon = 1e-9);
  }

  #[test]
  fn test_scale_conversion_scales_error_without_offset() {
    let m = Measure::on_scale(20.0, &CELSIUS_SCALE).unwrap().with_error(0.5).unwrap();
    let f = m.convert_to_scale(&FAHRENHEIT_SCALE).unwrap();
    assert_abs_diff_eq!(f.scalar_value(), 68.0, epsilon = 1e-9);
    assert_abs_diff_eq!(f.error().unwrap(), 0.9, epsilon = 1e-12);

    let k = Measure::on_scale(300.0, &KELVIN_SCALE).unwrap().with_error(1.0).unwrap();
    let c = k.convert_to_scale(&CELSIUS_SCALE).unwrap();
    assert_abs_diff_eq!(c.error().unwrap(), 1.0, epsilon = 1e-12);
  }

  #[test]
  fn test_identity_conversion_performs_no_hops() {
    let m = Measure::on_scale(25.0, &CELSIUS_SCALE).unwrap().with_error(0.1).unwrap();
    let mut count = 0;
    let same = m.convert_to_scale_observed(&CELSIUS_SCALE, &mut hop_counter(&mut count)).unwrap();
    assert_eq!(count, 0);
    assert_eq!(same.scalar_value(), 25.0);
    assert_eq!(same.error(), Some(0.1));
    assert_eq!(same, m);
  }

  #[test]
  fn test_hop_counts() {
    let m = Measure::on_scale(25.0, &CELSIUS_SCALE).unwrap();

    let mut count = 0;
    m.convert_to_scale_observed(&KELVIN_SCALE, &mut hop_counter(&mut count)).unwrap();
    assert_eq!(count, 1);

    let mut hops = Vec::new();
    m.convert_to_scale_observed(&FAHRENHEIT_SCALE, &mut |hop: &ScaleHop<'_>| {
      hops.push((hop.from.symbol().to_owned(), hop.to.symbol().to_owned(), hop.direction));
    }).unwrap();
    assert_eq!(hops, vec![
      ("°C".to_owned(), "K".to_owned(), HopDirection::ToRatioScale),
      ("K".to_owned(), "°F".to_owned(), HopDirection::FromRatioScale),
    ]);
  }

  #[test]
  fn test_unlinked_scale_cannot_convert() {
    let m = Measure::on_scale(4.5, &MAGNITUDE_SCALE).unwrap();
    assert_eq!(
      m.convert_to_scale(&KELVIN_SCALE).unwrap_err(),
      ScaleError::NotLinkedToRatioScale { scale: "mag".to_owned() }.into(),
    );
  }

  #[test]
  fn test_no_common_ratio_scale() {
    let other_ratio = Scale::ratio("K*", &KELVIN);
    let other_interval = Scale::anchored_interval("°C*", &KELVIN, &other_ratio, Measure::new(-273.15, &KELVIN)).unwrap();
    let m = Measure::on_scale(10.0, &CELSIUS_SCALE).unwrap();
    assert_eq!(
      m.convert_to_scale(&other_interval).unwrap_err(),
      ScaleError::NoCommonRatioScale { from: "°C".to_owned(), to: "°C*".to_owned() }.into(),
    );
  }

  #[test]
  fn test_scale_dimension_mismatch() {
    let bogus = Scale::anchored_interval("bogus", &METRE, &KELVIN_SCALE, Measure::new(0.0, &METRE)).unwrap();
    let m = Measure::on_scale(10.0, &CELSIUS_SCALE).unwrap();
    assert_eq!(
      m.convert_to_scale(&bogus).unwrap_err(),
      ScaleError::DifferentDimensionality { from: "°C".to_owned(), to: "bogus".to_owned() }.into(),
    );
  }

  #[test]
  fn test_scale_base_unit_mismatch() {
    let x = Unit::base("X", Some(Dimension::Temperature));
    let foreign = Scale::anchored_interval("foreign", &x, &KELVIN_SCALE, Measure::new(0.0, &x)).unwrap();
    let m = Measure::on_scale(10.0, &CELSIUS_SCALE).unwrap();
    assert_eq!(
      m.convert_to_scale(&foreign).unwrap_err(),
      UnitError::NoCommonBaseUnit { from: "X".to_owned(), to: "K".to_owned() }.into(),
    );
  }

  #[test]
  fn test_label_scales_do_not_convert() {
    let m = Measure::labelled("K", &SPECTRAL_CLASS_SCALE).unwrap();
    assert_eq!(
      m.convert_to_scale(&KELVIN_SCALE).unwrap_err(),
      ScaleError::LabelScale { scale: "spectral class".to_owned() }.into(),
    );
  }

  #[test]
  fn test_below_absolute_zero_is_rejected() {
    let m = Measure::on_scale(-300.0, &CELSIUS_SCALE).unwrap();
    assert!(matches!(
      m.convert_to_scale(&KELVIN_SCALE).unwrap_err(),
      MeasureError::Scale(ScaleError::NegativeRatioValue { .. }),
    ));
  }
}
