
//! Dimensional analysis over physical units, with conversion between
//! ratio and interval scales.
//!
//! [`units::Unit`] values are built from base units and combined
//! algebraically; [`scale::Scale`] values give numbers an absolute or
//! arbitrary zero; and [`measure::Measure`] ties a value (with an
//! optional error) to a unit and possibly a scale.

pub mod config;
pub mod dimension;
pub mod display;
pub mod measure;
pub mod quantity;
pub mod scale;
pub mod units;

pub use config::Tolerances;
pub use dimension::{Dimension, Dimensions};
pub use measure::{Measure, MeasureError};
pub use scale::{Scale, ScaleError};
pub use units::{Unit, UnitError};
