
//! Units of measure and the algebra for combining them.
//!
//! A [`Unit`] is built from base units by applying prefixes, scale
//! factors, new names, products, quotients, and powers. Every
//! construction tracks the resulting dimensions, base unit, and
//! conversion factor, so that any two units with a common base unit
//! can be converted into one another.

pub mod compound;
pub mod decomposition;
pub mod error;
pub mod ops;
pub mod prefix;
pub mod symbol;
pub mod table;
pub mod unit;

pub use compound::CompoundParts;
pub use decomposition::BaseDecomposition;
pub use error::UnitError;
pub use prefix::MetricPrefix;
pub use unit::{Unit, UnitKind};
