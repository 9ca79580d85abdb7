
//! Validated quantities built on top of [`Measure`](crate::measure::Measure).

pub mod angle;
pub mod error;
pub mod magnitude;

pub use angle::{Angle, Latitude, Longitude};
pub use error::QuantityError;
pub use magnitude::Magnitude;
