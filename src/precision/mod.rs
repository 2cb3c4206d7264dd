mod policy;
mod unit;

pub use policy::{Precision, PrecisionBuilder, DEFAULT_DIGITS};
pub use unit::LengthUnit;
