use std::sync::{Arc, LazyLock};

use crate::error::{PrecisionError, Result};
use crate::math::compare::{near_eq, round_to_digits};
use crate::math::{EPSILON, MAX_DIGITS};

use super::LengthUnit;

/// Default number of rounding digits.
pub const DEFAULT_DIGITS: u32 = 3;

static DEFAULT_PRECISION: LazyLock<Arc<Precision>> =
    LazyLock::new(|| Arc::new(Precision::default()));

/// Numeric precision policy shared by points.
///
/// Bundles the number of decimal digits results are rounded to, the
/// length unit coordinates are expressed in, and the floating-point
/// epsilon used for near-equality. The epsilon always probes the `f64`
/// type and cannot be overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct Precision {
    digits: u32,
    unit: LengthUnit,
    epsilon: f64,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            unit: LengthUnit::default(),
            epsilon: EPSILON,
        }
    }
}

impl Precision {
    /// Starts a builder with named overrides for digits and unit.
    #[must_use]
    pub fn builder() -> PrecisionBuilder {
        PrecisionBuilder::default()
    }

    /// Returns the process-wide default policy (3 digits, millimeter).
    #[must_use]
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_PRECISION)
    }

    /// Returns the number of decimal digits results are rounded to.
    #[must_use]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Returns the length unit coordinates are expressed in.
    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Returns the comparison epsilon.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Rounds `value` to [`Self::digits`] decimal places.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        round_to_digits(value, self.digits)
    }

    /// Compares two values with `|a - b| <= epsilon * max(1, |a|, |b|)`.
    #[must_use]
    pub fn near_eq(&self, a: f64, b: f64) -> bool {
        near_eq(a, b, self.epsilon)
    }

    /// Converts a value in this policy's unit to meters.
    #[must_use]
    pub fn to_meters(&self, value: f64) -> f64 {
        self.unit.convert(value, LengthUnit::Meter)
    }

    /// Converts a value in meters to this policy's unit.
    #[must_use]
    pub fn meters_to_unit(&self, value: f64) -> f64 {
        LengthUnit::Meter.convert(value, self.unit)
    }
}

/// Builder for [`Precision`]; unset fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct PrecisionBuilder {
    digits: Option<u32>,
    unit: Option<LengthUnit>,
}

impl PrecisionBuilder {
    /// Overrides the number of rounding digits.
    #[must_use]
    pub fn digits(mut self, digits: u32) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Overrides the length unit.
    #[must_use]
    pub fn unit(mut self, unit: LengthUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Builds the policy.
    ///
    /// # Errors
    ///
    /// Returns an error if more than [`MAX_DIGITS`] digits are requested.
    pub fn build(self) -> Result<Precision> {
        let digits = self.digits.unwrap_or(DEFAULT_DIGITS);
        if digits > MAX_DIGITS {
            return Err(PrecisionError::InvalidPrecision {
                digits,
                max: MAX_DIGITS,
            }
            .into());
        }
        Ok(Precision {
            digits,
            unit: self.unit.unwrap_or_default(),
            epsilon: EPSILON,
        })
    }
}
