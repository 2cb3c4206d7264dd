pub mod affine;
mod point_2d;
mod point_3d;

pub use affine::AffineTransform;
pub use point_2d::Point2D;
pub use point_3d::Point3D;

use std::sync::Arc;

use crate::error::{GeometryError, Result};
use crate::precision::Precision;

/// Trait for points with a Euclidean metric.
pub trait Distance {
    /// Returns the Euclidean distance to `other`.
    ///
    /// Symmetric and never negative; zero when `other` has the same coordinates.
    fn distance(&self, other: &Self) -> f64;

    /// Returns the precision policy governing this point.
    fn precision(&self) -> &Precision;

    /// Returns [`Distance::distance`] rounded to this point's precision digits.
    fn rounded_distance(&self, other: &Self) -> f64 {
        self.precision().round(self.distance(other))
    }
}

/// Rejects NaN and infinite coordinates.
pub(crate) fn check_finite(axis: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(axis, value, "rejecting non-finite coordinate");
        Err(GeometryError::InvalidCoordinate { axis, value }.into())
    }
}

/// Substitutes the shared default policy for a missing one.
fn resolve_precision(precision: Option<Arc<Precision>>) -> Arc<Precision> {
    precision.unwrap_or_else(|| {
        tracing::trace!("no precision supplied, using shared default");
        Precision::shared_default()
    })
}
