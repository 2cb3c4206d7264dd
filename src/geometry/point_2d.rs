use std::sync::Arc;

use crate::error::Result;
use crate::math::Point2;
use crate::precision::Precision;

use super::{check_finite, resolve_precision, Distance, Point3D};

/// A labeled point in the plane.
///
/// Coordinates are finite and expressed in the unit of the attached
/// [`Precision`]. The policy is shared, several points usually hold the
/// same `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point2D {
    coords: Point2,
    id: i64,
    precision: Arc<Precision>,
}

impl Point2D {
    /// Creates a new point.
    ///
    /// When `precision` is `None` the shared default policy is used.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` or `y` is NaN or infinite.
    pub fn new(x: f64, y: f64, id: i64, precision: Option<Arc<Precision>>) -> Result<Self> {
        let x = check_finite("x", x)?;
        let y = check_finite("y", y)?;
        Ok(Self {
            coords: Point2::new(x, y),
            id,
            precision: resolve_precision(precision),
        })
    }

    /// Assembles a point from coordinates that are already known to be finite.
    pub(crate) fn from_parts(coords: Point2, id: i64, precision: Arc<Precision>) -> Self {
        Self {
            coords,
            id,
            precision,
        }
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the coordinates as an `nalgebra` point.
    #[must_use]
    pub fn coords(&self) -> &Point2 {
        &self.coords
    }

    /// Returns the precision policy governing this point.
    #[must_use]
    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// Returns the shared precision handle.
    #[must_use]
    pub fn precision_handle(&self) -> &Arc<Precision> {
        &self.precision
    }

    /// Returns whether both coordinates are near-equal under this point's precision.
    ///
    /// Identifiers are ignored.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.precision.near_eq(self.x(), other.x()) && self.precision.near_eq(self.y(), other.y())
    }

    /// Lifts the point into 3D space at height `z`, keeping id and precision.
    ///
    /// # Errors
    ///
    /// Returns an error if `z` is NaN or infinite.
    pub fn with_z(&self, z: f64) -> Result<Point3D> {
        Point3D::new(self.x(), self.y(), z, self.id, Some(Arc::clone(&self.precision)))
    }
}

impl Distance for Point2D {
    fn distance(&self, other: &Self) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx.hypot(dy)
    }

    fn precision(&self) -> &Precision {
        Point2D::precision(self)
    }
}
