use std::sync::Arc;

use crate::error::Result;
use crate::math::{Point2, Point3};
use crate::precision::Precision;

use super::{check_finite, resolve_precision, Distance, Point2D};

/// A labeled point in 3D space.
///
/// Same construction rules as [`Point2D`] with an added `z` coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    coords: Point3,
    id: i64,
    precision: Arc<Precision>,
}

impl Point3D {
    /// Creates a new point.
    ///
    /// When `precision` is `None` the shared default policy is used.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is NaN or infinite.
    pub fn new(
        x: f64,
        y: f64,
        z: f64,
        id: i64,
        precision: Option<Arc<Precision>>,
    ) -> Result<Self> {
        let x = check_finite("x", x)?;
        let y = check_finite("y", y)?;
        let z = check_finite("z", z)?;
        Ok(Self {
            coords: Point3::new(x, y, z),
            id,
            precision: resolve_precision(precision),
        })
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

    /// Returns the Z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the coordinates as an `nalgebra` point.
    #[must_use]
    pub fn coords(&self) -> &Point3 {
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

    /// Returns whether all coordinates are near-equal under this point's precision.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.precision.near_eq(self.x(), other.x())
            && self.precision.near_eq(self.y(), other.y())
            && self.precision.near_eq(self.z(), other.z())
    }

    /// Projects onto the XY plane, keeping id and precision.
    #[must_use]
    pub fn to_2d(&self) -> Point2D {
        Point2D::from_parts(
            Point2::new(self.x(), self.y()),
            self.id,
            Arc::clone(&self.precision),
        )
    }
}

impl Distance for Point3D {
    fn distance(&self, other: &Self) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z() - other.z();
        dx.hypot(dy).hypot(dz)
    }

    fn precision(&self) -> &Precision {
        Point3D::precision(self)
    }
}
