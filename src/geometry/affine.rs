use std::sync::Arc;

use crate::error::{Result, TransformError};
use crate::math::{Matrix2, Point2, Vector2, EPSILON};

use super::{check_finite, Point2D};

/// An affine map of the plane, `p' = M * p + D`.
///
/// `M` is the 2x2 linear part and `D` the translation offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    matrix: Matrix2,
    offset: Vector2,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// Creates a transform from its linear part and offset.
    #[must_use]
    pub fn new(matrix: Matrix2, offset: Vector2) -> Self {
        Self { matrix, offset }
    }

    /// The transform that leaves every point in place.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix2::identity(), Vector2::zeros())
    }

    /// A pure translation by `(dx, dy)`.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(Matrix2::identity(), Vector2::new(dx, dy))
    }

    /// An axis-aligned scaling about the origin.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(Matrix2::new(sx, 0.0, 0.0, sy), Vector2::zeros())
    }

    /// Builds a transform from a GDAL-style geo-transform.
    ///
    /// The six coefficients map a raster cell `(col, row)` to world
    /// coordinates as `x = t0 + t1*col + t2*row`, `y = t3 + t4*col + t5*row`.
    #[must_use]
    pub fn from_geo_transform(t: [f64; 6]) -> Self {
        Self::new(Matrix2::new(t[1], t[2], t[4], t[5]), Vector2::new(t[0], t[3]))
    }

    /// Returns the coefficients in GDAL geo-transform order.
    #[must_use]
    pub fn to_geo_transform(&self) -> [f64; 6] {
        let m = &self.matrix;
        [
            self.offset.x,
            m[(0, 0)],
            m[(0, 1)],
            self.offset.y,
            m[(1, 0)],
            m[(1, 1)],
        ]
    }

    /// Returns the linear part.
    #[must_use]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// Returns the translation offset.
    #[must_use]
    pub fn offset(&self) -> &Vector2 {
        &self.offset
    }

    /// Returns the determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Maps a raw coordinate pair.
    #[must_use]
    pub fn apply_coords(&self, p: &Point2) -> Point2 {
        Point2::from(self.matrix * p.coords + self.offset)
    }

    /// Maps a point, keeping its id and precision.
    ///
    /// # Errors
    ///
    /// Returns an error if a mapped coordinate overflows to infinity.
    pub fn apply(&self, point: &Point2D) -> Result<Point2D> {
        let mapped = self.apply_coords(point.coords());
        let x = check_finite("x", mapped.x)?;
        let y = check_finite("y", mapped.y)?;
        Ok(Point2D::from_parts(
            Point2::new(x, y),
            point.id(),
            Arc::clone(point.precision_handle()),
        ))
    }

    /// Returns the transform that applies `other` first and then `self`.
    ///
    /// `(self ∘ other)(p) = Ms * (Mo * p + Do) + Ds`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.matrix * other.matrix,
            self.matrix * other.offset + self.offset,
        )
    }

    /// Returns the inverse transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the linear part is singular, i.e. its
    /// determinant vanishes relative to the products it is formed from,
    /// or if the determinant is not finite.
    pub fn inverse(&self) -> Result<Self> {
        let m = &self.matrix;
        let det = self.determinant();
        let scale = (m[(0, 0)] * m[(1, 1)]).abs().max((m[(0, 1)] * m[(1, 0)]).abs());
        if !det.is_finite() || det.abs() <= EPSILON * scale {
            tracing::debug!(det, "affine transform is not invertible");
            return Err(TransformError::Singular(format!("determinant {det} is zero")).into());
        }
        let inv = Matrix2::new(m[(1, 1)], -m[(0, 1)], -m[(1, 0)], m[(0, 0)]) / det;
        Ok(Self::new(inv, -(inv * self.offset)))
    }
}
