use crate::error::{GeometryError, Result};
use crate::geometry::AffineTransform;
use crate::math::Point2;

/// Address of a raster cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelIndex {
    pub col: i64,
    pub row: i64,
}

/// Maps a raster cell position to world coordinates through a geo-transform.
pub struct PixelToGeo {
    transform: AffineTransform,
    col: f64,
    row: f64,
}

impl PixelToGeo {
    /// Creates a new `PixelToGeo` query.
    ///
    /// `col` and `row` may be fractional, `(0.5, 0.5)` is the center of
    /// the upper-left cell.
    #[must_use]
    pub fn new(geo_transform: [f64; 6], col: f64, row: f64) -> Self {
        Self {
            transform: AffineTransform::from_geo_transform(geo_transform),
            col,
            row,
        }
    }

    /// Executes the query, returning world coordinates.
    #[must_use]
    pub fn execute(&self) -> Point2 {
        self.transform.apply_coords(&Point2::new(self.col, self.row))
    }
}

/// Maps world coordinates to the nearest raster cell through a geo-transform.
pub struct GeoToPixel {
    geo_transform: [f64; 6],
    world: Point2,
}

impl GeoToPixel {
    /// Creates a new `GeoToPixel` query.
    #[must_use]
    pub fn new(geo_transform: [f64; 6], world: Point2) -> Self {
        Self {
            geo_transform,
            world,
        }
    }

    /// Executes the query.
    ///
    /// Inverts the geo-transform and rounds the resulting fractional
    /// position to the nearest integer column and row.
    ///
    /// # Errors
    ///
    /// Returns an error if the geo-transform is singular or the cell
    /// position does not fit an `i64`.
    pub fn execute(&self) -> Result<PixelIndex> {
        let inverse = AffineTransform::from_geo_transform(self.geo_transform).inverse()?;
        let cell = inverse.apply_coords(&self.world);
        Ok(PixelIndex {
            col: to_index("col", cell.x)?,
            row: to_index("row", cell.y)?,
        })
    }
}

/// Rounds a fractional cell position, rejecting values outside `i64`.
#[allow(clippy::cast_possible_truncation)]
fn to_index(axis: &'static str, value: f64) -> Result<i64> {
    // 2^63, the first value past i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = value.round();
    if rounded.is_finite() && rounded >= -LIMIT && rounded < LIMIT {
        Ok(rounded as i64)
    } else {
        tracing::debug!(axis, value, "cell position out of range");
        Err(GeometryError::InvalidCoordinate { axis, value }.into())
    }
}
