use crate::error::{Result, TransformError};
use crate::geometry::{check_finite, AffineTransform};
use crate::math::{Matrix2, Matrix3, Point2, Vector2, Vector3, EPSILON};

/// Minimum number of control point pairs that determine an affine map.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Result of [`FitAffine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineFit {
    /// Transform mapping source points onto target points.
    pub transform: AffineTransform,
    /// Root mean square distance between mapped sources and their targets.
    pub rms_residual: f64,
}

/// Fits an affine transform to pairs of control points by least squares.
///
/// Each source point is matched with the target point at the same index.
pub struct FitAffine {
    source: Vec<Point2>,
    target: Vec<Point2>,
}

impl FitAffine {
    /// Creates a new `FitAffine` operation.
    #[must_use]
    pub fn new(source: Vec<Point2>, target: Vec<Point2>) -> Self {
        Self { source, target }
    }

    /// Executes the fit.
    ///
    /// Builds the 3x3 normal equations for `x' = a*x + b*y + c` and
    /// `y' = d*x + e*y + f` and solves both with one LU decomposition.
    /// Sources are centered first to keep the system well conditioned.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three pairs are given, if the two
    /// point lists differ in length, if a coordinate is NaN or infinite,
    /// or if the source points are collinear.
    pub fn execute(&self) -> Result<AffineFit> {
        let n = self.source.len();
        if n != self.target.len() {
            return Err(TransformError::MismatchedControlPoints {
                sources: n,
                targets: self.target.len(),
            }
            .into());
        }
        if n < MIN_CONTROL_POINTS {
            return Err(TransformError::InsufficientControlPoints {
                required: MIN_CONTROL_POINTS,
                actual: n,
            }
            .into());
        }
        for p in self.source.iter().chain(&self.target) {
            check_finite("x", p.x)?;
            check_finite("y", p.y)?;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = n as f64;
        let centroid = self
            .source
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords)
            / count;

        let mut normal = Matrix3::zeros();
        let mut rhs_x = Vector3::zeros();
        let mut rhs_y = Vector3::zeros();
        for (s, t) in self.source.iter().zip(&self.target) {
            let row = Vector3::new(s.x - centroid.x, s.y - centroid.y, 1.0);
            normal += row * row.transpose();
            rhs_x += row * t.x;
            rhs_y += row * t.y;
        }

        // Collinear sources leave the 2x2 spread block without rank.
        let (sxx, sxy, syy) = (normal[(0, 0)], normal[(0, 1)], normal[(1, 1)]);
        let spread = sxx * syy - sxy * sxy;
        if spread <= 64.0 * EPSILON * sxx * syy {
            tracing::debug!(points = n, spread, "control points are collinear");
            return Err(
                TransformError::Singular("source control points are collinear".into()).into(),
            );
        }

        let lu = normal.lu();
        let (Some(cx), Some(cy)) = (lu.solve(&rhs_x), lu.solve(&rhs_y)) else {
            return Err(TransformError::Singular("normal equations are singular".into()).into());
        };

        let matrix = Matrix2::new(cx[0], cx[1], cy[0], cy[1]);
        let offset = Vector2::new(cx[2], cy[2]) - matrix * centroid;
        let transform = AffineTransform::new(matrix, offset);

        let sum_sq: f64 = self
            .source
            .iter()
            .zip(&self.target)
            .map(|(s, t)| (transform.apply_coords(s) - t).norm_squared())
            .sum();
        let rms_residual = (sum_sq / count).sqrt();
        tracing::debug!(points = n, rms_residual, "fitted affine transform");

        Ok(AffineFit {
            transform,
            rms_residual,
        })
    }
}
