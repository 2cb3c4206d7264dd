//! Labeled 2D/3D points with a shared precision policy, Euclidean
//! distances and affine transforms of the plane.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod precision;

pub use error::{GeopointError, Result};
pub use geometry::{AffineTransform, Distance, Point2D, Point3D};
pub use precision::{LengthUnit, Precision};
