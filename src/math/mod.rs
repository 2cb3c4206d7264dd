pub mod compare;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2x2 matrix, the linear part of an affine transform.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 matrix, used for the normal equations of affine fitting.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Smallest increment above 1.0 representable in `f64`.
///
/// Equal to `nextafter(1.0, 2.0) - 1.0`.
pub const EPSILON: f64 = f64::EPSILON;

/// Largest number of rounding digits that still resolves in an `f64`.
pub const MAX_DIGITS: u32 = 15;
