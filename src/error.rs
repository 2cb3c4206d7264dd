use thiserror::Error;

/// Top-level error type for the geopoint crate.
#[derive(Debug, Error)]
pub enum GeopointError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Precision(#[from] PrecisionError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors related to point construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("coordinate {axis} = {value} is not finite")]
    InvalidCoordinate { axis: &'static str, value: f64 },
}

/// Errors related to precision policies.
#[derive(Debug, Error)]
pub enum PrecisionError {
    #[error("{digits} rounding digits requested, at most {max} are supported")]
    InvalidPrecision { digits: u32, max: u32 },
}

/// Errors related to affine transforms and their construction.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("at least {required} control points are required, got {actual}")]
    InsufficientControlPoints { required: usize, actual: usize },

    #[error("control point count mismatch: {sources} source vs {targets} target points")]
    MismatchedControlPoints { sources: usize, targets: usize },

    #[error("singular transform: {0}")]
    Singular(String),
}

/// Convenience type alias for results using [`GeopointError`].
pub type Result<T> = std::result::Result<T, GeopointError>;
