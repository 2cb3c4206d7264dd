mod fit_affine;
mod raster;

pub use fit_affine::{AffineFit, FitAffine, MIN_CONTROL_POINTS};
pub use raster::{GeoToPixel, PixelIndex, PixelToGeo};
