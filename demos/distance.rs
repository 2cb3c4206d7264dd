//! Prints distances and a control-point fit.
//!
//! ```text
//! cargo run --example distance
//! RUST_LOG=geopoint=debug cargo run --example distance
//! ```

use std::sync::Arc;

use geopoint::math::Point2;
use geopoint::operations::transform::{FitAffine, GeoToPixel, PixelToGeo};
use geopoint::{Distance, LengthUnit, Point2D, Point3D, Precision, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for geopoint.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geopoint=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geopoint=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Point2D::new(0.0, 0.0, 1, None)?;
    let b = Point2D::new(3.0, 4.0, 2, None)?;
    println!("2D  #{} -> #{}: {}", a.id(), b.id(), a.distance(&b));

    let c = Point3D::new(0.0, 0.0, 0.0, 3, None)?;
    let d = Point3D::new(1.0, 1.0, 1.0, 4, None)?;
    println!(
        "3D  #{} -> #{}: {} (rounded {} {})",
        c.id(),
        d.id(),
        c.distance(&d),
        c.rounded_distance(&d),
        c.precision().unit()
    );

    let meters = Arc::new(Precision::builder().digits(2).unit(LengthUnit::Meter).build()?);
    let e = Point2D::new(1.0, 1.0, 5, Some(Arc::clone(&meters)))?;
    let f = Point2D::new(2.0, 3.0, 6, Some(meters))?;
    println!(
        "2D  #{} -> #{}: {} {}",
        e.id(),
        f.id(),
        e.rounded_distance(&f),
        e.precision().unit()
    );

    if let Err(err) = Point2D::new(f64::NAN, 0.0, 7, None) {
        println!("rejected: {err}");
    }

    let gt = [440_720.0, 30.0, 0.0, 3_751_320.0, 0.0, -30.0];
    let world = PixelToGeo::new(gt, 12.5, 40.5).execute();
    let cell = GeoToPixel::new(gt, world).execute()?;
    println!("cell center ({}, {}) -> cell {:?}", world.x, world.y, cell);

    let source = vec![
        Point2::new(0.0, 0.0),
        Point2::new(100.0, 0.0),
        Point2::new(0.0, 100.0),
        Point2::new(100.0, 100.0),
    ];
    let target = vec![
        Point2::new(10.0, 20.0),
        Point2::new(110.2, 19.9),
        Point2::new(9.8, 120.1),
        Point2::new(110.0, 120.0),
    ];
    let fit = FitAffine::new(source, target).execute()?;
    println!(
        "fit geo-transform {:?}, rms residual {:.4}",
        fit.transform.to_geo_transform(),
        fit.rms_residual
    );

    Ok(())
}
