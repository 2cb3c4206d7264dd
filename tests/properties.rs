#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::sync::Arc;

use approx::assert_relative_eq;
use geopoint::error::{GeometryError, GeopointError};
use geopoint::{AffineTransform, Distance, LengthUnit, Point2D, Point3D, Precision};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic spread of coordinates across several magnitudes.
fn sample_points() -> Vec<Point2D> {
    let coords = [
        (0.0, 0.0),
        (3.0, 4.0),
        (-1.5, 2.25),
        (1e-7, -3e-7),
        (12_345.678, -98_765.432),
        (1e9, 1e9 + 0.5),
        (-0.1, 0.2),
        (1e200, -1e200),
        (-3e200, 4e200),
        (1e-200, 0.0),
        (0.0, -1e-200),
    ];
    coords
        .iter()
        .zip(0..)
        .map(|(&(x, y), id)| Point2D::new(x, y, id, None).unwrap())
        .collect()
}

#[test]
fn distance_is_symmetric() {
    let pts = sample_points();
    for a in &pts {
        for b in &pts {
            assert_eq!(a.distance(b), b.distance(a));
        }
    }
}

#[test]
fn distance_to_self_is_zero() {
    for a in &sample_points() {
        assert_eq!(a.distance(a), 0.0);
    }
}

#[test]
fn triangle_inequality_within_epsilon() {
    let pts = sample_points();
    for a in &pts {
        for b in &pts {
            for c in &pts {
                let direct = a.distance(c);
                let detour = a.distance(b) + b.distance(c);
                let slack = a.precision().epsilon() * detour.max(1.0) * 4.0;
                assert!(direct <= detour + slack, "{direct} > {detour}");
            }
        }
    }
}

fn sample_points_3d() -> Vec<Point3D> {
    let coords = [
        (0.0, 0.0, 0.0),
        (1.0, 1.0, 1.0),
        (0.0, 0.0, -3e160),
        (1e200, 1e200, 1e200),
        (0.0, 1e-200, 0.0),
        (-2.5, 7.0, 1e-3),
    ];
    coords
        .iter()
        .zip(0..)
        .map(|(&(x, y, z), id)| Point3D::new(x, y, z, id, None).unwrap())
        .collect()
}

#[test]
fn distance_is_finite_and_positive_for_distinct_points() {
    let pts = sample_points();
    for a in &pts {
        for b in &pts {
            let d = a.distance(b);
            assert!(d.is_finite(), "{a:?} -> {b:?}: {d}");
            if a.coords() != b.coords() {
                assert!(d > 0.0, "{a:?} -> {b:?}: {d}");
            }
        }
    }
    let pts = sample_points_3d();
    for a in &pts {
        for b in &pts {
            let d = a.distance(b);
            assert!(d.is_finite(), "{a:?} -> {b:?}: {d}");
            if a.coords() != b.coords() {
                assert!(d > 0.0, "{a:?} -> {b:?}: {d}");
            }
        }
    }
}

#[test]
fn extreme_magnitudes_keep_their_scale() {
    let origin = Point2D::new(0.0, 0.0, 0, None).unwrap();
    let far = Point2D::new(1e200, 0.0, 1, None).unwrap();
    let near = Point2D::new(1e-200, 0.0, 2, None).unwrap();
    assert_relative_eq!(origin.distance(&far), 1e200, max_relative = 1e-15);
    assert_relative_eq!(origin.distance(&near), 1e-200, max_relative = 1e-15);

    let origin = Point3D::new(0.0, 0.0, 0.0, 0, None).unwrap();
    let deep = Point3D::new(0.0, 0.0, -3e160, 1, None).unwrap();
    assert_relative_eq!(origin.distance(&deep), 3e160, max_relative = 1e-15);
}

#[test]
fn distance_3d_is_symmetric_and_satisfies_triangle_inequality() {
    let pts = sample_points_3d();
    for a in &pts {
        for b in &pts {
            assert_eq!(a.distance(b), b.distance(a));
            for c in &pts {
                let direct = a.distance(c);
                let detour = a.distance(b) + b.distance(c);
                let slack = a.precision().epsilon() * detour.max(1.0) * 4.0;
                assert!(direct <= detour + slack, "{direct} > {detour}");
            }
        }
    }
}

#[test]
fn three_four_five_triangle() {
    init_tracing();
    let a = Point2D::new(0.0, 0.0, 1, None).unwrap();
    let b = Point2D::new(3.0, 4.0, 2, None).unwrap();
    assert_eq!(a.distance(&b), 5.0);
}

#[test]
fn unit_cube_diagonal() {
    let a = Point3D::new(0.0, 0.0, 0.0, 1, None).unwrap();
    let b = Point3D::new(1.0, 1.0, 1.0, 2, None).unwrap();
    assert_relative_eq!(a.distance(&b), 1.732_050_8, epsilon = 1e-7);
}

#[test]
fn nan_coordinate_fails() {
    init_tracing();
    let err = Point2D::new(f64::NAN, 0.0, 1, None).unwrap_err();
    assert!(matches!(
        err,
        GeopointError::Geometry(GeometryError::InvalidCoordinate { .. })
    ));
    assert!(Point3D::new(0.0, f64::NAN, 0.0, 1, None).is_err());
}

#[test]
fn default_precision_when_omitted() {
    let a = Point2D::new(1.0, 1.0, 1, None).unwrap();
    assert_eq!(a.precision().digits(), 3);
    assert_eq!(a.precision().unit(), LengthUnit::Millimeter);
}

#[test]
fn rounding_is_idempotent() {
    let pts = sample_points();
    for digits in [0, 1, 3, 6] {
        let prec = Precision::builder().digits(digits).build().unwrap();
        for a in &pts {
            for b in &pts {
                let once = prec.round(a.distance(b));
                assert_eq!(prec.round(once), once);
            }
        }
    }
}

#[test]
fn shared_precision_across_threads() {
    let prec = Arc::new(Precision::builder().unit(LengthUnit::Meter).build().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let prec = Arc::clone(&prec);
            std::thread::spawn(move || {
                let a = Point2D::new(0.0, 0.0, i, Some(Arc::clone(&prec))).unwrap();
                let b = Point2D::new(3.0, 4.0, i, Some(prec)).unwrap();
                a.rounded_distance(&b)
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 5.0);
    }
}

#[test]
fn affine_transform_round_trip_preserves_points() {
    let t = AffineTransform::from_geo_transform([100.0, 2.0, 0.5, -50.0, -0.25, 3.0]);
    let inv = t.inverse().unwrap();
    for a in &sample_points()[..4] {
        let back = inv.apply(&t.apply(a).unwrap()).unwrap();
        assert!(
            (back.x() - a.x()).abs() < 1e-9 && (back.y() - a.y()).abs() < 1e-9,
            "{a:?} -> {back:?}"
        );
        assert_eq!(back.id(), a.id());
    }
}

mod accessors {
    use geopoint::{LengthUnit, Point2D, Point3D};

    #[test]
    fn precision_is_readable_without_the_distance_trait() {
        let a = Point2D::new(1.0, 2.0, 1, None).unwrap();
        let b = Point3D::new(1.0, 2.0, 3.0, 2, None).unwrap();
        assert_eq!(a.precision().digits(), 3);
        assert_eq!(b.precision().unit(), LengthUnit::Millimeter);
    }
}
