#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use linea::export::GeometryKind;
use linea::geometry::parse_subpaths;
use linea::math::{to_point, Point2};
use linea::operations::offset::OffsetParams;
use linea::operations::smoothing::SmoothParams;
use linea::tessellation::{FlattenBatch, FlattenParams};
use linea::{Curve, Line, LineaError, Path, Segment, ShapeRecord};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn closed_triangle_round_trips_through_path_data() {
    init_tracing();
    let path = Path::parse("M0,0 L10,0 L10,10 Z").unwrap();
    assert!(path.is_closed());
    let data = path.to_path_data();
    assert_eq!(data, "M 0,0 L 10,0 L 10,10 L 0,0 Z");
    assert_eq!(Path::parse(&data).unwrap(), path);
}

#[test]
fn geometrically_closed_path_gets_z() {
    let path = Path::from_segments([
        Line::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)),
        Line::new(Point2::new(4.0, 0.0), Point2::new(0.0, 3.0)),
        Line::new(Point2::new(0.0, 3.0), Point2::new(0.0, 0.0)),
    ])
    .unwrap();
    assert!(path.to_string().ends_with(" Z"));
}

#[test]
fn line_offset_matches_normal_convention() {
    init_tracing();
    let path = Path::from_segments([Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))]).unwrap();
    let normal = path[0].normal(0.5).unwrap();
    assert_abs_diff_eq!(normal.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(normal.y, -1.0, epsilon = 1e-12);

    let offset = path.offset(&OffsetParams::new(2.0)).unwrap();
    assert_abs_diff_eq!(offset.start().unwrap(), Point2::new(0.0, -2.0), epsilon = 1e-12);
    assert_abs_diff_eq!(offset.end().unwrap(), Point2::new(10.0, -2.0), epsilon = 1e-12);
}

#[test]
fn line_to_cubic_thirds() {
    let line = Line::from_points((0.0, 0.0), [10.0, 0.0]).unwrap();
    let cubic = line.to_cubic(1.0 / 3.0).unwrap();
    assert_abs_diff_eq!(cubic.control1(), Point2::new(10.0 / 3.0, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(cubic.control2(), Point2::new(20.0 / 3.0, 0.0), epsilon = 1e-12);
}

#[test]
fn flattening_a_circle_stays_near_the_circle() {
    let circle = ShapeRecord::Circle {
        cx: 0.0,
        cy: 0.0,
        r: 10.0,
    }
    .to_path()
    .unwrap();
    for flatness in [1.0, 0.1, 0.01] {
        let polyline = circle.as_polyline(flatness).unwrap();
        assert!(polyline.is_polyline());
        assert!(polyline.is_closed());
        for line in &polyline {
            assert_abs_diff_eq!(line.start().coords.norm(), 10.0, epsilon = flatness);
            let mid = line.point(0.5).unwrap();
            assert!(10.0 - mid.coords.norm() <= flatness + 1e-9);
        }
    }
}

#[test]
fn finer_flatness_gives_more_lines() {
    let path = Path::parse("M0,0 C0,40 40,40 40,0 S80,-40 80,0").unwrap();
    let coarse = path.as_polyline(1.0).unwrap();
    let fine = path.as_polyline(0.01).unwrap();
    assert!(fine.len() >= coarse.len());
    assert_eq!(fine.start(), path.start());
    assert_eq!(fine.end(), path.end());
}

#[test]
fn smoothing_a_rectangle_removes_its_corners() {
    init_tracing();
    let rect = ShapeRecord::Rect {
        x: 0.0,
        y: 0.0,
        width: 20.0,
        height: 10.0,
        rx: None,
        ry: None,
    }
    .to_path()
    .unwrap();
    assert_eq!(rect.kinks(1e-8), vec![0, 1, 2, 3]);

    let smooth = rect.smoothed(&SmoothParams::default()).unwrap();
    assert!(smooth.iter().all(|s| matches!(s, Segment::Cubic(_))));
    assert!(smooth.kinks(1e-8).is_empty());
    assert!(smooth.is_closed());
}

#[test]
fn rounded_rect_is_already_smooth() {
    let rect = ShapeRecord::Rect {
        x: 0.0,
        y: 0.0,
        width: 20.0,
        height: 10.0,
        rx: Some(2.0),
        ry: Some(2.0),
    }
    .to_path()
    .unwrap();
    assert!(rect.kinks(1e-8).is_empty());
}

#[test]
fn export_reports_region_or_curve() {
    let polygon = ShapeRecord::Polygon {
        points: vec![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)],
    }
    .to_path()
    .unwrap();
    let region = polygon.to_geometry(0.1).unwrap();
    assert_eq!(region.kind(), GeometryKind::ClosedRegion);
    assert_eq!(region.coordinates.first(), region.coordinates.last());

    let curve = Path::parse("M0,0 Q5,5 10,0").unwrap().to_geometry(0.1).unwrap();
    assert_eq!(curve.kind(), GeometryKind::OpenCurve);

    assert!(matches!(
        Path::new().to_geometry(0.1),
        Err(LineaError::Export(_))
    ));
}

#[test]
fn batch_flattening_keeps_input_order() {
    init_tracing();
    let data = "M0,0 L1,0 M0,10 Q5,15 10,10 M0,20 A5,5 0 0 1 10,20 M0,30 C0,35 10,35 10,30";
    let paths = parse_subpaths(data).unwrap();
    assert_eq!(paths.len(), 4);

    let flat = FlattenBatch::new(&paths, FlattenParams::default()).execute().unwrap();
    assert_eq!(flat.len(), 4);
    for (input, output) in paths.iter().zip(&flat) {
        assert!(output.is_polyline());
        assert_eq!(output.start(), input.start());
        assert_eq!(output.end(), input.end());
    }
}

#[test]
fn point_inputs_normalize() {
    let map: HashMap<String, f64> = [("x".to_owned(), 1.5), ("y".to_owned(), -2.0)].into();
    assert_eq!(to_point(&map).unwrap(), Point2::new(1.5, -2.0));
    assert_eq!(to_point([3.0, 4.0]).unwrap(), Point2::new(3.0, 4.0));
    let bad: &[f64] = &[1.0, 2.0, 3.0];
    assert!(to_point(bad).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn geometry_serializes() {
    let geometry = Path::parse("M0,0 L1,0 L1,1 Z").unwrap().to_geometry(0.1).unwrap();
    let json = serde_json::to_string(&geometry).unwrap();
    let back: linea::export::PathGeometry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, geometry);
}
