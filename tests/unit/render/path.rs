use super::*;
use crate::geometry::spline::compute_control_points;

fn solved_path(points: &[Point], width: f64, height: f64) -> String {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let ctrl_x = compute_control_points(&xs).unwrap();
    let ctrl_y = compute_control_points(&ys).unwrap();
    serialize_closed_path(
        points,
        &ctrl_x,
        &ctrl_y,
        Point::new(0.0, height),
        Point::new(width, height),
    )
    .unwrap()
}

#[test]
fn path_opens_at_left_anchor_and_closes() {
    let points = [
        Point::new(0.0, 10.0),
        Point::new(50.0, 14.0),
        Point::new(100.0, 10.0),
    ];
    let d = solved_path(&points, 100.0, 50.0);
    assert!(d.starts_with("M 0,50 "), "unexpected open: {d}");
    assert!(d.ends_with("Z"), "unexpected close: {d}");
}

#[test]
fn one_cubic_segment_per_sample_pair() {
    for count in [2usize, 3, 5, 11] {
        let points: Vec<Point> = (0..count)
            .map(|i| Point::new(10.0 * i as f64, 5.0 + (i % 2) as f64))
            .collect();
        let d = solved_path(&points, 10.0 * (count - 1) as f64, 50.0);
        let cubics = d.matches("C ").count();
        assert_eq!(cubics, count - 1);
    }
}

#[test]
fn bottom_edge_runs_through_both_corners() {
    let points = [Point::new(0.0, 5.0), Point::new(40.0, 5.0)];
    let d = solved_path(&points, 40.0, 20.0);
    assert!(d.contains("L 40,20 L 0,20 Z"), "missing baseline: {d}");
}

#[test]
fn mismatched_control_lengths_are_rejected() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 0.0),
    ];
    let short = ControlPoints {
        p1: vec![0.0],
        p2: vec![0.0],
    };
    let err = serialize_closed_path(
        &points,
        &short,
        &short,
        Point::new(0.0, 10.0),
        Point::new(2.0, 10.0),
    )
    .unwrap_err();
    assert!(matches!(err, CrestError::Geometry(_)));
}

#[test]
fn too_few_points_are_rejected() {
    let empty = ControlPoints {
        p1: vec![],
        p2: vec![],
    };
    let err = serialize_closed_path(
        &[Point::new(0.0, 0.0)],
        &empty,
        &empty,
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    )
    .unwrap_err();
    assert!(matches!(err, CrestError::Geometry(_)));
}
