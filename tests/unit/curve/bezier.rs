use super::*;
use crate::curve::point::{DEFAULT_HANDLE_LEFT, DEFAULT_HANDLE_RIGHT};

#[test]
fn endpoints_are_exact() {
    let seg = NormalizedSegment::new(Coordinate::new(0.88, 0.0), Coordinate::new(0.12, 1.0));
    assert_eq!(seg.progress(0.0), 0.0);
    assert_eq!(seg.progress(1.0), 1.0);
    assert_eq!(seg.progress(-3.0), 0.0);
    assert_eq!(seg.progress(7.0), 1.0);
}

#[test]
fn chord_handles_are_linear() {
    let seg = NormalizedSegment::new(DEFAULT_HANDLE_RIGHT, DEFAULT_HANDLE_LEFT);
    for i in 1..20 {
        let u = f64::from(i) / 20.0;
        assert!((seg.progress(u) - u).abs() < 1e-9, "u={u}");
    }
}

#[test]
fn ease_in_out_is_monotonic_and_symmetric() {
    let seg = NormalizedSegment::new(Coordinate::new(0.42, 0.0), Coordinate::new(0.58, 1.0));
    let mut prev = 0.0;
    for i in 0..=100 {
        let u = f64::from(i) / 100.0;
        let y = seg.progress(u);
        assert!(y + 1e-12 >= prev, "not monotonic at u={u}");
        prev = y;
    }
    assert!((seg.progress(0.5) - 0.5).abs() < 1e-9);
    assert!((seg.progress(0.25) + seg.progress(0.75) - 1.0).abs() < 1e-9);
}

#[test]
fn out_of_range_handle_x_is_clamped() {
    // x controls of 1.6 and -0.4 would fold x(t) back on itself.
    let seg = NormalizedSegment::new(Coordinate::new(1.6, 0.0), Coordinate::new(-0.4, 1.0));
    let mut prev = 0.0;
    for i in 0..=50 {
        let u = f64::from(i) / 50.0;
        let t = seg.solve_t(u).expect("monotonic after clamp");
        assert!(t + 1e-12 >= prev);
        prev = t;
    }
}

#[test]
fn segment_value_maps_into_segment_box() {
    let a = Point::new(10.0, 100.0).with_handle_right(0.42, 0.0);
    let b = Point::new(20.0, 200.0).with_handle_left(0.58, 1.0);
    assert!((segment_value(&a, &b, 15.0) - 150.0).abs() < 1e-9);
    assert!(segment_value(&a, &b, 12.0) < 120.0);
    assert!(segment_value(&a, &b, 18.0) > 180.0);
}

#[test]
fn unhandled_segment_is_exactly_linear() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 100.0);
    assert_eq!(segment_value(&a, &b, 5.0), 50.0);
}

#[test]
fn control_points_span_the_unit_box() {
    let seg = NormalizedSegment::new(Coordinate::new(0.3, -0.5), Coordinate::new(0.7, 1.5));
    assert_eq!(seg.curve.p0, kurbo::Point::ZERO);
    assert_eq!(seg.curve.p1, kurbo::Point::new(0.3, -0.5));
    assert_eq!(seg.curve.p2, kurbo::Point::new(0.7, 1.5));
    assert_eq!(seg.curve.p3, kurbo::Point::new(1.0, 1.0));
}
