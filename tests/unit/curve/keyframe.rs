use super::*;

fn two_point(kind: Interpolation) -> Curve {
    Curve::new(vec![
        Point::with_interpolation(0.0, 0.0, kind),
        Point::with_interpolation(10.0, 100.0, kind),
    ])
    .unwrap()
}

#[test]
fn empty_curve_is_zero() {
    let c = Curve::empty();
    assert!(c.is_empty());
    assert_eq!(c.value_at(-5.0), 0.0);
    assert_eq!(c.value_at(42.0), 0.0);
    assert_eq!(c.frame_bounds(), None);
}

#[test]
fn single_point_is_constant_everywhere() {
    let c = Curve::constant(7.5);
    assert_eq!(c.len(), 1);
    for f in [-10.0, 0.0, 1.0, 1.5, 1e9] {
        assert_eq!(c.value_at(f), 7.5);
    }
    assert!(c.is_constant());
}

#[test]
fn linear_midpoint_is_exact() {
    let c = two_point(Interpolation::Linear);
    assert_eq!(c.value_at(5.0), 50.0);
    assert_eq!(c.value_at(0.0), 0.0);
    assert_eq!(c.value_at(10.0), 100.0);
    assert_eq!(c.value_at(2.5), 25.0);
}

#[test]
fn constant_steps_at_next_frame() {
    let c = two_point(Interpolation::Constant);
    assert_eq!(c.value_at(9.0), 0.0);
    assert_eq!(c.value_at(9.999), 0.0);
    assert_eq!(c.value_at(10.0), 100.0);
}

#[test]
fn values_clamp_outside_the_points() {
    for kind in [
        Interpolation::Constant,
        Interpolation::Linear,
        Interpolation::Bezier,
    ] {
        let c = two_point(kind);
        assert_eq!(c.value_at(-3.0), 0.0);
        assert_eq!(c.value_at(11.0), 100.0);
        assert_eq!(c.value_at(f64::NEG_INFINITY), 0.0);
        assert_eq!(c.value_at(f64::INFINITY), 100.0);
    }
}

#[test]
fn unhandled_bezier_matches_linear() {
    let bez = two_point(Interpolation::Bezier);
    let lin = two_point(Interpolation::Linear);
    for f in 0..=10 {
        let f = f64::from(f);
        assert_eq!(bez.value_at(f), lin.value_at(f));
    }
}

#[test]
fn bezier_peak_is_monotonic_on_each_side() {
    let c = Curve::new(vec![
        Point::new(0.0, 0.0).with_handle_right(1.0 / 3.0, 1.0 / 3.0),
        Point::new(5.0, 100.0)
            .with_handle_left(2.0 / 3.0, 2.0 / 3.0)
            .with_handle_right(1.0 / 3.0, 1.0 / 3.0),
        Point::new(10.0, 0.0).with_handle_left(2.0 / 3.0, 2.0 / 3.0),
    ])
    .unwrap();

    let mut prev = c.value_at(0.0);
    for i in 1..=50 {
        let v = c.value_at(f64::from(i) * 0.1);
        assert!(v >= prev - 1e-9, "rising side dipped at {}", f64::from(i) * 0.1);
        prev = v;
    }
    for i in 51..=100 {
        let v = c.value_at(f64::from(i) * 0.1);
        assert!(v <= prev + 1e-9, "falling side rose at {}", f64::from(i) * 0.1);
        prev = v;
    }
    assert!((c.value_at(5.0) - 100.0).abs() < 1e-12);
}

#[test]
fn eased_segment_stays_between_endpoints() {
    let c = Curve::new(vec![
        Point::new(1.0, 0.0).with_handle_right(0.88, 0.0),
        Point::new(31.0, 1.0).with_handle_left(0.12, 1.0),
    ])
    .unwrap();
    let mut prev = 0.0;
    for f in 1..=31 {
        let v = c.value_at(f64::from(f));
        assert!((0.0..=1.0).contains(&v));
        assert!(v >= prev - 1e-12);
        prev = v;
    }
    assert!(c.value_at(4.0) < 0.05, "ease-in should start slowly");
}

#[test]
fn evaluation_is_idempotent() {
    let c = Curve::new(vec![
        Point::new(1.0, 3.0).with_handle_right(0.7, 0.1),
        Point::new(9.0, -4.0).with_handle_left(0.2, 0.9),
    ])
    .unwrap();
    for f in [1.5, 3.25, 7.0] {
        assert_eq!(c.value_at(f).to_bits(), c.value_at(f).to_bits());
    }
}

#[test]
fn duplicate_frames_let_the_later_point_win() {
    let c = Curve::new(vec![
        Point::linear(1.0, 0.0),
        Point::linear(5.0, 0.0),
        Point::linear(5.0, 10.0),
        Point::linear(9.0, 10.0),
    ])
    .unwrap();
    assert_eq!(c.value_at(4.0), 0.0);
    assert_eq!(c.value_at(5.0), 10.0);
    assert_eq!(c.value_at(6.0), 10.0);
}

#[test]
fn collapsed_tail_returns_last_value() {
    let c = Curve::new(vec![
        Point::new(1.0, 0.0),
        Point::new(60.0, 0.0),
        Point::new(60.0, 1.0),
    ])
    .unwrap();
    assert_eq!(c.value_at(60.0), 1.0);
    assert_eq!(c.value_at(59.0), 0.0);
}

#[test]
fn add_point_rejects_non_monotonic_frames() {
    let mut c = Curve::empty();
    c.add_point(1.0, 0.0, Interpolation::Linear).unwrap();
    c.add_point(1.0, 2.0, Interpolation::Linear).unwrap();
    let err = c.add_point(0.5, 1.0, Interpolation::Linear).unwrap_err();
    assert!(err.to_string().contains("non-monotonic keyframe"));
    assert_eq!(c.len(), 2);

    assert!(Curve::new(vec![Point::new(3.0, 0.0), Point::new(2.0, 0.0)]).is_err());
}

#[test]
fn add_point_rejects_non_finite_input() {
    let mut c = Curve::empty();
    assert!(c.add_point(f64::NAN, 0.0, Interpolation::Linear).is_err());
    assert!(c.add_point(1.0, f64::INFINITY, Interpolation::Linear).is_err());
    assert!(c.is_empty());
}

#[test]
fn accessors_expose_points() {
    let mut c = Curve::empty();
    c.add_point(2.0, 4.0, Interpolation::Constant).unwrap();
    c.add_point(6.0, 8.0, Interpolation::Bezier).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.point(0).map(Point::value), Some(4.0));
    assert_eq!(c.point(1).map(|p| p.interpolation), Some(Interpolation::Bezier));
    assert!(c.point(2).is_none());
    assert_eq!(c.frame_bounds(), Some((2.0, 6.0)));
    assert_eq!(c.last().map(Point::frame), Some(6.0));
}

#[test]
fn set_handles_checks_index() {
    let mut c = Curve::new(vec![Point::new(1.0, 0.0), Point::new(2.0, 1.0)]).unwrap();
    c.set_handles(0, None, Some(Coordinate::new(0.5, 0.0))).unwrap();
    assert_eq!(c.points()[0].handle_right, Some(Coordinate::new(0.5, 0.0)));
    assert_eq!(c.points()[0].handle_left, None);
    assert!(c.set_handles(5, None, None).is_err());
    assert!(
        c.set_handles(1, Some(Coordinate::new(f64::NAN, 0.0)), None)
            .is_err()
    );
}

#[test]
fn sample_walks_the_span() {
    let c = two_point(Interpolation::Linear);
    let span = FrameSpan::new(1, 3).unwrap();
    assert_eq!(c.sample(span), vec![10.0, 20.0, 30.0]);
}

#[test]
fn json_round_trip_preserves_values() {
    let c = Curve::new(vec![
        Point::constant(1.0, 2.0),
        Point::linear(4.0, 2.0),
        Point::new(8.0, -1.0)
            .with_handle_right(0.3, 0.0)
            .with_handle_left(0.1, 0.2),
        Point::new(20.0, 5.0).with_handle_left(0.7, 1.0),
    ])
    .unwrap();

    let json = serde_json::to_string(&c).unwrap();
    let back: Curve = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
    for f in 0..=24 {
        let f = f64::from(f) * 0.9;
        assert_eq!(back.value_at(f).to_bits(), c.value_at(f).to_bits());
    }
}

#[test]
fn json_accepts_shorthands() {
    let c: Curve = serde_json::from_value(serde_json::json!(0.5)).unwrap();
    assert_eq!(c.value_at(100.0), 0.5);

    let c: Curve = serde_json::from_value(serde_json::json!([
        { "co": { "x": 1.0, "y": 0.0 }, "interpolation": "linear" },
        { "co": { "x": 3.0, "y": 1.0 } }
    ]))
    .unwrap();
    assert_eq!(c.value_at(2.0), 0.5);

    let c: Curve = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(c.is_empty());
}

#[test]
fn json_rejects_unordered_points() {
    let err = serde_json::from_value::<Curve>(serde_json::json!({
        "points": [
            { "co": { "x": 5.0, "y": 0.0 } },
            { "co": { "x": 1.0, "y": 0.0 } }
        ]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("non-monotonic"));
}
