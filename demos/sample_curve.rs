use wavyte_curves::{
    ClipRole, ClipSpan, Curve, Fps, FrameSpan, Interpolation, Point, TransitionCurveSpec,
    build_transition_curve,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Ease-in-out between frames 1 and 30, then a hold and a linear tail.
    let mut curve = Curve::new(vec![
        Point::new(1.0, 0.0).with_handle_right(0.42, 0.0),
        Point::new(30.0, 100.0).with_handle_left(0.58, 1.0),
    ])?;
    curve.add_point(40.0, 100.0, Interpolation::Linear)?;
    curve.add_point(50.0, 20.0, Interpolation::Linear)?;

    let span = FrameSpan::new(1, 55)?;
    for (frame, value) in span.frames().zip(curve.sample(span)) {
        let bar = "#".repeat((value / 2.0).round().max(0.0) as usize);
        println!("{frame:>3} {value:>8.3} {bar}");
    }

    let spec = TransitionCurveSpec::ramp(0.0, 0.0, 1.0, 1.0).handles(0.33, 0.0, 0.67, 1.0);
    let fade = build_transition_curve(
        &spec,
        0.5,
        Fps::default(),
        &ClipSpan::new(0.0, 2.0),
        ClipRole::Trailing,
    )?;
    println!("{}", serde_json::to_string_pretty(&fade)?);
    Ok(())
}
