use super::*;
use crate::curve::color::AnimatedColor;
use crate::curve::point::Point;
use crate::effects::params::{
    BarsParams, BlurParams, ExposureParams, MaskParams, MoveParams, SplitShiftParams, WipeParams,
    ZoomParams,
};

fn ctx(frame: f64) -> ResolveCtx {
    ResolveCtx {
        frame,
        size: FrameSize {
            width: 1920,
            height: 1080,
        },
    }
}

fn ramp(from: f64, to: f64) -> Curve {
    Curve::new(vec![Point::linear(1.0, from), Point::linear(11.0, to)]).unwrap()
}

#[test]
fn blur_radii_are_truncated_integers() {
    let fx = Effect::Blur(BlurParams {
        diagonal_radius: ramp(0.0, 25.0),
        horizontal_radius: Curve::constant(-4.0),
        ..BlurParams::idle()
    });
    let r = fx.resolve(ctx(4.0));
    assert_eq!(r.kind, EffectKind::Blur);
    assert_eq!(r.get("diagonal_radius"), Some(&ResolvedValue::Int(7)));
    assert_eq!(r.get("horizontal_radius"), Some(&ResolvedValue::Int(0)));
    assert_eq!(r.get("iterations"), Some(&ResolvedValue::Int(3)));
    assert_eq!(r.f64("zoom_blur_center_x"), Some(0.5));
    assert_eq!(r.params.len(), 9);
}

#[test]
fn zoom_percent_is_floored() {
    let fx = Effect::Zoom(ZoomParams {
        zoom_percent: Curve::constant(-50.0),
        ..ZoomParams::default()
    });
    let r = fx.resolve(ctx(1.0));
    assert_eq!(r.f64("zoom_percent"), Some(1.0));
    assert_eq!(r.get("anchor_x_px"), Some(&ResolvedValue::Int(960)));
    assert_eq!(r.get("anchor_y_px"), Some(&ResolvedValue::Int(540)));
}

#[test]
fn move_and_split_scale_by_frame_size() {
    let r = Effect::BorderReflectedMove(MoveParams {
        dx: ramp(0.0, 1.0),
        dy: Curve::constant(-0.5),
    })
    .resolve(ctx(6.0));
    assert_eq!(r.f64("dx"), Some(0.5));
    assert_eq!(r.f64("dx_px"), Some(960.0));
    assert_eq!(r.f64("dy_px"), Some(-540.0));

    let r = Effect::VerticalSplitShift(SplitShiftParams {
        shift_amount: Curve::constant(-1.0),
        split_point: Curve::constant(3.0),
    })
    .resolve(ctx(1.0));
    assert_eq!(r.f64("shift_px"), Some(-1080.0));
    assert_eq!(r.f64("split_point"), Some(1.0));
}

#[test]
fn bars_clamp_sizes_and_sample_color() {
    let r = Effect::Bars(BarsParams {
        color: AnimatedColor::from_hex("#102030").unwrap(),
        top: ramp(0.0, 1.0),
        ..BarsParams::default()
    })
    .resolve(ctx(11.0));
    assert_eq!(r.f64("top"), Some(0.5));
    assert_eq!(r.f64("left"), Some(0.0));
    assert_eq!(
        r.get("color"),
        Some(&ResolvedValue::Color(Rgba8 {
            r: 0x10,
            g: 0x20,
            b: 0x30,
            a: 255
        }))
    );
}

#[test]
fn exposure_and_wipe_follow_kernel_ranges() {
    let r = Effect::Exposure(ExposureParams {
        alpha: Curve::constant(0.2),
    })
    .resolve(ctx(1.0));
    assert_eq!(r.f64("alpha"), Some(1.0));

    let r = Effect::Wipe(WipeParams {
        levels_low_percent: Curve::constant(50.0),
        levels_high_percent: Curve::constant(140.0),
    })
    .resolve(ctx(1.0));
    assert_eq!(r.get("low_threshold"), Some(&ResolvedValue::Int(127)));
    assert_eq!(r.get("high_threshold"), Some(&ResolvedValue::Int(255)));
}

#[test]
fn mask_reports_shape_and_contrast_factor() {
    let r = Effect::Mask(MaskParams::circle(ramp(0.0, 100.0))).resolve(ctx(6.0));
    assert_eq!(r.get("shape"), Some(&ResolvedValue::Str("circle_out")));
    assert_eq!(r.f64("circle_radius"), Some(50.0));
    let factor = r.f64("contrast_factor").unwrap();
    assert!((factor - 20.0 / 17.0).abs() < 1e-12);
    assert_eq!(r.get("replace_image"), Some(&ResolvedValue::Bool(false)));
}

#[test]
fn resolved_json_is_flat() {
    let r = Effect::Exposure(ExposureParams::default()).resolve(ctx(1.0));
    assert_eq!(
        serde_json::to_value(&r).unwrap(),
        serde_json::json!({
            "kind": "Exposure",
            "params": [{ "name": "alpha", "value": 1.0 }]
        })
    );
}
