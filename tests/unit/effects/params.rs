use super::*;
use crate::curve::point::Point;

#[test]
fn json_tag_is_the_class_name() {
    let fx = Effect::BorderReflectedRotation(RotationParams {
        angle: Curve::constant(90.0),
    });
    let v = serde_json::to_value(&fx).unwrap();
    assert_eq!(v["type"], serde_json::json!("BorderReflectedRotation"));
    assert_eq!(fx.class_name(), "BorderReflectedRotation");

    let back: Effect = serde_json::from_value(v).unwrap();
    assert_eq!(back, fx);
}

#[test]
fn missing_fields_take_defaults() {
    let fx: Effect = serde_json::from_value(serde_json::json!({
        "type": "Blur",
        "diagonal_radius": 250.0
    }))
    .unwrap();
    let Effect::Blur(p) = &fx else {
        panic!("expected blur, got {fx:?}");
    };
    assert_eq!(p.horizontal_radius, Curve::constant(6.0));
    assert_eq!(p.diagonal_radius, Curve::constant(250.0));
    assert_eq!(p.iterations, Curve::constant(3.0));

    let fx: Effect = serde_json::from_value(serde_json::json!({ "type": "Zoom" })).unwrap();
    assert_eq!(fx, Effect::Zoom(ZoomParams::default()));
}

#[test]
fn unknown_type_is_rejected() {
    let err = serde_json::from_value::<Effect>(serde_json::json!({ "type": "Sepia" }));
    assert!(err.is_err());
}

#[test]
fn curves_are_listed_by_name() {
    let fx = Effect::Bars(BarsParams::default());
    let names: Vec<_> = fx.curves().iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec!["red", "green", "blue", "alpha", "left", "top", "right", "bottom"]
    );

    let fx = Effect::Blur(BlurParams::idle());
    assert_eq!(fx.curves().len(), 9);
    assert!(fx.curves().iter().all(|(_, c)| c.len() == 1));
}

#[test]
fn last_keyframe_spans_all_curves() {
    let fx = Effect::Zoom(ZoomParams {
        zoom_percent: Curve::new(vec![Point::new(1.0, 100.0), Point::new(40.0, 250.0)]).unwrap(),
        anchor_x: Curve::new(vec![Point::new(1.0, 0.2), Point::new(12.0, 0.8)]).unwrap(),
        ..ZoomParams::default()
    });
    assert_eq!(fx.last_keyframe(), Some(40.0));
}

#[test]
fn mask_shape_is_validated() {
    let fx = Effect::Mask(MaskParams {
        shape: MaskShape::Custom {
            source: "  ".to_owned(),
        },
        ..MaskParams::default()
    });
    assert!(fx.validate().is_err());

    let fx = Effect::Mask(MaskParams {
        shape: MaskShape::RoundedCorners {
            radius_x: -1.0,
            radius_y: 4.0,
        },
        ..MaskParams::default()
    });
    assert!(fx.validate().is_err());

    assert!(Effect::Mask(MaskParams::circle(Curve::constant(10.0))).validate().is_ok());
}

#[test]
fn mask_shape_json_uses_kind_tag() {
    let fx: Effect = serde_json::from_value(serde_json::json!({
        "type": "Mask",
        "shape": { "kind": "rounded_corners", "radius_x": 12.0, "radius_y": 8.0 },
        "contrast": 5.0
    }))
    .unwrap();
    let Effect::Mask(p) = fx else {
        panic!("expected mask");
    };
    assert_eq!(
        p.shape,
        MaskShape::RoundedCorners {
            radius_x: 12.0,
            radius_y: 8.0
        }
    );
    assert_eq!(p.contrast.value_at(1.0), 5.0);
}
