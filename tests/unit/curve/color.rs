use super::*;
use crate::curve::point::Point;

#[test]
fn hex_parses_with_and_without_alpha() {
    let c = AnimatedColor::from_hex("#ff3366").unwrap();
    assert_eq!(
        c.sample(1.0),
        Rgba8 {
            r: 255,
            g: 0x33,
            b: 0x66,
            a: 255
        }
    );

    let c = AnimatedColor::from_hex("00000080").unwrap();
    assert_eq!(c.sample(1.0).a, 0x80);
}

#[test]
fn hex_rejects_bad_input() {
    assert!(AnimatedColor::from_hex("#123").is_err());
    assert!(AnimatedColor::from_hex("#gg0000").is_err());
    assert!(AnimatedColor::from_hex("#ééé").is_err());
}

#[test]
fn channels_animate_and_clamp() {
    let red = Curve::new(vec![Point::linear(1.0, 0.0), Point::linear(11.0, 300.0)]).unwrap();
    let c = AnimatedColor {
        red,
        ..AnimatedColor::black()
    };
    assert_eq!(c.sample(1.0).r, 0);
    assert_eq!(c.sample(6.0).r, 150);
    assert_eq!(c.sample(11.0).r, 255);
}

#[test]
fn deserializes_hex_or_channel_curves() {
    let c: AnimatedColor = serde_json::from_value(serde_json::json!("#000000")).unwrap();
    assert_eq!(c, AnimatedColor::black());

    let c: AnimatedColor = serde_json::from_value(serde_json::json!({
        "red": 10.0,
        "green": [{ "co": { "x": 1.0, "y": 0.0 } }, { "co": { "x": 3.0, "y": 100.0 } }],
        "blue": { "points": [] }
    }))
    .unwrap();
    let s = c.sample(2.0);
    assert_eq!((s.r, s.g, s.b, s.a), (10, 50, 0, 255));

    let back: AnimatedColor =
        serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
    assert_eq!(back, c);
}
