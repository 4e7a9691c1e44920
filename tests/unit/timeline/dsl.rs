use super::*;
use crate::effects::params::ZoomParams;

#[test]
fn builds_timeline_with_clips() {
    let a = ClipBuilder::new("a", "a.mp4")
        .window(0.0, 2.0)
        .build()
        .unwrap();
    let b = ClipBuilder::new("b", "b.mp4")
        .layer(2)
        .position(1.5)
        .window(0.0, 2.0)
        .alpha(Curve::constant(0.5))
        .effect(Effect::Zoom(ZoomParams::default()))
        .build()
        .unwrap();

    let tl = TimelineBuilder::new(Fps::default(), FrameSize::default(), 105)
        .clip(a)
        .unwrap()
        .clip(b)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(tl.clips.len(), 2);
    assert_eq!(tl.clips[1].layer, 2);
    assert_eq!(tl.clips[1].effects.len(), 1);
}

#[test]
fn duplicate_ids_are_rejected() {
    let a = ClipBuilder::new("a", "a.mp4").window(0.0, 1.0).build().unwrap();
    let err = TimelineBuilder::new(Fps::default(), FrameSize::default(), 30)
        .clip(a.clone())
        .unwrap()
        .clip(a)
        .err()
        .unwrap();
    assert!(err.to_string().contains("duplicate clip id"));
}

#[test]
fn clip_builder_validates() {
    assert!(ClipBuilder::new("a", "a.mp4").window(2.0, 1.0).build().is_err());
    assert!(ClipBuilder::new("", "a.mp4").window(0.0, 1.0).build().is_err());
}

#[test]
fn empty_timeline_is_rejected() {
    assert!(
        TimelineBuilder::new(Fps::default(), FrameSize::default(), 0)
            .build()
            .is_err()
    );
    let size = FrameSize {
        width: 0,
        height: 1080,
    };
    assert!(TimelineBuilder::new(Fps::default(), size, 10).build().is_err());
}
