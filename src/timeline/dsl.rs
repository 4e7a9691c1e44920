use std::collections::BTreeSet;

use crate::{
    curve::keyframe::Curve,
    effects::params::Effect,
    foundation::core::{Fps, FrameSize},
    foundation::error::{CurveError, CurveResult},
    timeline::{clip::Clip, model::Timeline},
};

/// Builder for [`Timeline`](crate::Timeline).
pub struct TimelineBuilder {
    fps: Fps,
    size: FrameSize,
    duration_frames: u64,
    ids: BTreeSet<String>,
    clips: Vec<Clip>,
}

impl TimelineBuilder {
    /// Create a builder for a new timeline.
    pub fn new(fps: Fps, size: FrameSize, duration_frames: u64) -> Self {
        Self {
            fps,
            size,
            duration_frames,
            ids: BTreeSet::new(),
            clips: Vec::new(),
        }
    }

    /// Append a clip; ids must be unique.
    pub fn clip(mut self, clip: Clip) -> CurveResult<Self> {
        if !self.ids.insert(clip.id.clone()) {
            return Err(CurveError::validation(format!(
                "duplicate clip id '{}'",
                clip.id
            )));
        }
        self.clips.push(clip);
        Ok(self)
    }

    /// Build and validate the final [`Timeline`](crate::Timeline).
    pub fn build(self) -> CurveResult<Timeline> {
        let timeline = Timeline {
            fps: self.fps,
            size: self.size,
            duration_frames: self.duration_frames,
            clips: self.clips,
        };
        timeline.validate()?;
        Ok(timeline)
    }
}

/// Builder for [`Clip`](crate::Clip) values.
pub struct ClipBuilder {
    clip: Clip,
}

impl ClipBuilder {
    /// Create a clip builder with required `id` and `source`.
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            clip: Clip {
                id: id.into(),
                source: source.into(),
                layer: 0,
                position: 0.0,
                start: 0.0,
                end: 0.0,
                alpha: Curve::constant(1.0),
                effects: Vec::new(),
            },
        }
    }

    /// Set stacking layer.
    pub fn layer(mut self, layer: i32) -> Self {
        self.clip.layer = layer;
        self
    }

    /// Set timeline position in seconds.
    pub fn position(mut self, secs: f64) -> Self {
        self.clip.position = secs;
        self
    }

    /// Set the played source window in seconds.
    pub fn window(mut self, start: f64, end: f64) -> Self {
        self.clip.start = start;
        self.clip.end = end;
        self
    }

    /// Set opacity curve.
    pub fn alpha(mut self, alpha: Curve) -> Self {
        self.clip.alpha = alpha;
        self
    }

    /// Append an effect.
    pub fn effect(mut self, effect: Effect) -> Self {
        self.clip.effects.push(effect);
        self
    }

    /// Validate and return the clip.
    pub fn build(self) -> CurveResult<Clip> {
        self.clip.validate()?;
        Ok(self.clip)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
