use crate::curve::keyframe::Curve;
use crate::effects::params::Effect;
use crate::effects::resolve::{ResolveCtx, ResolvedEffect};
use crate::foundation::core::{Fps, FrameSize};
use crate::foundation::error::{CurveError, CurveResult};
use crate::transition::builder::ClipWindow;
use serde::{Deserialize, Serialize};

const TIME_EPSILON: f64 = 1e-9;

/// A media clip placed on the timeline.
///
/// `start..end` is the played window of the source (seconds); `position` is where that window
/// begins on the timeline. Curves on the clip (alpha, effect parameters) are indexed by
/// clip-local 1-based frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique id within the timeline.
    pub id: String,
    /// Media source path or URI.
    pub source: String,
    /// Stacking order; higher layers draw on top.
    #[serde(default)]
    pub layer: i32,
    /// Timeline position of the clip start, in seconds.
    #[serde(default)]
    pub position: f64,
    /// Source start, in seconds.
    #[serde(default)]
    pub start: f64,
    /// Source end, in seconds.
    pub end: f64,
    /// Opacity curve in `0..=1`.
    #[serde(default = "opaque")]
    pub alpha: Curve,
    /// Effects applied in order.
    #[serde(default)]
    pub effects: Vec<Effect>,
}

fn opaque() -> Curve {
    Curve::constant(1.0)
}

/// Resolved state of one visible clip at one timeline frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClipState {
    /// Clip id.
    pub id: String,
    /// Clip layer.
    pub layer: i32,
    /// Clip-local frame (1-based).
    pub local_frame: u64,
    /// Opacity clamped into `0..=1`.
    pub alpha: f64,
    /// Effect inputs in application order.
    pub effects: Vec<ResolvedEffect>,
}

impl Clip {
    /// Played length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }

    /// Timeline second at which the clip stops playing.
    pub fn timeline_end_secs(&self) -> f64 {
        self.position + self.duration_secs()
    }

    /// Map a 1-based timeline frame to a 1-based clip-local frame.
    ///
    /// Returns `None` when the clip is not playing at that frame.
    pub fn local_frame(&self, timeline_frame: u64, fps: Fps) -> Option<u64> {
        if timeline_frame == 0 {
            return None;
        }
        let secs = fps.frames_to_secs(timeline_frame - 1);
        if secs + TIME_EPSILON < self.position || secs + TIME_EPSILON >= self.timeline_end_secs() {
            return None;
        }
        let source_secs = secs - self.position + self.start;
        let local = (source_secs * fps.as_f64()).round().max(0.0) as u64;
        Some(local + 1)
    }

    /// Resolve alpha and effects at a clip-local frame.
    pub fn resolve(&self, local_frame: u64, size: FrameSize) -> ClipState {
        let frame = local_frame as f64;
        let ctx = ResolveCtx { frame, size };
        ClipState {
            id: self.id.clone(),
            layer: self.layer,
            local_frame,
            alpha: self.alpha.value_at(frame).clamp(0.0, 1.0),
            effects: self.effects.iter().map(|fx| fx.resolve(ctx)).collect(),
        }
    }

    /// Check ids, timing and effect parameters.
    pub fn validate(&self) -> CurveResult<()> {
        if self.id.trim().is_empty() {
            return Err(CurveError::validation("clip id must be non-empty"));
        }
        if self.source.trim().is_empty() {
            return Err(CurveError::validation(format!(
                "clip '{}' source must be non-empty",
                self.id
            )));
        }
        for (name, v) in [
            ("position", self.position),
            ("start", self.start),
            ("end", self.end),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CurveError::validation(format!(
                    "clip '{}' {name} must be finite and >= 0, got {v}",
                    self.id
                )));
            }
        }
        if self.end < self.start {
            return Err(CurveError::validation(format!(
                "clip '{}' end ({}) must be >= start ({})",
                self.id, self.end, self.start
            )));
        }
        for fx in &self.effects {
            fx.validate().map_err(|e| {
                CurveError::validation(format!(
                    "clip '{}' effect {}: {e}",
                    self.id,
                    fx.class_name()
                ))
            })?;
        }
        Ok(())
    }
}

impl ClipWindow for Clip {
    fn start_secs(&self) -> f64 {
        self.start
    }

    fn end_secs(&self) -> f64 {
        self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/clip.rs"]
mod tests;
