use crate::curve::keyframe::Curve;
use crate::curve::point::{Coordinate, Interpolation};
use crate::foundation::core::Fps;
use crate::foundation::error::{CurveError, CurveResult};
use serde::{Deserialize, Serialize};

/// Which side of a transition a curve is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipRole {
    /// Clip that ends the transition: fractions count back from its end.
    Leading,
    /// Clip that starts the transition: fractions count forward from its start.
    Trailing,
}

/// Source-time window of a clip, in seconds.
pub trait ClipWindow {
    /// First source second played by the clip.
    fn start_secs(&self) -> f64;
    /// Last source second played by the clip.
    fn end_secs(&self) -> f64;
}

/// Plain `[start, end]` window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipSpan {
    /// Start in seconds.
    pub start: f64,
    /// End in seconds.
    pub end: f64,
}

impl ClipSpan {
    /// Create a window.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

impl ClipWindow for ClipSpan {
    fn start_secs(&self) -> f64 {
        self.start
    }

    fn end_secs(&self) -> f64 {
        self.end
    }
}

/// Normalized tangents for one segment between consecutive real points.
///
/// Serialized as `[right_x, right_y, left_x, left_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BezierHandles {
    /// `x` of the handle leaving the earlier point.
    pub right_x: f64,
    /// `y` of the handle leaving the earlier point.
    pub right_y: f64,
    /// `x` of the handle entering the later point.
    pub left_x: f64,
    /// `y` of the handle entering the later point.
    pub left_y: f64,
}

impl BezierHandles {
    /// Create handles for one segment.
    pub const fn new(right_x: f64, right_y: f64, left_x: f64, left_y: f64) -> Self {
        Self {
            right_x,
            right_y,
            left_x,
            left_y,
        }
    }
}

impl From<[f64; 4]> for BezierHandles {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BezierHandles> for [f64; 4] {
    fn from(h: BezierHandles) -> Self {
        [h.right_x, h.right_y, h.left_x, h.left_y]
    }
}

/// "Value at fraction of the transition window" description of one animated parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionCurveSpec {
    /// Ordered `(fraction, value)` pairs; fraction `0` is the window start, `1` its end.
    pub time_fractions: Vec<(f64, f64)>,
    /// Value held before the window.
    pub default_value: f64,
    /// Tangents per consecutive pair of real points, consumed in order.
    #[serde(default)]
    pub bezier_handles: Vec<BezierHandles>,
    /// Interpolation given to every emitted point.
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl TransitionCurveSpec {
    /// Empty bezier spec holding `default_value` before the window.
    pub fn new(default_value: f64) -> Self {
        Self {
            time_fractions: Vec::new(),
            default_value,
            bezier_handles: Vec::new(),
            interpolation: Interpolation::Bezier,
        }
    }

    /// Two-point ramp `from -> to` between `start` and `end` fractions.
    ///
    /// The value before the window is `from`.
    pub fn ramp(start: f64, from: f64, end: f64, to: f64) -> Self {
        Self::new(from).at(start, from).at(end, to)
    }

    /// Append a `(fraction, value)` pair.
    pub fn at(mut self, fraction: f64, value: f64) -> Self {
        self.time_fractions.push((fraction, value));
        self
    }

    /// Append tangents for the next segment.
    pub fn handles(mut self, right_x: f64, right_y: f64, left_x: f64, left_y: f64) -> Self {
        self.bezier_handles
            .push(BezierHandles::new(right_x, right_y, left_x, left_y));
        self
    }

    /// Set the interpolation of every emitted point.
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}

/// Convert seconds into a 1-based frame number, `max(round(fps * secs), 1)`.
pub fn to_frame(secs: f64, fps: Fps) -> u64 {
    let f = (fps.as_f64() * secs).round();
    if f >= 1.0 { f as u64 } else { 1 }
}

/// Build an absolute-frame curve for one clip of a transition.
///
/// Emits, in order: an anchor at `to_frame(0)` with the default value, a hold point one frame
/// before the first real point (also at the default value), then one point per
/// `(fraction, value)` pair. Fractions map to seconds as
/// `end - (1 - fraction) * duration` for [`ClipRole::Leading`] and
/// `start + fraction * duration` for [`ClipRole::Trailing`].
///
/// With [`Interpolation::Bezier`], handle `k` becomes the right handle of real point `k` and
/// the left handle of real point `k + 1`. Missing handles leave straight tangents.
#[tracing::instrument(skip(spec, clip), fields(pairs = spec.time_fractions.len()))]
pub fn build_transition_curve(
    spec: &TransitionCurveSpec,
    duration_secs: f64,
    fps: Fps,
    clip: &impl ClipWindow,
    role: ClipRole,
) -> CurveResult<Curve> {
    fps.validate()?;
    if !duration_secs.is_finite() || duration_secs < 0.0 {
        return Err(CurveError::validation(format!(
            "transition duration must be finite and >= 0, got {duration_secs}"
        )));
    }
    let (start, end) = (clip.start_secs(), clip.end_secs());
    if !start.is_finite() || !end.is_finite() {
        return Err(CurveError::validation(format!(
            "clip window must be finite, got [{start}, {end}]"
        )));
    }

    let kind = spec.interpolation;
    let mut curve = Curve::empty();
    curve.add_point(to_frame(0.0, fps) as f64, spec.default_value, kind)?;

    for (i, &(fraction, value)) in spec.time_fractions.iter().enumerate() {
        let secs = match role {
            ClipRole::Leading => end - (1.0 - fraction) * duration_secs,
            ClipRole::Trailing => start + fraction * duration_secs,
        };
        let frame = to_frame(secs, fps);
        if i == 0 {
            let hold = frame.saturating_sub(1).max(1);
            curve.add_point(hold as f64, spec.default_value, kind)?;
        }
        curve.add_point(frame as f64, value, kind)?;
    }

    let segments = spec.time_fractions.len().saturating_sub(1);
    if kind == Interpolation::Bezier {
        for (k, h) in spec.bezier_handles.iter().take(segments).enumerate() {
            curve.set_handles(2 + k, None, Some(Coordinate::new(h.right_x, h.right_y)))?;
            curve.set_handles(3 + k, Some(Coordinate::new(h.left_x, h.left_y)), None)?;
        }
        if spec.bezier_handles.len() > segments {
            tracing::warn!(
                handles = spec.bezier_handles.len(),
                segments,
                "ignoring surplus bezier handles"
            );
        }
    } else if !spec.bezier_handles.is_empty() {
        tracing::debug!(?kind, "bezier handles ignored for non-bezier interpolation");
    }

    tracing::debug!(
        points = curve.len(),
        bounds = ?curve.frame_bounds(),
        "built transition curve"
    );
    Ok(curve)
}

#[cfg(test)]
#[path = "../../tests/unit/transition/builder.rs"]
mod tests;
