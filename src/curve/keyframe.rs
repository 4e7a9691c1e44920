use crate::curve::bezier;
use crate::curve::point::{Coordinate, Interpolation, Point};
use crate::foundation::core::FrameSpan;
use crate::foundation::error::{CurveError, CurveResult};
use serde::{Deserialize, Serialize};

// ----------------------------
// Boundary (serde) structures
// ----------------------------

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CurveDef {
    pub(crate) points: Vec<Point>,
}

impl<'de> Deserialize<'de> for CurveDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            /// JSON shorthand: a bare number is a constant curve.
            Constant(f64),
            List(Vec<Point>),
            Obj { points: Option<Vec<Point>> },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Constant(v) => Ok(Self {
                points: vec![Point::linear(1.0, v)],
            }),
            Repr::List(points) => Ok(Self { points }),
            Repr::Obj { points } => Ok(Self {
                points: points.unwrap_or_default(),
            }),
        }
    }
}

impl TryFrom<CurveDef> for Curve {
    type Error = CurveError;

    fn try_from(def: CurveDef) -> Result<Self, Self::Error> {
        Curve::new(def.points)
    }
}

impl From<Curve> for CurveDef {
    fn from(curve: Curve) -> Self {
        Self {
            points: curve.points,
        }
    }
}

// ----------------------------
// Runtime structure
// ----------------------------

/// Piecewise scalar function of frame number made of ordered control points.
///
/// Points are kept in non-decreasing frame order; equal frames are allowed and the later
/// point wins at that frame, except on the first frame, where the earliest point wins.
/// Evaluation never fails:
///
/// - no points: `0.0`
/// - at or before the first frame: the first value
/// - at or after the last frame: the last value
/// - in between: the left point's [`Interpolation`] decides the shape of the segment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveDef", into = "CurveDef")]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    /// Curve with no points; evaluates to `0.0` everywhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a curve from a literal list of points.
    ///
    /// Rejects non-finite coordinates and frames that go backwards.
    pub fn new(points: Vec<Point>) -> CurveResult<Self> {
        let mut curve = Self {
            points: Vec::with_capacity(points.len()),
        };
        for p in points {
            curve.push(p)?;
        }
        Ok(curve)
    }

    /// Single-point curve holding `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![Point::linear(1.0, value)],
        }
    }

    /// Append a control point at `frame`.
    pub fn add_point(
        &mut self,
        frame: f64,
        value: f64,
        interpolation: Interpolation,
    ) -> CurveResult<()> {
        self.push(Point::with_interpolation(frame, value, interpolation))
    }

    /// Append a prepared control point (handles included).
    pub fn push(&mut self, point: Point) -> CurveResult<()> {
        if !point.is_finite() {
            return Err(CurveError::keyframe(format!(
                "non-finite keyframe at ({}, {})",
                point.co.x, point.co.y
            )));
        }
        if let Some(last) = self.points.last()
            && point.co.x < last.co.x
        {
            return Err(CurveError::keyframe(format!(
                "non-monotonic keyframe: frame {} is before previous frame {}",
                point.co.x, last.co.x
            )));
        }
        self.points.push(point);
        Ok(())
    }

    /// Replace the tangent handles of the point at `index`.
    pub fn set_handles(
        &mut self,
        index: usize,
        left: Option<Coordinate>,
        right: Option<Coordinate>,
    ) -> CurveResult<()> {
        let len = self.points.len();
        let point = self.points.get_mut(index).ok_or_else(|| {
            CurveError::keyframe(format!("point index {index} out of range (len {len})"))
        })?;
        if left.is_some_and(|c| !c.is_finite()) || right.is_some_and(|c| !c.is_finite()) {
            return Err(CurveError::keyframe(format!(
                "non-finite handle for point {index}"
            )));
        }
        if left.is_some() {
            point.handle_left = left;
        }
        if right.is_some() {
            point.handle_right = right;
        }
        Ok(())
    }

    /// Evaluate the curve at an arbitrary (possibly fractional) frame.
    pub fn value_at(&self, frame: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };
        if frame <= first.co.x || frame.is_nan() {
            return first.co.y;
        }
        if frame >= last.co.x {
            return last.co.y;
        }

        // first.x < frame < last.x, so 1 <= idx < len and a.x <= frame < b.x.
        let idx = self.points.partition_point(|p| p.co.x <= frame);
        let a = &self.points[idx - 1];
        let b = &self.points[idx];

        match a.interpolation {
            Interpolation::Constant => a.co.y,
            Interpolation::Linear => {
                let t = (frame - a.co.x) / (b.co.x - a.co.x);
                a.co.y + (b.co.y - a.co.y) * t
            }
            Interpolation::Bezier => bezier::segment_value(a, b, frame),
        }
    }

    /// Evaluate every frame of `span` in order.
    pub fn sample(&self, span: FrameSpan) -> Vec<f64> {
        span.frames().map(|f| self.value_at(f as f64)).collect()
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` when the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Control point at `index`, if any.
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All control points in frame order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First control point.
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last control point.
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// `(first frame, last frame)` of the control points.
    pub fn frame_bounds(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.co.x, self.points.last()?.co.x))
    }

    /// Return `true` when every point carries the same value.
    pub fn is_constant(&self) -> bool {
        match self.points.first() {
            None => true,
            Some(first) => self.points.iter().all(|p| p.co.y == first.co.y),
        }
    }
}

impl From<f64> for Curve {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/keyframe.rs"]
mod tests;
