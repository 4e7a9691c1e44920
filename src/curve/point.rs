use serde::{Deserialize, Serialize};

/// An `(x, y)` pair: `x` is usually a frame number, `y` a parameter value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Horizontal component (frame).
    pub x: f64,
    /// Vertical component (value).
    pub y: f64,
}

impl Coordinate {
    /// Create a coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return `true` when both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Coordinate> for kurbo::Point {
    fn from(c: Coordinate) -> Self {
        kurbo::Point::new(c.x, c.y)
    }
}

impl From<kurbo::Point> for Coordinate {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// How the segment starting at a point moves toward the next point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Hold the left value until the next point's frame.
    Constant,
    /// Straight line between the two values.
    Linear,
    /// Cubic bezier shaped by the normalized tangent handles.
    #[default]
    Bezier,
}

/// Right handle used when a bezier point has none: one third along the chord.
pub const DEFAULT_HANDLE_RIGHT: Coordinate = Coordinate::new(1.0 / 3.0, 1.0 / 3.0);
/// Left handle used when a bezier point has none: two thirds along the chord.
pub const DEFAULT_HANDLE_LEFT: Coordinate = Coordinate::new(2.0 / 3.0, 2.0 / 3.0);

/// One keyframe control point.
///
/// Handles live in normalized `(0..1, 0..1)` segment space: `(0, 0)` is the left point of the
/// segment and `(1, 1)` the right one. They only matter for [`Interpolation::Bezier`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Anchor `(frame, value)`.
    pub co: Coordinate,
    /// Interpolation of the segment starting at this point.
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Tangent handle entering this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_left: Option<Coordinate>,
    /// Tangent handle leaving this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_right: Option<Coordinate>,
}

impl Point {
    /// Bezier point without handles (straight tangents).
    pub fn new(frame: f64, value: f64) -> Self {
        Self::with_interpolation(frame, value, Interpolation::Bezier)
    }

    /// Point with an explicit interpolation kind.
    pub fn with_interpolation(frame: f64, value: f64, interpolation: Interpolation) -> Self {
        Self {
            co: Coordinate::new(frame, value),
            interpolation,
            handle_left: None,
            handle_right: None,
        }
    }

    /// Linear point.
    pub fn linear(frame: f64, value: f64) -> Self {
        Self::with_interpolation(frame, value, Interpolation::Linear)
    }

    /// Constant (step) point.
    pub fn constant(frame: f64, value: f64) -> Self {
        Self::with_interpolation(frame, value, Interpolation::Constant)
    }

    /// Set the handle entering this point.
    pub fn with_handle_left(mut self, x: f64, y: f64) -> Self {
        self.handle_left = Some(Coordinate::new(x, y));
        self
    }

    /// Set the handle leaving this point.
    pub fn with_handle_right(mut self, x: f64, y: f64) -> Self {
        self.handle_right = Some(Coordinate::new(x, y));
        self
    }

    /// Frame of the anchor.
    pub fn frame(&self) -> f64 {
        self.co.x
    }

    /// Value of the anchor.
    pub fn value(&self) -> f64 {
        self.co.y
    }

    /// Handle leaving this point, falling back to a straight tangent.
    pub fn right_handle_or_default(&self) -> Coordinate {
        self.handle_right.unwrap_or(DEFAULT_HANDLE_RIGHT)
    }

    /// Handle entering this point, falling back to a straight tangent.
    pub fn left_handle_or_default(&self) -> Coordinate {
        self.handle_left.unwrap_or(DEFAULT_HANDLE_LEFT)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.co.is_finite()
            && self.handle_left.is_none_or(Coordinate::is_finite)
            && self.handle_right.is_none_or(Coordinate::is_finite)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/point.rs"]
mod tests;
