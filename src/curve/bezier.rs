use crate::curve::point::{Coordinate, Point};
use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv};

const SOLVE_MAX_ITERATIONS: usize = 48;
const SOLVE_EPSILON: f64 = 1e-12;
const ACCEPT_EPSILON: f64 = 1e-7;

/// Cubic from `(0, 0)` to `(1, 1)` in normalized segment space.
///
/// Handle `x` values are clamped into `[0, 1]`, which keeps `x(t)` monotonic so every `u`
/// has exactly one parameter `t`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NormalizedSegment {
    curve: CubicBez,
}

impl NormalizedSegment {
    pub(crate) fn new(right: Coordinate, left: Coordinate) -> Self {
        let p1 = kurbo::Point::new(right.x.clamp(0.0, 1.0), right.y);
        let p2 = kurbo::Point::new(left.x.clamp(0.0, 1.0), left.y);
        Self {
            curve: CubicBez::new(kurbo::Point::ZERO, p1, p2, kurbo::Point::new(1.0, 1.0)),
        }
    }

    /// Value progress in `y` for horizontal progress `u`; may overshoot `[0, 1]`.
    pub(crate) fn progress(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        match self.solve_t(u) {
            Some(t) => self.curve.eval(t).y,
            None => u,
        }
    }

    /// Invert `x(t) = u` with Newton steps kept inside a shrinking bisection bracket.
    pub(crate) fn solve_t(&self, u: f64) -> Option<f64> {
        let deriv = self.curve.deriv();
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        let mut t = u;

        for _ in 0..SOLVE_MAX_ITERATIONS {
            let err = self.curve.eval(t).x - u;
            if !err.is_finite() {
                return None;
            }
            if err.abs() < SOLVE_EPSILON {
                return Some(t);
            }
            if err < 0.0 {
                lo = t;
            } else {
                hi = t;
            }

            let slope = deriv.eval(t).x;
            let newton = if slope.abs() > 1e-9 {
                t - err / slope
            } else {
                f64::NAN
            };
            t = if newton > lo && newton < hi {
                newton
            } else {
                0.5 * (lo + hi)
            };
        }

        let err = self.curve.eval(t).x - u;
        (err.abs() < ACCEPT_EPSILON).then_some(t)
    }
}

/// Value at `frame` on the bezier segment `a -> b`, with `a.x < frame < b.x`.
pub(crate) fn segment_value(a: &Point, b: &Point, frame: f64) -> f64 {
    let width = b.co.x - a.co.x;
    let u = (frame - a.co.x) / width;
    let dy = b.co.y - a.co.y;

    if a.handle_right.is_none() && b.handle_left.is_none() {
        return a.co.y + dy * u;
    }

    let seg = NormalizedSegment::new(a.right_handle_or_default(), b.left_handle_or_default());
    a.co.y + dy * seg.progress(u)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/bezier.rs"]
mod tests;
