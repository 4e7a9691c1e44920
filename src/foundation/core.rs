use crate::foundation::error::{CurveError, CurveResult};

/// Inclusive 1-based frame span `[first, last]` used when sampling curves and timelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpan {
    /// First frame (inclusive, >= 1).
    pub first: u64,
    /// Last frame (inclusive).
    pub last: u64,
}

impl FrameSpan {
    /// Create a validated span with `1 <= first <= last`.
    pub fn new(first: u64, last: u64) -> CurveResult<Self> {
        if first == 0 {
            return Err(CurveError::validation("FrameSpan first must be >= 1"));
        }
        if first > last {
            return Err(CurveError::validation("FrameSpan first must be <= last"));
        }
        Ok(Self { first, last })
    }

    /// Span covering frames `1..=count`.
    pub fn leading(count: u64) -> CurveResult<Self> {
        Self::new(1, count)
    }

    /// Number of frames contained in the span.
    pub fn len_frames(self) -> u64 {
        self.last - self.first + 1
    }

    /// Return `true` when `frame` is inside the span.
    pub fn contains(self, frame: u64) -> bool {
        self.first <= frame && frame <= self.last
    }

    /// Iterate frames in ascending order.
    pub fn frames(self) -> std::ops::RangeInclusive<u64> {
        self.first..=self.last
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> CurveResult<Self> {
        if den == 0 {
            return Err(CurveError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CurveError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Whole-number frame rate, `n/1`.
    pub fn whole(num: u32) -> CurveResult<Self> {
        Self::new(num, 1)
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Validate a value that may have been built by struct literal or deserialized.
    pub fn validate(self) -> CurveResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Output frame dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameSize {
    /// Create validated, non-empty dimensions.
    pub fn new(width: u32, height: u32) -> CurveResult<Self> {
        if width == 0 || height == 0 {
            return Err(CurveError::validation(format!(
                "frame size must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Length of the frame diagonal in pixels.
    pub fn diagonal(self) -> f64 {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        w.hypot(h)
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
