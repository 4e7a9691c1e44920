use crate::curve::color::Rgba8;
use crate::curve::keyframe::Curve;
use crate::effects::params::{Effect, EffectKind, MaskShape};
use crate::foundation::core::FrameSize;
use serde::Serialize;
use smallvec::SmallVec;

/// Inputs shared by every effect resolved for one clip frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveCtx {
    /// Clip-local frame (1-based).
    pub frame: f64,
    /// Output frame dimensions, for parameters expressed as fractions.
    pub size: FrameSize,
}

/// Scalar inputs for one external effect kernel at one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedEffect {
    /// Effect discriminant.
    pub kind: EffectKind,
    /// Named parameter values.
    pub params: SmallVec<[ResolvedParam; 8]>,
}

/// One named parameter value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedParam {
    /// Parameter name.
    pub name: &'static str,
    /// Resolved value.
    pub value: ResolvedValue,
}

/// Resolved parameter payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// Real value.
    F64(f64),
    /// Integer value (radii, passes, thresholds).
    Int(i64),
    /// Flag.
    Bool(bool),
    /// Color.
    Color(Rgba8),
    /// Symbolic value.
    Str(&'static str),
}

impl ResolvedEffect {
    fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            params: SmallVec::new(),
        }
    }

    fn push(&mut self, name: &'static str, value: ResolvedValue) {
        self.params.push(ResolvedParam { name, value });
    }

    /// Value of parameter `name`.
    pub fn get(&self, name: &str) -> Option<&ResolvedValue> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    /// Numeric value of parameter `name`; integers are widened.
    pub fn f64(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ResolvedValue::F64(v) => Some(*v),
            ResolvedValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

// Kernels take pixel radii as truncated integers and skip non-positive ones.
fn radius_px(v: f64) -> i64 {
    if v.is_finite() { v.trunc().max(0.0) as i64 } else { 0 }
}

fn percent_to_level(v: f64) -> i64 {
    if !v.is_finite() {
        return 0;
    }
    ((v * 255.0 / 100.0).trunc() as i64).clamp(0, 255)
}

impl Effect {
    /// Sample every curve at `ctx.frame` and normalize into kernel inputs.
    pub fn resolve(&self, ctx: ResolveCtx) -> ResolvedEffect {
        use ResolvedValue::{Bool, Color, F64, Int, Str};

        let f = ctx.frame;
        let at = |c: &Curve| c.value_at(f);
        let width = f64::from(ctx.size.width);
        let height = f64::from(ctx.size.height);

        let mut out = ResolvedEffect::new(self.kind());
        match self {
            Effect::Blur(p) => {
                out.push("horizontal_radius", Int(radius_px(at(&p.horizontal_radius))));
                out.push("vertical_radius", Int(radius_px(at(&p.vertical_radius))));
                out.push("diagonal_radius", Int(radius_px(at(&p.diagonal_radius))));
                out.push("radial_blur_angle", Int(radius_px(at(&p.radial_blur_angle))));
                out.push("zoom_blur_radius", Int(radius_px(at(&p.zoom_blur_radius))));
                out.push("zoom_blur_center_x", F64(at(&p.zoom_blur_center_x)));
                out.push("zoom_blur_center_y", F64(at(&p.zoom_blur_center_y)));
                out.push("sigma", F64(at(&p.sigma).max(0.0)));
                let iterations = at(&p.iterations);
                let iterations = if iterations.is_finite() {
                    iterations.round().max(0.0) as i64
                } else {
                    0
                };
                out.push("iterations", Int(iterations));
            }
            Effect::Zoom(p) => {
                let anchor_x = at(&p.anchor_x);
                let anchor_y = at(&p.anchor_y);
                out.push("zoom_percent", F64(at(&p.zoom_percent).max(1.0)));
                out.push("anchor_x", F64(anchor_x));
                out.push("anchor_y", F64(anchor_y));
                out.push("anchor_x_px", Int((anchor_x * width).trunc() as i64));
                out.push("anchor_y_px", Int((anchor_y * height).trunc() as i64));
            }
            Effect::Mask(p) => {
                let shape = match p.shape {
                    MaskShape::Custom { .. } => "custom",
                    MaskShape::RoundedCorners { .. } => "rounded_corners",
                    MaskShape::CircleOut => "circle_out",
                };
                let contrast = at(&p.contrast);
                out.push("shape", Str(shape));
                out.push("brightness", F64(at(&p.brightness)));
                out.push("contrast", F64(contrast));
                out.push("contrast_factor", F64(20.0 / (20.0 - contrast).max(1e-5)));
                out.push("circle_radius", F64(at(&p.circle_radius).max(0.0)));
                out.push("replace_image", Bool(p.replace_image));
            }
            Effect::Bars(p) => {
                let size = |c: &Curve| at(c).clamp(0.0, 0.5);
                out.push("color", Color(p.color.sample(f)));
                out.push("left", F64(size(&p.left)));
                out.push("top", F64(size(&p.top)));
                out.push("right", F64(size(&p.right)));
                out.push("bottom", F64(size(&p.bottom)));
            }
            Effect::BorderReflectedMove(p) => {
                let dx = at(&p.dx);
                let dy = at(&p.dy);
                out.push("dx", F64(dx));
                out.push("dy", F64(dy));
                out.push("dx_px", F64(dx * width));
                out.push("dy_px", F64(dy * height));
            }
            Effect::BorderReflectedRotation(p) => {
                out.push("angle", F64(at(&p.angle)));
            }
            Effect::VerticalSplitShift(p) => {
                let shift = at(&p.shift_amount);
                out.push("shift_amount", F64(shift));
                out.push("shift_px", F64(shift * height));
                out.push("split_point", F64(at(&p.split_point).clamp(0.0, 1.0)));
            }
            Effect::Brightness(p) => {
                out.push("brightness", F64(at(&p.brightness)));
                out.push("contrast", F64(at(&p.contrast)));
            }
            Effect::Exposure(p) => {
                out.push("alpha", F64(at(&p.alpha).max(1.0)));
            }
            Effect::Wipe(p) => {
                let low = at(&p.levels_low_percent);
                let high = at(&p.levels_high_percent);
                out.push("levels_low_percent", F64(low));
                out.push("levels_high_percent", F64(high));
                out.push("low_threshold", Int(percent_to_level(low)));
                out.push("high_threshold", Int(percent_to_level(high)));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/resolve.rs"]
mod tests;
