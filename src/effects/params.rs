use crate::curve::color::AnimatedColor;
use crate::curve::keyframe::Curve;
use crate::foundation::error::{CurveError, CurveResult};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Discriminant of an [`Effect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Box, diagonal, radial and zoom blur.
    Blur,
    /// Crop-and-scale zoom around an anchor.
    Zoom,
    /// Alpha mask (custom image, rounded corners or circle).
    Mask,
    /// Colored bars over the frame edges.
    Bars,
    /// Translation with mirrored borders.
    BorderReflectedMove,
    /// Rotation with mirrored borders.
    BorderReflectedRotation,
    /// Opposite vertical shifts of the two frame halves.
    VerticalSplitShift,
    /// Brightness and contrast.
    Brightness,
    /// Channel gain.
    Exposure,
    /// Luma-threshold wipe.
    Wipe,
}

impl EffectKind {
    /// Stable class name, also used as the JSON `type` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blur => "Blur",
            Self::Zoom => "Zoom",
            Self::Mask => "Mask",
            Self::Bars => "Bars",
            Self::BorderReflectedMove => "BorderReflectedMove",
            Self::BorderReflectedRotation => "BorderReflectedRotation",
            Self::VerticalSplitShift => "VerticalSplitShift",
            Self::Brightness => "Brightness",
            Self::Exposure => "Exposure",
            Self::Wipe => "Wipe",
        }
    }
}

/// An effect instance whose parameters are curves over clip-local frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// See [`BlurParams`].
    Blur(BlurParams),
    /// See [`ZoomParams`].
    Zoom(ZoomParams),
    /// See [`MaskParams`].
    Mask(MaskParams),
    /// See [`BarsParams`].
    Bars(BarsParams),
    /// See [`MoveParams`].
    BorderReflectedMove(MoveParams),
    /// See [`RotationParams`].
    BorderReflectedRotation(RotationParams),
    /// See [`SplitShiftParams`].
    VerticalSplitShift(SplitShiftParams),
    /// See [`BrightnessParams`].
    Brightness(BrightnessParams),
    /// See [`ExposureParams`].
    Exposure(ExposureParams),
    /// See [`WipeParams`].
    Wipe(WipeParams),
}

/// Curves of an effect with their parameter names.
pub type NamedCurves<'a> = SmallVec<[(&'static str, &'a Curve); 12]>;

impl Effect {
    /// Discriminant of this effect.
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Blur(_) => EffectKind::Blur,
            Self::Zoom(_) => EffectKind::Zoom,
            Self::Mask(_) => EffectKind::Mask,
            Self::Bars(_) => EffectKind::Bars,
            Self::BorderReflectedMove(_) => EffectKind::BorderReflectedMove,
            Self::BorderReflectedRotation(_) => EffectKind::BorderReflectedRotation,
            Self::VerticalSplitShift(_) => EffectKind::VerticalSplitShift,
            Self::Brightness(_) => EffectKind::Brightness,
            Self::Exposure(_) => EffectKind::Exposure,
            Self::Wipe(_) => EffectKind::Wipe,
        }
    }

    /// Stable class name of this effect.
    pub fn class_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Every animated parameter with its name, in declaration order.
    pub fn curves(&self) -> NamedCurves<'_> {
        let mut out = NamedCurves::new();
        match self {
            Self::Blur(p) => out.extend([
                ("horizontal_radius", &p.horizontal_radius),
                ("vertical_radius", &p.vertical_radius),
                ("diagonal_radius", &p.diagonal_radius),
                ("radial_blur_angle", &p.radial_blur_angle),
                ("zoom_blur_radius", &p.zoom_blur_radius),
                ("zoom_blur_center_x", &p.zoom_blur_center_x),
                ("zoom_blur_center_y", &p.zoom_blur_center_y),
                ("sigma", &p.sigma),
                ("iterations", &p.iterations),
            ]),
            Self::Zoom(p) => out.extend([
                ("zoom_percent", &p.zoom_percent),
                ("anchor_x", &p.anchor_x),
                ("anchor_y", &p.anchor_y),
            ]),
            Self::Mask(p) => out.extend([
                ("brightness", &p.brightness),
                ("contrast", &p.contrast),
                ("circle_radius", &p.circle_radius),
            ]),
            Self::Bars(p) => {
                for (name, curve) in p.color.channels() {
                    out.push((name, curve));
                }
                out.extend([
                    ("left", &p.left),
                    ("top", &p.top),
                    ("right", &p.right),
                    ("bottom", &p.bottom),
                ]);
            }
            Self::BorderReflectedMove(p) => out.extend([("dx", &p.dx), ("dy", &p.dy)]),
            Self::BorderReflectedRotation(p) => out.push(("angle", &p.angle)),
            Self::VerticalSplitShift(p) => out.extend([
                ("shift_amount", &p.shift_amount),
                ("split_point", &p.split_point),
            ]),
            Self::Brightness(p) => {
                out.extend([("brightness", &p.brightness), ("contrast", &p.contrast)])
            }
            Self::Exposure(p) => out.push(("alpha", &p.alpha)),
            Self::Wipe(p) => out.extend([
                ("levels_low_percent", &p.levels_low_percent),
                ("levels_high_percent", &p.levels_high_percent),
            ]),
        }
        out
    }

    /// Last frame at which any parameter curve changes, if any curve has points.
    pub fn last_keyframe(&self) -> Option<f64> {
        self.curves()
            .iter()
            .filter_map(|(_, c)| c.frame_bounds().map(|(_, last)| last))
            .reduce(f64::max)
    }

    /// Check constraints that curves alone cannot express.
    pub fn validate(&self) -> CurveResult<()> {
        if let Self::Mask(p) = self {
            match &p.shape {
                MaskShape::Custom { source } if source.trim().is_empty() => {
                    return Err(CurveError::validation(
                        "Mask custom shape requires a non-empty source",
                    ));
                }
                MaskShape::RoundedCorners {
                    radius_x,
                    radius_y,
                } if !(radius_x.is_finite()
                    && radius_y.is_finite()
                    && *radius_x >= 0.0
                    && *radius_y >= 0.0) =>
                {
                    return Err(CurveError::validation(format!(
                        "Mask rounded corner radii must be finite and >= 0, got ({radius_x}, {radius_y})"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Box blur radii plus diagonal, radial and zoom blur.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    /// Horizontal box radius in pixels.
    pub horizontal_radius: Curve,
    /// Vertical box radius in pixels.
    pub vertical_radius: Curve,
    /// Diagonal blur radius in pixels.
    pub diagonal_radius: Curve,
    /// Radial blur angle in degrees.
    pub radial_blur_angle: Curve,
    /// Zoom blur radius in pixels.
    pub zoom_blur_radius: Curve,
    /// Zoom blur center, fraction of width.
    pub zoom_blur_center_x: Curve,
    /// Zoom blur center, fraction of height.
    pub zoom_blur_center_y: Curve,
    /// Gaussian sigma.
    pub sigma: Curve,
    /// Box blur passes.
    pub iterations: Curve,
}

impl BlurParams {
    /// Every blur disabled; centers, sigma and passes at their defaults.
    pub fn idle() -> Self {
        Self {
            horizontal_radius: Curve::constant(0.0),
            vertical_radius: Curve::constant(0.0),
            ..Self::default()
        }
    }
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            horizontal_radius: Curve::constant(6.0),
            vertical_radius: Curve::constant(6.0),
            diagonal_radius: Curve::constant(0.0),
            radial_blur_angle: Curve::constant(0.0),
            zoom_blur_radius: Curve::constant(0.0),
            zoom_blur_center_x: Curve::constant(0.5),
            zoom_blur_center_y: Curve::constant(0.5),
            sigma: Curve::constant(3.0),
            iterations: Curve::constant(3.0),
        }
    }
}

/// Zoom in percent around a normalized anchor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomParams {
    /// Zoom in percent; `100` is identity.
    pub zoom_percent: Curve,
    /// Anchor, fraction of width.
    pub anchor_x: Curve,
    /// Anchor, fraction of height.
    pub anchor_y: Curve,
}

impl Default for ZoomParams {
    fn default() -> Self {
        Self {
            zoom_percent: Curve::constant(100.0),
            anchor_x: Curve::constant(0.5),
            anchor_y: Curve::constant(0.5),
        }
    }
}

/// Shape source of a [`MaskParams`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaskShape {
    /// Grayscale image read from `source`.
    Custom {
        /// Path of the mask image.
        source: String,
    },
    /// Rounded rectangle covering the frame.
    RoundedCorners {
        /// Horizontal corner radius in pixels.
        radius_x: f64,
        /// Vertical corner radius in pixels.
        radius_y: f64,
    },
    /// Circle centered on the frame, radius from [`MaskParams::circle_radius`].
    CircleOut,
}

/// Alpha mask with brightness/contrast shaping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    /// Mask source.
    pub shape: MaskShape,
    /// Brightness offset, `-1..1`.
    pub brightness: Curve,
    /// Contrast hardness, `0..20`.
    pub contrast: Curve,
    /// Circle radius in pixels for [`MaskShape::CircleOut`].
    pub circle_radius: Curve,
    /// Replace the frame with the mask itself.
    pub replace_image: bool,
}

impl MaskParams {
    /// Circle mask with the given radius curve.
    pub fn circle(circle_radius: Curve) -> Self {
        Self {
            shape: MaskShape::CircleOut,
            brightness: Curve::constant(0.0),
            circle_radius,
            ..Self::default()
        }
    }
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            shape: MaskShape::CircleOut,
            brightness: Curve::constant(0.0),
            contrast: Curve::constant(3.0),
            circle_radius: Curve::constant(0.0),
            replace_image: false,
        }
    }
}

/// Colored bars; sizes are fractions of the frame in `0..0.5`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarsParams {
    /// Bar color.
    pub color: AnimatedColor,
    /// Left bar width.
    pub left: Curve,
    /// Top bar height.
    pub top: Curve,
    /// Right bar width.
    pub right: Curve,
    /// Bottom bar height.
    pub bottom: Curve,
}

impl Default for BarsParams {
    fn default() -> Self {
        Self {
            color: AnimatedColor::black(),
            left: Curve::constant(0.0),
            top: Curve::constant(0.0),
            right: Curve::constant(0.0),
            bottom: Curve::constant(0.0),
        }
    }
}

/// Translation as fractions of frame width and height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveParams {
    /// Horizontal offset, fraction of width.
    pub dx: Curve,
    /// Vertical offset, fraction of height.
    pub dy: Curve,
}

impl Default for MoveParams {
    fn default() -> Self {
        Self {
            dx: Curve::constant(0.0),
            dy: Curve::constant(0.0),
        }
    }
}

/// Rotation in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationParams {
    /// Angle in degrees.
    pub angle: Curve,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            angle: Curve::constant(0.0),
        }
    }
}

/// Vertical shift of the two halves, as a fraction of frame height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitShiftParams {
    /// Shift, fraction of height.
    pub shift_amount: Curve,
    /// Split position, fraction of width.
    pub split_point: Curve,
}

impl Default for SplitShiftParams {
    fn default() -> Self {
        Self {
            shift_amount: Curve::constant(0.0),
            split_point: Curve::constant(0.5),
        }
    }
}

/// Brightness `-1..1` and contrast `-128..128`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessParams {
    /// Brightness offset.
    pub brightness: Curve,
    /// Contrast.
    pub contrast: Curve,
}

impl Default for BrightnessParams {
    fn default() -> Self {
        Self {
            brightness: Curve::constant(0.0),
            contrast: Curve::constant(3.0),
        }
    }
}

/// Channel gain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureParams {
    /// Gain; values below `1` are treated as `1`.
    pub alpha: Curve,
}

impl Default for ExposureParams {
    fn default() -> Self {
        Self {
            alpha: Curve::constant(1.0),
        }
    }
}

/// Luma thresholds in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WipeParams {
    /// Pixels darker than this become black.
    pub levels_low_percent: Curve,
    /// Pixels brighter than this become white.
    pub levels_high_percent: Curve,
}

impl Default for WipeParams {
    fn default() -> Self {
        Self {
            levels_low_percent: Curve::constant(0.0),
            levels_high_percent: Curve::constant(100.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/params.rs"]
mod tests;
