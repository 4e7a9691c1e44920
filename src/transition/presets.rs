use std::fmt;
use std::str::FromStr;

use crate::{
    curve::color::AnimatedColor,
    curve::keyframe::Curve,
    curve::point::Interpolation,
    effects::params::{
        BarsParams, BlurParams, Effect, MaskParams, MoveParams, RotationParams, SplitShiftParams,
        ZoomParams,
    },
    foundation::core::{Fps, FrameSize},
    foundation::error::{CurveError, CurveResult},
    timeline::{clip::Clip, dsl::ClipBuilder, dsl::TimelineBuilder, model::Timeline},
    transition::builder::{
        ClipRole, ClipSpan, TransitionCurveSpec, build_transition_curve, to_frame,
    },
};

/// Scripted two-clip (or single-clip) transitions built from keyframe curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionPreset {
    /// Both clips slide towards the bottom right with a diagonal motion blur.
    PanBottomRight,
    /// Both clips slide left with a horizontal motion blur.
    PanLeft,
    /// Blur out, cross-fade, blur in.
    Blur,
    /// Vertical-only variant of [`TransitionPreset::Blur`].
    VerticalBlur,
    /// Spin with radial blur while cutting between clips.
    RotationalBlur,
    /// Zoom punch with zoom blur and a sweeping anchor.
    Woosh,
    /// Plain cross-fade.
    Dissolve,
    /// Cross-fade while the outgoing clip blurs.
    DissolveBlur,
    /// Circular mask closing onto the center of one clip.
    CircleOut,
    /// Circular mask opening from the center of one clip.
    CircleIn,
    /// Black bars close top/bottom then open left/right.
    BarnDoors,
    /// Top and bottom halves shift apart and back.
    VerticalSplit,
    /// Outgoing clip zooms in while the incoming one fades and zooms out.
    ZoomIn,
}

const ALL: [TransitionPreset; 13] = [
    TransitionPreset::PanBottomRight,
    TransitionPreset::PanLeft,
    TransitionPreset::Blur,
    TransitionPreset::VerticalBlur,
    TransitionPreset::RotationalBlur,
    TransitionPreset::Woosh,
    TransitionPreset::Dissolve,
    TransitionPreset::DissolveBlur,
    TransitionPreset::CircleOut,
    TransitionPreset::CircleIn,
    TransitionPreset::BarnDoors,
    TransitionPreset::VerticalSplit,
    TransitionPreset::ZoomIn,
];

/// Inputs for [`TransitionPreset::timeline`].
#[derive(Clone, Debug, PartialEq)]
pub struct PresetOpts {
    /// Media for the outgoing clip (and the only clip of circle presets).
    pub leading_source: String,
    /// Media for the incoming clip; defaults to `leading_source`.
    pub trailing_source: Option<String>,
    /// Transition length; defaults to the preset's own duration.
    pub duration_secs: Option<f64>,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output size; also scales the circle mask radius.
    pub size: FrameSize,
}

impl PresetOpts {
    /// Options with default duration, 30 fps and 1920x1080 output.
    pub fn new(leading_source: impl Into<String>) -> Self {
        Self {
            leading_source: leading_source.into(),
            trailing_source: None,
            duration_secs: None,
            fps: Fps::default(),
            size: FrameSize::default(),
        }
    }

    /// Set the incoming clip source.
    pub fn trailing(mut self, source: impl Into<String>) -> Self {
        self.trailing_source = Some(source.into());
        self
    }

    /// Override the transition length.
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_secs = Some(secs);
        self
    }
}

impl TransitionPreset {
    /// Every preset, in catalog order.
    pub fn all() -> &'static [TransitionPreset] {
        &ALL
    }

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PanBottomRight => "pan_bottom_right",
            Self::PanLeft => "pan_left",
            Self::Blur => "blur",
            Self::VerticalBlur => "vertical_blur",
            Self::RotationalBlur => "rotational_blur",
            Self::Woosh => "woosh",
            Self::Dissolve => "dissolve",
            Self::DissolveBlur => "dissolve_blur",
            Self::CircleOut => "circle_out",
            Self::CircleIn => "circle_in",
            Self::BarnDoors => "barn_doors",
            Self::VerticalSplit => "vertical_split",
            Self::ZoomIn => "zoom_in",
        }
    }

    /// Transition length used when [`PresetOpts::duration_secs`] is unset.
    pub fn default_duration_secs(self) -> f64 {
        match self {
            Self::RotationalBlur => 0.3,
            Self::Woosh => 0.6,
            Self::CircleOut | Self::CircleIn => 1.0,
            _ => 0.5,
        }
    }

    /// Number of clips placed on the timeline.
    pub fn clip_count(self) -> usize {
        match self {
            Self::CircleOut | Self::CircleIn => 1,
            _ => 2,
        }
    }

    fn leading_end_secs(self, duration: f64) -> f64 {
        let end: f64 = match self {
            Self::PanBottomRight => duration,
            Self::Woosh => 1.0,
            Self::VerticalSplit => 0.5,
            _ => 2.0,
        };
        end.max(duration)
    }

    fn output_secs(self, duration: f64) -> f64 {
        match self {
            Self::PanBottomRight => duration,
            Self::CircleOut | Self::CircleIn => 70.0 / 30.0,
            _ => 4.0,
        }
    }

    /// Lay out the clips of this preset and build every animated parameter.
    pub fn timeline(self, opts: &PresetOpts) -> CurveResult<Timeline> {
        let duration = opts
            .duration_secs
            .unwrap_or_else(|| self.default_duration_secs());
        if !duration.is_finite() || duration <= 0.0 {
            return Err(CurveError::validation(format!(
                "preset '{}' duration must be finite and > 0, got {duration}",
                self.name()
            )));
        }
        opts.fps.validate()?;

        let end = self.leading_end_secs(duration);
        let trailing_position = match self {
            Self::BarnDoors => end,
            _ => end - duration,
        };
        let plan = Plan {
            fps: opts.fps,
            size: opts.size,
            duration,
            window: ClipSpan::new(0.0, end),
        };

        let leading = ClipBuilder::new("leading", opts.leading_source.clone()).window(0.0, end);
        let trailing = ClipBuilder::new(
            "trailing",
            opts.trailing_source
                .clone()
                .unwrap_or_else(|| opts.leading_source.clone()),
        )
        .position(trailing_position)
        .window(0.0, end);

        let clips = self.clips(&plan, leading, trailing)?;
        let frames = to_frame(self.output_secs(duration), opts.fps);
        tracing::debug!(
            preset = self.name(),
            clips = clips.len(),
            frames,
            duration,
            "planned transition"
        );

        clips
            .into_iter()
            .try_fold(
                TimelineBuilder::new(opts.fps, opts.size, frames),
                TimelineBuilder::clip,
            )?
            .build()
    }

    fn clips(self, plan: &Plan, lead: ClipBuilder, trail: ClipBuilder) -> CurveResult<Vec<Clip>> {
        let clips = match self {
            Self::PanBottomRight | Self::PanLeft => {
                let diagonal = self == Self::PanBottomRight;
                let lead_move = plan.lead(eased(0.0, 0.0, 1.0, 1.0, [0.88, 0.0, 0.12, 1.0]))?;
                let trail_move = plan.trail(eased(0.0, -1.0, 1.0, 0.0, [0.88, 0.0, 0.12, 1.0]))?;
                let lead_blur = plan.lead(eased(0.0, 0.0, 0.5, 250.0, [0.67, 0.0, 0.83, 0.83]))?;
                let trail_blur = plan.trail(eased(0.5, 250.0, 1.0, 0.0, [0.17, 0.17, 0.33, 1.0]))?;
                let alpha = plan.trail(
                    TransitionCurveSpec::ramp(0.2, 0.0, 0.6, 0.99)
                        .interpolation(Interpolation::Linear),
                )?;

                let pan = |dx: Curve| MoveParams {
                    dy: if diagonal { dx.clone() } else { Curve::constant(0.0) },
                    dx,
                };
                let motion_blur = |radius: Curve| {
                    if diagonal {
                        BlurParams {
                            diagonal_radius: radius,
                            ..BlurParams::idle()
                        }
                    } else {
                        BlurParams {
                            horizontal_radius: radius,
                            ..BlurParams::idle()
                        }
                    }
                };

                vec![
                    lead.layer(1)
                        .effect(Effect::BorderReflectedMove(pan(lead_move)))
                        .effect(Effect::Blur(motion_blur(lead_blur)))
                        .build()?,
                    trail
                        .layer(2)
                        .alpha(alpha)
                        .effect(Effect::BorderReflectedMove(pan(trail_move)))
                        .effect(Effect::Blur(motion_blur(trail_blur)))
                        .build()?,
                ]
            }
            Self::Blur | Self::VerticalBlur => {
                let vertical_only = self == Self::VerticalBlur;
                let (out_handles, in_handles) = if vertical_only {
                    ([0.80, 0.0, 0.34, 1.0], [0.64, 0.0, 0.26, 1.0])
                } else {
                    ([0.33, 0.0, 0.0, 1.0], [0.17, 0.18, 0.67, 1.0])
                };
                let blur_out = plan.lead(eased(0.0, 0.0, 0.5, 100.0, out_handles))?;
                let blur_in = plan.trail(eased(0.5, 100.0, 1.0, 0.0, in_handles))?;
                let alpha = plan.trail(eased(0.0, 0.0, 1.0, 1.0, [0.89, 0.0, 0.11, 1.0]))?;

                let blur = |radius: Curve| BlurParams {
                    horizontal_radius: if vertical_only {
                        Curve::constant(0.0)
                    } else {
                        radius.clone()
                    },
                    vertical_radius: radius,
                    ..BlurParams::idle()
                };

                vec![
                    lead.layer(1).effect(Effect::Blur(blur(blur_out))).build()?,
                    trail
                        .layer(2)
                        .alpha(alpha)
                        .effect(Effect::Blur(blur(blur_in)))
                        .build()?,
                ]
            }
            Self::RotationalBlur => {
                let spin = [0.68, 0.0, 0.0, 1.0];
                let alpha = plan.lead(
                    TransitionCurveSpec::ramp(0.3499, 0.999, 0.35, 0.0)
                        .interpolation(Interpolation::Linear),
                )?;
                let angle_out = plan.lead(eased(0.0, 0.0, 1.0, 180.0, spin))?;
                let radial_out = plan.lead(eased(0.0, 0.0, 1.0, 80.0, spin))?;
                let angle_in = plan.trail(eased(0.0, -180.0, 1.0, 0.0, spin))?;
                let radial_in = plan.trail(eased(0.0, 80.0, 1.0, 0.0, spin))?;

                let radial = |angle: Curve| BlurParams {
                    radial_blur_angle: angle,
                    ..BlurParams::idle()
                };

                vec![
                    lead.layer(2)
                        .alpha(alpha)
                        .effect(Effect::BorderReflectedRotation(RotationParams {
                            angle: angle_out,
                        }))
                        .effect(Effect::Blur(radial(radial_out)))
                        .build()?,
                    trail
                        .layer(1)
                        .effect(Effect::BorderReflectedRotation(RotationParams {
                            angle: angle_in,
                        }))
                        .effect(Effect::Blur(radial(radial_in)))
                        .build()?,
                ]
            }
            Self::Woosh => {
                let alpha = plan.lead(
                    TransitionCurveSpec::ramp(0.33, 1.0, 0.66, 0.0)
                        .interpolation(Interpolation::Linear),
                )?;
                let punch = |role| -> CurveResult<(ZoomParams, BlurParams)> {
                    let zoom = plan.build(
                        TransitionCurveSpec::new(100.0)
                            .at(0.0, 100.0)
                            .at(0.5, 120.0)
                            .at(1.0, 100.0)
                            .handles(0.71, 0.0, 0.83, 0.83)
                            .handles(0.17, 0.17, 0.29, 1.0),
                        role,
                    )?;
                    let anchor_x = plan.build(
                        eased(0.0, 0.18, 0.5, 0.82, [0.71, 0.0, 0.29, 1.0]),
                        role,
                    )?;
                    let zoom_blur = plan.build(
                        TransitionCurveSpec::new(0.0)
                            .at(0.0, 0.0)
                            .at(0.5, 120.0)
                            .at(1.0, 0.0)
                            .handles(0.71, 0.0, 0.83, 0.83)
                            .handles(0.17, 0.17, 0.19, 1.0),
                        role,
                    )?;
                    let center = plan.build(
                        eased(0.0, 0.3, 1.0, 0.6, [0.71, 0.0, 0.29, 1.0]),
                        role,
                    )?;
                    Ok((
                        ZoomParams {
                            zoom_percent: zoom,
                            anchor_x,
                            anchor_y: Curve::constant(0.0),
                        },
                        BlurParams {
                            zoom_blur_radius: zoom_blur,
                            zoom_blur_center_x: center.clone(),
                            zoom_blur_center_y: center,
                            ..BlurParams::idle()
                        },
                    ))
                };
                let (lead_zoom, lead_blur) = punch(ClipRole::Leading)?;
                let (trail_zoom, trail_blur) = punch(ClipRole::Trailing)?;

                vec![
                    lead.layer(2)
                        .alpha(alpha)
                        .effect(Effect::Zoom(lead_zoom))
                        .effect(Effect::Blur(lead_blur))
                        .build()?,
                    trail
                        .layer(1)
                        .effect(Effect::Zoom(trail_zoom))
                        .effect(Effect::Blur(trail_blur))
                        .build()?,
                ]
            }
            Self::Dissolve | Self::DissolveBlur => {
                let fade = [0.33, 0.0, 0.67, 1.0];
                let alpha = plan.trail(eased(0.0, 0.0, 1.0, 1.0, fade))?;
                if self == Self::Dissolve {
                    vec![lead.build()?, trail.alpha(alpha).build()?]
                } else {
                    let radius = plan.lead(eased(0.0, 0.0, 1.0, 20.0, fade))?;
                    vec![
                        lead.layer(1)
                            .effect(Effect::Blur(BlurParams {
                                horizontal_radius: radius.clone(),
                                vertical_radius: radius,
                                ..BlurParams::idle()
                            }))
                            .build()?,
                        trail.layer(2).alpha(alpha).build()?,
                    ]
                }
            }
            Self::CircleOut | Self::CircleIn => {
                let full = plan.size.diagonal() / 2.0;
                let radius = if self == Self::CircleOut {
                    plan.lead(
                        TransitionCurveSpec::new(0.0)
                            .at(0.0, full)
                            .at(1.0, 1e-7)
                            .interpolation(Interpolation::Linear),
                    )?
                } else {
                    plan.trail(
                        TransitionCurveSpec::new(0.001)
                            .at(0.0, 0.001)
                            .at(1.0, full)
                            .interpolation(Interpolation::Linear),
                    )?
                };
                vec![lead.effect(Effect::Mask(MaskParams::circle(radius))).build()?]
            }
            Self::BarnDoors => {
                let closing = plan.lead(TransitionCurveSpec::ramp(0.0, 0.0, 1.0, 0.5))?;
                let opening = plan.trail(TransitionCurveSpec::ramp(0.0, 0.5, 1.0, 0.0))?;
                vec![
                    lead.effect(Effect::Bars(BarsParams {
                        color: AnimatedColor::black(),
                        top: closing.clone(),
                        bottom: closing,
                        ..BarsParams::default()
                    }))
                    .build()?,
                    trail
                        .effect(Effect::Bars(BarsParams {
                            color: AnimatedColor::black(),
                            left: opening.clone(),
                            right: opening,
                            ..BarsParams::default()
                        }))
                        .build()?,
                ]
            }
            Self::VerticalSplit => {
                let ease = [0.86, 0.0, 0.14, 1.0];
                let apart = plan.lead(eased(0.0, 0.0, 1.0, 1.0, ease))?;
                let back = plan.trail(eased(0.0, -1.0, 1.0, 0.0, ease))?;
                let shift = |amount: Curve| SplitShiftParams {
                    shift_amount: amount,
                    ..SplitShiftParams::default()
                };
                vec![
                    lead.layer(1)
                        .effect(Effect::VerticalSplitShift(shift(apart)))
                        .build()?,
                    trail
                        .layer(2)
                        .effect(Effect::VerticalSplitShift(shift(back)))
                        .build()?,
                ]
            }
            Self::ZoomIn => {
                let push = [0.58, 0.0, 0.13, 1.0];
                let zoom_out = plan.lead(eased(0.0, 100.0, 1.0, 250.0, push))?;
                let zoom_in = plan.trail(eased(0.0, 40.0, 1.0, 100.0, push))?;
                let alpha = plan.trail(eased(0.33, 0.0, 0.66, 1.0, [0.33, 0.0, 0.67, 1.0]))?;
                let zoom = |percent: Curve| ZoomParams {
                    zoom_percent: percent,
                    ..ZoomParams::default()
                };
                vec![
                    lead.layer(1).effect(Effect::Zoom(zoom(zoom_out))).build()?,
                    trail
                        .layer(2)
                        .alpha(alpha)
                        .effect(Effect::Zoom(zoom(zoom_in)))
                        .build()?,
                ]
            }
        };
        Ok(clips)
    }
}

struct Plan {
    fps: Fps,
    size: FrameSize,
    duration: f64,
    window: ClipSpan,
}

impl Plan {
    fn build(&self, spec: TransitionCurveSpec, role: ClipRole) -> CurveResult<Curve> {
        build_transition_curve(&spec, self.duration, self.fps, &self.window, role)
    }

    fn lead(&self, spec: TransitionCurveSpec) -> CurveResult<Curve> {
        self.build(spec, ClipRole::Leading)
    }

    fn trail(&self, spec: TransitionCurveSpec) -> CurveResult<Curve> {
        self.build(spec, ClipRole::Trailing)
    }
}

/// Two-point ramp with one set of bezier handles.
fn eased(start: f64, from: f64, end: f64, to: f64, h: [f64; 4]) -> TransitionCurveSpec {
    TransitionCurveSpec::ramp(start, from, end, to).handles(h[0], h[1], h[2], h[3])
}

impl fmt::Display for TransitionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransitionPreset {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        ALL.iter()
            .copied()
            .find(|p| p.name() == key)
            .ok_or_else(|| CurveError::validation(format!("unknown transition preset '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/presets.rs"]
mod tests;
