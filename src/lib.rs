//! Keyframe curves for animating effect parameters over video frames.
//!
//! The crate is organised bottom-up:
//!
//! - [`Curve`] evaluates an ordered list of [`Point`]s with constant, linear or bezier
//!   interpolation at any frame
//! - [`build_transition_curve`] turns "value at fraction of the transition window" descriptions
//!   into absolute-frame curves anchored to a clip
//! - [`Effect`] parameter sets hold curves and resolve them into per-frame kernel inputs
//! - [`Timeline`] places clips and resolves every visible clip for a frame or span
//! - [`TransitionPreset`] builds ready-made two-clip transitions on top of all of the above
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod curve;
pub(crate) mod effects;
pub(crate) mod timeline;
pub(crate) mod transition;

pub use crate::foundation::core::{Fps, FrameSize, FrameSpan};
pub use crate::foundation::error::{CurveError, CurveResult};

pub use crate::curve::color::{AnimatedColor, Rgba8};
pub use crate::curve::keyframe::Curve;
pub use crate::curve::point::{
    Coordinate, DEFAULT_HANDLE_LEFT, DEFAULT_HANDLE_RIGHT, Interpolation, Point,
};
pub use crate::effects::params::{
    BarsParams, BlurParams, BrightnessParams, Effect, EffectKind, ExposureParams, MaskParams,
    MaskShape, MoveParams, NamedCurves, RotationParams, SplitShiftParams, WipeParams, ZoomParams,
};
pub use crate::effects::resolve::{ResolveCtx, ResolvedEffect, ResolvedParam, ResolvedValue};
pub use crate::timeline::clip::{Clip, ClipState};
pub use crate::timeline::dsl::{ClipBuilder, TimelineBuilder};
pub use crate::timeline::model::{FrameState, ResolveThreading, Timeline};
pub use crate::transition::builder::{
    BezierHandles, ClipRole, ClipSpan, ClipWindow, TransitionCurveSpec, build_transition_curve,
    to_frame,
};
pub use crate::transition::presets::{PresetOpts, TransitionPreset};
