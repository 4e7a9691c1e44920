use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{Fps, FrameSize, FrameSpan};
use crate::foundation::error::{CurveError, CurveResult};
use crate::timeline::clip::{Clip, ClipState};

/// A set of clips sharing one frame rate and output size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Frame rate.
    pub fps: Fps,
    /// Output size in pixels.
    pub size: FrameSize,
    /// Number of timeline frames (1-based, inclusive).
    pub duration_frames: u64,
    /// Clips in declaration order.
    pub clips: Vec<Clip>,
}

/// Everything visible at one timeline frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameState {
    /// 1-based timeline frame.
    pub frame: u64,
    /// Visible clips, bottom layer first.
    pub clips: Vec<ClipState>,
}

/// Threading options for [`Timeline::resolve_span`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveThreading {
    /// Resolve frames on a rayon pool.
    pub parallel: bool,
    /// Pool size; `None` lets rayon pick.
    pub threads: Option<usize>,
}

impl Timeline {
    /// Parse and validate a timeline from JSON.
    pub fn from_reader(reader: impl std::io::Read) -> CurveResult<Self> {
        let timeline: Self = serde_json::from_reader(reader)
            .map_err(|e| CurveError::serde(format!("timeline json: {e}")))?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Read a timeline JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open timeline '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Write pretty-printed JSON.
    pub fn to_writer_pretty(&self, writer: impl std::io::Write) -> CurveResult<()> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| CurveError::serde(format!("timeline json: {e}")))
    }

    /// Write pretty-printed JSON to a file, creating parent directories.
    pub fn to_path(&self, path: impl AsRef<Path>) -> CurveResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir '{}'", parent.display()))?;
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("create timeline '{}'", path.display()))?;
        self.to_writer_pretty(std::io::BufWriter::new(file))
    }

    /// Check frame rate, size, duration, clip ids and every clip.
    pub fn validate(&self) -> CurveResult<()> {
        self.fps.validate()?;
        if self.size.width == 0 || self.size.height == 0 {
            return Err(CurveError::validation("timeline size must be non-zero"));
        }
        if self.duration_frames == 0 {
            return Err(CurveError::validation(
                "timeline duration_frames must be >= 1",
            ));
        }
        let mut ids = BTreeSet::new();
        for clip in &self.clips {
            if !ids.insert(clip.id.as_str()) {
                return Err(CurveError::validation(format!(
                    "duplicate clip id '{}'",
                    clip.id
                )));
            }
            clip.validate()?;
        }
        Ok(())
    }

    /// Full 1-based span of the timeline.
    pub fn span(&self) -> CurveResult<FrameSpan> {
        FrameSpan::leading(self.duration_frames)
    }

    /// Look up a clip by id.
    pub fn clip(&self, id: &str) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// Resolve every visible clip at `frame`.
    pub fn resolve_frame(&self, frame: u64) -> CurveResult<FrameState> {
        if frame == 0 || frame > self.duration_frames {
            return Err(CurveError::evaluation(format!(
                "frame {frame} is outside 1..={}",
                self.duration_frames
            )));
        }

        let mut visible: Vec<(&Clip, u64)> = self
            .clips
            .iter()
            .filter_map(|clip| clip.local_frame(frame, self.fps).map(|local| (clip, local)))
            .collect();
        // Stable: equal layers keep declaration order.
        visible.sort_by_key(|(clip, _)| clip.layer);

        Ok(FrameState {
            frame,
            clips: visible
                .into_iter()
                .map(|(clip, local)| clip.resolve(local, self.size))
                .collect(),
        })
    }

    /// Resolve a span of frames, optionally in parallel. Output is in frame order.
    #[tracing::instrument(skip(self), fields(frames = span.len_frames()))]
    pub fn resolve_span(
        &self,
        span: FrameSpan,
        threading: ResolveThreading,
    ) -> CurveResult<Vec<FrameState>> {
        if span.last > self.duration_frames {
            return Err(CurveError::validation(format!(
                "span {}..={} exceeds timeline duration {}",
                span.first, span.last, self.duration_frames
            )));
        }

        if !threading.parallel {
            return span.frames().map(|f| self.resolve_frame(f)).collect();
        }

        let pool = build_thread_pool(threading.threads)?;
        tracing::debug!(threads = pool.current_num_threads(), "resolving in parallel");
        pool.install(|| {
            span.frames()
                .into_par_iter()
                .map(|f| self.resolve_frame(f))
                .collect()
        })
    }
}

fn build_thread_pool(threads: Option<usize>) -> CurveResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CurveError::validation(
            "resolve threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CurveError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
