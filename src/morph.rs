use crate::{
    core::PointCloud,
    error::{PointmorphError, PointmorphResult},
    model::{BlendPolicy, MorphVariant},
    morph_ease::Ease,
    sequence::ShapeSequence,
};

/// Timing and blending policies for one mounted morph. Dwell and blend are
/// independent knobs; any combination is valid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphConfig {
    pub dwell_ratio: f32,
    pub ease: Ease,
    pub blend: BlendPolicy,
}

impl MorphConfig {
    pub fn from_variant(variant: &MorphVariant) -> Self {
        Self {
            dwell_ratio: variant.dwell_ratio,
            ease: variant.ease,
            blend: variant.blend,
        }
    }

    pub fn validate(&self) -> PointmorphResult<()> {
        if !self.dwell_ratio.is_finite() || !(0.0..1.0).contains(&self.dwell_ratio) {
            return Err(PointmorphError::validation("dwell_ratio must be in [0, 1)"));
        }
        self.blend.validate()
    }
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            dwell_ratio: 0.65,
            ease: Ease::Smoothstep,
            blend: BlendPolicy::Smoothed { factor: 0.04 },
        }
    }
}

/// Per-frame derived values; the live positions buffer lives on the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphState {
    pub segment_index: usize,
    pub blend_factor: f32,
}

/// Map clamped progress onto (segment index, normalized progress within it).
///
/// `segment_index` is always in `[0, num_shapes - 2]` for `num_shapes >= 2`;
/// one shape (or none) pins it to 0 with zero progress.
pub fn segment_at(num_shapes: usize, progress: f32) -> (usize, f32) {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if num_shapes <= 1 {
        return (0, 0.0);
    }

    let segments = num_shapes - 1;
    let scaled = progress * segments as f32;
    let idx = (scaled.floor() as usize).min(segments - 1);
    let seg_prog = (scaled - idx as f32).clamp(0.0, 1.0);
    (idx, seg_prog)
}

/// Dwell-then-ramp raw blend: zero through the first `dwell_ratio` of the
/// segment, then a linear ramp reaching exactly 1 at the segment end.
pub fn dwell_blend(segment_progress: f32, dwell_ratio: f32) -> f32 {
    let t = segment_progress.clamp(0.0, 1.0);
    let d = dwell_ratio.clamp(0.0, 0.9999);
    if t <= d {
        0.0
    } else {
        ((t - d) / (1.0 - d)).min(1.0)
    }
}

/// The stateful morph stepper.
///
/// Owns the two endpoint buffers bound from the sequence plus the live
/// positions buffer. Endpoints are swapped only when the segment index
/// crosses a boundary; mid-segment frames never reread the source shapes.
pub struct MorphEngine {
    config: MorphConfig,
    num_shapes: usize,
    state: MorphState,
    from: PointCloud,
    to: PointCloud,
    current: PointCloud,
}

impl MorphEngine {
    pub fn new(seq: &ShapeSequence, config: MorphConfig) -> PointmorphResult<Self> {
        config.validate()?;

        let num_shapes = seq.num_shapes();
        let from = seq.shapes()[0].cloud.clone();
        let to = seq.shapes()[usize::min(1, num_shapes - 1)].cloud.clone();
        let current = from.clone();

        Ok(Self {
            config,
            num_shapes,
            state: MorphState {
                segment_index: 0,
                blend_factor: 0.0,
            },
            from,
            to,
            current,
        })
    }

    pub fn config(&self) -> MorphConfig {
        self.config
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    /// The live, per-frame positions buffer.
    pub fn positions(&self) -> &PointCloud {
        &self.current
    }

    /// Advance one frame. Out-of-range progress is clamped, never an error;
    /// a single-shape sequence holds static.
    pub fn step(&mut self, seq: &ShapeSequence, progress: f32) -> PointmorphResult<MorphState> {
        if seq.num_shapes() != self.num_shapes || seq.particle_count() != self.current.len() {
            return Err(PointmorphError::morph(
                "sequence does not match the engine it was mounted with",
            ));
        }

        let (segment, seg_prog) = segment_at(self.num_shapes, progress);
        let blend_factor = if self.num_shapes <= 1 {
            0.0
        } else {
            self.config
                .ease
                .apply(dwell_blend(seg_prog, self.config.dwell_ratio))
        };

        if segment != self.state.segment_index {
            self.rebind(seq, segment);
        }

        let from = self.from.as_slice();
        let to = self.to.as_slice();
        match self.config.blend {
            BlendPolicy::Direct => {
                for (i, c) in self.current.as_mut_slice().iter_mut().enumerate() {
                    *c = from[i].lerp(to[i], blend_factor);
                }
            }
            BlendPolicy::Smoothed { factor } => {
                for (i, c) in self.current.as_mut_slice().iter_mut().enumerate() {
                    let target = from[i].lerp(to[i], blend_factor);
                    *c += (target - *c) * factor;
                }
            }
        }

        self.state = MorphState {
            segment_index: segment,
            blend_factor,
        };
        Ok(self.state)
    }

    fn rebind(&mut self, seq: &ShapeSequence, segment: usize) {
        let last = self.num_shapes - 1;
        self.from
            .clone_from(&seq.shapes()[segment.min(last)].cloud);
        self.to
            .clone_from(&seq.shapes()[(segment + 1).min(last)].cloud);
        tracing::debug!(segment, "rebound morph endpoint buffers");
    }
}
