use crate::{
    error::{PointmorphError, PointmorphResult},
    morph_ease::Ease,
    shape::{ShapeKind, ShapeParams},
};

/// Device class resolved once at mount; selects the particle budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParticleBudget {
    pub desktop: usize,
    pub mobile: usize,
}

impl ParticleBudget {
    pub fn for_class(self, class: DeviceClass) -> usize {
        match class {
            DeviceClass::Desktop => self.desktop,
            DeviceClass::Mobile => self.mobile,
        }
    }
}

/// How blended targets become output positions each frame.
///
/// Independent of the dwell timing policy; the two compose freely.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BlendPolicy {
    /// Exponential smoothing toward the interpolated target:
    /// `current += (target - current) * factor` per frame.
    Smoothed { factor: f32 },
    /// `mix(from, to, blend)` every frame, no carried state.
    Direct,
}

impl BlendPolicy {
    pub fn validate(&self) -> PointmorphResult<()> {
        if let Self::Smoothed { factor } = self {
            if !factor.is_finite() || *factor <= 0.0 || *factor > 1.0 {
                return Err(PointmorphError::validation(
                    "Smoothed blend factor must be in (0, 1]",
                ));
            }
        }
        Ok(())
    }
}

/// A named morph configuration: which shapes, in what order, with what
/// particle budget and timing policies.
///
/// The roster and its ordering are content decisions; the engine only
/// requires at least one shape and degrades to static display below two.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MorphVariant {
    pub name: String,
    pub shapes: Vec<ShapeKind>,
    pub budget: ParticleBudget,
    /// Fraction of each segment the outgoing shape holds before transitioning.
    pub dwell_ratio: f32,
    pub ease: Ease,
    pub blend: BlendPolicy,
    pub shape_params: ShapeParams,
    /// Per-point sprite scale range, drawn once at instantiation.
    pub size_range: [f32; 2],
    /// Global determinism seed for instantiation.
    pub seed: u64,
}

impl MorphVariant {
    /// Hero section timeline: orb -> hard-hat -> hammer -> neural-net ->
    /// microphone -> orb.
    pub fn hero() -> Self {
        Self {
            name: "hero".to_string(),
            shapes: vec![
                ShapeKind::Orb,
                ShapeKind::HardHat,
                ShapeKind::Hammer,
                ShapeKind::NeuralNet,
                ShapeKind::Microphone,
                ShapeKind::Orb,
            ],
            budget: ParticleBudget {
                desktop: 2600,
                mobile: 1200,
            },
            dwell_ratio: 0.65,
            ease: Ease::Smoothstep,
            blend: BlendPolicy::Smoothed { factor: 0.04 },
            shape_params: ShapeParams::default(),
            size_range: [0.6, 1.8],
            seed: 1,
        }
    }

    /// Pain-points timeline: shattered orb -> network -> gear -> shield.
    pub fn pain_points() -> Self {
        Self {
            name: "pain-points".to_string(),
            shapes: vec![
                ShapeKind::ShatteredOrb,
                ShapeKind::Network,
                ShapeKind::Gear,
                ShapeKind::Shield,
            ],
            budget: ParticleBudget {
                desktop: 1800,
                mobile: 900,
            },
            dwell_ratio: 0.65,
            ease: Ease::Smoothstep,
            blend: BlendPolicy::Direct,
            shape_params: ShapeParams::default(),
            size_range: [0.5, 1.5],
            seed: 2,
        }
    }

    pub fn validate(&self) -> PointmorphResult<()> {
        if self.name.trim().is_empty() {
            return Err(PointmorphError::validation("variant name must be non-empty"));
        }
        if self.shapes.is_empty() {
            return Err(PointmorphError::validation(
                "variant must list at least one shape",
            ));
        }
        if !self.dwell_ratio.is_finite() || !(0.0..1.0).contains(&self.dwell_ratio) {
            return Err(PointmorphError::validation(
                "dwell_ratio must be in [0, 1)",
            ));
        }
        self.blend.validate()?;
        if !self.shape_params.radius.is_finite() || self.shape_params.radius <= 0.0 {
            return Err(PointmorphError::validation("shape radius must be > 0"));
        }
        let [lo, hi] = self.size_range;
        if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || lo > hi {
            return Err(PointmorphError::validation(
                "size_range must be finite with 0 < lo <= hi",
            ));
        }
        Ok(())
    }
}

pub struct VariantBuilder {
    variant: MorphVariant,
}

impl VariantBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            variant: MorphVariant {
                name: name.into(),
                shapes: Vec::new(),
                budget: ParticleBudget {
                    desktop: 2000,
                    mobile: 1000,
                },
                dwell_ratio: 0.65,
                ease: Ease::Smoothstep,
                blend: BlendPolicy::Smoothed { factor: 0.04 },
                shape_params: ShapeParams::default(),
                size_range: [0.6, 1.8],
                seed: 0,
            },
        }
    }

    pub fn shape(mut self, kind: ShapeKind) -> Self {
        self.variant.shapes.push(kind);
        self
    }

    pub fn shapes(mut self, kinds: impl IntoIterator<Item = ShapeKind>) -> Self {
        self.variant.shapes.extend(kinds);
        self
    }

    pub fn budget(mut self, desktop: usize, mobile: usize) -> Self {
        self.variant.budget = ParticleBudget { desktop, mobile };
        self
    }

    pub fn dwell_ratio(mut self, ratio: f32) -> Self {
        self.variant.dwell_ratio = ratio;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.variant.ease = ease;
        self
    }

    pub fn blend(mut self, blend: BlendPolicy) -> Self {
        self.variant.blend = blend;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.variant.shape_params.radius = radius;
        self
    }

    pub fn size_range(mut self, lo: f32, hi: f32) -> Self {
        self.variant.size_range = [lo, hi];
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.variant.seed = seed;
        self
    }

    pub fn build(self) -> PointmorphResult<MorphVariant> {
        self.variant.validate()?;
        Ok(self.variant)
    }
}
