use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    core::PointCloud,
    error::{PointmorphError, PointmorphResult},
    model::{DeviceClass, MorphVariant},
    shape::{self, ShapeKind},
};

/// One named cloud in a sequence.
#[derive(Clone, Debug)]
pub struct SequenceShape {
    pub kind: ShapeKind,
    pub cloud: PointCloud,
}

/// A mounted morph timeline: every cloud has the same particle count, and the
/// per-point sprite attributes are drawn once and never regenerated for the
/// lifetime of the instance. Rebinding for a different device class means
/// instantiating a fresh sequence.
#[derive(Clone, Debug)]
pub struct ShapeSequence {
    shapes: Vec<SequenceShape>,
    count: usize,
    sizes: Vec<f32>,
    seeds: Vec<f32>,
}

impl ShapeSequence {
    /// Generate all clouds and per-point attributes for `variant` at the
    /// budget of `class`. Reproducible: the RNG derives from the variant seed
    /// mixed with the device class.
    #[tracing::instrument(skip(variant), fields(variant = %variant.name))]
    pub fn instantiate(variant: &MorphVariant, class: DeviceClass) -> PointmorphResult<Self> {
        variant.validate()?;

        let n = variant.budget.for_class(class);
        let class_name = match class {
            DeviceClass::Desktop => "desktop",
            DeviceClass::Mobile => "mobile",
        };
        let mut rng = ChaCha8Rng::seed_from_u64(stable_hash64(variant.seed, class_name));

        let shapes: Vec<SequenceShape> = variant
            .shapes
            .iter()
            .map(|&kind| SequenceShape {
                kind,
                cloud: shape::generate(kind, n, &variant.shape_params, &mut rng),
            })
            .collect();

        let [lo, hi] = variant.size_range;
        let sizes: Vec<f32> = (0..n).map(|_| rng.gen_range(lo..=hi)).collect();
        let seeds: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();

        tracing::debug!(
            shapes = shapes.len(),
            particles = n,
            "instantiated shape sequence"
        );

        Ok(Self {
            shapes,
            count: n,
            sizes,
            seeds,
        })
    }

    /// Assemble a sequence from prepared clouds and attributes. All clouds
    /// must share one length, matched by the attribute arrays.
    pub fn from_parts(
        shapes: Vec<SequenceShape>,
        sizes: Vec<f32>,
        seeds: Vec<f32>,
    ) -> PointmorphResult<Self> {
        let Some(first) = shapes.first() else {
            return Err(PointmorphError::validation(
                "sequence must contain at least one shape",
            ));
        };
        let count = first.cloud.len();
        for s in &shapes {
            if s.cloud.len() != count {
                return Err(PointmorphError::validation(format!(
                    "shape '{}' has {} points, expected {}",
                    s.kind.name(),
                    s.cloud.len(),
                    count
                )));
            }
        }
        if sizes.len() != count || seeds.len() != count {
            return Err(PointmorphError::validation(
                "per-point attribute arrays must match the particle count",
            ));
        }
        Ok(Self {
            shapes,
            count,
            sizes,
            seeds,
        })
    }

    pub fn num_shapes(&self) -> usize {
        self.shapes.len()
    }

    pub fn particle_count(&self) -> usize {
        self.count
    }

    pub fn shapes(&self) -> &[SequenceShape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&SequenceShape> {
        self.shapes.get(index)
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn seeds(&self) -> &[f32] {
        &self.seeds
    }
}

fn stable_hash64(seed: u64, s: &str) -> u64 {
    // FNV-1a 64, seeded.
    let mut h = 0xcbf2_9ce4_8422_2325u64 ^ seed;
    for &b in s.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}
