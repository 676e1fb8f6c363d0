use rand::Rng;

use crate::core::{PointCloud, Vec3};
use crate::shape_gen;
use crate::shape_prims::unit;

/// The silhouettes the generators can approximate.
///
/// Hero roster: orb, hard-hat, hammer, neural-net, microphone.
/// Pain-points roster: shattered orb, network, gear, shield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Orb,
    HardHat,
    Hammer,
    NeuralNet,
    Microphone,
    ShatteredOrb,
    Network,
    Gear,
    Shield,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Orb,
        ShapeKind::HardHat,
        ShapeKind::Hammer,
        ShapeKind::NeuralNet,
        ShapeKind::Microphone,
        ShapeKind::ShatteredOrb,
        ShapeKind::Network,
        ShapeKind::Gear,
        ShapeKind::Shield,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Orb => "orb",
            Self::HardHat => "hard_hat",
            Self::Hammer => "hammer",
            Self::NeuralNet => "neural_net",
            Self::Microphone => "microphone",
            Self::ShatteredOrb => "shattered_orb",
            Self::Network => "network",
            Self::Gear => "gear",
            Self::Shield => "shield",
        }
    }
}

/// Generation parameters shared by every shape kind.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeParams {
    /// Nominal object radius; generators scale their local frames by it.
    pub radius: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

/// Generate a point cloud approximating `kind` with exactly `n` points.
///
/// Pure over the provided random source: section proportions and primitive
/// choice are deterministic, coordinate values are stochastic draws.
/// Re-invoking with the same `n` and a fresh RNG state yields a different but
/// statistically equivalent cloud. Any `n >= 0` is accepted; `n = 0` yields an
/// empty cloud.
pub fn generate<R: Rng + ?Sized>(
    kind: ShapeKind,
    n: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> PointCloud {
    match kind {
        ShapeKind::Orb => shape_gen::orb(n, params, rng),
        ShapeKind::HardHat => shape_gen::hard_hat(n, params, rng),
        ShapeKind::Hammer => shape_gen::hammer(n, params, rng),
        ShapeKind::NeuralNet => shape_gen::neural_net(n, params, rng),
        ShapeKind::Microphone => shape_gen::microphone(n, params, rng),
        ShapeKind::ShatteredOrb => shape_gen::shattered_orb(n, params, rng),
        ShapeKind::Network => shape_gen::network(n, params, rng),
        ShapeKind::Gear => shape_gen::gear(n, params, rng),
        ShapeKind::Shield => shape_gen::shield(n, params, rng),
    }
}

/// One weighted section of a compound silhouette: a probability mass and the
/// sampler that produces a point when the section is chosen.
pub(crate) type SectionSampler<'a, R> = &'a dyn Fn(&mut R) -> Vec3;

/// Draw `n` points from an ordered `(weight, sampler)` table.
///
/// Weights must sum to 1.0; the table order is the audit trail for how a
/// shape's point budget is split across its sections.
pub(crate) fn scatter<R: Rng + ?Sized>(
    n: usize,
    sections: &[(f32, SectionSampler<'_, R>)],
    rng: &mut R,
) -> PointCloud {
    debug_assert!(!sections.is_empty());
    debug_assert!((sections.iter().map(|(w, _)| w).sum::<f32>() - 1.0).abs() < 1e-3);

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let roll = unit(rng);
        points.push(pick_section(sections, roll)(rng));
    }
    PointCloud::new(points)
}

/// Walk cumulative weights; float spill past the last threshold lands on the
/// final section.
pub(crate) fn pick_section<'a, R: ?Sized>(
    sections: &'a [(f32, SectionSampler<'a, R>)],
    roll: f32,
) -> SectionSampler<'a, R> {
    let mut acc = 0.0f32;
    for (w, s) in sections {
        acc += w;
        if roll < acc {
            return *s;
        }
    }
    sections[sections.len() - 1].1
}
