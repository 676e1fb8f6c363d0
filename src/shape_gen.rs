//! The silhouette generators.
//!
//! Each compound shape splits its point budget across named sections through
//! an ordered `(weight, sampler)` table (see [`crate::shape::scatter`]); the
//! weights are the audit trail for the shape's composition. All coordinates
//! are in the object's local frame, y-up, nominally inside a unit-ish radius
//! scaled by [`ShapeParams::radius`]. Screen-facing icons (gear, shield) lie
//! in the xy plane with z as depth.

use std::f32::consts::{PI, TAU};

use rand::Rng;

use crate::core::{PointCloud, Vec3};
use crate::shape::{ShapeParams, SectionSampler, scatter};
use crate::shape_prims as prims;
use crate::shape_prims::{lerp_in, spread, unit};

const ORB_SCALE: f32 = 1.4;
/// (weight, radius multiplier) tiers; weights sum to 1.
const ORB_TIERS: [(f32, f32); 3] = [(0.60, 1.0), (0.25, 0.8), (0.15, 0.6)];
const ORB_RADIAL_JITTER: f32 = 0.05;

/// Layered orb: weighted radius tiers over a fibonacci-lattice angular spread.
pub fn orb<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let roll = unit(rng);
        let mut tier = ORB_TIERS[ORB_TIERS.len() - 1].1;
        let mut acc = 0.0;
        for (w, t) in ORB_TIERS {
            acc += w;
            if roll < acc {
                tier = t;
                break;
            }
        }
        let dir = prims::fibonacci_dir(i, n, 0.5, rng);
        let radial =
            params.radius * ORB_SCALE * tier * (1.0 + spread(rng, ORB_RADIAL_JITTER));
        points.push(dir * radial);
    }
    PointCloud::new(points)
}

/// Construction hard-hat: dome, interior fill, brim, crown ridge, headband.
pub fn hard_hat<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let r = params.radius;
    let dome = Vec3::new(r, 0.8 * r, r);
    let sections: [(f32, SectionSampler<'_, R>); 5] = [
        (0.45, &|rng: &mut R| prims::ellipsoid_patch(dome, (0.05, 1.0), rng)),
        (0.15, &|rng: &mut R| {
            prims::ellipsoid_patch(dome, (0.05, 1.0), rng) * lerp_in(rng, 0.82, 0.98)
        }),
        (0.20, &|rng: &mut R| {
            let mut p = prims::disc(0.95 * r, 1.35 * r, rng);
            p.y += spread(rng, 0.03 * r);
            p
        }),
        (0.12, &|rng: &mut R| {
            prims::arc_tube(0.82 * r, 0.10 * r, (0.12 * PI, 0.88 * PI), rng)
        }),
        (0.08, &|rng: &mut R| {
            prims::cylinder_shell(0.9 * r, 0.08 * r, 0.02 * r, rng)
                + Vec3::new(0.0, -0.04 * r, 0.0)
        }),
    ];
    scatter(n, &sections, rng)
}

/// Claw hammer: handle shaft, striking head, curved claw, collar.
pub fn hammer<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let r = params.radius;
    let sections: [(f32, SectionSampler<'_, R>); 4] = [
        (0.40, &|rng: &mut R| {
            prims::tapered_cylinder(0.13 * r, 0.11 * r, -1.25 * r, 0.35 * r, rng)
        }),
        (0.35, &|rng: &mut R| {
            prims::box_volume(Vec3::new(0.55 * r, 0.17 * r, 0.17 * r), rng)
                + Vec3::new(0.0, 0.55 * r, 0.0)
        }),
        (0.15, &|rng: &mut R| {
            let ang = lerp_in(rng, 0.1 * PI, 0.9 * PI);
            Vec3::new(
                -0.55 * r + 0.4 * r * ang.cos(),
                0.25 * r + 0.4 * r * ang.sin(),
                0.0,
            ) + prims::jitter3(0.05 * r, rng)
        }),
        (0.10, &|rng: &mut R| {
            prims::cylinder_shell(0.16 * r, 0.06 * r, 0.02 * r, rng)
                + Vec3::new(0.0, 0.33 * r, 0.0)
        }),
    ];
    scatter(n, &sections, rng)
}

/// Neural-network motif: anchor nodes on a sphere, points clustered at nodes
/// or scattered along node-to-node edges.
pub fn neural_net<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let r = params.radius;
    graph_cloud(n, r, 12, 0.30, 0.12 * r, 0.045 * r, rng)
}

/// Network graph motif: fewer, chunkier nodes than the neural net.
pub fn network<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let r = params.radius;
    graph_cloud(n, 1.1 * r, 9, 0.35, 0.16 * r, 0.06 * r, rng)
}

fn graph_cloud<R: Rng + ?Sized>(
    n: usize,
    radius: f32,
    anchor_count: usize,
    cluster_ratio: f32,
    cluster_spread: f32,
    edge_jitter: f32,
    rng: &mut R,
) -> PointCloud {
    if n == 0 {
        return PointCloud::default();
    }

    let anchors: Vec<Vec3> = (0..anchor_count)
        .map(|i| prims::fibonacci_dir(i, anchor_count, 0.15, rng) * radius)
        .collect();

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        if unit(rng) < cluster_ratio {
            let a = anchors[rng.gen_range(0..anchors.len())];
            points.push(a + prims::jitter3(cluster_spread, rng));
        } else {
            let i = rng.gen_range(0..anchors.len());
            let mut j = rng.gen_range(0..anchors.len());
            if j == i {
                j = (j + 1) % anchors.len();
            }
            points.push(prims::segment_scatter(anchors[i], anchors[j], edge_jitter, rng));
        }
    }
    PointCloud::new(points)
}

/// Studio microphone: spherical grille head, grille band, tapered body,
/// neck ring, base cap.
pub fn microphone<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let r = params.radius;
    let sections: [(f32, SectionSampler<'_, R>); 5] = [
        (0.42, &|rng: &mut R| {
            prims::ellipsoid_patch(Vec3::splat(0.5 * r), (-1.0, 1.0), rng)
                + Vec3::new(0.0, 0.55 * r, 0.0)
        }),
        (0.13, &|rng: &mut R| {
            prims::cylinder_shell(0.42 * r, 0.10 * r, 0.02 * r, rng)
                + Vec3::new(0.0, 0.15 * r, 0.0)
        }),
        (0.30, &|rng: &mut R| {
            prims::tapered_cylinder(0.20 * r, 0.16 * r, -1.1 * r, 0.05 * r, rng)
        }),
        (0.08, &|rng: &mut R| {
            prims::torus_tube(0.20 * r, 0.035 * r, rng) + Vec3::new(0.0, 0.10 * r, 0.0)
        }),
        (0.07, &|rng: &mut R| {
            prims::disc(0.0, 0.22 * r, rng) + Vec3::new(0.0, -1.1 * r, 0.0)
        }),
    ];
    scatter(n, &sections, rng)
}

const SHARDS: usize = 8;

/// Sphere surface broken into shard groups, each pushed outward by its own
/// displacement so the cracks read as gaps.
pub fn shattered_orb<R: Rng + ?Sized>(
    n: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> PointCloud {
    if n == 0 {
        return PointCloud::default();
    }

    let r = params.radius;
    let shard_dirs: Vec<Vec3> = (0..SHARDS)
        .map(|i| prims::fibonacci_dir(i, SHARDS, 0.1, rng))
        .collect();
    let shard_push: Vec<f32> = (0..SHARDS).map(|_| lerp_in(rng, 0.05, 0.40) * r).collect();

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let dir = prims::sphere_dir(rng);
        // nearest shard (by direction) claims the fragment
        let mut best = 0;
        let mut best_dot = f32::NEG_INFINITY;
        for (i, d) in shard_dirs.iter().enumerate() {
            let dot = d.dot(dir);
            if dot > best_dot {
                best_dot = dot;
                best = i;
            }
        }
        points.push(dir * r + shard_dirs[best] * shard_push[best] + prims::jitter3(0.03 * r, rng));
    }
    PointCloud::new(points)
}

const GEAR_TEETH: f32 = 9.0;

/// Gear icon in the xy plane: toothed rim, hub ring, web fill.
/// Rim radius is `base + amp * sign(sin(angle * tooth_count))`.
pub fn gear<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let r = params.radius;
    let sections: [(f32, SectionSampler<'_, R>); 3] = [
        (0.70, &|rng: &mut R| {
            let ang = unit(rng) * TAU;
            let tooth = (ang * GEAR_TEETH).sin().signum();
            let rad = (0.88 + 0.10 * tooth) * r + spread(rng, 0.04 * r);
            Vec3::new(rad * ang.cos(), rad * ang.sin(), spread(rng, 0.12 * r))
        }),
        (0.18, &|rng: &mut R| {
            let d = prims::disc(0.16 * r, 0.30 * r, rng);
            Vec3::new(d.x, d.z, spread(rng, 0.10 * r))
        }),
        (0.12, &|rng: &mut R| {
            let d = prims::disc(0.30 * r, 0.74 * r, rng);
            Vec3::new(d.x, d.z, spread(rng, 0.05 * r))
        }),
    ];
    scatter(n, &sections, rng)
}

/// Heater-shield silhouette in the xy plane: outline, interior fill, center
/// boss. Slight z bulge toward the viewer.
pub fn shield<R: Rng + ?Sized>(n: usize, params: &ShapeParams, rng: &mut R) -> PointCloud {
    let r = params.radius;
    let sections: [(f32, SectionSampler<'_, R>); 3] = [
        (0.55, &|rng: &mut R| {
            if unit(rng) < 0.25 {
                // top edge
                let x = spread(rng, 0.8 * r);
                Vec3::new(
                    x,
                    0.6 * r + spread(rng, 0.02 * r),
                    shield_bulge(x, r) + spread(rng, 0.02 * r),
                )
            } else {
                let yn = lerp_in(rng, -1.0, 0.6);
                let side = if unit(rng) < 0.5 { -1.0 } else { 1.0 };
                let x = side * shield_half_width(yn) * r;
                Vec3::new(x, yn * r, shield_bulge(x, r) + spread(rng, 0.02 * r))
            }
        }),
        (0.35, &|rng: &mut R| {
            let yn = lerp_in(rng, -1.0, 0.6);
            let hw = shield_half_width(yn) * r;
            let x = spread(rng, hw);
            Vec3::new(x, yn * r, shield_bulge(x, r) + spread(rng, 0.03 * r))
        }),
        (0.10, &|rng: &mut R| {
            prims::ellipsoid_patch(Vec3::splat(0.16 * r), (-1.0, 1.0), rng)
                + Vec3::new(0.0, -0.1 * r, 0.22 * r)
        }),
    ];
    scatter(n, &sections, rng)
}

/// Half-width of the shield profile at normalized height `yn` in [-1, 0.6]:
/// straight sides down to -0.2, then a taper to the bottom point.
fn shield_half_width(yn: f32) -> f32 {
    if yn >= -0.2 {
        0.8
    } else {
        let t = ((-0.2 - yn) / 0.8).clamp(0.0, 1.0);
        0.8 * (1.0 - t.powf(1.6))
    }
}

fn shield_bulge(x: f32, r: f32) -> f32 {
    if r <= 0.0 {
        return 0.0;
    }
    let xn = x / (0.8 * r);
    0.22 * r * (1.0 - xn * xn).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn orb_norms_stay_in_the_tier_envelope() {
        let mut rng = rng();
        let cloud = orb(1000, &ShapeParams::default(), &mut rng);
        for p in cloud.iter() {
            let d = p.length();
            assert!(d > 0.78 && d < 1.48, "norm {d} outside tier envelope");
        }
    }

    #[test]
    fn orb_mean_distance_matches_documented_tiers() {
        let mut rng = rng();
        let cloud = orb(2500, &ShapeParams::default(), &mut rng);
        let mean = cloud.iter().map(|p| p.length()).sum::<f32>() / cloud.len() as f32;
        assert!((0.9..1.6).contains(&mean), "mean distance {mean}");
    }

    #[test]
    fn gear_rim_alternates_between_tooth_and_valley_radii() {
        let mut rng = rng();
        let cloud = gear(2000, &ShapeParams::default(), &mut rng);
        let mut teeth = 0usize;
        let mut valleys = 0usize;
        for p in cloud.iter() {
            let rad = (p.x * p.x + p.y * p.y).sqrt();
            if rad > 0.92 {
                teeth += 1;
            } else if (0.70..0.84).contains(&rad) {
                valleys += 1;
            }
        }
        assert!(teeth > 100, "expected tooth points, got {teeth}");
        assert!(valleys > 100, "expected valley points, got {valleys}");
    }

    #[test]
    fn graph_shapes_stay_inside_the_anchor_sphere() {
        let mut rng = rng();
        let cloud = neural_net(1500, &ShapeParams::default(), &mut rng);
        for p in cloud.iter() {
            // edges are chords, so nothing should escape far past the anchors
            assert!(p.length() < 1.35, "stray graph point at {p}");
        }
    }

    #[test]
    fn shattered_orb_pushes_fragments_outward() {
        let mut rng = rng();
        let cloud = shattered_orb(1000, &ShapeParams::default(), &mut rng);
        let mean = cloud.iter().map(|p| p.length()).sum::<f32>() / cloud.len() as f32;
        assert!(mean > 1.0, "fragments should sit outside the unit shell, mean {mean}");
        for p in cloud.iter() {
            assert!(p.length() < 1.6);
        }
    }

    #[test]
    fn shield_taper_reaches_a_point() {
        assert_eq!(shield_half_width(0.0), 0.8);
        assert!(shield_half_width(-0.9) < 0.3);
        assert!(shield_half_width(-1.0) < 1e-3);
    }

    #[test]
    fn compound_shapes_respect_zero_budget() {
        let mut rng = rng();
        let params = ShapeParams::default();
        assert!(hard_hat(0, &params, &mut rng).is_empty());
        assert!(microphone(0, &params, &mut rng).is_empty());
        assert!(shattered_orb(0, &params, &mut rng).is_empty());
    }
}
