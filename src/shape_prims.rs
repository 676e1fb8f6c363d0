//! Primitive surface/volume samplers the silhouette generators compose.
//!
//! Every sampler draws from the caller's RNG and returns one point in the
//! primitive's local frame (y-up unless noted). Latitude draws are
//! cos-weighted and discs are area-uniform so no primitive clusters at poles
//! or centers.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

/// Uniform draw in [0, 1).
pub(crate) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}

/// Uniform draw in [lo, hi). Degenerate ranges collapse to `lo`.
pub(crate) fn lerp_in<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * unit(rng)
}

/// Uniform draw in [-half, half]. Zero half-width is a valid no-op.
pub(crate) fn spread<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    if half > 0.0 {
        (unit(rng) * 2.0 - 1.0) * half
    } else {
        0.0
    }
}

/// Uniform jitter inside the cube [-half, half]^3.
pub fn jitter3<R: Rng + ?Sized>(half: f32, rng: &mut R) -> Vec3 {
    Vec3::new(spread(rng, half), spread(rng, half), spread(rng, half))
}

/// Direction `i` of `n` on the fibonacci lattice, with index/azimuth jitter.
///
/// `phi = acos(-1 + 2(i + j)/n)`, `theta = sqrt(n*pi) * phi + j'` — near-uniform
/// surface coverage without pole or seam clustering.
pub fn fibonacci_dir<R: Rng + ?Sized>(i: usize, n: usize, jitter: f32, rng: &mut R) -> Vec3 {
    let nf = n.max(1) as f32;
    let j = if jitter > 0.0 {
        unit(rng) * jitter
    } else {
        0.0
    };
    let phi = (-1.0 + 2.0 * (i as f32 + j) / nf).clamp(-1.0, 1.0).acos();
    let theta = (nf * PI).sqrt() * phi + spread(rng, jitter);
    Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
}

/// Uniform random direction on the unit sphere.
pub fn sphere_dir<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let y = lerp_in(rng, -1.0, 1.0);
    let theta = unit(rng) * TAU;
    let r = (1.0 - y * y).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), y, r * theta.sin())
}

/// Point on an axis-aligned ellipsoid shell restricted to a latitude band.
///
/// `cos_band` is the (low, high) range of cos(polar angle); drawing the cosine
/// uniformly keeps the band area-uniform.
pub fn ellipsoid_patch<R: Rng + ?Sized>(radii: Vec3, cos_band: (f32, f32), rng: &mut R) -> Vec3 {
    let c = lerp_in(rng, cos_band.0, cos_band.1).clamp(-1.0, 1.0);
    let s = (1.0 - c * c).max(0.0).sqrt();
    let theta = unit(rng) * TAU;
    radii * Vec3::new(s * theta.cos(), c, s * theta.sin())
}

/// Point on a torus tube lying flat in the xz plane (ring around the y axis).
pub fn torus_tube<R: Rng + ?Sized>(major: f32, minor: f32, rng: &mut R) -> Vec3 {
    let u = unit(rng) * TAU;
    let v = unit(rng) * TAU;
    let ring = major + minor * v.cos();
    Vec3::new(ring * u.cos(), minor * v.sin(), ring * u.sin())
}

/// Point on a tube following an arc in the xy plane (tube depth along z).
/// `u_range` is the swept angle; (0, pi) arches over the +y pole.
pub fn arc_tube<R: Rng + ?Sized>(
    major: f32,
    minor: f32,
    u_range: (f32, f32),
    rng: &mut R,
) -> Vec3 {
    let u = lerp_in(rng, u_range.0, u_range.1);
    let v = unit(rng) * TAU;
    let ring = major + minor * v.cos();
    Vec3::new(ring * u.cos(), ring * u.sin(), minor * v.sin())
}

/// Uniform point inside an axis-aligned box.
pub fn box_volume<R: Rng + ?Sized>(half: Vec3, rng: &mut R) -> Vec3 {
    Vec3::new(
        spread(rng, half.x),
        spread(rng, half.y),
        spread(rng, half.z),
    )
}

/// Point on a cylinder shell around the y axis, `thickness` of radial fuzz.
pub fn cylinder_shell<R: Rng + ?Sized>(
    radius: f32,
    half_h: f32,
    thickness: f32,
    rng: &mut R,
) -> Vec3 {
    let rad = radius + spread(rng, thickness);
    let y = spread(rng, half_h);
    let ang = unit(rng) * TAU;
    Vec3::new(rad * ang.cos(), y, rad * ang.sin())
}

/// Point on the lateral surface of a linearly tapered cylinder around y.
pub fn tapered_cylinder<R: Rng + ?Sized>(
    r_bottom: f32,
    r_top: f32,
    y_bottom: f32,
    y_top: f32,
    rng: &mut R,
) -> Vec3 {
    let t = unit(rng);
    let y = y_bottom + (y_top - y_bottom) * t;
    let rad = r_bottom + (r_top - r_bottom) * t;
    let ang = unit(rng) * TAU;
    Vec3::new(rad * ang.cos(), y, rad * ang.sin())
}

/// Area-uniform point on an annulus in the xz plane (`inner <= outer`).
pub fn disc<R: Rng + ?Sized>(inner: f32, outer: f32, rng: &mut R) -> Vec3 {
    let rad = lerp_in(rng, inner * inner, outer * outer).max(0.0).sqrt();
    let ang = unit(rng) * TAU;
    Vec3::new(rad * ang.cos(), 0.0, rad * ang.sin())
}

/// Point on the segment a..b with transverse jitter (no jitter along the
/// segment direction, so edges stay crisp in length).
pub fn segment_scatter<R: Rng + ?Sized>(a: Vec3, b: Vec3, jitter: f32, rng: &mut R) -> Vec3 {
    let base = a.lerp(b, unit(rng));
    let dir = (b - a).normalize_or_zero();
    let j = jitter3(jitter, rng);
    base + (j - dir * j.dot(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn sphere_dir_is_unit_length() {
        let mut rng = rng();
        for _ in 0..200 {
            let d = sphere_dir(&mut rng);
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn fibonacci_dir_is_unit_and_finite() {
        let mut rng = rng();
        for i in 0..500 {
            let d = fibonacci_dir(i, 500, 0.5, &mut rng);
            assert!(d.is_finite());
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn fibonacci_dir_covers_both_hemispheres() {
        let mut rng = rng();
        let n = 400;
        let above = (0..n)
            .filter(|&i| fibonacci_dir(i, n, 0.0, &mut rng).y > 0.0)
            .count();
        assert!(above > n / 3 && above < 2 * n / 3);
    }

    #[test]
    fn disc_radius_stays_in_band() {
        let mut rng = rng();
        for _ in 0..200 {
            let p = disc(0.5, 1.5, &mut rng);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((0.5..=1.5).contains(&r));
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn segment_scatter_stays_near_segment() {
        let mut rng = rng();
        let a = Vec3::new(-1.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        for _ in 0..200 {
            let p = segment_scatter(a, b, 0.1, &mut rng);
            assert!(p.x >= a.x - 1e-6 && p.x <= b.x + 1e-6);
            assert!(p.y.abs() <= 0.2 && p.z.abs() <= 0.2);
        }
    }

    #[test]
    fn zero_jitter_and_zero_half_widths_are_valid() {
        let mut rng = rng();
        assert!(jitter3(0.0, &mut rng).length() == 0.0);
        let d = fibonacci_dir(3, 10, 0.0, &mut rng);
        assert!(d.is_finite());
        let p = segment_scatter(Vec3::ZERO, Vec3::ZERO, 0.0, &mut rng);
        assert_eq!(p, Vec3::ZERO);
    }
}
