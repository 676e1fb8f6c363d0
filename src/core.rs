use crate::error::{PointmorphError, PointmorphResult};

pub use glam::Vec3;

/// Ordered, fixed-length set of 3D sample positions for one shape.
///
/// Index `i` in one cloud corresponds to index `i` in every other cloud of the
/// same sequence; that positional correspondence is the interpolation contract.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn zeroed(n: usize) -> Self {
        Self {
            points: vec![Vec3::ZERO; n],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }

    pub fn as_mut_slice(&mut self) -> &mut [Vec3] {
        &mut self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }

    /// Flat `[x0, y0, z0, x1, y1, z1, ..]` view; length is always `3 * len()`.
    pub fn to_flat(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.points.len() * 3);
        for p in &self.points {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
        out
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}

impl From<Vec<Vec3>> for PointCloud {
    fn from(points: Vec<Vec3>) -> Self {
        Self { points }
    }
}

/// Output viewport in physical pixels plus the device pixel ratio used to
/// scale sprite radii.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, dpr: f32) -> PointmorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(PointmorphError::validation(
                "Viewport width/height must be > 0",
            ));
        }
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(PointmorphError::validation("Viewport dpr must be > 0"));
        }
        Ok(Self { width, height, dpr })
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

/// A rasterized frame (RGBA8, premultiplied alpha).
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_view_is_three_per_point() {
        let cloud = PointCloud::new(vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(cloud.to_flat(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(cloud.to_flat().len(), 3 * cloud.len());
    }

    #[test]
    fn zeroed_cloud_is_finite() {
        let cloud = PointCloud::zeroed(16);
        assert_eq!(cloud.len(), 16);
        assert!(cloud.is_finite());
    }

    #[test]
    fn viewport_rejects_degenerate_dims() {
        assert!(Viewport::new(0, 100, 1.0).is_err());
        assert!(Viewport::new(100, 100, 0.0).is_err());
        assert!(Viewport::new(100, 100, f32::NAN).is_err());
        assert!(Viewport::new(100, 100, 2.0).is_ok());
    }

    #[test]
    fn premul_from_straight() {
        let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
        assert_eq!(c.a, 128);
        assert_eq!(c.r, 128);
        assert_eq!(c.g, 64);
        assert_eq!(c.b, 0);
    }
}
