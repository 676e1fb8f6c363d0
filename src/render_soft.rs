//! Software point-sprite surface.
//!
//! A perspective projection plus additive premultiplied-alpha glow splats,
//! sized by the device pixel ratio. This is the always-available reference
//! implementation of [`RenderSurface`]; a GPU surface would consume the same
//! packets.

use std::f32::consts::TAU;

use crate::{
    core::{FrameRgba, Rgba8Premul},
    error::{PointmorphError, PointmorphResult},
    render::{FramePacket, RenderSurface, SurfaceSettings},
};

const CAMERA_DIST: f32 = 3.4;
const NEAR: f32 = 0.1;
const FOCAL: f32 = 2.6;
const SPRITE_SCALE: f32 = 0.014;
const MAX_RADIUS: f32 = 64.0;
const BASE_ALPHA: f32 = 0.55;

/// Straight-alpha theme endpoints; each point mixes between them by its seed.
const COLD_RGB: [u8; 3] = [96, 200, 255];
const WARM_RGB: [u8; 3] = [255, 150, 230];

pub struct SpriteSurface {
    settings: SurfaceSettings,
    data: Vec<u8>,
}

impl SpriteSurface {
    pub fn new(settings: SurfaceSettings) -> PointmorphResult<Self> {
        let vp = settings.viewport;
        if vp.width == 0 || vp.height == 0 || !vp.dpr.is_finite() || vp.dpr <= 0.0 {
            return Err(PointmorphError::validation(
                "sprite surface needs a non-degenerate viewport",
            ));
        }
        let data = vec![0u8; vp.width as usize * vp.height as usize * 4];
        Ok(Self { settings, data })
    }

    /// The last presented frame (premultiplied RGBA8).
    pub fn frame(&self) -> FrameRgba {
        FrameRgba {
            width: self.settings.viewport.width,
            height: self.settings.viewport.height,
            data: self.data.clone(),
            premultiplied: true,
        }
    }

    fn clear(&mut self) {
        let c = match self.settings.clear_rgba {
            Some([r, g, b, a]) => Rgba8Premul::from_straight_rgba(r, g, b, a),
            None => Rgba8Premul::transparent(),
        };
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
}

impl RenderSurface for SpriteSurface {
    fn present(&mut self, packet: &FramePacket<'_>) -> PointmorphResult<()> {
        packet.validate()?;
        self.clear();

        let vp = self.settings.viewport;
        let cx = vp.width as f32 * 0.5;
        let cy = vp.height as f32 * 0.5;
        let half = 0.5 * vp.width.min(vp.height) as f32;

        for (i, p) in packet.positions.iter().enumerate() {
            let depth = CAMERA_DIST - p.z;
            if depth <= NEAR {
                continue;
            }
            let scale = FOCAL * half / depth;
            let sx = cx + scale * p.x;
            let sy = cy - scale * p.y;
            if !sx.is_finite() || !sy.is_finite() {
                continue;
            }

            let radius =
                (packet.sizes[i] * SPRITE_SCALE * scale * vp.dpr).clamp(0.5, MAX_RADIUS);
            let seed = packet.seeds[i].clamp(0.0, 1.0);
            // shader-style shimmer driven by the passthrough clock
            let pulse = 0.8 + 0.2 * (TAU * (seed + packet.time_secs * 0.1)).sin();
            let alpha = (BASE_ALPHA * pulse).clamp(0.0, 1.0);
            let rgb = [
                lerp_u8(COLD_RGB[0], WARM_RGB[0], seed),
                lerp_u8(COLD_RGB[1], WARM_RGB[1], seed),
                lerp_u8(COLD_RGB[2], WARM_RGB[2], seed),
            ];

            splat(
                &mut self.data,
                vp.width,
                vp.height,
                sx,
                sy,
                radius,
                rgb,
                alpha,
            );
        }
        Ok(())
    }
}

/// Additive glow splat with quadratic radial falloff, in premultiplied space.
#[allow(clippy::too_many_arguments)]
fn splat(
    data: &mut [u8],
    width: u32,
    height: u32,
    sx: f32,
    sy: f32,
    radius: f32,
    rgb: [u8; 3],
    alpha: f32,
) {
    let x0 = (sx - radius).floor().max(0.0) as u32;
    let x1 = ((sx + radius).ceil().max(0.0) as u32).min(width.saturating_sub(1));
    let y0 = (sy - radius).floor().max(0.0) as u32;
    let y1 = ((sy + radius).ceil().max(0.0) as u32).min(height.saturating_sub(1));
    if x0 > x1 || y0 > y1 {
        return;
    }

    let r2 = radius * radius;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - sx;
            let dy = y as f32 + 0.5 - sy;
            let d2 = (dx * dx + dy * dy) / r2;
            if d2 >= 1.0 {
                continue;
            }
            let a = (alpha * (1.0 - d2) * 255.0).round() as u8;
            if a == 0 {
                continue;
            }
            let src = Rgba8Premul::from_straight_rgba(rgb[0], rgb[1], rgb[2], a);
            let idx = (y as usize * width as usize + x as usize) * 4;
            data[idx] = data[idx].saturating_add(src.r);
            data[idx + 1] = data[idx + 1].saturating_add(src.g);
            data[idx + 2] = data[idx + 2].saturating_add(src.b);
            data[idx + 3] = data[idx + 3].saturating_add(src.a);
        }
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Vec3, Viewport};

    fn surface(width: u32, height: u32, dpr: f32) -> SpriteSurface {
        SpriteSurface::new(SurfaceSettings {
            viewport: Viewport::new(width, height, dpr).unwrap(),
            clear_rgba: None,
        })
        .unwrap()
    }

    fn lit_pixels(frame: &FrameRgba) -> usize {
        frame
            .data
            .chunks_exact(4)
            .filter(|px| px.iter().any(|&b| b != 0))
            .count()
    }

    fn single_point_packet<'a>(
        positions: &'a [Vec3],
        sizes: &'a [f32],
        seeds: &'a [f32],
    ) -> FramePacket<'a> {
        FramePacket {
            positions,
            sizes,
            seeds,
            time_secs: 0.0,
        }
    }

    #[test]
    fn centered_point_lights_pixels() {
        let mut s = surface(64, 64, 1.0);
        let positions = [Vec3::ZERO];
        let packet = single_point_packet(&positions, &[2.0], &[0.3]);
        s.present(&packet).unwrap();
        let frame = s.frame();
        assert!(frame.premultiplied);
        assert!(lit_pixels(&frame) > 0);
    }

    #[test]
    fn point_behind_the_camera_is_culled() {
        let mut s = surface(64, 64, 1.0);
        let positions = [Vec3::new(0.0, 0.0, 4.5)];
        let packet = single_point_packet(&positions, &[2.0], &[0.3]);
        s.present(&packet).unwrap();
        assert_eq!(lit_pixels(&s.frame()), 0);
    }

    #[test]
    fn higher_dpr_grows_the_sprite() {
        let positions = [Vec3::ZERO];
        let sizes = [40.0];
        let seeds = [0.5];

        let mut lo = surface(128, 128, 1.0);
        lo.present(&single_point_packet(&positions, &sizes, &seeds))
            .unwrap();
        let mut hi = surface(128, 128, 2.0);
        hi.present(&single_point_packet(&positions, &sizes, &seeds))
            .unwrap();

        assert!(lit_pixels(&hi.frame()) > lit_pixels(&lo.frame()));
    }

    #[test]
    fn clear_color_fills_the_background() {
        let mut s = SpriteSurface::new(SurfaceSettings {
            viewport: Viewport::new(8, 8, 1.0).unwrap(),
            clear_rgba: Some([10, 20, 30, 255]),
        })
        .unwrap();
        let packet = single_point_packet(&[], &[], &[]);
        s.present(&packet).unwrap();
        let frame = s.frame();
        assert_eq!(&frame.data[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn frames_do_not_accumulate_across_presents() {
        let mut s = surface(64, 64, 1.0);
        let positions = [Vec3::ZERO];
        let packet = single_point_packet(&positions, &[2.0], &[0.3]);
        s.present(&packet).unwrap();
        let first = s.frame().data;
        s.present(&packet).unwrap();
        assert_eq!(first, s.frame().data);
    }
}
