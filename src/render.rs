use crate::{
    core::{Vec3, Viewport},
    error::{PointmorphError, PointmorphResult},
};

/// Everything a rendering surface receives per frame: the live positions,
/// the static per-point attributes, and an elapsed-time scalar passed through
/// for shader-side color/wobble animation (this engine never computes it).
#[derive(Clone, Copy, Debug)]
pub struct FramePacket<'a> {
    pub positions: &'a [Vec3],
    pub sizes: &'a [f32],
    pub seeds: &'a [f32],
    pub time_secs: f32,
}

impl FramePacket<'_> {
    pub fn validate(&self) -> PointmorphResult<()> {
        let n = self.positions.len();
        if self.sizes.len() != n || self.seeds.len() != n {
            return Err(PointmorphError::render(
                "frame packet attribute arrays must match the particle count",
            ));
        }
        Ok(())
    }
}

/// A consuming rendering surface. Implementations own their pixel (or DOM,
/// or GPU) state; the engine only hands them packets.
pub trait RenderSurface {
    fn present(&mut self, packet: &FramePacket<'_>) -> PointmorphResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    PointSprite,
    Ambient,
}

/// Capability probe consulted exactly once at mount. The decision is not
/// re-evaluated per frame.
pub trait SurfaceProbe {
    fn supports_point_sprites(&self) -> bool;
}

pub fn choose_surface(probe: &dyn SurfaceProbe) -> SurfaceKind {
    let kind = if probe.supports_point_sprites() {
        SurfaceKind::PointSprite
    } else {
        SurfaceKind::Ambient
    };
    tracing::debug!(?kind, "surface capability resolved");
    kind
}

#[derive(Clone, Debug)]
pub struct SurfaceSettings {
    pub viewport: Viewport,
    /// Straight-alpha clear color; None clears to transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

pub fn create_surface(
    kind: SurfaceKind,
    settings: &SurfaceSettings,
) -> PointmorphResult<Box<dyn RenderSurface>> {
    match kind {
        SurfaceKind::PointSprite => Ok(Box::new(crate::render_soft::SpriteSurface::new(
            settings.clone(),
        )?)),
        SurfaceKind::Ambient => Ok(Box::new(AmbientSurface::default())),
    }
}

/// Degraded fallback when point-sprite rendering is unavailable: packets are
/// accepted and dropped, leaving the host to show its ambient placeholder.
#[derive(Debug, Default)]
pub struct AmbientSurface {
    frames_accepted: u64,
}

impl AmbientSurface {
    pub fn frames_accepted(&self) -> u64 {
        self.frames_accepted
    }
}

impl RenderSurface for AmbientSurface {
    fn present(&mut self, packet: &FramePacket<'_>) -> PointmorphResult<()> {
        packet.validate()?;
        self.frames_accepted += 1;
        Ok(())
    }
}
