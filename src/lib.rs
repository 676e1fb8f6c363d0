#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod guide;
pub mod model;
pub mod morph;
pub mod morph_ease;
pub mod pipeline;
pub mod render;
pub mod render_soft;
pub mod sequence;
pub mod shape;
pub mod shape_gen;
pub mod shape_prims;

pub use crate::core::{FrameRgba, PointCloud, Rgba8Premul, Vec3, Viewport};
pub use error::{PointmorphError, PointmorphResult};
pub use model::{BlendPolicy, DeviceClass, MorphVariant, ParticleBudget, VariantBuilder};
pub use morph::{MorphConfig, MorphEngine, MorphState, dwell_blend, segment_at};
pub use morph_ease::Ease;
pub use pipeline::MorphDriver;
pub use render::{
    FramePacket, RenderSurface, SurfaceKind, SurfaceProbe, SurfaceSettings, choose_surface,
    create_surface,
};
pub use render_soft::SpriteSurface;
pub use sequence::{SequenceShape, ShapeSequence};
pub use shape::{ShapeKind, ShapeParams, generate};
