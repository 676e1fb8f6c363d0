//! # Pointmorph guide (v0.1.0)
//!
//! This module is a standalone walkthrough of Pointmorph's architecture and
//! public API. If you are looking for copy/paste commands, start with the
//! repository `README.md`. If you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`ShapeKind`](crate::ShapeKind) / [`generate`](crate::generate): pure
//!   point-cloud generators for the named silhouettes
//! - [`MorphVariant`](crate::MorphVariant): a named timeline configuration
//!   (shape roster, particle budgets, dwell/blend policies, seed)
//! - [`ShapeSequence`](crate::ShapeSequence): the clouds and per-point
//!   attributes instantiated once at mount
//! - [`MorphEngine`](crate::MorphEngine): progress in, blended positions out
//! - [`FramePacket`](crate::FramePacket): what a surface receives per frame
//! - [`RenderSurface`](crate::RenderSurface): the rendering seam; the software
//!   [`SpriteSurface`](crate::SpriteSurface) is the reference implementation
//!
//! The frame path is explicitly staged:
//!
//! 1. Mount: [`MorphDriver::mount`](crate::MorphDriver::mount) generates the
//!    sequence and binds the first segment
//! 2. Advance: [`MorphDriver::advance`](crate::MorphDriver::advance) maps the
//!    latest progress to a segment, blend, and positions buffer
//! 3. Present: [`RenderSurface::present`](crate::RenderSurface::present)
//!    consumes the packet
//!
//! ---
//!
//! ## Determinism and randomness
//!
//! Generators are pure over the random source handed to them; structure
//! (section weights, primitive choice) is fixed while coordinates are
//! stochastic draws. A mount is reproducible because the variant carries a
//! `u64` seed and instantiation derives its own ChaCha8 stream from it.
//! Per-point `size`/`seed` attributes are drawn once at instantiation and
//! never regenerated; rebinding for a new device class builds a fresh
//! sequence.
//!
//! ---
//!
//! ## Timing model
//!
//! Progress is owned by an external scroll collaborator and read per frame;
//! out-of-range values are clamped, never errors. Within each segment the
//! outgoing shape dwells (default 65% of the segment) before a smoothstepped
//! ramp to the next shape. Two blend policies exist behind one switch:
//! `Smoothed { factor }` drifts the live buffer toward the interpolated
//! target each frame, `Direct` mixes endpoints exactly. Sequences shorter
//! than two shapes degrade to a static display.
//!
//! Endpoint clouds are bound into engine-owned buffers and swapped only when
//! the segment index crosses a boundary; mid-segment frames never reread the
//! source sequence.
//!
//! ---
//!
//! ## Surfaces
//!
//! Capability is probed once at mount ([`choose_surface`](crate::choose_surface));
//! hosts without point-sprite rendering get the
//! [`AmbientSurface`](crate::render::AmbientSurface) fallback, which accepts
//! packets and renders nothing. The software sprite surface performs a
//! perspective projection, scales sprite radii by the device pixel ratio, and
//! splats additive premultiplied-alpha glows. Treat its output as
//! premultiplied RGBA8.
//!
//! ---
//!
//! ## End to end
//!
//! ```rust,no_run
//! use pointmorph::{
//!     DeviceClass, MorphDriver, MorphVariant, SurfaceKind, SurfaceSettings, Viewport,
//!     create_surface,
//! };
//!
//! # fn main() -> pointmorph::PointmorphResult<()> {
//! let variant = MorphVariant::hero();
//! let mut driver = MorphDriver::mount(&variant, DeviceClass::Desktop)?;
//!
//! let settings = SurfaceSettings {
//!     viewport: Viewport::new(1280, 720, 2.0)?,
//!     clear_rgba: Some([18, 20, 28, 255]),
//! };
//! let mut surface = create_surface(SurfaceKind::PointSprite, &settings)?;
//!
//! // Per animation frame: read the latest scroll progress, advance, present.
//! let packet = driver.advance(0.42, 1.25)?;
//! surface.present(&packet)?;
//! # Ok(())
//! # }
//! ```
//!
//! Custom rosters build through [`VariantBuilder`](crate::VariantBuilder);
//! validation happens on `build()`, so invalid dwell ratios, smoothing
//! factors, or empty rosters never reach a mounted driver.
