//! Glimmer is a frame-driven UI motion core.
//!
//! It packages the animation machinery of a scroll-driven page as a host-independent
//! library with four pieces:
//!
//! 1. **Visibility latch** ([`VisibilityLatch`]): a write-once "has this region ever
//!    been sufficiently visible" signal with a configurable area threshold.
//! 2. **Reveal animator** ([`Reveal`], [`RevealConfig`]): a one-shot entrance
//!    transition (opacity plus directional offset) driven by the latch, evaluated as
//!    a pure function of time.
//! 3. **Ambient renderer** ([`AmbientRenderer`]): a cancellable Stopped/Running loop
//!    painting an evolving two-stop gradient and per-frame noise onto a resizable
//!    [`PaintSurface`].
//! 4. **Pointer affinity** ([`PointerAffinity`], [`CursorIndicator`]): shared
//!    default/hover intent with a spring-followed cursor indicator consuming it.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every evaluation is a pure function of
//!   (configuration, time or frame, seed); noise comes from an injectable seed.
//! - **Host-driven**: nothing blocks and nothing owns a thread. Hosts call once per
//!   animation frame and advance [`Scheduler`] timers with wall-clock deltas;
//!   teardown is an explicit `stop()`/`cancel()`, so stale callbacks cannot fire
//!   after unmount.
//! - **Graceful degradation**: a missing surface skips the frame, a missing
//!   visibility query fails open to visible, a touch-only pointer hides the
//!   indicator. None of these are errors.
#![forbid(unsafe_code)]

pub mod ambient;
pub mod animation;
pub mod cursor;
pub mod foundation;
pub mod reveal;
pub mod schedule;

pub use ambient::palette::{HUE_SPEED, Hsla, INITIAL_HUE, advance_hue, gradient_stops};
pub use ambient::raster::{PaintSurface, RasterSurface};
pub use ambient::renderer::{
    AmbientRenderer, FrameOutcome, NOISE_DOT_ALPHA, NOISE_DOT_MAX_RADIUS,
    NOISE_DOTS_PER_FRAME, Phase,
};
pub use animation::ease::Ease;
pub use animation::spring::Spring;
pub use cursor::affinity::{AffinityMode, PointerAffinity};
pub use cursor::indicator::{CursorIndicator, IndicatorPose, PointerCapability};
pub use foundation::core::{Fps, FrameIndex, Point, Rgba8Premul, SurfaceSize, Vec2};
pub use foundation::error::{GlimmerError, GlimmerResult};
pub use foundation::math::Rng64;
pub use reveal::animator::{Direction, Pose, Reveal, RevealConfig};
pub use reveal::latch::VisibilityLatch;
pub use schedule::{Scheduler, TimerId};
