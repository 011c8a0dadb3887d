use kurbo::Point;

use crate::ambient::palette::{self, INITIAL_HUE, gradient_stops};
use crate::ambient::raster::PaintSurface;
use crate::foundation::core::{FrameIndex, Rgba8Premul};
use crate::foundation::math::Rng64;

/// Noise dots scattered per frame.
pub const NOISE_DOTS_PER_FRAME: u32 = 100;

/// Upper bound (exclusive) on noise dot radius in pixels.
pub const NOISE_DOT_MAX_RADIUS: f64 = 1.5;

/// Straight alpha of each noise dot.
pub const NOISE_DOT_ALPHA: f64 = 0.2;

/// Lifecycle of the ambient loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
}

/// What one `render_frame` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Gradient and noise were painted; hue advanced.
    Painted,
    /// No drawing surface was available; nothing changed.
    SkippedNoSurface,
    /// The renderer is stopped; nothing changed.
    Stopped,
}

/// The decorative, perpetually running background animation.
///
/// The renderer owns the evolving state (hue, frame count, noise RNG) but not the
/// surface: hosts pass their surface each frame, which keeps exclusive ownership
/// with the single mounted instance and makes surface loss a per-frame no-op
/// rather than a failure. The loop never ends on its own; teardown is
/// [`AmbientRenderer::stop`], or dropping the renderer.
#[derive(Clone, Debug)]
pub struct AmbientRenderer {
    phase: Phase,
    hue: f64,
    frames_rendered: FrameIndex,
    rng: Rng64,
}

impl AmbientRenderer {
    /// Renderer with an arbitrary default noise seed.
    pub fn new() -> Self {
        Self::with_seed(0x616D_6269_656E_7431)
    }

    /// Renderer with a caller-chosen noise seed, for reproducible frames.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            phase: Phase::Stopped,
            hue: INITIAL_HUE,
            frames_rendered: FrameIndex(0),
            rng: Rng64::new(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current hue in `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Frames actually painted since construction.
    pub fn frames_rendered(&self) -> FrameIndex {
        self.frames_rendered
    }

    /// `Stopped -> Running`. Idempotent.
    pub fn start(&mut self) {
        if self.phase == Phase::Stopped {
            self.phase = Phase::Running;
            tracing::debug!(hue = self.hue, "ambient renderer started");
        }
    }

    /// `Running -> Stopped`. Idempotent. Cancels the loop: later `render_frame`
    /// calls do nothing until restarted.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Stopped;
            tracing::debug!(
                frames = self.frames_rendered.0,
                "ambient renderer stopped"
            );
        }
    }

    /// Paint one frame: fill the surface with the current gradient, scatter this
    /// frame's noise dots, then advance the hue.
    ///
    /// `None` means the host's drawing surface is unavailable; the frame is
    /// skipped silently and no state advances.
    #[tracing::instrument(level = "trace", skip(self, surface))]
    pub fn render_frame(&mut self, surface: Option<&mut dyn PaintSurface>) -> FrameOutcome {
        if self.phase == Phase::Stopped {
            return FrameOutcome::Stopped;
        }
        let Some(surface) = surface else {
            tracing::trace!("ambient frame skipped: no surface");
            return FrameOutcome::SkippedNoSurface;
        };

        let size = surface.size();
        let [stop0, stop1] = gradient_stops(self.hue);
        surface.fill_linear_gradient(
            Point::ZERO,
            Point::new(f64::from(size.width), f64::from(size.height)),
            stop0.to_rgba8_premul(),
            stop1.to_rgba8_premul(),
        );

        let dot = Rgba8Premul::from_straight_rgba(
            255,
            255,
            255,
            (NOISE_DOT_ALPHA * 255.0).round() as u8,
        );
        for _ in 0..NOISE_DOTS_PER_FRAME {
            let x = self.rng.next_f64_01() * f64::from(size.width);
            let y = self.rng.next_f64_01() * f64::from(size.height);
            let radius = self.rng.next_f64_01() * NOISE_DOT_MAX_RADIUS;
            surface.fill_circle(Point::new(x, y), radius, dot);
        }

        self.hue = palette::advance_hue(self.hue);
        self.frames_rendered = FrameIndex(self.frames_rendered.0 + 1);
        FrameOutcome::Painted
    }
}

impl Default for AmbientRenderer {
    fn default() -> Self {
        Self::new()
    }
}
