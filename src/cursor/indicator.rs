use kurbo::Point;

use crate::animation::spring::Spring;
use crate::cursor::affinity::AffinityMode;

/// Whether the host has a continuous pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerCapability {
    /// Mouse/trackpad: the indicator renders.
    Fine,
    /// Touch-only: the indicator never renders.
    TouchOnly,
}

/// Ring scale applied while hovering an interactive element.
pub const HOVER_RING_SCALE: f64 = 1.5;

/// Seconds the trailing dot takes to catch up to the pointer.
pub const DOT_FOLLOW_SECS: f64 = 0.15;

const RING_MASS: f64 = 0.1;
const RING_STIFFNESS: f64 = 300.0;
const RING_DAMPING: f64 = 20.0;

/// Renderable state of the two-part cursor indicator at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorPose {
    /// Ring center.
    pub ring: Point,
    /// Ring scale relative to its resting size.
    pub ring_scale: f64,
    /// Filled ring (hover) vs outlined ring (default).
    pub ring_filled: bool,
    /// Trailing dot center.
    pub dot: Point,
    /// Dot opacity; zero while hovering.
    pub dot_opacity: f64,
}

/// The cursor-following indicator: a spring-followed ring plus a trailing dot.
///
/// Consumes the pointer-affinity mode each update; never writes it.
#[derive(Clone, Debug)]
pub struct CursorIndicator {
    capability: PointerCapability,
    ring_x: Spring,
    ring_y: Spring,
    dot: Point,
    target: Point,
    seen_pointer: bool,
}

impl CursorIndicator {
    pub fn new(capability: PointerCapability) -> Self {
        Self {
            capability,
            ring_x: Spring::new(RING_MASS, RING_STIFFNESS, RING_DAMPING, 0.0),
            ring_y: Spring::new(RING_MASS, RING_STIFFNESS, RING_DAMPING, 0.0),
            dot: Point::ZERO,
            target: Point::ZERO,
            seen_pointer: false,
        }
    }

    /// `false` on touch-only hosts: the indicator is never rendered, though the
    /// affinity broadcaster it would consume stays functional.
    pub fn is_visible(&self) -> bool {
        self.capability == PointerCapability::Fine
    }

    /// Record the latest pointer position. The first position snaps the follower
    /// so the indicator does not fly in from the origin.
    pub fn pointer_moved(&mut self, position: Point) {
        self.target = position;
        if !self.seen_pointer {
            self.seen_pointer = true;
            self.ring_x.reset_to(position.x);
            self.ring_y.reset_to(position.y);
            self.dot = position;
        }
    }

    /// Advance follow motion by `dt_secs` and evaluate the pose under `mode`.
    pub fn update(&mut self, mode: AffinityMode, dt_secs: f64) -> IndicatorPose {
        let ring = Point::new(
            self.ring_x.step(self.target.x, dt_secs),
            self.ring_y.step(self.target.y, dt_secs),
        );

        // Constant-duration approach: the dot closes the remaining distance in
        // DOT_FOLLOW_SECS regardless of how far behind it is.
        if dt_secs > 0.0 && dt_secs.is_finite() {
            let k = (dt_secs / DOT_FOLLOW_SECS).min(1.0);
            self.dot = Point::new(
                self.dot.x + (self.target.x - self.dot.x) * k,
                self.dot.y + (self.target.y - self.dot.y) * k,
            );
        }

        let hovering = mode == AffinityMode::Hover;
        IndicatorPose {
            ring,
            ring_scale: if hovering { HOVER_RING_SCALE } else { 1.0 },
            ring_filled: hovering,
            dot: self.dot,
            dot_opacity: if hovering { 0.0 } else { 1.0 },
        }
    }
}
