use kurbo::Vec2;

use crate::animation::ease::Ease;
use crate::reveal::latch::VisibilityLatch;

/// Which axis the hidden pose is offset along, and in which sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Content rises into place: hidden pose starts below, offset `+distance` on y.
    Up,
    /// Hidden pose starts above, offset `-distance` on y.
    Down,
    /// Hidden pose starts to the right, offset `+distance` on x.
    Left,
    /// Hidden pose starts to the left, offset `-distance` on x.
    Right,
    /// Opacity-only transition, no positional offset.
    None,
}

/// Immutable per-region reveal parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Seconds between the region first becoming visible and the transition starting.
    pub delay_secs: f64,
    /// Hidden-pose offset direction.
    pub direction: Direction,
    /// Hidden-pose offset magnitude in layout units.
    pub distance: f64,
    /// Transition duration in seconds.
    pub duration_secs: f64,
    /// Fraction of the region's area that must be visible to fire the latch.
    pub threshold: f64,
    /// Easing curve for the transition.
    pub ease: Ease,
}

impl RevealConfig {
    /// Shortest legal transition. Out-of-range durations clamp here instead of failing.
    pub const MIN_DURATION_SECS: f64 = 0.01;

    /// Clamp every field to its legal range. Non-finite values fall back to
    /// defaults, and an ease that fails [`Ease::validate`] (malformed Bezier
    /// control points) falls back to the default curve.
    pub fn sanitized(self) -> Self {
        let d = Self::default();

        fn finite_or(v: f64, fallback: f64) -> f64 {
            if v.is_finite() { v } else { fallback }
        }

        Self {
            delay_secs: finite_or(self.delay_secs, d.delay_secs).max(0.0),
            direction: self.direction,
            distance: finite_or(self.distance, d.distance).max(0.0),
            duration_secs: finite_or(self.duration_secs, d.duration_secs)
                .max(Self::MIN_DURATION_SECS),
            threshold: finite_or(self.threshold, d.threshold).clamp(0.0, 1.0),
            ease: if self.ease.validate().is_ok() {
                self.ease
            } else {
                d.ease
            },
        }
    }

    /// The directional offset of the hidden pose.
    pub fn hidden_offset(&self) -> Vec2 {
        match self.direction {
            Direction::Up => Vec2::new(0.0, self.distance),
            Direction::Down => Vec2::new(0.0, -self.distance),
            Direction::Left => Vec2::new(self.distance, 0.0),
            Direction::Right => Vec2::new(-self.distance, 0.0),
            Direction::None => Vec2::ZERO,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_secs: 0.0,
            direction: Direction::Up,
            distance: 50.0,
            duration_secs: 0.8,
            threshold: VisibilityLatch::DEFAULT_THRESHOLD,
            ease: Ease::default(),
        }
    }
}

/// The rendered pose of a region's content at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Positional offset from the final layout position.
    pub offset: Vec2,
}

impl Pose {
    /// The settled pose: fully opaque, no offset.
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// The pre-reveal pose for `config`.
    pub fn hidden_for(config: &RevealConfig) -> Self {
        Self {
            opacity: 0.0,
            offset: config.hidden_offset(),
        }
    }
}

/// One-shot entrance transition for a tracked region.
///
/// The latch and the transition are deliberately decoupled: [`Reveal::observe`]
/// only records *when* the region first qualified, and [`Reveal::pose_at`] is a
/// pure function of that timestamp. Evaluating a pose twice for the same instant
/// always yields the same answer, and once the transition completes every later
/// instant yields the visible pose.
#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    config: RevealConfig,
    latch: VisibilityLatch,
    entered_at_secs: Option<f64>,
    restored: bool,
}

impl Reveal {
    /// A hidden region awaiting its first qualifying intersection.
    pub fn new(config: RevealConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            latch: VisibilityLatch::new(config.threshold),
            entered_at_secs: None,
            restored: false,
        }
    }

    /// Remount of a region that has already revealed: statically visible, the
    /// transition never replays.
    pub fn restored(config: RevealConfig) -> Self {
        let config = config.sanitized();
        let mut latch = VisibilityLatch::new(config.threshold);
        let _ = latch.force_open();
        Self {
            config,
            latch,
            entered_at_secs: None,
            restored: true,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn has_entered(&self) -> bool {
        self.latch.has_entered()
    }

    /// Feed the region's currently visible fraction at time `now_secs`. Returns
    /// `true` on the single observation that fires the latch.
    pub fn observe(&mut self, visible_fraction: f64, now_secs: f64) -> bool {
        if self.latch.observe(visible_fraction) {
            self.entered_at_secs = Some(now_secs);
            return true;
        }
        false
    }

    /// Fail-open entry for hosts without a visibility query: treat the region as
    /// visible as of `now_secs`.
    pub fn force_visible(&mut self, now_secs: f64) -> bool {
        if self.latch.force_open() {
            self.entered_at_secs = Some(now_secs);
            return true;
        }
        false
    }

    /// Evaluate the pose at time `now_secs`.
    pub fn pose_at(&self, now_secs: f64) -> Pose {
        if self.restored {
            return Pose::visible();
        }
        let Some(entered_at) = self.entered_at_secs else {
            return Pose::hidden_for(&self.config);
        };

        let t = now_secs - entered_at - self.config.delay_secs;
        if t <= 0.0 {
            return Pose::hidden_for(&self.config);
        }

        let progress = (t / self.config.duration_secs).clamp(0.0, 1.0);
        let eased = self.config.ease.apply(progress);
        Pose {
            opacity: eased,
            offset: self.config.hidden_offset() * (1.0 - eased),
        }
    }

    /// `true` once the transition has fully settled (or the reveal was restored).
    pub fn is_settled(&self, now_secs: f64) -> bool {
        if self.restored {
            return true;
        }
        match self.entered_at_secs {
            None => false,
            Some(entered_at) => {
                now_secs - entered_at >= self.config.delay_secs + self.config.duration_secs
            }
        }
    }
}
