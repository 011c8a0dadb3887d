/// Write-once visibility latch for a tracked region.
///
/// The latch answers "has this region ever been sufficiently visible" and nothing
/// else. Once it fires it detaches: later observations are ignored, so scrolling
/// the region back out of view cannot flicker the signal.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityLatch {
    threshold: f64,
    entered: bool,
}

impl VisibilityLatch {
    /// Default visible-area threshold.
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Create a latch firing once at least `threshold` of the region's area is
    /// inside the viewport. Out-of-range or non-finite thresholds clamp into `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_THRESHOLD
        };
        Self {
            threshold,
            entered: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed the currently visible fraction of the region. Returns `true` only on
    /// the single `false -> true` transition.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.entered {
            return false;
        }
        if visible_fraction >= self.threshold {
            self.entered = true;
            tracing::debug!(threshold = self.threshold, "visibility latch fired");
            return true;
        }
        false
    }

    /// Fail-open path for hosts with no viewport-visibility mechanism: report the
    /// region visible immediately rather than hanging hidden forever.
    ///
    /// Returns `true` if this call fired the latch.
    pub fn force_open(&mut self) -> bool {
        if self.entered {
            return false;
        }
        self.entered = true;
        tracing::debug!("visibility latch forced open (no visibility query)");
        true
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
