/// Damped spring integrator for pointer-follow motion.
///
/// Semi-implicit Euler over `x'' = (stiffness * (target - x) - damping * x') / mass`.
/// With the indicator's parameters the response is close to critically damped.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    /// Mass of the follower.
    pub mass: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// Velocity damping.
    pub damping: f64,
    position: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(mass: f64, stiffness: f64, damping: f64, initial: f64) -> Self {
        Self {
            mass: mass.max(1e-6),
            stiffness: stiffness.max(0.0),
            damping: damping.max(0.0),
            position: initial,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Snap to `target` with zero velocity.
    pub fn reset_to(&mut self, target: f64) {
        self.position = target;
        self.velocity = 0.0;
    }

    /// Advance the spring toward `target` by `dt` seconds.
    ///
    /// Large steps are subdivided so stiff parameter sets stay numerically stable.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        if dt <= 0.0 || !dt.is_finite() {
            return self.position;
        }

        const MAX_STEP: f64 = 1.0 / 240.0;
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let accel =
                (self.stiffness * (target - self.position) - self.damping * self.velocity)
                    / self.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator_spring(initial: f64) -> Spring {
        Spring::new(0.1, 300.0, 20.0, initial)
    }

    #[test]
    fn converges_to_target() {
        let mut s = indicator_spring(0.0);
        for _ in 0..120 {
            s.step(100.0, 1.0 / 60.0);
        }
        assert!((s.position() - 100.0).abs() < 0.5);
    }

    #[test]
    fn is_deterministic_for_fixed_steps() {
        let mut a = indicator_spring(0.0);
        let mut b = indicator_spring(0.0);
        for _ in 0..30 {
            a.step(42.0, 1.0 / 60.0);
            b.step(42.0, 1.0 / 60.0);
        }
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn zero_dt_is_noop() {
        let mut s = indicator_spring(5.0);
        assert_eq!(s.step(100.0, 0.0), 5.0);
        assert_eq!(s.step(100.0, -1.0), 5.0);
    }

    #[test]
    fn reset_snaps_without_motion() {
        let mut s = indicator_spring(0.0);
        s.step(10.0, 0.1);
        s.reset_to(-3.0);
        assert_eq!(s.position(), -3.0);
        // No residual velocity: an immediate tiny step barely moves.
        s.step(-3.0, 1.0 / 240.0);
        assert!((s.position() + 3.0).abs() < 1e-9);
    }
}
