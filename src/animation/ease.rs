use crate::foundation::error::{GlimmerError, GlimmerResult};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out.
    OutCubic,
    /// Quintic ease-out.
    OutQuint,
    /// Cubic Bezier with endpoints pinned at (0,0) and (1,1).
    ///
    /// `x1`/`x2` must lie in `[0, 1]` so progress maps one-to-one onto the curve.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// The reveal default: a cubic Bezier approximating ease-out-quint,
    /// control points (0.22, 1.0) and (0.36, 1.0).
    pub fn out_quint_bezier() -> Self {
        Self::CubicBezier {
            x1: 0.22,
            y1: 1.0,
            x2: 0.36,
            y2: 1.0,
        }
    }

    /// Reject Bezier control points whose x components leave `[0, 1]` or are not finite.
    pub fn validate(self) -> GlimmerResult<()> {
        let Self::CubicBezier { x1, y1, x2, y2 } = self else {
            return Ok(());
        };
        for v in [x1, y1, x2, y2] {
            if !v.is_finite() {
                return Err(GlimmerError::validation(
                    "CubicBezier control points must be finite",
                ));
            }
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(GlimmerError::validation(
                "CubicBezier x1/x2 must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::out_quint_bezier()
    }
}

fn bezier_coord(t: f64, c1: f64, c2: f64) -> f64 {
    // Cubic with P0=0, P3=1: 3(1-t)^2 t c1 + 3(1-t) t^2 c2 + t^3
    let omt = 1.0 - t;
    3.0 * omt * omt * t * c1 + 3.0 * omt * t * t * c2 + t * t * t
}

fn bezier_coord_deriv(t: f64, c1: f64, c2: f64) -> f64 {
    let omt = 1.0 - t;
    3.0 * omt * omt * c1 + 6.0 * omt * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

/// Evaluate y for a given x on the curve by inverting x(t) with Newton iteration,
/// falling back to bisection when the derivative collapses.
fn cubic_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..8 {
        let err = bezier_coord(t, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_coord(t, y1, y2);
        }
        let d = bezier_coord_deriv(t, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback. x(t) is monotone for x1, x2 in [0, 1].
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    for _ in 0..32 {
        t = 0.5 * (lo + hi);
        if bezier_coord(t, x1, x2) < x {
            lo = t;
        } else {
            hi = t;
        }
    }
    bezier_coord(t, y1, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<Ease> {
        vec![
            Ease::Linear,
            Ease::OutQuad,
            Ease::OutCubic,
            Ease::OutQuint,
            Ease::out_quint_bezier(),
        ]
    }

    #[test]
    fn endpoints_are_stable() {
        for ease in all() {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in all() {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in all() {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(42.0), 1.0);
        }
    }

    #[test]
    fn out_quint_bezier_is_ease_out_dominant() {
        // Fast start, slow settle: halfway through time the curve is well past halfway.
        let e = Ease::out_quint_bezier();
        assert!(e.apply(0.5) > 0.9);
        assert!(e.apply(0.1) > 0.3);
    }

    #[test]
    fn bezier_tracks_closed_form_quint() {
        // The (0.22,1)(0.36,1) curve approximates OutQuint; allow loose tolerance.
        let bez = Ease::out_quint_bezier();
        for i in 1..10 {
            let t = f64::from(i) / 10.0;
            assert!((bez.apply(t) - Ease::OutQuint.apply(t)).abs() < 0.12, "t={t}");
        }
    }

    #[test]
    fn bezier_validation_rejects_bad_x() {
        let bad = Ease::CubicBezier {
            x1: 1.5,
            y1: 0.0,
            x2: 0.5,
            y2: 1.0,
        };
        assert!(bad.validate().is_err());
        assert!(Ease::out_quint_bezier().validate().is_ok());
    }

    #[test]
    fn linear_bezier_is_identity() {
        let e = Ease::CubicBezier {
            x1: 1.0 / 3.0,
            y1: 1.0 / 3.0,
            x2: 2.0 / 3.0,
            y2: 2.0 / 3.0,
        };
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((e.apply(t) - t).abs() < 1e-6, "t={t}");
        }
    }
}
