//! Gradient colors for the ambient backdrop.
//!
//! The backdrop cycles a two-stop HSLA gradient: stop 0 at the current hue
//! (70% saturation, 70% lightness), stop 1 sixty degrees further around the wheel
//! (80% saturation, 60% lightness), both at 0.7 alpha.

use crate::foundation::core::Rgba8Premul;

/// Hue at mount time (blue).
pub const INITIAL_HUE: f64 = 240.0;

/// Degrees the hue advances per rendered frame.
pub const HUE_SPEED: f64 = 0.1;

/// Hue distance between the two gradient stops.
pub const STOP_HUE_OFFSET: f64 = 60.0;

/// Advance the hue by one frame, wrapping modulo 360.
pub fn advance_hue(hue: f64) -> f64 {
    (hue + HUE_SPEED).rem_euclid(360.0)
}

/// Straight-alpha HSLA color. Hue in degrees; saturation/lightness/alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Convert to premultiplied RGBA8.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let hp = self.hue / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let (r1, g1, b1) = match hp {
            h if h < 1.0 => (c, x, 0.0),
            h if h < 2.0 => (x, c, 0.0),
            h if h < 3.0 => (0.0, c, x),
            h if h < 4.0 => (0.0, x, c),
            h if h < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.lightness - c / 2.0;

        fn to_u8(v: f64) -> u8 {
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        }

        Rgba8Premul::from_straight_rgba(
            to_u8(r1 + m),
            to_u8(g1 + m),
            to_u8(b1 + m),
            to_u8(self.alpha),
        )
    }
}

/// The two gradient stops for the given hue.
pub fn gradient_stops(hue: f64) -> [Hsla; 2] {
    [
        Hsla::new(hue, 0.70, 0.70, 0.7),
        Hsla::new(hue + STOP_HUE_OFFSET, 0.80, 0.60, 0.7),
    ]
}
