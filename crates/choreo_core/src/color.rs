//! Color values
//!
//! RGB and HSL colors with the CSS-style string form window backends
//! consume, plus the HSL interpolation the gradient palette builds on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in either RGB or HSL form.
///
/// Palette generators work in whichever space a formula is natural in;
/// `Display` renders the CSS-style string form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f32, s: f32, l: f32 },
}

impl Color {
    pub const WHITE: Self = Self::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// HSL constructor; hue is wrapped into [0, 360), saturation and
    /// lightness clamped to [0, 100].
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::Hsl {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Hue/saturation/lightness of this color, converting if needed.
    pub fn to_hsl(self) -> (f32, f32, f32) {
        match self {
            Self::Hsl { h, s, l } => (h, s, l),
            Self::Rgb { r, g, b } => rgb_to_hsl(r, g, b),
        }
    }

    /// Interpolate toward `other` in HSL space, taking the shorter arc
    /// around the hue wheel. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (h0, s0, l0) = self.to_hsl();
        let (h1, s1, l1) = other.to_hsl();
        let mut dh = (h1 - h0) % 360.0;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        Color::hsl(h0 + dh * t, s0 + (s1 - s0) * t, l0 + (l1 - l0) * t)
    }
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        // Achromatic
        return (0.0, 0.0, l * 100.0);
    }
    let d = max - min;
    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };
    (h, s * 100.0, l * 100.0)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { r, g, b } => write!(f, "rgb({}, {}, {})", r, g, b),
            Self::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(Color::rgb(180, 200, 255).to_string(), "rgb(180, 200, 255)");
        assert_eq!(Color::hsl(240.0, 60.0, 80.0).to_string(), "hsl(240, 60%, 80%)");
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(Color::rgb(255, 0, 0).to_hsl(), (0.0, 100.0, 50.0));
        assert_eq!(Color::rgb(0, 255, 0).to_hsl(), (120.0, 100.0, 50.0));
        assert_eq!(Color::rgb(0, 0, 255).to_hsl(), (240.0, 100.0, 50.0));
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = Color::hsl(20.0, 40.0, 50.0);
        let to = Color::hsl(200.0, 80.0, 70.0);
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn test_lerp_shorter_arc() {
        // 350 -> 10 crosses zero rather than sweeping backwards through 180
        let mid = Color::hsl(350.0, 50.0, 50.0).lerp(Color::hsl(10.0, 50.0, 50.0), 0.5);
        let (h, _, _) = mid.to_hsl();
        assert!(h < 1.0 || h > 359.0, "hue {} should sit near 0", h);
    }

    #[test]
    fn test_hsl_normalization() {
        let (h, s, l) = Color::hsl(-30.0, 150.0, -5.0).to_hsl();
        assert_eq!(h, 330.0);
        assert_eq!(s, 100.0);
        assert_eq!(l, 0.0);
    }
}
