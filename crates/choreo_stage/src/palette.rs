//! Palette generation
//!
//! Color sets for spawned windows. Every generator returns `n` colors;
//! the random ones draw through the caller's [`Rng`] so palettes are
//! seedable, the stepped ones are deterministic.

use choreo_core::Color;
use rand::Rng;

// Channel band for pastels, and the saturation/lightness bands the hue
// palettes share (percent).
const PASTEL_RANGE: (u8, u8) = (180, 255);
const SATURATION_RANGE: (f32, f32) = (40.0, 80.0);
const LIGHTNESS_RANGE: (f32, f32) = (70.0, 90.0);

fn random_in(range: (f32, f32), rng: &mut impl Rng) -> f32 {
    rng.gen_range(range.0..range.1)
}

/// Soft colors with every RGB channel in the pastel band.
pub fn pastel(n: usize, rng: &mut impl Rng) -> Vec<Color> {
    (0..n)
        .map(|_| {
            Color::rgb(
                rng.gen_range(PASTEL_RANGE.0..PASTEL_RANGE.1),
                rng.gen_range(PASTEL_RANGE.0..PASTEL_RANGE.1),
                rng.gen_range(PASTEL_RANGE.0..PASTEL_RANGE.1),
            )
        })
        .collect()
}

/// Hues spread evenly around the wheel at fixed saturation and lightness.
pub fn rainbow(n: usize) -> Vec<Color> {
    rainbow_with(n, 60.0, 80.0)
}

/// [`rainbow`] with explicit saturation and lightness (percent).
pub fn rainbow_with(n: usize, saturation: f32, lightness: f32) -> Vec<Color> {
    (0..n)
        .map(|i| Color::hsl(360.0 * i as f32 / n as f32, saturation, lightness))
        .collect()
}

/// Random reds, oranges, and yellows.
pub fn warm(n: usize, rng: &mut impl Rng) -> Vec<Color> {
    (0..n)
        .map(|_| {
            Color::hsl(
                rng.gen_range(0.0..60.0),
                random_in(SATURATION_RANGE, rng),
                random_in(LIGHTNESS_RANGE, rng),
            )
        })
        .collect()
}

/// Random cyans, blues, and purples.
pub fn cool(n: usize, rng: &mut impl Rng) -> Vec<Color> {
    (0..n)
        .map(|_| {
            Color::hsl(
                rng.gen_range(180.0..300.0),
                random_in(SATURATION_RANGE, rng),
                random_in(LIGHTNESS_RANGE, rng),
            )
        })
        .collect()
}

/// One hue with saturation and lightness stepped across their bands, from
/// muted to bright.
pub fn monochromatic(base_hue: f32, n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| {
            let step = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            Color::hsl(
                base_hue,
                SATURATION_RANGE.0 + step * (SATURATION_RANGE.1 - SATURATION_RANGE.0),
                LIGHTNESS_RANGE.0 + step * (LIGHTNESS_RANGE.1 - LIGHTNESS_RANGE.0),
            )
        })
        .collect()
}

/// Linear HSL blend from `from` to `to`, endpoints included.
pub fn gradient(from: Color, to: Color, n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            from.lerp(to, t)
        })
        .collect()
}
