//! Placement math
//!
//! Safe-area bounds, random placement, and the circle/grid formations
//! windows get spawned into. Pure math over `choreo_core` geometry; all
//! randomness flows through the caller's [`Rng`], so placement is
//! seedable.

use choreo_core::{Bounds, Point, Size};
use rand::Rng;
use std::f64::consts::TAU;

/// Buffer kept between window centers and the screen edge, in pixels.
pub const MARGIN_BUFFER: f64 = 50.0;

/// Share of each screen axis treated as safe for placing whole
/// formations.
pub const SAFE_ZONE_RATIO: f64 = 0.8;

/// Smallest edge length [`random_dimensions`] hands out.
pub const MIN_SIZE: f64 = 80.0;

/// Largest edge length [`random_dimensions`] hands out.
pub const MAX_SIZE: f64 = 400.0;

/// Bounds a window center may occupy without clipping the screen edge.
///
/// Each edge is inset by `margin` plus half the window size. A screen too
/// small for the inset collapses the bounds toward a point instead of
/// inverting them.
pub fn safe_bounds(screen: Size, window_size: f64, margin: f64) -> Bounds {
    let inset = margin + window_size / 2.0;
    Bounds::new(
        Point::new(inset, inset),
        Point::new(
            (screen.width - inset).max(inset),
            (screen.height - inset).max(inset),
        ),
    )
}

/// Uniformly random window center inside [`safe_bounds`] with the default
/// margin.
pub fn random_position(screen: Size, window_size: f64, rng: &mut impl Rng) -> Point {
    let bounds = safe_bounds(screen, window_size, MARGIN_BUFFER);
    Point::new(
        rng.gen_range(bounds.min.x..=bounds.max.x),
        rng.gen_range(bounds.min.y..=bounds.max.y),
    )
}

/// Random window dimensions, each edge drawn independently from
/// [`MIN_SIZE`]..=[`MAX_SIZE`].
pub fn random_dimensions(rng: &mut impl Rng) -> Size {
    Size::new(
        rng.gen_range(MIN_SIZE..=MAX_SIZE),
        rng.gen_range(MIN_SIZE..=MAX_SIZE),
    )
}

/// `n` points evenly spaced on a circle, starting east of `center`.
pub fn circle_positions(n: usize, center: Point, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// `n` points in a row-major grid with `ceil(sqrt(n))` columns.
pub fn grid_positions(n: usize, origin: Point, spacing: f64) -> Vec<Point> {
    let cols = (n as f64).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let row = i / cols;
            let col = i % cols;
            Point::new(
                origin.x + col as f64 * spacing,
                origin.y + row as f64 * spacing,
            )
        })
        .collect()
}

/// Random center for a circle formation, placed so the whole ring of
/// windows stays on screen.
pub fn random_circle_center(
    screen: Size,
    radius: f64,
    window_size: f64,
    rng: &mut impl Rng,
) -> Point {
    let bounds = safe_bounds(screen, window_size, radius + MARGIN_BUFFER);
    Point::new(
        rng.gen_range(bounds.min.x..=bounds.max.x),
        rng.gen_range(bounds.min.y..=bounds.max.y),
    )
}
