//! Motion formulas
//!
//! Pure position recipes with the uniform shape
//! `fn(&[Dancer], time_seconds, &Options)`: read the elapsed time and each
//! dancer's placement data, compute fresh coordinates, move the dancer's
//! target. Closed targets are skipped. None of these keeps state between
//! calls, so the manager hosts any mix of them (or any caller-supplied
//! function of the same shape) without special cases.
//!
//! Formula constants follow the classic demo defaults (orbit centered on
//! (400, 300), sine amplitude 100, and so on); override them through the
//! options structs, which also deserialize for config-driven hosts.

use choreo_core::{Point, TargetRef};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A target plus the placement data motion formulas read.
#[derive(Clone)]
pub struct Dancer {
    /// The entity being moved.
    pub handle: TargetRef,
    /// Anchor captured when the dancer was placed; wave motions oscillate
    /// around it.
    pub home: Point,
    /// Stable index in the formation, used for per-dancer phase offsets.
    pub index: usize,
}

impl Dancer {
    pub fn new(handle: TargetRef, home: Point, index: usize) -> Self {
        Self {
            handle,
            home,
            index,
        }
    }

    /// Build a formation from handles and their home positions, indexed in
    /// order.
    pub fn troupe<I>(handles_and_homes: I) -> Vec<Dancer>
    where
        I: IntoIterator<Item = (TargetRef, Point)>,
    {
        handles_and_homes
            .into_iter()
            .enumerate()
            .map(|(index, (handle, home))| Dancer {
                handle,
                home,
                index,
            })
            .collect()
    }
}

fn default_sine_amplitude() -> f64 {
    100.0
}

fn default_sine_frequency() -> f64 {
    0.5
}

fn default_sine_phase() -> f64 {
    0.5
}

fn default_speed() -> f64 {
    0.1
}

/// Options for [`sine_wave`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SineWaveOptions {
    /// Peak vertical offset from home, in pixels.
    #[serde(default = "default_sine_amplitude")]
    pub amplitude: f64,
    /// Spatial frequency across dancer indices.
    #[serde(default = "default_sine_frequency")]
    pub frequency: f64,
    /// Extra phase per dancer index.
    #[serde(default = "default_sine_phase")]
    pub phase: f64,
    /// Time scale.
    #[serde(default = "default_speed")]
    pub speed: f64,
}

impl Default for SineWaveOptions {
    fn default() -> Self {
        Self {
            amplitude: default_sine_amplitude(),
            frequency: default_sine_frequency(),
            phase: default_sine_phase(),
            speed: default_speed(),
        }
    }
}

/// Vertical sine oscillation around each dancer's home position.
///
/// `y = home.y + amplitude * sin(frequency * index + t * speed + phase * index)`
pub fn sine_wave(dancers: &[Dancer], time: f64, options: &SineWaveOptions) {
    for dancer in dancers {
        if dancer.handle.is_closed() {
            continue;
        }
        let i = dancer.index as f64;
        let offset = options.amplitude
            * (options.frequency * i + time * options.speed + options.phase * i).sin();
        dancer
            .handle
            .move_to(Point::new(dancer.home.x, dancer.home.y + offset));
    }
}

fn default_travel_amplitude() -> f64 {
    80.0
}

fn default_wave_length() -> f64 {
    3.0
}

fn default_travel_speed() -> f64 {
    0.15
}

/// Options for [`traveling_wave`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TravelingWaveOptions {
    /// Peak vertical offset from home, in pixels.
    #[serde(default = "default_travel_amplitude")]
    pub amplitude: f64,
    /// Dancers per full wave cycle.
    #[serde(default = "default_wave_length")]
    pub wave_length: f64,
    /// Time scale; the crest travels against index order.
    #[serde(default = "default_travel_speed")]
    pub speed: f64,
}

impl Default for TravelingWaveOptions {
    fn default() -> Self {
        Self {
            amplitude: default_travel_amplitude(),
            wave_length: default_wave_length(),
            speed: default_travel_speed(),
        }
    }
}

/// A wave crest traveling along the formation.
///
/// `y = home.y + amplitude * sin(2π * index / wave_length - t * speed)`
pub fn traveling_wave(dancers: &[Dancer], time: f64, options: &TravelingWaveOptions) {
    for dancer in dancers {
        if dancer.handle.is_closed() {
            continue;
        }
        let i = dancer.index as f64;
        let offset =
            options.amplitude * (TAU * i / options.wave_length - time * options.speed).sin();
        dancer
            .handle
            .move_to(Point::new(dancer.home.x, dancer.home.y + offset));
    }
}

fn default_center() -> Point {
    Point::new(400.0, 300.0)
}

fn default_orbit_radius() -> f64 {
    200.0
}

/// Options for [`orbit`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitOptions {
    #[serde(default = "default_center")]
    pub center: Point,
    #[serde(default = "default_orbit_radius")]
    pub radius: f64,
    /// Angular speed in radians per second.
    #[serde(default = "default_speed")]
    pub speed: f64,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            center: default_center(),
            radius: default_orbit_radius(),
            speed: default_speed(),
        }
    }
}

/// Evenly-spaced circular orbit around a shared center.
pub fn orbit(dancers: &[Dancer], time: f64, options: &OrbitOptions) {
    let n = dancers.len() as f64;
    for (i, dancer) in dancers.iter().enumerate() {
        if dancer.handle.is_closed() {
            continue;
        }
        let angle = TAU * i as f64 / n + time * options.speed;
        dancer.handle.move_to(Point::new(
            options.center.x + options.radius * angle.cos(),
            options.center.y + options.radius * angle.sin(),
        ));
    }
}

fn default_max_radius() -> f64 {
    300.0
}

fn default_turns() -> f64 {
    3.0
}

/// Options for [`spiral`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpiralOptions {
    #[serde(default = "default_center")]
    pub center: Point,
    /// Radius reached just before a dancer wraps back to the center.
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    /// Full revolutions from center to rim.
    #[serde(default = "default_turns")]
    pub turns: f64,
    #[serde(default = "default_speed")]
    pub speed: f64,
}

impl Default for SpiralOptions {
    fn default() -> Self {
        Self {
            center: default_center(),
            max_radius: default_max_radius(),
            turns: default_turns(),
            speed: default_speed(),
        }
    }
}

/// Outward spiral; each dancer's radius grows with its progress and wraps
/// at the rim.
pub fn spiral(dancers: &[Dancer], time: f64, options: &SpiralOptions) {
    let n = dancers.len() as f64;
    for (i, dancer) in dancers.iter().enumerate() {
        if dancer.handle.is_closed() {
            continue;
        }
        let progress = i as f64 / n + time * options.speed * 0.1;
        let angle = progress * options.turns * TAU;
        let radius = progress.fract() * options.max_radius;
        dancer.handle.move_to(Point::new(
            options.center.x + radius * angle.cos(),
            options.center.y + radius * angle.sin(),
        ));
    }
}

fn default_burst_speed() -> f64 {
    5.0
}

fn default_gravity() -> f64 {
    0.5
}

/// Options for [`firework`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireworkOptions {
    #[serde(default = "default_center")]
    pub center: Point,
    /// Outward speed of the burst.
    #[serde(default = "default_burst_speed")]
    pub burst_speed: f64,
    /// Downward pull applied quadratically over time.
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

impl Default for FireworkOptions {
    fn default() -> Self {
        Self {
            center: default_center(),
            burst_speed: default_burst_speed(),
            gravity: default_gravity(),
        }
    }
}

/// Radial burst from a center, arcs bending down under gravity.
pub fn firework(dancers: &[Dancer], time: f64, options: &FireworkOptions) {
    let n = dancers.len() as f64;
    for (i, dancer) in dancers.iter().enumerate() {
        if dancer.handle.is_closed() {
            continue;
        }
        let angle = TAU * i as f64 / n;
        let distance = time * options.burst_speed * 60.0;
        let drop = options.gravity * time * time * 30.0;
        dancer.handle.move_to(Point::new(
            options.center.x + distance * angle.cos(),
            options.center.y + distance * angle.sin() + drop,
        ));
    }
}
