//! Window Ballet Demo
//!
//! Three troupes of windows share one choreographer: a rainbow ring
//! orbiting the screen center, a pastel grid swelling on a sine wave, and
//! a warm firework burst from a random launch point. Each troupe retires
//! when its duration elapses and its windows close; a curtain animation
//! watches the registry and stops the loop once every troupe is gone.
//!
//! Run with: cargo run -p choreo_animation --example ballet_demo

use choreo_animation::{
    drive, firework, orbit, sine_wave, AnimationSpec, Choreographer, Dancer, FireworkOptions,
    OrbitOptions, SineWaveOptions,
};
use choreo_core::{Color, Point, Size, TargetRef};
use choreo_stage::{layout, palette, Stage, WindowConfig, DEFAULT_SIZE};
use rand::thread_rng;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let screen = Size::new(1280.0, 800.0);
    let mut stage = Stage::with_limit(screen, 24);
    let mut rng = thread_rng();
    let mut mgr = Choreographer::with_frame_rate(60);

    // Rainbow ring orbiting the screen center, sized to the safe zone.
    let center = Point::new(screen.width / 2.0, screen.height / 2.0);
    let radius = (screen.height * layout::SAFE_ZONE_RATIO - DEFAULT_SIZE) / 2.0;
    let ring = troupe(
        &mut stage,
        layout::circle_positions(8, center, radius),
        palette::rainbow(8),
    );
    let ring_options = OrbitOptions {
        center,
        radius,
        speed: 0.8,
    };
    mgr.animate(
        "ring",
        ring,
        move |dancers, t| orbit(dancers, t, &ring_options),
        Some(Duration::from_secs(8)),
    );

    // Pastel grid riding a sine wave.
    let grid = troupe(
        &mut stage,
        layout::grid_positions(6, Point::new(160.0, 160.0), 170.0),
        palette::pastel(6, &mut rng),
    );
    let grid_options = SineWaveOptions {
        amplitude: 60.0,
        speed: 2.0,
        ..SineWaveOptions::default()
    };
    mgr.animate(
        "swell",
        grid,
        move |dancers, t| sine_wave(dancers, t, &grid_options),
        Some(Duration::from_secs(6)),
    );

    // Warm firework burst from a random launch point.
    let launch = layout::random_circle_center(screen, 60.0, DEFAULT_SIZE, &mut rng);
    let burst = troupe(&mut stage, vec![launch; 10], palette::warm(10, &mut rng));
    let burst_options = FireworkOptions {
        center: launch,
        burst_speed: 1.0,
        ..FireworkOptions::default()
    };
    mgr.animate(
        "burst",
        burst,
        move |dancers, t| firework(dancers, t, &burst_options),
        Some(Duration::from_secs(4)),
    );

    // The curtain stops the loop once it is the last animation standing.
    mgr.register_animation(
        "curtain",
        AnimationSpec::new().update(|ctx, _elapsed| {
            if ctx.animation_count() == 1 {
                tracing::info!("all troupes retired, dropping the curtain");
                ctx.stop();
            }
            Ok(())
        }),
    );

    tracing::info!("{} windows on stage, the show begins", stage.open_count());
    drive::run(&mut mgr);

    let moves: usize = stage.windows().iter().map(|w| w.move_count()).sum();
    tracing::info!(
        "show over: {} windows performed {} moves, {} still open",
        stage.windows().len(),
        moves,
        stage.open_count()
    );
}

fn troupe(stage: &mut Stage, homes: Vec<Point>, colors: Vec<Color>) -> Vec<Dancer> {
    let windows = stage
        .spawn_batch(homes.iter().zip(colors).map(|(&home, color)| WindowConfig {
            color,
            ..WindowConfig::at(home)
        }))
        .expect("stage limit fits every troupe");
    Dancer::troupe(
        windows
            .iter()
            .zip(homes)
            .map(|(w, home)| (Arc::clone(w) as TargetRef, home)),
    )
}
