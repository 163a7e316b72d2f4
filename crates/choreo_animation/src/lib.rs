//! Choreo animation core
//!
//! A single shared timing loop multiplexing many independently-registered
//! window animations:
//!
//! - **Choreographer**: registry of animations keyed by string id,
//!   start/stop lifecycle, per-animation elapsed time, duration-based
//!   retirement, and target cleanup on every exit path
//! - **Motion functions**: pure formulas (sine wave, traveling wave,
//!   orbit, spiral, firework) mapping elapsed time to positions
//! - **Clock & scheduler**: injected time and tick sources, so the whole
//!   loop runs under test without real time passing
//! - **Driver**: a blocking frame-paced loop for real-time hosts
//!
//! # Example
//!
//! ```rust
//! use choreo_animation::{AnimationSpec, Choreographer, ManualClock, ManualScheduler};
//! use std::time::Duration;
//!
//! let mut choreographer = Choreographer::new(ManualClock::new(), ManualScheduler::new());
//! choreographer.register_animation(
//!     "pulse",
//!     AnimationSpec::new()
//!         .duration(Duration::from_secs(1))
//!         .update(|_ctx, _elapsed| Ok(())),
//! );
//! choreographer.start();
//!
//! choreographer.clock_mut().advance(Duration::from_millis(16));
//! choreographer.tick();
//!
//! assert!(choreographer.is_running());
//! assert!(choreographer.contains("pulse"));
//! ```

pub mod clock;
pub mod drive;
pub mod error;
pub mod manager;
pub mod motion;
pub mod scheduler;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use drive::{run, FramePacer};
pub use error::UpdateError;
pub use manager::{AnimationId, AnimationSpec, Cancellation, Choreographer, TickCtx, UpdateFn};
pub use motion::{
    firework, orbit, sine_wave, spiral, traveling_wave, Dancer, FireworkOptions, OrbitOptions,
    SineWaveOptions, SpiralOptions, TravelingWaveOptions,
};
pub use scheduler::{ManualScheduler, TickHandle, TickScheduler};
