//! Real-time driving
//!
//! [`FramePacer`] turns tick requests into wall-clock deadlines at a target
//! frame rate; [`run`] is the blocking loop that sleeps until each request
//! comes due and answers it with a tick. Only the driver blocks; the
//! manager itself never does.

use crate::clock::Clock;
use crate::manager::Choreographer;
use crate::scheduler::{TickHandle, TickScheduler};
use std::thread;
use std::time::{Duration, Instant};

/// Frame-paced scheduler.
///
/// The first request from idle is due immediately (a freshly started loop
/// should not wait out a full frame); each later request is due one frame
/// interval after the previous tick fired, or right away if the host fell
/// behind.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    issued: u64,
    pending: Option<(TickHandle, Instant)>,
    last_fired: Option<Instant>,
}

impl FramePacer {
    /// Default target frame rate, matching a typical display refresh.
    pub const DEFAULT_FPS: u32 = 60;

    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(fps)),
            issued: 0,
            pending: None,
            last_fired: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the pending request is due, if one exists.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }

    /// Consume the pending request if it is due at `now`. Returns whether
    /// one fired.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((_, due)) if due <= now => {
                self.pending = None;
                self.last_fired = Some(now);
                true
            }
            _ => false,
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FPS)
    }
}

impl TickScheduler for FramePacer {
    fn schedule(&mut self) -> TickHandle {
        self.issued += 1;
        let handle = TickHandle(self.issued);
        let now = Instant::now();
        let due = match self.last_fired {
            Some(fired) => (fired + self.interval).max(now),
            None => now,
        };
        self.pending = Some((handle, due));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending.map(|(h, _)| h) == Some(handle) {
            self.pending = None;
        }
    }
}

/// Drive `choreographer` against real time until it stops.
///
/// Blocks the calling thread. Returns once no tick request is pending,
/// which happens after `stop` ran (before this call, or from a callback
/// via [`crate::TickCtx::stop`]).
pub fn run<C: Clock>(choreographer: &mut Choreographer<C, FramePacer>) {
    tracing::debug!("drive::run entering");
    loop {
        let Some(due) = choreographer.scheduler().next_deadline() else {
            break;
        };
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        choreographer.scheduler_mut().fire_due(Instant::now());
        choreographer.tick();
    }
    tracing::debug!("drive::run exiting");
}
