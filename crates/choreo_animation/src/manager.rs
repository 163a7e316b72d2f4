//! Animation lifecycle manager
//!
//! One shared tick loop multiplexing many independently-registered
//! animations. The manager owns the registry (animations keyed by string
//! id, in registration order), derives every animation's elapsed time from
//! the injected clock, retires animations whose duration has elapsed, and
//! closes their targets on every exit path. It never blocks: the injected
//! scheduler receives "next tick" requests and the host answers them by
//! calling [`Choreographer::tick`].

use crate::clock::Clock;
use crate::error::UpdateError;
use crate::motion::Dancer;
use crate::scheduler::{TickHandle, TickScheduler};
use choreo_core::{close_all, TargetRef};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clock::MonotonicClock;
use crate::drive::FramePacer;

/// Identifier of a registered animation.
///
/// Ids are caller-chosen strings. The registry looks them up borrowed, so
/// plain `&str` works everywhere an id is queried or stopped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(String);

impl AnimationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnimationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AnimationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for AnimationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-tick update callback.
///
/// Receives a [`TickCtx`] for re-entrant manager calls and the time elapsed
/// since registration (seconds and milliseconds both read off the
/// `Duration`). Errors are reported by the tick loop and do not abort it.
pub type UpdateFn = Box<dyn FnMut(&mut TickCtx<'_>, Duration) -> Result<(), UpdateError>>;

/// What to register: targets, an optional per-tick callback, an optional
/// duration.
///
/// All fields are optional; an animation without a callback still advances
/// time and still expires by duration, it just has no visible effect.
#[derive(Default)]
pub struct AnimationSpec {
    targets: Vec<TargetRef>,
    update: Option<UpdateFn>,
    duration: Option<Duration>,
}

impl AnimationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets this animation moves; closed when it is retired.
    pub fn targets(mut self, targets: Vec<TargetRef>) -> Self {
        self.targets = targets;
        self
    }

    /// Add one target.
    pub fn target(mut self, target: TargetRef) -> Self {
        self.targets.push(target);
        self
    }

    /// Per-tick callback.
    pub fn update<F>(mut self, update: F) -> Self
    where
        F: FnMut(&mut TickCtx<'_>, Duration) -> Result<(), UpdateError> + 'static,
    {
        self.update = Some(Box::new(update));
        self
    }

    /// Auto-stop once elapsed time reaches `duration`.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

// One registered animation. The callback is checked out of `update` while
// it runs; `epoch` tells a surviving record apart from a same-id
// replacement when handing the callback back.
struct Animation {
    epoch: u64,
    targets: Vec<TargetRef>,
    update: Option<UpdateFn>,
    active: bool,
    started_at: Instant,
    duration: Option<Duration>,
}

type AnimationMap = IndexMap<AnimationId, Animation, FxBuildHasher>;

// Registry plus run flag, split from the manager so update callbacks can
// mutate it through `TickCtx` while the tick loop holds the rest.
#[derive(Default)]
struct Registry {
    animations: AnimationMap,
    running: bool,
    next_epoch: u64,
}

impl Registry {
    fn insert(&mut self, id: AnimationId, spec: AnimationSpec, now: Instant) {
        if self.animations.contains_key(&id) {
            // A live id is never silently overwritten: the old record's
            // targets would leak open. Retire it first.
            tracing::debug!("register_animation: replacing live animation \"{}\"", id);
            self.retire(id.as_str());
        }
        self.next_epoch += 1;
        let record = Animation {
            epoch: self.next_epoch,
            targets: spec.targets,
            update: spec.update,
            active: true,
            started_at: now,
            duration: spec.duration,
        };
        self.animations.insert(id, record);
    }

    // The single cleanup path: deactivate, close targets, drop the record.
    // Unknown ids fall through silently.
    fn retire(&mut self, id: &str) {
        if let Some((id, mut record)) = self.animations.shift_remove_entry(id) {
            record.active = false;
            close_all(&record.targets);
            tracing::debug!("animation \"{}\" retired", id);
        }
    }

    fn stop(&mut self) {
        self.running = false;
        for (_, record) in self.animations.iter_mut() {
            record.active = false;
            close_all(&record.targets);
        }
        self.animations.clear();
    }
}

/// Live view of the manager handed to update callbacks.
///
/// Everything here takes effect immediately against the registry,
/// including retiring the animation whose callback is currently running.
/// The scheduler is out of reach on purpose: stopping mid-tick simply
/// means the loop does not reschedule when the tick finishes.
pub struct TickCtx<'a> {
    registry: &'a mut Registry,
    now: Instant,
}

impl TickCtx<'_> {
    /// Register an animation from inside a tick. It starts "now" (this
    /// tick's timestamp) and is first processed on the next tick.
    pub fn register_animation(&mut self, id: impl Into<AnimationId>, spec: AnimationSpec) {
        self.registry.insert(id.into(), spec, self.now);
    }

    /// Mark the loop running again, undoing a `stop` issued earlier in the
    /// same tick; the tick tail reschedules as usual. No-op while running.
    pub fn start(&mut self) {
        self.registry.running = true;
    }

    /// Stop one animation, this callback's own included.
    pub fn stop_animation(&mut self, id: &str) {
        self.registry.retire(id);
    }

    /// Stop the whole loop: close every animation's targets and clear the
    /// registry. The loop will not reschedule after this tick.
    pub fn stop(&mut self) {
        self.registry.stop();
    }

    pub fn is_running(&self) -> bool {
        self.registry.running
    }

    pub fn contains(&self, id: &str) -> bool {
        self.registry.animations.contains_key(id)
    }

    pub fn animation_count(&self) -> usize {
        self.registry.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.animations.is_empty()
    }
}

/// The animation lifecycle manager.
///
/// Owns the registry of active animations, derives elapsed time from the
/// injected clock, and keeps the shared loop alive through the injected
/// scheduler. Construct one and hold it; there is no global instance.
///
/// Registration order is the processing order within a tick, though no
/// ordering guarantee is part of the contract.
pub struct Choreographer<C = MonotonicClock, S = FramePacer> {
    clock: C,
    scheduler: S,
    registry: Registry,
    pending: Option<TickHandle>,
}

impl Choreographer {
    /// Real-time manager paced at the given frames per second.
    pub fn with_frame_rate(fps: u32) -> Self {
        Self::new(MonotonicClock, FramePacer::new(fps))
    }
}

impl Default for Choreographer {
    fn default() -> Self {
        Self::with_frame_rate(FramePacer::DEFAULT_FPS)
    }
}

impl<C: Clock, S: TickScheduler> Choreographer<C, S> {
    pub fn new(clock: C, scheduler: S) -> Self {
        Self {
            clock,
            scheduler,
            registry: Registry::default(),
            pending: None,
        }
    }

    /// Insert or replace the animation at `id`.
    ///
    /// The record starts active, with its start time read from the clock at
    /// this moment. Re-registering a live id retires the prior record
    /// first (closing its targets) and moves the id to the back of the
    /// registration order. Never starts the loop; registration and `start`
    /// commute.
    pub fn register_animation(&mut self, id: impl Into<AnimationId>, spec: AnimationSpec) {
        let id = id.into();
        tracing::debug!(
            "register_animation: \"{}\" ({} targets, duration {:?})",
            id,
            spec.targets.len(),
            spec.duration
        );
        let now = self.clock.now();
        self.registry.insert(id, spec, now);
    }

    /// Begin the tick loop. Idempotent while running.
    ///
    /// The first tick is requested immediately, not one frame later.
    pub fn start(&mut self) {
        if self.registry.running {
            return;
        }
        self.registry.running = true;
        self.pending = Some(self.scheduler.schedule());
        tracing::debug!("animation loop started");
    }

    /// Stop the loop, close every animation's targets, clear the registry.
    ///
    /// Safe to call when not running; a second call finds nothing to
    /// cancel and an already-empty registry.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        let retired = self.registry.animations.len();
        self.registry.stop();
        if retired > 0 {
            tracing::debug!("animation loop stopped, {} animations retired", retired);
        }
    }

    /// Stop one animation: close its targets and drop its record, as one
    /// step. Unknown ids are ignored. Duration expiry takes this same
    /// path.
    pub fn stop_animation(&mut self, id: &str) {
        self.registry.retire(id);
    }

    /// One pass over the registry: derive elapsed time, run callbacks,
    /// expire durations, request the next tick.
    ///
    /// Hosts call this when the scheduled tick comes due. A tick while
    /// stopped is a no-op that does not reschedule, which is how the loop
    /// winds down. A callback returning an error is reported via
    /// `tracing::warn!` and the pass continues with the remaining
    /// animations.
    pub fn tick(&mut self) {
        // The request that delivered this tick is spent. Cancelling it also
        // covers hosts that tick early while a request is still pending.
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if !self.registry.running {
            return;
        }
        let now = self.clock.now();

        // Snapshot ids so callbacks can retire entries (their own included)
        // without corrupting the iteration.
        let ids: SmallVec<[AnimationId; 8]> = self.registry.animations.keys().cloned().collect();

        for id in ids {
            let Some(record) = self.registry.animations.get_mut(&id) else {
                // Retired earlier in this same tick.
                continue;
            };
            if !record.active {
                continue;
            }
            let elapsed = now.saturating_duration_since(record.started_at);
            let epoch = record.epoch;

            if let Some(mut update) = record.update.take() {
                let mut ctx = TickCtx {
                    registry: &mut self.registry,
                    now,
                };
                if let Err(error) = update(&mut ctx, elapsed) {
                    tracing::warn!("update callback for \"{}\" failed: {}", id, error);
                }
                // Hand the callback back unless the record was retired or
                // replaced while it ran.
                if let Some(record) = self.registry.animations.get_mut(&id) {
                    if record.epoch == epoch && record.update.is_none() {
                        record.update = Some(update);
                    }
                }
            }

            if let Some(record) = self.registry.animations.get(&id) {
                if record.epoch == epoch && record.duration.is_some_and(|d| elapsed >= d) {
                    self.registry.retire(id.as_str());
                }
            }
        }

        if self.registry.running {
            self.pending = Some(self.scheduler.schedule());
        }
    }

    /// Wire a motion function into the manager.
    ///
    /// Builds an update callback that feeds elapsed seconds to `motion`,
    /// takes the dancers' handles as the animation's target set, registers
    /// under `id`, starts the loop if needed, and returns a cancellation
    /// token for the id.
    pub fn animate<F>(
        &mut self,
        id: impl Into<AnimationId>,
        dancers: Vec<Dancer>,
        mut motion: F,
        duration: Option<Duration>,
    ) -> Cancellation
    where
        F: FnMut(&[Dancer], f64) + 'static,
    {
        let id = id.into();
        let targets: Vec<TargetRef> = dancers.iter().map(|d| Arc::clone(&d.handle)).collect();
        let mut spec = AnimationSpec::new().targets(targets).update(move |_ctx, elapsed| {
            motion(&dancers, elapsed.as_secs_f64());
            Ok(())
        });
        if let Some(duration) = duration {
            spec = spec.duration(duration);
        }
        self.register_animation(id.clone(), spec);
        self.start();
        Cancellation { id }
    }

    pub fn is_running(&self) -> bool {
        self.registry.running
    }

    /// Whether `id` is currently registered.
    pub fn contains(&self, id: &str) -> bool {
        self.registry.animations.contains_key(id)
    }

    pub fn animation_count(&self) -> usize {
        self.registry.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.animations.is_empty()
    }

    /// The injected clock. `clock_mut` is the test seam for manual clocks.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The injected scheduler; drivers poll it, tests inspect it.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

/// Token returned by [`Choreographer::animate`], naming the animation it
/// can stop. Dropping the token does not stop the animation.
pub struct Cancellation {
    id: AnimationId,
}

impl Cancellation {
    pub fn id(&self) -> &AnimationId {
        &self.id
    }

    /// Equivalent to `stop_animation` with the stored id.
    pub fn cancel<C: Clock, S: TickScheduler>(self, choreographer: &mut Choreographer<C, S>) {
        choreographer.stop_animation(self.id.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::scheduler::ManualScheduler;
    use choreo_core::{Point, Target};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct ProbeWindow {
        closed: AtomicBool,
        close_requests: AtomicUsize,
    }

    impl ProbeWindow {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                closed: AtomicBool::new(false),
                close_requests: AtomicUsize::new(0),
            })
        }

        fn close_requests(&self) -> usize {
            self.close_requests.load(Ordering::SeqCst)
        }
    }

    impl Target for ProbeWindow {
        fn move_to(&self, _position: Point) {}

        fn close(&self) {
            self.close_requests.fetch_add(1, Ordering::SeqCst);
            self.closed.store(true, Ordering::SeqCst);
        }

        fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }
    }

    fn manual_manager() -> Choreographer<ManualClock, ManualScheduler> {
        Choreographer::new(ManualClock::new(), ManualScheduler::new())
    }

    #[test]
    fn test_register_and_query() {
        let mut mgr = manual_manager();
        assert!(mgr.is_empty());

        mgr.register_animation("drift", AnimationSpec::new());
        assert!(mgr.contains("drift"));
        assert!(!mgr.contains("spin"));
        assert_eq!(mgr.animation_count(), 1);
        assert!(!mgr.is_running(), "registration must not start the loop");
    }

    #[test]
    fn test_reregistration_retires_the_prior_record() {
        let mut mgr = manual_manager();
        let old_window = ProbeWindow::new();
        let new_window = ProbeWindow::new();

        mgr.register_animation(
            "spin",
            AnimationSpec::new().target(Arc::clone(&old_window) as TargetRef),
        );
        mgr.register_animation(
            "spin",
            AnimationSpec::new().target(Arc::clone(&new_window) as TargetRef),
        );

        assert_eq!(mgr.animation_count(), 1);
        assert_eq!(old_window.close_requests(), 1);
        assert_eq!(new_window.close_requests(), 0);
    }

    #[test]
    fn test_stop_animation_unknown_id_is_a_noop() {
        let mut mgr = manual_manager();
        mgr.register_animation("drift", AnimationSpec::new());
        mgr.stop_animation("nonexistent");
        assert_eq!(mgr.animation_count(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut mgr = manual_manager();
        let window = ProbeWindow::new();
        mgr.register_animation(
            "drift",
            AnimationSpec::new().target(Arc::clone(&window) as TargetRef),
        );
        mgr.start();

        mgr.stop();
        mgr.stop();

        assert!(!mgr.is_running());
        assert!(mgr.is_empty());
        assert_eq!(window.close_requests(), 1);
        assert!(!mgr.scheduler().is_pending());
    }

    #[test]
    fn test_double_start_schedules_once() {
        let mut mgr = manual_manager();
        mgr.start();
        mgr.start();
        assert_eq!(mgr.scheduler().issued(), 1);
    }

    #[test]
    fn test_zero_duration_expires_on_first_tick() {
        let mut mgr = manual_manager();
        mgr.register_animation("flash", AnimationSpec::new().duration(Duration::ZERO));
        mgr.start();
        mgr.tick();
        assert!(!mgr.contains("flash"));
        assert!(mgr.is_running(), "loop keeps going with an empty registry");
    }

    #[test]
    fn test_missing_update_callback_is_tolerated() {
        let mut mgr = manual_manager();
        mgr.register_animation(
            "silent",
            AnimationSpec::new().duration(Duration::from_millis(50)),
        );
        mgr.start();

        mgr.clock_mut().advance(Duration::from_millis(16));
        mgr.tick();
        assert!(mgr.contains("silent"));

        mgr.clock_mut().advance(Duration::from_millis(40));
        mgr.tick();
        assert!(!mgr.contains("silent"), "duration still expires without a callback");
    }

    #[test]
    fn test_callback_reregistering_its_own_id_resets_the_record() {
        let mut mgr = manual_manager();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        mgr.register_animation(
            "phoenix",
            AnimationSpec::new().update(move |ctx, _elapsed| {
                if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    // Replace ourselves; the old callback must not be
                    // restored over the fresh record.
                    ctx.register_animation("phoenix", AnimationSpec::new());
                }
                Ok(())
            }),
        );
        mgr.start();

        mgr.tick();
        mgr.tick();
        mgr.tick();

        assert_eq!(calls.load(Ordering::SeqCst), 1, "replacement has no callback");
        assert!(mgr.contains("phoenix"));
    }

    #[test]
    fn test_cancellation_token_stops_by_id() {
        let mut mgr = manual_manager();
        let token = mgr.animate("wave", Vec::new(), |_dancers, _t| {}, None);
        assert!(mgr.is_running());
        assert_eq!(token.id().as_str(), "wave");

        token.cancel(&mut mgr);
        assert!(!mgr.contains("wave"));
    }
}
