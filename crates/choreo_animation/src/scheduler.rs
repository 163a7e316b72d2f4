//! Tick scheduling abstraction
//!
//! The manager asks its scheduler for "one tick, please" and keeps the
//! returned handle so it can withdraw the request on `stop`. When the tick
//! actually runs is the host's business: real-time pacing lives in
//! [`crate::drive`], while [`ManualScheduler`] serves hosts (and tests)
//! that dispatch ticks themselves.

/// Cookie identifying one pending tick request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Source of future ticks.
///
/// Cancelling an unknown or already-fired handle must be a no-op.
pub trait TickScheduler {
    /// Request one tick at the next opportunity.
    fn schedule(&mut self) -> TickHandle;

    /// Withdraw a pending request.
    fn cancel(&mut self, handle: TickHandle);
}

/// Scheduler for hosts that drive ticks themselves: every request is
/// immediately due and stays pending until popped.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    issued: u64,
    pending: Option<TickHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tick request is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Pop the pending request, if any. The host answers by ticking.
    pub fn take_pending(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }

    /// How many requests have ever been made.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self) -> TickHandle {
        self.issued += 1;
        let handle = TickHandle(self.issued);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_then_cancel() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.is_pending());

        let handle = scheduler.schedule();
        assert!(scheduler.is_pending());

        scheduler.cancel(handle);
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn test_cancel_ignores_stale_handles() {
        let mut scheduler = ManualScheduler::new();
        let old = scheduler.schedule();
        scheduler.take_pending();

        let fresh = scheduler.schedule();
        scheduler.cancel(old);
        assert!(scheduler.is_pending(), "stale cancel must not drop a newer request");

        scheduler.cancel(fresh);
        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.issued(), 2);
    }
}
