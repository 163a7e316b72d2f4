//! Target boundary
//!
//! The animation core coordinates movement and closure of opaque on-screen
//! entities without knowing what they are. This module is the whole
//! contract between the core and a window backend.

use crate::geometry::Point;
use std::sync::Arc;

/// An on-screen entity an animation repositions and may ask to close.
///
/// Implementations must keep every method safe after closure: `move_to` on
/// a closed target is a silent no-op and `close` is idempotent.
pub trait Target: Send + Sync {
    /// Reposition the target. No-op once closed.
    fn move_to(&self, position: Point);

    /// Request the target to release itself. Idempotent.
    fn close(&self);

    /// Whether the target has been closed or has otherwise gone away.
    fn is_closed(&self) -> bool;
}

/// Shared handle to a target. The animation core never owns targets, it
/// only holds references alongside whoever spawned them.
pub type TargetRef = Arc<dyn Target>;

/// Request closure of every still-open target in `targets`.
///
/// Already-closed handles are skipped, so running the same slice through
/// twice requests nothing the second time.
pub fn close_all(targets: &[TargetRef]) {
    let open = targets.iter().filter(|t| !t.is_closed()).count();
    if open > 0 {
        tracing::trace!("close_all: requesting closure of {} targets", open);
    }
    for target in targets {
        if !target.is_closed() {
            target.close();
        }
    }
}
