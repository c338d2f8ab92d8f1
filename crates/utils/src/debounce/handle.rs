//! Handles returned from each debounced call

use std::fmt;
use std::sync::Weak;

/// Implemented by the debouncer state so handles can reach it without
/// knowing the argument type
pub(super) trait TimerOwner: Send + Sync {
    fn cancel_generation(&self, generation: u64) -> bool;
    fn is_current(&self, generation: u64) -> bool;
}

/// The timer armed by one call of a debounced function.
///
/// Only the most recent call's handle is live; every later call re-arms the
/// timer and retires earlier handles.
pub struct TimerHandle {
    generation: u64,
    owner: Weak<dyn TimerOwner>,
}

impl TimerHandle {
    pub(super) fn new(generation: u64, owner: Weak<dyn TimerOwner>) -> Self {
        Self { generation, owner }
    }

    /// Cancel the pending trailing call. Returns false if this handle was
    /// already retired, fired or cancelled.
    pub fn cancel(&self) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|owner| owner.cancel_generation(self.generation))
    }

    /// Whether this call's timer is still armed
    pub fn is_live(&self) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|owner| owner.is_current(self.generation))
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("generation", &self.generation)
            .field("live", &self.is_live())
            .finish()
    }
}
