//! Cancellable delayed tasks for search-as-you-type.
//!
//! DESIGN
//! ======
//! Each `schedule` bumps a generation counter and sleeps; when the sleep ends
//! the task runs only if its generation is still the newest. A later
//! `schedule` or a `cancel` therefore supersedes every pending task without
//! holding timer handles. Work already started after the delay is not
//! interrupted.
//!
//! Outside the browser there is no timer, so `schedule` only supersedes
//! pending work. `schedule_after` takes the wait as a future for callers
//! that supply their own.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

/// Generation bookkeeping behind [`Debouncer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Supersede any pending task and return the ticket for a new one.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Supersede any pending task without scheduling a new one.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether `ticket` belongs to the newest scheduled task.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Reactive-owned debouncer; `Copy` so it can move into event handlers.
#[derive(Clone, Copy)]
pub struct Debouncer {
    gate: StoredValue<DebounceGate>,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self { gate: StoredValue::new(DebounceGate::default()), delay: Duration::from_millis(delay_ms) }
    }

    /// Run `task` after the delay unless superseded first.
    pub fn schedule<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            if let Some(pending) = self.schedule_after(gloo_timers::future::sleep(self.delay), task) {
                leptos::task::spawn_local(async move {
                    pending.await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.delay, task);
            self.cancel();
        }
    }

    /// Claim a ticket now and return the future that waits on `wait`, then
    /// runs `task` if no later schedule or cancel happened in between. It
    /// resolves to whether the task ran. `None` once the owner is disposed.
    pub fn schedule_after<W, F, Fut>(&self, wait: W, task: F) -> Option<impl Future<Output = bool> + use<W, F, Fut>>
    where
        W: Future<Output = ()> + 'static,
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let ticket = self.gate.try_update_value(DebounceGate::schedule)?;
        let gate = self.gate;
        Some(async move {
            wait.await;
            // A disposed gate means the owning page unmounted.
            if gate.try_with_value(|g| g.is_current(ticket)) != Some(true) {
                return false;
            }
            task().await;
            true
        })
    }

    /// Drop any pending task, e.g. on unmount.
    pub fn cancel(&self) {
        let _ = self.gate.try_update_value(DebounceGate::cancel);
    }
}
