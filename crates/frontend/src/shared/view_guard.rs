//! Liveness flag for a mounted view
//!
//! Requests are never cancelled, so a response may arrive after its page was left.
//! Completions check the guard and are dropped once the owning view is cleaned up.

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ViewGuard {
    active: Arc<AtomicBool>,
}

impl ViewGuard {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Guard that deactivates when the current reactive owner is cleaned up
    pub fn for_current_owner() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        on_cleanup(move || on_unmount.deactivate());
        guard
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for ViewGuard {
    fn default() -> Self {
        Self::new()
    }
}
