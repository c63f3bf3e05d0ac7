//! Global Progress Indicator
//!
//! Tracks the number of outstanding API requests. The transport bumps the
//! counter around every call; the `ProgressBar` component renders while the
//! counter is non-zero. A counter (not a boolean) so overlapping requests
//! don't hide the bar early.

use leptos::prelude::*;
use std::sync::OnceLock;

static PENDING: OnceLock<RwSignal<u32>> = OnceLock::new();

/// Create the counter signal. Called once from `App`.
pub fn init() -> RwSignal<u32> {
    *PENDING.get_or_init(|| RwSignal::new(0))
}

/// Signal of outstanding request count, if the app is mounted.
pub fn pending() -> Option<RwSignal<u32>> {
    PENDING.get().copied()
}

/// One more request in flight.
pub fn start() {
    if let Some(pending) = pending() {
        pending.update(|n| *n += 1);
    }
}

/// A request finished (success or failure).
pub fn done() {
    if let Some(pending) = pending() {
        pending.update(|n| *n = n.saturating_sub(1));
    }
}
