//! Progress Bar Component
//!
//! Thin top-of-page bar reflecting outstanding API requests. Shown while the
//! counter is non-zero; hiding waits out a short minimum-visible window so
//! fast responses still register.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::progress;

const MIN_VISIBLE_MS: u32 = 200;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let pending = progress::init();
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        if pending.get() > 0 {
            set_visible.set(true);
        } else if visible.get_untracked() {
            spawn_local(async move {
                TimeoutFuture::new(MIN_VISIBLE_MS).await;
                // Another request may have started during the wait.
                let still_idle = progress::pending()
                    .map(|pending| pending.get_untracked() == 0)
                    .unwrap_or(true);
                if still_idle {
                    set_visible.set(false);
                }
            });
        }
    });

    view! {
        <div class="progress-bar" class:active=move || visible.get()></div>
    }
}
