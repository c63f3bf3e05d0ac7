//! Toast Notifications
//!
//! Global user-facing messages (the transport's error channel plus ad-hoc
//! success notices). Rendered by `ToastHost`, auto-dismissed after a few
//! seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;
use std::sync::OnceLock;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

static TOASTS: OnceLock<RwSignal<Vec<Toast>>> = OnceLock::new();

thread_local! {
    static NEXT_ID: Cell<u32> = const { Cell::new(0) };
}

/// Create the toast list signal. Called once from `App`.
pub fn init() -> RwSignal<Vec<Toast>> {
    *TOASTS.get_or_init(|| RwSignal::new(Vec::new()))
}

/// Show an error toast.
pub fn error(text: impl Into<String>) {
    push(ToastKind::Error, text.into());
}

/// Show a success toast.
pub fn success(text: impl Into<String>) {
    push(ToastKind::Success, text.into());
}

fn push(kind: ToastKind, text: String) {
    let Some(toasts) = TOASTS.get().copied() else {
        // Headless (tests): nowhere to render, nothing to do.
        return;
    };
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });
    toasts.update(|list| list.push(Toast { id, kind, text }));
    spawn_local(async move {
        TimeoutFuture::new(DISMISS_AFTER_MS).await;
        toasts.update(|list| list.retain(|t| t.id != id));
    });
}
