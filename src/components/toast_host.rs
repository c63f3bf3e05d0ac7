//! Toast Host Component
//!
//! Renders the global toast list in a fixed overlay.

use leptos::prelude::*;

use crate::toast::{self, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = toast::init();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=|toast| {
                    let class = match toast.kind {
                        ToastKind::Error => "toast error",
                        ToastKind::Success => "toast success",
                    };
                    view! { <div class=class>{toast.text.clone()}</div> }
                }
            />
        </div>
    }
}
