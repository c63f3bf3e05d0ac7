//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::LoginRequest;
use crate::stores::{self, AuthStateStoreFields};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = stores::use_auth_store();
    let query = use_query_map();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if stores::login(auth, credentials).await {
                let target = query
                    .get_untracked()
                    .get("redirect")
                    .unwrap_or_else(|| "/".to_string());
                navigate(&target, Default::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"登录"</h1>
                <input
                    type="email"
                    placeholder="邮箱"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="密码"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || auth.error().get().map(|error| view! {
                    <p class="form-error">{error}</p>
                })}
                <button type="submit" disabled=move || auth.loading().get()>
                    {move || if auth.loading().get() { "登录中..." } else { "登录" }}
                </button>
                <p class="auth-switch">
                    "还没有账号？" <A href="/register">"注册"</A>
                </p>
            </form>
        </section>
    }
}
