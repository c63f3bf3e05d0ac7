//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::RegisterRequest;
use crate::stores::{self, AuthStateStoreFields};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = stores::use_auth_store();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if stores::register(auth, data).await {
                navigate("/", Default::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"注册"</h1>
                <input
                    type="text"
                    placeholder="用户名"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="邮箱"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="密码（至少 6 位，含字母和数字）"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || auth.error().get().map(|error| view! {
                    <p class="form-error">{error}</p>
                })}
                <button type="submit" disabled=move || auth.loading().get()>
                    {move || if auth.loading().get() { "注册中..." } else { "注册" }}
                </button>
                <p class="auth-switch">
                    "已有账号？" <A href="/login">"登录"</A>
                </p>
            </form>
        </section>
    }
}
