//! Navigation Bar Component
//!
//! Top navigation with auth-aware session controls.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::stores::{self, AuthStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = stores::use_auth_store();

    view! {
        <header class="nav-bar">
            <A href="/" attr:class="brand">"AI 新闻"</A>
            <nav class="nav-links">
                <A href="/">"首页"</A>
                <A href="/today">"今日精选"</A>
                <A href="/search">"搜索"</A>
                <A href="/categories">"分类"</A>
                {move || stores::is_admin(&auth).then(|| view! { <A href="/admin">"管理后台"</A> })}
            </nav>
            <div class="nav-session">
                {move || if stores::is_authenticated(&auth) {
                    let username = auth
                        .user()
                        .read()
                        .as_ref()
                        .map(|user| user.username.clone())
                        .unwrap_or_default();
                    view! {
                        <A href="/profile" attr:class="nav-user">{username}</A>
                        <button class="nav-logout" on:click=move |_| stores::logout(auth)>
                            "退出"
                        </button>
                    }.into_any()
                } else {
                    view! { <A href="/login" attr:class="nav-login">"登录"</A> }.into_any()
                }}
            </div>
        </header>
    }
}
