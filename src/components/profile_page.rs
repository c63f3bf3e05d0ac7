//! Profile Page
//!
//! Edit the current user's profile; the server's response replaces the held
//! user wholesale.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::UpdateProfileRequest;
use crate::stores::{self, AuthStateStoreFields};
use crate::toast;
use crate::utils::format_date;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = stores::use_auth_store();

    let (username, set_username) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (avatar_url, set_avatar_url) = signal(String::new());

    // Prefill once the lazily-fetched profile arrives.
    Effect::new(move |_| {
        if let Some(user) = auth.user().get() {
            set_username.set(user.username);
            set_bio.set(user.bio.unwrap_or_default());
            set_avatar_url.set(user.avatar_url.unwrap_or_default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = UpdateProfileRequest {
            username: Some(username.get_untracked()),
            bio: Some(bio.get_untracked()),
            avatar_url: Some(avatar_url.get_untracked()),
            ..Default::default()
        };
        spawn_local(async move {
            if stores::update_profile(auth, data).await {
                toast::success("资料已更新");
            }
        });
    };

    view! {
        <section class="profile-page">
            <form class="profile-form" on:submit=on_submit>
                <h1>"个人资料"</h1>

                {move || auth.user().get().map(|user| view! {
                    <div class="profile-summary">
                        <p class="profile-email">{user.email.clone()}</p>
                        <p class="profile-joined">{format!("注册于 {}", format_date(&user.created_at))}</p>
                    </div>
                })}

                <label>"用户名"</label>
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />

                <label>"头像链接"</label>
                <input
                    type="url"
                    prop:value=move || avatar_url.get()
                    on:input=move |ev| set_avatar_url.set(event_target_value(&ev))
                />

                <label>"简介"</label>
                <textarea
                    prop:value=move || bio.get()
                    on:input=move |ev| set_bio.set(event_target_value(&ev))
                ></textarea>

                {move || auth.error().get().map(|error| view! {
                    <p class="form-error">{error}</p>
                })}
                <button type="submit" disabled=move || auth.loading().get()>"保存"</button>
            </form>
        </section>
    }
}
