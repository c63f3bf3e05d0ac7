//! Auth Store
//!
//! Session state: token, lazily-fetched user profile, loading flag and the
//! last user-displayable error. The token round-trips through the durable
//! slot in `session`; everything else is in-memory only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::models::User;
use crate::session;

/// Session state. `token.is_some()` alone decides authentication; the user
/// profile may lag behind until `fetch_current_user` completes.
#[derive(Clone, Debug, Default, Store)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

pub type AuthStore = Store<AuthState>;

/// Create the store from the durable slot and put it into context.
/// Called once from `App`.
pub fn provide_auth_store() -> AuthStore {
    let store = Store::new(AuthState {
        token: session::load_token(),
        ..Default::default()
    });
    provide_context(store);
    store
}

/// Get the auth store from context.
pub fn use_auth_store() -> AuthStore {
    expect_context::<AuthStore>()
}

// ========================
// Getters
// ========================

pub fn is_authenticated(store: &AuthStore) -> bool {
    store.token().read().is_some()
}

pub fn is_admin(store: &AuthStore) -> bool {
    store.user().read().as_ref().is_some_and(|user| user.is_admin)
}

// ========================
// Actions
// ========================

/// Exchange credentials for a session. Returns whether it worked; failures
/// land in `error` as readable text, nothing escapes to the caller.
pub async fn login(store: AuthStore, credentials: LoginRequest) -> bool {
    store.loading().set(true);
    store.error().set(None);
    let ok = match api::login(&credentials).await {
        Ok(response) => {
            session::store_token(&response.access_token);
            store.token().set(Some(response.access_token));
            store.user().set(Some(response.user));
            true
        }
        Err(err) => {
            store.error().set(Some(err.message_or("Login failed")));
            false
        }
    };
    store.loading().set(false);
    ok
}

/// Create an account; the server returns a token alongside the profile, so
/// a successful registration is immediately a live session.
pub async fn register(store: AuthStore, data: RegisterRequest) -> bool {
    store.loading().set(true);
    store.error().set(None);
    let ok = match api::register(&data).await {
        Ok(response) => {
            session::store_token(&response.access_token);
            store.token().set(Some(response.access_token));
            store.user().set(Some(response.user));
            true
        }
        Err(err) => {
            store.error().set(Some(err.message_or("Registration failed")));
            false
        }
    };
    store.loading().set(false);
    ok
}

/// Resolve the held token to a profile. A failure (typically 401) means the
/// token is stale, so the whole session is reset rather than left half-valid.
pub async fn fetch_current_user(store: AuthStore) {
    if store.token().get_untracked().is_none() {
        return;
    }
    store.loading().set(true);
    match api::get_current_user().await {
        Ok(user) => store.user().set(Some(user)),
        Err(_) => logout(store),
    }
    store.loading().set(false);
}

/// Send changed profile fields; the server's response replaces the user
/// wholesale. On failure the prior profile stays.
pub async fn update_profile(store: AuthStore, data: UpdateProfileRequest) -> bool {
    store.loading().set(true);
    let ok = match api::update_profile(&data).await {
        Ok(user) => {
            store.user().set(Some(user));
            true
        }
        Err(err) => {
            store.error().set(Some(err.message_or("Update failed")));
            false
        }
    };
    store.loading().set(false);
    ok
}

/// Drop the session locally; no server confirmation involved.
pub fn logout(store: AuthStore) {
    store.token().set(None);
    store.user().set(None);
    session::clear_token();
}

/// Kick off a profile fetch for a token-restored session (page reload) so
/// gated views see a resolved state. No-op when already resolved or a fetch
/// is in flight.
pub fn resolve_session(store: AuthStore) {
    let needs_profile = store.token().get_untracked().is_some()
        && store.user().get_untracked().is_none()
        && !store.loading().get_untracked();
    if needs_profile {
        spawn_local(fetch_current_user(store));
    }
}
