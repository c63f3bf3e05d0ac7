//! Durable Session Slot
//!
//! Single localStorage slot holding the raw access token. Read once on app
//! start by the auth store, written only by auth-store actions and the
//! transport's 401 path.

const TOKEN_KEY: &str = "access_token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted token, if any. Absence means an anonymous session.
pub fn load_token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Persist the token so the session survives a reload.
pub fn store_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Drop the persisted token (logout or 401).
pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
