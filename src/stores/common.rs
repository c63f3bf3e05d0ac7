//! Common Store
//!
//! Reference data shared across views: news sources and categories. No
//! pagination; both collections load concurrently on startup and either may
//! fail without blocking the other.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{Category, NewsSource};

#[derive(Clone, Debug, Default, Store)]
pub struct CommonState {
    pub sources: Vec<NewsSource>,
    pub categories: Vec<Category>,
    pub loading: bool,
}

pub type CommonStore = Store<CommonState>;

/// Create the store and put it into context. Called once from `App`.
pub fn provide_common_store() -> CommonStore {
    let store = Store::new(CommonState::default());
    provide_context(store);
    store
}

/// Get the common store from context.
pub fn use_common_store() -> CommonStore {
    expect_context::<CommonStore>()
}

// ========================
// Actions
// ========================

pub async fn fetch_sources(store: CommonStore) {
    store.loading().set(true);
    match api::get_sources().await {
        Ok(sources) => store.sources().set(sources),
        Err(err) => log::error!("failed to fetch sources: {err}"),
    }
    store.loading().set(false);
}

pub async fn fetch_categories(store: CommonStore) {
    store.loading().set(true);
    match api::get_categories().await {
        Ok(categories) => store.categories().set(categories),
        Err(err) => log::error!("failed to fetch categories: {err}"),
    }
    store.loading().set(false);
}

/// Load both reference collections concurrently; each sub-fetch handles its
/// own failure, so one going down never empties the other.
pub async fn initialize_data(store: CommonStore) {
    futures::join!(fetch_sources(store), fetch_categories(store));
}
