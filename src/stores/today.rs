//! Today Store
//!
//! Curated "today's picks" collection with its own filters and pagination,
//! plus processing statistics and the long-running batch-processing trigger.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, TodayListQuery};
use crate::models::{TodayArticle, TodayArticleListResponse, TodayStats};

use super::{merge_page, Pagination};

/// Active list filters; persist across fetches until reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodayFilters {
    pub source: String,
    pub language: String,
}

/// Partial filter update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodayFilterPatch {
    pub source: Option<String>,
    pub language: Option<String>,
}

/// Per-call overrides for `fetch_today_articles`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchTodayParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub source: Option<String>,
    pub language: Option<String>,
    pub append: bool,
}

#[derive(Clone, Debug, Default, Store)]
pub struct TodayState {
    pub articles: Vec<TodayArticle>,
    pub stats: Option<TodayStats>,
    pub loading: bool,
    /// The batch job is a long-running server operation, tracked separately
    /// from plain list reads.
    pub processing: bool,
    pub pagination: Pagination,
    pub filters: TodayFilters,
    /// Latest dispatched fetch; responses from older dispatches are stale.
    pub request_seq: u32,
}

pub type TodayStore = Store<TodayState>;

/// Create the store and put it into context. Called once from `App`.
pub fn provide_today_store() -> TodayStore {
    let store = Store::new(TodayState::default());
    provide_context(store);
    store
}

/// Get the today store from context.
pub fn use_today_store() -> TodayStore {
    expect_context::<TodayStore>()
}

// ========================
// Actions
// ========================

pub async fn fetch_today_articles(store: TodayStore, params: FetchTodayParams) {
    let seq = store.request_seq().get_untracked() + 1;
    store.request_seq().set(seq);
    store.loading().set(true);

    let query = merged_query(
        &params,
        &store.filters().get_untracked(),
        &store.pagination().get_untracked(),
    );
    let result = api::get_today_articles(&query).await;

    if store.request_seq().get_untracked() != seq {
        log::debug!("discarding stale today response (seq {seq})");
        return;
    }
    match result {
        Ok(response) => apply_response(store, response, params.append),
        Err(err) => log::error!("failed to fetch today articles: {err}"),
    }
    store.loading().set(false);
}

pub async fn fetch_today_stats(store: TodayStore) {
    match api::get_today_stats().await {
        Ok(stats) => store.stats().set(Some(stats)),
        Err(err) => log::error!("failed to fetch today stats: {err}"),
    }
}

/// Trigger the server-side batch job, then refresh the list and the stats
/// together once it reports completion.
pub async fn process_today_articles(store: TodayStore) {
    store.processing().set(true);
    match api::process_today_articles().await {
        Ok(()) => {
            futures::join!(
                fetch_today_articles(store, FetchTodayParams::default()),
                fetch_today_stats(store),
            );
        }
        Err(err) => log::error!("failed to process today articles: {err}"),
    }
    store.processing().set(false);
}

/// Append the next page. No-op while a fetch is in flight or when the server
/// already reported the end of the list.
pub async fn load_more_today(store: TodayStore) {
    let pagination = store.pagination().get_untracked();
    if !pagination.has_more() || store.loading().get_untracked() {
        return;
    }
    let next_page = pagination.page + 1;
    store.pagination().write().page = next_page;
    fetch_today_articles(
        store,
        FetchTodayParams {
            page: Some(next_page),
            append: true,
            ..Default::default()
        },
    )
    .await;
}

/// Merge the patch into the filters, rewind to page 1 and refetch.
pub async fn set_today_filters(store: TodayStore, patch: TodayFilterPatch) {
    store.filters().update(|filters| {
        if let Some(source) = patch.source {
            filters.source = source;
        }
        if let Some(language) = patch.language {
            filters.language = language;
        }
    });
    store.pagination().write().page = 1;
    fetch_today_articles(store, FetchTodayParams::default()).await;
}

/// Clear all filters, rewind to page 1 and refetch.
pub async fn reset_today_filters(store: TodayStore) {
    store.filters().set(TodayFilters::default());
    store.pagination().write().page = 1;
    fetch_today_articles(store, FetchTodayParams::default()).await;
}

// ========================
// Pure Helpers
// ========================

fn merged_query(
    params: &FetchTodayParams,
    filters: &TodayFilters,
    pagination: &Pagination,
) -> TodayListQuery {
    TodayListQuery {
        page: params.page.unwrap_or(pagination.page),
        size: params.size.unwrap_or(pagination.size),
        source: params
            .source
            .clone()
            .filter(|source| !source.is_empty())
            .or_else(|| Some(filters.source.clone()).filter(|source| !source.is_empty())),
        language: params
            .language
            .clone()
            .filter(|language| !language.is_empty())
            .or_else(|| Some(filters.language.clone()).filter(|language| !language.is_empty())),
    }
}

fn apply_response(store: TodayStore, response: TodayArticleListResponse, append: bool) {
    store
        .articles()
        .update(|items| merge_page(items, response.articles, append));
    store.pagination().set(Pagination {
        page: response.page,
        size: response.size,
        total: response.total,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_apply_when_params_unset() {
        let filters = TodayFilters {
            source: "Hacker News".to_string(),
            language: "en".to_string(),
        };
        let query = merged_query(&FetchTodayParams::default(), &filters, &Pagination::default());
        assert_eq!(query.source.as_deref(), Some("Hacker News"));
        assert_eq!(query.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_empty_filters_are_omitted() {
        let query = merged_query(
            &FetchTodayParams::default(),
            &TodayFilters::default(),
            &Pagination::default(),
        );
        assert_eq!(query.source, None);
        assert_eq!(query.language, None);
        assert_eq!(query.page, 1);
    }
}
