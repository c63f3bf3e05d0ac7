//! Article Store
//!
//! Paginated article collection plus the active filters. Append fetches
//! concatenate server pages; everything else replaces the collection, and
//! pagination always mirrors the server's echoed values.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, ArticleListQuery};
use crate::models::{Article, ArticleListResponse};

use super::{merge_page, Pagination};

/// Active list filters; persist across fetches until reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilters {
    pub category: String,
    pub source_id: Option<u32>,
    pub tag_id: Option<u32>,
}

/// Partial filter update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilterPatch {
    pub category: Option<String>,
    pub source_id: Option<u32>,
    pub tag_id: Option<u32>,
}

/// Per-call overrides for `fetch_articles`; anything unset falls back to the
/// stored filters, then the current pagination state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchArticlesParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub category: Option<String>,
    pub source_id: Option<u32>,
    pub tag_id: Option<u32>,
    pub append: bool,
}

#[derive(Clone, Debug, Default, Store)]
pub struct ArticleState {
    pub articles: Vec<Article>,
    pub current_article: Option<Article>,
    pub loading: bool,
    pub pagination: Pagination,
    pub filters: ArticleFilters,
    /// Latest dispatched fetch; responses from older dispatches are stale.
    pub request_seq: u32,
}

pub type ArticleStore = Store<ArticleState>;

/// Create the store and put it into context. Called once from `App`.
pub fn provide_article_store() -> ArticleStore {
    let store = Store::new(ArticleState::default());
    provide_context(store);
    store
}

/// Get the article store from context.
pub fn use_article_store() -> ArticleStore {
    expect_context::<ArticleStore>()
}

// ========================
// Actions
// ========================

/// Fetch one page. Explicit params win over stored filters, which win over
/// the current pagination. On failure the held collection stays untouched.
pub async fn fetch_articles(store: ArticleStore, params: FetchArticlesParams) {
    let seq = store.request_seq().get_untracked() + 1;
    store.request_seq().set(seq);
    store.loading().set(true);

    let query = merged_query(
        &params,
        &store.filters().get_untracked(),
        &store.pagination().get_untracked(),
    );
    let result = api::get_articles(&query).await;

    if store.request_seq().get_untracked() != seq {
        // A newer fetch owns the store now; let it finish the bookkeeping.
        log::debug!("discarding stale article response (seq {seq})");
        return;
    }
    match result {
        Ok(response) => apply_response(store, response, params.append),
        Err(err) => log::error!("failed to fetch articles: {err}"),
    }
    store.loading().set(false);
}

/// Fetch a single article into `current_article`.
pub async fn fetch_article(store: ArticleStore, id: u32) {
    store.loading().set(true);
    match api::get_article(id).await {
        Ok(article) => store.current_article().set(Some(article)),
        Err(err) => log::error!("failed to fetch article {id}: {err}"),
    }
    store.loading().set(false);
}

/// Append the next page. No-op while a fetch is in flight or when the server
/// already reported the end of the list.
pub async fn load_more_articles(store: ArticleStore) {
    let pagination = store.pagination().get_untracked();
    if !pagination.has_more() || store.loading().get_untracked() {
        return;
    }
    let next_page = pagination.page + 1;
    store.pagination().write().page = next_page;
    fetch_articles(
        store,
        FetchArticlesParams {
            page: Some(next_page),
            append: true,
            ..Default::default()
        },
    )
    .await;
}

/// Merge the patch into the filters, rewind to page 1 and refetch.
pub async fn set_article_filters(store: ArticleStore, patch: ArticleFilterPatch) {
    store.filters().update(|filters| {
        if let Some(category) = patch.category {
            filters.category = category;
        }
        if let Some(source_id) = patch.source_id {
            filters.source_id = Some(source_id);
        }
        if let Some(tag_id) = patch.tag_id {
            filters.tag_id = Some(tag_id);
        }
    });
    store.pagination().write().page = 1;
    fetch_articles(store, FetchArticlesParams::default()).await;
}

/// Clear all filters, rewind to page 1 and refetch.
pub async fn reset_article_filters(store: ArticleStore) {
    store.filters().set(ArticleFilters::default());
    store.pagination().write().page = 1;
    fetch_articles(store, FetchArticlesParams::default()).await;
}

// ========================
// Pure Helpers
// ========================

fn merged_query(
    params: &FetchArticlesParams,
    filters: &ArticleFilters,
    pagination: &Pagination,
) -> ArticleListQuery {
    ArticleListQuery {
        page: params.page.unwrap_or(pagination.page),
        size: params.size.unwrap_or(pagination.size),
        category: params
            .category
            .clone()
            .filter(|category| !category.is_empty())
            .or_else(|| Some(filters.category.clone()).filter(|category| !category.is_empty())),
        source_id: params.source_id.or(filters.source_id),
        tag_id: params.tag_id.or(filters.tag_id),
    }
}

fn apply_response(store: ArticleStore, response: ArticleListResponse, append: bool) {
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
    fn test_explicit_params_win() {
        let params = FetchArticlesParams {
            page: Some(3),
            category: Some("ml".to_string()),
            ..Default::default()
        };
        let filters = ArticleFilters {
            category: "ai".to_string(),
            source_id: Some(4),
            tag_id: None,
        };
        let pagination = Pagination::default();

        let query = merged_query(&params, &filters, &pagination);
        assert_eq!(query.page, 3);
        assert_eq!(query.size, 20);
        assert_eq!(query.category.as_deref(), Some("ml"));
        assert_eq!(query.source_id, Some(4));
    }

    #[test]
    fn test_filters_fill_unset_params() {
        let filters = ArticleFilters {
            category: "ai".to_string(),
            source_id: None,
            tag_id: Some(9),
        };
        let pagination = Pagination {
            page: 2,
            size: 50,
            total: 120,
        };

        let query = merged_query(&FetchArticlesParams::default(), &filters, &pagination);
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 50);
        assert_eq!(query.category.as_deref(), Some("ai"));
        assert_eq!(query.tag_id, Some(9));
    }

    #[test]
    fn test_empty_category_is_no_filter() {
        let query = merged_query(
            &FetchArticlesParams::default(),
            &ArticleFilters::default(),
            &Pagination::default(),
        );
        assert_eq!(query.category, None);
        assert_eq!(query.source_id, None);
        assert_eq!(query.tag_id, None);
    }
}
