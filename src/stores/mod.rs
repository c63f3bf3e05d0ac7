//! Global Application Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: one store per
//! domain, provided via context from `App` and accessed through the
//! `use_*_store()` helpers. Stores own their collections exclusively; all
//! mutation goes through the action functions in these modules.

mod article;
mod auth;
mod common;
mod today;

pub use article::{
    fetch_article, fetch_articles, provide_article_store, use_article_store, ArticleFilterPatch,
    ArticleFilters, ArticleState, ArticleStateStoreFields, ArticleStore, FetchArticlesParams,
};
pub use article::{load_more_articles, reset_article_filters, set_article_filters};
pub use auth::{
    fetch_current_user, is_admin, is_authenticated, login, logout, provide_auth_store,
    register, resolve_session, update_profile, use_auth_store, AuthState, AuthStateStoreFields,
    AuthStore,
};
pub use common::{
    fetch_categories, fetch_sources, initialize_data, provide_common_store, use_common_store,
    CommonState, CommonStateStoreFields, CommonStore,
};
pub use today::{
    fetch_today_articles, fetch_today_stats, load_more_today, process_today_articles,
    provide_today_store, reset_today_filters, set_today_filters, use_today_store,
    FetchTodayParams, TodayFilterPatch, TodayFilters, TodayState, TodayStateStoreFields,
    TodayStore,
};

/// Default page size; the server echoes the effective value back.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination bookkeeping for a list store. `page`/`size`/`total` always
/// reflect the server's most recent echo, never an optimistic local count.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    pub total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    pub fn has_more(&self) -> bool {
        self.page * self.size < self.total
    }

    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.size.max(1))
    }
}

/// Append pages concatenate in received order; everything else replaces the
/// collection outright.
fn merge_page<T>(items: &mut Vec<T>, incoming: Vec<T>, append: bool) {
    if append {
        items.extend(incoming);
    } else {
        *items = incoming;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more() {
        let pagination = Pagination {
            page: 1,
            size: 20,
            total: 45,
        };
        assert!(pagination.has_more());
        let last = Pagination {
            page: 3,
            size: 20,
            total: 45,
        };
        assert!(!last.has_more());
        // Exact boundary: page * size == total means nothing left.
        let exact = Pagination {
            page: 2,
            size: 20,
            total: 40,
        };
        assert!(!exact.has_more());
    }

    #[test]
    fn test_total_pages() {
        let pagination = Pagination {
            page: 1,
            size: 20,
            total: 45,
        };
        assert_eq!(pagination.total_pages(), 3);
        let empty = Pagination::default();
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_merge_page_replace() {
        let mut items = vec![1, 2, 3];
        merge_page(&mut items, vec![4, 5], false);
        assert_eq!(items, vec![4, 5]);
    }

    #[test]
    fn test_merge_page_append_keeps_received_order() {
        let mut items = vec![1, 2, 3];
        merge_page(&mut items, vec![4, 5], true);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }
}
