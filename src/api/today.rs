//! Today API
//!
//! Curated "today's picks" list, statistics and the batch-processing trigger.

use crate::models::{TodayArticleListResponse, TodayStats};

use super::client::{self, ApiError};

/// Query for `GET /today/articles`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodayListQuery {
    pub page: u32,
    pub size: u32,
    pub source: Option<String>,
    pub language: Option<String>,
}

impl TodayListQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(source) = &self.source {
            pairs.push(("source", source.clone()));
        }
        if let Some(language) = &self.language {
            pairs.push(("language", language.clone()));
        }
        pairs
    }
}

pub async fn get_today_articles(query: &TodayListQuery) -> Result<TodayArticleListResponse, ApiError> {
    client::get("/today/articles", &query.to_pairs()).await
}

pub async fn get_today_stats() -> Result<TodayStats, ApiError> {
    client::get("/today/stats", &[]).await
}

/// Kick off the server-side batch job; long-running, response body ignored.
pub async fn process_today_articles() -> Result<(), ApiError> {
    client::post_empty("/today/process").await
}
