//! Article API
//!
//! List, detail and search endpoints.

use crate::models::{Article, ArticleListResponse, SearchResponse};

use super::client::{self, ApiError};

// ========================
// Query Structs
// ========================

/// Query for `GET /articles`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleListQuery {
    pub page: u32,
    pub size: u32,
    pub category: Option<String>,
    pub source_id: Option<u32>,
    pub tag_id: Option<u32>,
}

impl ArticleListQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(source_id) = self.source_id {
            pairs.push(("source_id", source_id.to_string()));
        }
        if let Some(tag_id) = self.tag_id {
            pairs.push(("tag_id", tag_id.to_string()));
        }
        pairs
    }
}

/// Sort order accepted by `GET /search`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchSort {
    #[default]
    PublishedAt,
    Relevance,
}

impl SearchSort {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchSort::PublishedAt => "published_at",
            SearchSort::Relevance => "relevance",
        }
    }
}

/// Query for `GET /search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub q: String,
    pub category: Option<String>,
    pub page: u32,
    pub size: u32,
    pub sort: SearchSort,
}

impl SearchQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.q.clone()),
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}

// ========================
// Calls
// ========================

pub async fn get_articles(query: &ArticleListQuery) -> Result<ArticleListResponse, ApiError> {
    client::get("/articles", &query.to_pairs()).await
}

pub async fn get_article(id: u32) -> Result<Article, ApiError> {
    client::get(&format!("/articles/{id}"), &[]).await
}

pub async fn search_articles(query: &SearchQuery) -> Result<SearchResponse, ApiError> {
    client::get("/search", &query.to_pairs()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_query_pairs() {
        let query = ArticleListQuery {
            page: 2,
            size: 20,
            category: Some("ai".to_string()),
            source_id: None,
            tag_id: Some(7),
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("page", "2".to_string())));
        assert!(pairs.contains(&("category", "ai".to_string())));
        assert!(pairs.contains(&("tag_id", "7".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "source_id"));
    }

    #[test]
    fn test_search_query_pairs() {
        let query = SearchQuery {
            q: "llm".to_string(),
            page: 1,
            size: 20,
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("q", "llm".to_string())));
        assert!(pairs.contains(&("sort", "published_at".to_string())));
    }
}
