//! Frontend Models
//!
//! Data structures matching backend API responses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// News article (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub url: String,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub fetched_at: String,
    #[serde(default)]
    pub is_processed: bool,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub chinese_title: Option<String>,
    pub llm_summary: Option<String>,
    pub original_language: Option<String>,
    pub llm_processed_at: Option<String>,
    #[serde(default)]
    pub llm_processing_status: String,
    #[serde(default)]
    pub source: Option<NewsSource>,
}

/// Today view of a processed article (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayArticle {
    pub id: u32,
    pub original_title: String,
    pub chinese_title: String,
    pub url: String,
    pub author: Option<String>,
    pub source_name: String,
    pub published_at: String,
    pub llm_summary: String,
    pub original_language: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// News source (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub source_type: String,
    pub is_active: bool,
    pub fetch_interval: u32,
    pub last_fetch_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Article category (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<u32>,
    pub is_active: bool,
}

/// Paginated article list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleListResponse {
    pub total: u32,
    pub page: u32,
    pub size: u32,
    pub articles: Vec<Article>,
}

/// Paginated today-article list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayArticleListResponse {
    pub total: u32,
    pub page: u32,
    pub size: u32,
    pub articles: Vec<TodayArticle>,
}

/// Search result envelope; same pagination shape plus query echo and timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total: u32,
    pub page: u32,
    pub size: u32,
    pub articles: Vec<Article>,
    pub took: f64,
}

/// Today processing statistics (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayStats {
    pub today_total: u32,
    pub processed: u32,
    pub processing: u32,
    pub pending: u32,
    pub failed: u32,
    #[serde(default)]
    pub language_distribution: HashMap<String, u32>,
}

/// Authenticated user profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: String,
}

/// Login / register response: token plus the user it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}
