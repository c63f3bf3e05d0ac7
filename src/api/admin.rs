//! Admin API
//!
//! News-source management; consumed through the same transport with no
//! special handling, the backend enforces the admin flag.

use serde::Serialize;

use crate::models::NewsSource;

use super::client::{self, ApiError};

/// Source create/update payload; unset fields keep their server value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_interval: Option<u32>,
}

pub async fn admin_list_sources() -> Result<Vec<NewsSource>, ApiError> {
    client::get("/admin/sources", &[]).await
}

pub async fn admin_create_source(data: &SourceInput) -> Result<NewsSource, ApiError> {
    client::post("/admin/sources", data).await
}

pub async fn admin_update_source(id: u32, data: &SourceInput) -> Result<NewsSource, ApiError> {
    client::put(&format!("/admin/sources/{id}"), data).await
}

pub async fn admin_delete_source(id: u32) -> Result<(), ApiError> {
    client::delete(&format!("/admin/sources/{id}")).await
}

/// Trigger an immediate crawl of one source.
pub async fn admin_fetch_source(id: u32) -> Result<(), ApiError> {
    client::post_empty(&format!("/admin/sources/{id}/fetch")).await
}
