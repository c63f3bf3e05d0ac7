//! News Source API

use crate::models::NewsSource;

use super::client::{self, ApiError};

pub async fn get_sources() -> Result<Vec<NewsSource>, ApiError> {
    client::get("/sources", &[]).await
}

pub async fn get_source(id: u32) -> Result<NewsSource, ApiError> {
    client::get(&format!("/sources/{id}"), &[]).await
}
