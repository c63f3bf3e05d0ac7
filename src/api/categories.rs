//! Category API

use crate::models::Category;

use super::client::{self, ApiError};

pub async fn get_categories() -> Result<Vec<Category>, ApiError> {
    client::get("/categories", &[]).await
}
