//! Auth API
//!
//! Login, registration and profile endpoints.

use serde::Serialize;

use crate::models::{AuthResponse, User};

use super::client::{self, ApiError};

// ========================
// Request Structs
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// ========================
// Calls
// ========================

pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client::post("/auth/login", credentials).await
}

pub async fn register(data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client::post("/auth/register", data).await
}

pub async fn get_current_user() -> Result<User, ApiError> {
    client::get("/auth/me", &[]).await
}

pub async fn update_profile(data: &UpdateProfileRequest) -> Result<User, ApiError> {
    client::put("/auth/me", data).await
}
