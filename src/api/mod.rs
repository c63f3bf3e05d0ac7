//! API Call Wrappers
//!
//! Frontend bindings to the backend HTTP API, organized by domain. All calls
//! go through the shared transport in `client`.

mod client;

mod admin;
mod articles;
mod auth;
mod categories;
mod sources;
mod today;

pub use client::{ApiError, FieldError};

// Re-export all public items
pub use admin::*;
pub use articles::*;
pub use auth::*;
pub use categories::*;
pub use sources::*;
pub use today::*;
