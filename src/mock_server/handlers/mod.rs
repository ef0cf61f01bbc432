//! HTTP request handlers for the mock server.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

pub mod auth;
pub mod projects;
pub mod providers;
pub mod releases;
pub mod tags;

pub use auth::*;
pub use projects::*;
pub use providers::*;
pub use tags::*;

pub(crate) type SharedState = Arc<RwLock<MockState>>;

pub(crate) fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Not Found" })),
    )
        .into_response()
}

/// 400 response in the shape clients decode into validation errors.
pub(crate) fn bad_request(errors: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "errors": errors })),
    )
        .into_response()
}

/// Slice one 1-indexed page out of `items`, returning it with the page count.
pub(crate) fn paginate<T: Clone>(items: &[T], page: u32, page_size: usize) -> (Vec<T>, u32) {
    let total_pages = items.len().div_ceil(page_size) as u32;
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    let slice = items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();
    (slice, total_pages)
}
