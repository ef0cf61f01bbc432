//! Tag endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{bad_request, not_found, SharedState};
use crate::Tag;

/// Body for creating or renaming a tag.
#[derive(Debug, Deserialize)]
pub struct TagBody {
    #[serde(default)]
    pub name: String,
}

/// GET /v1/tags
pub async fn list_tags(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(serde_json::json!({ "tags": state.tags }))
}

/// GET /v1/tags/{id}
pub async fn get_tag(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;

    match state.tags.iter().find(|t| t.id == id) {
        Some(tag) => Json(tag.clone()).into_response(),
        None => not_found(),
    }
}

/// POST /v1/tags
pub async fn create_tag(State(state): State<SharedState>, Json(body): Json<TagBody>) -> Response {
    let name = body.name.trim();
    if name.is_empty() {
        return bad_request(vec!["Name is required".to_string()]);
    }

    let mut state = state.write().await;
    if state.tags.iter().any(|t| t.name == name) {
        return bad_request(vec!["Tag already exists".to_string()]);
    }

    let tag = Tag {
        id: state.next_id("t"),
        name: name.to_string(),
    };
    state.tags.push(tag.clone());

    (StatusCode::CREATED, Json(tag)).into_response()
}

/// POST /v1/tags/{id}
pub async fn update_tag(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<TagBody>,
) -> Response {
    let name = body.name.trim();
    if name.is_empty() {
        return bad_request(vec!["Name is required".to_string()]);
    }

    let mut state = state.write().await;
    match state.tags.iter_mut().find(|t| t.id == id) {
        Some(tag) => {
            tag.name = name.to_string();
            Json(tag.clone()).into_response()
        }
        None => not_found(),
    }
}

/// DELETE /v1/tags/{id}
pub async fn delete_tag(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut state = state.write().await;

    let before = state.tags.len();
    state.tags.retain(|t| t.id != id);
    if state.tags.len() == before {
        return not_found();
    }

    StatusCode::OK.into_response()
}
