//! Provider endpoint handlers.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use super::SharedState;

/// GET /v1/providers
///
/// With the key-only `added` parameter, lists providers of tracked projects.
pub async fn list_providers(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let state = state.read().await;

    let providers = if query.contains_key("added") {
        state.added_providers()
    } else {
        state.providers.clone()
    };

    Json(serde_json::json!({ "providers": providers }))
}
