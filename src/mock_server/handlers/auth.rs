//! Auth key endpoint handlers.

use axum::{extract::State, response::IntoResponse, Json};

use super::SharedState;

/// GET /v1/auth/keys
pub async fn list_auth_keys(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(serde_json::json!({ "keys": state.auth_keys }))
}
