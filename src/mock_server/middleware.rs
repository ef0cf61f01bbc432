//! Request guard for the mock server.
//!
//! Checks credentials, counts requests against the rate limit and stamps
//! the rate headers on every response.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::Engine;

use super::handlers::SharedState;
use super::state::MockState;

/// Only path on which email and password are accepted instead of a key.
const AUTH_KEYS_PATH: &str = "/v1/auth/keys";

pub async fn guard(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let key = request
        .headers()
        .get("x-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let basic = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_basic);

    let (authorized, limit, remaining, exhausted, reset) = {
        let mut state = state.write().await;
        state.requests += 1;
        (
            authorize(&state, key.as_deref(), basic, request.uri().path()),
            state.rate_limit,
            state.rate_limit.saturating_sub(state.requests),
            state.requests > state.rate_limit,
            state.rate_reset_secs,
        )
    };

    let mut response = if !authorized {
        tracing::debug!(path = %request.uri().path(), "mock server rejected credentials");
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "Unauthorized" })),
        )
            .into_response()
    } else if exhausted {
        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "message": "Too Many Requests" })),
        )
            .into_response();
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(reset));
        response
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
    headers.insert("x-ratelimit-reset", HeaderValue::from(reset));
    response
}

fn authorize(
    state: &MockState,
    key: Option<&str>,
    basic: Option<(String, String)>,
    path: &str,
) -> bool {
    if let Some((email, password)) = basic {
        return path == AUTH_KEYS_PATH
            && state
                .account
                .as_ref()
                .is_some_and(|(e, p)| *e == email && *p == password);
    }
    match &state.required_key {
        Some(required) => key == Some(required.as_str()),
        None => true,
    }
}

fn parse_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (email, password) = decoded.split_once(':')?;
    Some((email.to_string(), password.to_string()))
}
