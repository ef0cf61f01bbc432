//! Project endpoint handlers.
//!
//! Everything below `/v1/projects/` shares one wildcard route: provider
//! listings, project lookups by ID or `provider/name`, search and the
//! release subtree are told apart by the shape of the path.

use std::cmp::Reverse;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{bad_request, not_found, paginate, releases, SharedState};
use crate::mock_server::state::MockState;
use crate::{NewProject, Project, ProjectOptions};

/// Query parameters accepted under `/v1/projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    pub page: Option<u32>,
    pub order: Option<String>,
    /// Present (usually with an empty value) when the order is reversed.
    pub reverse: Option<String>,
    pub q: Option<String>,
    pub provider: Option<String>,
}

/// GET /v1/projects
pub async fn list_projects(
    State(state): State<SharedState>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let state = state.read().await;
    project_page(&state, None, &query)
}

/// GET /v1/projects/{rest}
pub async fn get_project_route(
    State(state): State<SharedState>,
    Path(rest): Path<String>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let rest = rest.trim_matches('/');
    let state = state.read().await;

    if rest == "search" {
        let found: Vec<Project> = state
            .search_projects(query.q.as_deref().unwrap_or_default(), query.provider.as_deref())
            .into_iter()
            .cloned()
            .collect();
        return Json(serde_json::json!({ "projects": found })).into_response();
    }

    if let Some((reference, tail)) = rest.split_once("/releases") {
        if tail.is_empty() || tail.starts_with('/') {
            return releases::route(&state, reference, tail, query.page);
        }
    }

    if state.providers.iter().any(|p| p == rest) {
        return project_page(&state, Some(rest), &query);
    }

    match state.find_project(rest) {
        Some(project) => Json(project.clone()).into_response(),
        None => not_found(),
    }
}

/// POST /v1/projects
pub async fn add_project(
    State(state): State<SharedState>,
    Json(params): Json<NewProject>,
) -> Response {
    let mut state = state.write().await;

    let mut errors = Vec::new();
    if !state.providers.contains(&params.provider) {
        errors.push(format!("Unsupported provider {}", params.provider));
    }
    if params.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    let reference = format!("{}/{}", params.provider, params.name);
    if state.find_project(&reference).is_some() {
        errors.push("Project already added".to_string());
    }
    if !errors.is_empty() {
        return bad_request(errors);
    }

    let id = state.next_id("p");
    let mut project = crate::mock_server::Fixtures::project(&id, &params.provider, &params.name);
    project.url = format!("https://{}.example/{}", params.provider, params.name);
    state.projects.push(project);
    let index = state.projects.len() - 1;
    let project = state.update_project(index, params.options).clone();

    (StatusCode::CREATED, Json(project)).into_response()
}

/// POST /v1/projects/{id or provider/name}
pub async fn update_project(
    State(state): State<SharedState>,
    Path(rest): Path<String>,
    Json(options): Json<ProjectOptions>,
) -> Response {
    let mut state = state.write().await;

    match state.project_index(rest.trim_matches('/')) {
        Some(index) => Json(state.update_project(index, options).clone()).into_response(),
        None => not_found(),
    }
}

/// DELETE /v1/projects/{id or provider/name}
///
/// Answers with an empty, non-JSON body.
pub async fn delete_project(
    State(state): State<SharedState>,
    Path(rest): Path<String>,
) -> Response {
    let mut state = state.write().await;

    match state.project_index(rest.trim_matches('/')) {
        Some(index) => {
            state.remove_project(index);
            StatusCode::OK.into_response()
        }
        None => not_found(),
    }
}

fn project_page(state: &MockState, provider: Option<&str>, query: &ProjectsQuery) -> Response {
    let mut projects: Vec<Project> = state.list_projects(provider).into_iter().cloned().collect();

    match query.order.as_deref() {
        Some("name") => projects.sort_by(|a, b| a.name.cmp(&b.name)),
        Some("added") => projects.reverse(),
        _ => projects.sort_by_key(|p| Reverse(state.list_releases(&p.id).first().map(|r| r.date))),
    }
    if query.reverse.is_some() {
        projects.reverse();
    }

    let (projects, total_pages) = paginate(&projects, query.page.unwrap_or(1), state.page_size);
    Json(serde_json::json!({
        "projects": projects,
        "total_pages": total_pages,
    }))
    .into_response()
}
