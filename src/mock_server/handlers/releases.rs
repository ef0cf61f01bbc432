//! Release endpoint handlers, reached through the project wildcard route.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use super::{not_found, paginate};
use crate::mock_server::state::MockState;

/// Serve `{project}/releases{tail}`.
///
/// An empty tail lists releases, `/{version}` returns one release and
/// `/{version}/note` its note.
pub(crate) fn route(state: &MockState, reference: &str, tail: &str, page: Option<u32>) -> Response {
    let Some(project) = state.find_project(reference) else {
        return not_found();
    };
    let releases = state.list_releases(&project.id);

    let tail = tail.trim_matches('/');
    if tail.is_empty() {
        let (releases, total_pages) = paginate(releases, page.unwrap_or(1), state.page_size);
        return Json(serde_json::json!({
            "releases": releases,
            "total_pages": total_pages,
        }))
        .into_response();
    }

    let (version, want_note) = match tail.strip_suffix("/note") {
        Some(version) => (version, true),
        None => (tail, false),
    };
    let Some(release) = releases.iter().find(|r| r.version == version) else {
        return not_found();
    };

    if !want_note {
        return Json(release.clone()).into_response();
    }
    match state
        .notes
        .get(&(project.id.clone(), version.to_string()))
    {
        Some(note) => Json(note.clone()).into_response(),
        None => not_found(),
    }
}
