//! Mock NewReleases API server.
//!
//! Provides an axum-based HTTP server that simulates the NewReleases API.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use url::Url;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::middleware::guard;
use super::state::MockState;
use crate::ClientOptions;

/// A mock NewReleases API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening, ending in `/`.
    url: Url,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        let url = Url::parse(&format!("http://{}/", addr)).expect("Failed to build server URL");

        Self {
            url,
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Client options pointing at this server.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::default().base_url(self.url.clone())
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();
        state.providers = scenario.providers;

        for project in scenario.projects {
            state = state.with_project(project);
        }

        for (project_id, release) in scenario.releases {
            state = state.with_release(&project_id, release);
        }

        for (project_id, version, note) in scenario.notes {
            state = state.with_note(&project_id, &version, note);
        }

        state.tags = scenario.tags;
        state.auth_keys = scenario.auth_keys;
        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Project and release routes
            .route(
                "/v1/projects",
                get(handlers::list_projects).post(handlers::add_project),
            )
            .route(
                "/v1/projects/*rest",
                get(handlers::get_project_route)
                    .post(handlers::update_project)
                    .delete(handlers::delete_project),
            )
            // Provider routes
            .route("/v1/providers", get(handlers::list_providers))
            // Tag routes
            .route(
                "/v1/tags",
                get(handlers::list_tags).post(handlers::create_tag),
            )
            .route(
                "/v1/tags/:id",
                get(handlers::get_tag)
                    .post(handlers::update_tag)
                    .delete(handlers::delete_tag),
            )
            // Auth routes
            .route("/v1/auth/keys", get(handlers::list_auth_keys))
            .layer(middleware::from_fn_with_state(state.clone(), guard))
            // Health check, outside the guard
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
