//! Mock NewReleases API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! NewReleases API for integration and end-to-end testing. Unlike wiremock,
//! which mocks at the HTTP level per-test, this server keeps state across
//! requests, enforces the API key and reports rate limit headers, so whole
//! workflows can be exercised against it.
//!
//! # Example
//!
//! ```ignore
//! use newreleases::mock_server::MockServer;
//! use newreleases::{Get, NewReleasesClient, Project, ProjectRef};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client =
//!         NewReleasesClient::with_options("test-key", server.client_options()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = Project::get(&client, ProjectRef::name("github", "golang/go"))
//!         .await
//!         .unwrap();
//!     assert_eq!(project.id, "p-go");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod middleware;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
