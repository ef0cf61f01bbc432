//! NewReleases API client library.
//!
//! A Rust library for the NewReleases release-tracking API. Each operation
//! (Get, List, Create, Update, Delete) is defined as a trait that entity
//! types implement, and every call goes through a single request gateway
//! that handles authentication, JSON, error mapping and rate limits.
//!
//! # Quick Start
//!
//! ```no_run
//! use newreleases::{List, NewReleasesClient, Project, ProjectRef, Release};
//!
//! #[tokio::main]
//! async fn main() -> newreleases::Result<()> {
//!     // Create client from environment variables
//!     let client = NewReleasesClient::from_env()?;
//!
//!     // List all tracked projects
//!     let projects = Project::list_all(&client, &Default::default()).await?;
//!     println!("Tracking {} projects", projects.len());
//!
//!     // First page of releases for one of them
//!     let releases = Release::list_page(&client, &ProjectRef::name("github", "golang/go"), 1).await?;
//!     for release in &releases {
//!         println!("{} ({})", release.version, release.date);
//!     }
//!
//!     println!("{}", client.rate());
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure is a [`NewReleasesError`] variant: local precondition
//! failures such as [`NewReleasesError::InvalidPageNumber`], transport
//! errors, classified HTTP statuses (`NotFound`, `TooManyRequests`, ...),
//! validation errors carrying the server's messages, and JSON errors.
//! Nothing is retried.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `NEWRELEASES_API_KEY` (required) - Your NewReleases API key
//! - `NEWRELEASES_API_URL` (optional) - Base URL (defaults to `https://api.newreleases.io/`)

mod client;
mod error;
mod models;
mod pagination;
mod rate;
mod traits;
mod transport;

pub mod cli;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod output;

// Re-export core types
pub use client::NewReleasesClient;
pub use error::{classify, classify_with_reason, BadRequestError, NewReleasesError, Result};
pub use pagination::Page;
pub use rate::Rate;
pub use transport::{Auth, ClientOptions, USER_AGENT};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update};

// Re-export models
pub use models::{
    // Project types
    EmailNotification,
    Exclusion,
    NewProject,
    Project,
    ProjectListOrder,
    ProjectListQuery,
    ProjectOptions,
    ProjectRef,
    // Release types
    Release,
    ReleaseNote,
    ReleaseRef,
    // Tags
    Tag,
    // Auth keys
    AuthKey,
    CidrParseError,
    IpNet,
    // Integrations
    DiscordChannel,
    MatrixRoom,
    SlackChannel,
    TelegramChat,
    Webhook,
    WebhookKind,
};

pub use output::PrettyPrint;

// Re-export convenience functions
pub use models::{get_auth_keys, list_added_providers, list_providers};
