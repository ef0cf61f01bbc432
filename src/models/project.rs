//! Project model and trait implementations.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::NewReleasesClient;
use crate::error::{NewReleasesError, Result};
use crate::pagination::{Page, Query};
use crate::traits::{Create, Delete, Get, List, Update};

/// A tracked project and its notification options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// The project ID.
    pub id: String,

    /// Project name as known by its provider (e.g., "golang/go").
    pub name: String,

    /// Provider the project is tracked on (e.g., "github", "npm").
    pub provider: String,

    /// Project URL.
    #[serde(default)]
    pub url: String,

    /// Email notification frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<EmailNotification>,

    /// Connected Slack channel IDs.
    #[serde(rename = "slack_channels", default, skip_serializing_if = "Vec::is_empty")]
    pub slack_ids: Vec<String>,

    /// Connected Telegram chat IDs.
    #[serde(rename = "telegram_chats", default, skip_serializing_if = "Vec::is_empty")]
    pub telegram_chat_ids: Vec<String>,

    /// Connected Discord channel IDs.
    #[serde(rename = "discord_channels", default, skip_serializing_if = "Vec::is_empty")]
    pub discord_ids: Vec<String>,

    /// Connected Google Hangouts Chat webhook IDs.
    #[serde(rename = "hangouts_chat_webhooks", default, skip_serializing_if = "Vec::is_empty")]
    pub hangouts_chat_webhook_ids: Vec<String>,

    /// Connected Microsoft Teams webhook IDs.
    #[serde(rename = "microsoft_teams_webhooks", default, skip_serializing_if = "Vec::is_empty")]
    pub microsoft_teams_webhook_ids: Vec<String>,

    /// Connected Mattermost webhook IDs.
    #[serde(rename = "mattermost_webhooks", default, skip_serializing_if = "Vec::is_empty")]
    pub mattermost_webhook_ids: Vec<String>,

    /// Connected generic webhook IDs.
    #[serde(rename = "webhooks", default, skip_serializing_if = "Vec::is_empty")]
    pub webhook_ids: Vec<String>,

    /// Regular expressions filtering out versions.
    #[serde(rename = "exclude_version_regexp", default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<Exclusion>,

    /// Whether pre-releases are ignored.
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_prereleases: bool,

    /// Whether updates to existing releases are ignored.
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_updated: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Email notification frequency for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailNotification {
    None,
    Instant,
    Hourly,
    Daily,
    Weekly,
    /// Use the account default.
    Default,
}

/// A regular expression used to filter release versions.
///
/// With `inverse` set, only matching versions are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub value: String,
    #[serde(default)]
    pub inverse: bool,
}

/// Reference to a project, either by ID or by provider and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    Id(String),
    Name { provider: String, name: String },
}

impl ProjectRef {
    /// Reference a project by its ID.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Reference a project by its provider and name.
    pub fn name(provider: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Name {
            provider: provider.into(),
            name: name.into(),
        }
    }

    pub(crate) fn path(&self) -> String {
        format!("v1/projects/{self}")
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Name { provider, name } => write!(f, "{provider}/{name}"),
        }
    }
}

impl From<&Project> for ProjectRef {
    fn from(project: &Project) -> Self {
        Self::Id(project.id.clone())
    }
}

/// Sort order for project lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectListOrder {
    Updated,
    Added,
    Name,
}

impl ProjectListOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Added => "added",
            Self::Name => "name",
        }
    }
}

/// Query parameters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectListQuery {
    /// Only list projects of this provider.
    pub provider: Option<String>,

    /// Sort order.
    pub order: Option<ProjectListOrder>,

    /// Reverse the sort order.
    pub reverse: bool,
}

/// Settable project options.
///
/// `None` fields are sent as `null` and leave the current value unchanged.
/// To remove all elements of a list, set it to `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    pub email_notification: Option<EmailNotification>,
    #[serde(rename = "slack_channels")]
    pub slack_ids: Option<Vec<String>>,
    #[serde(rename = "telegram_chats")]
    pub telegram_chat_ids: Option<Vec<String>>,
    #[serde(rename = "discord_channels")]
    pub discord_ids: Option<Vec<String>>,
    #[serde(rename = "hangouts_chat_webhooks")]
    pub hangouts_chat_webhook_ids: Option<Vec<String>>,
    #[serde(rename = "microsoft_teams_webhooks")]
    pub microsoft_teams_webhook_ids: Option<Vec<String>>,
    #[serde(rename = "mattermost_webhooks")]
    pub mattermost_webhook_ids: Option<Vec<String>>,
    #[serde(rename = "webhooks")]
    pub webhook_ids: Option<Vec<String>>,
    #[serde(rename = "exclude_version_regexp")]
    pub exclusions: Option<Vec<Exclusion>>,
    pub exclude_prereleases: Option<bool>,
    pub exclude_updated: Option<bool>,
}

/// Parameters for adding a project to be tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub provider: String,
    pub name: String,
    #[serde(flatten)]
    pub options: ProjectOptions,
}

impl NewProject {
    /// Track `name` on `provider` with default options.
    pub fn new(provider: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
            options: ProjectOptions::default(),
        }
    }

    /// Set the project options.
    #[must_use]
    pub fn with_options(mut self, options: ProjectOptions) -> Self {
        self.options = options;
        self
    }
}

/// API response wrapper for listing and searching projects.
#[derive(Debug, Default, Deserialize)]
struct ProjectListResponse {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    total_pages: u32,
}

impl Project {
    /// Search tracked projects by name.
    ///
    /// All providers are searched when `provider` is `None`.
    #[tracing::instrument(skip(client))]
    pub async fn search(
        client: &NewReleasesClient,
        query: &str,
        provider: Option<&str>,
    ) -> Result<Vec<Project>> {
        let path = Query::new()
            .pair("q", query)
            .pair_opt("provider", provider)
            .to_path("v1/projects/search");

        let data: ProjectListResponse = client.get(&path).await?.unwrap_or_default();
        Ok(data.projects)
    }
}

#[async_trait]
impl Get for Project {
    type Id = ProjectRef;

    #[tracing::instrument(skip(client))]
    async fn get(client: &NewReleasesClient, project: ProjectRef) -> Result<Self> {
        client
            .get(&project.path())
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}

#[async_trait]
impl List for Project {
    type Query = ProjectListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &NewReleasesClient,
        query: &Self::Query,
        page: u32,
    ) -> Result<Page<Self>> {
        let mut path = "v1/projects".to_string();
        if let Some(provider) = query.provider.as_deref().filter(|p| !p.is_empty()) {
            path.push('/');
            path.push_str(provider);
        }
        let path = Query::new()
            .page(page)?
            .pair_opt("order", query.order.map(ProjectListOrder::as_str))
            .flag("reverse", query.reverse)
            .to_path(&path);

        let data: ProjectListResponse = client.get(&path).await?.unwrap_or_default();
        Ok(Page::new(data.projects, page, data.total_pages))
    }
}

#[async_trait]
impl Create for Project {
    type Params = NewProject;

    #[tracing::instrument(skip(client))]
    async fn create(client: &NewReleasesClient, params: NewProject) -> Result<Self> {
        client
            .post("v1/projects", &params)
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}

#[async_trait]
impl Update for Project {
    type Id = ProjectRef;
    type Params = ProjectOptions;

    #[tracing::instrument(skip(client))]
    async fn update(
        client: &NewReleasesClient,
        project: ProjectRef,
        params: ProjectOptions,
    ) -> Result<Self> {
        client
            .post(&project.path(), &params)
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}

#[async_trait]
impl Delete for Project {
    type Id = ProjectRef;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &NewReleasesClient, project: ProjectRef) -> Result<()> {
        client.delete(&project.path()).await
    }
}
