//! Release and release note models.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::NewReleasesClient;
use crate::error::{NewReleasesError, Result};
use crate::models::project::ProjectRef;
use crate::pagination::{Page, Query};
use crate::traits::{Get, List};

/// A released version of a tracked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version string as published by the provider.
    pub version: String,

    /// When the release was published.
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_prerelease: bool,

    /// Whether the release was changed after it was first published.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_updated: bool,

    /// Whether the release is filtered out by the project's exclusions.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_excluded: bool,

    /// Whether a release note is available.
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_note: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Additional note attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNote {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

/// Reference to one version of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseRef {
    pub project: ProjectRef,
    pub version: String,
}

impl ReleaseRef {
    pub fn new(project: ProjectRef, version: impl Into<String>) -> Self {
        Self {
            project,
            version: version.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "{}/releases/{}",
            self.project.path(),
            urlencoding::encode(&self.version)
        )
    }
}

#[derive(Debug, Default, Deserialize)]
struct ReleaseListResponse {
    #[serde(default)]
    releases: Vec<Release>,
    #[serde(default)]
    total_pages: u32,
}

#[async_trait]
impl List for Release {
    type Query = ProjectRef;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &NewReleasesClient,
        project: &ProjectRef,
        page: u32,
    ) -> Result<Page<Self>> {
        let path = Query::new()
            .page(page)?
            .to_path(&format!("{}/releases", project.path()));

        let data: ReleaseListResponse = client.get(&path).await?.unwrap_or_default();
        Ok(Page::new(data.releases, page, data.total_pages))
    }
}

#[async_trait]
impl Get for Release {
    type Id = ReleaseRef;

    #[tracing::instrument(skip(client))]
    async fn get(client: &NewReleasesClient, release: ReleaseRef) -> Result<Self> {
        client
            .get(&release.path())
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}

#[async_trait]
impl Get for ReleaseNote {
    type Id = ReleaseRef;

    #[tracing::instrument(skip(client))]
    async fn get(client: &NewReleasesClient, release: ReleaseRef) -> Result<Self> {
        client
            .get(&format!("{}/note", release.path()))
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}
