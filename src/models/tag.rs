//! Project tag model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::NewReleasesClient;
use crate::error::{NewReleasesError, Result};
use crate::traits::{Create, Delete, Get, Update};

/// A tag used to group projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
struct TagRequest<'a> {
    name: &'a str,
}

fn tag_path(id: &str) -> String {
    format!("v1/tags/{id}")
}

impl Tag {
    /// List all tags.
    #[tracing::instrument(skip(client))]
    pub async fn list(client: &NewReleasesClient) -> Result<Vec<Tag>> {
        #[derive(Default, Deserialize)]
        struct TagListResponse {
            #[serde(default)]
            tags: Vec<Tag>,
        }

        let data: TagListResponse = client.get("v1/tags").await?.unwrap_or_default();
        Ok(data.tags)
    }
}

#[async_trait]
impl Get for Tag {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn get(client: &NewReleasesClient, id: String) -> Result<Self> {
        client
            .get(&tag_path(&id))
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}

#[async_trait]
impl Create for Tag {
    /// Tag name.
    type Params = String;

    #[tracing::instrument(skip(client))]
    async fn create(client: &NewReleasesClient, name: String) -> Result<Self> {
        client
            .post("v1/tags", &TagRequest { name: &name })
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}

#[async_trait]
impl Update for Tag {
    type Id = String;
    /// New tag name.
    type Params = String;

    #[tracing::instrument(skip(client))]
    async fn update(client: &NewReleasesClient, id: String, name: String) -> Result<Self> {
        client
            .post(&tag_path(&id), &TagRequest { name: &name })
            .await?
            .ok_or(NewReleasesError::MissingBody)
    }
}

#[async_trait]
impl Delete for Tag {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &NewReleasesClient, id: String) -> Result<()> {
        client.delete(&tag_path(&id)).await
    }
}
