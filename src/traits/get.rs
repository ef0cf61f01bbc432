//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::NewReleasesClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use newreleases::{NewReleasesClient, Project, ProjectRef, Get};
///
/// let client = NewReleasesClient::from_env()?;
/// let project = Project::get(&client, ProjectRef::name("github", "golang/go")).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &NewReleasesClient, id: Self::Id) -> Result<Self>;
}
