//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::NewReleasesClient;
use crate::error::Result;

/// Update an existing entity.
///
/// The API applies updates with `POST` to the entity path.
///
/// # Example
///
/// ```ignore
/// use newreleases::{NewReleasesClient, Project, ProjectOptions, ProjectRef, Update};
///
/// let client = NewReleasesClient::from_env()?;
/// let updated = Project::update(
///     &client,
///     ProjectRef::name("github", "golang/go"),
///     ProjectOptions {
///         exclude_prereleases: Some(true),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Parameters for the update.
    type Params: Send;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &NewReleasesClient, id: Self::Id, params: Self::Params)
        -> Result<Self>;
}
