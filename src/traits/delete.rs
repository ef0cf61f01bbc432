//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::NewReleasesClient;
use crate::error::Result;

/// Remove an entity.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id: Send;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &NewReleasesClient, id: Self::Id) -> Result<()>;
}
