//! Create trait for adding entities.

use async_trait::async_trait;

use crate::client::NewReleasesClient;
use crate::error::Result;

/// Add a new entity.
#[async_trait]
pub trait Create: Sized {
    /// Parameters describing the new entity.
    type Params: Send;

    /// Create the entity and return it as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NewReleasesError::BadRequest`] if the server rejects
    /// the parameters, or an error if the request fails.
    async fn create(client: &NewReleasesClient, params: Self::Params) -> Result<Self>;
}
