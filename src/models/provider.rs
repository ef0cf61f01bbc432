//! Project providers.

use serde::Deserialize;

use crate::client::NewReleasesClient;
use crate::error::Result;
use crate::pagination::Query;

#[derive(Debug, Default, Deserialize)]
struct ProviderListResponse {
    #[serde(default)]
    providers: Vec<String>,
}

/// List all supported project providers.
#[tracing::instrument(skip(client))]
pub async fn list_providers(client: &NewReleasesClient) -> Result<Vec<String>> {
    let data: ProviderListResponse = client.get("v1/providers").await?.unwrap_or_default();
    Ok(data.providers)
}

/// List providers of projects that are added for tracking.
#[tracing::instrument(skip(client))]
pub async fn list_added_providers(client: &NewReleasesClient) -> Result<Vec<String>> {
    let path = Query::new().flag("added", true).to_path("v1/providers");
    let data: ProviderListResponse = client.get(&path).await?.unwrap_or_default();
    Ok(data.providers)
}
