//! API authentication keys.

use serde::{Deserialize, Serialize};

use crate::client::NewReleasesClient;
use crate::error::Result;
use crate::models::ip_net::IpNet;
use crate::transport::ClientOptions;

/// An API key with its descriptive name and the networks allowed to use it.
///
/// An empty `authorized_networks` list means the key is usable from anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthKey {
    pub name: String,
    pub secret: String,
    #[serde(default)]
    pub authorized_networks: Vec<IpNet>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthKeyListResponse {
    #[serde(default)]
    keys: Vec<AuthKey>,
}

impl AuthKey {
    /// List all authentication keys of the account.
    #[tracing::instrument(skip(client))]
    pub async fn list(client: &NewReleasesClient) -> Result<Vec<AuthKey>> {
        let data: AuthKeyListResponse = client.get("v1/auth/keys").await?.unwrap_or_default();
        Ok(data.keys)
    }
}

/// List the account's auth keys by logging in with email and password.
///
/// Lets an application obtain an API key from credentials the user already
/// knows instead of asking for the key itself.
#[tracing::instrument(skip(password, options))]
pub async fn get_auth_keys(
    email: &str,
    password: &str,
    options: ClientOptions,
) -> Result<Vec<AuthKey>> {
    let client = NewReleasesClient::with_basic_auth(email, password, options)?;
    AuthKey::list(&client).await
}
