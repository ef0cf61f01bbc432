//! Webhook integrations connected to the account.

use serde::{Deserialize, Serialize};

use crate::client::NewReleasesClient;
use crate::error::Result;

/// A webhook with its descriptive name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: String,
    pub name: String,
}

/// Kind of webhook integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookKind {
    /// Generic HTTP webhooks.
    Generic,
    HangoutsChat,
    MicrosoftTeams,
    Mattermost,
    Rocketchat,
}

impl WebhookKind {
    fn path(self) -> &'static str {
        match self {
            Self::Generic => "v1/webhooks",
            Self::HangoutsChat => "v1/hangouts-chat-webhooks",
            Self::MicrosoftTeams => "v1/microsoft-teams-webhooks",
            Self::Mattermost => "v1/mattermost-webhooks",
            Self::Rocketchat => "v1/rocketchat-webhooks",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct WebhookListResponse {
    #[serde(default)]
    webhooks: Vec<Webhook>,
}

impl Webhook {
    /// List all webhooks of the given kind.
    #[tracing::instrument(skip(client))]
    pub async fn list(client: &NewReleasesClient, kind: WebhookKind) -> Result<Vec<Self>> {
        let data: WebhookListResponse = client.get(kind.path()).await?.unwrap_or_default();
        Ok(data.webhooks)
    }
}
