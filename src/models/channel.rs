//! Chat integrations connected to the account.

use serde::{Deserialize, Serialize};

use crate::client::NewReleasesClient;
use crate::error::Result;

/// A Slack channel that receives notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackChannel {
    pub id: String,
    pub channel: String,
    #[serde(default)]
    pub team_name: String,
}

/// A Telegram chat that receives notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramChat {
    pub id: String,
    /// Chat type as reported by Telegram (e.g., "private", "group").
    #[serde(rename = "type", default)]
    pub chat_type: String,
    #[serde(default)]
    pub name: String,
}

/// A Discord channel that receives notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordChannel {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A Matrix room that receives notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRoom {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub homeserver_url: String,
    #[serde(default)]
    pub internal_room_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound = "T: Deserialize<'de>")]
struct Listing<T> {
    #[serde(default = "Vec::new", alias = "channels", alias = "chats", alias = "rooms")]
    items: Vec<T>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

async fn list<T>(client: &NewReleasesClient, path: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let data: Listing<T> = client.get(path).await?.unwrap_or_default();
    Ok(data.items)
}

impl SlackChannel {
    /// List all connected Slack channels.
    #[tracing::instrument(skip(client))]
    pub async fn list(client: &NewReleasesClient) -> Result<Vec<Self>> {
        list(client, "v1/slack-channels").await
    }
}

impl TelegramChat {
    /// List all connected Telegram chats.
    #[tracing::instrument(skip(client))]
    pub async fn list(client: &NewReleasesClient) -> Result<Vec<Self>> {
        list(client, "v1/telegram-chats").await
    }
}

impl DiscordChannel {
    /// List all connected Discord channels.
    #[tracing::instrument(skip(client))]
    pub async fn list(client: &NewReleasesClient) -> Result<Vec<Self>> {
        list(client, "v1/discord-channels").await
    }
}

impl MatrixRoom {
    /// List all connected Matrix rooms.
    #[tracing::instrument(skip(client))]
    pub async fn list(client: &NewReleasesClient) -> Result<Vec<Self>> {
        list(client, "v1/matrix-rooms").await
    }
}
