//! Outgoing request preparation.
//!
//! Every request gets the library User-Agent, the client's credentials and
//! an absolute URL resolved against the configured base URL before it is
//! handed to the underlying `reqwest::Client`.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use crate::error::{NewReleasesError, Result};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.newreleases.io/";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("newreleases-rs/", env!("CARGO_PKG_VERSION"));

const KEY_HEADER: &str = "X-Key";

/// Authentication strategy, fixed for the lifetime of a client.
#[derive(Clone)]
pub enum Auth {
    /// Static API key sent in the `X-Key` header.
    Key(String),
    /// HTTP Basic credentials, used to bootstrap retrieval of API keys.
    Basic { username: String, password: String },
}

impl Auth {
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Key(key) => request.header(KEY_HEADER, key),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(_) => f.write_str("Key(..)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

/// Optional client settings.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// HTTP client to send requests with. Its own settings such as
    /// timeouts and proxies are kept; only per-request headers are added.
    pub http_client: Option<Client>,
    /// API base URL. Defaults to `https://api.newreleases.io/`.
    pub base_url: Option<Url>,
}

impl ClientOptions {
    /// Use the given HTTP client.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use the given base URL.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }
}

#[derive(Debug)]
pub(crate) struct Transport {
    http: Client,
    base_url: Url,
    auth: Auth,
}

impl Transport {
    pub(crate) fn new(auth: Auth, options: ClientOptions) -> Result<Self> {
        let http = match options.http_client {
            Some(http) => http,
            None => Client::builder()
                .user_agent(USER_AGENT)
                .brotli(true)
                .gzip(true)
                .deflate(true)
                .timeout(Duration::from_secs(300))
                .build()
                .map_err(NewReleasesError::Http)?,
        };

        let base_url = match options.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        Ok(Self {
            http,
            base_url: with_trailing_slash(base_url),
            auth,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Start a request for `path`, relative to the base URL.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        let request = self
            .http
            .request(method, url)
            .header(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
        Ok(self.auth.apply(request))
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Whether a Content-Type value denotes JSON.
pub(crate) fn is_json(content_type: &str) -> bool {
    content_type.contains("application/json")
}
