//! NewReleases API client.
//!
//! Every typed operation goes through [`NewReleasesClient::request`], which
//! encodes the body, sends it, records the rate limit, classifies the status
//! and decodes the JSON response.

use std::env;
use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{bad_request_error, classify_with_reason, NewReleasesError, Result};
use crate::rate::{Rate, RateTracker};
use crate::transport::{is_json, Auth, ClientOptions, Transport};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// NewReleases API client.
///
/// Cheaply cloneable; clones share the connection pool and the rate limit
/// state. Safe to use from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use newreleases::NewReleasesClient;
///
/// # async fn example() -> newreleases::Result<()> {
/// // Create from environment variables
/// let client = NewReleasesClient::from_env()?;
///
/// // Or with an explicit key
/// let client = NewReleasesClient::new("your-api-key")?;
/// let providers = newreleases::list_providers(&client).await?;
/// println!("{providers:?}, {}", client.rate());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NewReleasesClient {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Transport,
    rate: RateTracker,
}

impl fmt::Debug for NewReleasesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewReleasesClient")
            .field("base_url", &self.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl NewReleasesClient {
    /// Create a client from environment variables.
    ///
    /// Uses `NEWRELEASES_API_KEY` for authentication and optionally
    /// `NEWRELEASES_API_URL` for the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `NEWRELEASES_API_KEY` is not set or the URL is invalid.
    pub fn from_env() -> Result<Self> {
        let key = env::var("NEWRELEASES_API_KEY").map_err(|_| {
            NewReleasesError::ConfigMissing(
                "NEWRELEASES_API_KEY environment variable not set".to_string(),
            )
        })?;

        let mut options = ClientOptions::default();
        if let Ok(base_url) = env::var("NEWRELEASES_API_URL") {
            options.base_url = Some(Url::parse(&base_url)?);
        }

        Self::with_options(&key, options)
    }

    /// Create a client that authenticates with an API key.
    pub fn new(key: &str) -> Result<Self> {
        Self::with_options(key, ClientOptions::default())
    }

    /// Create a client that authenticates with an API key and custom options.
    pub fn with_options(key: &str, options: ClientOptions) -> Result<Self> {
        Self::with_auth(Auth::Key(key.to_string()), options)
    }

    /// Create a client that authenticates with HTTP Basic credentials.
    ///
    /// The API only accepts these for listing auth keys, see
    /// [`crate::get_auth_keys`].
    pub fn with_basic_auth(username: &str, password: &str, options: ClientOptions) -> Result<Self> {
        Self::with_auth(
            Auth::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            options,
        )
    }

    /// Create a client with an explicit authentication strategy.
    pub fn with_auth(auth: Auth, options: ClientOptions) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Inner {
                transport: Transport::new(auth, options)?,
                rate: RateTracker::default(),
            }),
        })
    }

    /// Get the base URL. Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        self.inner.transport.base_url()
    }

    /// Rate limit information from the most recently completed request.
    pub fn rate(&self) -> Rate {
        self.inner.rate.read()
    }

    /// Make a request and decode the JSON response.
    ///
    /// `path` is resolved against the base URL. Returns `Ok(None)` when the
    /// response is successful but not JSON, e.g. for deletions.
    ///
    /// Dropping the returned future cancels the exchange.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;

        if !content_type(&response).is_some_and(|ct| is_json(&ct)) {
            drain(response);
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Make a request without decoding the response.
    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        drain(response);
        Ok(())
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Make a POST request with JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None::<&()>).await
    }

    #[tracing::instrument(skip(self, body))]
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .inner
            .transport
            .request(method, path)?
            .header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                .body(encode_json(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "response received");

        // Failed calls still report rate limits.
        self.inner.rate.update(response.headers());

        let content_type = content_type(&response);
        let error = if status == StatusCode::BAD_REQUEST {
            let body = response.bytes().await?;
            bad_request_error(content_type.as_deref(), &body)
        } else {
            let reason = reason_phrase(&response);
            match classify_with_reason(status, reason.as_deref(), content_type.as_deref(), &[]) {
                Ok(()) => return Ok(response),
                Err(err) => {
                    drain(response);
                    err
                }
            }
        };
        Err(error)
    }
}

/// Encode a request body as JSON.
///
/// `<`, `>` and `&` are written as is, never as `\u003c`-style escapes.
pub(crate) fn encode_json<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(body)?)
}

fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Reason phrase from the status line, when the server sent a non-canonical one.
fn reason_phrase(response: &Response) -> Option<String> {
    let reason = response.extensions().get::<hyper::ext::ReasonPhrase>()?;
    std::str::from_utf8(reason.as_bytes()).ok().map(str::to_owned)
}

/// Discard the rest of the body in the background so the connection can be
/// reused. The caller never waits on or observes the outcome.
fn drain(response: Response) {
    // Without a runtime, dropping the response closes the connection.
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        return;
    };
    // The join handle is dropped: a panic stays inside the task.
    drop(runtime.spawn(async move {
        let _ = response.bytes().await;
    }));
}
