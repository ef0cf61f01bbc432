//! Error types for NewReleases API operations.
//!
//! Failed HTTP exchanges are mapped onto a closed set of variants by
//! [`classify`], so callers can tell "not found" from "validation failed"
//! from "rate limited" without looking at raw status codes.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::transport::is_json;

const GENERIC_BAD_REQUEST: &str = "bad request";

/// Errors that can occur during NewReleases API operations.
#[derive(Debug, Error)]
pub enum NewReleasesError {
    /// A page number below 1 was requested. Never sent over the wire.
    #[error("invalid page number")]
    InvalidPageNumber,

    /// Configuration is missing or incomplete.
    #[error("NewReleases configuration required: {0}")]
    ConfigMissing(String),

    /// The server rejected the submitted data (HTTP 400).
    #[error(transparent)]
    BadRequest(#[from] BadRequestError),

    /// HTTP 401.
    #[error("unauthorized")]
    Unauthorized,

    /// HTTP 403.
    #[error("forbidden")]
    Forbidden,

    /// HTTP 404.
    #[error("not found")]
    NotFound,

    /// HTTP 405.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// HTTP 429. Check [`crate::NewReleasesClient::rate`] for when to retry.
    #[error("too many requests")]
    TooManyRequests,

    /// HTTP 500.
    #[error("internal server error")]
    InternalServerError,

    /// HTTP 503, the service is under maintenance.
    #[error("maintenance")]
    Maintenance,

    /// Any other non-2xx status. The message is the lower-cased status line.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A successful response carried no JSON body where an entity was expected.
    #[error("response carried no JSON body")]
    MissingBody,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl NewReleasesError {
    /// HTTP status code behind a classified response error.
    ///
    /// Returns `None` for local, transport and decoding failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::MethodNotAllowed => Some(405),
            Self::TooManyRequests => Some(429),
            Self::InternalServerError => Some(500),
            Self::Maintenance => Some(503),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Validation messages if this is a bad request error.
    pub fn bad_request_errors(&self) -> Option<&[String]> {
        match self {
            Self::BadRequest(e) => Some(e.errors()),
            _ => None,
        }
    }
}

/// Result type alias for NewReleases operations.
pub type Result<T> = core::result::Result<T, NewReleasesError>;

/// List of messages describing why submitted data was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct BadRequestError {
    errors: Vec<String>,
}

impl BadRequestError {
    /// Construct an error from server-reported messages.
    pub fn new<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// The messages, in the order the server reported them.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn generic() -> Self {
        Self::new([GENERIC_BAD_REQUEST])
    }
}

impl fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors.join(" "))
    }
}

/// Map a response status onto the error taxonomy.
///
/// `content_type` and `body` are only consulted for HTTP 400. Unlisted
/// statuses carry the canonical reason phrase, see [`classify_with_reason`].
pub fn classify(status: StatusCode, content_type: Option<&str>, body: &[u8]) -> Result<()> {
    classify_with_reason(status, None, content_type, body)
}

/// Like [`classify`], with the reason phrase the server sent on its status
/// line.
///
/// Unlisted statuses become [`NewReleasesError::Status`] with the lower-cased
/// status line. Without a `reason` the canonical one is used, and a status
/// that has neither is reported as the bare code.
pub fn classify_with_reason(
    status: StatusCode,
    reason: Option<&str>,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(match status {
        StatusCode::BAD_REQUEST => bad_request_error(content_type, body),
        StatusCode::UNAUTHORIZED => NewReleasesError::Unauthorized,
        StatusCode::FORBIDDEN => NewReleasesError::Forbidden,
        StatusCode::NOT_FOUND => NewReleasesError::NotFound,
        StatusCode::METHOD_NOT_ALLOWED => NewReleasesError::MethodNotAllowed,
        StatusCode::TOO_MANY_REQUESTS => NewReleasesError::TooManyRequests,
        StatusCode::INTERNAL_SERVER_ERROR => NewReleasesError::InternalServerError,
        StatusCode::SERVICE_UNAVAILABLE => NewReleasesError::Maintenance,
        other => NewReleasesError::Status {
            status: other.as_u16(),
            message: status_line(other, reason),
        },
    })
}

fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .or_else(|| status.canonical_reason());
    match reason {
        Some(reason) => format!("{} {}", status.as_u16(), reason).to_lowercase(),
        None => status.as_u16().to_string(),
    }
}

/// Build the error for an HTTP 400 response.
///
/// A body that is JSON but not the expected shape yields the decode error.
/// A body that is not JSON, is empty, is `null`, or carries no messages
/// (`{}` or `{"errors":[]}`) yields the single generic `"bad request"`
/// message, so a validation error is never without text.
pub(crate) fn bad_request_error(content_type: Option<&str>, body: &[u8]) -> NewReleasesError {
    match decode_bad_request(content_type, body) {
        Ok(err) => err.into(),
        Err(err) => err.into(),
    }
}

/// Decode `{"errors": [...]}` from a bad request response.
fn decode_bad_request(
    content_type: Option<&str>,
    body: &[u8],
) -> core::result::Result<BadRequestError, serde_json::Error> {
    #[derive(Deserialize)]
    struct BadRequestBody {
        #[serde(default)]
        errors: Option<Vec<String>>,
    }

    if !content_type.is_some_and(is_json) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BadRequestError::generic());
    }

    let decoded: Option<BadRequestBody> = serde_json::from_slice(body)?;
    match decoded.and_then(|d| d.errors) {
        Some(errors) if !errors.is_empty() => Ok(BadRequestError::new(errors)),
        _ => Ok(BadRequestError::generic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_success_range_is_never_an_error() {
        for code in 200..=299 {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(classify(status, JSON, b"{\"errors\":[\"x\"]}").is_ok());
            assert!(classify(status, None, b"garbage").is_ok());
        }
    }

    #[test]
    fn test_bad_request_messages_keep_order() {
        let err = classify(StatusCode::BAD_REQUEST, JSON, br#"{"errors":["a","b"]}"#).unwrap_err();
        assert_eq!(err.bad_request_errors().unwrap(), ["a", "b"]);
        assert_eq!(err.to_string(), "a b");
    }

    #[test]
    fn test_bad_request_empty_body_is_generic() {
        let err = classify(StatusCode::BAD_REQUEST, JSON, b"").unwrap_err();
        assert_eq!(err.bad_request_errors().unwrap(), ["bad request"]);

        let err = classify(StatusCode::BAD_REQUEST, JSON, b"\n").unwrap_err();
        assert_eq!(err.bad_request_errors().unwrap(), ["bad request"]);
    }

    #[test]
    fn test_bad_request_non_json_is_generic() {
        let err = classify(
            StatusCode::BAD_REQUEST,
            Some("text/plain"),
            br#"{"errors":["a"]}"#,
        )
        .unwrap_err();
        assert_eq!(err.bad_request_errors().unwrap(), ["bad request"]);

        let err = classify(StatusCode::BAD_REQUEST, None, b"").unwrap_err();
        assert_eq!(err.bad_request_errors().unwrap(), ["bad request"]);
    }

    #[test]
    fn test_bad_request_malformed_json_propagates() {
        let err = classify(StatusCode::BAD_REQUEST, JSON, b"{not json").unwrap_err();
        assert!(matches!(err, NewReleasesError::Json(_)));
    }

    #[test]
    fn test_bad_request_without_messages_is_generic() {
        let bodies: [&[u8]; 5] = [b"{}", b"{\"errors\":[]}", b"{\"errors\":null}", b"null", b" null\n"];
        for body in bodies {
            let err = classify(StatusCode::BAD_REQUEST, JSON, body).unwrap_err();
            assert_eq!(err.bad_request_errors().unwrap(), ["bad request"]);
        }
    }

    #[test]
    fn test_unlisted_status_uses_server_reason() {
        let status = StatusCode::from_u16(599).unwrap();

        let err = classify_with_reason(status, Some("Network Connect Timeout"), None, b"")
            .unwrap_err();
        assert_eq!(err.status_code(), Some(599));
        assert_eq!(err.to_string(), "599 network connect timeout");

        let err = classify(status, None, b"").unwrap_err();
        assert_eq!(err.to_string(), "599");

        let err = classify_with_reason(StatusCode::IM_A_TEAPOT, Some("Short And Stout"), None, b"")
            .unwrap_err();
        assert_eq!(err.to_string(), "418 short and stout");

        let err = classify_with_reason(StatusCode::IM_A_TEAPOT, Some(""), None, b"").unwrap_err();
        assert_eq!(err.to_string(), "418 i'm a teapot");
    }

    #[test]
    fn test_fixed_statuses_ignore_body() {
        let cases = [
            (401, "unauthorized"),
            (403, "forbidden"),
            (404, "not found"),
            (405, "method not allowed"),
            (429, "too many requests"),
            (500, "internal server error"),
            (503, "maintenance"),
        ];
        for (code, message) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            let err = classify(status, JSON, br#"{"errors":["ignored"]}"#).unwrap_err();
            assert_eq!(err.to_string(), message);
            assert_eq!(err.status_code(), Some(code));
        }
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, None, b"").unwrap_err(),
            NewReleasesError::NotFound
        ));
        assert!(matches!(
            classify(StatusCode::TOO_MANY_REQUESTS, None, b"").unwrap_err(),
            NewReleasesError::TooManyRequests
        ));
    }

    #[test]
    fn test_other_status_uses_lowercase_status_line() {
        let err = classify(StatusCode::IM_A_TEAPOT, None, b"").unwrap_err();
        assert_eq!(err.to_string(), "418 i'm a teapot");
        assert_eq!(err.status_code(), Some(418));

        let err = classify(StatusCode::BAD_GATEWAY, None, b"").unwrap_err();
        assert_eq!(err.to_string(), "502 bad gateway");
    }

    #[test]
    fn test_local_errors_have_no_status() {
        assert_eq!(NewReleasesError::InvalidPageNumber.status_code(), None);
        assert_eq!(NewReleasesError::MissingBody.status_code(), None);
    }
}
