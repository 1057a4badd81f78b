//! Layered error types for the watsonx.data client.
//!
//! The taxonomy follows the four failure classes a caller can actually act
//! on:
//! - [`ValidationError`] - bad input, raised before any network I/O
//! - [`ApiError::Transport`] - connection/TLS/timeout failures from reqwest
//! - [`ApiError::Http`] - non-2xx responses, carrying the server payload
//! - [`ApiError::Decode`] - 2xx responses whose body did not match the model
//!
//! Nothing is retried here; retry policy belongs to the caller or to a
//! middleware around the transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type returned by every client method.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required input was missing or malformed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Connection, TLS, timeout, or other transport-level failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("operation `{operation}` returned HTTP {status}: {}", .body.summary())]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Identifier of the operation that failed.
        operation: &'static str,
        /// Parsed server error payload (lenient; see [`ErrorBody`]).
        body: ErrorBody,
    },

    /// The response body was not valid JSON for the expected model.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status code for [`ApiError::Http`] errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Input validation failures, raised before any network call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string field was empty.
    #[error("required field `{field}` must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A `{name}` placeholder in the path template had no supplied value.
    #[error("no value supplied for path placeholder `{{{name}}}`")]
    UnresolvedPlaceholder {
        /// Placeholder name as written in the template.
        name: String,
    },

    /// A caller-supplied header name or value was not legal HTTP.
    #[error("invalid header `{name}`: {reason}")]
    InvalidHeader {
        /// The header name as supplied.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The configured base URL cannot carry path segments (e.g. `data:`).
    #[error("base URL `{url}` cannot be extended with path segments")]
    BaseUrl {
        /// The offending base URL.
        url: String,
    },
}

/// Error payload returned by the watsonx.data service.
///
/// The service uses two shapes: a `trace` + `errors[]` envelope for most
/// failures and a bare `message` for a few legacy endpoints. Both are
/// accepted; unparseable bodies land verbatim in `message` so nothing is
/// ever silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Correlation identifier for support tickets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    /// Individual error entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorTarget>,
    /// Flat error message (legacy shape, or raw body fallback).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One entry in the service's `errors[]` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorTarget {
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Link to further documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

impl ErrorBody {
    /// Parses a response body leniently.
    ///
    /// Falls back to wrapping the raw text in `message` when the body is not
    /// a recognizable error envelope, so the server's words are preserved
    /// verbatim either way.
    pub(crate) fn from_response_text(text: &str) -> Self {
        match serde_json::from_str::<Self>(text) {
            Ok(body) if body.message.is_some() || !body.errors.is_empty() => body,
            _ if text.is_empty() => Self::default(),
            _ => Self {
                message: Some(text.to_string()),
                ..Self::default()
            },
        }
    }

    /// The most useful single message in the payload.
    pub fn summary(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        if let Some(first) = self.errors.first() {
            if let Some(message) = &first.message {
                return message.clone();
            }
        }
        "no error payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape_parses() {
        let body = ErrorBody::from_response_text(
            r#"{"trace":"abc-123","errors":[{"code":"not_found","message":"bucket not found"}]}"#,
        );
        assert_eq!(body.trace.as_deref(), Some("abc-123"));
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.summary(), "bucket not found");
    }

    #[test]
    fn test_flat_message_shape_parses() {
        let body = ErrorBody::from_response_text(r#"{"message":"engine is paused"}"#);
        assert_eq!(body.summary(), "engine is paused");
    }

    #[test]
    fn test_non_json_body_preserved_verbatim() {
        let body = ErrorBody::from_response_text("502 Bad Gateway");
        assert_eq!(body.message.as_deref(), Some("502 Bad Gateway"));
    }

    #[test]
    fn test_empty_body() {
        let body = ErrorBody::from_response_text("");
        assert_eq!(body, ErrorBody::default());
        assert_eq!(body.summary(), "no error payload");
    }

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: 404,
            operation: "get_bucket_registration",
            body: ErrorBody::from_response_text(r#"{"message":"not found"}"#),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "operation `get_bucket_registration` returned HTTP 404: not found"
        );
    }
}
