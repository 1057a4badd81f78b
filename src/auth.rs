//! Credential application for outgoing requests.
//!
//! Token acquisition and refresh are the caller's concern; the client only
//! needs to know *how* to attach an already-obtained credential to each
//! request.

use reqwest::header::{HeaderName, AUTHORIZATION};

use crate::error::{ApiError, ValidationError};

/// How an API credential is attached to outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiAuthMethod {
    /// `Authorization: Bearer <credential>` (IAM access tokens).
    BearerToken,
    /// Credential sent in a named header (e.g. `X-Api-Key`).
    ApiKey(String),
    /// No authentication (local test servers).
    None,
}

impl ApiAuthMethod {
    /// Attaches the credential to a request builder according to the method.
    ///
    /// ## Errors
    ///
    /// Returns a validation error if the configured header name is not a
    /// legal HTTP header name.
    pub(crate) fn apply(
        &self,
        request: reqwest::RequestBuilder,
        credential: &str,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        match self {
            Self::BearerToken => Ok(request.header(AUTHORIZATION, format!("Bearer {credential}"))),
            Self::ApiKey(header_name) => {
                let name = HeaderName::try_from(header_name.as_str()).map_err(|e| {
                    ValidationError::InvalidHeader {
                        name: header_name.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(request.header(name, credential))
            }
            Self::None => Ok(request),
        }
    }
}
