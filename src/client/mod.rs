//! The watsonx.data client and its builder.
//!
//! Configuration is immutable after construction: base URL, timeout, default
//! headers, credentials, and the default tenant header are all fixed when
//! [`WatsonxDataBuilder::build`] runs. Reconfiguring means building a new
//! client, so a client shared across tasks never races on setup state.

mod executor;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::auth::ApiAuthMethod;
use crate::error::{ApiError, ValidationError};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring a [`WatsonxData`] client.
#[derive(Debug)]
pub struct WatsonxDataBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: Option<(ApiAuthMethod, String)>,
    auth_instance_id: Option<String>,
}

impl WatsonxDataBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: None,
            auth_instance_id: None,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header sent on every request.
    ///
    /// ## Errors
    ///
    /// Returns a validation error if the header name or value is not legal
    /// HTTP.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let header_name =
            HeaderName::try_from(name.as_ref()).map_err(|e| ValidationError::InvalidHeader {
                name: name.as_ref().to_string(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| ValidationError::InvalidHeader {
                name: name.as_ref().to_string(),
                reason: e.to_string(),
            })?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Sets the authentication method and credential.
    pub fn auth(mut self, method: ApiAuthMethod, credential: impl Into<String>) -> Self {
        self.auth = Some((method, credential.into()));
        self
    }

    /// Sets the default `AuthInstanceId` tenant header.
    ///
    /// Individual calls may still override it through their Options value.
    pub fn auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }

    /// Builds the [`WatsonxData`] client.
    ///
    /// ## Errors
    ///
    /// Returns a transport error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<WatsonxData, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .user_agent(WatsonxData::USER_AGENT)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(WatsonxData {
            client,
            base_url: self.base_url,
            auth: self.auth,
            auth_instance_id: self.auth_instance_id,
        })
    }
}

/// Async client for the watsonx.data v2 REST API.
///
/// One method per API operation; every method is a thin composition of
/// "options → operation table entry → shared executor". The client holds
/// only immutable configuration, so it can be shared freely (`Arc` or
/// reference) across concurrent tasks.
///
/// ## Examples
///
/// ```rust,no_run
/// use watsonx_data::{ApiAuthMethod, GetBucketRegistrationOptions, WatsonxData};
/// use url::Url;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), watsonx_data::ApiError> {
/// let base_url = Url::parse(WatsonxData::DEFAULT_SERVICE_URL).unwrap();
/// let client = WatsonxData::builder(base_url)
///     .auth(ApiAuthMethod::BearerToken, "iam-access-token")
///     .build()?;
///
/// let options = GetBucketRegistrationOptions::new("bucket-id-01");
/// let bucket = client.get_bucket_registration(&options).await?;
/// println!("state: {:?}", bucket.state);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WatsonxData {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) auth: Option<(ApiAuthMethod, String)>,
    pub(crate) auth_instance_id: Option<String>,
}

impl WatsonxData {
    /// Default public endpoint; replace `region` with a deployment region.
    pub const DEFAULT_SERVICE_URL: &'static str =
        "https://region.lakehouse.cloud.ibm.com/lakehouse/api/v2";

    /// User-Agent sent on every request.
    pub(crate) const USER_AGENT: &'static str =
        concat!("watsonx-data-rust-sdk/", env!("CARGO_PKG_VERSION"));

    /// Creates a new builder for configuring a client.
    pub fn builder(base_url: Url) -> WatsonxDataBuilder {
        WatsonxDataBuilder::new(base_url)
    }

    /// Creates a client with default settings against the given base URL.
    ///
    /// ## Errors
    ///
    /// Returns a transport error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Returns the base URL this client was built with.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let base_url = Url::parse("https://example.com/lakehouse/api/v2").unwrap();
        let client = WatsonxData::new(base_url).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://example.com/lakehouse/api/v2"
        );
        assert!(client.auth.is_none());
        assert!(client.auth_instance_id.is_none());
    }

    #[test]
    fn test_invalid_default_header_rejected() {
        let base_url = Url::parse("https://example.com").unwrap();
        let result = WatsonxData::builder(base_url).default_header("bad header", "v");
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::InvalidHeader { .. }))
        ));
    }

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(WatsonxData::USER_AGENT.starts_with("watsonx-data-rust-sdk/"));
    }
}
