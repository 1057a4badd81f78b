//! The shared request pipeline.
//!
//! Every façade method funnels through [`WatsonxData::execute`] (typed
//! result) or [`WatsonxData::execute_unit`] (no response body): validate
//! inputs, resolve the path template, attach headers and body, send through
//! the one pooled `reqwest::Client`, then map the response to a typed model
//! or a structured error. Nothing here retries; transport failures and HTTP
//! error statuses propagate to the caller unchanged.

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn, Span};

use crate::client::WatsonxData;
use crate::endpoint::{resolve_path, Operation};
use crate::error::{ApiError, ErrorBody, ValidationError};
use crate::request::{RequestBody, RequestParts};

/// Telemetry header identifying the SDK and operation, mirroring the other
/// watsonx.data SDKs.
const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Tenant/instance scoping header.
const AUTH_INSTANCE_HEADER: &str = "AuthInstanceId";

fn sdk_analytics(operation_id: &str) -> String {
    format!("service_name=watsonx_data;service_version=V2;operation_id={operation_id}")
}

impl WatsonxData {
    /// Runs an operation and decodes the JSON response body into `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        op: &Operation,
        parts: RequestParts,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(op, parts).await?;
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    /// Runs an operation whose success response carries no body.
    pub(crate) async fn execute_unit(
        &self,
        op: &Operation,
        parts: RequestParts,
    ) -> Result<(), ApiError> {
        self.dispatch(op, parts).await?;
        Ok(())
    }

    /// Builds, sends, and status-checks one request.
    ///
    /// Returns the raw response on 2xx so the typed wrappers above decide
    /// how to consume the body.
    #[instrument(
        name = "api_request",
        skip(self, parts),
        fields(
            operation = op.id,
            http.method = %op.method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn dispatch(
        &self,
        op: &Operation,
        parts: RequestParts,
    ) -> Result<reqwest::Response, ApiError> {
        // Validation happens before any I/O: an empty path or query
        // parameter never produces a network call.
        for &(field, ref value) in &parts.query {
            if value.is_empty() {
                return Err(ValidationError::EmptyField { field }.into());
            }
        }
        let mut url = resolve_path(&self.base_url, op.path, &parts.path_params)?;
        if !parts.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &parts.query {
                pairs.append_pair(name, value);
            }
        }

        Span::current().record("http.url", url.as_str());
        debug!(operation = op.id, "sending watsonx.data request");

        let mut request = self
            .client
            .request(op.method.to_reqwest(), url)
            .header(ACCEPT, "application/json")
            .header(SDK_ANALYTICS_HEADER, sdk_analytics(op.id));

        request = match parts.body {
            RequestBody::None => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::JsonPatch(patch) => request
                .header(CONTENT_TYPE, "application/json-patch+json")
                .body(serde_json::to_vec(&patch).map_err(ApiError::Decode)?),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let instance = parts
            .auth_instance_id
            .as_deref()
            .or(self.auth_instance_id.as_deref());
        if let Some(id) = instance {
            let value =
                HeaderValue::try_from(id).map_err(|e| ValidationError::InvalidHeader {
                    name: AUTH_INSTANCE_HEADER.to_string(),
                    reason: e.to_string(),
                })?;
            request = request.header(AUTH_INSTANCE_HEADER, value);
        }

        if let Some((method, credential)) = &self.auth {
            request = method.apply(request, credential)?;
        }

        let response = request.send().await?;
        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let text = response.text().await.map_err(ApiError::Transport)?;
            let body = ErrorBody::from_response_text(&text);
            warn!(
                operation = op.id,
                status = status.as_u16(),
                message = %body.summary(),
                "watsonx.data request failed"
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                operation: op.id,
                body,
            });
        }

        debug!(operation = op.id, status = status.as_u16(), "request succeeded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::RestMethod;
    use crate::patch::PatchOperation;
    use serde::Deserialize;
    use tracing_test::traced_test;
    use url::Url;
    use wiremock::matchers::{any, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PING: Operation = Operation {
        id: "ping",
        method: RestMethod::Get,
        path: "/ping/{id}",
    };

    #[derive(Debug, Deserialize)]
    struct Pong {
        ok: bool,
    }

    async fn client_for(server: &MockServer) -> WatsonxData {
        WatsonxData::new(Url::parse(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_sdk_headers_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping/a"))
            .and(header("Accept", "application/json"))
            .and(header(
                "X-IBMCloud-SDK-Analytics",
                "service_name=watsonx_data;service_version=V2;operation_id=ping",
            ))
            .and(header_exists("User-Agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let parts = RequestParts::new().path_param("id", "a");
        let pong: Pong = client.execute(&PING, parts).await.unwrap();
        assert!(pong.ok);
    }

    #[tokio::test]
    async fn test_validation_error_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let parts = RequestParts::new().path_param("id", "");
        let result: Result<Pong, _> = client.execute(&PING, parts).await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::EmptyField { field: "id" }))
        ));
    }

    #[tokio::test]
    async fn test_empty_query_param_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let parts = RequestParts::new()
            .path_param("id", "a")
            .query_param("engine_id", "");
        let result: Result<Pong, _> = client.execute(&PING, parts).await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::EmptyField {
                field: "engine_id"
            }))
        ));
    }

    #[tokio::test]
    async fn test_builder_default_headers_sent_on_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping/a"))
            .and(header("X-Request-Source", "batch-loader"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let client = WatsonxData::builder(Url::parse(&server.uri()).unwrap())
            .default_header("X-Request-Source", "batch-loader")
            .unwrap()
            .build()
            .unwrap();
        let parts = RequestParts::new().path_param("id", "a");
        let pong: Pong = client.execute(&PING, parts).await.unwrap();
        assert!(pong.ok);
    }

    #[tokio::test]
    async fn test_json_patch_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/ping/a"))
            .and(header("Content-Type", "application/json-patch+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        const PATCH_PING: Operation = Operation {
            id: "patch_ping",
            method: RestMethod::Patch,
            path: "/ping/{id}",
        };

        let client = client_for(&server).await;
        let parts = RequestParts::new()
            .path_param("id", "a")
            .json_patch(vec![PatchOperation::add("/description", "new")]);
        let pong: Pong = client.execute(&PATCH_PING, parts).await.unwrap();
        assert!(pong.ok);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_http_error_is_logged_and_structured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "trace": "t-1",
                "errors": [{"code": "not_found", "message": "no such ping"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let parts = RequestParts::new().path_param("id", "missing");
        let err = client.execute::<Pong>(&PING, parts).await.unwrap_err();
        match err {
            ApiError::Http { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body.summary(), "no such ping");
                assert_eq!(body.trace.as_deref(), Some("t-1"));
            }
            other => panic!("expected HTTP error, got {other}"),
        }
        assert!(logs_contain("watsonx.data request failed"));
    }

    #[tokio::test]
    async fn test_decode_error_on_type_mismatch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping/a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": "yes"})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let parts = RequestParts::new().path_param("id", "a");
        let result: Result<Pong, _> = client.execute(&PING, parts).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        // Nothing listens on this port.
        let client = WatsonxData::new(Url::parse("http://127.0.0.1:9").unwrap()).unwrap();
        let parts = RequestParts::new().path_param("id", "a");
        let result: Result<Pong, _> = client.execute(&PING, parts).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
