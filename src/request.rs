//! Per-call request assembly: path and query parameters, the per-call
//! tenant header override, and the body.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::patch::PatchOperation;

/// The body attached to an outgoing request.
#[derive(Debug)]
pub(crate) enum RequestBody {
    /// No body (GET/DELETE and query-parameter operations).
    None,
    /// A JSON object; absent fields were already dropped during
    /// serialization, so `null` members never reach the wire.
    Json(Value),
    /// An ordered JSON-Patch array, sent as `application/json-patch+json`.
    JsonPatch(Vec<PatchOperation>),
    /// A multipart form (driver upload).
    Multipart(reqwest::multipart::Form),
}

impl Default for RequestBody {
    fn default() -> Self {
        Self::None
    }
}

/// Everything a single call contributes to the pipeline beyond its
/// [`crate::endpoint::Operation`] table entry.
///
/// Caller-supplied headers enter at the configuration seam instead:
/// [`crate::WatsonxDataBuilder::default_header`] attaches them to every
/// request the built client sends.
#[derive(Debug, Default)]
pub(crate) struct RequestParts {
    pub path_params: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    pub auth_instance_id: Option<String>,
    pub body: RequestBody,
}

impl RequestParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path parameter for a `{name}` placeholder.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds a query parameter.
    pub fn query_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Sets the per-call tenant scoping header.
    pub fn auth_instance(mut self, id: Option<&str>) -> Self {
        self.auth_instance_id = id.map(str::to_string);
        self
    }

    /// Attaches a JSON object body.
    ///
    /// ## Errors
    ///
    /// Returns a decode error if the value cannot be represented as JSON
    /// (non-string map keys and similar), which cannot happen for the models
    /// in this crate.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body).map_err(ApiError::Decode)?);
        Ok(self)
    }

    /// Attaches an ordered JSON-Patch body.
    pub fn json_patch(mut self, patch: Vec<PatchOperation>) -> Self {
        self.body = RequestBody::JsonPatch(patch);
        self
    }

    /// Attaches a multipart form body.
    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Probe {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        region: Option<String>,
    }

    #[test]
    fn test_json_body_omits_absent_fields() {
        let parts = RequestParts::new()
            .json(&Probe {
                name: "b".to_string(),
                region: None,
            })
            .unwrap();
        match parts.body {
            RequestBody::Json(value) => {
                assert_eq!(value, serde_json::json!({"name": "b"}));
            }
            other => panic!("expected JSON body, got {other:?}"),
        }
    }

    #[test]
    fn test_query_params_accumulate_in_order() {
        let parts = RequestParts::new()
            .query_param("engine_id", "presto-01")
            .query_param("catalog_names", "a,b");
        assert_eq!(
            parts.query,
            vec![
                ("engine_id", "presto-01".to_string()),
                ("catalog_names", "a,b".to_string())
            ]
        );
    }
}
