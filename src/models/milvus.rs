//! Milvus vector service models.

use serde::{Deserialize, Serialize};

/// A Milvus vector database service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilvusService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_display_name: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// `running`, `pending`, `paused`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

/// Wrapper for `GET /milvus_services`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilvusServiceCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milvus_services: Option<Vec<MilvusService>>,
}

/// Request body for provisioning a Milvus service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilvusServicePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub origin: String,
    pub service_display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl MilvusServicePrototype {
    /// Creates a prototype with the required fields.
    pub fn new(service_display_name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            description: None,
            origin: origin.into(),
            service_display_name: service_display_name.into(),
            tags: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Scale request body for a Milvus service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilvusScaleConfig {
    /// Target t-shirt size (`small`, `medium`, `large`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tshirt_size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prototype_required_keys_only() {
        let proto = MilvusServicePrototype::new("vectors", "native");
        let json = serde_json::to_value(&proto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "origin": "native",
                "service_display_name": "vectors"
            })
        );
    }

    #[test]
    fn test_service_decode_leaves_absent_unset() {
        let json = r#"{"service_id":"milvus-01","status":"running","grpc_port":19530}"#;
        let service: MilvusService = serde_json::from_str(json).unwrap();
        assert_eq!(service.grpc_port, Some(19530));
        assert!(service.https_port.is_none());
        assert!(service.tags.is_none());
    }
}
