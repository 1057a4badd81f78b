//! Presto and Prestissimo engine models.

use serde::{Deserialize, Serialize};

/// Node class and count for a coordinator or worker pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Node profile (`starter`, `cache_optimized`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl NodeDescription {
    /// Creates a description with both members set.
    pub fn new(node_type: impl Into<String>, quantity: i64) -> Self {
        Self {
            node_type: Some(node_type.into()),
            quantity: Some(quantity),
        }
    }
}

/// Provisioning details shared by the Presto-family prototypes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineDetailsBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    /// Shorthand size (`starter`, `small`, ...); overridden by explicit
    /// coordinator/worker descriptions when both are present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
}

/// A Presto engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrestoEngine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalogs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineDetailsBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_config: Option<String>,
    /// `running`, `pending`, `paused`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
}

/// Wrapper for `GET /presto_engines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrestoEngineCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presto_engines: Option<Vec<PrestoEngine>>,
}

/// Request body for provisioning a Presto engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrestoEnginePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalogs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineDetailsBody>,
    pub engine_display_name: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PrestoEnginePrototype {
    /// Creates a prototype with the required fields.
    pub fn new(engine_display_name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            associated_catalogs: None,
            description: None,
            engine_details: None,
            engine_display_name: engine_display_name.into(),
            origin: origin.into(),
            region: None,
            tags: None,
            version: None,
        }
    }

    /// Sets the provisioning details.
    pub fn with_details(mut self, details: EngineDetailsBody) -> Self {
        self.engine_details = Some(details);
        self
    }

    /// Sets the catalogs to attach at provision time.
    pub fn with_associated_catalogs(mut self, catalogs: Vec<String>) -> Self {
        self.associated_catalogs = Some(catalogs);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A Prestissimo engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrestissimoEngine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalogs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineDetailsBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
}

/// Wrapper for `GET /prestissimo_engines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrestissimoEngineCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prestissimo_engines: Option<Vec<PrestissimoEngine>>,
}

/// Request body for provisioning a Prestissimo engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrestissimoEnginePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalogs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineDetailsBody>,
    pub engine_display_name: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PrestissimoEnginePrototype {
    /// Creates a prototype with the required fields.
    pub fn new(engine_display_name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            associated_catalogs: None,
            description: None,
            engine_details: None,
            engine_display_name: engine_display_name.into(),
            origin: origin.into(),
            region: None,
            tags: None,
            version: None,
        }
    }

    /// Sets the provisioning details.
    pub fn with_details(mut self, details: EngineDetailsBody) -> Self {
        self.engine_details = Some(details);
        self
    }
}

/// Scale request body: target coordinator and worker pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineScaleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_nodes_round_trip() {
        let engine = PrestoEngine {
            engine_id: Some("presto-01".to_string()),
            coordinator: Some(NodeDescription::new("starter", 1)),
            worker: Some(NodeDescription::new("starter", 3)),
            ..PrestoEngine::default()
        };
        let json = serde_json::to_string(&engine).unwrap();
        let back: PrestoEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, engine);
        assert_eq!(back.worker.unwrap().quantity, Some(3));
    }

    #[test]
    fn test_scale_config_with_worker_only() {
        let config = EngineScaleConfig {
            coordinator: None,
            worker: Some(NodeDescription::new("starter", 5)),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"worker": {"node_type": "starter", "quantity": 5}})
        );
    }
}
