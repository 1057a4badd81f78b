//! Db2, Netezza, and "other" engine models.
//!
//! These three families share the same envelope; they differ only in their
//! `engine_details` payloads and which operations the service supports.

use serde::{Deserialize, Serialize};

/// Runtime details of a Db2 engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Db2EngineDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastore_host: Option<String>,
}

/// A Db2 engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Db2Engine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<Db2EngineDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    /// `ibm` or `external`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Wrapper for `GET /db2_engines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Db2EngineCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db2_engines: Option<Vec<Db2Engine>>,
}

/// Request body for provisioning a Db2 engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Db2EnginePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<Db2EngineDetails>,
    pub engine_display_name: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Db2EnginePrototype {
    /// Creates a prototype with the required fields.
    pub fn new(engine_display_name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            description: None,
            engine_details: None,
            engine_display_name: engine_display_name.into(),
            origin: origin.into(),
            tags: None,
        }
    }

    /// Sets the engine details.
    pub fn with_details(mut self, details: Db2EngineDetails) -> Self {
        self.engine_details = Some(details);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Runtime details of a Netezza engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetezzaEngineDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastore_host: Option<String>,
}

/// A Netezza engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetezzaEngine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<NetezzaEngineDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Wrapper for `GET /netezza_engines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetezzaEngineCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netezza_engines: Option<Vec<NetezzaEngine>>,
}

/// Request body for provisioning a Netezza engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetezzaEnginePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<NetezzaEngineDetails>,
    pub engine_display_name: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl NetezzaEnginePrototype {
    /// Creates a prototype with the required fields.
    pub fn new(engine_display_name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            description: None,
            engine_details: None,
            engine_display_name: engine_display_name.into(),
            origin: origin.into(),
            tags: None,
        }
    }

    /// Sets the engine details.
    pub fn with_details(mut self, details: NetezzaEngineDetails) -> Self {
        self.engine_details = Some(details);
        self
    }
}

/// Details of an engine registered from outside the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherEngineDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    /// Engine kind as reported by the external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastore_host: Option<String>,
}

/// An engine of a kind the service does not manage natively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherEngine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<OtherEngineDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Wrapper for `GET /other_engines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherEngineCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_engines: Option<Vec<OtherEngine>>,
}

/// Request body for registering an external engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherEnginePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub engine_details: OtherEngineDetails,
    pub engine_display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl OtherEnginePrototype {
    /// Creates a prototype with the required fields.
    pub fn new(engine_display_name: impl Into<String>, engine_details: OtherEngineDetails) -> Self {
        Self {
            description: None,
            engine_details,
            engine_display_name: engine_display_name.into(),
            origin: None,
            tags: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_renamed() {
        let json = r#"{"engine_id":"db2-01","type":"db2"}"#;
        let engine: Db2Engine = serde_json::from_str(json).unwrap();
        assert_eq!(engine.engine_type.as_deref(), Some("db2"));
        let out = serde_json::to_value(&engine).unwrap();
        assert_eq!(out["type"], "db2");
    }

    #[test]
    fn test_prototype_required_keys_only() {
        let proto = NetezzaEnginePrototype::new("netezza-01", "external");
        let json = serde_json::to_value(&proto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "engine_display_name": "netezza-01",
                "origin": "external"
            })
        );
    }
}
