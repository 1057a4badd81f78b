//! Spark engine and Spark application models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoints exposed by a running Spark engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkEndpoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications_api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_server_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_access_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_jobs_v4_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_kernel_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_history_server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wxd_application_endpoint: Option<String>,
}

/// Runtime details of a Spark engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkEngineDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<SparkEndpoints>,
}

/// Provisioning details for a Spark engine prototype.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkEngineDetailsPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
}

/// A Spark engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkEngine {
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
    pub engine_details: Option<SparkEngineDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Wrapper for `GET /spark_engines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkEngineCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_engines: Option<Vec<SparkEngine>>,
}

/// Request body for provisioning a Spark engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkEnginePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<SparkEngineDetailsPrototype>,
    pub engine_display_name: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SparkEnginePrototype {
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

    /// Sets the provisioning details.
    pub fn with_details(mut self, details: SparkEngineDetailsPrototype) -> Self {
        self.engine_details = Some(details);
        self
    }
}

/// What to run: application path, arguments, config, and environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkApplicationDetails {
    /// Application file path (e.g. `s3://bucket/app.py`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
    /// Spark configuration key-value pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Status of one submitted Spark application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkApplicationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_details: Option<SparkApplicationDetails>,
    /// Identifier assigned at submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_termination_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// `accepted`, `running`, `finished`, `failed`, `stopped`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// Wrapper for `GET /spark_engines/{engine_id}/applications`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkApplicationCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<SparkApplicationStatus>>,
}

/// Request body for submitting a Spark application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkApplicationPrototype {
    pub application_details: SparkApplicationDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_instance_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
}

impl SparkApplicationPrototype {
    /// Creates a prototype around the application details.
    pub fn new(application_details: SparkApplicationDetails) -> Self {
        Self {
            application_details,
            job_endpoint: None,
            service_instance_id: None,
            application_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_conf_round_trip() {
        let mut conf = HashMap::new();
        conf.insert("spark.executor.cores".to_string(), "2".to_string());
        let details = SparkApplicationDetails {
            application: Some("s3://jobs/etl.py".to_string()),
            arguments: Some(vec!["--date".to_string(), "2024-01-01".to_string()]),
            conf: Some(conf),
            ..SparkApplicationDetails::default()
        };
        let json = serde_json::to_string(&details).unwrap();
        let back: SparkApplicationDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(back, details);
        assert!(back.env.is_none());
    }

    #[test]
    fn test_status_decode_skips_unknown_state_fields() {
        let json = r#"{"id":"app-1","state":"running","spark_application_id":"sp-9"}"#;
        let status: SparkApplicationStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state.as_deref(), Some("running"));
        assert!(status.end_time.is_none());
    }
}
