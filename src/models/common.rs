//! Shapes shared across resource families.

use serde::{Deserialize, Serialize};

/// Acknowledgement payload returned by action endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Human-readable confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable message code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_code: Option<String>,
}

/// Envelope for action endpoints (activate, pause, resume, restart, scale,
/// snapshot rollback).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineActionResponse {
    /// Acknowledgement from the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}
