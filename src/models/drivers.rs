//! Engine driver registration models.

use serde::{Deserialize, Serialize};

/// A registered database driver (uploaded JDBC jar).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Wrapper for `GET /driver_registrations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverRegistrationCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_registrations: Option<Vec<DriverRegistration>>,
}
