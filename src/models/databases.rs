//! Database registration models.

use serde::{Deserialize, Serialize};

/// Connection details for a registered database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseDetails {
    /// SSL certificate contents, base64-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// SASL enabled (Kafka only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sasl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    /// Comma-separated table names (Kafka only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl DatabaseDetails {
    /// Creates connection details for a host/port pair.
    pub fn new(hostname: impl Into<String>, port: i64) -> Self {
        Self {
            hostname: Some(hostname.into()),
            port: Some(port),
            ..Self::default()
        }
    }

    /// Sets the credential pair.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets the database name.
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }
}

/// A registered external database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Names of catalogs backed by this database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalogs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_details: Option<DatabaseDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    /// Database engine kind (`postgresql`, `mysql`, `kafka`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Wrapper for `GET /database_registrations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRegistrationCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_registrations: Option<Vec<DatabaseRegistration>>,
}

/// Request body for registering a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRegistrationPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalog_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_details: Option<DatabaseDetails>,
    pub database_display_name: String,
    pub database_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl DatabaseRegistrationPrototype {
    /// Creates a prototype with the required fields.
    pub fn new(
        database_display_name: impl Into<String>,
        database_type: impl Into<String>,
    ) -> Self {
        Self {
            associated_catalog_name: None,
            database_details: None,
            database_display_name: database_display_name.into(),
            database_type: database_type.into(),
            description: None,
            tags: None,
        }
    }

    /// Sets the connection details.
    pub fn with_details(mut self, details: DatabaseDetails) -> Self {
        self.database_details = Some(details);
        self
    }

    /// Sets the catalog name to create alongside the registration.
    pub fn with_associated_catalog_name(mut self, name: impl Into<String>) -> Self {
        self.associated_catalog_name = Some(name.into());
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prototype_omits_absent_fields() {
        let proto = DatabaseRegistrationPrototype::new("orders", "postgresql");
        let json = serde_json::to_value(&proto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "database_display_name": "orders",
                "database_type": "postgresql"
            })
        );
    }

    #[test]
    fn test_details_round_trip() {
        let details = DatabaseDetails::new("db.internal", 5432)
            .with_credentials("svc", "secret")
            .with_database_name("orders");
        let json = serde_json::to_string(&details).unwrap();
        assert!(!json.contains("null"));
        let back: DatabaseDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(back, details);
        assert!(back.ssl.is_none());
    }
}
