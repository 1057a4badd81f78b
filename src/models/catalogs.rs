//! Catalog, schema, table, column, and snapshot models.

use serde::{Deserialize, Serialize};

/// A catalog (metadata namespace) visible to the instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Names of buckets backing this catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_buckets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_databases: Option<Vec<String>>,
    /// Identifiers of engines the catalog is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_engines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    /// Table format (`iceberg`, `hive`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastore: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thrift_uri: Option<String>,
}

/// Wrapper for `GET /catalogs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogs: Option<Vec<Catalog>>,
}

/// Wrapper for `GET /catalogs/{catalog_id}/schemas`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Vec<String>>,
}

/// Request body for creating a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaPrototype {
    /// Bucket directory backing the schema, when it differs from the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    pub custom_path: String,
    pub schema_name: String,
}

impl SchemaPrototype {
    /// Creates a prototype with the required fields.
    pub fn new(schema_name: impl Into<String>, custom_path: impl Into<String>) -> Self {
        Self {
            bucket_name: None,
            custom_path: custom_path.into(),
            schema_name: schema_name.into(),
        }
    }

    /// Sets the backing bucket.
    pub fn with_bucket_name(mut self, bucket_name: impl Into<String>) -> Self {
        self.bucket_name = Some(bucket_name.into());
        self
    }
}

/// Response body for `POST .../schemas`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSchemaCreatedBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<crate::models::common::SuccessResponse>,
}

/// A table within a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

/// Wrapper for `GET .../tables`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<String>>,
}

/// A column definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    /// SQL type (`varchar`, `int`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
}

impl Column {
    /// Creates a named column of the given SQL type.
    pub fn new(column_name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            column_name: Some(column_name.into()),
            comment: None,
            extra: None,
            column_type: Some(column_type.into()),
        }
    }
}

/// Wrapper for `GET .../columns` and request body for `POST .../columns`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
}

/// One Iceberg table snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Wrapper for `GET .../snapshots`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshotCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<Vec<TableSnapshot>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_renamed() {
        let column = Column::new("order_id", "varchar");
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"column_name": "order_id", "type": "varchar"})
        );
    }

    #[test]
    fn test_schema_prototype_omits_absent_bucket() {
        let proto = SchemaPrototype::new("sales", "spark/sales");
        let json = serde_json::to_value(&proto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "custom_path": "spark/sales",
                "schema_name": "sales"
            })
        );
    }

    #[test]
    fn test_catalog_decode_leaves_absent_unset() {
        let json = r#"{"catalog_name":"iceberg_data","catalog_type":"iceberg","associated_engines":["presto-01"]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.catalog_name.as_deref(), Some("iceberg_data"));
        assert_eq!(
            catalog.associated_engines.as_deref(),
            Some(["presto-01".to_string()].as_slice())
        );
        assert!(catalog.associated_buckets.is_none());
    }
}
