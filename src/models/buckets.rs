//! Bucket registration models.

use serde::{Deserialize, Serialize};

/// Catalog attached to a registered bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketCatalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
}

impl BucketCatalog {
    /// Creates a catalog reference by name.
    pub fn named(catalog_name: impl Into<String>) -> Self {
        Self {
            catalog_name: Some(catalog_name.into()),
            ..Self::default()
        }
    }
}

/// Connection details for an object-storage bucket.
///
/// `bucket_name` is always present; credentials and endpoint are only
/// returned (and only required) for self-managed buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketDetails {
    /// Access key for the bucket, when self-managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    /// Name of the actual bucket.
    pub bucket_name: String,
    /// Storage endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Secret key for the bucket, when self-managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

impl BucketDetails {
    /// Creates details for a bucket by name.
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            access_key: None,
            bucket_name: bucket_name.into(),
            endpoint: None,
            secret_key: None,
        }
    }

    /// Sets the access/secret credential pair.
    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Sets the storage endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// A registered object-storage bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalog: Option<BucketCatalog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_details: Option<BucketDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_display_name: Option<String>,
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    /// Storage provider (`ibm_cos`, `aws_s3`, `minio`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `ibm` or `customer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// `active` or `inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Wrapper for `GET /bucket_registrations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketRegistrationCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_registrations: Option<Vec<BucketRegistration>>,
}

/// Wrapper for `GET /bucket_registrations/{bucket_id}/objects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketObjectCollection {
    /// Object keys found in the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<String>>,
}

/// Request body for registering a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRegistrationPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalog: Option<BucketCatalog>,
    pub bucket_details: BucketDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_display_name: Option<String>,
    pub bucket_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub managed_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl BucketRegistrationPrototype {
    /// Creates a prototype with the required fields.
    pub fn new(
        bucket_details: BucketDetails,
        bucket_type: impl Into<String>,
        managed_by: impl Into<String>,
    ) -> Self {
        Self {
            associated_catalog: None,
            bucket_details,
            bucket_display_name: None,
            bucket_type: bucket_type.into(),
            description: None,
            managed_by: managed_by.into(),
            region: None,
            tags: None,
        }
    }

    /// Sets the catalog to create alongside the registration.
    pub fn with_associated_catalog(mut self, catalog: BucketCatalog) -> Self {
        self.associated_catalog = Some(catalog);
        self
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.bucket_display_name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
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
    fn test_prototype_with_only_required_fields_serializes_required_keys() {
        let proto =
            BucketRegistrationPrototype::new(BucketDetails::new("my-bucket"), "ibm_cos", "ibm");
        let json = serde_json::to_value(&proto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bucket_details": {"bucket_name": "my-bucket"},
                "bucket_type": "ibm_cos",
                "managed_by": "ibm"
            })
        );
    }

    #[test]
    fn test_decode_leaves_absent_fields_unset() {
        let json = r#"{"bucket_id":"b1","bucket_type":"ibm_cos","state":"active"}"#;
        let bucket: BucketRegistration = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.bucket_id.as_deref(), Some("b1"));
        assert_eq!(bucket.state.as_deref(), Some("active"));
        assert!(bucket.description.is_none());
        assert!(bucket.associated_catalog.is_none());
        assert!(bucket.tags.is_none());
    }

    #[test]
    fn test_round_trip_preserves_present_fields() {
        let bucket = BucketRegistration {
            bucket_id: Some("b1".to_string()),
            bucket_type: Some("aws_s3".to_string()),
            associated_catalog: Some(BucketCatalog::named("c1")),
            tags: Some(vec!["prod".to_string()]),
            ..BucketRegistration::default()
        };
        let json = serde_json::to_string(&bucket).unwrap();
        assert!(!json.contains("null"));
        let back: BucketRegistration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bucket);
    }
}
