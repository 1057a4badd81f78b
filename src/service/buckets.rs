//! Bucket registration operations.

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::buckets::{
    BucketObjectCollection, BucketRegistration, BucketRegistrationCollection,
    BucketRegistrationPrototype,
};
use crate::models::common::EngineActionResponse;
use crate::patch::PatchOperation;
use crate::request::RequestParts;

const LIST_BUCKET_REGISTRATIONS: Operation = Operation {
    id: "list_bucket_registrations",
    method: RestMethod::Get,
    path: "/bucket_registrations",
};

const CREATE_BUCKET_REGISTRATION: Operation = Operation {
    id: "create_bucket_registration",
    method: RestMethod::Post,
    path: "/bucket_registrations",
};

const GET_BUCKET_REGISTRATION: Operation = Operation {
    id: "get_bucket_registration",
    method: RestMethod::Get,
    path: "/bucket_registrations/{bucket_id}",
};

const UPDATE_BUCKET_REGISTRATION: Operation = Operation {
    id: "update_bucket_registration",
    method: RestMethod::Patch,
    path: "/bucket_registrations/{bucket_id}",
};

const DELETE_BUCKET_REGISTRATION: Operation = Operation {
    id: "delete_bucket_registration",
    method: RestMethod::Delete,
    path: "/bucket_registrations/{bucket_id}",
};

const CREATE_ACTIVATE_BUCKET: Operation = Operation {
    id: "create_activate_bucket",
    method: RestMethod::Post,
    path: "/bucket_registrations/{bucket_id}/activate",
};

const DELETE_DEACTIVATE_BUCKET: Operation = Operation {
    id: "delete_deactivate_bucket",
    method: RestMethod::Delete,
    path: "/bucket_registrations/{bucket_id}/deactivate",
};

const LIST_BUCKET_OBJECTS: Operation = Operation {
    id: "list_bucket_objects",
    method: RestMethod::Get,
    path: "/bucket_registrations/{bucket_id}/objects",
};

/// Options for [`WatsonxData::list_bucket_registrations`].
#[derive(Debug, Clone, Default)]
pub struct ListBucketRegistrationsOptions {
    pub auth_instance_id: Option<String>,
}

impl ListBucketRegistrationsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the client-level `AuthInstanceId` header for this call.
    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_bucket_registration`].
#[derive(Debug, Clone)]
pub struct CreateBucketRegistrationOptions {
    pub prototype: BucketRegistrationPrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateBucketRegistrationOptions {
    pub fn new(prototype: BucketRegistrationPrototype) -> Self {
        Self {
            prototype,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::get_bucket_registration`].
#[derive(Debug, Clone)]
pub struct GetBucketRegistrationOptions {
    pub bucket_id: String,
    pub auth_instance_id: Option<String>,
}

impl GetBucketRegistrationOptions {
    pub fn new(bucket_id: impl Into<String>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::update_bucket_registration`].
#[derive(Debug, Clone)]
pub struct UpdateBucketRegistrationOptions {
    pub bucket_id: String,
    /// Ordered patch; applied by the server in array order.
    pub patch: Vec<PatchOperation>,
    pub auth_instance_id: Option<String>,
}

impl UpdateBucketRegistrationOptions {
    pub fn new(bucket_id: impl Into<String>, patch: Vec<PatchOperation>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            patch,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::delete_bucket_registration`].
#[derive(Debug, Clone)]
pub struct DeleteBucketRegistrationOptions {
    pub bucket_id: String,
    pub auth_instance_id: Option<String>,
}

impl DeleteBucketRegistrationOptions {
    pub fn new(bucket_id: impl Into<String>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_activate_bucket`].
#[derive(Debug, Clone)]
pub struct CreateActivateBucketOptions {
    pub bucket_id: String,
    pub auth_instance_id: Option<String>,
}

impl CreateActivateBucketOptions {
    pub fn new(bucket_id: impl Into<String>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::delete_deactivate_bucket`].
#[derive(Debug, Clone)]
pub struct DeleteDeactivateBucketOptions {
    pub bucket_id: String,
    pub auth_instance_id: Option<String>,
}

impl DeleteDeactivateBucketOptions {
    pub fn new(bucket_id: impl Into<String>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::list_bucket_objects`].
#[derive(Debug, Clone)]
pub struct ListBucketObjectsOptions {
    pub bucket_id: String,
    pub auth_instance_id: Option<String>,
}

impl ListBucketObjectsOptions {
    pub fn new(bucket_id: impl Into<String>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

impl WatsonxData {
    /// Lists all registered buckets.
    pub async fn list_bucket_registrations(
        &self,
        options: &ListBucketRegistrationsOptions,
    ) -> Result<BucketRegistrationCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_BUCKET_REGISTRATIONS, parts).await
    }

    /// Registers an object-storage bucket.
    pub async fn create_bucket_registration(
        &self,
        options: &CreateBucketRegistrationOptions,
    ) -> Result<BucketRegistration, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_BUCKET_REGISTRATION, parts).await
    }

    /// Fetches one bucket registration by id.
    pub async fn get_bucket_registration(
        &self,
        options: &GetBucketRegistrationOptions,
    ) -> Result<BucketRegistration, ApiError> {
        let parts = RequestParts::new()
            .path_param("bucket_id", options.bucket_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_BUCKET_REGISTRATION, parts).await
    }

    /// Applies a JSON-Patch to a bucket registration.
    pub async fn update_bucket_registration(
        &self,
        options: &UpdateBucketRegistrationOptions,
    ) -> Result<BucketRegistration, ApiError> {
        let parts = RequestParts::new()
            .path_param("bucket_id", options.bucket_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_BUCKET_REGISTRATION, parts).await
    }

    /// Unregisters a bucket.
    pub async fn delete_bucket_registration(
        &self,
        options: &DeleteBucketRegistrationOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("bucket_id", options.bucket_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_BUCKET_REGISTRATION, parts).await
    }

    /// Activates a registered bucket.
    pub async fn create_activate_bucket(
        &self,
        options: &CreateActivateBucketOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("bucket_id", options.bucket_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&CREATE_ACTIVATE_BUCKET, parts).await
    }

    /// Deactivates a registered bucket.
    pub async fn delete_deactivate_bucket(
        &self,
        options: &DeleteDeactivateBucketOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("bucket_id", options.bucket_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_DEACTIVATE_BUCKET, parts).await
    }

    /// Lists the object keys stored in an active bucket.
    pub async fn list_bucket_objects(
        &self,
        options: &ListBucketObjectsOptions,
    ) -> Result<BucketObjectCollection, ApiError> {
        let parts = RequestParts::new()
            .path_param("bucket_id", options.bucket_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_BUCKET_OBJECTS, parts).await
    }
}
