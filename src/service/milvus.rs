//! Milvus vector service operations.

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::common::EngineActionResponse;
use crate::models::milvus::{
    MilvusScaleConfig, MilvusService, MilvusServiceCollection, MilvusServicePrototype,
};
use crate::patch::PatchOperation;
use crate::request::RequestParts;

const LIST_MILVUS_SERVICES: Operation = Operation {
    id: "list_milvus_services",
    method: RestMethod::Get,
    path: "/milvus_services",
};

const CREATE_MILVUS_SERVICE: Operation = Operation {
    id: "create_milvus_service",
    method: RestMethod::Post,
    path: "/milvus_services",
};

const GET_MILVUS_SERVICE: Operation = Operation {
    id: "get_milvus_service",
    method: RestMethod::Get,
    path: "/milvus_services/{service_id}",
};

const UPDATE_MILVUS_SERVICE: Operation = Operation {
    id: "update_milvus_service",
    method: RestMethod::Patch,
    path: "/milvus_services/{service_id}",
};

const DELETE_MILVUS_SERVICE: Operation = Operation {
    id: "delete_milvus_service",
    method: RestMethod::Delete,
    path: "/milvus_services/{service_id}",
};

const PAUSE_MILVUS_SERVICE: Operation = Operation {
    id: "pause_milvus_service",
    method: RestMethod::Post,
    path: "/milvus_services/{service_id}/pause",
};

const RESUME_MILVUS_SERVICE: Operation = Operation {
    id: "resume_milvus_service",
    method: RestMethod::Post,
    path: "/milvus_services/{service_id}/resume",
};

const SCALE_MILVUS_SERVICE: Operation = Operation {
    id: "scale_milvus_service",
    method: RestMethod::Post,
    path: "/milvus_services/{service_id}/scale",
};

/// Options for [`WatsonxData::list_milvus_services`].
#[derive(Debug, Clone, Default)]
pub struct ListMilvusServicesOptions {
    pub auth_instance_id: Option<String>,
}

impl ListMilvusServicesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_milvus_service`].
#[derive(Debug, Clone)]
pub struct CreateMilvusServiceOptions {
    pub prototype: MilvusServicePrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateMilvusServiceOptions {
    pub fn new(prototype: MilvusServicePrototype) -> Self {
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

/// Options keyed by service id (get/delete/pause/resume).
#[derive(Debug, Clone)]
pub struct MilvusServiceIdOptions {
    pub service_id: String,
    pub auth_instance_id: Option<String>,
}

impl MilvusServiceIdOptions {
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::update_milvus_service`].
#[derive(Debug, Clone)]
pub struct UpdateMilvusServiceOptions {
    pub service_id: String,
    pub patch: Vec<PatchOperation>,
    pub auth_instance_id: Option<String>,
}

impl UpdateMilvusServiceOptions {
    pub fn new(service_id: impl Into<String>, patch: Vec<PatchOperation>) -> Self {
        Self {
            service_id: service_id.into(),
            patch,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::scale_milvus_service`].
#[derive(Debug, Clone)]
pub struct ScaleMilvusServiceOptions {
    pub service_id: String,
    pub scale: MilvusScaleConfig,
    pub auth_instance_id: Option<String>,
}

impl ScaleMilvusServiceOptions {
    pub fn new(service_id: impl Into<String>, scale: MilvusScaleConfig) -> Self {
        Self {
            service_id: service_id.into(),
            scale,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

impl WatsonxData {
    /// Lists Milvus services.
    pub async fn list_milvus_services(
        &self,
        options: &ListMilvusServicesOptions,
    ) -> Result<MilvusServiceCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_MILVUS_SERVICES, parts).await
    }

    /// Provisions a Milvus service.
    pub async fn create_milvus_service(
        &self,
        options: &CreateMilvusServiceOptions,
    ) -> Result<MilvusService, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_MILVUS_SERVICE, parts).await
    }

    /// Fetches one Milvus service by id.
    pub async fn get_milvus_service(
        &self,
        options: &MilvusServiceIdOptions,
    ) -> Result<MilvusService, ApiError> {
        let parts = RequestParts::new()
            .path_param("service_id", options.service_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_MILVUS_SERVICE, parts).await
    }

    /// Applies a JSON-Patch to a Milvus service.
    pub async fn update_milvus_service(
        &self,
        options: &UpdateMilvusServiceOptions,
    ) -> Result<MilvusService, ApiError> {
        let parts = RequestParts::new()
            .path_param("service_id", options.service_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_MILVUS_SERVICE, parts).await
    }

    /// Deletes a Milvus service.
    pub async fn delete_milvus_service(
        &self,
        options: &MilvusServiceIdOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("service_id", options.service_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_MILVUS_SERVICE, parts).await
    }

    /// Pauses a running Milvus service.
    pub async fn pause_milvus_service(
        &self,
        options: &MilvusServiceIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("service_id", options.service_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&PAUSE_MILVUS_SERVICE, parts).await
    }

    /// Resumes a paused Milvus service.
    pub async fn resume_milvus_service(
        &self,
        options: &MilvusServiceIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("service_id", options.service_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&RESUME_MILVUS_SERVICE, parts).await
    }

    /// Scales a Milvus service to a new size.
    pub async fn scale_milvus_service(
        &self,
        options: &ScaleMilvusServiceOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("service_id", options.service_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.scale)?;
        self.execute(&SCALE_MILVUS_SERVICE, parts).await
    }
}
