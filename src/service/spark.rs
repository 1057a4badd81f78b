//! Spark engine and Spark application operations.

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::spark::{
    SparkApplicationCollection, SparkApplicationPrototype, SparkApplicationStatus, SparkEngine,
    SparkEngineCollection, SparkEnginePrototype,
};
use crate::request::RequestParts;
use crate::service::engines::{EngineIdOptions, ListEnginesOptions, UpdateEngineOptions};

const LIST_SPARK_ENGINES: Operation = Operation {
    id: "list_spark_engines",
    method: RestMethod::Get,
    path: "/spark_engines",
};

const CREATE_SPARK_ENGINE: Operation = Operation {
    id: "create_spark_engine",
    method: RestMethod::Post,
    path: "/spark_engines",
};

const GET_SPARK_ENGINE: Operation = Operation {
    id: "get_spark_engine",
    method: RestMethod::Get,
    path: "/spark_engines/{engine_id}",
};

const UPDATE_SPARK_ENGINE: Operation = Operation {
    id: "update_spark_engine",
    method: RestMethod::Patch,
    path: "/spark_engines/{engine_id}",
};

const DELETE_SPARK_ENGINE: Operation = Operation {
    id: "delete_spark_engine",
    method: RestMethod::Delete,
    path: "/spark_engines/{engine_id}",
};

const LIST_SPARK_ENGINE_APPLICATIONS: Operation = Operation {
    id: "list_spark_engine_applications",
    method: RestMethod::Get,
    path: "/spark_engines/{engine_id}/applications",
};

const CREATE_SPARK_ENGINE_APPLICATION: Operation = Operation {
    id: "create_spark_engine_application",
    method: RestMethod::Post,
    path: "/spark_engines/{engine_id}/applications",
};

const GET_SPARK_ENGINE_APPLICATION_STATUS: Operation = Operation {
    id: "get_spark_engine_application_status",
    method: RestMethod::Get,
    path: "/spark_engines/{engine_id}/applications/{application_id}",
};

const DELETE_SPARK_ENGINE_APPLICATIONS: Operation = Operation {
    id: "delete_spark_engine_applications",
    method: RestMethod::Delete,
    path: "/spark_engines/{engine_id}/applications/{application_id}",
};

/// Options for [`WatsonxData::create_spark_engine`].
#[derive(Debug, Clone)]
pub struct CreateSparkEngineOptions {
    pub prototype: SparkEnginePrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateSparkEngineOptions {
    pub fn new(prototype: SparkEnginePrototype) -> Self {
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

/// Options for [`WatsonxData::create_spark_engine_application`].
#[derive(Debug, Clone)]
pub struct CreateSparkApplicationOptions {
    pub engine_id: String,
    pub prototype: SparkApplicationPrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateSparkApplicationOptions {
    pub fn new(engine_id: impl Into<String>, prototype: SparkApplicationPrototype) -> Self {
        Self {
            engine_id: engine_id.into(),
            prototype,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options keyed by engine and application id.
#[derive(Debug, Clone)]
pub struct SparkApplicationIdOptions {
    pub engine_id: String,
    pub application_id: String,
    pub auth_instance_id: Option<String>,
}

impl SparkApplicationIdOptions {
    pub fn new(engine_id: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            application_id: application_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

impl WatsonxData {
    /// Lists Spark engines.
    pub async fn list_spark_engines(
        &self,
        options: &ListEnginesOptions,
    ) -> Result<SparkEngineCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_SPARK_ENGINES, parts).await
    }

    /// Provisions a Spark engine.
    pub async fn create_spark_engine(
        &self,
        options: &CreateSparkEngineOptions,
    ) -> Result<SparkEngine, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_SPARK_ENGINE, parts).await
    }

    /// Fetches one Spark engine by id.
    pub async fn get_spark_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<SparkEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_SPARK_ENGINE, parts).await
    }

    /// Applies a JSON-Patch to a Spark engine.
    pub async fn update_spark_engine(
        &self,
        options: &UpdateEngineOptions,
    ) -> Result<SparkEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_SPARK_ENGINE, parts).await
    }

    /// Deletes a Spark engine.
    pub async fn delete_spark_engine(&self, options: &EngineIdOptions) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_SPARK_ENGINE, parts).await
    }

    /// Lists the applications submitted to a Spark engine.
    pub async fn list_spark_engine_applications(
        &self,
        options: &EngineIdOptions,
    ) -> Result<SparkApplicationCollection, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_SPARK_ENGINE_APPLICATIONS, parts).await
    }

    /// Submits a Spark application to an engine.
    pub async fn create_spark_engine_application(
        &self,
        options: &CreateSparkApplicationOptions,
    ) -> Result<SparkApplicationStatus, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_SPARK_ENGINE_APPLICATION, parts).await
    }

    /// Fetches the status of one submitted application.
    pub async fn get_spark_engine_application_status(
        &self,
        options: &SparkApplicationIdOptions,
    ) -> Result<SparkApplicationStatus, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .path_param("application_id", options.application_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_SPARK_ENGINE_APPLICATION_STATUS, parts).await
    }

    /// Stops and removes a submitted application.
    pub async fn delete_spark_engine_applications(
        &self,
        options: &SparkApplicationIdOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .path_param("application_id", options.application_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_SPARK_ENGINE_APPLICATIONS, parts).await
    }
}
