//! Presto and Prestissimo engine operations.

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::common::EngineActionResponse;
use crate::models::presto::{
    EngineScaleConfig, PrestissimoEngine, PrestissimoEngineCollection, PrestissimoEnginePrototype,
    PrestoEngine, PrestoEngineCollection, PrestoEnginePrototype,
};
use crate::request::RequestParts;
use crate::service::engines::{EngineIdOptions, ListEnginesOptions, UpdateEngineOptions};

const LIST_PRESTO_ENGINES: Operation = Operation {
    id: "list_presto_engines",
    method: RestMethod::Get,
    path: "/presto_engines",
};

const CREATE_PRESTO_ENGINE: Operation = Operation {
    id: "create_presto_engine",
    method: RestMethod::Post,
    path: "/presto_engines",
};

const GET_PRESTO_ENGINE: Operation = Operation {
    id: "get_presto_engine",
    method: RestMethod::Get,
    path: "/presto_engines/{engine_id}",
};

const UPDATE_PRESTO_ENGINE: Operation = Operation {
    id: "update_presto_engine",
    method: RestMethod::Patch,
    path: "/presto_engines/{engine_id}",
};

const DELETE_PRESTO_ENGINE: Operation = Operation {
    id: "delete_presto_engine",
    method: RestMethod::Delete,
    path: "/presto_engines/{engine_id}",
};

const PAUSE_PRESTO_ENGINE: Operation = Operation {
    id: "pause_presto_engine",
    method: RestMethod::Post,
    path: "/presto_engines/{engine_id}/pause",
};

const RESUME_PRESTO_ENGINE: Operation = Operation {
    id: "resume_presto_engine",
    method: RestMethod::Post,
    path: "/presto_engines/{engine_id}/resume",
};

const RESTART_PRESTO_ENGINE: Operation = Operation {
    id: "restart_presto_engine",
    method: RestMethod::Post,
    path: "/presto_engines/{engine_id}/restart",
};

const SCALE_PRESTO_ENGINE: Operation = Operation {
    id: "scale_presto_engine",
    method: RestMethod::Post,
    path: "/presto_engines/{engine_id}/scale",
};

const LIST_PRESTISSIMO_ENGINES: Operation = Operation {
    id: "list_prestissimo_engines",
    method: RestMethod::Get,
    path: "/prestissimo_engines",
};

const CREATE_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "create_prestissimo_engine",
    method: RestMethod::Post,
    path: "/prestissimo_engines",
};

const GET_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "get_prestissimo_engine",
    method: RestMethod::Get,
    path: "/prestissimo_engines/{engine_id}",
};

const UPDATE_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "update_prestissimo_engine",
    method: RestMethod::Patch,
    path: "/prestissimo_engines/{engine_id}",
};

const DELETE_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "delete_prestissimo_engine",
    method: RestMethod::Delete,
    path: "/prestissimo_engines/{engine_id}",
};

const PAUSE_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "pause_prestissimo_engine",
    method: RestMethod::Post,
    path: "/prestissimo_engines/{engine_id}/pause",
};

const RESUME_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "resume_prestissimo_engine",
    method: RestMethod::Post,
    path: "/prestissimo_engines/{engine_id}/resume",
};

const RESTART_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "restart_prestissimo_engine",
    method: RestMethod::Post,
    path: "/prestissimo_engines/{engine_id}/restart",
};

const SCALE_PRESTISSIMO_ENGINE: Operation = Operation {
    id: "scale_prestissimo_engine",
    method: RestMethod::Post,
    path: "/prestissimo_engines/{engine_id}/scale",
};

/// Options for [`WatsonxData::create_presto_engine`].
#[derive(Debug, Clone)]
pub struct CreatePrestoEngineOptions {
    pub prototype: PrestoEnginePrototype,
    pub auth_instance_id: Option<String>,
}

impl CreatePrestoEngineOptions {
    pub fn new(prototype: PrestoEnginePrototype) -> Self {
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

/// Options for [`WatsonxData::create_prestissimo_engine`].
#[derive(Debug, Clone)]
pub struct CreatePrestissimoEngineOptions {
    pub prototype: PrestissimoEnginePrototype,
    pub auth_instance_id: Option<String>,
}

impl CreatePrestissimoEngineOptions {
    pub fn new(prototype: PrestissimoEnginePrototype) -> Self {
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

/// Options for the scale operations of the Presto-family engines.
#[derive(Debug, Clone)]
pub struct ScaleEngineOptions {
    pub engine_id: String,
    /// Target coordinator/worker pools; omitted pools are left unchanged.
    pub scale: EngineScaleConfig,
    pub auth_instance_id: Option<String>,
}

impl ScaleEngineOptions {
    pub fn new(engine_id: impl Into<String>, scale: EngineScaleConfig) -> Self {
        Self {
            engine_id: engine_id.into(),
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
    /// Lists Presto engines.
    pub async fn list_presto_engines(
        &self,
        options: &ListEnginesOptions,
    ) -> Result<PrestoEngineCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_PRESTO_ENGINES, parts).await
    }

    /// Provisions a Presto engine.
    pub async fn create_presto_engine(
        &self,
        options: &CreatePrestoEngineOptions,
    ) -> Result<PrestoEngine, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_PRESTO_ENGINE, parts).await
    }

    /// Fetches one Presto engine by id.
    pub async fn get_presto_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<PrestoEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_PRESTO_ENGINE, parts).await
    }

    /// Applies a JSON-Patch to a Presto engine.
    pub async fn update_presto_engine(
        &self,
        options: &UpdateEngineOptions,
    ) -> Result<PrestoEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_PRESTO_ENGINE, parts).await
    }

    /// Deletes a Presto engine.
    pub async fn delete_presto_engine(&self, options: &EngineIdOptions) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_PRESTO_ENGINE, parts).await
    }

    /// Pauses a running Presto engine.
    pub async fn pause_presto_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&PAUSE_PRESTO_ENGINE, parts).await
    }

    /// Resumes a paused Presto engine.
    pub async fn resume_presto_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&RESUME_PRESTO_ENGINE, parts).await
    }

    /// Restarts a Presto engine.
    pub async fn restart_presto_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&RESTART_PRESTO_ENGINE, parts).await
    }

    /// Scales a Presto engine's coordinator/worker pools.
    pub async fn scale_presto_engine(
        &self,
        options: &ScaleEngineOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.scale)?;
        self.execute(&SCALE_PRESTO_ENGINE, parts).await
    }

    /// Lists Prestissimo engines.
    pub async fn list_prestissimo_engines(
        &self,
        options: &ListEnginesOptions,
    ) -> Result<PrestissimoEngineCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_PRESTISSIMO_ENGINES, parts).await
    }

    /// Provisions a Prestissimo engine.
    pub async fn create_prestissimo_engine(
        &self,
        options: &CreatePrestissimoEngineOptions,
    ) -> Result<PrestissimoEngine, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_PRESTISSIMO_ENGINE, parts).await
    }

    /// Fetches one Prestissimo engine by id.
    pub async fn get_prestissimo_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<PrestissimoEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_PRESTISSIMO_ENGINE, parts).await
    }

    /// Applies a JSON-Patch to a Prestissimo engine.
    pub async fn update_prestissimo_engine(
        &self,
        options: &UpdateEngineOptions,
    ) -> Result<PrestissimoEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_PRESTISSIMO_ENGINE, parts).await
    }

    /// Deletes a Prestissimo engine.
    pub async fn delete_prestissimo_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_PRESTISSIMO_ENGINE, parts).await
    }

    /// Pauses a running Prestissimo engine.
    pub async fn pause_prestissimo_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&PAUSE_PRESTISSIMO_ENGINE, parts).await
    }

    /// Resumes a paused Prestissimo engine.
    pub async fn resume_prestissimo_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&RESUME_PRESTISSIMO_ENGINE, parts).await
    }

    /// Restarts a Prestissimo engine.
    pub async fn restart_prestissimo_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&RESTART_PRESTISSIMO_ENGINE, parts).await
    }

    /// Scales a Prestissimo engine's coordinator/worker pools.
    pub async fn scale_prestissimo_engine(
        &self,
        options: &ScaleEngineOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.scale)?;
        self.execute(&SCALE_PRESTISSIMO_ENGINE, parts).await
    }
}
