//! Db2, Netezza, and other-engine operations.

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::engines::{
    Db2Engine, Db2EngineCollection, Db2EnginePrototype, NetezzaEngine, NetezzaEngineCollection,
    NetezzaEnginePrototype, OtherEngine, OtherEngineCollection, OtherEnginePrototype,
};
use crate::patch::PatchOperation;
use crate::request::RequestParts;

const LIST_DB2_ENGINES: Operation = Operation {
    id: "list_db2_engines",
    method: RestMethod::Get,
    path: "/db2_engines",
};

const CREATE_DB2_ENGINE: Operation = Operation {
    id: "create_db2_engine",
    method: RestMethod::Post,
    path: "/db2_engines",
};

const GET_DB2_ENGINE: Operation = Operation {
    id: "get_db2_engine",
    method: RestMethod::Get,
    path: "/db2_engines/{engine_id}",
};

const UPDATE_DB2_ENGINE: Operation = Operation {
    id: "update_db2_engine",
    method: RestMethod::Patch,
    path: "/db2_engines/{engine_id}",
};

const DELETE_DB2_ENGINE: Operation = Operation {
    id: "delete_db2_engine",
    method: RestMethod::Delete,
    path: "/db2_engines/{engine_id}",
};

const LIST_NETEZZA_ENGINES: Operation = Operation {
    id: "list_netezza_engines",
    method: RestMethod::Get,
    path: "/netezza_engines",
};

const CREATE_NETEZZA_ENGINE: Operation = Operation {
    id: "create_netezza_engine",
    method: RestMethod::Post,
    path: "/netezza_engines",
};

const GET_NETEZZA_ENGINE: Operation = Operation {
    id: "get_netezza_engine",
    method: RestMethod::Get,
    path: "/netezza_engines/{engine_id}",
};

const UPDATE_NETEZZA_ENGINE: Operation = Operation {
    id: "update_netezza_engine",
    method: RestMethod::Patch,
    path: "/netezza_engines/{engine_id}",
};

const DELETE_NETEZZA_ENGINE: Operation = Operation {
    id: "delete_netezza_engine",
    method: RestMethod::Delete,
    path: "/netezza_engines/{engine_id}",
};

const LIST_OTHER_ENGINES: Operation = Operation {
    id: "list_other_engines",
    method: RestMethod::Get,
    path: "/other_engines",
};

const CREATE_OTHER_ENGINE: Operation = Operation {
    id: "create_other_engine",
    method: RestMethod::Post,
    path: "/other_engines",
};

const GET_OTHER_ENGINE: Operation = Operation {
    id: "get_other_engine",
    method: RestMethod::Get,
    path: "/other_engines/{engine_id}",
};

const DELETE_OTHER_ENGINE: Operation = Operation {
    id: "delete_other_engine",
    method: RestMethod::Delete,
    path: "/other_engines/{engine_id}",
};

/// Options for the list operations of the engine families in this module.
#[derive(Debug, Clone, Default)]
pub struct ListEnginesOptions {
    pub auth_instance_id: Option<String>,
}

impl ListEnginesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options keyed by engine id (get/delete across the engine families).
#[derive(Debug, Clone)]
pub struct EngineIdOptions {
    pub engine_id: String,
    pub auth_instance_id: Option<String>,
}

impl EngineIdOptions {
    pub fn new(engine_id: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for JSON-Patch updates keyed by engine id.
#[derive(Debug, Clone)]
pub struct UpdateEngineOptions {
    pub engine_id: String,
    pub patch: Vec<PatchOperation>,
    pub auth_instance_id: Option<String>,
}

impl UpdateEngineOptions {
    pub fn new(engine_id: impl Into<String>, patch: Vec<PatchOperation>) -> Self {
        Self {
            engine_id: engine_id.into(),
            patch,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_db2_engine`].
#[derive(Debug, Clone)]
pub struct CreateDb2EngineOptions {
    pub prototype: Db2EnginePrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateDb2EngineOptions {
    pub fn new(prototype: Db2EnginePrototype) -> Self {
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

/// Options for [`WatsonxData::create_netezza_engine`].
#[derive(Debug, Clone)]
pub struct CreateNetezzaEngineOptions {
    pub prototype: NetezzaEnginePrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateNetezzaEngineOptions {
    pub fn new(prototype: NetezzaEnginePrototype) -> Self {
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

/// Options for [`WatsonxData::create_other_engine`].
#[derive(Debug, Clone)]
pub struct CreateOtherEngineOptions {
    pub prototype: OtherEnginePrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateOtherEngineOptions {
    pub fn new(prototype: OtherEnginePrototype) -> Self {
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

impl WatsonxData {
    /// Lists Db2 engines.
    pub async fn list_db2_engines(
        &self,
        options: &ListEnginesOptions,
    ) -> Result<Db2EngineCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_DB2_ENGINES, parts).await
    }

    /// Provisions a Db2 engine.
    pub async fn create_db2_engine(
        &self,
        options: &CreateDb2EngineOptions,
    ) -> Result<Db2Engine, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_DB2_ENGINE, parts).await
    }

    /// Fetches one Db2 engine by id.
    pub async fn get_db2_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<Db2Engine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_DB2_ENGINE, parts).await
    }

    /// Applies a JSON-Patch to a Db2 engine.
    pub async fn update_db2_engine(
        &self,
        options: &UpdateEngineOptions,
    ) -> Result<Db2Engine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_DB2_ENGINE, parts).await
    }

    /// Deletes a Db2 engine.
    pub async fn delete_db2_engine(&self, options: &EngineIdOptions) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_DB2_ENGINE, parts).await
    }

    /// Lists Netezza engines.
    pub async fn list_netezza_engines(
        &self,
        options: &ListEnginesOptions,
    ) -> Result<NetezzaEngineCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_NETEZZA_ENGINES, parts).await
    }

    /// Provisions a Netezza engine.
    pub async fn create_netezza_engine(
        &self,
        options: &CreateNetezzaEngineOptions,
    ) -> Result<NetezzaEngine, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_NETEZZA_ENGINE, parts).await
    }

    /// Fetches one Netezza engine by id.
    pub async fn get_netezza_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<NetezzaEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_NETEZZA_ENGINE, parts).await
    }

    /// Applies a JSON-Patch to a Netezza engine.
    pub async fn update_netezza_engine(
        &self,
        options: &UpdateEngineOptions,
    ) -> Result<NetezzaEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_NETEZZA_ENGINE, parts).await
    }

    /// Deletes a Netezza engine.
    pub async fn delete_netezza_engine(&self, options: &EngineIdOptions) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_NETEZZA_ENGINE, parts).await
    }

    /// Lists engines registered from outside the service.
    pub async fn list_other_engines(
        &self,
        options: &ListEnginesOptions,
    ) -> Result<OtherEngineCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_OTHER_ENGINES, parts).await
    }

    /// Registers an external engine.
    pub async fn create_other_engine(
        &self,
        options: &CreateOtherEngineOptions,
    ) -> Result<OtherEngine, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_OTHER_ENGINE, parts).await
    }

    /// Fetches one external engine by id.
    pub async fn get_other_engine(
        &self,
        options: &EngineIdOptions,
    ) -> Result<OtherEngine, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_OTHER_ENGINE, parts).await
    }

    /// Removes an external engine registration.
    pub async fn delete_other_engine(&self, options: &EngineIdOptions) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_OTHER_ENGINE, parts).await
    }
}
