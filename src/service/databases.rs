//! Database registration operations.

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::databases::{
    DatabaseRegistration, DatabaseRegistrationCollection, DatabaseRegistrationPrototype,
};
use crate::patch::PatchOperation;
use crate::request::RequestParts;

const LIST_DATABASE_REGISTRATIONS: Operation = Operation {
    id: "list_database_registrations",
    method: RestMethod::Get,
    path: "/database_registrations",
};

const CREATE_DATABASE_REGISTRATION: Operation = Operation {
    id: "create_database_registration",
    method: RestMethod::Post,
    path: "/database_registrations",
};

const GET_DATABASE: Operation = Operation {
    id: "get_database",
    method: RestMethod::Get,
    path: "/database_registrations/{database_id}",
};

const UPDATE_DATABASE: Operation = Operation {
    id: "update_database",
    method: RestMethod::Patch,
    path: "/database_registrations/{database_id}",
};

const DELETE_DATABASE_CATALOG: Operation = Operation {
    id: "delete_database_catalog",
    method: RestMethod::Delete,
    path: "/database_registrations/{database_id}",
};

/// Options for [`WatsonxData::list_database_registrations`].
#[derive(Debug, Clone, Default)]
pub struct ListDatabaseRegistrationsOptions {
    pub auth_instance_id: Option<String>,
}

impl ListDatabaseRegistrationsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_database_registration`].
#[derive(Debug, Clone)]
pub struct CreateDatabaseRegistrationOptions {
    pub prototype: DatabaseRegistrationPrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateDatabaseRegistrationOptions {
    pub fn new(prototype: DatabaseRegistrationPrototype) -> Self {
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

/// Options for [`WatsonxData::get_database`].
#[derive(Debug, Clone)]
pub struct GetDatabaseOptions {
    pub database_id: String,
    pub auth_instance_id: Option<String>,
}

impl GetDatabaseOptions {
    pub fn new(database_id: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::update_database`].
#[derive(Debug, Clone)]
pub struct UpdateDatabaseOptions {
    pub database_id: String,
    pub patch: Vec<PatchOperation>,
    pub auth_instance_id: Option<String>,
}

impl UpdateDatabaseOptions {
    pub fn new(database_id: impl Into<String>, patch: Vec<PatchOperation>) -> Self {
        Self {
            database_id: database_id.into(),
            patch,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::delete_database_catalog`].
#[derive(Debug, Clone)]
pub struct DeleteDatabaseCatalogOptions {
    pub database_id: String,
    pub auth_instance_id: Option<String>,
}

impl DeleteDatabaseCatalogOptions {
    pub fn new(database_id: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

impl WatsonxData {
    /// Lists all registered databases.
    pub async fn list_database_registrations(
        &self,
        options: &ListDatabaseRegistrationsOptions,
    ) -> Result<DatabaseRegistrationCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_DATABASE_REGISTRATIONS, parts).await
    }

    /// Registers an external database.
    pub async fn create_database_registration(
        &self,
        options: &CreateDatabaseRegistrationOptions,
    ) -> Result<DatabaseRegistration, ApiError> {
        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_DATABASE_REGISTRATION, parts).await
    }

    /// Fetches one database registration by id.
    pub async fn get_database(
        &self,
        options: &GetDatabaseOptions,
    ) -> Result<DatabaseRegistration, ApiError> {
        let parts = RequestParts::new()
            .path_param("database_id", options.database_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_DATABASE, parts).await
    }

    /// Applies a JSON-Patch to a database registration.
    pub async fn update_database(
        &self,
        options: &UpdateDatabaseOptions,
    ) -> Result<DatabaseRegistration, ApiError> {
        let parts = RequestParts::new()
            .path_param("database_id", options.database_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_DATABASE, parts).await
    }

    /// Removes a database registration and its catalog.
    pub async fn delete_database_catalog(
        &self,
        options: &DeleteDatabaseCatalogOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("database_id", options.database_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_DATABASE_CATALOG, parts).await
    }
}
