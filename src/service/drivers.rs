//! Engine driver registration operations (JDBC jar upload).

use reqwest::multipart::{Form, Part};

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::drivers::{DriverRegistration, DriverRegistrationCollection};
use crate::request::RequestParts;

const LIST_DRIVER_REGISTRATIONS: Operation = Operation {
    id: "list_driver_registrations",
    method: RestMethod::Get,
    path: "/driver_registrations",
};

const CREATE_DRIVER_REGISTRATION: Operation = Operation {
    id: "create_driver_registration",
    method: RestMethod::Post,
    path: "/driver_registrations",
};

const DELETE_DRIVER_REGISTRATION: Operation = Operation {
    id: "delete_driver_registration",
    method: RestMethod::Delete,
    path: "/driver_registrations/{driver_id}",
};

/// Options for [`WatsonxData::list_driver_registrations`].
#[derive(Debug, Clone, Default)]
pub struct ListDriverRegistrationsOptions {
    pub auth_instance_id: Option<String>,
}

impl ListDriverRegistrationsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_driver_registration`].
///
/// The upload is a multipart form: the jar contents travel in a binary
/// `driver` part, the remaining fields as plain-text parts.
#[derive(Debug, Clone)]
pub struct CreateDriverRegistrationOptions {
    /// Raw bytes of the driver jar.
    pub driver: Vec<u8>,
    /// File name reported for the binary part.
    pub driver_file_name: String,
    pub driver_name: String,
    /// Database kind the driver connects to (`db2`, `netezza`, ...).
    pub connection_type: String,
    pub version: Option<String>,
    pub auth_instance_id: Option<String>,
}

impl CreateDriverRegistrationOptions {
    pub fn new(
        driver: Vec<u8>,
        driver_file_name: impl Into<String>,
        driver_name: impl Into<String>,
        connection_type: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            driver_file_name: driver_file_name.into(),
            driver_name: driver_name.into(),
            connection_type: connection_type.into(),
            version: None,
            auth_instance_id: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::delete_driver_registration`].
#[derive(Debug, Clone)]
pub struct DeleteDriverRegistrationOptions {
    pub driver_id: String,
    pub auth_instance_id: Option<String>,
}

impl DeleteDriverRegistrationOptions {
    pub fn new(driver_id: impl Into<String>) -> Self {
        Self {
            driver_id: driver_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

impl WatsonxData {
    /// Lists registered drivers.
    pub async fn list_driver_registrations(
        &self,
        options: &ListDriverRegistrationsOptions,
    ) -> Result<DriverRegistrationCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_DRIVER_REGISTRATIONS, parts).await
    }

    /// Uploads and registers an engine driver.
    pub async fn create_driver_registration(
        &self,
        options: &CreateDriverRegistrationOptions,
    ) -> Result<DriverRegistration, ApiError> {
        let mut form = Form::new()
            .part(
                "driver",
                Part::bytes(options.driver.clone()).file_name(options.driver_file_name.clone()),
            )
            .text("driver_name", options.driver_name.clone())
            .text("connection_type", options.connection_type.clone());
        if let Some(version) = &options.version {
            form = form.text("version", version.clone());
        }

        let parts = RequestParts::new()
            .auth_instance(options.auth_instance_id.as_deref())
            .multipart(form);
        self.execute(&CREATE_DRIVER_REGISTRATION, parts).await
    }

    /// Removes a registered driver.
    pub async fn delete_driver_registration(
        &self,
        options: &DeleteDriverRegistrationOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("driver_id", options.driver_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_DRIVER_REGISTRATION, parts).await
    }
}
