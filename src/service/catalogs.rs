//! Catalog, schema, table, column, and snapshot operations.
//!
//! Everything below a catalog is executed by a query engine, so these
//! operations carry a required `engine_id` query parameter. Catalog
//! attach/detach is the API's one query-parameter mutation: the catalog
//! names travel as `catalog_names` with no request body.

use crate::client::WatsonxData;
use crate::endpoint::Operation;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::models::catalogs::{
    Catalog, CatalogCollection, Column, ColumnCollection, CreateSchemaCreatedBody,
    SchemaCollection, SchemaPrototype, Table, TableCollection, TableSnapshotCollection,
};
use crate::models::common::EngineActionResponse;
use crate::patch::PatchOperation;
use crate::request::RequestParts;

const LIST_CATALOGS: Operation = Operation {
    id: "list_catalogs",
    method: RestMethod::Get,
    path: "/catalogs",
};

const GET_CATALOG: Operation = Operation {
    id: "get_catalog",
    method: RestMethod::Get,
    path: "/catalogs/{catalog_id}",
};

const ADD_ENGINE_CATALOGS: Operation = Operation {
    id: "add_engine_catalogs",
    method: RestMethod::Put,
    path: "/engines/{engine_id}/catalogs",
};

const REMOVE_ENGINE_CATALOGS: Operation = Operation {
    id: "remove_engine_catalogs",
    method: RestMethod::Delete,
    path: "/engines/{engine_id}/catalogs",
};

const LIST_SCHEMAS: Operation = Operation {
    id: "list_schemas",
    method: RestMethod::Get,
    path: "/catalogs/{catalog_id}/schemas",
};

const CREATE_SCHEMA: Operation = Operation {
    id: "create_schema",
    method: RestMethod::Post,
    path: "/catalogs/{catalog_id}/schemas",
};

const DELETE_SCHEMA: Operation = Operation {
    id: "delete_schema",
    method: RestMethod::Delete,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}",
};

const LIST_TABLES: Operation = Operation {
    id: "list_tables",
    method: RestMethod::Get,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables",
};

const GET_TABLE: Operation = Operation {
    id: "get_table",
    method: RestMethod::Get,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}",
};

const DELETE_TABLE: Operation = Operation {
    id: "delete_table",
    method: RestMethod::Delete,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}",
};

const UPDATE_TABLE: Operation = Operation {
    id: "update_table",
    method: RestMethod::Patch,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}",
};

const LIST_COLUMNS: Operation = Operation {
    id: "list_columns",
    method: RestMethod::Get,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}/columns",
};

const CREATE_COLUMNS: Operation = Operation {
    id: "create_columns",
    method: RestMethod::Post,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}/columns",
};

const DELETE_COLUMN: Operation = Operation {
    id: "delete_column",
    method: RestMethod::Delete,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}/columns/{column_id}",
};

const UPDATE_COLUMN: Operation = Operation {
    id: "update_column",
    method: RestMethod::Patch,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}/columns/{column_id}",
};

const LIST_TABLE_SNAPSHOTS: Operation = Operation {
    id: "list_table_snapshots",
    method: RestMethod::Get,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}/snapshots",
};

const REPLACE_SNAPSHOT: Operation = Operation {
    id: "replace_snapshot",
    method: RestMethod::Put,
    path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}/snapshots/{snapshot_id}",
};

/// Options for [`WatsonxData::list_catalogs`].
#[derive(Debug, Clone, Default)]
pub struct ListCatalogsOptions {
    pub auth_instance_id: Option<String>,
}

impl ListCatalogsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::get_catalog`].
#[derive(Debug, Clone)]
pub struct GetCatalogOptions {
    pub catalog_id: String,
    pub auth_instance_id: Option<String>,
}

impl GetCatalogOptions {
    pub fn new(catalog_id: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for attaching or detaching catalogs on an engine.
#[derive(Debug, Clone)]
pub struct EngineCatalogsOptions {
    pub engine_id: String,
    /// Comma-separated catalog names, sent as the `catalog_names` query
    /// parameter. There is no request body.
    pub catalog_names: String,
    pub auth_instance_id: Option<String>,
}

impl EngineCatalogsOptions {
    pub fn new(engine_id: impl Into<String>, catalog_names: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            catalog_names: catalog_names.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::list_schemas`].
#[derive(Debug, Clone)]
pub struct ListSchemasOptions {
    pub engine_id: String,
    pub catalog_id: String,
    pub auth_instance_id: Option<String>,
}

impl ListSchemasOptions {
    pub fn new(engine_id: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            catalog_id: catalog_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_schema`].
#[derive(Debug, Clone)]
pub struct CreateSchemaOptions {
    pub engine_id: String,
    pub catalog_id: String,
    pub prototype: SchemaPrototype,
    pub auth_instance_id: Option<String>,
}

impl CreateSchemaOptions {
    pub fn new(
        engine_id: impl Into<String>,
        catalog_id: impl Into<String>,
        prototype: SchemaPrototype,
    ) -> Self {
        Self {
            engine_id: engine_id.into(),
            catalog_id: catalog_id.into(),
            prototype,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::delete_schema`].
#[derive(Debug, Clone)]
pub struct DeleteSchemaOptions {
    pub engine_id: String,
    pub catalog_id: String,
    pub schema_id: String,
    pub auth_instance_id: Option<String>,
}

impl DeleteSchemaOptions {
    pub fn new(
        engine_id: impl Into<String>,
        catalog_id: impl Into<String>,
        schema_id: impl Into<String>,
    ) -> Self {
        Self {
            engine_id: engine_id.into(),
            catalog_id: catalog_id.into(),
            schema_id: schema_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::list_tables`].
#[derive(Debug, Clone)]
pub struct ListTablesOptions {
    pub engine_id: String,
    pub catalog_id: String,
    pub schema_id: String,
    pub auth_instance_id: Option<String>,
}

impl ListTablesOptions {
    pub fn new(
        engine_id: impl Into<String>,
        catalog_id: impl Into<String>,
        schema_id: impl Into<String>,
    ) -> Self {
        Self {
            engine_id: engine_id.into(),
            catalog_id: catalog_id.into(),
            schema_id: schema_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options keyed by the full table coordinates (get/delete, and the bases
/// of the column and snapshot operations).
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub engine_id: String,
    pub catalog_id: String,
    pub schema_id: String,
    pub table_id: String,
    pub auth_instance_id: Option<String>,
}

impl TableOptions {
    pub fn new(
        engine_id: impl Into<String>,
        catalog_id: impl Into<String>,
        schema_id: impl Into<String>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            engine_id: engine_id.into(),
            catalog_id: catalog_id.into(),
            schema_id: schema_id.into(),
            table_id: table_id.into(),
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::update_table`].
#[derive(Debug, Clone)]
pub struct UpdateTableOptions {
    pub engine_id: String,
    pub catalog_id: String,
    pub schema_id: String,
    pub table_id: String,
    /// Typically a single `replace` of `/table_name` to rename the table.
    pub patch: Vec<PatchOperation>,
    pub auth_instance_id: Option<String>,
}

impl UpdateTableOptions {
    pub fn new(
        engine_id: impl Into<String>,
        catalog_id: impl Into<String>,
        schema_id: impl Into<String>,
        table_id: impl Into<String>,
        patch: Vec<PatchOperation>,
    ) -> Self {
        Self {
            engine_id: engine_id.into(),
            catalog_id: catalog_id.into(),
            schema_id: schema_id.into(),
            table_id: table_id.into(),
            patch,
            auth_instance_id: None,
        }
    }

    pub fn with_auth_instance_id(mut self, id: impl Into<String>) -> Self {
        self.auth_instance_id = Some(id.into());
        self
    }
}

/// Options for [`WatsonxData::create_columns`].
#[derive(Debug, Clone)]
pub struct CreateColumnsOptions {
    pub table: TableOptions,
    pub columns: Vec<Column>,
}

impl CreateColumnsOptions {
    pub fn new(table: TableOptions, columns: Vec<Column>) -> Self {
        Self { table, columns }
    }
}

/// Options keyed by a column within a table (delete).
#[derive(Debug, Clone)]
pub struct ColumnOptions {
    pub table: TableOptions,
    pub column_id: String,
}

impl ColumnOptions {
    pub fn new(table: TableOptions, column_id: impl Into<String>) -> Self {
        Self {
            table,
            column_id: column_id.into(),
        }
    }
}

/// Options for [`WatsonxData::update_column`].
#[derive(Debug, Clone)]
pub struct UpdateColumnOptions {
    pub table: TableOptions,
    pub column_id: String,
    pub patch: Vec<PatchOperation>,
}

impl UpdateColumnOptions {
    pub fn new(
        table: TableOptions,
        column_id: impl Into<String>,
        patch: Vec<PatchOperation>,
    ) -> Self {
        Self {
            table,
            column_id: column_id.into(),
            patch,
        }
    }
}

/// Options for [`WatsonxData::replace_snapshot`].
#[derive(Debug, Clone)]
pub struct ReplaceSnapshotOptions {
    pub table: TableOptions,
    /// Snapshot to roll the table back to.
    pub snapshot_id: String,
}

impl ReplaceSnapshotOptions {
    pub fn new(table: TableOptions, snapshot_id: impl Into<String>) -> Self {
        Self {
            table,
            snapshot_id: snapshot_id.into(),
        }
    }
}

fn table_parts(table: &TableOptions) -> RequestParts {
    RequestParts::new()
        .path_param("catalog_id", table.catalog_id.clone())
        .path_param("schema_id", table.schema_id.clone())
        .path_param("table_id", table.table_id.clone())
        .query_param("engine_id", table.engine_id.clone())
        .auth_instance(table.auth_instance_id.as_deref())
}

impl WatsonxData {
    /// Lists all catalogs visible to the instance.
    pub async fn list_catalogs(
        &self,
        options: &ListCatalogsOptions,
    ) -> Result<CatalogCollection, ApiError> {
        let parts = RequestParts::new().auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_CATALOGS, parts).await
    }

    /// Fetches one catalog by name.
    pub async fn get_catalog(&self, options: &GetCatalogOptions) -> Result<Catalog, ApiError> {
        let parts = RequestParts::new()
            .path_param("catalog_id", options.catalog_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&GET_CATALOG, parts).await
    }

    /// Attaches catalogs to an engine.
    pub async fn add_engine_catalogs(
        &self,
        options: &EngineCatalogsOptions,
    ) -> Result<CatalogCollection, ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .query_param("catalog_names", options.catalog_names.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&ADD_ENGINE_CATALOGS, parts).await
    }

    /// Detaches catalogs from an engine.
    pub async fn remove_engine_catalogs(
        &self,
        options: &EngineCatalogsOptions,
    ) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("engine_id", options.engine_id.clone())
            .query_param("catalog_names", options.catalog_names.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&REMOVE_ENGINE_CATALOGS, parts).await
    }

    /// Lists the schemas of a catalog.
    pub async fn list_schemas(
        &self,
        options: &ListSchemasOptions,
    ) -> Result<SchemaCollection, ApiError> {
        let parts = RequestParts::new()
            .path_param("catalog_id", options.catalog_id.clone())
            .query_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_SCHEMAS, parts).await
    }

    /// Creates a schema in a catalog.
    pub async fn create_schema(
        &self,
        options: &CreateSchemaOptions,
    ) -> Result<CreateSchemaCreatedBody, ApiError> {
        let parts = RequestParts::new()
            .path_param("catalog_id", options.catalog_id.clone())
            .query_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json(&options.prototype)?;
        self.execute(&CREATE_SCHEMA, parts).await
    }

    /// Drops a schema and everything in it.
    pub async fn delete_schema(&self, options: &DeleteSchemaOptions) -> Result<(), ApiError> {
        let parts = RequestParts::new()
            .path_param("catalog_id", options.catalog_id.clone())
            .path_param("schema_id", options.schema_id.clone())
            .query_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute_unit(&DELETE_SCHEMA, parts).await
    }

    /// Lists the tables of a schema.
    pub async fn list_tables(
        &self,
        options: &ListTablesOptions,
    ) -> Result<TableCollection, ApiError> {
        let parts = RequestParts::new()
            .path_param("catalog_id", options.catalog_id.clone())
            .path_param("schema_id", options.schema_id.clone())
            .query_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref());
        self.execute(&LIST_TABLES, parts).await
    }

    /// Fetches one table, including its column definitions.
    pub async fn get_table(&self, options: &TableOptions) -> Result<Table, ApiError> {
        self.execute(&GET_TABLE, table_parts(options)).await
    }

    /// Drops a table.
    pub async fn delete_table(&self, options: &TableOptions) -> Result<(), ApiError> {
        self.execute_unit(&DELETE_TABLE, table_parts(options)).await
    }

    /// Applies a JSON-Patch to a table (rename).
    pub async fn update_table(&self, options: &UpdateTableOptions) -> Result<Table, ApiError> {
        let parts = RequestParts::new()
            .path_param("catalog_id", options.catalog_id.clone())
            .path_param("schema_id", options.schema_id.clone())
            .path_param("table_id", options.table_id.clone())
            .query_param("engine_id", options.engine_id.clone())
            .auth_instance(options.auth_instance_id.as_deref())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_TABLE, parts).await
    }

    /// Lists the columns of a table.
    pub async fn list_columns(&self, options: &TableOptions) -> Result<ColumnCollection, ApiError> {
        self.execute(&LIST_COLUMNS, table_parts(options)).await
    }

    /// Adds columns to a table.
    pub async fn create_columns(
        &self,
        options: &CreateColumnsOptions,
    ) -> Result<ColumnCollection, ApiError> {
        let body = ColumnCollection {
            columns: Some(options.columns.clone()),
        };
        let parts = table_parts(&options.table).json(&body)?;
        self.execute(&CREATE_COLUMNS, parts).await
    }

    /// Drops a column from a table.
    pub async fn delete_column(&self, options: &ColumnOptions) -> Result<(), ApiError> {
        let parts = table_parts(&options.table).path_param("column_id", options.column_id.clone());
        self.execute_unit(&DELETE_COLUMN, parts).await
    }

    /// Applies a JSON-Patch to a column (rename).
    pub async fn update_column(&self, options: &UpdateColumnOptions) -> Result<Column, ApiError> {
        let parts = table_parts(&options.table)
            .path_param("column_id", options.column_id.clone())
            .json_patch(options.patch.clone());
        self.execute(&UPDATE_COLUMN, parts).await
    }

    /// Lists the snapshots of an Iceberg table.
    pub async fn list_table_snapshots(
        &self,
        options: &TableOptions,
    ) -> Result<TableSnapshotCollection, ApiError> {
        self.execute(&LIST_TABLE_SNAPSHOTS, table_parts(options)).await
    }

    /// Rolls an Iceberg table back to a snapshot.
    pub async fn replace_snapshot(
        &self,
        options: &ReplaceSnapshotOptions,
    ) -> Result<EngineActionResponse, ApiError> {
        let parts =
            table_parts(&options.table).path_param("snapshot_id", options.snapshot_id.clone());
        self.execute(&REPLACE_SNAPSHOT, parts).await
    }
}
