//! Catalog, schema, table, and column scenarios.

use url::Url;
use watsonx_data::models::{Column, SchemaPrototype};
use watsonx_data::{
    ApiError, CreateColumnsOptions, CreateSchemaOptions, DeleteSchemaOptions,
    EngineCatalogsOptions, ListSchemasOptions, PatchOperation, ReplaceSnapshotOptions,
    TableOptions, UpdateTableOptions, ValidationError, WatsonxData,
};
use wiremock::matchers::{any, body_json, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> WatsonxData {
    WatsonxData::new(Url::parse(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_attach_catalogs_uses_query_params_and_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/engines/presto-01/catalogs"))
        .and(query_param("catalog_names", "iceberg_data,hive_data"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "catalogs": [
                {"catalog_name": "iceberg_data"},
                {"catalog_name": "hive_data"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = EngineCatalogsOptions::new("presto-01", "iceberg_data,hive_data");
    let attached = client.add_engine_catalogs(&options).await.unwrap();
    assert_eq!(attached.catalogs.unwrap().len(), 2);
}

#[tokio::test]
async fn test_detach_catalogs_returns_unit() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/engines/presto-01/catalogs"))
        .and(query_param("catalog_names", "hive_data"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = EngineCatalogsOptions::new("presto-01", "hive_data");
    client.remove_engine_catalogs(&options).await.unwrap();
}

#[tokio::test]
async fn test_list_schemas_carries_engine_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogs/iceberg_data/schemas"))
        .and(query_param("engine_id", "presto-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "schemas": ["sales", "inventory"]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let schemas = client
        .list_schemas(&ListSchemasOptions::new("presto-01", "iceberg_data"))
        .await
        .unwrap();
    assert_eq!(
        schemas.schemas.unwrap(),
        vec!["sales".to_string(), "inventory".to_string()]
    );
}

#[tokio::test]
async fn test_empty_engine_id_fails_without_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list_schemas(&ListSchemasOptions::new("", "iceberg_data"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::EmptyField {
            field: "engine_id"
        })
    ));
}

#[tokio::test]
async fn test_create_schema_posts_prototype() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalogs/iceberg_data/schemas"))
        .and(query_param("engine_id", "presto-01"))
        .and(body_json(serde_json::json!({
            "custom_path": "spark/sales",
            "schema_name": "sales"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "response": {"message": "created", "message_code": "success"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = CreateSchemaOptions::new(
        "presto-01",
        "iceberg_data",
        SchemaPrototype::new("sales", "spark/sales"),
    );
    let created = client.create_schema(&options).await.unwrap();
    assert_eq!(
        created.response.unwrap().message.as_deref(),
        Some("created")
    );
}

#[tokio::test]
async fn test_delete_schema() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/catalogs/iceberg_data/schemas/sales"))
        .and(query_param("engine_id", "presto-01"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .delete_schema(&DeleteSchemaOptions::new("presto-01", "iceberg_data", "sales"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rename_table_via_json_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/catalogs/iceberg_data/schemas/sales/tables/orders"))
        .and(query_param("engine_id", "presto-01"))
        .and(body_json(serde_json::json!([
            {"op": "replace", "path": "/table_name", "value": "orders_v2"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "table_name": "orders_v2"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = UpdateTableOptions::new(
        "presto-01",
        "iceberg_data",
        "sales",
        "orders",
        vec![PatchOperation::replace("/table_name", "orders_v2")],
    );
    let table = client.update_table(&options).await.unwrap();
    assert_eq!(table.table_name.as_deref(), Some("orders_v2"));
}

#[tokio::test]
async fn test_create_columns_wraps_list_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/catalogs/iceberg_data/schemas/sales/tables/orders/columns",
        ))
        .and(query_param("engine_id", "presto-01"))
        .and(body_json(serde_json::json!({
            "columns": [
                {"column_name": "order_id", "type": "varchar"},
                {"column_name": "total", "type": "double"}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "columns": [
                {"column_name": "order_id", "type": "varchar"},
                {"column_name": "total", "type": "double"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let table = TableOptions::new("presto-01", "iceberg_data", "sales", "orders");
    let options = CreateColumnsOptions::new(
        table,
        vec![
            Column::new("order_id", "varchar"),
            Column::new("total", "double"),
        ],
    );
    let columns = client.create_columns(&options).await.unwrap();
    assert_eq!(columns.columns.unwrap().len(), 2);
}

#[tokio::test]
async fn test_snapshot_rollback_hits_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(
            "/catalogs/iceberg_data/schemas/sales/tables/orders/snapshots/12345",
        ))
        .and(query_param("engine_id", "presto-01"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "response": {"message": "rolled back"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let table = TableOptions::new("presto-01", "iceberg_data", "sales", "orders");
    let ack = client
        .replace_snapshot(&ReplaceSnapshotOptions::new(table, "12345"))
        .await
        .unwrap();
    assert_eq!(
        ack.response.unwrap().message.as_deref(),
        Some("rolled back")
    );
}
