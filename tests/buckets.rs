//! End-to-end bucket registration scenarios against a mock server.

use url::Url;
use watsonx_data::models::{BucketDetails, BucketRegistrationPrototype};
use watsonx_data::{
    ApiError, CreateBucketRegistrationOptions, GetBucketRegistrationOptions, PatchOperation,
    UpdateBucketRegistrationOptions, ValidationError, WatsonxData,
};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> WatsonxData {
    WatsonxData::new(Url::parse(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_get_bucket_registration_decodes_nested_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bucket_registrations/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bucket_id": "b1",
            "bucket_type": "ibm_cos",
            "state": "active",
            "associated_catalog": {"catalog_name": "c1"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bucket = client
        .get_bucket_registration(&GetBucketRegistrationOptions::new("b1"))
        .await
        .unwrap();

    assert_eq!(bucket.bucket_id.as_deref(), Some("b1"));
    assert_eq!(bucket.state.as_deref(), Some("active"));
    assert_eq!(
        bucket.associated_catalog.unwrap().catalog_name.as_deref(),
        Some("c1")
    );
    assert!(bucket.description.is_none());
    assert!(bucket.tags.is_none());
}

#[tokio::test]
async fn test_create_sends_only_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bucket_registrations"))
        .and(body_json(serde_json::json!({
            "bucket_details": {"bucket_name": "my-bucket"},
            "bucket_type": "ibm_cos",
            "managed_by": "ibm"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "bucket_id": "b-new",
            "state": "active"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let prototype =
        BucketRegistrationPrototype::new(BucketDetails::new("my-bucket"), "ibm_cos", "ibm");
    let bucket = client
        .create_bucket_registration(&CreateBucketRegistrationOptions::new(prototype))
        .await
        .unwrap();

    assert_eq!(bucket.bucket_id.as_deref(), Some("b-new"));
}

#[tokio::test]
async fn test_update_sends_ordered_json_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/bucket_registrations/b1"))
        .and(header("Content-Type", "application/json-patch+json"))
        .and(body_json(serde_json::json!([
            {"op": "replace", "path": "/bucket_display_name", "value": "renamed"},
            {"op": "add", "path": "/tags", "value": ["prod"]}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bucket_id": "b1",
            "bucket_display_name": "renamed"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = UpdateBucketRegistrationOptions::new(
        "b1",
        vec![
            PatchOperation::replace("/bucket_display_name", "renamed"),
            PatchOperation::add("/tags", serde_json::json!(["prod"])),
        ],
    );
    let bucket = client.update_bucket_registration(&options).await.unwrap();
    assert_eq!(bucket.bucket_display_name.as_deref(), Some("renamed"));
}

#[tokio::test]
async fn test_not_found_preserves_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bucket_registrations/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "trace": "trace-9",
            "errors": [{"code": "not_found", "message": "bucket registration missing not found"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get_bucket_registration(&GetBucketRegistrationOptions::new("missing"))
        .await
        .unwrap_err();

    match err {
        ApiError::Http {
            status,
            operation,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(operation, "get_bucket_registration");
            assert_eq!(body.trace.as_deref(), Some("trace-9"));
            assert_eq!(body.summary(), "bucket registration missing not found");
        }
        other => panic!("expected HTTP error, got {other}"),
    }
}

#[tokio::test]
async fn test_path_parameter_slash_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .get_bucket_registration(&GetBucketRegistrationOptions::new("abc/def"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/bucket_registrations/abc%2Fdef");
}

#[tokio::test]
async fn test_empty_bucket_id_fails_without_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .get_bucket_registration(&GetBucketRegistrationOptions::new(""))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::EmptyField {
            field: "bucket_id"
        })
    ));
}
