//! Engine lifecycle, driver upload, and tenant-header scenarios.

use url::Url;
use watsonx_data::models::{
    EngineScaleConfig, NodeDescription, SparkApplicationDetails, SparkApplicationPrototype,
};
use watsonx_data::{
    ApiAuthMethod, CreateDriverRegistrationOptions, CreateSparkApplicationOptions,
    EngineIdOptions, ListEnginesOptions, ScaleEngineOptions, WatsonxData,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_pause_presto_engine_decodes_action_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/presto_engines/presto-01/pause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {"message": "paused", "message_code": "success"}
        })))
        .mount(&server)
        .await;

    let client = WatsonxData::new(Url::parse(&server.uri()).unwrap()).unwrap();
    let ack = client
        .pause_presto_engine(&EngineIdOptions::new("presto-01"))
        .await
        .unwrap();
    assert_eq!(ack.response.unwrap().message.as_deref(), Some("paused"));
}

#[tokio::test]
async fn test_scale_sends_worker_pool_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/presto_engines/presto-01/scale"))
        .and(body_json(serde_json::json!({
            "worker": {"node_type": "starter", "quantity": 5}
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "response": {"message": "scaling"}
        })))
        .mount(&server)
        .await;

    let client = WatsonxData::new(Url::parse(&server.uri()).unwrap()).unwrap();
    let scale = EngineScaleConfig {
        coordinator: None,
        worker: Some(NodeDescription::new("starter", 5)),
    };
    let ack = client
        .scale_presto_engine(&ScaleEngineOptions::new("presto-01", scale))
        .await
        .unwrap();
    assert_eq!(ack.response.unwrap().message.as_deref(), Some("scaling"));
}

#[tokio::test]
async fn test_client_default_auth_instance_id_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/db2_engines"))
        .and(header("AuthInstanceId", "instance-default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "db2_engines": []
        })))
        .mount(&server)
        .await;

    let client = WatsonxData::builder(Url::parse(&server.uri()).unwrap())
        .auth_instance_id("instance-default")
        .build()
        .unwrap();
    let engines = client
        .list_db2_engines(&ListEnginesOptions::new())
        .await
        .unwrap();
    assert_eq!(engines.db2_engines.unwrap().len(), 0);
}

#[tokio::test]
async fn test_per_call_auth_instance_id_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/db2_engines"))
        .and(header("AuthInstanceId", "instance-override"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "db2_engines": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WatsonxData::builder(Url::parse(&server.uri()).unwrap())
        .auth_instance_id("instance-default")
        .build()
        .unwrap();
    let options = ListEnginesOptions::new().with_auth_instance_id("instance-override");
    client.list_db2_engines(&options).await.unwrap();
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/netezza_engines"))
        .and(header("Authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "netezza_engines": []
        })))
        .mount(&server)
        .await;

    let client = WatsonxData::builder(Url::parse(&server.uri()).unwrap())
        .auth(ApiAuthMethod::BearerToken, "token-123")
        .build()
        .unwrap();
    client
        .list_netezza_engines(&ListEnginesOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_driver_upload_is_multipart_with_file_and_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/driver_registrations"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "driver_id": "drv-1",
            "driver_name": "db2jcc",
            "status": "registering"
        })))
        .mount(&server)
        .await;

    let client = WatsonxData::new(Url::parse(&server.uri()).unwrap()).unwrap();
    let options = CreateDriverRegistrationOptions::new(
        b"PK\x03\x04fake-jar".to_vec(),
        "db2jcc4.jar",
        "db2jcc",
        "db2",
    )
    .with_version("4.32");
    let driver = client.create_driver_registration(&options).await.unwrap();
    assert_eq!(driver.driver_id.as_deref(), Some("drv-1"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"driver\""));
    assert!(body.contains("filename=\"db2jcc4.jar\""));
    assert!(body.contains("name=\"driver_name\""));
    assert!(body.contains("name=\"connection_type\""));
    assert!(body.contains("name=\"version\""));
}

#[tokio::test]
async fn test_spark_application_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/spark_engines/spark-01/applications"))
        .and(body_json(serde_json::json!({
            "application_details": {
                "application": "s3://jobs/etl.py",
                "arguments": ["--date", "2024-01-01"]
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "app-1",
            "state": "accepted"
        })))
        .mount(&server)
        .await;

    let client = WatsonxData::new(Url::parse(&server.uri()).unwrap()).unwrap();
    let details = SparkApplicationDetails {
        application: Some("s3://jobs/etl.py".to_string()),
        arguments: Some(vec!["--date".to_string(), "2024-01-01".to_string()]),
        ..SparkApplicationDetails::default()
    };
    let options =
        CreateSparkApplicationOptions::new("spark-01", SparkApplicationPrototype::new(details));
    let status = client
        .create_spark_engine_application(&options)
        .await
        .unwrap();
    assert_eq!(status.id.as_deref(), Some("app-1"));
    assert_eq!(status.state.as_deref(), Some("accepted"));
}
