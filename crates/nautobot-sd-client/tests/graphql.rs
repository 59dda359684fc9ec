use std::sync::{Arc, Mutex};

use axum::{Router, body::Bytes, http::HeaderMap, http::StatusCode, routing::post};
use tokio::net::TcpListener;

use nautobot_sd_client::{ClientError, GraphqlClient, InventorySource};

const DEVICES: &str = r#"{
    "data": {
        "devices": [
            {
                "name": "sw1",
                "role": { "name": "switch" },
                "location": { "name": "dc1" },
                "primary_ip4": { "address": "192.0.2.1/24" }
            },
            {
                "name": "sw2",
                "role": null,
                "location": { "name": "dc2" },
                "primary_ip4": null
            }
        ]
    }
}"#;

#[derive(Debug, Default)]
struct Captured {
    authorization: Option<String>,
    content_type: Option<String>,
    body: Option<serde_json::Value>,
}

// Fake Nautobot that answers every POST with a fixed status and body
async fn spawn_upstream(status: StatusCode, body: &'static str) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let recorder = captured.clone();

    let app = Router::new().route(
        "/api/graphql/",
        post(move |headers: HeaderMap, payload: Bytes| {
            let recorder = recorder.clone();
            async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                let mut captured = recorder.lock().unwrap();
                captured.authorization = header("authorization");
                captured.content_type = header("content-type");
                captured.body = serde_json::from_slice(&payload).ok();
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/graphql/"), captured)
}

#[tokio::test]
async fn test_request_shape() {
    let (url, captured) = spawn_upstream(StatusCode::OK, DEVICES).await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    client.execute("query { devices { name } }").await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.authorization.as_deref(), Some("Token abc123"));
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        captured.body,
        Some(serde_json::json!({ "query": "query { devices { name } }" }))
    );
}

#[tokio::test]
async fn test_decodes_devices() {
    let (url, _) = spawn_upstream(StatusCode::OK, DEVICES).await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    let devices = client.execute("query").await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].name, "sw1");
    assert_eq!(devices[0].primary_address(), Some("192.0.2.1/24"));
    assert_eq!(devices[1].role_name(), None);
}

#[tokio::test]
async fn test_empty_device_list_is_ok() {
    let (url, _) = spawn_upstream(StatusCode::OK, r#"{"data": {"devices": []}}"#).await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    let devices = client.execute("query").await.unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_unauthorized() {
    let (url, _) = spawn_upstream(StatusCode::UNAUTHORIZED, r#"{"detail":"Invalid token"}"#).await;
    let client = GraphqlClient::new(&url, "wrong").unwrap();

    let err = client.execute("query").await.unwrap_err();
    assert!(err.is_auth_failure());
    match err {
        ClientError::Unauthorized { body } => assert!(body.contains("Invalid token")),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let (url, _) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "internal error").await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    let err = client.execute("query").await.unwrap_err();
    assert!(!err.is_auth_failure());
    match err {
        ClientError::Upstream { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_success_is_upstream_error() {
    let (url, _) = spawn_upstream(StatusCode::ACCEPTED, DEVICES).await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    let err = client.execute("query").await.unwrap_err();
    assert!(matches!(err, ClientError::Upstream { status: 202, .. }));
}

#[tokio::test]
async fn test_malformed_json() {
    let (url, _) = spawn_upstream(StatusCode::OK, "<html>not json</html>").await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    let err = client.execute("query").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_schema_mismatch() {
    let (url, _) = spawn_upstream(StatusCode::OK, r#"{"data": {"devices": [1, 2]}}"#).await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    let err = client.execute("query").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_graphql_errors() {
    let (url, _) = spawn_upstream(
        StatusCode::OK,
        r#"{"data": null, "errors": [{"message": "Cannot query field 'bogus'"}]}"#,
    )
    .await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();

    let err = client.execute("query").await.unwrap_err();
    match err {
        ClientError::Graphql { messages } => {
            assert_eq!(messages, vec!["Cannot query field 'bogus'".to_string()]);
        }
        other => panic!("expected Graphql, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GraphqlClient::new(format!("http://{addr}/api/graphql/"), "abc123").unwrap();
    let err = client.execute("query").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_inventory_source_delegates() {
    let (url, _) = spawn_upstream(StatusCode::OK, DEVICES).await;
    let client = GraphqlClient::new(&url, "abc123").unwrap();
    let source: &dyn InventorySource = &client;

    let devices = source.fetch_devices("query").await.unwrap();
    assert_eq!(devices.len(), 2);
}
