#![cfg(feature = "http-client")]

use crud_provider::framework::{HttpRequest, Method, Transport, TransportError};
use crud_provider::runtime::HttpTransport;
use crud_provider::{ActionRequest, DataProvider, ProviderError};
use serde_json::{json, Value};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_sends_accept_header_and_parses_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/1"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 1 }))
                .insert_header("x-total-count", "1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new();
    let response = transport
        .send(HttpRequest::get(format!("{}/posts/1", server.uri())))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json, json!({ "id": 1 }));
    assert_eq!(response.headers.get("x-total-count").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn test_body_is_sent_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"title":"x"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 9 })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = DataProvider::with_default_transport(server.uri()).unwrap();
    let result = provider
        .execute(ActionRequest::create("posts", json!({ "title": "x" })))
        .await
        .unwrap();

    assert_eq!(result.data(), Some(&json!({ "title": "x", "id": 9 })));
}

#[tokio::test]
async fn test_error_status_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/posts/1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Post 1 not found" })),
        )
        .mount(&server)
        .await;

    let transport = HttpTransport::new();
    let err = transport
        .send(HttpRequest::new(
            Method::Delete,
            format!("{}/posts/1", server.uri()),
        ))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransportError::Http {
            status: 404,
            message: "Post 1 not found".into(),
            body: json!({ "message": "Post 1 not found" }),
        }
    );
}

#[tokio::test]
async fn test_error_status_without_body_uses_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = DataProvider::with_default_transport(server.uri()).unwrap();
    let err = provider
        .execute(ActionRequest::get_one("posts", 1))
        .await
        .unwrap_err();

    match err {
        ProviderError::Transport(TransportError::Http { status, message, body }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
            assert_eq!(body, Value::Null);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    let transport = HttpTransport::new();
    let err = transport
        .send(HttpRequest::get("http://127.0.0.1:1/posts"))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}
