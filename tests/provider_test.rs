use crud_provider::clients::{ResourceClient, RequestPlan};
use crud_provider::framework::mock::MockTransport;
use crud_provider::framework::{HttpResponse, Method, TransportError};
use crud_provider::model::{GetListParams, Pagination};
use crud_provider::{ActionRequest, ActionResult, DataProvider, ProviderError};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const API: &str = "http://api";

/// GET_LIST with no filter sends only pagination and reshapes the page.
#[tokio::test]
async fn test_get_list_end_to_end() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "http://api/posts?limit=10&page=1&offset=0")
        .return_json(json!({
            "data": [{ "id": 1, "title": "first" }],
            "count": 1,
            "total": 1,
            "page": 1,
            "pageCount": 1
        }));

    let provider = DataProvider::new(API, mock.clone());
    let result = provider
        .execute(ActionRequest::get_list(
            "posts",
            GetListParams {
                pagination: Pagination::new(1, 10),
                sort: None,
                filter: json!(""),
            },
        ))
        .await
        .expect("get_list failed");

    assert_eq!(
        result,
        ActionResult::List {
            data: json!([{ "id": 1, "title": "first" }]),
            total: json!(1),
        }
    );
    mock.verify();
}

/// Untyped calls decode params and follow the same path as typed ones.
#[tokio::test]
async fn test_untyped_get_many_reference() {
    let mock = MockTransport::new();
    mock.expect(
        Method::Get,
        "http://api/comments?filter%5B0%5D=postId%7C%7C%24eq%7C%7C3&limit=25&offset=0",
    )
    .return_json(json!({ "data": [], "total": 0 }));

    let provider = DataProvider::new(API, mock.clone());
    let result = provider
        .call(
            "GET_MANY_REFERENCE",
            "comments",
            json!({
                "target": "postId",
                "id": 3,
                "pagination": { "page": 1, "perPage": 25 },
                "filter": { "q": "" }
            }),
        )
        .await
        .unwrap();

    assert_eq!(result.to_json(), json!({ "data": [], "total": 0 }));
    mock.verify();
}

/// Unknown kinds fail before the transport sees anything.
#[tokio::test]
async fn test_unsupported_action_makes_no_request() {
    let mock = MockTransport::new();
    let provider = DataProvider::new(API, mock.clone());

    let err = provider
        .call("GET_EVERYTHING", "posts", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(&err, ProviderError::UnsupportedAction(kind) if kind == "GET_EVERYTHING"));
    assert!(err.to_string().contains("GET_EVERYTHING"));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_create_keeps_submitted_fields() {
    let mock = MockTransport::new();
    mock.expect(Method::Post, "http://api/posts")
        .return_json(json!({ "id": 42 }));

    let provider = DataProvider::new(API, mock.clone());
    let result = provider
        .execute(ActionRequest::create("posts", json!({ "name": "x" })))
        .await
        .unwrap();

    assert_eq!(result.to_json(), json!({ "data": { "name": "x", "id": 42 } }));
    assert_eq!(mock.requests()[0].body.as_deref(), Some(r#"{"name":"x"}"#));
}

/// UPDATE_MANY results follow id order even when responses finish in reverse.
#[tokio::test]
async fn test_update_many_preserves_id_order() {
    let mock = MockTransport::new();
    mock.expect(Method::Put, "http://api/posts/1")
        .with_delay(Duration::from_millis(60))
        .return_json(json!({ "id": 1 }));
    mock.expect(Method::Put, "http://api/posts/2")
        .with_delay(Duration::from_millis(30))
        .return_json(json!({ "id": 2 }));
    mock.expect(Method::Put, "http://api/posts/3")
        .return_json(json!({ "id": 3 }));

    let provider = DataProvider::new(API, mock.clone());
    let result = provider
        .execute(ActionRequest::update_many(
            "posts",
            [1, 2, 3],
            json!({ "published": true }),
        ))
        .await
        .unwrap();

    assert_eq!(
        result,
        ActionResult::Many {
            data: vec![json!({ "id": 1 }), json!({ "id": 2 }), json!({ "id": 3 })],
        }
    );

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests
        .iter()
        .all(|r| r.method == Method::Put && r.body.as_deref() == Some(r#"{"published":true}"#)));
    mock.verify();
}

/// A single failed id fails the whole bulk action with that error.
#[tokio::test]
async fn test_delete_many_fails_on_first_error() {
    let mock = MockTransport::new();
    mock.expect(Method::Delete, "http://api/posts/a")
        .return_json(json!({}));
    mock.expect(Method::Delete, "http://api/posts/b")
        .return_err(TransportError::Http {
            status: 404,
            message: "Not Found".into(),
            body: Value::Null,
        });
    mock.expect(Method::Delete, "http://api/posts/c")
        .return_json(json!({}));

    let provider = DataProvider::new(API, mock.clone());
    let err = provider
        .execute(ActionRequest::delete_many("posts", ["a", "b", "c"]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::Transport(TransportError::Http { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_transport_error_passes_through_unchanged() {
    let mock = MockTransport::new();
    mock.expect(Method::Patch, "http://api/posts/1")
        .return_err(TransportError::Network("connection refused".into()));

    let provider = DataProvider::new(API, mock.clone());
    let err = provider
        .execute(ActionRequest::update("posts", 1, json!({ "title": "t" })))
        .await
        .unwrap_err();

    match err {
        ProviderError::Transport(inner) => {
            assert_eq!(inner, TransportError::Network("connection refused".into()))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct Post {
    id: u32,
    title: String,
}

#[tokio::test]
async fn test_resource_client_wraps_every_action() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "http://api/posts/7")
        .return_json(json!({ "id": 7, "title": "seven" }));
    mock.expect(Method::Get, "http://api/posts?filter%5B0%5D=id%7C%7C%24in%7C%7C7%2C8")
        .return_json(json!([{ "id": 7 }, { "id": 8 }]));
    mock.expect(Method::Delete, "http://api/posts/7")
        .return_ok(HttpResponse::ok(json!({ "id": 7 })).with_status(200));

    let provider = DataProvider::new(API, mock.clone());
    let posts = provider.resource("posts");

    let post: Post = posts.get_one_as(7).await.unwrap();
    assert_eq!(post, Post { id: 7, title: "seven".into() });

    let many = posts.get_many(vec![json!(7), json!(8)]).await.unwrap();
    assert_eq!(many.data(), Some(&json!([{ "id": 7 }, { "id": 8 }])));

    let deleted = posts.delete(json!(7)).await.unwrap();
    assert_eq!(deleted.data(), Some(&json!({ "id": 7 })));

    mock.verify();
}

#[test]
fn test_convert_request_is_pure() {
    let provider = DataProvider::new(API, MockTransport::new());
    let plan = provider
        .convert_request(&ActionRequest::delete_many("tags", [1, 2]))
        .unwrap();

    let RequestPlan::FanOut(requests) = plan else {
        panic!("expected fan-out");
    };
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url, "http://api/tags/2");
}
