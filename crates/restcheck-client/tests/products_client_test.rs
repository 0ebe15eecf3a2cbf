//! Transport tests for ProductsClient against a wiremock server.
//!
//! These cover paths, query strings, payload forwarding, and the policy
//! that non-2xx statuses come back as data. Contract-level checks live in
//! the restcheck-e2e crate.

use restcheck_client::{DemoApiConfig, DemoClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn test_client(mock_server: &MockServer) -> DemoClient {
    let config = DemoApiConfig::local(&mock_server.uri()).unwrap();
    DemoClient::new(config).unwrap()
}

#[tokio::test]
async fn list_hits_the_collection_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": 1}],
            "total": 1,
            "skip": 0,
            "limit": 30
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let resp = client.products().list(None).await.unwrap();

    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("\"products\""));
}

#[tokio::test]
async fn list_forwards_the_limit_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [],
            "total": 0,
            "skip": 0,
            "limit": 5
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let resp = client.products().list(Some(5)).await.unwrap();
    assert_eq!(resp.status, 200);
}

#[tokio::test]
async fn get_missing_id_returns_404_as_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/9999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"message": "Product with id '9999' not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let resp = client.products().get(9999).await.unwrap();

    assert_eq!(resp.status, 404);
    assert!(resp.body.contains("not found"));
}

#[tokio::test]
async fn create_forwards_the_json_payload() {
    let mock_server = MockServer::start().await;
    let payload = json!({
        "title": "Essence Test Kit",
        "price": 49.99,
        "category": "test-category"
    });

    Mock::given(method("POST"))
        .and(path("/products/add"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 195,
            "title": "Essence Test Kit",
            "price": 49.99,
            "category": "test-category"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let resp = client.products().create(&payload).await.unwrap();
    assert_eq!(resp.status, 201);
}

#[tokio::test]
async fn patch_and_delete_hit_the_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/products/1"))
        .and(body_json(json!({"stock": 123})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "stock": 123})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "isDeleted": true,
            "deletedOn": "2026-08-07T10:00:00.000Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let patched = client.products().patch(1, &json!({"stock": 123})).await.unwrap();
    assert_eq!(patched.status, 200);

    let deleted = client.products().delete(1).await.unwrap();
    assert_eq!(deleted.status, 200);
    assert!(deleted.body.contains("isDeleted"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on this port; reqwest fails before any status exists.
    let config = DemoApiConfig::local("http://127.0.0.1:9").unwrap();
    let client = DemoClient::new(config).unwrap();

    let result = client.products().get(1).await;
    match result {
        Err(restcheck_client::ApiClientError::Http { endpoint, .. }) => {
            assert_eq!(endpoint, "GET /products/1");
        }
        other => panic!("expected Http transport error, got: {other:?}"),
    }
}
