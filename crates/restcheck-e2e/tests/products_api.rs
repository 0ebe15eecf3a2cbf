//! End-to-end products suite: every products scenario from the catalogue
//! runs against a wiremock-hosted fixture of the demo API.

use restcheck_client::{DemoApiConfig, DemoClient};
use restcheck_contracts::{catalogue_for, Resource, Scenario};
use restcheck_e2e::{deleted, envelope, not_found, product};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scenario(name: &str) -> Scenario {
    catalogue_for(Resource::Products)
        .unwrap()
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("unknown scenario {name}"))
}

async fn client_for(server: &MockServer) -> DemoClient {
    let config = DemoApiConfig::local(&server.uri()).unwrap();
    DemoClient::new(config).unwrap()
}

#[tokio::test]
async fn list_conforms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "products",
            vec![product(1), product(2), product(3)],
            194,
            0,
            30,
        )))
        .mount(&server)
        .await;

    let s = scenario("products.list");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    let report = resp.validate_against(&s.contract);
    assert!(report.passed(), "violations:\n{report}");
}

#[tokio::test]
async fn list_limited_pins_count_and_limit() {
    let server = MockServer::start().await;
    let items = (1..=5).map(product).collect();
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "products", items, 194, 0, 5,
        )))
        .mount(&server)
        .await;

    let s = scenario("products.list_limited");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}

#[tokio::test]
async fn get_by_id_conforms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product(1)))
        .mount(&server)
        .await;

    let s = scenario("products.get_by_id");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}

#[tokio::test]
async fn get_missing_is_a_conforming_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found("Product", 9999)))
        .mount(&server)
        .await;

    let s = scenario("products.get_missing");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    let report = resp.validate_against(&s.contract);
    assert!(report.passed(), "violations:\n{report}");
}

#[tokio::test]
async fn create_echoes_the_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products/add"))
        .and(body_json(json!({
            "title": "Essence Test Kit",
            "price": 49.99,
            "category": "test-category"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 195,
            "title": "Essence Test Kit",
            "price": 49.99,
            "category": "test-category"
        })))
        .mount(&server)
        .await;

    let s = scenario("products.create");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}

#[tokio::test]
async fn create_empty_payload_still_mints_an_id() {
    // Observed leniency of the remote API: an empty body is accepted.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products/add"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 195})))
        .mount(&server)
        .await;

    let s = scenario("products.create_empty");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}

#[tokio::test]
async fn replace_echoes_the_replacement() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/1"))
        .and(body_json(json!({"title": "Fully Replaced Title", "price": 99.99})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Fully Replaced Title",
            "price": 99.99
        })))
        .mount(&server)
        .await;

    let s = scenario("products.replace");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}

#[tokio::test]
async fn replace_with_unknown_field_drops_it_from_the_echo() {
    // The API ignores fields it does not know; the contract proves the
    // echo does not contain them.
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/1"))
        .and(body_json(json!({"campoInvalido": "teste"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(product(1)))
        .mount(&server)
        .await;

    let s = scenario("products.replace_unknown_field");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}

#[tokio::test]
async fn replace_echoing_the_unknown_field_is_a_violation() {
    let server = MockServer::start().await;
    let mut echoed = product(1);
    echoed
        .as_object_mut()
        .unwrap()
        .insert("campoInvalido".into(), json!("teste"));

    Mock::given(method("PUT"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(echoed))
        .mount(&server)
        .await;

    let s = scenario("products.replace_unknown_field");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    let report = resp.validate_against(&s.contract);
    assert!(!report.passed());
    assert_eq!(report.violations()[0].field.as_deref(), Some("campoInvalido"));
}

#[tokio::test]
async fn patch_echoes_the_new_stock() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/products/1"))
        .and(body_json(json!({"stock": 123})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "stock": 123})))
        .mount(&server)
        .await;

    let s = scenario("products.patch");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}

#[tokio::test]
async fn delete_confirms_the_soft_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(deleted(product(1))))
        .mount(&server)
        .await;

    let s = scenario("products.delete");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    let report = resp.validate_against(&s.contract);
    assert!(report.passed(), "violations:\n{report}");
}

#[tokio::test]
async fn delete_missing_is_a_conforming_404() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found("Product", 9999)))
        .mount(&server)
        .await;

    let s = scenario("products.delete_missing");
    let resp = client_for(&server).await.execute(&s.call).await.unwrap();
    assert!(resp.validate_against(&s.contract).passed());
}
