//! # restcheck-client — HTTP client for the demo REST API
//!
//! Thin async client over the demo API's three resources. Every call
//! returns an [`ApiResponse`] — the raw status code and body text —
//! instead of a typed model: asserting on status and shape is the
//! contract engine's job, so a 404 or a malformed body is data here,
//! never an error. Transport failures are the only [`ApiClientError`]s.
//!
//! ## API Paths
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/{resource}` | List (optional `?limit=N`) |
//! | GET    | `/{resource}/{id}` | Get by id |
//! | POST   | `/{resource}/add` | Create |
//! | PUT    | `/{resource}/{id}` | Replace |
//! | PATCH  | `/{resource}/{id}` | Partial update |
//! | DELETE | `/{resource}/{id}` | Delete (soft: echoes `isDeleted`) |

pub mod config;
pub mod error;
pub mod products;
pub mod response;
pub mod todos;
pub mod users;

pub use config::DemoApiConfig;
pub use error::ApiClientError;
pub use response::ApiResponse;

use std::time::Duration;

use serde_json::Value;
use url::Url;

use restcheck_contracts::{ApiCall, Method};

/// Top-level demo API client. Holds sub-clients for each resource.
#[derive(Debug, Clone)]
pub struct DemoClient {
    products: products::ProductsClient,
    users: users::UsersClient,
    todos: todos::TodosClient,
    http: reqwest::Client,
    base_url: Url,
}

impl DemoClient {
    /// Create a new client from configuration.
    pub fn new(config: DemoApiConfig) -> Result<Self, ApiClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            products: products::ProductsClient::new(http.clone(), config.base_url.clone()),
            users: users::UsersClient::new(http.clone(), config.base_url.clone()),
            todos: todos::TodosClient::new(http.clone(), config.base_url.clone()),
            http,
            base_url: config.base_url,
        })
    }

    /// Access the products sub-client.
    pub fn products(&self) -> &products::ProductsClient {
        &self.products
    }

    /// Access the users sub-client.
    pub fn users(&self) -> &users::UsersClient {
        &self.users
    }

    /// Access the todos sub-client.
    pub fn todos(&self) -> &todos::TodosClient {
        &self.todos
    }

    /// Execute an arbitrary catalogue call.
    ///
    /// This is how the scenario runner drives the API: the catalogue
    /// describes the call, this dispatches it.
    pub async fn execute(&self, call: &ApiCall) -> Result<ApiResponse, ApiClientError> {
        let method = match call.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        send(
            &self.http,
            &self.base_url,
            method,
            &call.path,
            call.payload.as_ref(),
        )
        .await
    }
}

/// Issue one request and capture status plus raw body.
///
/// `path` is relative to the base URL and carries no leading slash; the
/// base URL's `Display` always ends in one.
pub(crate) async fn send(
    http: &reqwest::Client,
    base_url: &Url,
    method: reqwest::Method,
    path: &str,
    payload: Option<&Value>,
) -> Result<ApiResponse, ApiClientError> {
    let endpoint = format!("{method} /{path}");
    let url = format!("{base_url}{path}");

    tracing::debug!(%url, "issuing request");

    let mut request = http.request(method, &url);
    if let Some(payload) = payload {
        request = request.json(payload);
    }

    let resp = request.send().await.map_err(|e| ApiClientError::Http {
        endpoint: endpoint.clone(),
        source: e,
    })?;

    let status = resp.status().as_u16();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiClientError::Body { endpoint, source: e })?;

    Ok(ApiResponse { status, body })
}
