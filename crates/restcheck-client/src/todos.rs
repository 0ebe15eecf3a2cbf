//! Sub-client for the todos resource.

use serde_json::Value;
use url::Url;

use crate::error::ApiClientError;
use crate::response::ApiResponse;

/// Client for `/todos`.
#[derive(Debug, Clone)]
pub struct TodosClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TodosClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// List todos. Calls `GET {base_url}/todos[?limit=N]`.
    pub async fn list(&self, limit: Option<u32>) -> Result<ApiResponse, ApiClientError> {
        let path = match limit {
            Some(n) => format!("todos?limit={n}"),
            None => "todos".to_string(),
        };
        crate::send(&self.http, &self.base_url, reqwest::Method::GET, &path, None).await
    }

    /// Get a todo by id. Calls `GET {base_url}/todos/{id}`.
    pub async fn get(&self, id: u64) -> Result<ApiResponse, ApiClientError> {
        let path = format!("todos/{id}");
        crate::send(&self.http, &self.base_url, reqwest::Method::GET, &path, None).await
    }

    /// Create a todo. Calls `POST {base_url}/todos/add`.
    pub async fn create(&self, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::POST,
            "todos/add",
            Some(payload),
        )
        .await
    }

    /// Replace a todo. Calls `PUT {base_url}/todos/{id}`.
    pub async fn replace(&self, id: u64, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        let path = format!("todos/{id}");
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::PUT,
            &path,
            Some(payload),
        )
        .await
    }

    /// Partially update a todo. Calls `PATCH {base_url}/todos/{id}`.
    pub async fn patch(&self, id: u64, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        let path = format!("todos/{id}");
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::PATCH,
            &path,
            Some(payload),
        )
        .await
    }

    /// Soft-delete a todo. Calls `DELETE {base_url}/todos/{id}`.
    pub async fn delete(&self, id: u64) -> Result<ApiResponse, ApiClientError> {
        let path = format!("todos/{id}");
        crate::send(&self.http, &self.base_url, reqwest::Method::DELETE, &path, None).await
    }
}
