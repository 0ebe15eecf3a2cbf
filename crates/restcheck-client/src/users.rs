//! Sub-client for the users resource.

use serde_json::Value;
use url::Url;

use crate::error::ApiClientError;
use crate::response::ApiResponse;

/// Client for `/users`.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UsersClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// List users. Calls `GET {base_url}/users[?limit=N]`.
    pub async fn list(&self, limit: Option<u32>) -> Result<ApiResponse, ApiClientError> {
        let path = match limit {
            Some(n) => format!("users?limit={n}"),
            None => "users".to_string(),
        };
        crate::send(&self.http, &self.base_url, reqwest::Method::GET, &path, None).await
    }

    /// Get a user by id. Calls `GET {base_url}/users/{id}`.
    pub async fn get(&self, id: u64) -> Result<ApiResponse, ApiClientError> {
        let path = format!("users/{id}");
        crate::send(&self.http, &self.base_url, reqwest::Method::GET, &path, None).await
    }

    /// Create a user. Calls `POST {base_url}/users/add`.
    pub async fn create(&self, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::POST,
            "users/add",
            Some(payload),
        )
        .await
    }

    /// Replace a user. Calls `PUT {base_url}/users/{id}`.
    pub async fn replace(&self, id: u64, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        let path = format!("users/{id}");
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::PUT,
            &path,
            Some(payload),
        )
        .await
    }

    /// Partially update a user. Calls `PATCH {base_url}/users/{id}`.
    pub async fn patch(&self, id: u64, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        let path = format!("users/{id}");
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::PATCH,
            &path,
            Some(payload),
        )
        .await
    }

    /// Soft-delete a user. Calls `DELETE {base_url}/users/{id}`.
    pub async fn delete(&self, id: u64) -> Result<ApiResponse, ApiClientError> {
        let path = format!("users/{id}");
        crate::send(&self.http, &self.base_url, reqwest::Method::DELETE, &path, None).await
    }
}
