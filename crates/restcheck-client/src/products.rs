//! Sub-client for the products resource.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/products` | List products (optional `?limit=N`) |
//! | GET    | `/products/{id}` | Get product by id |
//! | POST   | `/products/add` | Create product |
//! | PUT    | `/products/{id}` | Replace product |
//! | PATCH  | `/products/{id}` | Partial update |
//! | DELETE | `/products/{id}` | Soft-delete product |

use serde_json::Value;
use url::Url;

use crate::error::ApiClientError;
use crate::response::ApiResponse;

/// Client for `/products`.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ProductsClient {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// List products. `limit` caps the page size.
    ///
    /// Calls `GET {base_url}/products[?limit=N]`.
    pub async fn list(&self, limit: Option<u32>) -> Result<ApiResponse, ApiClientError> {
        let path = match limit {
            Some(n) => format!("products?limit={n}"),
            None => "products".to_string(),
        };
        crate::send(&self.http, &self.base_url, reqwest::Method::GET, &path, None).await
    }

    /// Get a product by id.
    ///
    /// Calls `GET {base_url}/products/{id}`.
    pub async fn get(&self, id: u64) -> Result<ApiResponse, ApiClientError> {
        let path = format!("products/{id}");
        crate::send(&self.http, &self.base_url, reqwest::Method::GET, &path, None).await
    }

    /// Create a product.
    ///
    /// Calls `POST {base_url}/products/add`.
    pub async fn create(&self, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::POST,
            "products/add",
            Some(payload),
        )
        .await
    }

    /// Replace a product.
    ///
    /// Calls `PUT {base_url}/products/{id}`.
    pub async fn replace(&self, id: u64, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        let path = format!("products/{id}");
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::PUT,
            &path,
            Some(payload),
        )
        .await
    }

    /// Partially update a product.
    ///
    /// Calls `PATCH {base_url}/products/{id}`.
    pub async fn patch(&self, id: u64, payload: &Value) -> Result<ApiResponse, ApiClientError> {
        let path = format!("products/{id}");
        crate::send(
            &self.http,
            &self.base_url,
            reqwest::Method::PATCH,
            &path,
            Some(payload),
        )
        .await
    }

    /// Soft-delete a product. The demo API echoes the item with
    /// `isDeleted: true` and a `deletedOn` timestamp.
    ///
    /// Calls `DELETE {base_url}/products/{id}`.
    pub async fn delete(&self, id: u64) -> Result<ApiResponse, ApiClientError> {
        let path = format!("products/{id}");
        crate::send(&self.http, &self.base_url, reqwest::Method::DELETE, &path, None).await
    }
}
