//! Client error types.
//!
//! Only transport and configuration failures are errors here. A non-2xx
//! response is NOT an error: the status code is part of the data the
//! contract engine asserts on (the suites deliberately request missing
//! ids and expect the 404).

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the demo API client.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// Configuration was invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP request could not be sent or timed out.
    #[error("http request failed for {endpoint}: {source}")]
    Http {
        /// Endpoint label, e.g. `GET /products/1`.
        endpoint: String,
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("failed to read response body for {endpoint}: {source}")]
    Body {
        endpoint: String,
        source: reqwest::Error,
    },
}
