//! The transport seam: something that can execute an [`ApiRequest`].
//!
//! The production implementation is `infrastructure::http_transport`
//! (reqwest); tests use the generated `MockTransport`.

use async_trait::async_trait;
use exam_web_core::ApiRequest;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A backend reply with a 2xx status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; `Null` for an empty body, `String` for a non-JSON one.
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// Error type for transport failures.
#[derive(Debug, Error, PartialEq)]
pub enum TransportError {
    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}")]
    Status { status: u16, body: Value },

    /// The request never produced a response (connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The base URL and request path do not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded (e.g. a malformed file MIME type).
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Decode(String),
}

/// Executes request descriptors against the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the decoded response.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
