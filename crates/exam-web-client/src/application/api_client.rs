//! ApiClient: hands request descriptors to a [`Transport`].
//!
//! The client adds no behaviour of its own: no retries, no caching, no error
//! translation.  Whatever the transport returns, success or failure, reaches
//! the caller unchanged.  What it does add is a tracing span per request so
//! that log lines from the transport can be correlated.

use std::sync::Arc;

use exam_web_core::ApiRequest;
use tracing::{debug, Instrument};
use uuid::Uuid;

use super::transport::{ApiResponse, Transport, TransportError};

/// Cheaply cloneable handle used from any number of tasks at once.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends `request` through the transport.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`TransportError`] as-is.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "api_request",
            %request_id,
            method = %request.method,
            url = %request.url,
        );

        async move {
            debug!(params = request.params.len(), "sending request");
            let result = self.transport.execute(request).await;
            match &result {
                Ok(response) => debug!(status = response.status, "request succeeded"),
                Err(e) => debug!(error = %e, "request failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::transport::MockTransport;
    use exam_web_core::api::{exam, video};
    use exam_web_core::HttpMethod;
    use serde_json::json;

    #[tokio::test]
    async fn test_send_passes_descriptor_to_transport() {
        // Arrange
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|req| {
                req.method == HttpMethod::Get
                    && req.url == "/api/videos/latest"
                    && req.query_param("limit") == Some(&json!(10))
            })
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, json!([]))));
        let client = ApiClient::new(Arc::new(transport));

        // Act
        let response = client.send(video::get_latest_videos(None)).await;

        // Assert
        assert_eq!(response, Ok(ApiResponse::new(200, json!([]))));
    }

    #[tokio::test]
    async fn test_send_returns_body_unmodified() {
        let body = json!({"code": 200, "data": {"id": 7, "score": 95}});
        let expected = body.clone();
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .returning(move |_| Ok(ApiResponse::new(200, body.clone())));
        let client = ApiClient::new(Arc::new(transport));

        let response = client.send(exam::get_exam_record_by_id(7)).await.unwrap();

        assert_eq!(response.body, expected);
    }

    #[tokio::test]
    async fn test_send_propagates_transport_error_unchanged() {
        let mut transport = MockTransport::new();
        transport.expect_execute().returning(|_| {
            Err(TransportError::Status {
                status: 404,
                body: json!({"message": "not found"}),
            })
        });
        let client = ApiClient::new(Arc::new(transport));

        let err = client.send(exam::grade_exam(1)).await.unwrap_err();

        assert_eq!(
            err,
            TransportError::Status {
                status: 404,
                body: json!({"message": "not found"}),
            }
        );
    }

    #[tokio::test]
    async fn test_clones_share_one_transport() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(2)
            .returning(|_| Ok(ApiResponse::new(204, serde_json::Value::Null)));
        let client = ApiClient::new(Arc::new(transport));
        let other = client.clone();

        let (a, b) = tokio::join!(
            client.send(exam::get_my_exam_records()),
            other.send(exam::get_my_exam_records()),
        );

        assert!(a.is_ok() && b.is_ok());
    }
}
