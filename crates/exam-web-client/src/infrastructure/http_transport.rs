//! reqwest-backed [`Transport`].
//!
//! Turns an [`ApiRequest`] into a real HTTP call against the configured
//! backend:
//!
//! | Descriptor field        | HTTP                                               |
//! |-------------------------|----------------------------------------------------|
//! | `url`                   | appended to `server.base_url`                      |
//! | `method`                | request verb                                       |
//! | `params`                | query string (`key[]` for arrays)                  |
//! | `RequestBody::Json`     | `application/json` body                            |
//! | `RequestBody::Multipart`| `multipart/form-data` body, boundary set by reqwest |
//! | `headers`               | added as-is, except `Content-Type` on multipart     |
//!
//! A configured `auth_token` is sent as `Authorization: Bearer <token>`.
//!
//! The response body is parsed as JSON.  An empty body becomes
//! `Value::Null` and a body that is not JSON becomes `Value::String`, so the
//! caller always sees exactly what the backend sent.  Non-2xx statuses become
//! [`TransportError::Status`] carrying that same body.

use async_trait::async_trait;
use exam_web_core::{ApiRequest, HttpMethod, MultipartForm, RequestBody};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::transport::{ApiResponse, Transport, TransportError};
use crate::domain::ServerConfig;

/// HTTP transport with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpTransport {
    /// Builds a transport for `server`, optionally authenticating every request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] if `server.base_url` is not an
    /// absolute `http`/`https` URL, and [`TransportError::Network`] if the HTTP client
    /// cannot be initialised (e.g. no TLS backend).
    pub fn new(server: &ServerConfig, auth_token: Option<String>) -> Result<Self, TransportError> {
        let base = Url::parse(&server.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", server.base_url)))?;
        // `localhost:8080` parses with scheme `localhost`.
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(format!(
                "{}: expected an http or https base URL",
                server.base_url
            )));
        }

        let client = Client::builder()
            .timeout(server.timeout())
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Plain concatenation keeps a path prefix such as `/app` on the base.
    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let joined = format!("{}{}", self.base_url, path);
        Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{joined}: {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.url)?;
        let is_multipart = matches!(request.data, Some(RequestBody::Multipart(_)));

        let mut builder = self.client.request(to_method(request.method), url);

        let query = request.query_pairs();
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        for (name, value) in &request.headers {
            // reqwest writes its own multipart Content-Type with the boundary.
            if is_multipart && name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        builder = match request.data {
            Some(RequestBody::Json(body)) => builder.json(&body),
            Some(RequestBody::Multipart(form)) => builder.multipart(to_form(form)?),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        let body = decode_body(&bytes);

        if status.is_success() {
            debug!(status = status.as_u16(), bytes = bytes.len(), "response received");
            Ok(ApiResponse::new(status.as_u16(), body))
        } else {
            warn!(status = status.as_u16(), "backend returned an error status");
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn to_form(form: MultipartForm) -> Result<Form, TransportError> {
    let mut out = Form::new();
    for (name, value) in form.fields {
        out = out.text(name, value);
    }
    for file in form.files {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| TransportError::Encode(format!("{content_type}: {e}")))?;
        }
        out = out.part(file.field, part);
    }
    Ok(out)
}

fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
