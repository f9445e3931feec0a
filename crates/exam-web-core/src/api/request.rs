//! The request descriptor produced by every façade function.
//!
//! An [`ApiRequest`] is a plain value: URL (with path parameters already
//! substituted), HTTP verb, query parameters, an optional body, and header
//! overrides.  It carries no connection, no client, and no future, so two
//! descriptors built from the same arguments compare equal.
//!
//! # Query parameter values
//!
//! Parameters are stored as [`serde_json::Value`] so a numeric `limit` stays a
//! number (`{"limit": 10}`) until the transport renders it into the query
//! string.  A `null` value is never stored: [`ApiRequest::param`] drops it, so
//! an optional filter the caller left empty never reaches the backend as
//! `?keyword=null`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Free-form query parameter or body object, as passed through by callers.
pub type Params = Map<String, Value>;

/// HTTP verbs used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The verb as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file inside a multipart upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilePart {
    /// Form field name, e.g. `"file"` or `"cover"`.
    pub field: String,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type of the content, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Raw file content.  Not serialized; descriptors printed for inspection
    /// show the size instead.
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// Length of `bytes`, kept alongside so serialized descriptors stay small.
    pub size: usize,
}

impl FilePart {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        let size = bytes.len();
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type,
            bytes,
            size,
        }
    }
}

/// A `multipart/form-data` body: text fields plus zero or more files.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Appends a file.
    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }
}

/// Request body variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RequestBody {
    /// Serialized as `application/json`.
    Json(Value),
    /// Serialized as `multipart/form-data`.
    Multipart(MultipartForm),
}

/// A fully-built backend request descriptor.
///
/// # Example
///
/// ```rust
/// use exam_web_core::api::video;
/// use exam_web_core::HttpMethod;
///
/// let req = video::get_latest_videos(None);
/// assert_eq!(req.method, HttpMethod::Get);
/// assert_eq!(req.url, "/api/videos/latest");
/// assert_eq!(req.query_param("limit"), Some(&serde_json::json!(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    /// Path relative to the backend base URL, e.g. `/api/exams/7/submit`.
    pub url: String,
    pub method: HttpMethod,
    /// Query parameters in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(String, Value)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RequestBody>,
    /// Header overrides applied on top of the transport's defaults.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            params: Vec::new(),
            data: None,
            headers: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// Adds a query parameter.  `null` values are dropped.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.params.push((key.into(), value));
        }
        self
    }

    /// Adds a query parameter only when `value` is `Some`.
    pub fn param_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Copies every non-null entry of a caller-supplied parameter object.
    pub fn extend_params(self, params: &Params) -> Self {
        params
            .iter()
            .fold(self, |req, (k, v)| req.param(k.as_str(), v.clone()))
    }

    /// Sets a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.data = Some(RequestBody::Json(body));
        self
    }

    /// Sets a multipart body.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.data = Some(RequestBody::Multipart(form));
        self
    }

    /// Adds a header override.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Looks up a query parameter by name.
    pub fn query_param(&self, key: &str) -> Option<&Value> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Looks up a header override by name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Renders the query parameters as string pairs for a query string.
    ///
    /// Strings are emitted without quotes; numbers and booleans use their JSON
    /// text; arrays expand to one `key[]` pair per element.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (key, value) in &self.params {
            match value {
                Value::Array(items) => {
                    let array_key = format!("{key}[]");
                    pairs.extend(
                        items
                            .iter()
                            .filter(|v| !v.is_null())
                            .map(|v| (array_key.clone(), render_scalar(v))),
                    );
                }
                other => pairs.push((key.clone(), render_scalar(other))),
            }
        }
        pairs
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
