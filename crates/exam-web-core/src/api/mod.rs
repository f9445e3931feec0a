//! Backend request builders, one module per resource.
//!
//! Every function here is pure: it takes typed arguments and returns an
//! [`ApiRequest`](request::ApiRequest) describing the HTTP call to make.  No
//! function validates its input, retries, caches, or translates errors; all of
//! that is either the transport's concern or the caller's.
//!
//! Parameters with a documented default (a result `limit` of 10, a statistics
//! window of 30 days) take an `Option`; the default is used only for `None`.
//!
//! The URL templates and verbs mirror the backend routes exactly.  Some
//! interview endpoints live under `/interview/...` rather than `/api/...`;
//! that asymmetry is the backend's and is preserved here.

pub mod exam;
pub mod interview;
pub mod paper;
pub mod request;
pub mod video;
pub mod video_category;

pub use request::{ApiRequest, FilePart, HttpMethod, MultipartForm, Params, RequestBody};

/// Default `limit` for the "hot"/"popular"/"latest" listing endpoints.
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Default statistics window, in days, for per-video statistics.
pub const DEFAULT_STATS_DAYS: u32 = 30;
