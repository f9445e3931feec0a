//! # exam-web-core
//!
//! Shared library for the exam/learning platform web client containing the
//! backend request descriptors, the route table, and the navigation guard.
//!
//! This crate has zero dependencies on HTTP clients, async runtimes, or UI
//! frameworks.  Everything in it is a pure function of its inputs, which is
//! what makes the guard and the façade functions cheap to test exhaustively.
//!
//! # Architecture overview (for beginners)
//!
//! The platform has a backend (a REST service under `/api/...`) and a
//! single-page front end.  This crate describes the front end's two
//! responsibilities without performing any I/O:
//!
//! - **`api`** – One module per backend resource (exams, papers, videos, video
//!   categories, interview questions).  Each function returns an
//!   [`ApiRequest`]: the URL, HTTP verb, query parameters, and body that should
//!   be sent.  Actually sending it is the job of a transport in
//!   `exam-web-client`.
//!
//! - **`routing`** – The declarative route table: which path shows which
//!   [`View`], with what page title, including nested admin routes and the
//!   legacy `/video/:id` → `/videos/:id` redirect.
//!
//! - **`navigation`** – The before/after hooks that run on every page
//!   transition.  The before-hook sets the document title and stops a user from
//!   going back from an exam's result page into that same exam.

pub mod api;
pub mod navigation;
pub mod routing;

// Re-export the most-used types at the crate root so callers can write
// `exam_web_core::ApiRequest` instead of `exam_web_core::api::request::ApiRequest`.
pub use api::request::{ApiRequest, FilePart, HttpMethod, MultipartForm, RequestBody};
pub use navigation::guard::{decide_transition, document_title, TransitionDecision};
pub use navigation::navigator::{
    NavigationError, NavigationOutcome, NavigationState, Navigator, TitleSink,
};
pub use routing::{ResolvedRoute, RouteError, RouteMeta, RouteRecord, RouteTable, View};
