//! Infrastructure layer for the exam/learning platform client.
//!
//! Contains the I/O-facing adapters: the reqwest HTTP transport, title sinks,
//! and config file storage.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain`, and
//! `exam_web_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod http_transport;
pub mod storage;
pub mod title;

pub use http_transport::HttpTransport;
pub use title::{MemoryTitleSink, TracingTitleSink};
