//! Application layer for the exam/learning platform client.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure rules, here mostly in `exam-web-core`) and the infrastructure
//! (HTTP, terminal output, files).  Code in this layer:
//!
//! - **Orchestrates** core types to fulfil a user goal ("send this request",
//!   "navigate to this page").
//! - **Depends on abstractions** (the [`Transport`] and `TitleSink` traits)
//!   rather than concrete implementations.
//! - **Performs no direct I/O**.
//!
//! # Sub-modules
//!
//! - **`transport`** – The [`Transport`] trait and its response/error types.
//! - **`api_client`** – [`ApiClient`]: hands request descriptors to a
//!   transport and returns the result unmodified.
//! - **`catalog`** – Looks up a request builder by resource and operation
//!   name, for the `api` CLI command.
//! - **`navigation_service`** – [`NavigationService`]: serializes navigation
//!   requests from many tasks onto one `Navigator`.

pub mod api_client;
pub mod catalog;
pub mod navigation_service;
pub mod transport;

pub use api_client::ApiClient;
pub use catalog::{build_request, ApiArgs, CatalogError};
pub use navigation_service::{NavigationHandle, NavigationService, ServiceError};
pub use transport::{ApiResponse, Transport, TransportError};
