//! exam-web-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # Layers (for beginners)
//!
//! ```text
//! main.rs            CLI: parse args, load config, wire everything together
//!   ↓
//! application/       ApiClient, NavigationService, the Transport trait
//!   ↓
//! domain/            ClientConfig (plain data, no I/O)
//!
//! infrastructure/    reqwest transport, title sinks, config file loading
//!                    (implements traits defined in `application`)
//! ```
//!
//! The request descriptors, the route table, and the navigation guard live in
//! the `exam-web-core` crate; this crate only moves them across I/O
//! boundaries.

pub mod application;
pub mod domain;
pub mod infrastructure;
