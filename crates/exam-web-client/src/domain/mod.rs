//! Domain layer for exam-web-client.
//!
//! Only plain configuration types live here.  They have no dependencies on
//! I/O, HTTP, or the async runtime, so they can be built in tests without a
//! config file or a server.

pub mod config;

pub use config::{ClientConfig, ClientSettings, ServerConfig};
