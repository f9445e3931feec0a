//! Storage infrastructure: configuration file loading.
//!
//! The `config` sub-module reads [`ClientConfig`](crate::domain::ClientConfig)
//! from a TOML file and falls back to defaults when the file does not exist
//! yet (first run).

pub mod config;
