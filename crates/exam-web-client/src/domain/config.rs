//! Client configuration schema.
//!
//! [`ClientConfig`] is the single source of truth for runtime settings.  It is
//! read from a TOML file by `infrastructure::storage::config` and then
//! overridden by CLI flags.
//!
//! ```toml
//! [server]
//! base_url = "http://localhost:8080"
//! timeout_secs = 30
//!
//! [client]
//! platform_name = "智能学习平台"
//! log_level = "info"
//! auth_token = "eyJhbGciOi..."
//! ```
//!
//! Every field has a serde default, so a missing file, a missing section, or
//! a missing key all fall back to the values above (except `auth_token`, which
//! stays unset).

use std::time::Duration;

use exam_web_core::navigation::PLATFORM_NAME;
use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientSettings,
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL that request paths such as `/api/exams/7` are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout applied by the HTTP transport.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Presentation and credential settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientSettings {
    /// Suffix appended to every document title.
    #[serde(default = "default_platform_name")]
    pub platform_name: String,
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Bearer token sent as `Authorization` on every request, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_platform_name() -> String {
    PLATFORM_NAME.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            platform_name: default_platform_name(),
            log_level: default_log_level(),
            auth_token: None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.server.base_url, "http://localhost:8080");
        assert_eq!(cfg.server.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_client_settings() {
        let cfg = ClientSettings::default();
        assert_eq!(cfg.platform_name, "智能学习平台");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.auth_token.is_none());
    }

    #[test]
    fn test_partial_toml_fills_missing_fields_with_defaults() {
        // Arrange
        let text = r#"
            [server]
            base_url = "https://exam.example.com"
        "#;

        // Act
        let cfg: ClientConfig = toml::from_str(text).unwrap();

        // Assert
        assert_eq!(cfg.server.base_url, "https://exam.example.com");
        assert_eq!(cfg.server.timeout_secs, 30);
        assert_eq!(cfg.client, ClientSettings::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let cfg: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn test_auth_token_is_not_written_when_unset() {
        let text = toml::to_string_pretty(&ClientConfig::default()).unwrap();
        assert!(!text.contains("auth_token"));
    }
}
