//! TOML-based configuration persistence.
//!
//! Reads and writes [`ClientConfig`].  Without an explicit `--config` path the
//! platform-appropriate file is used:
//! - Windows:  `%APPDATA%\ExamWeb\config.toml`
//! - Linux:    `~/.config/exam-web/config.toml`
//! - macOS:    `~/Library/Application Support/ExamWeb/config.toml`
//!
//! # Serde default values
//!
//! Every field of `ClientConfig` carries `#[serde(default = ...)]`, so a file
//! that only sets `server.base_url` is valid and everything else keeps its
//! default.  A missing file is not an error either: [`load_config`] returns
//! `ClientConfig::default()`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::ClientConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Resolves the default config file path for this platform.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the base directory cannot
/// be determined from the environment.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads `ClientConfig` from `path`, returning `ClientConfig::default()` if
/// the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: ClientConfig = toml::from_str(&content)?;
            debug!(path = %path.display(), "loaded config file");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found; using defaults");
            Ok(ClientConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &ClientConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("ExamWeb"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("ExamWeb")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("exam-web"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// A path under the system temp dir that no other test uses.
    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("exam-web-test-{}", Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_path("absent.toml");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        // Arrange
        let path = scratch_path("config.toml");
        let mut cfg = ClientConfig::default();
        cfg.server.base_url = "https://exam.example.com".to_string();
        cfg.client.auth_token = Some("secret".to_string());

        // Act
        save_config(&path, &cfg).unwrap();
        let restored = load_config(&path).unwrap();

        // Assert
        assert_eq!(restored, cfg);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let path = scratch_path("broken.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[server\nbase_url = 1").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_directory_path_is_an_io_error() {
        let dir = scratch_path("");
        std::fs::create_dir_all(&dir).unwrap();

        let err = load_config(&dir).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
