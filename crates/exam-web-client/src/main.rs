//! exam-web: command-line host for the exam/learning platform client.
//!
//! Exposes the route table, the navigation guard, and every backend request
//! builder from a terminal, which is handy for checking a deployment or
//! scripting against the backend.
//!
//! # Usage
//!
//! ```text
//! exam-web [OPTIONS] <COMMAND>
//!
//! Commands:
//!   routes                       List every route (pattern, name, title, redirect)
//!   resolve  <PATH>              Resolve one location and print the result
//!   navigate <PATH>...           Navigate through the locations in order
//!   api <RESOURCE> <OPERATION>   Build (and send) one backend request
//!   init-config [--force]        Write the effective config to the config file
//!
//! Options:
//!   --config <FILE>          Config file [default: platform config dir]
//!   --base-url <URL>         Backend base URL
//!   --timeout-secs <SECS>    Per-request timeout
//!   --platform-name <NAME>   Document title suffix
//!   --auth-token <TOKEN>     Bearer token for the backend
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence over environment variables, which take
//! precedence over the config file.
//!
//! | Variable                  | Overrides                |
//! |---------------------------|--------------------------|
//! | `EXAM_WEB_CONFIG`         | config file path         |
//! | `EXAM_WEB_BASE_URL`       | `server.base_url`        |
//! | `EXAM_WEB_TIMEOUT_SECS`   | `server.timeout_secs`    |
//! | `EXAM_WEB_PLATFORM_NAME`  | `client.platform_name`   |
//! | `EXAM_WEB_AUTH_TOKEN`     | `client.auth_token`      |
//!
//! Log output goes to stderr and is filtered by `RUST_LOG`, falling back to
//! `client.log_level`.  Command results go to stdout as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use exam_web_client::application::catalog::{build_request, operations, ApiArgs, RESOURCES};
use exam_web_client::application::{ApiClient, NavigationService, TransportError};
use exam_web_client::domain::ClientConfig;
use exam_web_client::infrastructure::storage::config::{
    default_config_path, load_config, save_config,
};
use exam_web_client::infrastructure::{HttpTransport, TracingTitleSink};
use exam_web_core::api::Params;
use exam_web_core::{FilePart, MultipartForm, Navigator, RouteTable};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Command-line client for the 智能学习平台 exam/learning platform.
#[derive(Debug, Parser)]
#[command(
    name = "exam-web",
    about = "Route table, navigation guard, and backend requests for the exam/learning platform",
    version
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, env = "EXAM_WEB_CONFIG")]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. `http://localhost:8080`.
    #[arg(long, env = "EXAM_WEB_BASE_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "EXAM_WEB_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Suffix appended to document titles.
    #[arg(long, env = "EXAM_WEB_PLATFORM_NAME")]
    platform_name: Option<String>,

    /// Bearer token sent with every backend request.
    #[arg(long, env = "EXAM_WEB_AUTH_TOKEN", hide_env_values = true)]
    auth_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every route in declaration order.
    Routes,

    /// Resolve a location against the route table (redirects included).
    Resolve {
        /// Absolute location, e.g. `/video/42?t=30`.
        path: String,
    },

    /// Navigate through the given locations in order, applying the guard.
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Build one backend request and send it (or print it with --dry-run).
    Api(ApiCommand),

    /// Write the effective configuration (file + overrides) to the config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
struct ApiCommand {
    /// One of: exam, paper, video, video-category, interview.
    resource: String,

    /// Builder name, e.g. `get_latest_videos`.  Use `list` to see all.
    operation: String,

    /// Path id (exam record, paper, video, category, question, interview, user, code).
    #[arg(long)]
    id: Option<i64>,

    #[arg(long)]
    limit: Option<u32>,

    /// Statistics window in days.
    #[arg(long)]
    days: Option<u32>,

    /// Watch duration in seconds.
    #[arg(long)]
    duration: Option<u64>,

    /// Student name, invite code, share type, paper name filter, or audit reason.
    #[arg(long)]
    text: Option<String>,

    /// Paper status or audit verdict.
    #[arg(long)]
    status: Option<String>,

    /// JSON request body.
    #[arg(long = "json", value_name = "JSON")]
    body: Option<String>,

    /// Query parameter; repeatable.
    #[arg(long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,

    /// Multipart text field; repeatable.
    #[arg(long = "field", value_name = "NAME=VALUE")]
    fields: Vec<String>,

    /// Multipart file; repeatable.
    #[arg(long = "file", value_name = "FIELD=PATH")]
    files: Vec<String>,

    /// Print the request descriptor instead of sending it.
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies CLI/env overrides on top of the file configuration.
    fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.base_url {
            config.server.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.server.timeout_secs = secs;
        }
        if let Some(name) = &self.platform_name {
            config.client.platform_name = name.clone();
        }
        if let Some(token) = &self.auth_token {
            config.client.auth_token = Some(token.clone());
        }
        config
    }
}

impl ApiCommand {
    /// Converts the parsed flags into [`ApiArgs`], reading any `--file` from disk.
    async fn to_api_args(&self) -> anyhow::Result<ApiArgs> {
        let body = self
            .body
            .as_deref()
            .map(serde_json::from_str::<Value>)
            .transpose()
            .context("--json is not valid JSON")?;

        let mut params = Params::new();
        for pair in &self.params {
            let (key, value) = split_pair(pair, "--param")?;
            params.insert(key.to_string(), parse_param_value(value));
        }

        let form = if self.fields.is_empty() && self.files.is_empty() {
            None
        } else {
            let mut form = MultipartForm::new();
            for pair in &self.fields {
                let (name, value) = split_pair(pair, "--field")?;
                form = form.text(name, value);
            }
            for pair in &self.files {
                let (field, path) = split_pair(pair, "--file")?;
                form = form.file(read_file_part(field, Path::new(path)).await?);
            }
            Some(form)
        };

        Ok(ApiArgs {
            id: self.id,
            limit: self.limit,
            days: self.days,
            duration: self.duration,
            text: self.text.clone(),
            status: self.status.clone(),
            body,
            params,
            form,
        })
    }
}

fn split_pair<'a>(pair: &'a str, flag: &str) -> anyhow::Result<(&'a str, &'a str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("{flag} expects KEY=VALUE, got {pair:?}"),
    }
}

/// `10` and `true` become JSON scalars; anything that is not JSON stays a string.
fn parse_param_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Number(_) | Value::Bool(_))) => v,
        _ => Value::String(raw.to_string()),
    }
}

async fn read_file_part(field: &str, path: &Path) -> anyhow::Result<FilePart> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(FilePart::new(field, file_name, None, bytes))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Configuration ─────────────────────────────────────────────────────────
    //
    // Without --config and without a resolvable platform directory, defaults
    // are used as if the file were missing.
    let config_path = cli.config.clone().or_else(|| default_config_path().ok());
    let file_config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    let config = cli.apply_overrides(file_config);

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the configured level applies.  Logs go to
    // stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.client.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Routes => print_json(&RouteTable::standard().entries()),
        Command::Resolve { path } => {
            let route = RouteTable::standard()
                .resolve(&path)
                .with_context(|| format!("cannot resolve {path:?}"))?;
            print_json(&route)
        }
        Command::Navigate { paths } => run_navigate(&config, paths).await,
        Command::Api(cmd) => run_api(&config, cmd).await,
        Command::InitConfig { force } => {
            let path = config_path.context("no --config given and no platform config directory")?;
            write_config(&path, &config, force)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn write_config(path: &Path, config: &ClientConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    save_config(path, config)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    info!(path = %path.display(), "config written");
    Ok(())
}

async fn run_navigate(config: &ClientConfig, paths: Vec<String>) -> anyhow::Result<()> {
    let navigator = Navigator::new(RouteTable::standard(), Arc::new(TracingTitleSink))
        .with_platform_name(config.client.platform_name.clone());
    let (handle, worker) = NavigationService::spawn(navigator);

    for path in &paths {
        let outcome = handle
            .navigate(path.as_str())
            .await
            .with_context(|| format!("navigation to {path:?} failed"))?;
        print_json(&outcome)?;
    }

    drop(handle);
    let navigator = worker.await.context("navigation worker panicked")?;
    info!(current = %navigator.current().full_path, "navigation finished");
    Ok(())
}

async fn run_api(config: &ClientConfig, cmd: ApiCommand) -> anyhow::Result<()> {
    if cmd.operation == "list" {
        let ops = operations(&cmd.resource).with_context(|| {
            format!(
                "unknown resource {:?} (expected one of: {})",
                cmd.resource,
                RESOURCES.join(", ")
            )
        })?;
        for op in ops {
            println!("{op}");
        }
        return Ok(());
    }

    let args = cmd.to_api_args().await?;
    let request = build_request(&cmd.resource, &cmd.operation, args)?;

    if cmd.dry_run {
        return print_json(&request);
    }

    let transport = HttpTransport::new(&config.server, config.client.auth_token.clone())
        .context("failed to set up the HTTP transport")?;
    let client = ApiClient::new(Arc::new(transport));

    match client.send(request).await {
        Ok(response) => print_json(&response.body),
        Err(TransportError::Status { status, body }) => {
            print_json(&body)?;
            bail!("backend returned HTTP {status}")
        }
        Err(e) => Err(e).context("request failed"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_routes_subcommand_parses() {
        let cli = Cli::parse_from(["exam-web", "routes"]);
        assert!(matches!(cli.command, Command::Routes));
    }

    #[test]
    fn test_navigate_requires_at_least_one_path() {
        assert!(Cli::try_parse_from(["exam-web", "navigate"]).is_err());
    }

    #[test]
    fn test_navigate_collects_paths_in_order() {
        let cli = Cli::parse_from(["exam-web", "navigate", "/exam-result/7", "/exam/7"]);
        match cli.command {
            Command::Navigate { paths } => assert_eq!(paths, vec!["/exam-result/7", "/exam/7"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_api_flags_parse() {
        // Arrange / Act
        let cli = Cli::parse_from([
            "exam-web",
            "api",
            "video",
            "get_popular_videos",
            "--limit",
            "5",
            "--dry-run",
        ]);

        // Assert
        match cli.command {
            Command::Api(cmd) => {
                assert_eq!(cmd.resource, "video");
                assert_eq!(cmd.operation, "get_popular_videos");
                assert_eq!(cmd.limit, Some(5));
                assert!(cmd.dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = Cli::parse_from([
            "exam-web",
            "--base-url",
            "https://exam.example.com",
            "--timeout-secs",
            "5",
            "routes",
        ]);

        let config = cli.apply_overrides(ClientConfig::default());

        assert_eq!(config.server.base_url, "https://exam.example.com");
        assert_eq!(config.server.timeout_secs, 5);
        assert_eq!(config.client.platform_name, "智能学习平台");
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let cli = Cli::parse_from(["exam-web", "routes"]);
        let mut file = ClientConfig::default();
        file.client.auth_token = Some("from-file".to_string());

        let config = cli.apply_overrides(file.clone());

        assert_eq!(config, file);
    }

    #[test]
    fn test_init_config_parses_force_flag() {
        let cli = Cli::parse_from(["exam-web", "init-config", "--force"]);
        assert!(matches!(cli.command, Command::InitConfig { force: true }));
    }

    #[test]
    fn test_write_config_persists_overrides_and_refuses_overwrite() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("exam-web-init-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");
        let cli = Cli::parse_from(["exam-web", "--base-url", "https://exam.example.com", "routes"]);
        let config = cli.apply_overrides(ClientConfig::default());

        // Act
        write_config(&path, &config, false).unwrap();
        let second = write_config(&path, &ClientConfig::default(), false);
        let loaded = load_config(&path).unwrap();

        // Assert
        assert!(second.is_err());
        assert_eq!(loaded, config);
        assert_eq!(loaded.server.base_url, "https://exam.example.com");

        write_config(&path, &ClientConfig::default(), true).unwrap();
        assert_eq!(load_config(&path).unwrap(), ClientConfig::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_param_value() {
        assert_eq!(parse_param_value("10"), json!(10));
        assert_eq!(parse_param_value("true"), json!(true));
        assert_eq!(parse_param_value("rust"), json!("rust"));
        assert_eq!(parse_param_value("\"quoted\""), json!("\"quoted\""));
    }

    #[test]
    fn test_split_pair_rejects_missing_equals() {
        assert!(split_pair("page", "--param").is_err());
        assert!(split_pair("=1", "--param").is_err());
        assert_eq!(split_pair("a=b=c", "--param").unwrap(), ("a", "b=c"));
    }

    #[tokio::test]
    async fn test_to_api_args_collects_params_and_body() {
        let cli = Cli::parse_from([
            "exam-web",
            "api",
            "interview",
            "get_interview_codes",
            "--param",
            "page=1",
            "--param",
            "status=unused",
            "--json",
            r#"{"count": 3}"#,
        ]);
        let Command::Api(cmd) = cli.command else {
            panic!("expected api command");
        };

        let args = cmd.to_api_args().await.unwrap();

        assert_eq!(args.params.get("page"), Some(&json!(1)));
        assert_eq!(args.params.get("status"), Some(&json!("unused")));
        assert_eq!(args.body, Some(json!({"count": 3})));
        assert!(args.form.is_none());
    }

    #[tokio::test]
    async fn test_to_api_args_rejects_invalid_json() {
        let cli = Cli::parse_from([
            "exam-web",
            "api",
            "paper",
            "create_paper",
            "--json",
            "{not json",
        ]);
        let Command::Api(cmd) = cli.command else {
            panic!("expected api command");
        };

        assert!(cmd.to_api_args().await.is_err());
    }
}
