use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;

use crate::cli::{Cli, LogFormat};
use crate::error::WaitError;
use crate::util::{display_target, parse_host_port};

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Defaults read from a JSON file; everything on the command line wins.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub timeout: Option<u64>,
    pub strict: bool,
    pub quiet: bool,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl FileConfig {
    pub async fn load(file_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(file_path)
            .await
            .with_context(|| format!("Config file not readable: {}", file_path.display()))?;
        let config: FileConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", file_path.display()))?;
        Ok(config)
    }
}

/// Everything a single run needs, fixed before the first probe.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitConfig {
    pub host: String,
    pub port: u16,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    pub quiet: bool,
    pub strict: bool,
    pub command: Vec<String>,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl WaitConfig {
    pub async fn from_cli(cli: Cli) -> Result<Self, WaitError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path).await?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: Cli, file: FileConfig) -> Result<Self, WaitError> {
        let (mut host, mut port) = match cli.target.as_deref() {
            Some(target) => {
                let (host, port) = parse_host_port(target)?;
                (Some(host), port)
            }
            None => (None, None),
        };
        if cli.host.is_some() {
            host = cli.host;
        }
        if cli.port.is_some() {
            port = cli.port;
        }

        let (host, port) = match (host.filter(|h| !h.is_empty()), port) {
            (Some(host), Some(port)) => (host, port),
            _ => {
                return Err(WaitError::Usage(
                    "Error: you need to provide a host and port to test.".to_string(),
                ));
            }
        };

        let timeout_secs = cli.timeout.or(file.timeout).unwrap_or(DEFAULT_TIMEOUT_SECS);
        let config = WaitConfig {
            host,
            port,
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            quiet: cli.quiet || file.quiet,
            strict: cli.strict || file.strict,
            command: cli.command,
            log_level: cli
                .log_level
                .or(file.log_level)
                .unwrap_or_else(default_log_level),
            log_format: cli.log_format.or(file.log_format).unwrap_or_default(),
        };
        config.validate_log_level()?;
        Ok(config)
    }

    /// Get the log level as a tracing::Level
    pub fn get_tracing_level(&self) -> Result<tracing::Level, WaitError> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" | "warning" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(WaitError::Usage(format!(
                "Invalid log level: {}. Valid levels are: trace, debug, info, warn, error",
                self.log_level
            ))),
        }
    }

    pub fn validate_log_level(&self) -> Result<(), WaitError> {
        self.get_tracing_level().map(|_| ())
    }

    pub fn target(&self) -> String {
        display_target(&self.host, self.port)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
