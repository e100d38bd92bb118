//! Application configuration management
//!
//! This module loads configuration from an optional TOML file and applies
//! environment overrides. Provider credentials are resolved here once, at
//! startup, and handed to the dispatcher.

use crate::core::constants;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 90;

/// Default server port
const DEFAULT_PORT: u16 = 8082;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
    /// Reject provider values other than `claude`/`openai` instead of routing them to OpenAI
    #[serde(default)]
    pub strict_provider: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_request_timeout(),
            strict_provider: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub claude: ProviderConfig,
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

/// Application configuration
///
/// Credentials are `None` when not configured. An empty string counts as not
/// configured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,

    /// Anthropic API key
    pub claude_api_key: Option<String>,

    /// Anthropic API base URL
    pub claude_base_url: String,

    /// Claude vision model
    pub claude_model: String,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// OpenAI API base URL
    pub openai_base_url: String,

    /// OpenAI vision model
    pub openai_model: String,

    /// Outbound request timeout in seconds
    pub request_timeout: u64,

    /// Reject unrecognized provider values
    pub strict_provider: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or if a value is
    /// invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig =
            toml::from_str(content).context("Failed to parse TOML configuration")?;
        let config = Self::from_toml(config);
        config.validate()?;
        Ok(config)
    }

    fn from_toml(config: TomlConfig) -> Self {
        Config {
            host: config.server.host,
            port: config.server.port,
            log_level: config.server.log_level,
            claude_api_key: non_empty(config.claude.api_key),
            claude_base_url: config
                .claude
                .base_url
                .unwrap_or_else(|| constants::claude::BASE_URL.to_string()),
            claude_model: config
                .claude
                .model
                .unwrap_or_else(|| constants::claude::DEFAULT_MODEL.to_string()),
            openai_api_key: non_empty(config.openai.api_key),
            openai_base_url: config
                .openai
                .base_url
                .unwrap_or_else(|| constants::openai::BASE_URL.to_string()),
            openai_model: config
                .openai
                .model
                .unwrap_or_else(|| constants::openai::DEFAULT_MODEL.to_string()),
            request_timeout: config.request.timeout_secs,
            strict_provider: config.request.strict_provider,
        }
    }

    /// Load configuration from environment and optional config file
    ///
    /// Reads `CONFIG_PATH` (default `config.toml`) when the file exists, then
    /// applies environment overrides.
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
                .with_context(|| format!("Failed to load {}", config_path))?
        } else {
            Self::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    ///
    /// Recognized names: `CLAUDE_API_KEY`, `OPENAI_API_KEY`, `HOST`, `PORT`,
    /// `LOG_LEVEL`, `REQUEST_TIMEOUT`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("CLAUDE_API_KEY") {
            self.claude_api_key = non_empty(Some(key));
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.openai_api_key = non_empty(Some(key));
        }
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT") {
            self.request_timeout = timeout
                .trim()
                .parse()
                .with_context(|| format!("Invalid REQUEST_TIMEOUT value: {}", timeout))?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.request_timeout == 0 {
            bail!("Request timeout must be greater than zero");
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
