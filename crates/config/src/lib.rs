//! Configuration loading, validation, and management for Alumnet.
//!
//! Loads configuration from `alumnet.toml` (or the path given by
//! `--config` / `ALUMNET_CONFIG`) with environment variable overrides.
//! Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "ALUMNET_CONFIG";

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "alumnet.toml";

/// The root configuration structure.
///
/// Maps directly to `alumnet.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Language-model endpoint settings
    #[serde(default)]
    pub model: ModelConfig,

    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Collection names in the document store
    #[serde(default)]
    pub collections: CollectionNames,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Deployment environment flag ("development", "production", ...)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Allowed CORS origin; `*` allows any origin
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_port() -> u16 {
    5000
}
fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_environment() -> String {
    "development".into()
}
fn default_cors_origin() -> String {
    "http://localhost:3000".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            environment: default_environment(),
            cors_origin: default_cors_origin(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Bearer credential for the model endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub name: String,

    /// OpenAI-compatible base URL (without `/chat/completions`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_base_url() -> String {
    "https://api.openai.com/v1".into()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            name: default_model(),
            base_url: default_base_url(),
        }
    }
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &redact(&self.api_key))
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// "memory" or "sqlite"
    #[serde(default = "default_store_backend")]
    pub backend: String,

    /// SQLite connection URL (sqlite backend only)
    #[serde(default = "default_store_url")]
    pub url: String,

    /// JSON fixture loaded into the memory backend at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

fn default_store_backend() -> String {
    "memory".into()
}
fn default_store_url() -> String {
    "sqlite://alumnet.db".into()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            url: default_store_url(),
            seed_file: None,
        }
    }
}

/// Names of the six collections the chat context is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionNames {
    #[serde(default = "default_events")]
    pub events: String,
    #[serde(default = "default_fundraising")]
    pub fundraising: String,
    #[serde(default = "default_internships")]
    pub internships: String,
    #[serde(default = "default_notifications")]
    pub notifications: String,
    #[serde(default = "default_users")]
    pub users: String,
    #[serde(default = "default_mentorship")]
    pub mentorship: String,
}

fn default_events() -> String {
    "events".into()
}
fn default_fundraising() -> String {
    "fundraising".into()
}
fn default_internships() -> String {
    "internships".into()
}
fn default_notifications() -> String {
    "notifications".into()
}
fn default_users() -> String {
    "users".into()
}
fn default_mentorship() -> String {
    "mentorship".into()
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            events: default_events(),
            fundraising: default_fundraising(),
            internships: default_internships(),
            notifications: default_notifications(),
            users: default_users(),
            mentorship: default_mentorship(),
        }
    }
}

impl CollectionNames {
    /// All six names, in bundle order.
    pub fn all(&self) -> [&str; 6] {
        [
            &self.events,
            &self.fundraising,
            &self.internships,
            &self.notifications,
            &self.users,
            &self.mentorship,
        ]
    }
}

impl AppConfig {
    /// Load configuration from the resolved path, then apply environment
    /// overrides from the process environment.
    ///
    /// Path resolution: `explicit`, else `$ALUMNET_CONFIG`, else
    /// `./alumnet.toml`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = Self::config_path(explicit);
        let mut config = Self::read_file(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path, without environment
    /// overrides.
    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// The config file path [`AppConfig::load`] reads.
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        Self::resolve_path(explicit, |key| std::env::var(key).ok())
    }

    fn resolve_path(explicit: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Apply environment variable overrides (highest priority).
    ///
    /// `lookup` resolves a variable name to its value; the process
    /// environment in production, a map in tests.
    fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("PORT must be a port number, got '{port}'"))
            })?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(env) = lookup("APP_ENV") {
            self.server.environment = env;
        }
        if let Some(origin) = lookup("CORS_ORIGIN") {
            self.server.cors_origin = origin;
        }

        if let Some(key) = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.model.api_key = Some(key);
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.model.name = model;
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.model.base_url = url;
        }

        if let Some(backend) = lookup("STORE_BACKEND") {
            self.store.backend = backend;
        }
        if let Some(url) = lookup("STORE_URL") {
            self.store.url = url;
        }
        if let Some(seed) = lookup("STORE_SEED_FILE") {
            self.store.seed_file = Some(PathBuf::from(seed));
        }

        let names = &mut self.collections;
        for (var, slot) in [
            ("COLLECTION_EVENTS", &mut names.events),
            ("COLLECTION_FUNDRAISING", &mut names.fundraising),
            ("COLLECTION_INTERNSHIPS", &mut names.internships),
            ("COLLECTION_NOTIFICATIONS", &mut names.notifications),
            ("COLLECTION_USERS", &mut names.users),
            ("COLLECTION_MENTORSHIP", &mut names.mentorship),
        ] {
            if let Some(name) = lookup(var) {
                *slot = name;
            }
        }

        Ok(())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".into(),
            ));
        }

        if self.model.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "model.name must not be empty".into(),
            ));
        }

        if !matches!(self.store.backend.as_str(), "memory" | "sqlite") {
            return Err(ConfigError::ValidationError(format!(
                "store.backend must be 'memory' or 'sqlite', got '{}'",
                self.store.backend
            )));
        }

        if self.collections.all().iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "collection names must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Check if a model credential is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.model.api_key.is_some()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
