//! Configuration module for checkpoint.

use serde::Deserialize;
use std::path::Path;

use crate::{CheckpointError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/checkpoint.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// How the session cookie value is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Raw user ID.
    #[default]
    Plain,
    /// Signed token with expiry.
    Signed,
}

/// When the `Secure` cookie attribute is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecureCookies {
    /// Only for requests that arrived over HTTPS.
    #[default]
    Auto,
    /// Always.
    Always,
    /// Never.
    Never,
}

/// Session cookie configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Cookie name.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Cookie lifetime in seconds (also the signed token lifetime).
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
    /// Token encoding.
    #[serde(default)]
    pub mode: SessionMode,
    /// Signing secret (required in signed mode).
    #[serde(default)]
    pub secret: String,
    /// `Secure` attribute policy.
    #[serde(default)]
    pub secure: SecureCookies,
}

fn default_cookie_name() -> String {
    "auth_token".to_string()
}

/// Upper bound on the session lifetime; browsers cap cookie `Max-Age` at 400 days.
pub const MAX_SESSION_AGE_SECS: u64 = 400 * 24 * 60 * 60;

fn default_max_age() -> u64 {
    60 * 60 * 24 // 24 hours
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_secs: default_max_age(),
            mode: SessionMode::default(),
            secret: String::new(),
            secure: SecureCookies::default(),
        }
    }
}

/// Route guard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardConfig {
    /// Path prefixes that require a session.
    #[serde(default = "default_protected_paths")]
    pub protected_paths: Vec<String>,
    /// Login page path.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Where authenticated users visiting the login page are sent.
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_protected_paths() -> Vec<String> {
    vec![
        "/home".to_string(),
        "/profile".to_string(),
        "/settings".to_string(),
    ]
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/home".to_string()
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            protected_paths: default_protected_paths(),
            login_path: default_login_path(),
            home_path: default_home_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file, written in addition to stdout.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Route guard configuration.
    #[serde(default)]
    pub guard: GuardConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, or the defaults if it does not exist.
    ///
    /// Any other failure, including a file that does not parse, is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load(path) {
            Err(CheckpointError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CheckpointError::Config(format!("parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CHECKPOINT_SESSION_SECRET`: session signing secret
    /// - `CHECKPOINT_ENV`: `production` forces `Secure` cookies
    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var("CHECKPOINT_SESSION_SECRET") {
            if !secret.is_empty() {
                self.session.secret = secret;
            }
        }

        if let Ok(env) = std::env::var("CHECKPOINT_ENV") {
            if env.eq_ignore_ascii_case("production") {
                self.session.secure = SecureCookies::Always;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.session.mode == SessionMode::Signed && self.session.secret.is_empty() {
            return Err(CheckpointError::Config(
                "session mode is 'signed' but no secret is set. \
                 Set session.secret in config.toml or CHECKPOINT_SESSION_SECRET."
                    .to_string(),
            ));
        }

        if self.session.cookie_name.is_empty() {
            return Err(CheckpointError::Config(
                "session.cookie_name must not be empty".to_string(),
            ));
        }

        if self.session.max_age_secs == 0 {
            return Err(CheckpointError::Config(
                "session.max_age_secs must be greater than zero".to_string(),
            ));
        }

        if self.session.max_age_secs > MAX_SESSION_AGE_SECS {
            return Err(CheckpointError::Config(format!(
                "session.max_age_secs must not exceed {MAX_SESSION_AGE_SECS} (400 days)"
            )));
        }

        let guard = &self.guard;
        for path in guard
            .protected_paths
            .iter()
            .chain([&guard.login_path, &guard.home_path])
        {
            if !path.starts_with('/') {
                return Err(CheckpointError::Config(format!(
                    "guard path '{path}' must start with '/'"
                )));
            }
        }

        let routes = crate::auth::RouteTable::from_config(guard);
        if routes.is_protected(&guard.login_path) {
            return Err(CheckpointError::Config(format!(
                "login path '{}' lies under a protected prefix",
                guard.login_path
            )));
        }

        Ok(())
    }

    /// Socket address string to bind the server to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
