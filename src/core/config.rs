//! core::config
//!
//! Client-side environment configuration.
//!
//! # Location
//!
//! The config file is found at (in order of precedence):
//! 1. `$OAM_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/oam/config.toml`
//! 3. `~/.oam/config.toml`
//!
//! # Overrides
//!
//! The environment variables `OAM_NAMESPACE`, `OAM_API_BASE` and
//! `OAM_TOKEN` override file values; the global `--namespace` flag
//! overrides everything.
//!
//! # Example
//!
//! ```toml
//! namespace = "staging"
//! api_base = "https://oam.example.com"
//! token = "bearer-token"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default namespace when nothing else is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Default API base: a local `kubectl proxy`-style endpoint.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8001";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// On-disk configuration (user scope).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Namespace commands operate in.
    pub namespace: Option<String>,

    /// Base URL of the resource API server.
    pub api_base: Option<String>,

    /// Optional bearer token sent with every API request.
    pub token: Option<String>,
}

impl EnvConfig {
    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The fully resolved environment a command runs against.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    /// Active namespace.
    pub namespace: String,

    /// Resource API base URL.
    pub api_base: String,

    /// Optional bearer token.
    pub token: Option<String>,

    /// Config file the settings came from, if one was found.
    pub config_path: Option<PathBuf>,
}

impl Environment {
    /// Load the environment: config file, env-var overrides, then the
    /// `--namespace` flag.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicitly named config file (`$OAM_CONFIG`)
    /// is unreadable, when any found file fails to parse, or when the
    /// resolved values fail validation.
    pub fn load(flag_namespace: Option<String>) -> Result<Self, ConfigError> {
        let (file, config_path) = match config_path() {
            Some(path) => (EnvConfig::from_file(&path)?, Some(path)),
            None => (EnvConfig::default(), None),
        };
        Self::assemble(file, env_overrides(), flag_namespace, config_path)
    }

    /// Combine the configuration layers. Split out from [`load`] so tests
    /// can drive it without touching the process environment.
    ///
    /// [`load`]: Environment::load
    pub fn assemble(
        file: EnvConfig,
        overrides: EnvConfig,
        flag_namespace: Option<String>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let namespace = flag_namespace
            .or(overrides.namespace)
            .or(file.namespace)
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let api_base = overrides
            .api_base
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let token = overrides.token.or(file.token);

        let env = Self {
            namespace,
            api_base,
            token,
            config_path,
        };
        env.validate()?;
        Ok(env)
    }

    /// Validate the resolved values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::InvalidValue(
                "namespace must not be empty".to_string(),
            ));
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigError::InvalidValue(format!(
                "api_base must be an http(s) URL, got {:?}",
                self.api_base
            )));
        }
        Ok(())
    }
}

/// Locate the config file per the precedence rules, if any exists.
///
/// An explicit `$OAM_CONFIG` is returned even when the file is missing so
/// the resulting read error reaches the user instead of being silently
/// ignored.
fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("OAM_CONFIG") {
        if !explicit.is_empty() {
            return Some(PathBuf::from(explicit));
        }
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            let candidate = PathBuf::from(xdg).join("oam").join("config.toml");
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    let home = dirs::home_dir()?;
    let candidate = home.join(".oam").join("config.toml");
    candidate.exists().then_some(candidate)
}

/// Read the override layer from the process environment.
fn env_overrides() -> EnvConfig {
    let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
    EnvConfig {
        namespace: non_empty("OAM_NAMESPACE"),
        api_base: non_empty("OAM_API_BASE"),
        token: non_empty("OAM_TOKEN"),
    }
}
