//! Layered configuration for graphkit tools.
//!
//! Values resolve in this order, later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`GraphkitConfig::default`])
//! 2. A TOML file (`graphkit.toml` in the working directory, or an explicit path)
//! 3. Environment variables prefixed with `GRAPHKIT_`, with `__` separating
//!    nested keys (`GRAPHKIT_STORAGE__BACKEND=matrix`)
//!
//! # Example
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [storage]
//! backend = "matrix"
//! initial_capacity = 64
//!
//! [traversal]
//! default_order = "bfs"
//! start = 0
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traversal::TraversalKind;

/// File name searched for by [`GraphkitConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "graphkit.toml";

/// Prefix of the environment variables read by the loaders.
pub const ENV_PREFIX: &str = "GRAPHKIT_";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphkitConfig {
    /// Logging section.
    pub logging: LoggingConfig,
    /// Storage backend section.
    pub storage: StorageConfig,
    /// Traversal defaults section.
    pub traversal: TraversalConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Dynamic storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Dense adjacency matrix.
    Matrix,
    /// Sparse adjacency list.
    #[default]
    List,
}

impl BackendKind {
    /// Name used in configuration files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "matrix" => Ok(Self::Matrix),
            "list" => Ok(Self::List),
            other => Err(Error::Config(format!(
                "unknown storage backend '{other}' (expected matrix or list)"
            ))),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend used for dynamically sized graphs.
    pub backend: BackendKind,
    /// Vertex capacity reserved up front.
    pub initial_capacity: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            initial_capacity: 16,
        }
    }
}

/// Traversal defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Order used when none is requested explicitly.
    pub default_order: TraversalKind,
    /// Start vertex for orders that need one.
    pub start: usize,
}

impl GraphkitConfig {
    /// Loads defaults, then `graphkit.toml` if present, then the environment.
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment(Toml::file(DEFAULT_CONFIG_FILE)).merge(Self::env()))
    }

    /// Loads defaults, then the TOML file at `path`, then the environment.
    ///
    /// Unlike [`load`](Self::load), a missing file is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::require_file(path)?;
        Self::extract(Self::figment(Toml::file_exact(path)).merge(Self::env()))
    }

    /// Loads defaults overlaid with the TOML file at `path`, ignoring the
    /// environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::require_file(path)?;
        Self::extract(Self::figment(Toml::file_exact(path)))
    }

    /// Parses a configuration from TOML text overlaid on the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::extract(Self::figment(Toml::string(toml)))
    }

    /// Checks values that deserialize fine but are unusable.
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.storage.initial_capacity == 0 {
            return Err(Error::Config(
                "storage.initial_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    fn figment(file: impl figment::Provider) -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(file)
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    fn require_file(path: &Path) -> Result<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )))
        }
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(
            backend = %config.storage.backend,
            order = %config.traversal.default_order,
            "configuration loaded"
        );
        Ok(config)
    }
}
