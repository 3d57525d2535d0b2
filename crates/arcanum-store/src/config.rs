//! Backend configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `ARCANUM_*` environment variables.

use crate::errors::{config_error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment prefix for backend settings (`ARCANUM_PATH`, `ARCANUM_WAL`, ...)
pub const ENV_PREFIX: &str = "ARCANUM";

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Where and how the store keeps its data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    /// Database file; `None` keeps everything in memory until shutdown
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Write-ahead logging for file databases
    #[serde(default = "default_wal")]
    pub wal: bool,
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

fn default_wal() -> bool {
    true
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl BackendConfig {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            wal: default_wal(),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::in_memory()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.is_none()
    }

    /// Load settings from `file` (if it exists) layered with the environment
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder()
            .set_default("busy_timeout_ms", DEFAULT_BUSY_TIMEOUT_MS)
            .map_err(config_error)?
            .set_default("wal", default_wal())
            .map_err(config_error)?;

        if let Some(file) = file {
            builder = builder.add_source(
                ::config::File::from(file)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            );
        }

        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(config_error)?;

        let loaded: BackendConfig = settings.try_deserialize().map_err(config_error)?;
        tracing::debug!(
            path = ?loaded.path,
            busy_timeout_ms = loaded.busy_timeout_ms,
            wal = loaded.wal,
            "backend config loaded"
        );
        Ok(loaded)
    }
}
