//! Configuration module for tourdesk
//!
//! Manages the storefront settings: which catalog to load, the currency
//! label, how long toasts stay visible and the filter panel's initial
//! ceilings. Settings are read from `config.toml` in the user's config
//! directory (or an explicit path) and may be overridden with `TOURDESK_*`
//! environment variables. The file is never written; a missing file means
//! defaults.

use crate::filter::FilterDefaults;
use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Catalog file to load instead of the built-in dataset
    pub catalog: Option<PathBuf>,

    /// Currency label printed before prices
    pub currency: String,

    /// Suppress informational output by default
    pub quiet: bool,

    /// How long a toast notification stays visible, in milliseconds
    pub toast_ttl_ms: u64,

    /// Initial slider ceilings of the filter panel
    pub filter_defaults: FilterDefaults,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            currency: "THB".to_string(),
            quiet: false,
            toast_ttl_ms: 2000,
            filter_defaults: FilterDefaults::default(),
        }
    }
}

impl StoreConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tourdesk").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file, or a system without a config directory, yields the
    /// defaults plus any environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::build(Some(&path), false),
            Err(_) => Self::build(None, false),
        }
    }

    /// Load configuration from an explicit file, which must exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(Some(path), true)
    }

    fn build(path: Option<&Path>, required: bool) -> Result<Self, ConfigError> {
        Self::build_with_env(path, required, None)
    }

    /// `env` replaces the process environment when given
    fn build_with_env(
        path: Option<&Path>,
        required: bool,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("TOURDESK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Toast visibility as a `Duration`
    #[must_use]
    pub const fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}
