//! Tool configuration for the wfcfg CLI.
//!
//! The configuration is stored in TOML format and is loaded from the path
//! given with `--config` or from `wfcfg.toml` in the current directory.
//! Every section is optional.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::debug;
use wfcfg_core::{LockPolicy, PropertyDirectories};

use crate::discovery;
use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wfcfg.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the wfcfg CLI application.
///
/// # Example TOML Configuration
///
/// ```toml
/// [workflows]
/// directories = ["C:/Program Files (x86)/Sirsi/JWF"]
/// create_missing = false
///
/// [printers]
/// installed = ["EPSON TM-T20"]
///
/// [lock]
/// stale_after_secs = 900
/// max_backoff_millis = 3000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Where the Workflows property files live
    #[serde(default)]
    pub workflows: WorkflowsConfig,

    /// Printer list used where the system registry is unavailable
    #[serde(default)]
    pub printers: PrintersConfig,

    /// Timing of the advisory file lock
    #[serde(default)]
    pub lock: LockConfig,
}

/// Workflows installation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkflowsConfig {
    /// Workflows directories containing a `Property` folder. When empty the
    /// platform default directories are used.
    #[serde(default)]
    pub directories: Vec<PathBuf>,

    /// Create missing property files instead of skipping the directory.
    #[serde(default = "default_create_missing")]
    pub create_missing: bool,
}

impl Default for WorkflowsConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            create_missing: default_create_missing(),
        }
    }
}

fn default_create_missing() -> bool {
    !cfg!(windows)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrintersConfig {
    #[serde(default)]
    pub installed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LockConfig {
    /// Lock files older than this many seconds are removed as stale
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,

    /// Upper bound of the random wait between lock attempts
    #[serde(default = "default_max_backoff_millis")]
    pub max_backoff_millis: u64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            stale_after_secs: default_stale_after_secs(),
            max_backoff_millis: default_max_backoff_millis(),
        }
    }
}

fn default_stale_after_secs() -> u64 {
    wfcfg_core::lock::DEFAULT_STALE_AFTER.as_secs()
}

fn default_max_backoff_millis() -> u64 {
    wfcfg_core::lock::DEFAULT_MAX_BACKOFF.as_millis() as u64
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file does not exist, cannot be read
    /// or is not valid TOML for this structure.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration named on the command line, or the default
    /// file if there is one.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default configuration.
    pub fn resolve(config_path: Option<&str>) -> Result<Self, Error> {
        let path = get_config_path(config_path);
        if config_path.is_none() && !path.exists() {
            debug!(message = "No configuration file, using defaults", path = ?path);
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn lock_policy(&self) -> LockPolicy {
        LockPolicy {
            stale_after: Duration::from_secs(self.lock.stale_after_secs),
            max_backoff: Duration::from_millis(self.lock.max_backoff_millis),
        }
    }

    /// The Workflows directories to update.
    ///
    /// `overrides` (from `--dir`) replace the configured directories; with
    /// neither, the platform defaults are discovered.
    pub fn property_directories(&self, overrides: &[PathBuf]) -> PropertyDirectories {
        let directories = if !overrides.is_empty() {
            overrides.to_vec()
        } else if !self.workflows.directories.is_empty() {
            self.workflows.directories.clone()
        } else {
            discovery::default_workflows_dirs()
        };
        PropertyDirectories::new(directories).create_missing(self.workflows.create_missing)
    }
}

/// Returns the configuration file path: the given path, or
/// [`DEFAULT_CONFIG_FILENAME`] in the current directory.
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
