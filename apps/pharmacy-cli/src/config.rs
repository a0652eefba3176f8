//! # Configuration Resolution
//!
//! Works out which [`StoreConfig`] a run uses.
//!
//! ## Load Order (later overrides earlier)
//! 1. Defaults, with `data_dir` set to the platform data directory
//! 2. Config file: `--config FILE`, or `<config dir>/pharmacy.toml` if it exists
//! 3. `PHARMACY_DATA_DIR` environment variable
//! 4. `--data-dir DIR` flag
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Platform directories (directories::ProjectDirs)                        │
//! │                                                                         │
//! │  Linux:   ~/.config/pharmacy/pharmacy.toml                             │
//! │           ~/.local/share/pharmacy/                                     │
//! │  macOS:   ~/Library/Application Support/org.pharmacy.pharmacy/         │
//! │  Windows: %APPDATA%\pharmacy\pharmacy\config\pharmacy.toml             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use pharmacy_store::StoreConfig;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "PHARMACY_DATA_DIR";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "pharmacy.toml";

/// Every place a setting can come from, gathered before resolving.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// `--data-dir`
    pub data_dir_flag: Option<PathBuf>,

    /// `PHARMACY_DATA_DIR`
    pub data_dir_env: Option<PathBuf>,

    /// `--config`; must exist when given
    pub config_file: Option<PathBuf>,

    /// Platform config file; used only if it exists
    pub default_config_file: Option<PathBuf>,

    /// Platform data directory
    pub default_data_dir: Option<PathBuf>,
}

impl ConfigSources {
    /// Gathers sources from the flags, the environment and the platform.
    pub fn gather(data_dir_flag: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        let dirs = project_dirs();

        ConfigSources {
            data_dir_flag,
            data_dir_env: std::env::var_os(DATA_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            config_file,
            default_config_file: dirs
                .as_ref()
                .map(|d| d.config_dir().join(CONFIG_FILE_NAME)),
            default_data_dir: dirs.as_ref().map(|d| d.data_dir().to_path_buf()),
        }
    }

    /// Resolves the sources into one configuration.
    pub fn resolve(&self) -> CliResult<StoreConfig> {
        let mut config = match self.config_file_to_load() {
            Some(path) => {
                info!(?path, "Loading store config from file");
                StoreConfig::from_toml_file(&path)?
            }
            None => {
                let data_dir = self.default_data_dir.clone().ok_or_else(|| {
                    CliError::config(format!(
                        "No data directory: pass --data-dir or set {}",
                        DATA_DIR_ENV
                    ))
                })?;
                StoreConfig::new(data_dir)
            }
        };

        if let Some(dir) = &self.data_dir_env {
            debug!(?dir, "Data directory from environment");
            config.data_dir = dir.clone();
        }

        if let Some(dir) = &self.data_dir_flag {
            debug!(?dir, "Data directory from flag");
            config.data_dir = dir.clone();
        }

        Ok(config)
    }

    fn config_file_to_load(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_file {
            return Some(path.clone());
        }

        self.default_config_file
            .as_ref()
            .filter(|path| path.exists())
            .cloned()
    }

    /// True when some source names a data directory.
    fn has_explicit_data_dir(&self) -> bool {
        self.data_dir_flag.is_some() || self.data_dir_env.is_some()
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "pharmacy", "pharmacy")
}

/// Resolves the configuration for this run.
///
/// With an explicit data directory a missing platform directory is not an
/// error.
pub fn resolve(
    data_dir_flag: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> CliResult<StoreConfig> {
    let mut sources = ConfigSources::gather(data_dir_flag, config_file);

    if sources.has_explicit_data_dir() && sources.default_data_dir.is_none() {
        sources.default_data_dir = Some(PathBuf::from("."));
    }

    let config = sources.resolve()?;
    debug!(data_dir = %config.data_dir.display(), "Resolved store config");
    Ok(config)
}
