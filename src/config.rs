// config.rs

//! User configuration, stored as YAML under `~/.config/vue-primer`.

use color_eyre::eyre::{eyre, Result};
use log::{LevelFilter, ParseLevelError};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::theme::DEFAULT_STORAGE_KEY;

const FILE_NAME: &str = "config.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "vue-primer";
const PREFERENCES_FILE: &str = "preferences.yml";
const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key of the theme preference in the preferences file
    pub storage_key: String,
    /// Whether the theme preference survives restarts
    pub persist_theme: bool,
    /// Replacement for the bundled quizzes
    pub quiz_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_theme: true,
            quiz_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string().to_lowercase(),
        }
    }
}

/// Files living in the application config directory.
#[derive(Clone, Debug)]
pub struct ConfigPaths {
    pub config_file_path: PathBuf,
    pub preferences_path: PathBuf,
    pub log_file_path: PathBuf,
}

impl ConfigPaths {
    /// Paths inside `app_config_dir`, which is created if missing.
    pub fn in_dir(app_config_dir: &Path) -> Result<Self> {
        if !app_config_dir.exists() {
            fs::create_dir_all(app_config_dir)?;
        }
        Ok(ConfigPaths {
            config_file_path: app_config_dir.join(FILE_NAME),
            preferences_path: app_config_dir.join(PREFERENCES_FILE),
            log_file_path: app_config_dir.join(LOG_FILE),
        })
    }

    /// Default paths under `$HOME/.config/vue-primer`, or next to an
    /// explicitly given config file.
    pub fn get_or_build(config_file: Option<&Path>) -> Result<Self> {
        if let Some(file) = config_file {
            let dir = match file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let mut paths = ConfigPaths::in_dir(&dir)?;
            paths.config_file_path = file.to_path_buf();
            return Ok(paths);
        }
        match dirs::home_dir() {
            Some(home) => ConfigPaths::in_dir(&home.join(CONFIG_DIR).join(APP_CONFIG_DIR)),
            None => Err(eyre!("No $HOME directory found for config")),
        }
    }
}

impl AppConfig {
    /// Parses `log_level`; callers fall back to `DEFAULT_LOG_LEVEL` on error.
    pub fn log_level_filter(&self) -> Result<LevelFilter, ParseLevelError> {
        self.log_level.parse()
    }

    /// Loads the config file, writing one with default values if missing.
    pub fn load(path: &Path) -> Result<AppConfig> {
        if path.exists() {
            let config_string = fs::read_to_string(path)?;
            if config_string.trim().is_empty() {
                return Ok(AppConfig::default());
            }
            let config: AppConfig = serde_yaml::from_str(&config_string)?;
            Ok(config)
        } else {
            let config = AppConfig::default();
            fs::write(path, serde_yaml::to_string(&config)?)?;
            Ok(config)
        }
    }
}
