use std::{fs, path::PathBuf};

use common::structure::{FormatError, OutFormat};
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "dotkit";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default log level when --log-level is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Fail on missing keys unless --lenient is passed
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Template for stringified integers when --format is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_format: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_strict() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: default_pretty(),
            strict: default_strict(),
            out_format: None,
        }
    }
}

impl AppConfig {
    /// Parse the configured out-format template, if one is set
    pub fn out_format(&self) -> Result<Option<OutFormat>, FormatError> {
        self.out_format.as_deref().map(OutFormat::parse).transpose()
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the dotkit directory (~/.dotkit)
    pub dotkit_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the dotkit directory path (custom or default ~/.dotkit)
    pub fn dotkit_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Check if the dotkit directory exists
    pub fn exists(custom_path: Option<PathBuf>) -> Result<bool, StateError> {
        let dotkit_dir = Self::dotkit_dir(custom_path)?;
        Ok(dotkit_dir.exists())
    }

    /// Initialize a new dotkit directory with a config file
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let dotkit_dir = Self::dotkit_dir(custom_path)?;

        if dotkit_dir.join(CONFIG_FILE_NAME).exists() {
            return Err(StateError::AlreadyInitialized);
        }

        let config = config.unwrap_or_default();
        config.out_format()?;

        fs::create_dir_all(&dotkit_dir)?;

        let config_path = dotkit_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        tracing::info!(path = %config_path.display(), "wrote config");

        Ok(Self {
            dotkit_dir,
            config_path,
            config,
        })
    }

    /// Load existing state from the dotkit directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let dotkit_dir = Self::dotkit_dir(custom_path)?;

        if !dotkit_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = dotkit_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;
        config.out_format()?;

        Ok(Self {
            dotkit_dir,
            config_path,
            config,
        })
    }

    /// Load the configuration, falling back to defaults when
    ///  nothing has been initialized yet
    pub fn load_config(custom_path: Option<PathBuf>) -> Result<AppConfig, StateError> {
        match Self::load(custom_path) {
            Ok(state) => Ok(state.config),
            Err(StateError::NotInitialized) | Err(StateError::MissingFile(_)) => {
                Ok(AppConfig::default())
            }
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("dotkit directory not initialized. Run 'dotkit init' first")]
    NotInitialized,

    #[error("dotkit directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("invalid out_format in config: {0}")]
    InvalidOutFormat(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
