//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the API endpoint and key, the boards to search, request tuning, the
//! category menu and the theme.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const PREFERENCES_FILE_NAME: &str = "preferences.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/job-board-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
    pub board_keys: Vec<String>,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub freshness_secs: u64,
    pub categories: Vec<String>,
    pub theme_name: String,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_board_keys")]
    pub board_keys: Vec<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_freshness_secs")]
    pub freshness_secs: u64,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String {
    "https://api.hrflow.ai/v1".to_string()
}

fn default_board_keys() -> Vec<String> {
    vec!["887595b735d68f0bc0b0b0535f7d8f7d158a3f4e".to_string()]
}

fn default_page_size() -> u32 {
    10
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_freshness_secs() -> u64 {
    5
}

fn default_categories() -> Vec<String> {
    [
        "AI / Research & Development",
        "Artificial Intelligence",
        "Financial Services",
        "Human Resources",
        "Software Engineering",
    ]
    .iter()
    .map(|c| c.to_uppercase())
    .collect()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values and no file path.
    ///
    pub fn new() -> Config {
        Config {
            api_url: default_api_url(),
            api_key: None,
            board_keys: default_board_keys(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            freshness_secs: default_freshness_secs(),
            categories: default_categories(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Load the configuration from the disk using the custom directory if
    /// provided. A missing file is written with default values, after which
    /// loading fails because no API key is set yet.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            self.save()?;
            return Err(ConfigError::ApiKeyNotSet { path: file_path }.into());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.apply(data);

        if self.api_key.is_none() {
            return Err(ConfigError::ApiKeyNotSet { path: file_path }.into());
        }
        if self.board_keys.is_empty() {
            return Err(ConfigError::BoardKeysNotSet { path: file_path }.into());
        }
        Ok(())
    }

    fn apply(&mut self, data: FileSpec) {
        let api_key = data.api_key.trim().to_string();
        self.api_url = data.api_url;
        self.api_key = if api_key.is_empty() {
            None
        } else {
            Some(api_key)
        };
        self.board_keys = data.board_keys;
        self.page_size = data.page_size.max(1);
        self.request_timeout_secs = data.request_timeout_secs.max(1);
        self.freshness_secs = data.freshness_secs;
        self.categories = data.categories.iter().map(|c| c.to_uppercase()).collect();
        self.theme_name = data.theme_name;
        self.log_level = data.log_level;
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone().unwrap_or_default(),
            board_keys: self.board_keys.clone(),
            page_size: self.page_size,
            request_timeout_secs: self.request_timeout_secs,
            freshness_secs: self.freshness_secs,
            categories: self.categories.clone(),
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path of the preferences file next to the config file.
    ///
    pub fn preferences_path(&self) -> Result<PathBuf, AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        Ok(file_path.with_file_name(PREFERENCES_FILE_NAME))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }

    /// Returns the configured log level, falling back to info.
    ///
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
