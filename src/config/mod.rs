//! Configuration management module.
//!
//! This module handles loading the configuration file, including the start
//! and fallback pages, log level, theme and shortcut binding overrides.

mod error;
pub mod shortcuts;

pub use error::ConfigError;
pub use shortcuts::{Binding, Bindings};

use crate::error::AppError;
use crate::state::PageId;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/omnisearch-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub start_page: PageId,
    pub fallback_page: PageId,
    pub log_level: LevelFilter,
    pub theme_name: String,
    pub shortcuts: Bindings,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_page_name")]
    pub start_page: String,
    #[serde(default = "default_page_name")]
    pub fallback_page: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub shortcuts: Bindings,
}

fn default_page_name() -> String {
    PageId::Home.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

impl Default for FileSpec {
    fn default() -> Self {
        FileSpec {
            start_page: default_page_name(),
            fallback_page: default_page_name(),
            log_level: default_log_level(),
            theme_name: default_theme_name(),
            shortcuts: Bindings::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default settings.
    ///
    pub fn new() -> Config {
        Config {
            start_page: PageId::Home,
            fallback_page: PageId::Home,
            log_level: LevelFilter::Info,
            theme_name: default_theme_name(),
            shortcuts: shortcuts::default_bindings(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one with the
    /// default settings so it can be edited.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply_yaml(&contents)?;
        } else {
            self.create_file()?;
        }

        Ok(())
    }

    /// Parse YAML configuration and apply it on top of the defaults.
    ///
    pub fn apply_yaml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = if contents.trim().is_empty() {
            FileSpec::default()
        } else {
            serde_yaml::from_str(contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?
        };
        self.apply(data)
    }

    fn apply(&mut self, data: FileSpec) -> Result<(), ConfigError> {
        self.start_page = parse_page("start_page", &data.start_page)?;
        self.fallback_page = parse_page("fallback_page", &data.fallback_page)?;
        self.log_level = LevelFilter::from_str(&data.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(data.log_level.clone()))?;

        if crate::ui::Theme::by_name(&data.theme_name).is_none() {
            return Err(ConfigError::UnknownTheme(data.theme_name));
        }
        self.theme_name = data.theme_name;

        let mut bindings = shortcuts::default_bindings();
        let unknown = shortcuts::merge_bindings(&mut bindings, &data.shortcuts);
        if !unknown.is_empty() {
            return Err(ConfigError::UnknownShortcuts(unknown));
        }
        self.shortcuts = bindings;
        Ok(())
    }

    /// Attempt to serialize the default configuration and write it to the
    /// disk, returning any unrecoverable errors.
    ///
    fn create_file(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            start_page: self.start_page.to_string(),
            fallback_page: self.fallback_page.to_string(),
            log_level: self.log_level.to_string().to_lowercase(),
            theme_name: self.theme_name.clone(),
            shortcuts: Bindings::new(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

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

    /// Returns the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or
    /// an error if the home directory could not be found.
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

fn parse_page(field: &'static str, value: &str) -> Result<PageId, ConfigError> {
    PageId::from_str(value).map_err(|_| ConfigError::InvalidPage {
        field,
        value: value.to_string(),
    })
}
