//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration manager
///
/// This is the primary interface for loading, saving, and managing configuration.
/// It handles file paths, defaults, and validation.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the default config directory
    ///
    /// - Linux: `~/.config/bookcase/`
    /// - macOS: `~/Library/Application Support/bookcase/`
    /// - Windows: `%APPDATA%\bookcase\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        Ok(Self {
            persistence: ConfigPersistence::new(config_path.clone()),
            config_dir,
            config_path,
        })
    }

    /// Creates a config manager for an explicit config file
    pub fn with_file(config_path: impl AsRef<Path>) -> ConfigResult<Self> {
        let config_path = config_path.as_ref().to_path_buf();
        let config_dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => {
                return Err(ConfigError::PathResolutionError {
                    reason: format!("{} is not a file path", config_path.display()),
                })
            }
        };

        Ok(Self {
            persistence: ConfigPersistence::new(config_path.clone()),
            config_dir,
            config_path,
        })
    }

    /// Returns the default config directory based on the platform
    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "bookcase")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: "Could not determine user config directory".to_string(),
            })
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file is corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file
    ///
    /// This performs validation before saving and uses atomic writes
    /// to prevent corruption.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Updates the configuration using a closure
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use bookcase_config::ConfigManager;
    /// # use bookcase_library::DuplicatePolicy;
    /// # let manager = ConfigManager::new().unwrap();
    /// manager.update(|config| {
    ///     config.library.duplicate_policy = DuplicatePolicy::Replace;
    /// }).expect("Failed to update config");
    /// ```
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Generates a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path.exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path.display()
            );
            return Ok(false);
        }

        self.persistence.generate_default()?;
        Ok(true)
    }

    /// Resets the configuration to defaults
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Validates the current configuration file
    ///
    /// Returns all validation errors found, or Ok if valid.
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let config = self.load()?;

        match config.validate() {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.iter().map(|e| e.to_string()).collect()),
        }
    }
}
