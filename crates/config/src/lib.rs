//! Bookcase Configuration System
//!
//! Settings for a tracking session: where book metadata comes from, how the
//! collection treats duplicate ISBNs, how form rules combine, and which books
//! are seeded at startup. Each section implements `ConfigSection`.
//!
//! # Architecture
//!
//! - **Sectioned**: `app`, `metadata` and `library` validate and merge themselves
//! - **Graceful degradation**: invalid values load with warnings, never panic
//! - **Atomic writes**: config files are never left half-written
//!
//! # Example
//!
//! ```rust
//! use bookcase_config::{Config, ConfigManager};
//!
//! let dir = tempfile::tempdir().expect("temp dir");
//! let manager = ConfigManager::with_directory(dir.path().to_path_buf()).expect("manager");
//! let config = manager.load_or_default();
//!
//! assert_eq!(config, Config::default());
//! println!("Seeding {} books", config.library.seeds.len());
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
pub mod app_config;
mod library_config;
mod metadata_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use validation::{ConfigSection, Validator};

pub use app_config::{AppConfig, LogLevel};
pub use library_config::{LibraryConfig, SeedBook};
pub use metadata_config::{MetadataConfig, DEFAULT_ENDPOINT};

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Metadata service settings
    pub metadata: MetadataConfig,

    /// Collection, validation and seeding settings
    pub library: LibraryConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.metadata.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.library.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.metadata.merge(other.metadata);
        self.library.merge(other.library);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            metadata: MetadataConfig::default(),
            library: LibraryConfig::default(),
        }
    }
}
