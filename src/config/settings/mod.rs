
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::browser::pagination::PAGE_SIZES;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Settings for the browsing session and its rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Page size a new session starts with
    pub default_page_size: u32,
    /// Number of embedding values shown per row in the list view
    pub embedding_preview_len: usize,
    /// Buffered state change events per subscriber
    pub event_capacity: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            embedding_preview_len: 3,
            event_capacity: 64,
        }
    }
}

/// Shape of the simulated dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatasetConfig {
    pub records_per_collection: usize,
    pub embedding_dimension: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            records_per_collection: 100,
            embedding_dimension: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found or could not be created")]
    DirectoryError,
    #[error("Invalid default page size: {0} (must be one of 10, 20, 50, 100 or 200)")]
    InvalidPageSize(u32),
    #[error("Invalid embedding preview length: {0} (must be between 1 and 32)")]
    InvalidPreviewLength(usize),
    #[error("Invalid event capacity: {0} (must be between 1 and 4096)")]
    InvalidEventCapacity(usize),
    #[error("Invalid records per collection: {0} (must be between 0 and 100000)")]
    InvalidRecordCount(usize),
    #[error("Invalid embedding dimension: {0} (must be between 1 and 4096)")]
    InvalidEmbeddingDimension(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Config {
    /// Default configuration directory, `~/.record-browser`
    #[inline]
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(".record-browser"))
            .or_else(|| dirs::config_dir().map(|config| config.join("record-browser")))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Load `config.toml` from the default directory
    #[inline]
    pub fn load_default() -> Result<Self> {
        let config_dir = Self::config_dir()?;
        Self::load(config_dir)
    }

    /// Load `config.toml` from `config_dir`, falling back to defaults when it is missing
    #[inline]
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join("config.toml");

        if !config_path.exists() {
            return Ok(Self {
                base_dir: config_dir.as_ref().to_path_buf(),
                ..Self::default()
            });
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        config.base_dir = config_dir.as_ref().to_path_buf();

        config
            .validate()
            .with_context(|| "Configuration validation failed")?;

        Ok(config)
    }

    #[inline]
    pub fn save(&self) -> Result<()> {
        self.validate()
            .context("Configuration validation failed before saving")?;

        let config_dir = self.get_base_dir();

        fs::create_dir_all(config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let config_path = self.config_file_path();
        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    #[inline]
    pub fn get_base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[inline]
    pub fn config_file_path(&self) -> PathBuf {
        self.get_base_dir().join("config.toml")
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.browser.validate()?;
        self.dataset.validate()?;
        Ok(())
    }
}

impl BrowserConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !PAGE_SIZES.contains(&self.default_page_size) {
            return Err(ConfigError::InvalidPageSize(self.default_page_size));
        }

        if !(1..=32).contains(&self.embedding_preview_len) {
            return Err(ConfigError::InvalidPreviewLength(
                self.embedding_preview_len,
            ));
        }

        if !(1..=4096).contains(&self.event_capacity) {
            return Err(ConfigError::InvalidEventCapacity(self.event_capacity));
        }

        Ok(())
    }

    pub fn set_default_page_size(&mut self, size: u32) -> Result<(), ConfigError> {
        if !PAGE_SIZES.contains(&size) {
            return Err(ConfigError::InvalidPageSize(size));
        }
        self.default_page_size = size;
        Ok(())
    }

    pub fn set_embedding_preview_len(&mut self, len: usize) -> Result<(), ConfigError> {
        if !(1..=32).contains(&len) {
            return Err(ConfigError::InvalidPreviewLength(len));
        }
        self.embedding_preview_len = len;
        Ok(())
    }

    pub fn set_event_capacity(&mut self, capacity: usize) -> Result<(), ConfigError> {
        if !(1..=4096).contains(&capacity) {
            return Err(ConfigError::InvalidEventCapacity(capacity));
        }
        self.event_capacity = capacity;
        Ok(())
    }
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.records_per_collection > 100_000 {
            return Err(ConfigError::InvalidRecordCount(self.records_per_collection));
        }

        if !(1..=4096).contains(&self.embedding_dimension) {
            return Err(ConfigError::InvalidEmbeddingDimension(
                self.embedding_dimension,
            ));
        }

        Ok(())
    }

    pub fn set_records_per_collection(&mut self, count: usize) -> Result<(), ConfigError> {
        if count > 100_000 {
            return Err(ConfigError::InvalidRecordCount(count));
        }
        self.records_per_collection = count;
        Ok(())
    }

    pub fn set_embedding_dimension(&mut self, dimension: usize) -> Result<(), ConfigError> {
        if !(1..=4096).contains(&dimension) {
            return Err(ConfigError::InvalidEmbeddingDimension(dimension));
        }
        self.embedding_dimension = dimension;
        Ok(())
    }
}
