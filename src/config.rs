//! Configuration for stockroom
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{InventoryError, Result};

/// Main configuration for a stockroom instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the inventory file
    pub data_dir: PathBuf,

    /// Name of the inventory file inside `data_dir`
    pub file_name: String,

    /// How hard to push each rewrite to disk
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Presentation Configuration
    // -------------------------------------------------------------------------
    /// Items with quantity strictly below this are flagged as low stock.
    /// Display only; the store never enforces it.
    pub low_stock_threshold: u32,
}

/// Sync strategy applied after each full rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Flush userspace buffers only; the OS decides when to hit disk
    OsBuffered,

    /// fsync after every save (safest, slowest)
    EverySave,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            file_name: "inventory.txt".to_string(),
            sync_strategy: SyncStrategy::OsBuffered,
            low_stock_threshold: 5,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the inventory file
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Reject configurations that cannot name a file
    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(InventoryError::Config("file name must not be empty".to_string()));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(InventoryError::Config(format!(
                "file name must not contain a path separator: {}",
                self.file_name
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the inventory file name
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.config.file_name = name.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the low stock display threshold
    pub fn low_stock_threshold(mut self, threshold: u32) -> Self {
        self.config.low_stock_threshold = threshold;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
