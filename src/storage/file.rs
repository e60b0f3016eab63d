//! File Persister
//!
//! Stores the inventory as a flat text file, rewritten in full on every save.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, SyncStrategy};
use crate::error::{InventoryError, Result};
use crate::item::Item;

use super::codec::{decode_document, encode_line};
use super::Persister;

/// Flat-file persister
///
/// A missing file loads as an empty inventory. Saves truncate and overwrite
/// the file directly (no temp file, no rename), so an interrupted save can
/// leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct FilePersister {
    /// Inventory file path
    path: PathBuf,
    /// Whether to fsync after each rewrite
    sync_strategy: SyncStrategy,
}

impl FilePersister {
    /// Create a persister for the given file
    pub fn new(path: impl Into<PathBuf>, sync_strategy: SyncStrategy) -> Self {
        Self {
            path: path.into(),
            sync_strategy,
        }
    }

    /// Create a persister from a config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.file_path(), config.sync_strategy)
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, items: &[Item]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        for item in items {
            writer.write_all(encode_line(item).as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        if self.sync_strategy == SyncStrategy::EverySave {
            writer.get_ref().sync_all()?;
        }
        Ok(())
    }
}

impl Persister for FilePersister {
    fn load(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no inventory file, starting empty");
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)?;
        let items = decode_document(&text)?;

        tracing::debug!(path = %self.path.display(), items = items.len(), "inventory file loaded");
        Ok(items)
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        self.write_all(items).map_err(|e| {
            InventoryError::Persistence(format!("{}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), items = items.len(), "inventory file saved");
        Ok(())
    }
}

