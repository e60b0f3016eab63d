//! In-memory persister
//!
//! Keeps the encoded document in a string. Used by tests and by front ends
//! that want a scratch inventory with no file behind it.

use crate::error::{InventoryError, Result};
use crate::item::Item;

use super::codec::{decode_document, encode_document};
use super::Persister;

/// Persister backed by an in-memory document
#[derive(Debug, Clone, Default)]
pub struct MemoryPersister {
    /// Encoded document, same format as the inventory file
    contents: String,
    /// Number of successful saves
    save_count: usize,
    /// When set, every save fails with a persistence error
    fail_saves: bool,
}

impl MemoryPersister {
    /// Create an empty persister
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a persister preloaded with an encoded document
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The currently stored document
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Persister for MemoryPersister {
    fn load(&self) -> Result<Vec<Item>> {
        decode_document(&self.contents)
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        if self.fail_saves {
            return Err(InventoryError::Persistence("in-memory save disabled".to_string()));
        }
        self.contents = encode_document(items);
        self.save_count += 1;
        Ok(())
    }
}
