//! Storage Module
//!
//! Persistence layer for the inventory.
//!
//! ## Responsibilities
//! - Encode/decode items to the line-oriented text format
//! - Load the full item list on open
//! - Rewrite the full item list after every mutation
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │ <escaped-name>,<escaped-category>,<qty>,<price>\n  │
//! │ <escaped-name>,<escaped-category>,<qty>,<price>\n  │
//! │ ... (one line per item, in store order)           │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Inside text fields `|` is written as `||` and `,` as `|,`.

mod codec;
mod file;
mod memory;

pub use codec::{decode_document, decode_line, encode_document, encode_line, escape, split_fields, unescape};
pub use file::FilePersister;
pub use memory::MemoryPersister;

use crate::error::Result;
use crate::item::Item;

/// Where an inventory's items live between runs
///
/// `load` is called once when the store opens; `save` receives the complete
/// current item list after every mutation and must replace whatever was
/// stored before.
pub trait Persister {
    /// Load every persisted item, in stored order
    fn load(&self) -> Result<Vec<Item>>;

    /// Replace the persisted items with `items`
    fn save(&mut self, items: &[Item]) -> Result<()>;
}
