//! Command definitions
//!
//! Requests a front end can make of the store.

use crate::inventory::SortOrder;

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new item
    Add {
        name: String,
        category: String,
        quantity: u32,
        price: f64,
    },

    /// Sell `amount` units of the named item
    Sell { name: String, amount: u32 },

    /// Add `amount` units to the named item
    Restock { name: String, amount: u32 },

    /// Look up an item by name
    Find { name: String },

    /// List all items
    List,

    /// Group items by category
    Categories,

    /// Reorder the store
    Sort { order: SortOrder },

    /// Total stock value
    Total,
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Sell { .. } => "sell",
            Command::Restock { .. } => "restock",
            Command::Find { .. } => "find",
            Command::List => "list",
            Command::Categories => "categories",
            Command::Sort { .. } => "sort",
            Command::Total => "total",
        }
    }

    /// Whether executing this command rewrites the persisted inventory
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Sell { .. } | Command::Restock { .. } | Command::Sort { .. }
        )
    }
}
