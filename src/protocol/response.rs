//! Response definitions
//!
//! Results handed back to front ends for rendering.

use serde::Serialize;

use crate::inventory::{CategoryGroup, SortOrder};
use crate::item::Item;

/// A successful command result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Response {
    /// Item appended
    Added(Item),

    /// Sale applied; remaining quantity
    Sold { name: String, remaining: u32 },

    /// Restock applied; new quantity
    Restocked { name: String, quantity: u32 },

    /// Lookup result
    Found(Item),

    /// Snapshot of all items
    Items(Vec<Item>),

    /// Items grouped by category, first-seen order
    Categories(Vec<CategoryGroup>),

    /// Store reordered
    Sorted(SortOrder),

    /// Total stock value
    Total(f64),
}
