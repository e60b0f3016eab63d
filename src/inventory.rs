//! Inventory Module
//!
//! The item store: an ordered list of items plus the persister that keeps
//! it on disk.
//!
//! ## Responsibilities
//! - Load the item list once, on open
//! - Lookup, sell, restock, add, sort, group and total
//! - Hand the full item list to the persister after every mutation
//!
//! ## Mutation Model
//! Every mutating call applies its change in memory first and then saves. If
//! the save fails the change is kept and the caller gets
//! `InventoryError::Persistence`; the next successful save writes it out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::item::Item;
use crate::protocol::{Command, Response};
use crate::storage::{FilePersister, Persister};

// =============================================================================
// Sort Order
// =============================================================================

/// Sort criterion for [`Inventory::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    QuantityAscending,
    QuantityDescending,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::QuantityAscending,
        SortOrder::QuantityDescending,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
    ];

    fn as_str(self) -> &'static str {
        match self {
            SortOrder::QuantityAscending => "qty-asc",
            SortOrder::QuantityDescending => "qty-desc",
            SortOrder::PriceAscending => "price-asc",
            SortOrder::PriceDescending => "price-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "qty-asc" | "quantity-asc" => Ok(SortOrder::QuantityAscending),
            "qty-desc" | "quantity-desc" => Ok(SortOrder::QuantityDescending),
            "price-asc" => Ok(SortOrder::PriceAscending),
            "price-desc" => Ok(SortOrder::PriceDescending),
            _ => Err(InventoryError::UnknownSortOrder(s.to_string())),
        }
    }
}

// =============================================================================
// Category Group
// =============================================================================

/// Items sharing one category, in store order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<Item>,
}

// =============================================================================
// Inventory
// =============================================================================

/// The item store
///
/// Single-threaded by construction: all mutation goes through `&mut self`.
/// Read accessors return owned copies, so nothing outside the store can
/// alias its items.
pub struct Inventory<P: Persister = FilePersister> {
    /// Items in store order (insertion order until the last sort)
    items: Vec<Item>,

    /// Where items are saved after each mutation
    persister: P,
}

impl Inventory<FilePersister> {
    /// Open the inventory file named by `config`
    pub fn open_file(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::open(FilePersister::from_config(config))
    }
}

impl<P: Persister> Inventory<P> {
    /// Open a store, loading every persisted item
    ///
    /// Malformed persisted data fails the whole open; no partial list is kept.
    pub fn open(persister: P) -> Result<Self> {
        let items = persister.load().map_err(|e| {
            tracing::error!(error = %e, "failed to load inventory");
            e
        })?;

        tracing::info!(items = items.len(), "inventory loaded");
        Ok(Self { items, persister })
    }

    /// Open a store, starting empty if the persisted data cannot be loaded
    pub fn open_or_empty(persister: P) -> Self {
        match persister.load() {
            Ok(items) => {
                tracing::info!(items = items.len(), "inventory loaded");
                Self { items, persister }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load inventory, starting empty");
                Self {
                    items: Vec::new(),
                    persister,
                }
            }
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        tracing::trace!(command = command.name(), "executing command");

        match command {
            Command::Add {
                name,
                category,
                quantity,
                price,
            } => {
                let item = Item::new(name, category, quantity, price);
                self.push(item.clone())?;
                Ok(Response::Added(item))
            }
            Command::Sell { name, amount } => {
                let remaining = self.sell(&name, amount)?;
                Ok(Response::Sold {
                    name: self.stored_name(&name),
                    remaining,
                })
            }
            Command::Restock { name, amount } => {
                let quantity = self.restock(&name, amount)?;
                Ok(Response::Restocked {
                    name: self.stored_name(&name),
                    quantity,
                })
            }
            Command::Find { name } => self.find(&name).map(Response::Found),
            Command::List => Ok(Response::Items(self.list())),
            Command::Categories => Ok(Response::Categories(self.group_by_category())),
            Command::Sort { order } => {
                self.sort(order)?;
                Ok(Response::Sorted(order))
            }
            Command::Total => Ok(Response::Total(self.total_value())),
        }
    }

    /// Append a new item
    ///
    /// No duplicate check and no range validation; callers validate input.
    /// Name and category must not contain line breaks: the file format stores
    /// one item per line and has no escape for them.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Result<()> {
        self.push(Item::new(name, category, quantity, price))
    }

    /// Sell `amount` units of the first item matching `name`
    ///
    /// Returns the remaining quantity. Fails with `NotFound` or
    /// `InsufficientStock`; neither failure changes anything.
    pub fn sell(&mut self, name: &str, amount: u32) -> Result<u32> {
        let idx = self.position(name)?;
        let item = &mut self.items[idx];

        if amount > item.quantity {
            tracing::warn!(
                name = %item.name,
                requested = amount,
                available = item.quantity,
                "sale rejected: insufficient stock"
            );
            return Err(InventoryError::InsufficientStock {
                name: item.name.clone(),
                requested: amount,
                available: item.quantity,
            });
        }

        item.quantity -= amount;
        let remaining = item.quantity;
        tracing::debug!(name = %item.name, sold = amount, remaining, "item sold");

        self.persist()?;
        Ok(remaining)
    }

    /// Add `amount` units to the first item matching `name`
    ///
    /// Returns the new quantity.
    pub fn restock(&mut self, name: &str, amount: u32) -> Result<u32> {
        let idx = self.position(name)?;
        let item = &mut self.items[idx];

        item.quantity = item
            .quantity
            .checked_add(amount)
            .ok_or_else(|| InventoryError::QuantityOverflow {
                name: item.name.clone(),
            })?;
        let quantity = item.quantity;
        tracing::debug!(name = %item.name, added = amount, quantity, "item restocked");

        self.persist()?;
        Ok(quantity)
    }

    /// Find the first item matching `name` (case-insensitive)
    pub fn find(&self, name: &str) -> Result<Item> {
        let idx = self.position(name)?;
        Ok(self.items[idx].clone())
    }

    /// Copy of all items in store order
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Items grouped by category
    ///
    /// Groups appear in the order their category is first seen; items keep
    /// store order inside each group.
    pub fn group_by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for item in &self.items {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item.clone()),
                None => groups.push(CategoryGroup {
                    category: item.category.clone(),
                    items: vec![item.clone()],
                }),
            }
        }

        groups
    }

    /// Reorder the store in place (stable) and persist the new order
    pub fn sort(&mut self, order: SortOrder) -> Result<()> {
        match order {
            SortOrder::QuantityAscending => self.items.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
            SortOrder::QuantityDescending => self.items.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
            SortOrder::PriceAscending => self.items.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDescending => self.items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        tracing::debug!(%order, "inventory sorted");

        self.persist()
    }

    /// Sum of quantity * price over all items
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(Item::value).sum()
    }

    /// Items with quantity strictly below `threshold`, in store order
    pub fn low_stock(&self, threshold: u32) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.quantity < threshold)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the persister
    pub fn persister(&self) -> &P {
        &self.persister
    }

    /// Get the persister mutably
    pub fn persister_mut(&mut self) -> &mut P {
        &mut self.persister
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Append an item and persist
    fn push(&mut self, item: Item) -> Result<()> {
        tracing::debug!(
            name = %item.name,
            category = %item.category,
            quantity = item.quantity,
            price = item.price,
            "adding item"
        );

        self.items.push(item);
        self.persist()
    }

    /// Index of the first item matching `name`
    fn position(&self, name: &str) -> Result<usize> {
        self.items.iter().position(|item| item.matches(name)).ok_or_else(|| {
            tracing::debug!(name, "item not found");
            InventoryError::NotFound {
                name: name.to_string(),
            }
        })
    }

    /// Stored spelling of the first item matching `name`
    fn stored_name(&self, name: &str) -> String {
        self.position(name)
            .map(|idx| self.items[idx].name.clone())
            .unwrap_or_else(|_| name.to_string())
    }

    /// Save the full item list
    fn persist(&mut self) -> Result<()> {
        self.persister.save(&self.items).map_err(|e| {
            tracing::error!(error = %e, "failed to save inventory; in-memory change kept");
            e
        })
    }
}
