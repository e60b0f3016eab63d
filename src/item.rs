//! Item record
//!
//! One tracked stock item.

use serde::{Deserialize, Serialize};

/// A single stocked item
///
/// `name` is the lookup key and is compared case-insensitively. Uniqueness is
/// not enforced: when duplicates exist, lookups reach the first one only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, category: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }

    /// Stock value of this line: quantity * price
    pub fn value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Case-insensitive name comparison
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
