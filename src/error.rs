//! Error types for stockroom
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type for stockroom operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Item not found: {name}")]
    NotFound { name: String },

    #[error("Insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Quantity overflow restocking {name}")]
    QuantityOverflow { name: String },

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    /// The in-memory change was applied, but writing it out failed.
    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Load failure at line {line}: {reason}")]
    Load { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl InventoryError {
    /// True for the lookup failure kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, InventoryError::NotFound { .. })
    }

    /// True for the insufficient stock kind
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, InventoryError::InsufficientStock { .. })
    }
}
