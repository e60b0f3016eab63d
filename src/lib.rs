//! # stockroom
//!
//! A small-shop inventory store with:
//! - An ordered item list with case-insensitive name lookup
//! - Sell/restock with stock checks
//! - Persistent in-place sorting, category grouping and stock valuation
//! - Flat-file persistence, rewritten in full after every mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Front End (CLI / GUI)                        │
//! │          input validation, rendering, low-stock flags        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Inventory                               │
//! │                 (ordered Vec<Item>)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ save(&[Item]) after every mutation
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │FilePersister│          │MemoryPersister│
//!   │ (flat file) │          │   (tests)     │
//!   └─────────────┘          └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod item;
pub mod storage;
pub mod protocol;
pub mod inventory;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InventoryError, Result};
pub use config::Config;
pub use item::Item;
pub use inventory::{CategoryGroup, Inventory, SortOrder};
pub use storage::{FilePersister, MemoryPersister, Persister};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of stockroom
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
