//! Protocol Module
//!
//! The command boundary between the store and its front ends.
//!
//! A front end (the CLI, or any GUI) turns user input into a [`Command`],
//! hands it to [`Inventory::execute`](crate::Inventory::execute) and renders
//! the [`Response`] that comes back.
//!
//! ### Commands
//! - ADD:        append an item
//! - SELL:       decrement stock of the first matching item
//! - RESTOCK:    increment stock of the first matching item
//! - FIND:       look up an item by name
//! - LIST:       snapshot of all items in store order
//! - CATEGORIES: items grouped by category
//! - SORT:       persistent in-place reorder
//! - TOTAL:      total stock value

mod command;
mod response;

pub use command::Command;
pub use response::Response;
