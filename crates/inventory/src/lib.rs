//! Inventory domain module.
//!
//! This crate contains the household food-inventory data model, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod expiry;
pub mod item;
pub mod units;

pub use expiry::ExpiryDefaults;
pub use item::{InventoryItem, ItemCategory, StorageArea};
pub use units::{format_amount, is_qualitative};
