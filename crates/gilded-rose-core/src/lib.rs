//! gilded-rose-core: Daily aging rules for the Gilded Rose inventory.
//!
//! This crate provides:
//! - `Item`: An inventory item with its `sellIn` and `quality`
//! - `Category`: The aging category an item falls into, decided by name
//! - `GildedRose`: The inventory, advanced exactly one day per call
//! - Catalog parsing from JSON or YAML text
//!
//! ```
//! use gilded_rose_core::{GildedRose, Item};
//!
//! let mut app = GildedRose::new(vec![Item::new("Aged Brie", 1, 49)]);
//! app.advance();
//! assert_eq!(app.items()[0], Item::new("Aged Brie", 0, 50));
//! ```

pub mod advancer;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod item;
pub mod rules;

pub use advancer::{advance_items, GildedRose};
pub use category::{Category, AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS};
pub use config::{AdvanceConfig, ValidationMode};
pub use error::{CoreError, Result};
pub use item::Item;
pub use rules::{MAX_QUALITY, MIN_QUALITY};
