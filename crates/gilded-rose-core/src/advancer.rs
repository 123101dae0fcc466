//! Advancing the inventory by one day.

use tracing::{debug, warn};

use crate::category::Category;
use crate::config::{AdvanceConfig, ValidationMode};
use crate::error::Result;
use crate::item::Item;
use crate::rules;

/// The inn's inventory, aged one day at a time.
///
/// Each item's category is worked out once, when the inventory is built.
/// Item names cannot be changed through the inventory, so the cached
/// categories stay in step with the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    categories: Vec<Category>,
    config: AdvanceConfig,
}

impl GildedRose {
    /// Create an inventory over `items` with the default, permissive config.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_config(items, AdvanceConfig::default())
    }

    /// Create an inventory over `items` with a specific config.
    #[must_use]
    pub fn with_config(items: Vec<Item>, config: AdvanceConfig) -> Self {
        let categories = items.iter().map(Item::category).collect();
        Self {
            items,
            categories,
            config,
        }
    }

    /// The items, in the order they were supplied.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The category of each item, index-aligned with [`items`](Self::items).
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &AdvanceConfig {
        &self.config
    }

    /// Number of items in the inventory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hand the items back to the caller.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Age every item by one day.
    ///
    /// Never fails: out-of-range values are aged as the arithmetic dictates.
    pub fn advance(&mut self) {
        for (item, &category) in self.items.iter_mut().zip(&self.categories) {
            age_logged(item, category);
        }
        debug!(items = self.items.len(), "Advanced inventory by one day");
    }

    /// Check every item against the configured validation mode.
    ///
    /// # Errors
    /// In strict mode, returns `CoreError::InvalidItemState` for the first
    /// non-legendary item whose quality is outside `0..=50`.
    pub fn validate(&self) -> Result<()> {
        if self.config.validation == ValidationMode::Permissive {
            return Ok(());
        }
        for item in &self.items {
            if let Err(e) = item.validate() {
                warn!(name = %item.name, error = %e, "Rejected item state");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Validate, then age every item by one day.
    ///
    /// Items are only touched once the whole inventory has passed validation.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidItemState` if validation fails; the
    /// inventory is left unchanged.
    pub fn try_advance(&mut self) -> Result<()> {
        self.validate()?;
        self.advance();
        Ok(())
    }
}

/// Age a slice of items by one day, classifying each by name.
pub fn advance_items(items: &mut [Item]) {
    for item in items {
        let category = item.category();
        age_logged(item, category);
    }
}

fn age_logged(item: &mut Item, category: Category) {
    let (sell_in, quality) = (item.sell_in, item.quality);
    rules::age(item, category);
    debug!(
        name = %item.name,
        category = %category,
        sell_in_before = sell_in,
        sell_in_after = item.sell_in,
        quality_before = quality,
        quality_after = item.quality,
        "Aged item"
    );
}
