//! Inventory item model.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{CoreError, Result};
use crate::rules::{MAX_QUALITY, MIN_QUALITY};

/// An item in the inn's inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item name; decides the aging category.
    pub name: String,

    /// Days left to sell the item. Negative once the date has passed.
    pub sell_in: i32,

    /// How valuable the item is.
    pub quality: i32,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// The aging category for this item's name.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// Check that the item is in a state the aging rules maintain.
    ///
    /// Legendary items are accepted whatever their values.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidItemState` if a non-legendary item's quality
    /// is outside `0..=50`.
    pub fn validate(&self) -> Result<()> {
        if self.category().is_legendary() {
            return Ok(());
        }
        if self.quality < MIN_QUALITY {
            return Err(CoreError::invalid_item(
                self,
                format!("quality must not be below {MIN_QUALITY}"),
            ));
        }
        if self.quality > MAX_QUALITY {
            return Err(CoreError::invalid_item(
                self,
                format!("quality must not exceed {MAX_QUALITY}"),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
