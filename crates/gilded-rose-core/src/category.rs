//! Item categories and name-based classification.

use serde::{Deserialize, Serialize};

/// Name of the cheese that gets better with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert passes whose value peaks right before the show.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the legendary item that never ages.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the conjured goods that degrade twice as fast.
pub const CONJURED: &str = "Conjured";

/// Aging category of an item, decided once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Anything without a special rule.
    Regular,
    /// Regular goods with doubled degradation.
    Conjured,
    /// Gains quality with age.
    AgedBrie,
    /// Gains quality as the concert approaches, worthless afterwards.
    BackstagePasses,
    /// Never sold, never degrades.
    Legendary,
}

impl Category {
    /// Classify an item by its exact, case-sensitive name.
    ///
    /// ```
    /// use gilded_rose_core::Category;
    ///
    /// assert_eq!(Category::classify("Aged Brie"), Category::AgedBrie);
    /// assert_eq!(Category::classify("aged brie"), Category::Regular);
    /// ```
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Self::AgedBrie,
            BACKSTAGE_PASSES => Self::BackstagePasses,
            SULFURAS => Self::Legendary,
            CONJURED => Self::Conjured,
            _ => Self::Regular,
        }
    }

    /// Whether items of this category ever change.
    #[must_use]
    pub const fn is_legendary(self) -> bool {
        matches!(self, Self::Legendary)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Conjured => write!(f, "conjured"),
            Self::AgedBrie => write!(f, "aged_brie"),
            Self::BackstagePasses => write!(f, "backstage_passes"),
            Self::Legendary => write!(f, "legendary"),
        }
    }
}
