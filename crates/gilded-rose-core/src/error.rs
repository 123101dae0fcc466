//! Error types for gilded-rose-core.

use thiserror::Error;

/// Result type alias for gilded-rose-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in gilded-rose-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item's attributes are outside the range the aging rules maintain.
    #[error("invalid item state for '{name}' (sellIn {sell_in}, quality {quality}): {reason}")]
    InvalidItemState {
        name: String,
        sell_in: i32,
        quality: i32,
        reason: String,
    },

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CoreError {
    pub(crate) fn invalid_item(item: &crate::Item, reason: impl Into<String>) -> Self {
        Self::InvalidItemState {
            name: item.name.clone(),
            sell_in: item.sell_in,
            quality: item.quality,
            reason: reason.into(),
        }
    }
}
