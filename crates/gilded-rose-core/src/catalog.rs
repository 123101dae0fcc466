//! Item catalogs as JSON or YAML text.
//!
//! A catalog is a plain list of items:
//!
//! ```yaml
//! - name: Aged Brie
//!   sellIn: 2
//!   quality: 0
//! - name: Sulfuras, Hand of Ragnaros
//!   sellIn: 0
//!   quality: 80
//! ```

use crate::error::Result;
use crate::item::Item;

/// Parse a catalog from a JSON array of items.
///
/// # Errors
/// Returns `CoreError::Json` if the text is not a valid item list.
pub fn from_json(text: &str) -> Result<Vec<Item>> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a catalog from a YAML sequence of items.
///
/// # Errors
/// Returns `CoreError::Yaml` if the text is not a valid item list.
pub fn from_yaml(text: &str) -> Result<Vec<Item>> {
    Ok(serde_yaml::from_str(text)?)
}

/// Serialize a catalog as pretty-printed JSON.
///
/// # Errors
/// Returns `CoreError::Json` if serialization fails.
pub fn to_json(items: &[Item]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}
