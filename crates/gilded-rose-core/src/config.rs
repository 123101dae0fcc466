//! Advancer configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How strictly item state is checked before a day is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Accept any values and let the arithmetic decide.
    #[default]
    Permissive,
    /// Reject non-legendary items whose quality is outside `0..=50`.
    Strict,
}

/// Configuration for a [`GildedRose`](crate::GildedRose).
///
/// ```yaml
/// validation: strict
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceConfig {
    /// Validation applied by `try_advance`.
    #[serde(default)]
    pub validation: ValidationMode,
}

impl AdvanceConfig {
    /// Configuration that rejects out-of-range items.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
        }
    }

    /// Load configuration from YAML text.
    ///
    /// # Errors
    /// Returns `CoreError::Yaml` if the text is not a valid configuration.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
