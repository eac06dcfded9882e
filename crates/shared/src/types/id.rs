//! Asset identifiers.
//!
//! Asset ids are operator-facing tags (`"LAP-0042"`) rather than database keys,
//! so they wrap a string. When intake receives no tag, a UUID v7 is issued.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an asset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Wraps a user-supplied tag. Surrounding whitespace is trimmed.
    ///
    /// Returns `None` for a blank tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Issues a new system-generated id (UUID v7, time-ordered).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
