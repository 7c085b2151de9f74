//! Privilege entity model.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named permission atom (e.g. `product_write`).
///
/// Privileges form an immutable set seeded once at install time; groups
/// reference them, never own them. The name is the identity key: two
/// privilege records with the same name are the same privilege even when
/// their row ids differ, so equality and hashing ignore everything else.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Privilege {
    /// Database row id.
    pub id: i64,
    /// Unique privilege name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl Privilege {
    /// Create a privilege value (used by seeds and tests).
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl PartialEq for Privilege {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Privilege {}

impl Hash for Privilege {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
