//! Group entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::privilege::Privilege;

/// A named collection of users carrying a set of privileges.
///
/// Membership is many-to-many with users; the group -> privilege model is
/// flat (no group nesting). One designated administrator group is protected
/// by the service layer: it cannot be renamed, deleted, or emptied of
/// members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    /// Unique group identifier.
    pub id: i64,
    /// Unique group name.
    pub name: String,
    /// Privileges granted to every member. Loaded eagerly by the
    /// repository, not a table column.
    #[sqlx(skip)]
    pub privileges: Vec<Privilege>,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
    /// When the group was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Group {
    /// Create a group value (used by seeds and tests).
    pub fn new(id: i64, name: impl Into<String>, privileges: Vec<Privilege>) -> Self {
        Self {
            id,
            name: name.into(),
            privileges,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
