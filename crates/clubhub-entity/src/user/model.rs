//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::group::Group;

/// A registered member of the club.
///
/// Users are created when a registration request is approved and carry
/// their group memberships eagerly loaded; the access-control core only
/// ever sees a fully resolved user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique email address, usable as a login identifier.
    pub email: String,
    /// Unique login name (optional).
    pub username: Option<String>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Groups the user belongs to, with their privileges resolved.
    /// Loaded eagerly by the repository, not a table column.
    #[sqlx(skip)]
    pub groups: Vec<Group>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// The user's display name, used as signature material for export
    /// links.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the user belongs to the group with the given name.
    pub fn is_member_of(&self, group_name: &str) -> bool {
        self.groups.iter().any(|g| g.name == group_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_first_and_last() {
        let user = User {
            id: 123,
            email: "john.doe@example.org".to_string(),
            username: None,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            password_hash: String::new(),
            groups: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        };
        assert_eq!(user.full_name(), "John Doe");
    }
}
