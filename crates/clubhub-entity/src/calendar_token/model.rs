//! Calendar feed token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted opaque capability granting access to one user's calendar
/// feed.
///
/// The token string is the primary key and carries no structure; validity
/// ends only when the row is replaced or the owner is deleted. At most one
/// live row exists per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CalendarToken {
    /// Random unguessable token string (primary key).
    pub token: String,
    /// Owning user.
    pub user_id: i64,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl CalendarToken {
    /// Create a token row for `user_id` stamped with the current time.
    pub fn new(token: impl Into<String>, user_id: i64) -> Self {
        Self {
            token: token.into(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
