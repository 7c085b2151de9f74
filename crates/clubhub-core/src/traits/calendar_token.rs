//! Row-store trait for persisted calendar feed tokens.

use async_trait::async_trait;

use crate::result::AppResult;

/// Persistent row store for opaque calendar feed tokens.
///
/// Each user owns at most one live token. `replace` must delete any prior
/// row for the user before inserting the new one; implementations targeting
/// the single-active-token invariant under concurrent issuance wrap both
/// statements in a single transaction.
#[async_trait]
pub trait CalendarTokenStore: Send + Sync + 'static {
    /// Delete any existing token row for `user_id` and insert `token`.
    async fn replace(&self, user_id: i64, token: &str) -> AppResult<()>;

    /// Look up the owning user of `token`. `None` if the token is unknown.
    async fn find_owner(&self, token: &str) -> AppResult<Option<i64>>;

    /// Delete any token owned by `user_id`. Returns `true` if a row was
    /// removed.
    async fn delete_for_user(&self, user_id: i64) -> AppResult<bool>;
}
