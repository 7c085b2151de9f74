//! Loader trait for principals with their group graph resolved.

use async_trait::async_trait;

use clubhub_entity::user::User;

use crate::result::AppResult;

/// Loads users with groups and privileges already attached.
///
/// Services consume this seam instead of a concrete repository, so the
/// login and credential flows can be exercised without a live database.
#[async_trait]
pub trait UserLoader: Send + Sync + 'static {
    /// Look up a user by primary key. `None` if unknown.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Look up a user by login identifier: a numeric id, an email address,
    /// or a username. `None` if no user matches.
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>>;
}
