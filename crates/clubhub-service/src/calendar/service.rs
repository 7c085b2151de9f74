//! Calendar feed orchestration.
//!
//! A feed URL carries a single opaque token as a path segment. Resolving
//! it yields the owning user, whose events are then rendered to ICS by the
//! document tier. An unknown token surfaces here as a typed not-found; the
//! HTTP tier answers with a generic unauthorized so feed URLs cannot be
//! probed.

use std::sync::Arc;

use clubhub_auth::feed::CalendarTokenService;
use clubhub_core::error::AppError;
use clubhub_core::traits::UserLoader;
use clubhub_entity::user::User;

/// Issues feed tokens and resolves presented tokens to their owner.
#[derive(Clone)]
pub struct CalendarFeedService {
    /// Token issue/lookup over the persistent store.
    tokens: CalendarTokenService,
    /// User loader for rendering the owner's feed.
    users: Arc<dyn UserLoader>,
}

impl std::fmt::Debug for CalendarFeedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarFeedService").finish()
    }
}

impl CalendarFeedService {
    /// Creates a new calendar feed service.
    pub fn new(tokens: CalendarTokenService, users: Arc<dyn UserLoader>) -> Self {
        Self { tokens, users }
    }

    /// Issues (or rotates) the user's feed token.
    pub async fn issue(&self, user_id: i64) -> Result<String, AppError> {
        self.tokens.issue_for(user_id).await
    }

    /// Resolves a presented feed token to its owning user.
    pub async fn resolve_owner(&self, token: &str) -> Result<User, AppError> {
        let user_id = self.tokens.resolve(token).await?;
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown calendar token"))
    }

    /// Revokes the user's feed token, if any.
    pub async fn revoke(&self, user_id: i64) -> Result<bool, AppError> {
        self.tokens.revoke_for(user_id).await
    }
}
