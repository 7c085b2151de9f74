//! Calendar feed token issuance and resolution.
//!
//! Unlike export links, feed tokens are persisted and looked up rather
//! than recomputed: a calendar client polls the same URL for months, so
//! the token has no embedded expiry and stays valid until replaced or the
//! owner is deleted.

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use clubhub_core::error::AppError;
use clubhub_core::traits::CalendarTokenStore;

/// Issues and resolves opaque calendar feed tokens over a row store.
#[derive(Clone)]
pub struct CalendarTokenService {
    /// Persistent token store.
    store: Arc<dyn CalendarTokenStore>,
}

impl std::fmt::Debug for CalendarTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarTokenService").finish()
    }
}

impl CalendarTokenService {
    /// Creates a new service over the given store.
    pub fn new(store: Arc<dyn CalendarTokenStore>) -> Self {
        Self { store }
    }

    /// Issues a fresh feed token for the user.
    ///
    /// Any previously issued token for the same user is silently revoked:
    /// each user holds at most one live token, so re-issuing rotates the
    /// feed URL rather than multiplying it.
    pub async fn issue_for(&self, user_id: i64) -> Result<String, AppError> {
        let token = generate_token();
        self.store.replace(user_id, &token).await?;
        info!(user_id, "issued calendar feed token");
        Ok(token)
    }

    /// Resolves a presented token to its owning user id.
    ///
    /// An unknown token is a typed not-found; the HTTP tier converts it to
    /// a generic unauthorized response so feed URLs cannot be probed for
    /// existence.
    pub async fn resolve(&self, token: &str) -> Result<i64, AppError> {
        self.store
            .find_owner(token)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown calendar token"))
    }

    /// Revokes the user's feed token, if any. Returns `true` if a token
    /// was removed.
    pub async fn revoke_for(&self, user_id: i64) -> Result<bool, AppError> {
        let removed = self.store.delete_for_user(user_id).await?;
        if removed {
            info!(user_id, "revoked calendar feed token");
        }
        Ok(removed)
    }
}

/// Generates a 256-bit random token, hex-encoded.
fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique_and_url_safe() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
