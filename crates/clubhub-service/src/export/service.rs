//! Export link minting and authorization.
//!
//! A generated document (e.g. a PDF report) is fetched through a link that
//! carries its own authorization: the owner's id as a path segment plus
//! `token` and `time` query parameters. The triple is the full
//! authorization input; no ACL lookup happens on the fetch.

use std::sync::Arc;

use tracing::warn;

use clubhub_auth::link::LinkSigner;
use clubhub_core::error::AppError;
use clubhub_entity::user::User;

/// Mints and authorizes signed export links.
#[derive(Debug, Clone)]
pub struct ExportLinkService {
    /// Link signer.
    signer: Arc<LinkSigner>,
}

impl ExportLinkService {
    /// Creates a new export link service.
    pub fn new(signer: Arc<LinkSigner>) -> Self {
        Self { signer }
    }

    /// Mints the link fragment for the user's export:
    /// `{owner_id}?token={token}&time={timestamp}`.
    pub fn mint_link(&self, user: &User) -> String {
        let (token, timestamp) = self.signer.mint(user);
        format!("{}?token={}&time={}", user.id, token, timestamp)
    }

    /// Authorizes a presented export fetch.
    ///
    /// Signature mismatch and stale timestamp are reported identically;
    /// the caller learns only that the link is no longer good.
    pub fn authorize(&self, user: &User, token: &str, timestamp: &str) -> Result<(), AppError> {
        if self.signer.verify(token, timestamp, user) {
            Ok(())
        } else {
            warn!(user_id = user.id, "export link rejected");
            Err(AppError::authentication("Invalid or expired export link"))
        }
    }
}
