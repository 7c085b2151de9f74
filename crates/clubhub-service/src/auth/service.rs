//! Authentication service: login and credential-to-user resolution.

use std::sync::Arc;

use tracing::{info, warn};

use clubhub_auth::jwt::{Claims, JwtDecoder, JwtEncoder};
use clubhub_auth::password::PasswordHasher;
use clubhub_core::error::AppError;
use clubhub_core::traits::UserLoader;
use clubhub_entity::user::User;

/// The one message every failed login gets. Unknown identifier and wrong
/// password are indistinguishable so the endpoint cannot be used to
/// enumerate accounts.
const BAD_CREDENTIALS: &str = "Invalid credentials";

/// Orchestrates the login flow and credential verification.
#[derive(Clone)]
pub struct AuthService {
    /// User loader with eager group resolution.
    users: Arc<dyn UserLoader>,
    /// Opaque password check.
    hasher: Arc<PasswordHasher>,
    /// Credential issuer.
    encoder: Arc<JwtEncoder>,
    /// Credential verifier.
    decoder: Arc<JwtDecoder>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish()
    }
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        users: Arc<dyn UserLoader>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Authenticates a user and issues a bearer credential.
    ///
    /// The identifier may be a user id, email address, or username. The
    /// credential embeds the privilege snapshot resolved at this moment;
    /// later group changes only show up on the next login.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| AppError::authentication(BAD_CREDENTIALS))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = user.id, "login rejected");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }

        let credential = self.encoder.issue(&user)?;
        info!(user_id = user.id, "user logged in");
        Ok(credential)
    }

    /// Verifies a presented credential and returns its claims.
    ///
    /// Low-risk callers check the embedded privilege snapshot directly.
    pub fn verify(&self, credential: &str) -> Result<Claims, AppError> {
        self.decoder.verify(credential)
    }

    /// Verifies a presented credential and re-loads the user from storage.
    ///
    /// Sensitive callers use this to act on the user's *current* groups
    /// rather than the snapshot taken at issuance.
    pub async fn current_user(&self, credential: &str) -> Result<User, AppError> {
        let claims = self.decoder.verify(credential)?;
        let user_id = claims.user_id()?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or expired credential"))
    }
}
