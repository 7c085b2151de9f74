//! Bearer credential creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use clubhub_core::config::AuthConfig;
use clubhub_core::error::AppError;
use clubhub_entity::user::User;

use crate::privilege::PrivilegeResolver;

use super::claims::{Claims, PrivilegeClaim};

/// Creates signed bearer credentials embedding the user's identity and
/// effective privilege snapshot.
#[derive(Debug, Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Credential TTL in hours.
    ttl_hours: i64,
    /// Issuer claim value.
    issuer: String,
    /// Audience claim value.
    audience: String,
    /// Privilege resolver, invoked on every issuance.
    resolver: PrivilegeResolver,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.jwt_ttl_hours as i64,
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            resolver: PrivilegeResolver::new(),
        }
    }

    /// Issues a credential for the given user.
    ///
    /// The privilege set is resolved fresh from the user's loaded groups
    /// and embedded as a snapshot; it is never cached beyond this one
    /// credential.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.ttl_hours);

        let mut privileges: Vec<PrivilegeClaim> = self
            .resolver
            .effective_privileges(user)
            .into_iter()
            .map(PrivilegeClaim::from)
            .collect();
        // Stable claim ordering so identical inputs produce identical
        // payloads.
        privileges.sort_by(|a, b| a.name.cmp(&b.name));

        let claims = Claims {
            sub: user.id.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            privileges,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode credential: {e}")))
    }
}
