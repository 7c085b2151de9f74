//! Bearer credential verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use clubhub_core::config::AuthConfig;
use clubhub_core::error::AppError;

use super::claims::Claims;

/// Validates bearer credential strings.
///
/// Every rejection — bad signature, wrong issuer or audience, expired,
/// structurally malformed — surfaces as the same `Authentication` error
/// with the same message, so the caller cannot be used as an oracle for
/// which check failed.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a credential string, returning its claims.
    ///
    /// On success the subject identifies the user; whether to trust the
    /// embedded privilege snapshot or re-resolve from storage is the
    /// caller's choice, depending on how sensitive the protected action is.
    pub fn verify(&self, credential: &str) -> Result<Claims, AppError> {
        decode::<Claims>(credential, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = %e, "bearer credential rejected");
                AppError::authentication("Invalid or expired credential")
            })
    }
}
