//! Export-link token minting and verification.
//!
//! An export link authorizes a single GET against one resource owned by
//! one user, for a short window, without a database round-trip per request.
//! Nothing is persisted: the token is an HMAC-SHA256 digest over the
//! owner's identity and a minute-granularity timestamp, and validity is
//! entirely recomputed. A leaked URL stops working once its timestamp
//! falls outside the staleness window.

use chrono::{NaiveDateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use clubhub_core::config::AuthConfig;
use clubhub_entity::user::User;

type HmacSha256 = Hmac<Sha256>;

/// Fixed-width minute-granularity timestamp format carried in the link,
/// e.g. `202501151030`.
pub const TIME_FORMAT: &str = "%Y%m%d%H%M";

/// Mints and verifies HMAC-signed export-link tokens.
#[derive(Clone)]
pub struct LinkSigner {
    /// HMAC key; the url-signing secret, distinct from the JWT secret.
    secret: Vec<u8>,
    /// Staleness window in minutes.
    validity_minutes: i64,
}

impl std::fmt::Debug for LinkSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkSigner")
            .field("validity_minutes", &self.validity_minutes)
            .finish()
    }
}

impl LinkSigner {
    /// Creates a new signer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.url_sign_secret.as_bytes().to_vec(),
            validity_minutes: config.link_validity_minutes,
        }
    }

    /// Mints a token for the user at the current wall-clock time.
    ///
    /// Returns `(token, timestamp)`; the caller embeds both in the URL as
    /// the `token` and `time` query parameters.
    pub fn mint(&self, user: &User) -> (String, String) {
        let timestamp = Utc::now().format(TIME_FORMAT).to_string();
        (self.mint_at(user, &timestamp), timestamp)
    }

    /// Computes the token for the user at a caller-supplied timestamp.
    ///
    /// Used by verification to recompute the expected digest rather than
    /// trust the presented one.
    pub fn mint_at(&self, user: &User, timestamp: &str) -> String {
        hex::encode(self.digest(user, timestamp))
    }

    /// Verifies a presented `(token, timestamp)` pair against the user.
    ///
    /// Both checks must pass: the timestamp must parse and lie within the
    /// staleness window of now, and the token must match the recomputed
    /// digest. The freshness check runs first since it is the cheap one.
    /// Any failure, including an unparsable timestamp or undecodable
    /// token, yields `false`; this method never errors.
    pub fn verify(&self, token: &str, timestamp: &str, user: &User) -> bool {
        let Ok(minted_at) = NaiveDateTime::parse_from_str(timestamp, TIME_FORMAT) else {
            debug!("export link rejected: unparsable timestamp");
            return false;
        };

        let age = Utc::now().naive_utc().signed_duration_since(minted_at);
        if age.num_minutes().abs() > self.validity_minutes {
            debug!(user_id = user.id, "export link rejected: stale timestamp");
            return false;
        }

        let Ok(presented) = hex::decode(token) else {
            return false;
        };
        let expected = self.digest(user, timestamp);

        presented.ct_eq(&expected).into()
    }

    /// HMAC-SHA256 over the canonical `id|full name|timestamp` string.
    ///
    /// The owner's identity is digest material, so a token minted for one
    /// user never verifies for another; this is the sole authorization
    /// check on the export path.
    fn digest(&self, user: &User, timestamp: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any length");
        mac.update(user.id.to_string().as_bytes());
        mac.update(b"|");
        mac.update(user.full_name().as_bytes());
        mac.update(b"|");
        mac.update(timestamp.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn test_signer(validity_minutes: i64) -> LinkSigner {
        let config = AuthConfig {
            jwt_secret: "unit-test-jwt-secret-0123456789abcdef".to_string(),
            url_sign_secret: "unit-test-url-secret-0123456789abcdef".to_string(),
            jwt_ttl_hours: 24,
            jwt_issuer: "clubhub-backend".to_string(),
            jwt_audience: "clubhub-api".to_string(),
            link_validity_minutes: validity_minutes,
            admin_group_name: "Admin".to_string(),
        };
        LinkSigner::new(&config)
    }

    fn test_user(id: i64, first: &str, last: &str) -> User {
        User {
            id,
            email: format!("user{id}@example.org"),
            username: None,
            first_name: first.to_string(),
            last_name: last.to_string(),
            password_hash: String::new(),
            groups: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn minutes_ago(minutes: i64) -> String {
        (Utc::now() - Duration::minutes(minutes))
            .format(TIME_FORMAT)
            .to_string()
    }

    #[test]
    fn test_mint_then_verify() {
        let signer = test_signer(60);
        let user = test_user(123, "John", "Doe");

        let (token, timestamp) = signer.mint(&user);
        assert_eq!(timestamp.len(), 12);
        assert!(signer.verify(&token, &timestamp, &user));
    }

    #[test]
    fn test_fresh_timestamp_accepted_stale_rejected() {
        // The digest recomputes identically at any age; only the
        // wall-clock distance of the embedded timestamp decides.
        let signer = test_signer(60);
        let user = test_user(123, "John", "Doe");

        let fresh = minutes_ago(5);
        let token = signer.mint_at(&user, &fresh);
        assert!(signer.verify(&token, &fresh, &user));

        let stale = minutes_ago(120);
        let token = signer.mint_at(&user, &stale);
        assert!(!signer.verify(&token, &stale, &user));
    }

    #[test]
    fn test_far_future_timestamp_rejected() {
        let signer = test_signer(60);
        let user = test_user(123, "John", "Doe");

        let future = minutes_ago(-120);
        let token = signer.mint_at(&user, &future);
        assert!(!signer.verify(&token, &future, &user));
    }

    #[test]
    fn test_token_bound_to_principal() {
        let signer = test_signer(60);
        let owner = test_user(1, "John", "Doe");
        let other = test_user(2, "Jane", "Roe");

        let (token, timestamp) = signer.mint(&owner);
        assert!(!signer.verify(&token, &timestamp, &other));
    }

    #[test]
    fn test_display_name_is_signature_material() {
        let signer = test_signer(60);
        let user = test_user(1, "John", "Doe");
        let renamed = test_user(1, "Johnny", "Doe");

        let (token, timestamp) = signer.mint(&user);
        assert!(!signer.verify(&token, &timestamp, &renamed));
    }

    #[test]
    fn test_unparsable_timestamp_rejected() {
        let signer = test_signer(60);
        let user = test_user(1, "John", "Doe");
        let (token, _) = signer.mint(&user);

        assert!(!signer.verify(&token, "not-a-time", &user));
        assert!(!signer.verify(&token, "2025011510", &user)); // too short
        assert!(!signer.verify(&token, "209901159999", &user)); // invalid minute
    }

    #[test]
    fn test_garbage_token_rejected() {
        let signer = test_signer(60);
        let user = test_user(1, "John", "Doe");
        let timestamp = minutes_ago(0);

        assert!(!signer.verify("zzzz-not-hex", &timestamp, &user));
        assert!(!signer.verify("deadbeef", &timestamp, &user));
    }

    #[test]
    fn test_known_scenario_fixed_timestamp() {
        // id=123, "John Doe", minted at a fixed minute: valid shortly
        // after, rejected two hours later. Wall-clock "shortly after" is
        // emulated by minting relative to now.
        let signer = test_signer(60);
        let user = test_user(123, "John", "Doe");

        let minted = minutes_ago(5); // verified 5 minutes after minting
        let digest = signer.mint_at(&user, &minted);
        assert!(signer.verify(&digest, &minted, &user));

        let minted = minutes_ago(120); // verified 2 hours after minting
        let digest = signer.mint_at(&user, &minted);
        assert!(!signer.verify(&digest, &minted, &user));
    }

    #[test]
    fn test_digest_is_deterministic() {
        let signer = test_signer(60);
        let user = test_user(123, "John", "Doe");

        let a = signer.mint_at(&user, "202501151030");
        let b = signer.mint_at(&user, "202501151030");
        assert_eq!(a, b);

        let c = signer.mint_at(&user, "202501151031");
        assert_ne!(a, c);
    }
}
