//! Authentication and token configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum secret length in bytes, matching the HMAC-SHA256 block
/// recommendation. Secrets shorter than this are rejected at startup.
const MIN_SECRET_BYTES: usize = 32;

/// Authentication and credential configuration.
///
/// Both secrets are independent: `jwt_secret` signs bearer credentials,
/// `url_sign_secret` signs export-link capability tokens. Neither is ever
/// logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for bearer credential signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Secret key for export-link signing (HMAC-SHA256).
    pub url_sign_secret: String,
    /// Bearer credential TTL in hours.
    #[serde(default = "default_jwt_ttl")]
    pub jwt_ttl_hours: u64,
    /// Fixed issuer claim placed in and required of every credential.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
    /// Fixed audience claim placed in and required of every credential.
    #[serde(default = "default_audience")]
    pub jwt_audience: String,
    /// Staleness window for export-link timestamps, in minutes.
    #[serde(default = "default_link_validity")]
    pub link_validity_minutes: i64,
    /// Name of the administrator group, which cannot be renamed, deleted,
    /// or emptied of members.
    #[serde(default = "default_admin_group")]
    pub admin_group_name: String,
}

impl AuthConfig {
    /// Validate secret material. Called once at configuration load.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "jwt_secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        if self.url_sign_secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "url_sign_secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        if self.link_validity_minutes <= 0 {
            return Err(AppError::configuration(
                "link_validity_minutes must be positive",
            ));
        }
        Ok(())
    }
}

fn default_jwt_ttl() -> u64 {
    24
}

fn default_issuer() -> String {
    "clubhub-backend".to_string()
}

fn default_audience() -> String {
    "clubhub-api".to_string()
}

fn default_link_validity() -> i64 {
    60
}

fn default_admin_group() -> String {
    "Admin".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            url_sign_secret: "fedcba9876543210fedcba9876543210".to_string(),
            jwt_ttl_hours: default_jwt_ttl(),
            jwt_issuer: default_issuer(),
            jwt_audience: default_audience(),
            link_validity_minutes: default_link_validity(),
            admin_group_name: default_admin_group(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let mut config = valid_config();
        config.jwt_secret = "too-short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nonpositive_window_rejected() {
        let mut config = valid_config();
        config.link_validity_minutes = 0;
        assert!(config.validate().is_err());
    }
}
