//! JWT claims structure embedded in every bearer credential.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use clubhub_core::error::AppError;
use clubhub_entity::privilege::Privilege;

/// JWT claims payload embedded in every bearer credential.
///
/// The credential is self-describing: there is no server-side session
/// record, so everything a caller may rely on must be in here and covered
/// by the signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID as a string.
    pub sub: String,
    /// Fixed issuer, required to match on verification.
    pub iss: String,
    /// Fixed audience label, required to match on verification.
    pub aud: String,
    /// Snapshot of the user's effective privileges at issuance. May be
    /// stale relative to group changes made after issuance; callers that
    /// need freshness re-resolve from storage instead.
    pub privileges: Vec<PrivilegeClaim>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// One privilege entry in the credential snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeClaim {
    /// Privilege name — the identity key.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl From<Privilege> for PrivilegeClaim {
    fn from(privilege: Privilege) -> Self {
        Self {
            name: privilege.name,
            description: privilege.description,
        }
    }
}

impl Claims {
    /// Parses the subject claim back into a user ID.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::authentication("Invalid or expired credential"))
    }

    /// Returns the snapshot privilege names.
    pub fn privilege_names(&self) -> HashSet<&str> {
        self.privileges.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether the snapshot contains the named privilege.
    pub fn has_privilege(&self, name: &str) -> bool {
        self.privileges.iter().any(|p| p.name == name)
    }
}
