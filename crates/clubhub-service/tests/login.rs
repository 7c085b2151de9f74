//! Integration tests for the login flow, using an in-memory user loader.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use clubhub_auth::jwt::{JwtDecoder, JwtEncoder};
use clubhub_auth::password::PasswordHasher;
use clubhub_core::config::AuthConfig;
use clubhub_core::error::ErrorKind;
use clubhub_core::result::AppResult;
use clubhub_core::traits::UserLoader;
use clubhub_entity::user::User;
use clubhub_service::AuthService;

/// In-memory loader keyed by user id, with the same identifier rules as
/// the database repository.
struct MemoryUsers {
    rows: HashMap<i64, User>,
}

#[async_trait]
impl UserLoader for MemoryUsers {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.rows.get(&id).cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        if let Ok(id) = identifier.parse::<i64>() {
            return self.find_by_id(id).await;
        }
        Ok(self
            .rows
            .values()
            .find(|u| u.email == identifier || u.username.as_deref() == Some(identifier))
            .cloned())
    }
}

fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
        url_sign_secret: "fedcba9876543210fedcba9876543210".to_string(),
        jwt_ttl_hours: 24,
        jwt_issuer: "clubhub-backend".to_string(),
        jwt_audience: "clubhub-api".to_string(),
        link_validity_minutes: 60,
        admin_group_name: "Admin".to_string(),
    }
}

fn member(id: i64, email: &str, password_hash: String) -> User {
    User {
        id,
        email: email.to_string(),
        username: None,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        password_hash,
        groups: Vec::new(),
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn service_with(users: Vec<User>) -> AuthService {
    let config = auth_config();
    let rows = users.into_iter().map(|u| (u.id, u)).collect();
    AuthService::new(
        Arc::new(MemoryUsers { rows }),
        Arc::new(PasswordHasher::new()),
        Arc::new(JwtEncoder::new(&config)),
        Arc::new(JwtDecoder::new(&config)),
    )
}

#[tokio::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() {
    let hasher = PasswordHasher::new();
    let hash = hasher.hash("correct horse battery staple").unwrap();
    let service = service_with(vec![member(1, "john.doe@example.org", hash)]);

    let unknown = service
        .login("nobody@example.org", "correct horse battery staple")
        .await
        .unwrap_err();
    let wrong_password = service
        .login("john.doe@example.org", "wrong password")
        .await
        .unwrap_err();

    // A caller probing the endpoint must not be able to tell whether the
    // account exists.
    assert_eq!(unknown.kind, ErrorKind::Authentication);
    assert_eq!(wrong_password.kind, ErrorKind::Authentication);
    assert_eq!(unknown.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn login_issues_a_verifiable_credential() {
    let hasher = PasswordHasher::new();
    let hash = hasher.hash("correct horse battery staple").unwrap();
    let service = service_with(vec![member(1, "john.doe@example.org", hash)]);

    let credential = service
        .login("john.doe@example.org", "correct horse battery staple")
        .await
        .unwrap();

    let claims = service.verify(&credential).unwrap();
    assert_eq!(claims.user_id().unwrap(), 1);
}

#[tokio::test]
async fn current_user_reloads_from_storage() {
    let hasher = PasswordHasher::new();
    let hash = hasher.hash("correct horse battery staple").unwrap();
    let service = service_with(vec![member(1, "john.doe@example.org", hash)]);

    let credential = service
        .login("1", "correct horse battery staple")
        .await
        .unwrap();

    let user = service.current_user(&credential).await.unwrap();
    assert_eq!(user.email, "john.doe@example.org");
}
