//! User repository implementation.
//!
//! Users are always returned with their group -> privilege graph resolved,
//! since the access-control core only works on fully loaded users.

use async_trait::async_trait;
use sqlx::PgPool;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_core::traits::UserLoader;
use clubhub_entity::group::Group;
use clubhub_entity::privilege::Privilege;
use clubhub_entity::user::User;

/// Repository for user lookup with eager group loading.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key, with groups and privileges loaded.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by id", e)
            })?;

        self.attach_groups(user).await
    }

    /// Find a user by email (case-insensitive), with groups loaded.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })?;

        self.attach_groups(user).await
    }

    /// Find a user by username (case-insensitive), with groups loaded.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER($1)")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
                })?;

        self.attach_groups(user).await
    }

    /// Find a user by a login identifier: a numeric id, an email address,
    /// or a username.
    pub async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        if let Ok(id) = identifier.parse::<i64>() {
            return self.find_by_id(id).await;
        }
        if identifier.contains('@') {
            return self.find_by_email(identifier).await;
        }
        self.find_by_username(identifier).await
    }

    /// Load the group -> privilege graph onto a fetched user row.
    async fn attach_groups(&self, user: Option<User>) -> AppResult<Option<User>> {
        let Some(mut user) = user else {
            return Ok(None);
        };

        let mut groups = sqlx::query_as::<_, Group>(
            "SELECT g.* FROM groups g \
             JOIN user_groups ug ON ug.group_id = g.id \
             WHERE ug.user_id = $1 ORDER BY g.id",
        )
        .bind(user.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load user groups", e))?;

        for group in &mut groups {
            group.privileges = sqlx::query_as::<_, Privilege>(
                "SELECT p.* FROM privileges p \
                 JOIN group_privileges gp ON gp.privilege_id = p.id \
                 WHERE gp.group_id = $1 ORDER BY p.name",
            )
            .bind(group.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load group privileges", e)
            })?;
        }

        user.groups = groups;
        Ok(Some(user))
    }
}

#[async_trait]
impl UserLoader for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }

    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_identifier(self, identifier).await
    }
}
