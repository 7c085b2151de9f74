//! Calendar feed token repository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_core::traits::CalendarTokenStore;
use clubhub_entity::calendar_token::CalendarToken;

/// Postgres-backed store for calendar feed tokens.
#[derive(Debug, Clone)]
pub struct CalendarTokenRepository {
    pool: PgPool,
}

impl CalendarTokenRepository {
    /// Create a new calendar token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the full token row, including its creation time.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<CalendarToken>> {
        sqlx::query_as::<_, CalendarToken>("SELECT * FROM calendar_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find calendar token", e)
            })
    }
}

#[async_trait]
impl CalendarTokenStore for CalendarTokenRepository {
    /// Delete-then-insert inside one transaction, so concurrent issuance
    /// by the same user cannot leave two live tokens behind.
    async fn replace(&self, user_id: i64, token: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let deleted = sqlx::query("DELETE FROM calendar_tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete calendar token", e)
            })?;

        sqlx::query("INSERT INTO calendar_tokens (token, user_id) VALUES ($1, $2)")
            .bind(token)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert calendar token", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        debug!(
            user_id,
            replaced = deleted.rows_affected() > 0,
            "calendar token stored"
        );
        Ok(())
    }

    async fn find_owner(&self, token: &str) -> AppResult<Option<i64>> {
        sqlx::query_scalar("SELECT user_id FROM calendar_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve calendar token", e)
            })
    }

    async fn delete_for_user(&self, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM calendar_tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete calendar token", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
