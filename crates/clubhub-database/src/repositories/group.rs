//! Group repository implementation.

use sqlx::PgPool;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::group::Group;
use clubhub_entity::privilege::Privilege;

/// Repository for group lookup, membership, and privilege assignment.
#[derive(Debug, Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Create a new group repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a group by primary key, with privileges loaded.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Group>> {
        let group = sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group by id", e)
            })?;

        self.attach_privileges(group).await
    }

    /// Find a group by its unique name, with privileges loaded.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Group>> {
        let group = sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group by name", e)
            })?;

        self.attach_privileges(group).await
    }

    /// Rename a group. Returns `true` if a row was updated.
    pub async fn update_name(&self, id: i64, name: &str) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE groups SET name = $2, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(name)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to rename group", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a group. Membership and privilege links cascade.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete group", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Add a user to a group. Adding an existing member is a no-op.
    pub async fn add_member(&self, group_id: i64, user_id: i64) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO user_groups (user_id, group_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(group_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add group member", e))?;
        Ok(())
    }

    /// Remove a user from a group. Returns `true` if a membership row was
    /// removed.
    pub async fn remove_member(&self, group_id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM user_groups WHERE user_id = $1 AND group_id = $2")
            .bind(user_id)
            .bind(group_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove group member", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the members of a group.
    pub async fn count_members(&self, group_id: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_groups WHERE group_id = $1")
            .bind(group_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count group members", e)
            })
    }

    /// Replace the privilege set of a group.
    pub async fn replace_privileges(&self, group_id: i64, privilege_ids: &[i64]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM group_privileges WHERE group_id = $1")
            .bind(group_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear group privileges", e)
            })?;

        for privilege_id in privilege_ids {
            sqlx::query("INSERT INTO group_privileges (group_id, privilege_id) VALUES ($1, $2)")
                .bind(group_id)
                .bind(privilege_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to assign privilege", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    /// Load the privilege set onto a fetched group row.
    async fn attach_privileges(&self, group: Option<Group>) -> AppResult<Option<Group>> {
        let Some(mut group) = group else {
            return Ok(None);
        };

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

        Ok(Some(group))
    }
}
