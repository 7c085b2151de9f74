//! Schema migration runner.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;

/// Migrations embedded at compile time from the workspace `migrations/`
/// directory, so a deployed binary cannot drift from its schema.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies any schema migrations the database has not seen yet.
///
/// Idempotent; called once at startup before any repository is
/// constructed.
pub async fn apply(pool: &PgPool) -> AppResult<()> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Schema migration failed: {e}"),
            e,
        )
    })?;

    info!(embedded = MIGRATOR.migrations.len(), "schema up to date");
    Ok(())
}
