use std::collections::HashSet;

use sqlx::migrate::Migrate;
use sqlx::MySqlPool;
use tracing::info;

use crate::{MigrationError, MIGRATOR};

/// Result of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// Every embedded migration was already recorded against the target.
    NoChange,
    /// Number of migrations newly applied by this run.
    Applied(usize),
}

/// Apply every embedded migration not yet recorded against the target.
///
/// Pending migrations run in ascending version order; the watermark advances
/// transactionally per file (runner policy). Invoking with nothing pending
/// is the distinguished [`MigrateOutcome::NoChange`], which callers treat as
/// success. Any SQL error aborts the run and surfaces unchanged.
pub async fn apply(pool: &MySqlPool) -> Result<MigrateOutcome, MigrationError> {
    let pending = {
        let mut conn = pool.acquire().await?;
        conn.ensure_migrations_table(&MIGRATOR.table_name).await?;

        let applied: HashSet<i64> = conn
            .list_applied_migrations(&MIGRATOR.table_name)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        MIGRATOR
            .iter()
            .filter(|m| !applied.contains(&m.version))
            .count()
    };

    if pending == 0 {
        info!("No pending migrations");
        return Ok(MigrateOutcome::NoChange);
    }

    MIGRATOR.run(pool).await?;
    info!(applied = pending, "Applied pending migrations");

    Ok(MigrateOutcome::Applied(pending))
}
