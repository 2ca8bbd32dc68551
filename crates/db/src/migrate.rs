//! Startup migration runner.
//!
//! Modules contribute DDL through `Module::migrations`; the registry hands
//! them over in registration order and this runner applies each one at most
//! once, keyed by `{module}:{migration id}` in a tracking table.

use anyhow::Context;
use sqlx::PgPool;

use catalog_kernel::Migration;

const TRACKING_TABLE: &str = "CREATE TABLE IF NOT EXISTS _catalog_migrations (
    id TEXT PRIMARY KEY,
    applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Apply every migration that has not run yet.
pub async fn run(pool: &PgPool, migrations: &[(String, Migration)]) -> anyhow::Result<()> {
    sqlx::query(TRACKING_TABLE)
        .execute(pool)
        .await
        .context("failed to create migration tracking table")?;

    for (module, migration) in migrations {
        let key = migration_key(module, migration.id);

        let applied = sqlx::query_scalar::<_, String>(
            "SELECT id FROM _catalog_migrations WHERE id = $1",
        )
        .bind(&key)
        .fetch_optional(pool)
        .await?;

        if applied.is_some() {
            continue;
        }

        tracing::info!(migration = %key, "applying migration");

        // raw_sql: migrations may contain several statements.
        sqlx::raw_sql(migration.up)
            .execute(pool)
            .await
            .with_context(|| format!("migration '{key}' failed"))?;

        sqlx::query("INSERT INTO _catalog_migrations (id) VALUES ($1)")
            .bind(&key)
            .execute(pool)
            .await?;
    }

    Ok(())
}

fn migration_key(module: &str, id: &str) -> String {
    format!("{module}:{id}")
}
