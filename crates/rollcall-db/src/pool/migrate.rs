//! Schema migrations applied at startup

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Apply every pending migration found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrateError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir).await?;

    info!(
        dir = %dir.display(),
        available = migrator.iter().count(),
        "Running database migrations"
    );
    migrator.run(pool).await
}
