//! Schema setup and teardown from the SQL files shipped with this crate.
//!
//! `migrations/` is applied oldest file first and `cleanup/` newest file
//! first. Each run happens in a single database transaction, so a failing
//! file leaves the schema as it was. Hosts that manage migrations with
//! `sqlx migrate` can ignore this module.

use sqlx::PgPool;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOrder {
    OldestFirst,
    NewestFirst,
}

/// Apply every file in `migrations/` and return the files run, in order.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use fish_supply_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let applied = init_database(pool).await?;
/// assert!(!applied.is_empty());
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<Vec<PathBuf>, sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    run_scripts(pool, &migrations_dir, ScriptOrder::OldestFirst).await
}

/// Drop the schema by running `cleanup/`; returns the files run.
pub async fn cleanup_database(pool: &PgPool) -> Result<Vec<PathBuf>, sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    run_scripts(pool, &cleanup_dir, ScriptOrder::NewestFirst).await
}

/// The `.sql` files directly under `dir`, sorted by file name.
pub fn sql_scripts(dir: &Path, order: ScriptOrder) -> io::Result<Vec<PathBuf>> {
    let mut scripts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            scripts.push(path);
        }
    }
    scripts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if order == ScriptOrder::NewestFirst {
        scripts.reverse();
    }
    Ok(scripts)
}

async fn run_scripts(
    pool: &PgPool,
    dir: &Path,
    order: ScriptOrder,
) -> Result<Vec<PathBuf>, sqlx::Error> {
    let scripts = sql_scripts(dir, order)?;
    let mut tx = pool.begin().await?;
    for path in &scripts {
        let sql = fs::read_to_string(path)?;
        tracing::info!(file = %path.display(), "Running SQL script");
        sqlx::raw_sql(&sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(dir = %dir.display(), count = scripts.len(), "SQL scripts applied");
    Ok(scripts)
}
