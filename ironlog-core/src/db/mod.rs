pub mod models;
pub mod operations;

use anyhow::Result;
use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::OnceCell;

static DB_PATH: OnceCell<String> = OnceCell::const_new();

pub async fn get_db_path() -> Result<&'static String> {
    DB_PATH
        .get_or_try_init(|| async {
            env::var("DATABASE_URL").map_err(|_| {
                anyhow::anyhow!("DATABASE_URL must be specified or present in the environment")
            })
        })
        .await
}

pub async fn set_db_path(path: &str) -> Result<()> {
    DB_PATH
        .set(path.to_string())
        .map_err(|e| anyhow::anyhow!(format!("Failed to set DB_PATH: {:?}", e)))
}

/// Opens a pool on a file path or `sqlite:` URL, creating the file when missing.
pub async fn connect_pool(db_path: &str) -> Result<SqlitePool> {
    let options = if db_path.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(db_path)?
    } else {
        SqliteConnectOptions::new().filename(db_path)
    };
    let options = options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_millis(5000))
        .foreign_keys(true);

    debug!("Opening database at {}", db_path);
    SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create DB pool: {}", e))
}

/// A single-connection in-memory pool. The connection is never recycled, so
/// the database lives as long as the pool.
pub async fn memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create in-memory DB pool: {}", e))
}

pub async fn drop_all_tables(pool: &SqlitePool) -> Result<()> {
    for table in [
        "personal_record_history",
        "personal_records",
        "goals",
        "workout_sets",
        "workout_sessions",
        "routine_exercises",
        "routines",
        "exercises",
        "muscle_groups",
        "users",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(pool)
            .await?;
    }
    Ok(())
}

struct Migration {
    name: &'static str,
    up_sql: &'static str,
}

const MIGRATION_2025_11_11_220309_0000_SETUP_TABLES: &str =
    include_str!("../../../migrations/2025-11-11-220309-0000_setup_tables/up.sql");

const MIGRATIONS: &[Migration] = &[Migration {
    name: "2025-11-11-220309-0000_setup_tables",
    up_sql: MIGRATION_2025_11_11_220309_0000_SETUP_TABLES,
}];

async fn init_migrations_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER NOT NULL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL DEFAULT (CAST(strftime('%s','now') AS INTEGER))
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn is_migration_applied(pool: &SqlitePool, migration_name: &str) -> Result<bool> {
    let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _migrations WHERE name = ?1")
        .bind(migration_name)
        .fetch_one(pool)
        .await?;
    Ok(result > 0)
}

fn parse_sql_statements(sql: &str) -> Vec<String> {
    sql.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with("--")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Applies pending migrations. Each migration runs in its own transaction
/// together with its bookkeeping row.
pub async fn init_database(pool: &SqlitePool) -> Result<()> {
    init_migrations_table(pool).await?;

    for migration in MIGRATIONS {
        if is_migration_applied(pool, migration.name).await? {
            debug!("Migration {} already applied, skipping", migration.name);
            continue;
        }

        info!("Applying migration: {}", migration.name);
        let mut tx = pool.begin().await?;
        for statement in parse_sql_statements(migration.up_sql) {
            sqlx::query(&statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    anyhow::anyhow!(
                        "Failed to execute migration statement in {}: {} - Error: {}",
                        migration.name,
                        statement,
                        e
                    )
                })?;
        }
        sqlx::query("INSERT INTO _migrations (name) VALUES (?1)")
            .bind(migration.name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        info!("Migration {} applied successfully", migration.name);
    }

    Ok(())
}
