//! Pool construction and table DDL for `students` and `courses`.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Statements run in order by [`ensure_tables`]. Each is idempotent.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        age INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_students_name ON students (name)",
    "CREATE UNIQUE INDEX IF NOT EXISTS ix_students_email ON students (email)",
    r#"
    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        student_id INTEGER NOT NULL REFERENCES students (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_courses_name ON courses (name)",
    "CREATE INDEX IF NOT EXISTS ix_courses_student_id ON courses (student_id)",
];

/// Open a pool for `config.url`, creating the database file if missing. Foreign keys are enforced.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::debug!(url = %config.url, max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Create tables and indexes if they do not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
