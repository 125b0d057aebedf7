//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// The only state shared across requests; each request takes its own session from it.
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
