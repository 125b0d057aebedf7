//! Request-scoped unit of work.

use crate::error::AppError;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

/// One transaction held for the duration of a request.
///
/// Writes become visible only after [`Session::commit`]. A session dropped without
/// commit (handler error, panic, client disconnect) is rolled back and its connection
/// returned to the pool.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub async fn begin(pool: &SqlitePool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Connection all statements of this request run on.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
