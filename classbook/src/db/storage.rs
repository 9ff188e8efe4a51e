//! Statement primitives shared by every repository.
//!
//! [`Storage`] borrows one pooled connection for the lifetime of a repository and exposes
//! the four ways the repositories talk to PostgreSQL:
//!
//! - [`Storage::exec`]: run a statement and report how many rows it affected
//! - [`Storage::query_rows`]: run a query and map every returned row
//! - [`Storage::query_scalar`]: run a query returning exactly one value (e.g. `RETURNING id`)
//! - [`Storage::get`]: fetch exactly one row into a [`FromRow`] destination
//!
//! Each primitive races the statement against the caller's [`CancellationToken`] and
//! passes driver errors through [`DbError::from`], so repositories never translate errors
//! by hand.

use std::future::Future;

use sqlx::{
    FromRow, PgConnection, Postgres,
    postgres::{PgArguments, PgRow},
    query::{Query, QueryAs, QueryScalar},
};
use tokio_util::sync::CancellationToken;

use crate::db::errors::{DbError, Result};

pub struct Storage<'c> {
    conn: &'c mut PgConnection,
    cancel: CancellationToken,
}

impl<'c> Storage<'c> {
    pub fn new(conn: &'c mut PgConnection, cancel: CancellationToken) -> Self {
        Self { conn, cancel }
    }

    /// Execute a statement, returning the number of rows it affected
    pub async fn exec<'q>(&mut self, statement: Query<'q, Postgres, PgArguments>) -> Result<u64> {
        let result = cancellable(&self.cancel, statement.execute(&mut *self.conn)).await?;
        Ok(result.rows_affected())
    }

    /// Execute a query and map every returned row, in the order storage returns them
    pub async fn query_rows<'q, T>(&mut self, query: QueryAs<'q, Postgres, T, PgArguments>) -> Result<Vec<T>>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        cancellable(&self.cancel, query.fetch_all(&mut *self.conn)).await
    }

    /// Execute a query that yields a single value
    pub async fn query_scalar<'q, O>(&mut self, query: QueryScalar<'q, Postgres, O, PgArguments>) -> Result<O>
    where
        O: Send + Unpin,
        (O,): Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        cancellable(&self.cancel, query.fetch_one(&mut *self.conn)).await
    }

    /// Fetch exactly one row. An empty result becomes [`DbError::NotFound`].
    pub async fn get<'q, T>(&mut self, query: QueryAs<'q, Postgres, T, PgArguments>) -> Result<T>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        cancellable(&self.cancel, query.fetch_one(&mut *self.conn)).await
    }
}

/// Drive `fut` to completion unless `cancel` fires first.
///
/// Dropping the sqlx future mid-flight is safe: the connection is reset before it goes
/// back to the pool.
async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!("database operation cancelled before completion");
            Err(DbError::Storage(anyhow::anyhow!("database operation cancelled")))
        }
        result = fut => result.map_err(DbError::from),
    }
}
