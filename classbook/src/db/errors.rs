//! Translation of storage-level outcomes into the database error taxonomy.
//!
//! Every repository funnels driver results through this module, so two behaviourally
//! identical storage failures always surface as the same [`DbError`] no matter which
//! table produced them:
//!
//! | Storage signal                                   | [`DbError`]                         |
//! |--------------------------------------------------|-------------------------------------|
//! | single-row fetch returned no rows                | [`DbError::NotFound`]               |
//! | update/delete affected zero rows                 | [`DbError::NotFound`]               |
//! | write referenced a missing parent row (23503)    | [`DbError::ForeignKeyViolation`]    |
//! | anything else                                    | [`DbError::Storage`]                |

use thiserror::Error;

/// Unified error type for database operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// The targeted row does not exist
    #[error("Entity not found")]
    NotFound,

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation")]
    ForeignKeyViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Any other driver failure: connectivity, malformed query, cancellation, ...
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using proper sqlx error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => DbError::ForeignKeyViolation {
                constraint: db_err.constraint().map(|s| s.to_string()),
                table: db_err.table().map(|s| s.to_string()),
                message: db_err.message().to_string(),
            },
            // Everything else is opaque to callers - keep the driver message for diagnostics
            _ => DbError::Storage(anyhow::Error::from(err)),
        }
    }
}

/// Treat a mutation that touched no rows as a lookup miss.
///
/// Update and delete statements key on the primary key (or on the parent key for class
/// rows), so zero affected rows means nothing matched. No separate existence check is made.
pub fn ensure_rows_affected(rows_affected: u64) -> Result<u64> {
    if rows_affected == 0 {
        return Err(DbError::NotFound);
    }
    Ok(rows_affected)
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
