use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Request data failed validation before reaching the database
    #[error("{message}")]
    Validation { message: String },

    /// Requested resource not found
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// The write conflicts with related rows, e.g. a student who still has classes
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Conflict { .. } => StatusCode::CONFLICT,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::ForeignKeyViolation { .. } => StatusCode::CONFLICT,
                DbError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation { message } => message.clone(),
            Error::NotFound { resource, id } => {
                format!("{resource} with ID {id} not found")
            }
            Error::Conflict { message } => message.clone(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Resource not found".to_string(),
                DbError::ForeignKeyViolation { .. } => "Invalid reference to related resource".to_string(),
                DbError::Storage(_) => "Database error occurred".to_string(),
            },
            Error::Other(_) => "Internal server error".to_string(),
        }
    }

    /// Replace a bare [`DbError::NotFound`] with a not-found error naming the resource
    pub fn for_resource(self, resource: &str, id: impl ToString) -> Self {
        match self {
            Error::Database(DbError::NotFound) => Error::NotFound {
                resource: resource.to_string(),
                id: id.to_string(),
            },
            other => other,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Storage(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(_) | Error::Conflict { .. } => {
                tracing::warn!("Database constraint error: {}", self);
            }
            Error::Validation { .. } | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = json!({ "message": self.user_message() });
        (status, axum::response::Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn foreign_key_violation() -> DbError {
        DbError::ForeignKeyViolation {
            constraint: Some("fk_student".to_string()),
            table: Some("class_info".to_string()),
            message: "insert or update on table \"class_info\" violates foreign key constraint \"fk_student\"".to_string(),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::Validation {
                message: "student_name must not be empty".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::Database(DbError::NotFound).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(Error::Database(foreign_key_violation()).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            Error::Database(DbError::Storage(anyhow::anyhow!("connection reset"))).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Other(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_message_hides_internals() {
        let storage = Error::Database(DbError::Storage(anyhow::anyhow!("password authentication failed for user")));
        assert_eq!(storage.user_message(), "Database error occurred");

        let fk = Error::Database(foreign_key_violation());
        assert!(!fk.user_message().contains("fk_student"));
    }

    #[test]
    fn test_for_resource_only_rewrites_not_found() {
        let err = Error::Database(DbError::NotFound).for_resource("Student", 42);
        assert!(matches!(&err, Error::NotFound { resource, id } if resource == "Student" && id == "42"));
        assert_eq!(err.user_message(), "Student with ID 42 not found");

        let err = Error::Database(foreign_key_violation()).for_resource("Student", 42);
        assert!(matches!(err, Error::Database(DbError::ForeignKeyViolation { .. })));
    }
}
