//! API request/response models for students.

use crate::db::models::students::{Student, StudentCreateDBRequest, StudentUpdateDBRequest};
use crate::errors::Error;
use crate::types::StudentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentCreate {
    /// Full name; surrounding whitespace is trimmed and the result must not be empty
    #[schema(example = "Ada Lovelace")]
    pub student_name: String,
    /// Non-negative grade
    #[schema(example = 90, minimum = 0)]
    pub grade: i64,
}

/// Request body for replacing a student's name and grade.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentUpdate {
    /// Student to update
    #[schema(example = 1)]
    pub student_id: StudentId,
    #[schema(example = "Ada King")]
    pub student_name: String,
    #[schema(example = 92, minimum = 0)]
    pub grade: i64,
}

/// Returned after a student is created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StudentCreatedResponse {
    pub student_id: StudentId,
    pub student_name: String,
    pub grade: i64,
}

/// Full student details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StudentResponse {
    pub student_id: StudentId,
    pub student_name: String,
    pub grade: i64,
    /// When the student was first recorded
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            student_id: student.student_id,
            student_name: student.student_name,
            grade: student.grade,
            created_at: student.created_at,
        }
    }
}

fn validate_student(student_name: &str, grade: i64) -> Result<String, Error> {
    let name = student_name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "student_name must not be empty".to_string(),
        });
    }
    if grade < 0 {
        return Err(Error::Validation {
            message: format!("grade must not be negative, got {grade}"),
        });
    }
    Ok(name.to_string())
}

impl TryFrom<StudentCreate> for StudentCreateDBRequest {
    type Error = Error;

    fn try_from(create: StudentCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            student_name: validate_student(&create.student_name, create.grade)?,
            grade: create.grade,
        })
    }
}

impl TryFrom<&StudentUpdate> for StudentUpdateDBRequest {
    type Error = Error;

    fn try_from(update: &StudentUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            student_name: validate_student(&update.student_name, update.grade)?,
            grade: update.grade,
        })
    }
}
