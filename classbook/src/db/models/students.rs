//! Database models for students.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::types::StudentId;

/// Storage row for the `student` table
#[derive(Debug, Clone, FromRow)]
pub(crate) struct StudentRow {
    pub student_id: StudentId,
    pub student_name: String,
    pub grade: i64,
    pub created_at: DateTime<Utc>,
}

/// Domain record for a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: StudentId,
    pub student_name: String,
    pub grade: i64,
    pub created_at: DateTime<Utc>,
}

/// Request for creating a student. Identity and `created_at` are assigned by storage.
#[derive(Debug, Clone)]
pub struct StudentCreateDBRequest {
    pub student_name: String,
    pub grade: i64,
}

/// Request for overwriting a student's mutable fields
#[derive(Debug, Clone)]
pub struct StudentUpdateDBRequest {
    pub student_name: String,
    pub grade: i64,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            student_id: row.student_id,
            student_name: row.student_name,
            grade: row.grade,
            created_at: row.created_at,
        }
    }
}

impl From<Student> for StudentRow {
    fn from(student: Student) -> Self {
        Self {
            student_id: student.student_id,
            student_name: student.student_name,
            grade: student.grade,
            created_at: student.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_record_convert_losslessly() {
        let row = StudentRow {
            student_id: 7,
            student_name: "Test".to_string(),
            grade: 90,
            created_at: Utc::now(),
        };

        let student = Student::from(row.clone());
        assert_eq!(student.student_id, 7);
        assert_eq!(student.student_name, "Test");
        assert_eq!(student.grade, 90);
        assert_eq!(student.created_at, row.created_at);

        let back = StudentRow::from(student);
        assert_eq!(back.student_id, row.student_id);
        assert_eq!(back.student_name, row.student_name);
    }

    #[test]
    fn mapping_does_not_validate() {
        // Invalid values pass straight through; validation belongs to the caller
        let row = StudentRow {
            student_id: 1,
            student_name: String::new(),
            grade: -5,
            created_at: Utc::now(),
        };

        let student = Student::from(row);
        assert!(student.student_name.is_empty());
        assert_eq!(student.grade, -5);
    }
}
