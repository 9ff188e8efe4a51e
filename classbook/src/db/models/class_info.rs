//! Database models for class enrollments.

use sqlx::FromRow;

use crate::types::{ClassInfoId, StudentId};

/// Storage row for the `class_info` table
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ClassInfoRow {
    pub id: ClassInfoId,
    pub student_id: StudentId,
    pub class_name: String,
}

/// Domain record for one class a student is enrolled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub id: ClassInfoId,
    pub student_id: StudentId,
    pub class_name: String,
}

/// Request for enrolling a student in a class.
///
/// `student_id` must reference an existing student; storage enforces that, not the
/// repository.
#[derive(Debug, Clone)]
pub struct ClassInfoCreateDBRequest {
    pub student_id: StudentId,
    pub class_name: String,
}

/// Request for renaming the class rows of a student
#[derive(Debug, Clone)]
pub struct ClassInfoUpdateDBRequest {
    pub class_name: String,
}

impl From<ClassInfoRow> for ClassInfo {
    fn from(row: ClassInfoRow) -> Self {
        Self {
            id: row.id,
            student_id: row.student_id,
            class_name: row.class_name,
        }
    }
}

impl From<ClassInfo> for ClassInfoRow {
    fn from(class_info: ClassInfo) -> Self {
        Self {
            id: class_info.id,
            student_id: class_info.student_id,
            class_name: class_info.class_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_record_convert_losslessly() {
        let row = ClassInfoRow {
            id: 1,
            student_id: 1,
            class_name: "math".to_string(),
        };

        let class_info = ClassInfo::from(row);
        assert_eq!(
            class_info,
            ClassInfo {
                id: 1,
                student_id: 1,
                class_name: "math".to_string(),
            }
        );

        let back = ClassInfoRow::from(class_info);
        assert_eq!(back.id, 1);
        assert_eq!(back.class_name, "math");
    }
}
