//! API request/response models for class enrollments.

use crate::db::models::class_info::{ClassInfo, ClassInfoCreateDBRequest, ClassInfoUpdateDBRequest};
use crate::errors::Error;
use crate::types::{ClassInfoId, StudentId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for enrolling a student in a class.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassInfoCreate {
    /// Existing student to enroll
    #[schema(example = 1)]
    pub student_id: StudentId,
    #[schema(example = "math")]
    pub class_name: String,
}

/// Request body for renaming the classes of a student. Every class row of the student is
/// updated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassInfoUpdate {
    #[schema(example = 1)]
    pub student_id: StudentId,
    #[schema(example = "physics")]
    pub class_name: String,
}

/// A single class enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ClassInfoResponse {
    pub id: ClassInfoId,
    pub student_id: StudentId,
    pub class_name: String,
}

impl From<ClassInfo> for ClassInfoResponse {
    fn from(class: ClassInfo) -> Self {
        Self {
            id: class.id,
            student_id: class.student_id,
            class_name: class.class_name,
        }
    }
}

fn validate_class_name(class_name: &str) -> Result<String, Error> {
    let name = class_name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "class_name must not be empty".to_string(),
        });
    }
    Ok(name.to_string())
}

impl TryFrom<&ClassInfoCreate> for ClassInfoCreateDBRequest {
    type Error = Error;

    fn try_from(create: &ClassInfoCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            student_id: create.student_id,
            class_name: validate_class_name(&create.class_name)?,
        })
    }
}

impl TryFrom<&ClassInfoUpdate> for ClassInfoUpdateDBRequest {
    type Error = Error;

    fn try_from(update: &ClassInfoUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            class_name: validate_class_name(&update.class_name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_validation() {
        let ok = ClassInfoCreateDBRequest::try_from(&ClassInfoCreate {
            student_id: 3,
            class_name: " math ".to_string(),
        })
        .unwrap();
        assert_eq!(ok.student_id, 3);
        assert_eq!(ok.class_name, "math");

        let blank = ClassInfoUpdateDBRequest::try_from(&ClassInfoUpdate {
            student_id: 3,
            class_name: "  ".to_string(),
        });
        assert!(matches!(blank, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_response_from_record() {
        let response = ClassInfoResponse::from(ClassInfo {
            id: 1,
            student_id: 1,
            class_name: "math".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"id": 1, "student_id": 1, "class_name": "math"})
        );
    }
}
