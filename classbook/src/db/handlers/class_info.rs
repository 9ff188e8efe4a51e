//! Database repository for class enrollments.
//!
//! `class_info.student_id` references `student.student_id`. The repository never checks that
//! the student exists before writing; storage rejects the insert and the rejection surfaces as
//! [`DbError::ForeignKeyViolation`](crate::db::errors::DbError::ForeignKeyViolation).

use sqlx::PgConnection;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::{
    db::{
        errors::{Result, ensure_rows_affected},
        handlers::repository::ClassInfoRepository,
        models::class_info::{ClassInfo, ClassInfoCreateDBRequest, ClassInfoRow, ClassInfoUpdateDBRequest},
        storage::Storage,
    },
    types::{ClassInfoId, StudentId},
};

pub struct ClassInfos<'c> {
    db: Storage<'c>,
}

impl<'c> ClassInfos<'c> {
    pub fn new(db: &'c mut PgConnection, cancel: CancellationToken) -> Self {
        Self {
            db: Storage::new(db, cancel),
        }
    }
}

#[async_trait::async_trait]
impl<'c> ClassInfoRepository for ClassInfos<'c> {
    type CreateRequest = ClassInfoCreateDBRequest;
    type UpdateRequest = ClassInfoUpdateDBRequest;
    type Response = ClassInfo;
    type Id = ClassInfoId;
    type StudentId = StudentId;

    #[instrument(skip(self, request), fields(student_id = request.student_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Id> {
        let id: ClassInfoId = self
            .db
            .query_scalar(
                sqlx::query_scalar("INSERT INTO class_info (student_id, class_name) VALUES ($1, $2) RETURNING id")
                    .bind(request.student_id)
                    .bind(&request.class_name),
            )
            .await?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn get_by_student_id(&mut self, student_id: Self::StudentId) -> Result<Vec<Self::Response>> {
        let rows = self
            .db
            .query_rows(
                sqlx::query_as::<_, ClassInfoRow>("SELECT id, student_id, class_name FROM class_info WHERE student_id = $1 ORDER BY id")
                    .bind(student_id),
            )
            .await?;

        Ok(rows.into_iter().map(ClassInfo::from).collect())
    }

    #[instrument(skip(self, request), err)]
    async fn update_by_student_id(&mut self, student_id: Self::StudentId, request: &Self::UpdateRequest) -> Result<()> {
        let rows_affected = self
            .db
            .exec(
                sqlx::query(
                    r#"
            UPDATE class_info
            SET class_name = $2
            WHERE student_id = $1
            "#,
                )
                .bind(student_id)
                .bind(&request.class_name),
            )
            .await?;

        ensure_rows_affected(rows_affected)?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete_by_student_id(&mut self, student_id: Self::StudentId) -> Result<()> {
        let rows_affected = self
            .db
            .exec(sqlx::query("DELETE FROM class_info WHERE student_id = $1").bind(student_id))
            .await?;

        tracing::debug!(rows_affected, "deleted class rows");
        ensure_rows_affected(rows_affected)?;
        Ok(())
    }
}
