//! Database repository for students.

use sqlx::PgConnection;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::{
    db::{
        errors::{Result, ensure_rows_affected},
        handlers::repository::StudentRepository,
        models::students::{Student, StudentCreateDBRequest, StudentRow, StudentUpdateDBRequest},
        storage::Storage,
    },
    types::StudentId,
};

pub struct Students<'c> {
    db: Storage<'c>,
}

impl<'c> Students<'c> {
    pub fn new(db: &'c mut PgConnection, cancel: CancellationToken) -> Self {
        Self {
            db: Storage::new(db, cancel),
        }
    }
}

#[async_trait::async_trait]
impl<'c> StudentRepository for Students<'c> {
    type CreateRequest = StudentCreateDBRequest;
    type UpdateRequest = StudentUpdateDBRequest;
    type Response = Student;
    type Id = StudentId;

    #[instrument(skip(self, request), fields(grade = request.grade), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Id> {
        let student_id: StudentId = self
            .db
            .query_scalar(
                sqlx::query_scalar("INSERT INTO student (student_name, grade) VALUES ($1, $2) RETURNING student_id")
                    .bind(&request.student_name)
                    .bind(request.grade),
            )
            .await?;

        Ok(student_id)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Self::Response> {
        let row = self
            .db
            .get(
                sqlx::query_as::<_, StudentRow>(
                    "SELECT student_id, student_name, grade, created_at FROM student WHERE student_id = $1",
                )
                .bind(id),
            )
            .await?;

        Ok(Student::from(row))
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<()> {
        let rows_affected = self
            .db
            .exec(
                sqlx::query(
                    r#"
            UPDATE student
            SET student_name = $2, grade = $3
            WHERE student_id = $1
            "#,
                )
                .bind(id)
                .bind(&request.student_name)
                .bind(request.grade),
            )
            .await?;

        ensure_rows_affected(rows_affected)?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<()> {
        let rows_affected = self
            .db
            .exec(sqlx::query("DELETE FROM student WHERE student_id = $1").bind(id))
            .await?;

        ensure_rows_affected(rows_affected)?;
        Ok(())
    }
}
