use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    api::models::students::{StudentCreate, StudentCreatedResponse, StudentResponse, StudentUpdate},
    db::{
        errors::DbError,
        handlers::{StudentRepository, Students},
        models::students::{StudentCreateDBRequest, StudentUpdateDBRequest},
    },
    errors::{Error, Result},
    types::StudentId,
};

#[utoipa::path(
    post,
    path = "/student",
    tag = "students",
    summary = "Create student",
    request_body = StudentCreate,
    responses(
        (status = 201, description = "Student created", body = StudentCreatedResponse),
        (status = 400, description = "Empty name or negative grade"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(create): Json<StudentCreate>,
) -> Result<(StatusCode, Json<StudentCreatedResponse>)> {
    let request = StudentCreateDBRequest::try_from(create)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut pool_conn, state.shutdown.child_token());
    let student_id = repo.create(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(StudentCreatedResponse {
            student_id,
            student_name: request.student_name,
            grade: request.grade,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/student",
    tag = "students",
    summary = "Update student",
    request_body = StudentUpdate,
    responses(
        (status = 204, description = "Student updated"),
        (status = 400, description = "Empty name or negative grade"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_student(State(state): State<AppState>, Json(update): Json<StudentUpdate>) -> Result<StatusCode> {
    let request = StudentUpdateDBRequest::try_from(&update)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut pool_conn, state.shutdown.child_token());
    repo.update(update.student_id, &request)
        .await
        .map_err(|e| Error::from(e).for_resource("Student", update.student_id))?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/student/{student_id}",
    tag = "students",
    summary = "Get student",
    responses(
        (status = 200, description = "Student details", body = StudentResponse),
        (status = 400, description = "Student ID is not an integer"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("student_id" = i64, Path, description = "Student ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_student(State(state): State<AppState>, Path(student_id): Path<StudentId>) -> Result<Json<StudentResponse>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut pool_conn, state.shutdown.child_token());

    let student = repo
        .get_by_id(student_id)
        .await
        .map_err(|e| Error::from(e).for_resource("Student", student_id))?;

    Ok(Json(StudentResponse::from(student)))
}

#[utoipa::path(
    delete,
    path = "/student/{student_id}",
    tag = "students",
    summary = "Delete student",
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Student ID is not an integer"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Student still has classes"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("student_id" = i64, Path, description = "Student ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_student(State(state): State<AppState>, Path(student_id): Path<StudentId>) -> Result<StatusCode> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut pool_conn, state.shutdown.child_token());

    repo.delete(student_id).await.map_err(|e| match e {
        DbError::ForeignKeyViolation { .. } => Error::Conflict {
            message: format!("Student with ID {student_id} still has classes; delete them first"),
        },
        other => Error::from(other).for_resource("Student", student_id),
    })?;

    Ok(StatusCode::NO_CONTENT)
}
