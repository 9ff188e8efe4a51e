use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    api::models::class_info::{ClassInfoCreate, ClassInfoResponse, ClassInfoUpdate},
    db::{
        errors::DbError,
        handlers::{ClassInfoRepository, ClassInfos},
        models::class_info::{ClassInfoCreateDBRequest, ClassInfoUpdateDBRequest},
    },
    errors::{Error, Result},
    types::StudentId,
};

#[utoipa::path(
    post,
    path = "/class_info",
    tag = "classes",
    summary = "Enroll student in a class",
    request_body = ClassInfoCreate,
    responses(
        (status = 201, description = "Class created", body = ClassInfoResponse),
        (status = 400, description = "Empty class name"),
        (status = 409, description = "Student does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_class_info(
    State(state): State<AppState>,
    Json(create): Json<ClassInfoCreate>,
) -> Result<(StatusCode, Json<ClassInfoResponse>)> {
    let request = ClassInfoCreateDBRequest::try_from(&create)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = ClassInfos::new(&mut pool_conn, state.shutdown.child_token());

    let id = repo.create(&request).await.map_err(|e| match e {
        DbError::ForeignKeyViolation { .. } => Error::Conflict {
            message: format!("Student with ID {} does not exist", request.student_id),
        },
        other => other.into(),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ClassInfoResponse {
            id,
            student_id: request.student_id,
            class_name: request.class_name,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/class_info",
    tag = "classes",
    summary = "Rename a student's classes",
    request_body = ClassInfoUpdate,
    responses(
        (status = 204, description = "Classes updated"),
        (status = 400, description = "Empty class name"),
        (status = 404, description = "Student has no classes"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_class_info(State(state): State<AppState>, Json(update): Json<ClassInfoUpdate>) -> Result<StatusCode> {
    let request = ClassInfoUpdateDBRequest::try_from(&update)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = ClassInfos::new(&mut pool_conn, state.shutdown.child_token());
    repo.update_by_student_id(update.student_id, &request)
        .await
        .map_err(|e| Error::from(e).for_resource("Classes for student", update.student_id))?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/class_info/{student_id}",
    tag = "classes",
    summary = "List a student's classes",
    responses(
        (status = 200, description = "Classes of the student", body = Vec<ClassInfoResponse>),
        (status = 400, description = "Student ID is not an integer"),
        (status = 404, description = "Student has no classes"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("student_id" = i64, Path, description = "Student ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_class_info(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Vec<ClassInfoResponse>>> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = ClassInfos::new(&mut pool_conn, state.shutdown.child_token());

    let classes = repo.get_by_student_id(student_id).await?;
    if classes.is_empty() {
        return Err(Error::NotFound {
            resource: "Classes for student".to_string(),
            id: student_id.to_string(),
        });
    }

    Ok(Json(classes.into_iter().map(ClassInfoResponse::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/class_info/{student_id}",
    tag = "classes",
    summary = "Delete a student's classes",
    responses(
        (status = 204, description = "Classes deleted"),
        (status = 400, description = "Student ID is not an integer"),
        (status = 404, description = "Student has no classes"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("student_id" = i64, Path, description = "Student ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_class_info(State(state): State<AppState>, Path(student_id): Path<StudentId>) -> Result<StatusCode> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = ClassInfos::new(&mut pool_conn, state.shutdown.child_token());

    repo.delete_by_student_id(student_id)
        .await
        .map_err(|e| Error::from(e).for_resource("Classes for student", student_id))?;

    Ok(StatusCode::NO_CONTENT)
}
