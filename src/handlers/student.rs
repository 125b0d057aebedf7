//! Student handlers: create, list, read.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{Pagination, ValidatedJson};
use crate::handlers::parse_id;
use crate::schemas::{StudentCreate, StudentResponse};
use crate::service::StudentService;
use crate::session::Session;
use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/students/",
    tag = "students",
    request_body = StudentCreate,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Storage failure, e.g. duplicate email", body = ErrorBody),
    )
)]
pub async fn create_student(
    mut session: Session,
    ValidatedJson(input): ValidatedJson<StudentCreate>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::create(session.conn(), &input).await?;
    session.commit().await?;
    tracing::info!(id = student.id, "student created");
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/students/",
    tag = "students",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 10, max 1000)"),
    ),
    responses(
        (status = 200, description = "One page of students", body = [StudentResponse]),
        (status = 422, description = "Invalid pagination", body = ErrorBody),
    )
)]
pub async fn list_students(
    mut session: Session,
    page: Pagination,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = StudentService::list(session.conn(), page).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student with nested courses", body = StudentResponse),
        (status = 404, description = "No student with this id", body = ErrorBody),
    )
)]
pub async fn read_student(
    mut session: Session,
    Path(id_str): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let id = parse_id(&id_str)?;
    let student = StudentService::read(session.conn(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    Ok(Json(student))
}
