//! Course handlers: create, list, read.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{Pagination, ValidatedJson};
use crate::handlers::parse_id;
use crate::schemas::{CourseCreate, CourseResponse};
use crate::service::CourseService;
use crate::session::Session;
use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/courses/",
    tag = "courses",
    request_body = CourseCreate,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Storage failure, e.g. unknown student_id", body = ErrorBody),
    )
)]
pub async fn create_course(
    mut session: Session,
    ValidatedJson(input): ValidatedJson<CourseCreate>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::create(session.conn(), &input).await?;
    session.commit().await?;
    tracing::info!(id = course.id, student_id = course.student_id, "course created");
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

#[utoipa::path(
    get,
    path = "/courses/",
    tag = "courses",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 10, max 1000)"),
    ),
    responses(
        (status = 200, description = "One page of courses", body = [CourseResponse]),
        (status = 422, description = "Invalid pagination", body = ErrorBody),
    )
)]
pub async fn list_courses(
    mut session: Session,
    page: Pagination,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = CourseService::list(session.conn(), page).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "courses",
    params(("id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "No course with this id", body = ErrorBody),
    )
)]
pub async fn read_course(
    mut session: Session,
    Path(id_str): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let id = parse_id(&id_str)?;
    let course = CourseService::read(session.conn(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    Ok(Json(course.into()))
}
