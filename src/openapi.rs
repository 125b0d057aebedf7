//! OpenAPI document for the service, served at `GET /openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::schemas::{CourseCreate, CourseResponse, StudentCreate, StudentResponse};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Registry", description = "Students and their courses"),
    paths(
        handlers::student::create_student,
        handlers::student::list_students,
        handlers::student::read_student,
        handlers::course::create_course,
        handlers::course::list_courses,
        handlers::course::read_course,
    ),
    components(schemas(
        StudentCreate,
        StudentResponse,
        CourseCreate,
        CourseResponse,
        ErrorBody,
        ErrorDetail
    )),
    tags(
        (name = "students", description = "Student records"),
        (name = "courses", description = "Course records")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
