//! `/courses` routes. Collection paths are served with and without the trailing slash.

use crate::handlers::{create_course, list_courses, read_course};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn course_routes(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/", get(list_courses).post(create_course))
        .route("/courses/:id", get(read_course))
        .with_state(state)
}
