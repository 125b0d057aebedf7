//! `/students` routes. Collection paths are served with and without the trailing slash.

use crate::handlers::{create_student, list_students, read_student};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/", get(list_students).post(create_student))
        .route("/students/:id", get(read_student))
        .with_state(state)
}
