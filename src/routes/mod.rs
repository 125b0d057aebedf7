//! Routers for each resource and the assembled application.

pub mod common;
pub mod course;
pub mod student;

pub use common::{common_routes, common_routes_with_ready};
pub use course::course_routes;
pub use student::student_routes;

use crate::config::AppConfig;
use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full service: students, courses, health/readiness, OpenAPI document.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(openapi_routes())
        .merge(student_routes(state.clone()))
        .merge(course_routes(state))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
