//! Student registry: students and their courses over a JSON HTTP API, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod session;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, common_routes_with_ready, course_routes, student_routes};
pub use service::{CourseService, StudentService};
pub use session::Session;
pub use state::AppState;
pub use store::{connect, ensure_tables};
