//! Persistence operations and request validation.

pub mod course;
pub mod student;
pub mod validation;
pub use course::CourseService;
pub use student::StudentService;
pub use validation::RequestValidator;
