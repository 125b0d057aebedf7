//! HTTP handlers for the student and course resources.

pub mod course;
pub mod student;
pub use course::*;
pub use student::*;

use crate::error::AppError;

/// Path ids are integers; anything else is a validation failure rather than a routing miss.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::Validation(format!("id must be an integer, got '{}'", id_str)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("17").unwrap(), 17);
        assert!(matches!(parse_id("abc"), Err(AppError::Validation(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::Validation(_))));
    }
}
