//! Field rules for create requests. Shape and types are already enforced by deserialization.

use crate::error::AppError;
use crate::schemas::{CourseCreate, StudentCreate};
use regex::Regex;
use std::sync::OnceLock;

const NAME_MAX_LENGTH: usize = 255;
const DESCRIPTION_MAX_LENGTH: usize = 1000;
const EMAIL_MAX_LENGTH: usize = 320;
const AGE_MIN: i64 = 0;
const AGE_MAX: i64 = 150;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"))
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn validate_student(input: &StudentCreate) -> Result<(), AppError> {
        validate_name("name", &input.name)?;
        validate_email("email", &input.email)?;
        if input.age < AGE_MIN || input.age > AGE_MAX {
            return Err(AppError::Validation(format!(
                "age must be between {} and {}",
                AGE_MIN, AGE_MAX
            )));
        }
        Ok(())
    }

    /// Does not check that `student_id` exists; the foreign key is left to storage.
    pub fn validate_course(input: &CourseCreate) -> Result<(), AppError> {
        validate_name("name", &input.name)?;
        if let Some(description) = &input.description {
            if description.chars().count() > DESCRIPTION_MAX_LENGTH {
                return Err(AppError::Validation(format!(
                    "description must be at most {} characters",
                    DESCRIPTION_MAX_LENGTH
                )));
            }
        }
        if input.student_id < 1 {
            return Err(AppError::Validation("student_id must be a positive integer".into()));
        }
        Ok(())
    }
}

fn validate_name(col: &str, v: &str) -> Result<(), AppError> {
    if v.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be blank", col)));
    }
    if v.chars().count() > NAME_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            col, NAME_MAX_LENGTH
        )));
    }
    Ok(())
}

fn validate_email(col: &str, v: &str) -> Result<(), AppError> {
    if v.len() > EMAIL_MAX_LENGTH || !email_regex().is_match(v) {
        return Err(AppError::Validation(format!("{} must be a valid email", col)));
    }
    Ok(())
}
