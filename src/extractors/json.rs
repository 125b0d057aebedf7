//! JSON body extractor that runs field validation after deserialization.

use crate::error::AppError;
use crate::schemas::{CourseCreate, StudentCreate};
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Field-level rules applied once the body has the right shape.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

impl Validate for StudentCreate {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::validate_student(self)
    }
}

impl Validate for CourseCreate {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::validate_course(self)
    }
}

/// Like [`Json`], but every rejection (missing or mistyped field, malformed JSON,
/// wrong content type) and every rule failure is reported as 422.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
