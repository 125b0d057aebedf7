//! `?skip=&limit=` query parameters.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 1000;

/// Offset/limit window over a list. `skip` defaults to 0, `limit` to 10 (capped at 1000).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Deserialize)]
struct PageParams {
    skip: Option<i64>,
    limit: Option<i64>,
}

impl Pagination {
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, AppError> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if skip < 0 {
            return Err(AppError::Validation("skip must be non-negative".into()));
        }
        if limit < 0 {
            return Err(AppError::Validation("limit must be non-negative".into()));
        }
        Ok(Self {
            skip,
            limit: limit.min(MAX_LIMIT),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Pagination::new(params.skip, params.limit)
    }
}
