//! Request extractors: per-request session, validated JSON bodies, pagination.

pub mod json;
pub mod pagination;
pub mod session;
pub use json::{Validate, ValidatedJson};
pub use pagination::Pagination;
