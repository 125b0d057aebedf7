//! Request and response shapes. Inputs omit server-assigned fields; outputs carry ids and nested records.

use crate::models::{CourseRecord, StudentRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct StudentCreate {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = 20)]
    pub age: i64,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CourseCreate {
    #[schema(example = "Math 101")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Basic Math Course")]
    pub description: Option<String>,
    pub student_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub student_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub courses: Vec<CourseResponse>,
}

impl From<CourseRecord> for CourseResponse {
    fn from(c: CourseRecord) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            student_id: c.student_id,
        }
    }
}

impl StudentResponse {
    pub fn from_record(s: StudentRecord, courses: Vec<CourseRecord>) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            age: s.age,
            courses: courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}
