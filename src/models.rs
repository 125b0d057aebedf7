//! Storage records, one struct per table row.

use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// `student_id` is the sole foreign key between the two tables.
#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct CourseRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub student_id: i64,
}
