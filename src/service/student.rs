//! Student persistence. Every read returns students with their nested courses.

use crate::error::AppError;
use crate::extractors::Pagination;
use crate::models::{CourseRecord, StudentRecord};
use crate::schemas::{StudentCreate, StudentResponse};
use crate::service::CourseService;
use sqlx::SqliteConnection;
use std::collections::HashMap;

const SELECT_STUDENT: &str = "SELECT id, name, email, age FROM students";

pub struct StudentService;

impl StudentService {
    /// Insert one student and re-read it. A duplicate email fails on the unique index.
    pub async fn create(conn: &mut SqliteConnection, input: &StudentCreate) -> Result<StudentResponse, AppError> {
        let sql = "INSERT INTO students (name, email, age) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        let id = sqlx::query(sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.age)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        let record = Self::fetch(conn, id)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))?;
        Ok(StudentResponse::from_record(record, Vec::new()))
    }

    pub async fn read(conn: &mut SqliteConnection, id: i64) -> Result<Option<StudentResponse>, AppError> {
        let Some(record) = Self::fetch(conn, id).await? else {
            return Ok(None);
        };
        let courses = CourseService::list_for_students(conn, &[record.id]).await?;
        Ok(Some(StudentResponse::from_record(record, courses)))
    }

    /// One page in insertion order; courses for the whole page are loaded in a single query.
    pub async fn list(conn: &mut SqliteConnection, page: Pagination) -> Result<Vec<StudentResponse>, AppError> {
        let sql = format!("{} ORDER BY id LIMIT ? OFFSET ?", SELECT_STUDENT);
        tracing::debug!(sql = %sql, skip = page.skip, limit = page.limit, "query");
        let records = sqlx::query_as::<_, StudentRecord>(&sql)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(&mut *conn)
            .await?;
        let ids: Vec<i64> = records.iter().map(|s| s.id).collect();
        let mut by_student: HashMap<i64, Vec<CourseRecord>> = HashMap::new();
        for course in CourseService::list_for_students(conn, &ids).await? {
            by_student.entry(course.student_id).or_default().push(course);
        }
        Ok(records
            .into_iter()
            .map(|s| {
                let courses = by_student.remove(&s.id).unwrap_or_default();
                StudentResponse::from_record(s, courses)
            })
            .collect())
    }

    async fn fetch(conn: &mut SqliteConnection, id: i64) -> Result<Option<StudentRecord>, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_STUDENT);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, StudentRecord>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }
}
