//! Course persistence: insert, refresh, paged list, lookup by id and by owning students.

use crate::error::AppError;
use crate::extractors::Pagination;
use crate::models::CourseRecord;
use crate::schemas::CourseCreate;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

const SELECT_COURSE: &str = "SELECT id, name, description, student_id FROM courses";

pub struct CourseService;

impl CourseService {
    /// Insert one course and re-read it. `student_id` is passed through to storage unchecked.
    pub async fn create(conn: &mut SqliteConnection, input: &CourseCreate) -> Result<CourseRecord, AppError> {
        let sql = "INSERT INTO courses (name, description, student_id) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, student_id = input.student_id, "query");
        let id = sqlx::query(sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.student_id)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        Self::refresh(conn, id).await
    }

    /// Re-read a row that must exist (e.g. right after insert).
    pub async fn refresh(conn: &mut SqliteConnection, id: i64) -> Result<CourseRecord, AppError> {
        Self::read(conn, id)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn read(conn: &mut SqliteConnection, id: i64) -> Result<Option<CourseRecord>, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_COURSE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, CourseRecord>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// One page in insertion order.
    pub async fn list(conn: &mut SqliteConnection, page: Pagination) -> Result<Vec<CourseRecord>, AppError> {
        let sql = format!("{} ORDER BY id LIMIT ? OFFSET ?", SELECT_COURSE);
        tracing::debug!(sql = %sql, skip = page.skip, limit = page.limit, "query");
        let rows = sqlx::query_as::<_, CourseRecord>(&sql)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// All courses owned by any of `student_ids`, in insertion order. Used to fill nested course lists.
    pub async fn list_for_students(
        conn: &mut SqliteConnection,
        student_ids: &[i64],
    ) -> Result<Vec<CourseRecord>, AppError> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_COURSE);
        qb.push(" WHERE student_id IN (");
        let mut ids = qb.separated(", ");
        for id in student_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY id");
        tracing::debug!(sql = %qb.sql(), count = student_ids.len(), "query");
        let rows = qb.build_query_as::<CourseRecord>().fetch_all(&mut *conn).await?;
        Ok(rows)
    }
}
