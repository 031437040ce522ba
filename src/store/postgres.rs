// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        score::{CourseScore, StudentPercentage},
        student::Student,
    },
    store::ScoreStore,
};

/// `percentage` is REAL in the schema. Widening goes through NUMERIC so the
/// stored decimal (66.67) comes back as written, not as 66.66999816894531.
const COURSE_SCORE_COLUMNS: &str = r#"
    s.id,
    s.course_id,
    s.total_marks,
    s.max_marks,
    s.percentage::NUMERIC::FLOAT8 AS percentage,
    s.answer_sheet_url,
    s.feedback,
    c.course_name,
    c.course_code,
    s.checked_by_teacher_id AS teacher_id
"#;

/// Score store backed by the Postgres pool.
#[derive(Clone)]
pub struct PgScoreStore {
    pool: PgPool,
}

impl PgScoreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, student_id, name, email, profile_picture_url, created_at
            FROM students
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up student by email: {:?}", e);
            AppError::from(e)
        })?;

        Ok(student)
    }

    async fn find_score_by_student_and_course(
        &self,
        student_id: &str,
        course_id: i32,
    ) -> Result<Option<CourseScore>, AppError> {
        let sql = format!(
            r#"
            SELECT {COURSE_SCORE_COLUMNS}
            FROM scores s
            LEFT JOIN courses c ON s.course_id = c.id
            WHERE s.course_id = $1 AND s.student_id = $2
            ORDER BY s.id
            LIMIT 1
            "#
        );

        let score = sqlx::query_as::<_, CourseScore>(&sql)
            .bind(course_id)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch score for course {}: {:?}", course_id, e);
                AppError::from(e)
            })?;

        Ok(score)
    }

    async fn list_percentages_by_course(&self, course_id: i32) -> Result<Vec<f64>, AppError> {
        let percentages = sqlx::query_scalar::<_, f64>(
            "SELECT percentage::NUMERIC::FLOAT8 FROM scores WHERE course_id = $1",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch population of course {}: {:?}", course_id, e);
            AppError::from(e)
        })?;

        Ok(percentages)
    }

    async fn list_scores_by_student(&self, student_id: &str) -> Result<Vec<CourseScore>, AppError> {
        let sql = format!(
            r#"
            SELECT {COURSE_SCORE_COLUMNS}
            FROM scores s
            LEFT JOIN courses c ON s.course_id = c.id
            WHERE s.student_id = $1
            ORDER BY s.id
            "#
        );

        let scores = sqlx::query_as::<_, CourseScore>(&sql)
            .bind(student_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch scores of student: {:?}", e);
                AppError::from(e)
            })?;

        Ok(scores)
    }

    async fn list_all_scores(&self) -> Result<Vec<StudentPercentage>, AppError> {
        let population = sqlx::query_as::<_, StudentPercentage>(
            "SELECT student_id, percentage::NUMERIC::FLOAT8 AS percentage FROM scores ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch score population: {:?}", e);
            AppError::from(e)
        })?;

        Ok(population)
    }
}
