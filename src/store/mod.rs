// src/store/mod.rs

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        score::{CourseScore, StudentPercentage},
        student::Student,
    },
};

pub use memory::InMemoryStore;
pub use postgres::PgScoreStore;

/// Read-only query surface over persisted students and scores.
///
/// Implementations signal failures as `AppError::StoreUnavailable`.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Resolves a session identity to a student.
    async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>, AppError>;

    async fn find_score_by_student_and_course(
        &self,
        student_id: &str,
        course_id: i32,
    ) -> Result<Option<CourseScore>, AppError>;

    /// Percentages of every student scored in the course.
    async fn list_percentages_by_course(&self, course_id: i32) -> Result<Vec<f64>, AppError>;

    /// All of a student's scores joined with course identity.
    async fn list_scores_by_student(&self, student_id: &str) -> Result<Vec<CourseScore>, AppError>;

    /// The full score population, used for the overall rank.
    async fn list_all_scores(&self) -> Result<Vec<StudentPercentage>, AppError>;
}
