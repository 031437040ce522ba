// src/models/course.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'courses' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
