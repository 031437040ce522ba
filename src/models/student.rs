// src/models/student.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'students' table in the database.
/// Credentials live in the same table but are never read by this service.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,

    /// Stable student identifier; scores reference this, not `id`.
    pub student_id: String,

    pub name: String,

    /// Unique email, also the session identity.
    pub email: String,

    pub profile_picture_url: Option<String>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Public profile block of the dashboard response.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: i32,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub profile_picture_url: Option<String>,
}

impl From<Student> for StudentProfile {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            student_id: student.student_id,
            name: student.name,
            email: student.email,
            profile_picture_url: student.profile_picture_url,
        }
    }
}
