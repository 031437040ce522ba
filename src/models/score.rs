// src/models/score.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::models::feedback::{QuestionFeedback, RawFeedback};

/// Represents the 'scores' table in the database.
/// One graded submission of one student in one course.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: i32,
    pub student_id: String,
    pub course_id: i32,
    pub checked_by_teacher_id: String,
    pub total_marks: i32,
    pub max_marks: i32,

    /// Authoritative percentage as written by the grader.
    pub percentage: f64,

    /// Per-question breakdown, either a JSON array or a string holding one.
    pub feedback: Value,

    pub answer_sheet_url: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Percentage stored alongside a score at write time, rounded to 2 decimals.
pub fn percentage_of(total_marks: i32, max_marks: i32) -> f64 {
    if max_marks <= 0 {
        return 0.0;
    }
    let raw = f64::from(total_marks) / f64::from(max_marks) * 100.0;
    (raw * 100.0).round() / 100.0
}

/// A score row joined with the identity of its course.
/// Course columns are optional because the join is a LEFT JOIN.
#[derive(Debug, Clone, FromRow)]
pub struct CourseScore {
    pub id: i32,
    pub course_id: i32,
    pub total_marks: i32,
    pub max_marks: i32,
    pub percentage: f64,
    pub answer_sheet_url: String,
    pub feedback: Value,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub teacher_id: String,
}

impl CourseScore {
    pub fn raw_feedback(&self) -> RawFeedback {
        RawFeedback::from(&self.feedback)
    }
}

/// One entry of the cross-student population.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct StudentPercentage {
    pub student_id: String,
    pub percentage: f64,
}

/// Response for `GET /api/course/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailView {
    pub id: i32,
    pub total_marks: i32,
    pub max_marks: i32,
    pub percentage: f64,
    pub answer_sheet_url: String,
    pub feedback: Vec<QuestionFeedback>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub teacher_id: String,
    pub rank: usize,
    pub class_average: f64,
}

/// One course row of the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: i32,
    pub course_id: i32,
    pub total_marks: i32,
    pub max_marks: i32,
    pub percentage: f64,
    pub answer_sheet_url: String,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub teacher_id: String,
    pub rank: usize,
    pub class_average: f64,
}
