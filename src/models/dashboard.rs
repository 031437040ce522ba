// src/models/dashboard.rs

use serde::Serialize;

use crate::models::{score::CourseSummary, student::StudentProfile};

/// Cross-course standing of one student.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverallPerformance {
    pub overall_percentage: f64,
    pub overall_rank: usize,
    pub total_students: usize,
}

/// Response for `GET /api/student/dashboard`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub student: StudentProfile,
    pub courses: Vec<CourseSummary>,
    #[serde(rename = "overallPerformance")]
    pub overall_performance: OverallPerformance,
}
