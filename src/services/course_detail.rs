// src/services/course_detail.rs

use crate::{
    error::AppError,
    models::score::CourseDetailView,
    services::{feedback::normalize, ranking::rank_and_average},
    store::ScoreStore,
    utils::jwt::Session,
};

/// Parses a course identifier from the request path. Must be a positive integer.
pub fn parse_course_id(raw: &str) -> Result<i32, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::InvalidInput("Course ID is required".to_string()));
    }

    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidInput("Invalid Course ID".to_string())),
    }
}

/// What the signed-in student scored in one course, and how it compares to peers.
///
/// * Resolves the session to a student.
/// * Ranks the student's percentage within everyone scored in the course.
/// * Normalizes the stored per-question feedback.
pub async fn get_course_detail(
    store: &dyn ScoreStore,
    session: &Session,
    course_id: &str,
) -> Result<CourseDetailView, AppError> {
    let email = session.require_email()?;
    let course_id = parse_course_id(course_id)?;

    let student = store
        .find_student_by_email(email)
        .await?
        .ok_or(AppError::StudentNotFound)?;

    let score = store
        .find_score_by_student_and_course(&student.student_id, course_id)
        .await?
        .ok_or(AppError::NotFound("Course not found".to_string()))?;

    let population = store.list_percentages_by_course(course_id).await?;
    let metric = rank_and_average(&population, score.percentage);
    let feedback = normalize(&score.raw_feedback());

    tracing::debug!(
        "Course {} detail: rank {} of {}, {} feedback entries",
        course_id,
        metric.rank,
        population.len(),
        feedback.len()
    );

    Ok(CourseDetailView {
        id: score.id,
        total_marks: score.total_marks,
        max_marks: score.max_marks,
        percentage: score.percentage,
        answer_sheet_url: score.answer_sheet_url,
        feedback,
        course_name: score.course_name,
        course_code: score.course_code,
        teacher_id: score.teacher_id,
        rank: metric.rank,
        class_average: metric.rounded_average(),
    })
}
