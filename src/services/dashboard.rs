// src/services/dashboard.rs

use std::{collections::HashMap, sync::Arc};

use tokio::{sync::Semaphore, task::JoinSet};

use crate::{
    error::AppError,
    models::{
        dashboard::{DashboardView, OverallPerformance},
        score::{CourseScore, CourseSummary, StudentPercentage},
        student::StudentProfile,
    },
    services::ranking::{average, rank, rank_and_average, round2},
    store::ScoreStore,
    utils::jwt::Session,
};

/// Dashboard of the signed-in student: every scored course with its rank and
/// class average, plus one overall rank across all students.
///
/// Per-course populations are fetched concurrently, at most `concurrency` at a
/// time. A student with no scores yet gets an empty course list, not an error.
pub async fn get_dashboard(
    store: Arc<dyn ScoreStore>,
    session: &Session,
    concurrency: usize,
) -> Result<DashboardView, AppError> {
    let email = session.require_email()?;

    let student = store
        .find_student_by_email(email)
        .await?
        .ok_or(AppError::StudentNotFound)?;

    let scores = store.list_scores_by_student(&student.student_id).await?;
    let populations = fetch_course_populations(&store, &scores, concurrency).await?;

    let courses: Vec<CourseSummary> = scores
        .into_iter()
        .zip(populations)
        .map(|(score, population)| summarize(score, &population))
        .collect();

    let own: Vec<f64> = courses.iter().map(|c| c.percentage).collect();
    let overall_percentage = average(&own);

    let population = store.list_all_scores().await?;
    let (overall_rank, total_students) = overall_standing(&population, &student.student_id);

    tracing::debug!(
        "Dashboard for {}: {} courses, overall rank {} of {}",
        student.student_id,
        courses.len(),
        overall_rank,
        total_students
    );

    Ok(DashboardView {
        student: StudentProfile::from(student),
        courses,
        overall_performance: OverallPerformance {
            overall_percentage: round2(overall_percentage),
            overall_rank,
            total_students,
        },
    })
}

/// Fetches the population of each course, returned in the order of `scores`.
async fn fetch_course_populations(
    store: &Arc<dyn ScoreStore>,
    scores: &[CourseScore],
    concurrency: usize,
) -> Result<Vec<Vec<f64>>, AppError> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, score) in scores.iter().enumerate() {
        let store = Arc::clone(store);
        let semaphore = Arc::clone(&semaphore);
        let course_id = score.course_id;

        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| AppError::InternalServerError(e.to_string()))?;
            let population = store.list_percentages_by_course(course_id).await?;
            Ok::<_, AppError>((index, population))
        });
    }

    let mut populations = vec![Vec::new(); scores.len()];
    // Dropping `tasks` on an early return aborts whatever is still in flight.
    while let Some(joined) = tasks.join_next().await {
        let (index, population) = joined??;
        populations[index] = population;
    }

    Ok(populations)
}

fn summarize(score: CourseScore, population: &[f64]) -> CourseSummary {
    let metric = rank_and_average(population, score.percentage);

    CourseSummary {
        id: score.id,
        course_id: score.course_id,
        total_marks: score.total_marks,
        max_marks: score.max_marks,
        percentage: score.percentage,
        answer_sheet_url: score.answer_sheet_url,
        course_name: score.course_name,
        course_code: score.course_code,
        teacher_id: score.teacher_id,
        rank: metric.rank,
        class_average: metric.rounded_average(),
    }
}

/// Rank of `student_id` among every student's own mean percentage, and the
/// number of distinct students in the score population.
///
/// A student without scores is ranked with a mean of 0 but is not counted
/// in the total.
pub fn overall_standing(population: &[StudentPercentage], student_id: &str) -> (usize, usize) {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for entry in population {
        let slot = totals.entry(entry.student_id.as_str()).or_insert((0.0, 0));
        slot.0 += entry.percentage;
        slot.1 += 1;
    }

    let mean = |(sum, count): (f64, usize)| sum / count as f64;

    let subject = totals.get(student_id).copied().map(mean).unwrap_or(0.0);
    let means: Vec<f64> = totals.values().copied().map(mean).collect();

    (rank(&means, subject), means.len())
}
