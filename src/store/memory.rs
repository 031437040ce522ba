// src/store/memory.rs

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{
        course::Course,
        score::{CourseScore, ScoreRecord, StudentPercentage},
        student::Student,
    },
    store::ScoreStore,
};

/// Score store held entirely in memory.
/// Backs fixtures and tests; records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    students: RwLock<Vec<Student>>,
    courses: RwLock<Vec<Course>>,
    scores: RwLock<Vec<ScoreRecord>>,
    unavailable: AtomicBool,
    populations_in_flight: AtomicUsize,
    peak_populations_in_flight: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_student(&self, student: Student) {
        self.students.write().await.push(student);
    }

    pub async fn insert_course(&self, course: Course) {
        self.courses.write().await.push(course);
    }

    pub async fn insert_score(&self, score: ScoreRecord) {
        self.scores.write().await.push(score);
    }

    /// While set, every query fails with `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Highest number of course population fetches that were running at once.
    pub fn peak_concurrent_population_fetches(&self) -> usize {
        self.peak_populations_in_flight.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable(
                "in-memory store is offline".to_string(),
            ));
        }
        Ok(())
    }

    async fn join_course(&self, score: &ScoreRecord) -> CourseScore {
        let courses = self.courses.read().await;
        let course = courses.iter().find(|c| c.id == score.course_id);

        CourseScore {
            id: score.id,
            course_id: score.course_id,
            total_marks: score.total_marks,
            max_marks: score.max_marks,
            percentage: score.percentage,
            answer_sheet_url: score.answer_sheet_url.clone(),
            feedback: score.feedback.clone(),
            course_name: course.map(|c| c.course_name.clone()),
            course_code: course.map(|c| c.course_code.clone()),
            teacher_id: score.checked_by_teacher_id.clone(),
        }
    }
}

#[async_trait]
impl ScoreStore for InMemoryStore {
    async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        self.check_available()?;
        let students = self.students.read().await;
        Ok(students.iter().find(|s| s.email == email).cloned())
    }

    async fn find_score_by_student_and_course(
        &self,
        student_id: &str,
        course_id: i32,
    ) -> Result<Option<CourseScore>, AppError> {
        self.check_available()?;
        let found = {
            let scores = self.scores.read().await;
            scores
                .iter()
                .find(|s| s.student_id == student_id && s.course_id == course_id)
                .cloned()
        };

        match found {
            Some(score) => Ok(Some(self.join_course(&score).await)),
            None => Ok(None),
        }
    }

    async fn list_percentages_by_course(&self, course_id: i32) -> Result<Vec<f64>, AppError> {
        self.check_available()?;

        let in_flight = self.populations_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_populations_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);
        // Give concurrent callers a chance to overlap with this one.
        tokio::task::yield_now().await;

        let percentages = {
            let scores = self.scores.read().await;
            scores
                .iter()
                .filter(|s| s.course_id == course_id)
                .map(|s| s.percentage)
                .collect()
        };

        self.populations_in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(percentages)
    }

    async fn list_scores_by_student(&self, student_id: &str) -> Result<Vec<CourseScore>, AppError> {
        self.check_available()?;
        let owned: Vec<ScoreRecord> = {
            let scores = self.scores.read().await;
            scores
                .iter()
                .filter(|s| s.student_id == student_id)
                .cloned()
                .collect()
        };

        let mut joined = Vec::with_capacity(owned.len());
        for score in &owned {
            joined.push(self.join_course(score).await);
        }
        Ok(joined)
    }

    async fn list_all_scores(&self) -> Result<Vec<StudentPercentage>, AppError> {
        self.check_available()?;
        let scores = self.scores.read().await;
        Ok(scores
            .iter()
            .map(|s| StudentPercentage {
                student_id: s.student_id.clone(),
                percentage: s.percentage,
            })
            .collect())
    }
}
