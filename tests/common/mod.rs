// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use portal_backend::{
    config::Config,
    models::{course::Course, score::ScoreRecord, student::Student},
    routes,
    state::AppState,
    store::InMemoryStore,
    utils::jwt::sign_jwt,
};
use serde_json::{Value, json};

pub const TEST_SECRET: &str = "test_secret_for_integration_tests";

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        rust_log: "error".to_string(),
        port: 0,
        max_connections: 1,
        store_concurrency: 2,
    }
}

pub fn bearer(email: &str) -> String {
    let token = sign_jwt(email, TEST_SECRET, 600).expect("sign token");
    format!("Bearer {}", token)
}

pub fn student(id: i32, student_id: &str, name: &str, email: &str) -> Student {
    Student {
        id,
        student_id: student_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        profile_picture_url: None,
        created_at: None,
    }
}

pub fn course(id: i32, code: &str, name: &str) -> Course {
    Course {
        id,
        course_code: code.to_string(),
        course_name: name.to_string(),
        created_at: None,
    }
}

pub fn score(
    id: i32,
    student_id: &str,
    course_id: i32,
    total_marks: i32,
    max_marks: i32,
    feedback: Value,
) -> ScoreRecord {
    ScoreRecord {
        id,
        student_id: student_id.to_string(),
        course_id,
        checked_by_teacher_id: "TCH-01".to_string(),
        total_marks,
        max_marks,
        percentage: portal_backend::models::score::percentage_of(total_marks, max_marks),
        feedback,
        answer_sheet_url: format!("https://sheets.example.edu/{}.pdf", id),
        created_at: None,
    }
}

/// Three students across two courses, plus one student with no scores.
///
/// * ALG101: ada 45/50 (90%), grace 45/50 (90%), alan 30/50 (60%)
/// * NET201: ada 70/100 (70%), grace 90/100 (90%)
pub async fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());

    store.insert_course(course(1, "ALG101", "Algorithms")).await;
    store.insert_course(course(2, "NET201", "Networks")).await;

    store
        .insert_student(student(1, "S-100", "Ada Lovelace", "ada@example.edu"))
        .await;
    store
        .insert_student(student(2, "S-200", "Grace Hopper", "grace@example.edu"))
        .await;
    store
        .insert_student(student(3, "S-300", "Alan Turing", "alan@example.edu"))
        .await;
    store
        .insert_student(student(4, "S-400", "Barbara Liskov", "barbara@example.edu"))
        .await;

    let ada_feedback = json!([
        {"mark": "18", "maxMark": "20", "reason": "missed an edge case", "questionNumber": "1"},
        {"mark": 27, "maxMark": 30, "questionNumber": "2"}
    ]);
    store
        .insert_score(score(11, "S-100", 1, 45, 50, ada_feedback))
        .await;
    store
        .insert_score(score(12, "S-200", 1, 45, 50, json!("[]")))
        .await;
    store
        .insert_score(score(13, "S-300", 1, 30, 50, json!("{not valid")))
        .await;
    store
        .insert_score(score(21, "S-100", 2, 70, 100, Value::Null))
        .await;
    store
        .insert_score(score(22, "S-200", 2, 90, 100, json!([])))
        .await;

    store
}

/// Spawns the app on a random port. Returns the base URL.
pub async fn spawn_app(store: Arc<InMemoryStore>) -> String {
    let state = AppState {
        store,
        config: test_config(),
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}
