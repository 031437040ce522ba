// tests/pg_store_tests.rs
//
// These run against a real Postgres: `DATABASE_URL=... cargo test -- --ignored`.

use portal_backend::services::course_detail::get_course_detail;
use portal_backend::store::{PgScoreStore, ScoreStore};
use portal_backend::utils::jwt::Session;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

async fn connect() -> PgPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

async fn insert_course(pool: &PgPool, code: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO courses (course_code, course_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(format!("Course {}", code))
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_score(
    pool: &PgPool,
    student_id: &str,
    course_id: i32,
    total: i32,
    max: i32,
    feedback: serde_json::Value,
) {
    let percentage = portal_backend::models::score::percentage_of(total, max) as f32;
    sqlx::query(
        r#"
        INSERT INTO scores
            (student_id, course_id, checked_by_teacher_id, total_marks, max_marks,
             percentage, feedback, answer_sheet_url)
        VALUES ($1, $2, 'TCH-PG', $3, $4, $5, $6, 'https://sheets.example.edu/pg.pdf')
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .bind(total)
    .bind(max)
    .bind(percentage)
    .bind(feedback)
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn postgres_store_reads_students_and_scores() {
    let pool = connect().await;
    let suffix = &uuid::Uuid::new_v4().to_string()[..8];
    let student_id = format!("S-{}", suffix);
    let peer_id = format!("P-{}", suffix);
    let email = format!("{}@example.edu", suffix);

    sqlx::query("INSERT INTO students (student_id, name, email) VALUES ($1, $2, $3)")
        .bind(&student_id)
        .bind("Pg Student")
        .bind(&email)
        .execute(&pool)
        .await
        .unwrap();

    let course_id = insert_course(&pool, &format!("PG-{}", suffix)).await;
    insert_score(
        &pool,
        &student_id,
        course_id,
        2,
        3,
        serde_json::json!("[{\"mark\": \"2\", \"maxMark\": \"3\"}]"),
    )
    .await;
    insert_score(&pool, &peer_id, course_id, 5, 10, serde_json::json!([])).await;

    let store = PgScoreStore::new(pool);

    let student = store
        .find_student_by_email(&email)
        .await
        .unwrap()
        .expect("student exists");
    assert_eq!(student.student_id, student_id);

    let score = store
        .find_score_by_student_and_course(&student_id, course_id)
        .await
        .unwrap()
        .expect("score exists");
    assert_eq!(score.total_marks, 2);
    assert_eq!(score.teacher_id, "TCH-PG");
    assert_eq!(score.course_code.as_deref(), Some(format!("PG-{}", suffix).as_str()));
    // Stored as REAL, read back exactly as written.
    assert_eq!(score.percentage, 66.67);

    let mut population = store.list_percentages_by_course(course_id).await.unwrap();
    population.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(population, vec![50.0, 66.67]);

    let own = store.list_scores_by_student(&student_id).await.unwrap();
    assert_eq!(own.len(), 1);

    assert_eq!(own[0].percentage, 66.67);

    let all = store.list_all_scores().await.unwrap();
    assert!(all.iter().any(|s| s.student_id == peer_id));
    assert!(
        all.iter()
            .any(|s| s.student_id == student_id && s.percentage == 66.67)
    );

    assert!(
        store
            .find_score_by_student_and_course(&student_id, course_id + 100_000)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn course_detail_reports_stored_percentage_exactly() {
    let pool = connect().await;
    let suffix = &uuid::Uuid::new_v4().to_string()[..8];
    let student_id = format!("S-{}", suffix);
    let email = format!("{}@example.edu", suffix);

    sqlx::query("INSERT INTO students (student_id, name, email) VALUES ($1, $2, $3)")
        .bind(&student_id)
        .bind("Pg Student")
        .bind(&email)
        .execute(&pool)
        .await
        .unwrap();

    let course_id = insert_course(&pool, &format!("PD-{}", suffix)).await;
    insert_score(&pool, &student_id, course_id, 2, 3, serde_json::json!([])).await;

    let store = PgScoreStore::new(pool);
    let session = Session::for_email(email.as_str());

    let detail = get_course_detail(&store, &session, &course_id.to_string())
        .await
        .unwrap();
    assert_eq!(detail.percentage, 66.67);
    assert_eq!(detail.class_average, 66.67);

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["percentage"], 66.67);
}
