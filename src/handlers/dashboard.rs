// src/handlers/dashboard.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{
    config::Config, error::AppError, services::dashboard::get_dashboard, store::ScoreStore,
    utils::jwt::Session,
};

/// Retrieves the signed-in student's dashboard: all courses plus overall standing.
pub async fn student_dashboard(
    State(store): State<Arc<dyn ScoreStore>>,
    State(config): State<Config>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, AppError> {
    let dashboard = get_dashboard(store, &session, config.store_concurrency).await?;
    Ok(Json(dashboard))
}
