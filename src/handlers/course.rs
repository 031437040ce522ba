// src/handlers/course.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    error::AppError, services::course_detail::get_course_detail, store::ScoreStore,
    utils::jwt::Session,
};

/// Retrieves the signed-in student's result in one course.
///
/// The id is taken as raw text so that a malformed value maps to 400,
/// not to axum's own path rejection.
pub async fn get_course(
    State(store): State<Arc<dyn ScoreStore>>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = get_course_detail(store.as_ref(), &session, &id).await?;
    Ok(Json(detail))
}
