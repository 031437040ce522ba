// src/routes.rs

use axum::{Router, http::Method, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{course, dashboard},
    state::AppState,
    utils::jwt::session_middleware,
};

/// Assembles the main application router.
///
/// * Mounts the course and dashboard routes.
/// * Resolves the caller's session on every API request.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let course_routes = Router::new().route("/{id}", get(course::get_course));

    let student_routes = Router::new().route("/dashboard", get(dashboard::student_dashboard));

    let api_routes = Router::new()
        .nest("/course", course_routes)
        .nest("/student", student_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .nest("/api", api_routes)
        // Global Middleware (applied top to bottom)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
