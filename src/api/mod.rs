// API layer module (adapters for controllers)
// Translates HTTP requests into repository calls and JSON envelopes

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod pagination;

use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::errors::ApiError;
use self::handlers::{categories, questions, quizzes};

/// Builds the application router over a connection pool.
///
/// Shared between `main` and the integration tests so both exercise the
/// same routes, fallbacks, and middleware.
pub fn router(pool: PgPool) -> Router {
    // CORS: any origin; headers and methods fixed by the API contract
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions::list_by_category),
        )
        .route("/questions", get(questions::list_questions))
        .route("/questions", post(questions::create_question))
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(quizzes::next_question))
        // Unmatched paths and method mismatches get the fixed envelopes
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(pool)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
