//! Route table

use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{method_not_allowed_envelope, request_id};
use crate::state::AppState;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Build the HTTP router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:id/questions",
            get(handlers::category_questions),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::add_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route("/questions/:id", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::next_quiz_question))
        .fallback(handlers::not_found)
        .layer(middleware::map_response(method_not_allowed_envelope))
        .layer(middleware::from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
