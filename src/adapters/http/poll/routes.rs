//! HTTP routes for the public poll endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{cast_vote, get_question, get_results, list_questions, PollHandlers};

/// Creates the poll router, mounted under `/api/questions`.
pub fn poll_routes(handlers: PollHandlers) -> Router {
    Router::new()
        .route("/", get(list_questions))
        .route("/:id", get(get_question))
        .route("/:id/results", get(get_results))
        .route("/:id/vote", post(cast_vote))
        .with_state(handlers)
}
