//! HTTP routes for staff question management.

use axum::{
    routing::{post, put},
    Router,
};

use super::handlers::{
    add_choice, create_question, delete_question, update_question, AdminHandlers,
};

/// Creates the admin router, mounted under `/api/admin/questions`.
pub fn admin_routes(handlers: AdminHandlers) -> Router {
    Router::new()
        .route("/", post(create_question))
        .route("/:id", put(update_question).delete(delete_question))
        .route("/:id/choices", post(add_choice))
        .with_state(handlers)
}
