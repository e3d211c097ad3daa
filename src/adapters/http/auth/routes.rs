//! HTTP routes for login and logout.

use axum::{routing::post, Router};

use super::handlers::{login, logout, AuthHandlers};

/// Creates the auth router, mounted under `/api/auth`.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(handlers)
}
