//! HTTP handlers for login and logout.
//!
//! Tokens are issued elsewhere; login only checks one and reports the
//! attempt to the `AuthEventObserver`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::{auth_error_response, RequireAuth};
use crate::ports::{AuthEventObserver, SessionValidator};

use super::dto::{CurrentUserResponse, LoginRequest};

/// Source reported when the peer address is not available.
pub const UNKNOWN_SOURCE: &str = "unknown";

#[derive(Clone)]
pub struct AuthHandlers {
    validator: Arc<dyn SessionValidator>,
    observer: Arc<dyn AuthEventObserver>,
}

impl AuthHandlers {
    pub fn new(validator: Arc<dyn SessionValidator>, observer: Arc<dyn AuthEventObserver>) -> Self {
        Self {
            validator,
            observer,
        }
    }
}

fn source_of(connect_info: Option<ConnectInfo<SocketAddr>>) -> String {
    connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

/// POST /api/auth/login - Validate a token and report the login
pub async fn login(
    State(handlers): State<AuthHandlers>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let source = source_of(connect_info);

    match handlers.validator.validate(&req.token).await {
        Ok(user) => {
            handlers.observer.on_login_success(&user, &source);
            (StatusCode::OK, Json(CurrentUserResponse::from(&user))).into_response()
        }
        Err(e) => {
            handlers.observer.on_login_failure(&source);
            auth_error_response(&e)
        }
    }
}

/// POST /api/auth/logout - Report the logout
pub async fn logout(
    State(handlers): State<AuthHandlers>,
    RequireAuth(user): RequireAuth,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> Response {
    handlers.observer.on_logout(&user, &source_of(connect_info));
    StatusCode::NO_CONTENT.into_response()
}
