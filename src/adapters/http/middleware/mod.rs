//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Authentication middleware and extractors

pub mod auth;

pub use auth::{
    auth_error_response, auth_middleware, bearer_token, AuthRejection, AuthState, RequireAuth,
};
