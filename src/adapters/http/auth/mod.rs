//! HTTP adapter for login/logout reporting.

mod dto;
mod handlers;
mod routes;

pub use dto::{CurrentUserResponse, LoginRequest};
pub use handlers::{AuthHandlers, UNKNOWN_SOURCE};
pub use routes::auth_routes;
