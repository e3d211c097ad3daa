//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validators and auth event observers
//! - `http` - axum routers, handlers and middleware
//! - `postgres` - sqlx repositories and migrations
//! - `storage` - In-memory store for tests and local runs

pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;
