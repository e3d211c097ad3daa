//! Mock authentication adapters for testing.
//!
//! `MockSessionValidator` implements the `SessionValidator` port without
//! signing real tokens; `RecordingAuthObserver` captures login/logout
//! events so tests can assert on them.
//!
//! # Example
//!
//! ```ignore
//! use polls::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new()
//!     .with_test_user("voter-token", "voter-1")
//!     .with_staff_user("admin-token", "admin");
//!
//! let result = validator.validate("voter-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{AuthEventObserver, SessionValidator};

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Returned for every validation when set
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a valid token for a regular voter with the given ID.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user = test_user(user_id.into());
        self.with_user(token, user)
    }

    /// Adds a valid token for a staff member with the given ID.
    pub fn with_staff_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user = test_user(user_id.into()).staff();
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.remove(token);
        }
    }
}

fn test_user(user_id: String) -> AuthenticatedUser {
    AuthenticatedUser::new(
        UserId::new(user_id.clone()).expect("test user id must not be empty"),
        Some(format!("{}@test.example.com", user_id)),
        Some(format!("Test User {}", user_id)),
    )
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let forced = self
            .force_error
            .read()
            .map_err(|_| AuthError::service_unavailable("mock lock poisoned"))?
            .clone();
        if let Some(error) = forced {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(|_| AuthError::service_unavailable("mock lock poisoned"))?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// An authentication event captured by `RecordingAuthObserver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    LoginSuccess { user_id: UserId, source: String },
    LoginFailure { source: String },
    Logout { user_id: UserId, source: String },
}

/// Observer that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingAuthObserver {
    events: Mutex<Vec<AuthEvent>>,
}

impl RecordingAuthObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, oldest first.
    pub fn events(&self) -> Vec<AuthEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn record(&self, event: AuthEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl AuthEventObserver for RecordingAuthObserver {
    fn on_login_success(&self, user: &AuthenticatedUser, source: &str) {
        self.record(AuthEvent::LoginSuccess {
            user_id: user.id.clone(),
            source: source.to_string(),
        });
    }

    fn on_login_failure(&self, source: &str) {
        self.record(AuthEvent::LoginFailure {
            source: source.to_string(),
        });
    }

    fn on_logout(&self, user: &AuthenticatedUser, source: &str) {
        self.record(AuthEvent::Logout {
            user_id: user.id.clone(),
            source: source.to_string(),
        });
    }
}
