//! Default `AuthEventObserver`: structured log events.

use crate::domain::foundation::AuthenticatedUser;
use crate::ports::AuthEventObserver;

/// Emits one `tracing` event per login, failed login and logout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuthObserver;

impl TracingAuthObserver {
    pub fn new() -> Self {
        Self
    }
}

impl AuthEventObserver for TracingAuthObserver {
    fn on_login_success(&self, user: &AuthenticatedUser, source: &str) {
        tracing::info!(
            user_id = %user.id,
            user = user.display_name_or_id(),
            source,
            "User logged in"
        );
    }

    fn on_login_failure(&self, source: &str) {
        tracing::warn!(source, "Login failed");
    }

    fn on_logout(&self, user: &AuthenticatedUser, source: &str) {
        tracing::info!(user_id = %user.id, source, "User logged out");
    }
}
