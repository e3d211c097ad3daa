//! Observer port for login/logout events.
//!
//! The HTTP auth endpoints report sign-ins and sign-outs here. Nothing in
//! the poll domain depends on it.

use crate::domain::foundation::AuthenticatedUser;

/// Receives authentication events from the presentation layer.
///
/// `source` is the client address as seen by the server, or `"unknown"`.
pub trait AuthEventObserver: Send + Sync {
    fn on_login_success(&self, user: &AuthenticatedUser, source: &str);

    fn on_login_failure(&self, source: &str);

    fn on_logout(&self, user: &AuthenticatedUser, source: &str);
}
