//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `AuthEventObserver` ports:
//!
//! - `jwt` - HS256 shared-secret token validation (production)
//! - `tracing_observer` - Logs login/logout events
//! - `mock` - Test implementations that don't require signed tokens

mod jwt;
mod mock;
mod tracing_observer;

pub use jwt::JwtSessionValidator;
pub use mock::{AuthEvent, MockSessionValidator, RecordingAuthObserver};
pub use tracing_observer::TracingAuthObserver;
