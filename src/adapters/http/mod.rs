//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router; [`api_router`] mounts them:
//!
//! | Prefix                 | Router          |
//! |------------------------|-----------------|
//! | `/api/questions`       | `poll_routes`   |
//! | `/api/admin/questions` | `admin_routes`  |
//! | `/api/auth`            | `auth_routes`   |
//! | `/health`              | liveness probe  |

pub mod admin;
pub mod auth;
mod error_response;
pub mod middleware;
pub mod poll;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use admin::{admin_routes, AdminHandlers};
pub use auth::{auth_routes, AuthHandlers};
pub use error_response::ErrorResponse;
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use poll::{poll_routes, PollHandlers};

use crate::application::{
    AddChoiceHandler, CastVoteHandler, CreateQuestionHandler, DeleteQuestionHandler,
    GetQuestionHandler, GetResultsHandler, ListPublishedQuestionsHandler, UpdateQuestionHandler,
};
use crate::ports::{
    AuthEventObserver, ChoiceRepository, PollReader, QuestionRepository, SessionValidator,
    VoteRepository,
};

/// Persistence ports the handlers are built from.
#[derive(Clone)]
pub struct PollPorts {
    pub questions: Arc<dyn QuestionRepository>,
    pub choices: Arc<dyn ChoiceRepository>,
    pub votes: Arc<dyn VoteRepository>,
    pub reader: Arc<dyn PollReader>,
}

/// Handler state for every router.
#[derive(Clone)]
pub struct ApiHandlers {
    pub poll: PollHandlers,
    pub admin: AdminHandlers,
    pub auth: AuthHandlers,
}

impl ApiHandlers {
    /// Wires every application handler onto the given ports.
    pub fn from_ports(
        ports: PollPorts,
        validator: Arc<dyn SessionValidator>,
        observer: Arc<dyn AuthEventObserver>,
        latest_limit: u32,
    ) -> Self {
        let PollPorts {
            questions,
            choices,
            votes,
            reader,
        } = ports;

        let poll = PollHandlers::new(
            Arc::new(ListPublishedQuestionsHandler::new(reader.clone(), latest_limit)),
            Arc::new(GetQuestionHandler::new(reader.clone(), choices.clone())),
            Arc::new(GetResultsHandler::new(reader)),
            Arc::new(CastVoteHandler::new(
                questions.clone(),
                choices.clone(),
                votes,
            )),
        );

        let admin = AdminHandlers::new(
            Arc::new(CreateQuestionHandler::new(questions.clone())),
            Arc::new(UpdateQuestionHandler::new(questions.clone())),
            Arc::new(AddChoiceHandler::new(questions.clone(), choices)),
            Arc::new(DeleteQuestionHandler::new(questions)),
        );

        Self {
            poll,
            admin,
            auth: AuthHandlers::new(validator, observer),
        }
    }
}

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty means same-origin only.
    pub cors_origins: Vec<String>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the full application router.
pub fn api_router(handlers: ApiHandlers, validator: AuthState, settings: &RouterSettings) -> Router {
    let api = Router::new()
        .nest("/questions", poll_routes(handlers.poll))
        .nest("/admin/questions", admin_routes(handlers.admin))
        .nest("/auth", auth_routes(handlers.auth))
        .layer(from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
