//! HTTP adapter for staff question management.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddChoiceRequest, AdminQuestionResponse, CreateQuestionRequest, UpdateQuestionRequest};
pub use handlers::AdminHandlers;
pub use routes::admin_routes;
