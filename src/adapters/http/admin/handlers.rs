//! HTTP handlers for staff question management.
//!
//! Authorization is enforced by the application handlers: a non-staff
//! caller gets `PollError::Forbidden`, mapped to 403.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::poll::{handle_poll_error, ChoiceResponse};
use crate::adapters::http::ErrorResponse;
use crate::application::{
    AddChoiceCommand, AddChoiceHandler, CreateQuestionCommand, CreateQuestionHandler,
    DeleteQuestionCommand, DeleteQuestionHandler, UpdateQuestionCommand, UpdateQuestionHandler,
};
use crate::domain::foundation::{QuestionId, Timestamp};

use super::dto::{
    AddChoiceRequest, AdminQuestionResponse, CreateQuestionRequest, UpdateQuestionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminHandlers {
    create_handler: Arc<CreateQuestionHandler>,
    update_handler: Arc<UpdateQuestionHandler>,
    add_choice_handler: Arc<AddChoiceHandler>,
    delete_handler: Arc<DeleteQuestionHandler>,
}

impl AdminHandlers {
    pub fn new(
        create_handler: Arc<CreateQuestionHandler>,
        update_handler: Arc<UpdateQuestionHandler>,
        add_choice_handler: Arc<AddChoiceHandler>,
        delete_handler: Arc<DeleteQuestionHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            add_choice_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/admin/questions - Create a question with its choices
pub async fn create_question(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateQuestionRequest>,
) -> Response {
    let cmd = CreateQuestionCommand {
        actor: user,
        question_text: req.question_text,
        pub_date: req.pub_date.map(Timestamp::from_datetime),
        end_date: req.end_date.map(Timestamp::from_datetime),
        choices: req.choices,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response = AdminQuestionResponse::new(&result.question, &result.choices);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_poll_error(e),
    }
}

/// PUT /api/admin/questions/:id - Replace text and publish window
pub async fn update_question(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Path(question_id): Path<String>,
    Json(req): Json<UpdateQuestionRequest>,
) -> Response {
    let Ok(question_id) = question_id.parse::<QuestionId>() else {
        return invalid_question_id();
    };

    let cmd = UpdateQuestionCommand {
        actor: user,
        question_id,
        question_text: req.question_text,
        pub_date: Timestamp::from_datetime(req.pub_date),
        end_date: req.end_date.map(Timestamp::from_datetime),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(question) => {
            (StatusCode::OK, Json(AdminQuestionResponse::new(&question, &[]))).into_response()
        }
        Err(e) => handle_poll_error(e),
    }
}

/// POST /api/admin/questions/:id/choices - Add a choice
pub async fn add_choice(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Path(question_id): Path<String>,
    Json(req): Json<AddChoiceRequest>,
) -> Response {
    let Ok(question_id) = question_id.parse::<QuestionId>() else {
        return invalid_question_id();
    };

    let cmd = AddChoiceCommand {
        actor: user,
        question_id,
        choice_text: req.choice_text,
    };

    match handlers.add_choice_handler.handle(cmd).await {
        Ok(choice) => (StatusCode::CREATED, Json(ChoiceResponse::from(&choice))).into_response(),
        Err(e) => handle_poll_error(e),
    }
}

/// DELETE /api/admin/questions/:id - Delete a question and everything under it
pub async fn delete_question(
    State(handlers): State<AdminHandlers>,
    RequireAuth(user): RequireAuth,
    Path(question_id): Path<String>,
) -> Response {
    let Ok(question_id) = question_id.parse::<QuestionId>() else {
        return invalid_question_id();
    };

    let cmd = DeleteQuestionCommand {
        actor: user,
        question_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_poll_error(e),
    }
}

fn invalid_question_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid question ID")),
    )
        .into_response()
}
