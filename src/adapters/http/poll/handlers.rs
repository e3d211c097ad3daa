//! HTTP handlers for the public poll endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::ErrorResponse;
use crate::application::{
    CastVoteCommand, CastVoteHandler, GetQuestionHandler, GetQuestionQuery, GetResultsHandler,
    GetResultsQuery, ListPublishedQuestionsHandler, ListPublishedQuestionsQuery,
};
use crate::domain::foundation::{ChoiceId, ErrorCode, QuestionId, Timestamp};
use crate::domain::poll::{PollError, RejectionReason, VoteOutcome, VotingStatus};

use super::dto::{
    QuestionDetailResponse, QuestionListResponse, ResultsResponse, VoteRequest, VoteResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PollHandlers {
    list_handler: Arc<ListPublishedQuestionsHandler>,
    get_handler: Arc<GetQuestionHandler>,
    results_handler: Arc<GetResultsHandler>,
    vote_handler: Arc<CastVoteHandler>,
}

impl PollHandlers {
    pub fn new(
        list_handler: Arc<ListPublishedQuestionsHandler>,
        get_handler: Arc<GetQuestionHandler>,
        results_handler: Arc<GetResultsHandler>,
        vote_handler: Arc<CastVoteHandler>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
            results_handler,
            vote_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - Latest published questions
pub async fn list_questions(State(handlers): State<PollHandlers>) -> Response {
    let query = ListPublishedQuestionsQuery {
        now: Timestamp::now(),
    };

    match handlers.list_handler.handle(query).await {
        Ok(summaries) => {
            let response: QuestionListResponse = summaries.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_poll_error(e),
    }
}

/// GET /api/questions/:id - Question detail with its choices, 409 once voting has closed
pub async fn get_question(
    State(handlers): State<PollHandlers>,
    Path(question_id): Path<String>,
) -> Response {
    let question_id = match parse_question_id(&question_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetQuestionQuery {
        question_id,
        now: Timestamp::now(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(detail) if detail.voting_status == VotingStatus::Closed => {
            voting_closed(RejectionReason::VotingClosed)
        }
        Ok(detail) => {
            let response: QuestionDetailResponse = detail.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_poll_error(e),
    }
}

/// GET /api/questions/:id/results - Vote tallies
pub async fn get_results(
    State(handlers): State<PollHandlers>,
    Path(question_id): Path<String>,
) -> Response {
    let question_id = match parse_question_id(&question_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetResultsQuery {
        question_id,
        now: Timestamp::now(),
    };

    match handlers.results_handler.handle(query).await {
        Ok(results) => (StatusCode::OK, Json(ResultsResponse::from(&results))).into_response(),
        Err(e) => handle_poll_error(e),
    }
}

/// POST /api/questions/:id/vote - Cast or change the caller's vote
pub async fn cast_vote(
    State(handlers): State<PollHandlers>,
    RequireAuth(user): RequireAuth,
    Path(question_id): Path<String>,
    Json(req): Json<VoteRequest>,
) -> Response {
    let question_id = match parse_question_id(&question_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    // Unreadable selections count as no selection; the service decides
    // after the question and window checks.
    let choice_id = req
        .choice_id
        .as_deref()
        .and_then(|raw| raw.parse::<ChoiceId>().ok());

    let now = Timestamp::now();
    let cmd = CastVoteCommand {
        question_id,
        user_id: user.id,
        choice_id,
        now,
    };

    let outcome = match handlers.vote_handler.handle(cmd).await {
        Ok(outcome) => outcome,
        Err(e) => return handle_poll_error(e),
    };

    let status = match outcome {
        VoteOutcome::Created { .. } => StatusCode::CREATED,
        VoteOutcome::Updated { .. } => StatusCode::OK,
        VoteOutcome::Rejected { reason } => return voting_closed(reason),
    };

    match handlers
        .results_handler
        .handle(GetResultsQuery { question_id, now })
        .await
    {
        Ok(results) => (status, Json(VoteResponse::new(outcome, &results))).into_response(),
        Err(e) => handle_poll_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn voting_closed(reason: RejectionReason) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ErrorResponse::from_code(
            ErrorCode::VotingClosed,
            reason.user_message(),
        )),
    )
        .into_response()
}

fn parse_question_id(raw: &str) -> Result<QuestionId, Response> {
    raw.parse::<QuestionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid question ID")),
        )
            .into_response()
    })
}

/// Maps poll errors to HTTP responses. Shared with the admin endpoints.
pub(crate) fn handle_poll_error(error: PollError) -> Response {
    match error {
        PollError::QuestionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Question", &id.to_string())),
        )
            .into_response(),
        PollError::InvalidChoice => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::from_code(
                ErrorCode::InvalidChoice,
                PollError::InvalidChoice.message(),
            )),
        )
            .into_response(),
        PollError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Permission denied")),
        )
            .into_response(),
        PollError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::bad_request(format!("Validation failed for {}: {}", field, message))
                    .with_details(serde_json::json!({ "field": field })),
            ),
        )
            .into_response(),
        PollError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Poll request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
