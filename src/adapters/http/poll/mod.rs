//! HTTP adapter for the public poll endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChoiceResponse, ChoiceResultResponse, QuestionDetailResponse, QuestionListResponse,
    QuestionSummaryResponse, ResultsResponse, VoteRequest, VoteResponse,
};
pub(crate) use handlers::handle_poll_error;
pub use handlers::PollHandlers;
pub use routes::poll_routes;
