//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (vote, question management) are kept apart from the
//! read-only query handlers.

pub mod handlers;

pub use handlers::{
    // Voting
    CastVoteCommand, CastVoteHandler,
    // Queries
    GetQuestionHandler, GetQuestionQuery, GetResultsHandler, GetResultsQuery,
    ListPublishedQuestionsHandler, ListPublishedQuestionsQuery, QuestionDetail, QuestionSummary,
    // Question management
    AddChoiceCommand, AddChoiceHandler, CreateQuestionCommand, CreateQuestionHandler,
    CreateQuestionResult, DeleteQuestionCommand, DeleteQuestionHandler, UpdateQuestionCommand,
    UpdateQuestionHandler,
};
