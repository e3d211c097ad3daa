//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod poll;

pub use poll::{
    AddChoiceCommand, AddChoiceHandler, CastVoteCommand, CastVoteHandler, CreateQuestionCommand,
    CreateQuestionHandler, CreateQuestionResult, DeleteQuestionCommand, DeleteQuestionHandler,
    GetQuestionHandler, GetQuestionQuery, GetResultsHandler, GetResultsQuery,
    ListPublishedQuestionsHandler, ListPublishedQuestionsQuery, QuestionDetail, QuestionSummary,
    UpdateQuestionCommand, UpdateQuestionHandler,
};
