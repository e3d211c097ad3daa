//! Poll command and query handlers.
//!
//! `CastVoteHandler` is the voting service. The query handlers serve the
//! public views and only ever see published questions; the remaining
//! commands are staff-only question management.

mod add_choice;
mod cast_vote;
mod create_question;
mod delete_question;
mod get_question;
mod get_results;
mod list_published;
mod update_question;

pub use add_choice::{AddChoiceCommand, AddChoiceHandler};
pub use cast_vote::{CastVoteCommand, CastVoteHandler};
pub use create_question::{CreateQuestionCommand, CreateQuestionHandler, CreateQuestionResult};
pub use delete_question::{DeleteQuestionCommand, DeleteQuestionHandler};
pub use get_question::{GetQuestionHandler, GetQuestionQuery, QuestionDetail};
pub use get_results::{GetResultsHandler, GetResultsQuery};
pub use list_published::{
    ListPublishedQuestionsHandler, ListPublishedQuestionsQuery, QuestionSummary,
};
pub use update_question::{UpdateQuestionCommand, UpdateQuestionHandler};
