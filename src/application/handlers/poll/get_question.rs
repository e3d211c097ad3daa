//! GetQuestionHandler - Query handler for the question detail view.

use std::sync::Arc;

use crate::domain::foundation::{QuestionId, Timestamp};
use crate::domain::poll::{Choice, PollError, Question, VotingStatus};
use crate::ports::{ChoiceRepository, PollReader};

/// Query to get a published question by ID.
#[derive(Debug, Clone)]
pub struct GetQuestionQuery {
    pub question_id: QuestionId,
    pub now: Timestamp,
}

/// A published question with the options a voter can pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub voting_status: VotingStatus,
}

/// Handler for retrieving question details.
pub struct GetQuestionHandler {
    reader: Arc<dyn PollReader>,
    choices: Arc<dyn ChoiceRepository>,
}

impl GetQuestionHandler {
    pub fn new(reader: Arc<dyn PollReader>, choices: Arc<dyn ChoiceRepository>) -> Self {
        Self { reader, choices }
    }

    pub async fn handle(&self, query: GetQuestionQuery) -> Result<QuestionDetail, PollError> {
        // Unpublished questions are indistinguishable from missing ones
        let question = self
            .reader
            .find_published(&query.question_id, &query.now)
            .await?
            .ok_or(PollError::not_found(query.question_id))?;

        let choices = self.choices.list_by_question(question.id()).await?;

        Ok(QuestionDetail {
            voting_status: question.voting_status(&query.now),
            question,
            choices,
        })
    }
}
