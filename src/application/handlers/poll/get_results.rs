//! GetResultsHandler - Query handler for vote tallies.

use std::sync::Arc;

use crate::domain::foundation::{QuestionId, Timestamp};
use crate::domain::poll::{PollError, QuestionResults};
use crate::ports::PollReader;

/// Query for the results of a published question.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub question_id: QuestionId,
    pub now: Timestamp,
}

/// Handler for retrieving results.
pub struct GetResultsHandler {
    reader: Arc<dyn PollReader>,
}

impl GetResultsHandler {
    pub fn new(reader: Arc<dyn PollReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetResultsQuery) -> Result<QuestionResults, PollError> {
        let question = self
            .reader
            .find_published(&query.question_id, &query.now)
            .await?
            .ok_or(PollError::not_found(query.question_id))?;

        let tallies = self.reader.tallies(question.id()).await?;

        Ok(QuestionResults { question, tallies })
    }
}
