//! ListPublishedQuestionsHandler - Query handler for the poll index.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::poll::{PollError, Question, VotingStatus};
use crate::ports::PollReader;

/// Query for the latest published questions.
#[derive(Debug, Clone)]
pub struct ListPublishedQuestionsQuery {
    pub now: Timestamp,
}

/// A listed question with its window flags evaluated at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSummary {
    pub question: Question,
    pub published_recently: bool,
    pub voting_status: VotingStatus,
}

/// Handler for listing published questions.
pub struct ListPublishedQuestionsHandler {
    reader: Arc<dyn PollReader>,
    limit: u32,
}

impl ListPublishedQuestionsHandler {
    pub fn new(reader: Arc<dyn PollReader>, limit: u32) -> Self {
        Self { reader, limit }
    }

    pub async fn handle(
        &self,
        query: ListPublishedQuestionsQuery,
    ) -> Result<Vec<QuestionSummary>, PollError> {
        let questions = self.reader.list_published(&query.now, self.limit).await?;

        Ok(questions
            .into_iter()
            .map(|question| QuestionSummary {
                published_recently: question.was_published_recently(&query.now),
                voting_status: question.voting_status(&query.now),
                question,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
    use crate::domain::poll::ChoiceTally;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPollReader {
        questions: Vec<Question>,
        last_limit: Mutex<Option<u32>>,
        fail: bool,
    }

    impl MockPollReader {
        fn with_questions(questions: Vec<Question>) -> Self {
            Self {
                questions,
                last_limit: Mutex::new(None),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                questions: vec![],
                last_limit: Mutex::new(None),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl PollReader for MockPollReader {
        async fn list_published(
            &self,
            _now: &Timestamp,
            limit: u32,
        ) -> Result<Vec<Question>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "connection lost"));
            }
            *self.last_limit.lock().unwrap() = Some(limit);
            Ok(self.questions.clone())
        }

        async fn find_published(
            &self,
            _id: &QuestionId,
            _now: &Timestamp,
        ) -> Result<Option<Question>, DomainError> {
            Ok(None)
        }

        async fn tallies(&self, _question_id: &QuestionId) -> Result<Vec<ChoiceTally>, DomainError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn passes_configured_limit_to_reader() {
        let reader = Arc::new(MockPollReader::with_questions(vec![]));
        let handler = ListPublishedQuestionsHandler::new(reader.clone(), 5);

        handler
            .handle(ListPublishedQuestionsQuery {
                now: Timestamp::now(),
            })
            .await
            .unwrap();

        assert_eq!(*reader.last_limit.lock().unwrap(), Some(5));
    }

    #[tokio::test]
    async fn evaluates_flags_at_query_time() {
        let now = Timestamp::now();
        let fresh = Question::new("Fresh?", now.plus_secs(-60), None).unwrap();
        let closed = Question::new(
            "Closed?",
            now.minus_days(10),
            Some(now.minus_days(2)),
        )
        .unwrap();
        let handler = ListPublishedQuestionsHandler::new(
            Arc::new(MockPollReader::with_questions(vec![fresh, closed])),
            5,
        );

        let summaries = handler
            .handle(ListPublishedQuestionsQuery { now })
            .await
            .unwrap();

        assert!(summaries[0].published_recently);
        assert_eq!(summaries[0].voting_status, VotingStatus::Open);
        assert!(!summaries[1].published_recently);
        assert_eq!(summaries[1].voting_status, VotingStatus::Closed);
    }

    #[tokio::test]
    async fn reader_failure_is_infrastructure_error() {
        let handler = ListPublishedQuestionsHandler::new(Arc::new(MockPollReader::failing()), 5);

        let result = handler
            .handle(ListPublishedQuestionsQuery {
                now: Timestamp::now(),
            })
            .await;

        assert!(matches!(result, Err(PollError::Infrastructure(_))));
    }
}
