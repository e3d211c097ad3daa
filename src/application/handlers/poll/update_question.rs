//! UpdateQuestionHandler - Command handler for editing a question.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, ErrorCode, QuestionId, Timestamp};
use crate::domain::poll::{PollError, Question};
use crate::ports::QuestionRepository;

/// Command to replace a question's text and publish window.
#[derive(Debug, Clone)]
pub struct UpdateQuestionCommand {
    pub actor: AuthenticatedUser,
    pub question_id: QuestionId,
    pub question_text: String,
    pub pub_date: Timestamp,
    pub end_date: Option<Timestamp>,
}

/// Handler for editing questions.
pub struct UpdateQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl UpdateQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateQuestionCommand) -> Result<Question, PollError> {
        if !cmd.actor.is_staff {
            return Err(PollError::Forbidden);
        }

        let mut question = self
            .repository
            .find_by_id(&cmd.question_id)
            .await?
            .ok_or(PollError::not_found(cmd.question_id))?;

        question.edit(cmd.question_text, cmd.pub_date, cmd.end_date)?;

        self.repository.update(&question).await.map_err(|e| {
            if e.code == ErrorCode::QuestionNotFound {
                PollError::not_found(cmd.question_id)
            } else {
                e.into()
            }
        })?;

        tracing::info!(question_id = %cmd.question_id, updated_by = %cmd.actor.id, "Question updated");

        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPollStore;
    use crate::domain::foundation::UserId;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("admin").unwrap(), None, None).staff()
    }

    async fn seeded() -> (InMemoryPollStore, Question) {
        let store = InMemoryPollStore::new();
        let question = Question::new("Original?", Timestamp::now().minus_days(2), None).unwrap();
        store.save(&question, &[]).await.unwrap();
        (store, question)
    }

    #[tokio::test]
    async fn closing_a_question_stops_voting() {
        let (store, question) = seeded().await;
        let handler = UpdateQuestionHandler::new(Arc::new(store.clone()));
        let now = Timestamp::now();

        let updated = handler
            .handle(UpdateQuestionCommand {
                actor: staff(),
                question_id: *question.id(),
                question_text: "Renamed?".to_string(),
                pub_date: *question.pub_date(),
                end_date: Some(now.minus_days(1)),
            })
            .await
            .unwrap();

        let stored = store.find_by_id(question.id()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.question_text(), "Renamed?");
        assert!(!stored.can_vote(&now));
    }

    #[tokio::test]
    async fn end_before_pub_is_rejected_and_not_stored() {
        let (store, question) = seeded().await;
        let handler = UpdateQuestionHandler::new(Arc::new(store.clone()));

        let result = handler
            .handle(UpdateQuestionCommand {
                actor: staff(),
                question_id: *question.id(),
                question_text: "Renamed?".to_string(),
                pub_date: *question.pub_date(),
                end_date: Some(question.pub_date().minus_days(1)),
            })
            .await;

        assert!(matches!(result, Err(PollError::ValidationFailed { .. })));
        let stored = store.find_by_id(question.id()).await.unwrap().unwrap();
        assert_eq!(stored.question_text(), "Original?");
    }

    #[tokio::test]
    async fn non_staff_is_forbidden() {
        let (store, question) = seeded().await;
        let handler = UpdateQuestionHandler::new(Arc::new(store));

        let result = handler
            .handle(UpdateQuestionCommand {
                actor: AuthenticatedUser::new(UserId::new("voter").unwrap(), None, None),
                question_id: *question.id(),
                question_text: "Hijacked?".to_string(),
                pub_date: *question.pub_date(),
                end_date: None,
            })
            .await;

        assert_eq!(result, Err(PollError::Forbidden));
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let handler = UpdateQuestionHandler::new(Arc::new(InMemoryPollStore::new()));
        let id = QuestionId::new();

        let result = handler
            .handle(UpdateQuestionCommand {
                actor: staff(),
                question_id: id,
                question_text: "Anything?".to_string(),
                pub_date: Timestamp::now(),
                end_date: None,
            })
            .await;

        assert_eq!(result, Err(PollError::QuestionNotFound(id)));
    }
}
