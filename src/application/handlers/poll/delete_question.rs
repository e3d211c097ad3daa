//! DeleteQuestionHandler - Command handler for removing a question.
//!
//! Deletion cascades to the question's choices and every vote cast on them.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, ErrorCode, QuestionId};
use crate::domain::poll::PollError;
use crate::ports::QuestionRepository;

/// Command to delete a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionCommand {
    pub actor: AuthenticatedUser,
    pub question_id: QuestionId,
}

/// Handler for deleting questions.
pub struct DeleteQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl DeleteQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteQuestionCommand) -> Result<(), PollError> {
        if !cmd.actor.is_staff {
            return Err(PollError::Forbidden);
        }

        self.repository
            .delete(&cmd.question_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::QuestionNotFound => PollError::not_found(cmd.question_id),
                _ => e.into(),
            })?;

        tracing::info!(question_id = %cmd.question_id, deleted_by = %cmd.actor.id, "Question deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPollStore;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::poll::{Choice, Question, Vote};
    use crate::ports::VoteRepository;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("admin").unwrap(), None, None).staff()
    }

    #[tokio::test]
    async fn delete_cascades_to_choices_and_votes() {
        let store = InMemoryPollStore::new();
        let question = Question::published_now("Gone soon?").unwrap();
        let choice = Choice::new(*question.id(), "Yes").unwrap();
        store.save(&question, std::slice::from_ref(&choice)).await.unwrap();
        store
            .insert(&Vote::new(
                UserId::new("voter").unwrap(),
                *question.id(),
                *choice.id(),
                Timestamp::now(),
            ))
            .await
            .unwrap();

        DeleteQuestionHandler::new(Arc::new(store.clone()))
            .handle(DeleteQuestionCommand {
                actor: staff(),
                question_id: *question.id(),
            })
            .await
            .unwrap();

        assert!(store.find_by_id(question.id()).await.unwrap().is_none());
        assert_eq!(store.choice_count().await, 0);
        assert_eq!(store.vote_count().await, 0);
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let handler = DeleteQuestionHandler::new(Arc::new(InMemoryPollStore::new()));
        let id = QuestionId::new();

        let result = handler
            .handle(DeleteQuestionCommand {
                actor: staff(),
                question_id: id,
            })
            .await;

        assert_eq!(result, Err(PollError::QuestionNotFound(id)));
    }

    #[tokio::test]
    async fn non_staff_is_forbidden() {
        let store = InMemoryPollStore::new();
        let question = Question::published_now("Keep?").unwrap();
        store.save(&question, &[]).await.unwrap();

        let result = DeleteQuestionHandler::new(Arc::new(store.clone()))
            .handle(DeleteQuestionCommand {
                actor: AuthenticatedUser::new(UserId::new("voter").unwrap(), None, None),
                question_id: *question.id(),
            })
            .await;

        assert_eq!(result, Err(PollError::Forbidden));
        assert!(store.find_by_id(question.id()).await.unwrap().is_some());
    }
}
