//! AddChoiceHandler - Command handler for adding a choice to a question.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, QuestionId};
use crate::domain::poll::{Choice, PollError};
use crate::ports::{ChoiceRepository, QuestionRepository};

/// Command to add a choice to an existing question.
#[derive(Debug, Clone)]
pub struct AddChoiceCommand {
    pub actor: AuthenticatedUser,
    pub question_id: QuestionId,
    pub choice_text: String,
}

/// Handler for adding choices.
pub struct AddChoiceHandler {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
}

impl AddChoiceHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>, choices: Arc<dyn ChoiceRepository>) -> Self {
        Self { questions, choices }
    }

    pub async fn handle(&self, cmd: AddChoiceCommand) -> Result<Choice, PollError> {
        if !cmd.actor.is_staff {
            return Err(PollError::Forbidden);
        }

        if self.questions.find_by_id(&cmd.question_id).await?.is_none() {
            return Err(PollError::not_found(cmd.question_id));
        }

        let choice = Choice::new(cmd.question_id, cmd.choice_text)?;
        self.choices.add(&choice).await?;

        tracing::info!(
            question_id = %cmd.question_id,
            choice_id = %choice.id(),
            "Choice added"
        );

        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPollStore;
    use crate::domain::foundation::UserId;
    use crate::domain::poll::Question;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("admin").unwrap(), None, None).staff()
    }

    fn handler(store: &InMemoryPollStore) -> AddChoiceHandler {
        AddChoiceHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn appends_choice_after_existing_ones() {
        let store = InMemoryPollStore::new();
        let question = Question::published_now("Pets?").unwrap();
        let cat = Choice::new(*question.id(), "Cat").unwrap();
        store.save(&question, std::slice::from_ref(&cat)).await.unwrap();

        let dog = handler(&store)
            .handle(AddChoiceCommand {
                actor: staff(),
                question_id: *question.id(),
                choice_text: "Dog".to_string(),
            })
            .await
            .unwrap();

        let listed = store.list_by_question(question.id()).await.unwrap();
        assert_eq!(listed, vec![cat, dog]);
    }

    #[tokio::test]
    async fn unknown_question_is_not_found() {
        let store = InMemoryPollStore::new();
        let id = QuestionId::new();

        let result = handler(&store)
            .handle(AddChoiceCommand {
                actor: staff(),
                question_id: id,
                choice_text: "Orphan".to_string(),
            })
            .await;

        assert_eq!(result, Err(PollError::QuestionNotFound(id)));
        assert_eq!(store.choice_count().await, 0);
    }

    #[tokio::test]
    async fn non_staff_is_forbidden() {
        let store = InMemoryPollStore::new();
        let question = Question::published_now("Pets?").unwrap();
        store.save(&question, &[]).await.unwrap();

        let result = handler(&store)
            .handle(AddChoiceCommand {
                actor: AuthenticatedUser::new(UserId::new("voter").unwrap(), None, None),
                question_id: *question.id(),
                choice_text: "Ferret".to_string(),
            })
            .await;

        assert_eq!(result, Err(PollError::Forbidden));
    }
}
