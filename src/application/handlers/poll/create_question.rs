//! CreateQuestionHandler - Command handler for staff-created questions.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, Timestamp};
use crate::domain::poll::{Choice, PollError, Question};
use crate::ports::QuestionRepository;

/// Command to create a question together with its choices.
#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    pub actor: AuthenticatedUser,
    pub question_text: String,
    /// Defaults to the creation instant.
    pub pub_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub choices: Vec<String>,
}

/// Result of successful question creation.
#[derive(Debug, Clone)]
pub struct CreateQuestionResult {
    pub question: Question,
    pub choices: Vec<Choice>,
}

/// Handler for creating questions.
pub struct CreateQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl CreateQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateQuestionCommand) -> Result<CreateQuestionResult, PollError> {
        if !cmd.actor.is_staff {
            tracing::warn!(user_id = %cmd.actor.id, "Non-staff user attempted to create a question");
            return Err(PollError::Forbidden);
        }

        if cmd.choices.is_empty() {
            return Err(PollError::validation("choices", "At least one choice is required"));
        }

        let pub_date = cmd.pub_date.unwrap_or_else(Timestamp::now);
        let question = Question::new(cmd.question_text, pub_date, cmd.end_date)?;

        let choices = cmd
            .choices
            .into_iter()
            .map(|text| Choice::new(*question.id(), text))
            .collect::<Result<Vec<_>, _>>()?;

        self.repository.save(&question, &choices).await?;

        tracing::info!(
            question_id = %question.id(),
            choices = choices.len(),
            created_by = %cmd.actor.id,
            "Question created"
        );

        Ok(CreateQuestionResult { question, choices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPollStore;
    use crate::domain::foundation::UserId;
    use crate::ports::ChoiceRepository;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("admin").unwrap(), None, None).staff()
    }

    fn command(actor: AuthenticatedUser, choices: &[&str]) -> CreateQuestionCommand {
        CreateQuestionCommand {
            actor,
            question_text: "What's new?".to_string(),
            pub_date: None,
            end_date: None,
            choices: choices.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn staff_can_create_question_with_choices() {
        let store = InMemoryPollStore::new();
        let handler = CreateQuestionHandler::new(Arc::new(store.clone()));

        let result = handler
            .handle(command(staff(), &["Not much", "The sky"]))
            .await
            .unwrap();

        let stored = store.list_by_question(result.question.id()).await.unwrap();
        assert_eq!(stored, result.choices);
        assert_eq!(stored.len(), 2);
        assert!(result.question.is_published(&Timestamp::now()));
    }

    #[tokio::test]
    async fn non_staff_is_forbidden() {
        let store = InMemoryPollStore::new();
        let handler = CreateQuestionHandler::new(Arc::new(store.clone()));
        let user = AuthenticatedUser::new(UserId::new("voter").unwrap(), None, None);

        let result = handler.handle(command(user, &["Yes"])).await;

        assert!(matches!(result, Err(PollError::Forbidden)));
        assert_eq!(store.choice_count().await, 0);
    }

    #[tokio::test]
    async fn requires_at_least_one_choice() {
        let handler = CreateQuestionHandler::new(Arc::new(InMemoryPollStore::new()));

        let result = handler.handle(command(staff(), &[])).await;

        assert!(matches!(
            result,
            Err(PollError::ValidationFailed { ref field, .. }) if field == "choices"
        ));
    }

    #[tokio::test]
    async fn rejects_window_ending_before_publication() {
        let handler = CreateQuestionHandler::new(Arc::new(InMemoryPollStore::new()));
        let now = Timestamp::now();
        let mut cmd = command(staff(), &["Yes"]);
        cmd.pub_date = Some(now);
        cmd.end_date = Some(now.minus_days(1));

        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(PollError::ValidationFailed { ref field, .. }) if field == "end_date"
        ));
    }

    #[tokio::test]
    async fn rejects_blank_choice_text() {
        let store = InMemoryPollStore::new();
        let handler = CreateQuestionHandler::new(Arc::new(store.clone()));

        let result = handler.handle(command(staff(), &["Yes", "   "])).await;

        assert!(matches!(
            result,
            Err(PollError::ValidationFailed { ref field, .. }) if field == "choice_text"
        ));
        assert_eq!(store.choice_count().await, 0);
    }
}
