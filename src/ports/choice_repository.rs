//! Choice repository port.

use crate::domain::foundation::{ChoiceId, DomainError, QuestionId};
use crate::domain::poll::Choice;
use async_trait::async_trait;

/// Repository port for the choices of a question.
#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    /// Add a choice to an existing question.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the owning question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn add(&self, choice: &Choice) -> Result<(), DomainError>;

    /// Find a choice by id, scoped to a question.
    ///
    /// Returns `None` when the choice doesn't exist or belongs to a
    /// different question.
    async fn find_for_question(
        &self,
        question_id: &QuestionId,
        choice_id: &ChoiceId,
    ) -> Result<Option<Choice>, DomainError>;

    /// List the choices of a question in creation order.
    async fn list_by_question(&self, question_id: &QuestionId) -> Result<Vec<Choice>, DomainError>;
}
