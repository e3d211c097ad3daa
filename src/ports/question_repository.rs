//! Question repository port (write side).
//!
//! Defines the contract for persisting questions together with the
//! choices they own. Deleting a question removes its choices and every
//! vote cast on them.

use crate::domain::foundation::{DomainError, QuestionId};
use crate::domain::poll::{Choice, Question};
use async_trait::async_trait;

/// Repository port for Question persistence.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Save a new question and its initial choices atomically.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a choice belongs to another question
    /// - `DatabaseError` on persistence failure
    async fn save(&self, question: &Question, choices: &[Choice]) -> Result<(), DomainError>;

    /// Update the text and window of an existing question.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, question: &Question) -> Result<(), DomainError>;

    /// Find a question by its ID, regardless of publication.
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError>;

    /// Delete a question, cascading to its choices and their votes.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &QuestionId) -> Result<(), DomainError>;
}
