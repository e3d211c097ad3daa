//! Vote repository port.
//!
//! # Uniqueness
//!
//! Implementations must reject a second vote for the same
//! (user, question) pair with `ErrorCode::VoteConflict` instead of
//! storing it. The voting handler relies on this to turn a racing
//! "create" into an update.

use crate::domain::foundation::{ChoiceId, DomainError, QuestionId, UserId};
use crate::domain::poll::Vote;
use async_trait::async_trait;

/// Repository port for vote records.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the user's vote on a question, if any.
    async fn find_by_user_and_question(
        &self,
        user_id: &UserId,
        question_id: &QuestionId,
    ) -> Result<Option<Vote>, DomainError>;

    /// Insert a new vote.
    ///
    /// # Errors
    ///
    /// - `VoteConflict` if the user already voted on the question
    /// - `InvalidChoice` if the choice doesn't belong to the vote's question
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, vote: &Vote) -> Result<(), DomainError>;

    /// Persist a reassigned vote.
    ///
    /// # Errors
    ///
    /// - `VoteNotFound` if the vote no longer exists
    /// - `DatabaseError` on persistence failure
    async fn update(&self, vote: &Vote) -> Result<(), DomainError>;

    /// Number of votes currently pointing at a choice.
    async fn count_by_choice(&self, choice_id: &ChoiceId) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn VoteRepository) {}
    }
}
