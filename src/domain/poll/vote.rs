//! Vote entity - a user's current selection for one question.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChoiceId, QuestionId, Timestamp, UserId, VoteId};

/// A single user's current selection for a question.
///
/// The question id is carried next to the choice so stores can enforce
/// one vote per (user, question) without a join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    id: VoteId,
    user_id: UserId,
    question_id: QuestionId,
    choice_id: ChoiceId,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Vote {
    pub fn new(user_id: UserId, question_id: QuestionId, choice_id: ChoiceId, now: Timestamp) -> Self {
        Self {
            id: VoteId::new(),
            user_id,
            question_id,
            choice_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a vote from persistence.
    pub fn reconstitute(
        id: VoteId,
        user_id: UserId,
        question_id: QuestionId,
        choice_id: ChoiceId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            question_id,
            choice_id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &VoteId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn choice_id(&self) -> &ChoiceId {
        &self.choice_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Point the vote at another choice of the same question.
    ///
    /// Returns the previously selected choice.
    pub fn reassign(&mut self, choice_id: ChoiceId, now: Timestamp) -> ChoiceId {
        self.updated_at = now;
        std::mem::replace(&mut self.choice_id, choice_id)
    }
}
