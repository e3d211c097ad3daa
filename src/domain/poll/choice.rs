//! Choice entity and its derived tally.

use serde::{Deserialize, Serialize};

use super::question::validate_text;
use super::Question;
use crate::domain::foundation::{ChoiceId, QuestionId, ValidationError};

/// One selectable option under a question.
///
/// The vote count is not stored here; it is derived from vote records
/// and surfaced through [`ChoiceTally`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    id: ChoiceId,
    question_id: QuestionId,
    choice_text: String,
}

impl Choice {
    /// Create a new choice for a question.
    pub fn new(question_id: QuestionId, choice_text: impl Into<String>) -> Result<Self, ValidationError> {
        let choice_text = validate_text("choice_text", choice_text.into())?;
        Ok(Self {
            id: ChoiceId::new(),
            question_id,
            choice_text,
        })
    }

    /// Reconstitute a choice from persistence (no validation).
    pub fn reconstitute(id: ChoiceId, question_id: QuestionId, choice_text: String) -> Self {
        Self {
            id,
            question_id,
            choice_text,
        }
    }

    pub fn id(&self) -> &ChoiceId {
        &self.id
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn choice_text(&self) -> &str {
        &self.choice_text
    }

    /// Checks that this choice is one of the question's options.
    pub fn belongs_to(&self, question_id: &QuestionId) -> bool {
        &self.question_id == question_id
    }
}

/// A choice together with the number of votes currently referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceTally {
    pub choice: Choice,
    pub votes: u64,
}

/// Tallies for every choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResults {
    pub question: Question,
    pub tallies: Vec<ChoiceTally>,
}

impl QuestionResults {
    pub fn total_votes(&self) -> u64 {
        self.tallies.iter().map(|t| t.votes).sum()
    }

    /// Votes for a single choice, zero if the choice is unknown.
    pub fn votes_for(&self, choice_id: &ChoiceId) -> u64 {
        self.tallies
            .iter()
            .find(|t| t.choice.id() == choice_id)
            .map(|t| t.votes)
            .unwrap_or(0)
    }
}
