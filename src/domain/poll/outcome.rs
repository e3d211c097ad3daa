//! Outcomes of a vote submission.

use serde::Serialize;

use crate::domain::foundation::ChoiceId;

/// Why a vote was refused without touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The question is outside its publish window.
    VotingClosed,
}

impl RejectionReason {
    pub fn user_message(&self) -> &'static str {
        match self {
            RejectionReason::VotingClosed => "Voting is not allowed for this poll.",
        }
    }
}

/// Result of casting a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VoteOutcome {
    /// First vote of this user on the question.
    Created { choice_id: ChoiceId },
    /// An existing vote was moved to another (or the same) choice.
    Updated {
        previous_choice_id: ChoiceId,
        new_choice_id: ChoiceId,
    },
    /// Nothing was written.
    Rejected { reason: RejectionReason },
}

impl VoteOutcome {
    pub fn rejected(reason: RejectionReason) -> Self {
        VoteOutcome::Rejected { reason }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, VoteOutcome::Rejected { .. })
    }

    /// The choice the user's vote now points at, if one was recorded.
    pub fn current_choice(&self) -> Option<ChoiceId> {
        match self {
            VoteOutcome::Created { choice_id } => Some(*choice_id),
            VoteOutcome::Updated { new_choice_id, .. } => Some(*new_choice_id),
            VoteOutcome::Rejected { .. } => None,
        }
    }
}
