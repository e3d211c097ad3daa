//! CastVoteHandler - Command handler for casting or changing a vote.
//!
//! One vote per user per question: a first submission creates the vote,
//! later submissions move it to the newly selected choice.

use std::sync::Arc;

use crate::domain::foundation::{ChoiceId, ErrorCode, QuestionId, Timestamp, UserId};
use crate::domain::poll::{PollError, RejectionReason, Vote, VoteOutcome};
use crate::ports::{ChoiceRepository, QuestionRepository, VoteRepository};

/// Command to cast a vote.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub question_id: QuestionId,
    pub user_id: UserId,
    /// `None` when the voter submitted no (or an unreadable) selection.
    pub choice_id: Option<ChoiceId>,
    pub now: Timestamp,
}

/// Handler for casting votes.
pub struct CastVoteHandler {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
    votes: Arc<dyn VoteRepository>,
}

impl CastVoteHandler {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        choices: Arc<dyn ChoiceRepository>,
        votes: Arc<dyn VoteRepository>,
    ) -> Self {
        Self {
            questions,
            choices,
            votes,
        }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<VoteOutcome, PollError> {
        // 1. Load question
        let question = self
            .questions
            .find_by_id(&cmd.question_id)
            .await?
            .ok_or(PollError::not_found(cmd.question_id))?;

        // 2. Window check, nothing is written when closed
        if !question.can_vote(&cmd.now) {
            tracing::info!(
                question_id = %cmd.question_id,
                user_id = %cmd.user_id,
                "Vote rejected: voting closed"
            );
            return Ok(VoteOutcome::rejected(RejectionReason::VotingClosed));
        }

        // 3. Choice must be given and belong to this question
        let Some(choice_id) = cmd.choice_id else {
            tracing::debug!(question_id = %cmd.question_id, "Vote rejected: no choice selected");
            return Err(PollError::InvalidChoice);
        };
        if self
            .choices
            .find_for_question(&cmd.question_id, &choice_id)
            .await?
            .is_none()
        {
            tracing::debug!(
                question_id = %cmd.question_id,
                choice_id = %choice_id,
                "Vote rejected: invalid choice"
            );
            return Err(PollError::InvalidChoice);
        }

        // 4. Upsert
        let outcome = match self
            .votes
            .find_by_user_and_question(&cmd.user_id, &cmd.question_id)
            .await?
        {
            Some(vote) => self.reassign(vote, choice_id, cmd.now).await?,
            None => self.create(&cmd, choice_id).await?,
        };

        tracing::info!(
            question_id = %cmd.question_id,
            user_id = %cmd.user_id,
            choice_id = %choice_id,
            outcome = ?outcome,
            "Vote recorded"
        );

        Ok(outcome)
    }

    async fn create(
        &self,
        cmd: &CastVoteCommand,
        choice_id: ChoiceId,
    ) -> Result<VoteOutcome, PollError> {
        let vote = Vote::new(cmd.user_id.clone(), cmd.question_id, choice_id, cmd.now);

        match self.votes.insert(&vote).await {
            Ok(()) => Ok(VoteOutcome::Created { choice_id }),
            // A concurrent request created the vote first; retry as an update.
            Err(e) if e.code == ErrorCode::VoteConflict => {
                tracing::debug!(
                    question_id = %cmd.question_id,
                    user_id = %cmd.user_id,
                    "Concurrent vote detected, retrying as update"
                );
                let existing = self
                    .votes
                    .find_by_user_and_question(&cmd.user_id, &cmd.question_id)
                    .await?
                    .ok_or_else(|| {
                        PollError::infrastructure("Vote conflict reported but no vote found")
                    })?;
                self.reassign(existing, choice_id, cmd.now).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn reassign(
        &self,
        mut vote: Vote,
        choice_id: ChoiceId,
        now: Timestamp,
    ) -> Result<VoteOutcome, PollError> {
        let previous_choice_id = vote.reassign(choice_id, now);
        self.votes.update(&vote).await?;
        Ok(VoteOutcome::Updated {
            previous_choice_id,
            new_choice_id: choice_id,
        })
    }
}
