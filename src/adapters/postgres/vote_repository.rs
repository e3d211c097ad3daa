//! PostgreSQL implementation of VoteRepository.
//!
//! The `votes_one_per_user` unique constraint backs the one-vote-per-
//! (user, question) rule; the composite foreign key on
//! `(choice_id, question_id)` keeps votes on their own question's choices.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::row_to_vote;
use crate::domain::foundation::{ChoiceId, DomainError, ErrorCode, QuestionId, UserId};
use crate::domain::poll::Vote;
use crate::ports::VoteRepository;

/// PostgreSQL implementation of VoteRepository.
#[derive(Clone)]
pub struct PostgresVoteRepository {
    pool: PgPool,
}

impl PostgresVoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn find_by_user_and_question(
        &self,
        user_id: &UserId,
        question_id: &QuestionId,
    ) -> Result<Option<Vote>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, question_id, choice_id, created_at, updated_at
            FROM votes
            WHERE user_id = $1 AND question_id = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(question_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch vote", e))?;

        row.as_ref().map(row_to_vote).transpose()
    }

    async fn insert(&self, vote: &Vote) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO votes (id, user_id, question_id, choice_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(vote.id().as_uuid())
        .bind(vote.user_id().as_str())
        .bind(vote.question_id().as_uuid())
        .bind(vote.choice_id().as_uuid())
        .bind(vote.created_at().as_datetime())
        .bind(vote.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_vote_write_error(e, vote, "Failed to insert vote"))?;

        Ok(())
    }

    async fn update(&self, vote: &Vote) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE votes SET
                choice_id = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(vote.id().as_uuid())
        .bind(vote.choice_id().as_uuid())
        .bind(vote.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_vote_write_error(e, vote, "Failed to update vote"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::VoteNotFound,
                format!("Vote not found: {}", vote.id()),
            ));
        }

        Ok(())
    }

    async fn count_by_choice(&self, choice_id: &ChoiceId) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM votes WHERE choice_id = $1")
            .bind(choice_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count votes", e))?;

        Ok(result.0.max(0) as u64)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn map_vote_write_error(err: sqlx::Error, vote: &Vote, context: &str) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DomainError::new(
            ErrorCode::VoteConflict,
            format!(
                "User {} already voted on question {}",
                vote.user_id(),
                vote.question_id()
            ),
        ),
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => DomainError::new(
            ErrorCode::InvalidChoice,
            format!(
                "Choice {} is not part of question {}",
                vote.choice_id(),
                vote.question_id()
            ),
        ),
        _ => DomainError::database(context, err),
    }
}
