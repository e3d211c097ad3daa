//! PostgreSQL implementation of PollReader.
//!
//! Read-optimized queries for the public views. Publication is decided in
//! SQL against the caller's `now` so listing and detail agree on it.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{row_to_question, row_to_tally};
use crate::domain::foundation::{DomainError, QuestionId, Timestamp};
use crate::domain::poll::{ChoiceTally, Question};
use crate::ports::PollReader;

/// PostgreSQL implementation of PollReader.
#[derive(Clone)]
pub struct PostgresPollReader {
    pool: PgPool,
}

impl PostgresPollReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PollReader for PostgresPollReader {
    async fn list_published(&self, now: &Timestamp, limit: u32) -> Result<Vec<Question>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question_text, pub_date, end_date
            FROM questions
            WHERE pub_date <= $1
            ORDER BY pub_date DESC
            LIMIT $2
            "#,
        )
        .bind(now.as_datetime())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list published questions", e))?;

        rows.iter().map(row_to_question).collect()
    }

    async fn find_published(
        &self,
        id: &QuestionId,
        now: &Timestamp,
    ) -> Result<Option<Question>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, question_text, pub_date, end_date
            FROM questions
            WHERE id = $1 AND pub_date <= $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(now.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch published question", e))?;

        row.as_ref().map(row_to_question).transpose()
    }

    async fn tallies(&self, question_id: &QuestionId) -> Result<Vec<ChoiceTally>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.question_id, c.choice_text, COUNT(v.id) AS votes
            FROM choices c
            LEFT JOIN votes v ON v.choice_id = c.id
            WHERE c.question_id = $1
            GROUP BY c.id, c.question_id, c.choice_text, c.seq
            ORDER BY c.seq
            "#,
        )
        .bind(question_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch tallies", e))?;

        rows.iter().map(row_to_tally).collect()
    }
}
