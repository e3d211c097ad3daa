//! PostgreSQL implementation of ChoiceRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::row_to_choice;
use crate::domain::foundation::{ChoiceId, DomainError, ErrorCode, QuestionId};
use crate::domain::poll::Choice;
use crate::ports::ChoiceRepository;

/// PostgreSQL implementation of ChoiceRepository.
#[derive(Clone)]
pub struct PostgresChoiceRepository {
    pool: PgPool,
}

impl PostgresChoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChoiceRepository for PostgresChoiceRepository {
    async fn add(&self, choice: &Choice) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO choices (id, question_id, choice_text)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(choice.id().as_uuid())
        .bind(choice.question_id().as_uuid())
        .bind(choice.choice_text())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(DomainError::new(
                    ErrorCode::QuestionNotFound,
                    format!("Question not found: {}", choice.question_id()),
                ))
            }
            Err(e) => Err(DomainError::database("Failed to insert choice", e)),
        }
    }

    async fn find_for_question(
        &self,
        question_id: &QuestionId,
        choice_id: &ChoiceId,
    ) -> Result<Option<Choice>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, question_id, choice_text
            FROM choices
            WHERE id = $1 AND question_id = $2
            "#,
        )
        .bind(choice_id.as_uuid())
        .bind(question_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch choice", e))?;

        row.as_ref().map(row_to_choice).transpose()
    }

    async fn list_by_question(&self, question_id: &QuestionId) -> Result<Vec<Choice>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question_id, choice_text
            FROM choices
            WHERE question_id = $1
            ORDER BY seq
            "#,
        )
        .bind(question_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list choices", e))?;

        rows.iter().map(row_to_choice).collect()
    }
}
