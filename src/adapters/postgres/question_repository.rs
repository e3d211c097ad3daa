//! PostgreSQL implementation of QuestionRepository.
//!
//! A question and its initial choices are written in one transaction.
//! Deletes rely on `ON DELETE CASCADE` for choices and votes.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::row_to_question;
use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
use crate::domain::poll::{Choice, Question};
use crate::ports::QuestionRepository;

/// PostgreSQL implementation of QuestionRepository.
#[derive(Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn save(&self, question: &Question, choices: &[Choice]) -> Result<(), DomainError> {
        if let Some(stray) = choices.iter().find(|c| !c.belongs_to(question.id())) {
            return Err(DomainError::validation(
                "choices",
                format!("Choice {} belongs to another question", stray.id()),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO questions (id, question_text, pub_date, end_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(question.id().as_uuid())
        .bind(question.question_text())
        .bind(question.pub_date().as_datetime())
        .bind(question.end_date().map(|d| *d.as_datetime()))
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert question", e))?;

        for choice in choices {
            sqlx::query(
                r#"
                INSERT INTO choices (id, question_id, choice_text)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(choice.id().as_uuid())
            .bind(choice.question_id().as_uuid())
            .bind(choice.choice_text())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to insert choice", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE questions SET
                question_text = $2,
                pub_date = $3,
                end_date = $4
            WHERE id = $1
            "#,
        )
        .bind(question.id().as_uuid())
        .bind(question.question_text())
        .bind(question.pub_date().as_datetime())
        .bind(question.end_date().map(|d| *d.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update question", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", question.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, question_text, pub_date, end_date
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch question", e))?;

        row.as_ref().map(row_to_question).transpose()
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete question", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", id),
            ));
        }

        Ok(())
    }
}
