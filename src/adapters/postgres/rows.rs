//! Row mapping shared by the poll adapters.

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::{
    ChoiceId, DomainError, ErrorCode, QuestionId, Timestamp, UserId, VoteId,
};
use crate::domain::poll::{Choice, ChoiceTally, Question, Vote};

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(value))
}

pub(super) fn row_to_question(row: &PgRow) -> Result<Question, DomainError> {
    let end_date: Option<chrono::DateTime<chrono::Utc>> = column(row, "end_date")?;

    Ok(Question::reconstitute(
        QuestionId::from_uuid(column(row, "id")?),
        column(row, "question_text")?,
        timestamp(row, "pub_date")?,
        end_date.map(Timestamp::from_datetime),
    ))
}

pub(super) fn row_to_choice(row: &PgRow) -> Result<Choice, DomainError> {
    Ok(Choice::reconstitute(
        ChoiceId::from_uuid(column(row, "id")?),
        QuestionId::from_uuid(column(row, "question_id")?),
        column(row, "choice_text")?,
    ))
}

/// Expects the choice columns plus a `votes` count.
pub(super) fn row_to_tally(row: &PgRow) -> Result<ChoiceTally, DomainError> {
    let votes: i64 = column(row, "votes")?;

    Ok(ChoiceTally {
        choice: row_to_choice(row)?,
        votes: votes.max(0) as u64,
    })
}

pub(super) fn row_to_vote(row: &PgRow) -> Result<Vote, DomainError> {
    let user_id: String = column(row, "user_id")?;
    let user_id = UserId::new(user_id).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
    })?;

    Ok(Vote::reconstitute(
        VoteId::from_uuid(column(row, "id")?),
        user_id,
        QuestionId::from_uuid(column(row, "question_id")?),
        ChoiceId::from_uuid(column(row, "choice_id")?),
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}
