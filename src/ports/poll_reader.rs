//! Poll reader port (read side / queries).
//!
//! Read-optimized queries used by the listing, detail and results views.
//! Only published questions are ever returned.

use crate::domain::foundation::{DomainError, QuestionId, Timestamp};
use crate::domain::poll::{ChoiceTally, Question};
use async_trait::async_trait;

/// Reader port for poll queries.
#[async_trait]
pub trait PollReader: Send + Sync {
    /// Questions with `pub_date <= now`, newest first, at most `limit`.
    async fn list_published(&self, now: &Timestamp, limit: u32) -> Result<Vec<Question>, DomainError>;

    /// A single question, only if it is published at `now`.
    async fn find_published(
        &self,
        id: &QuestionId,
        now: &Timestamp,
    ) -> Result<Option<Question>, DomainError>;

    /// Every choice of the question with its derived vote count,
    /// in creation order.
    async fn tallies(&self, question_id: &QuestionId) -> Result<Vec<ChoiceTally>, DomainError>;
}
