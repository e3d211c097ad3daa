//! Question entity and its publish-window predicates.
//!
//! A question is visible once `pub_date` has passed and accepts votes
//! inside the window `[pub_date, end_date]` (open-ended when `end_date`
//! is absent). None of this is stored state: every predicate is a pure
//! function of the stored dates and the instant passed in.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, Timestamp, ValidationError};

/// Maximum length for question and choice texts.
pub const MAX_TEXT_LENGTH: usize = 200;

/// How far back `was_published_recently` looks.
pub const RECENT_WINDOW_DAYS: i64 = 1;

/// Where a question currently sits relative to its publish window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingStatus {
    NotPublished,
    Open,
    Closed,
}

/// A poll prompt with a publish window.
///
/// # Invariants
///
/// - `question_text` is 1-200 characters after trimming
/// - `end_date`, when set, is not before `pub_date` (checked on `new`/`edit`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question_text: String,
    pub_date: Timestamp,
    end_date: Option<Timestamp>,
}

impl Question {
    /// Create a new question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` for a bad `question_text`
    /// - `InvalidFormat` on `end_date` if it precedes `pub_date`
    pub fn new(
        question_text: impl Into<String>,
        pub_date: Timestamp,
        end_date: Option<Timestamp>,
    ) -> Result<Self, ValidationError> {
        let question_text = validate_text("question_text", question_text.into())?;
        validate_window(&pub_date, end_date.as_ref())?;

        Ok(Self {
            id: QuestionId::new(),
            question_text,
            pub_date,
            end_date,
        })
    }

    /// Create a question published right now with no end date.
    pub fn published_now(question_text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(question_text, Timestamp::now(), None)
    }

    /// Reconstitute a question from persistence (no validation).
    pub fn reconstitute(
        id: QuestionId,
        question_text: String,
        pub_date: Timestamp,
        end_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            question_text,
            pub_date,
            end_date,
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn pub_date(&self) -> &Timestamp {
        &self.pub_date
    }

    pub fn end_date(&self) -> Option<&Timestamp> {
        self.end_date.as_ref()
    }

    /// Replace text and window, revalidating both.
    pub fn edit(
        &mut self,
        question_text: impl Into<String>,
        pub_date: Timestamp,
        end_date: Option<Timestamp>,
    ) -> Result<(), ValidationError> {
        let question_text = validate_text("question_text", question_text.into())?;
        validate_window(&pub_date, end_date.as_ref())?;

        self.question_text = question_text;
        self.pub_date = pub_date;
        self.end_date = end_date;
        Ok(())
    }

    /// True once `now` has reached `pub_date`.
    pub fn is_published(&self, now: &Timestamp) -> bool {
        now >= &self.pub_date
    }

    /// True while `now` lies inside the publish window (inclusive).
    pub fn can_vote(&self, now: &Timestamp) -> bool {
        match &self.end_date {
            Some(end_date) => &self.pub_date <= now && now <= end_date,
            None => now >= &self.pub_date,
        }
    }

    /// True if `pub_date` falls within the last day, bounds included.
    pub fn was_published_recently(&self, now: &Timestamp) -> bool {
        let window_start = now.offset(-Duration::days(RECENT_WINDOW_DAYS));
        window_start <= self.pub_date && &self.pub_date <= now
    }

    pub fn voting_status(&self, now: &Timestamp) -> VotingStatus {
        if !self.is_published(now) {
            VotingStatus::NotPublished
        } else if self.can_vote(now) {
            VotingStatus::Open
        } else {
            VotingStatus::Closed
        }
    }
}

/// Validates a display text, returning it trimmed.
pub(super) fn validate_text(field: &str, text: String) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let length = trimmed.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(ValidationError::too_long(field, MAX_TEXT_LENGTH, length));
    }
    Ok(trimmed.to_string())
}

fn validate_window(pub_date: &Timestamp, end_date: Option<&Timestamp>) -> Result<(), ValidationError> {
    match end_date {
        Some(end_date) if end_date.is_before(pub_date) => Err(ValidationError::invalid_format(
            "end_date",
            "end date must not precede the publication date",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_at(pub_date: Timestamp, end_date: Option<Timestamp>) -> Question {
        Question::reconstitute(QuestionId::new(), "Q?".to_string(), pub_date, end_date)
    }

    // is_published

    #[test]
    fn is_published_with_future_question() {
        let now = Timestamp::now();
        let question = question_at(now.plus_days(30), None);
        assert!(!question.is_published(&now));
    }

    #[test]
    fn is_published_with_pub_date_equal_to_now() {
        let now = Timestamp::now();
        let question = question_at(now, None);
        assert!(question.is_published(&now));
    }

    #[test]
    fn is_published_with_past_question() {
        let now = Timestamp::now();
        let question = question_at(now.minus_days(30), None);
        assert!(question.is_published(&now));
    }

    // was_published_recently

    #[test]
    fn was_published_recently_with_future_question() {
        let now = Timestamp::now();
        let question = question_at(now.plus_days(30), None);
        assert!(!question.was_published_recently(&now));
    }

    #[test]
    fn was_published_recently_with_old_question() {
        let now = Timestamp::now();
        let question = question_at(now.minus_days(1).plus_secs(-1), None);
        assert!(!question.was_published_recently(&now));
    }

    #[test]
    fn was_published_recently_with_recent_question() {
        let now = Timestamp::now();
        let question = question_at(now.minus_days(1).plus_secs(1), None);
        assert!(question.was_published_recently(&now));
    }

    #[test]
    fn was_published_recently_includes_both_bounds() {
        let now = Timestamp::now();
        assert!(question_at(now.minus_days(1), None).was_published_recently(&now));
        assert!(question_at(now, None).was_published_recently(&now));
    }

    // can_vote

    #[test]
    fn can_vote_with_no_end_date() {
        let now = Timestamp::now();
        let question = question_at(now.minus_days(30), None);
        assert!(question.can_vote(&now));
    }

    #[test]
    fn can_vote_with_end_date_in_future() {
        let now = Timestamp::now();
        let question = question_at(now.minus_days(1), Some(now.plus_days(1)));
        assert!(question.can_vote(&now));
    }

    #[test]
    fn cannot_vote_before_pub_date() {
        let now = Timestamp::now();
        let question = question_at(now.plus_days(1), None);
        assert!(!question.can_vote(&now));
    }

    #[test]
    fn cannot_vote_after_end_date() {
        let now = Timestamp::now();
        let question = question_at(now.minus_days(10), Some(now.minus_days(1)));
        assert!(!question.can_vote(&now));
    }

    #[test]
    fn can_vote_on_window_bounds() {
        let now = Timestamp::now();
        let end = now.plus_days(2);
        let question = question_at(now, Some(end));
        assert!(question.can_vote(&now));
        assert!(question.can_vote(&end));
        assert!(!question.can_vote(&end.plus_secs(1)));
    }

    // voting_status

    #[test]
    fn voting_status_follows_window() {
        let now = Timestamp::now();
        let question = question_at(now.minus_days(2), Some(now.minus_days(1)));
        assert_eq!(question.voting_status(&now.minus_days(3)), VotingStatus::NotPublished);
        assert_eq!(question.voting_status(&now.minus_days(2)), VotingStatus::Open);
        assert_eq!(question.voting_status(&now), VotingStatus::Closed);
    }

    // construction

    #[test]
    fn new_trims_question_text() {
        let question = Question::published_now("  What's up?  ").unwrap();
        assert_eq!(question.question_text(), "What's up?");
        assert!(question.end_date().is_none());
    }

    #[test]
    fn new_rejects_blank_text() {
        let result = Question::published_now("   ");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn new_rejects_too_long_text() {
        let result = Question::published_now("x".repeat(MAX_TEXT_LENGTH + 1));
        assert!(matches!(result, Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn new_rejects_end_date_before_pub_date() {
        let now = Timestamp::now();
        let result = Question::new("Q?", now, Some(now.minus_days(1)));
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn new_accepts_end_date_equal_to_pub_date() {
        let now = Timestamp::now();
        assert!(Question::new("Q?", now, Some(now)).is_ok());
    }

    #[test]
    fn edit_revalidates_window() {
        let now = Timestamp::now();
        let mut question = Question::published_now("Q?").unwrap();
        assert!(question.edit("Q2?", now, Some(now.minus_days(1))).is_err());
        assert_eq!(question.question_text(), "Q?");

        question.edit("Q2?", now, Some(now.plus_days(1))).unwrap();
        assert_eq!(question.question_text(), "Q2?");
        assert_eq!(question.end_date(), Some(&now.plus_days(1)));
    }
}
