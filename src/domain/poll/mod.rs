//! Poll domain module.
//!
//! Questions own their choices; votes reference a choice and a user.
//! Publish/voting state is derived from the question's dates, never stored,
//! and vote counts are derived from vote records.

mod choice;
mod errors;
mod outcome;
mod question;
mod vote;

pub use choice::{Choice, ChoiceTally, QuestionResults};
pub use errors::PollError;
pub use outcome::{RejectionReason, VoteOutcome};
pub use question::{Question, VotingStatus, MAX_TEXT_LENGTH, RECENT_WINDOW_DAYS};
pub use vote::Vote;
