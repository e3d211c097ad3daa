//! DTOs for the public poll endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{QuestionDetail, QuestionSummary};
use crate::domain::poll::{Choice, ChoiceTally, QuestionResults, VoteOutcome, VotingStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/questions/:id/vote`.
///
/// `choice_id` is optional so a missing selection reaches the handler and
/// gets the same answer as an unknown one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteRequest {
    #[serde(default)]
    pub choice_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSummaryResponse {
    pub id: String,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub published_recently: bool,
    pub voting_status: VotingStatus,
}

impl From<QuestionSummary> for QuestionSummaryResponse {
    fn from(summary: QuestionSummary) -> Self {
        let question = summary.question;
        Self {
            id: question.id().to_string(),
            question_text: question.question_text().to_string(),
            pub_date: *question.pub_date().as_datetime(),
            end_date: question.end_date().map(|d| *d.as_datetime()),
            published_recently: summary.published_recently,
            voting_status: summary.voting_status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionSummaryResponse>,
}

impl From<Vec<QuestionSummary>> for QuestionListResponse {
    fn from(summaries: Vec<QuestionSummary>) -> Self {
        Self {
            questions: summaries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceResponse {
    pub id: String,
    pub choice_text: String,
}

impl From<&Choice> for ChoiceResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id().to_string(),
            choice_text: choice.choice_text().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDetailResponse {
    pub id: String,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub voting_status: VotingStatus,
    pub choices: Vec<ChoiceResponse>,
}

impl From<QuestionDetail> for QuestionDetailResponse {
    fn from(detail: QuestionDetail) -> Self {
        let question = detail.question;
        Self {
            id: question.id().to_string(),
            question_text: question.question_text().to_string(),
            pub_date: *question.pub_date().as_datetime(),
            end_date: question.end_date().map(|d| *d.as_datetime()),
            voting_status: detail.voting_status,
            choices: detail.choices.iter().map(ChoiceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceResultResponse {
    pub id: String,
    pub choice_text: String,
    pub votes: u64,
}

impl From<&ChoiceTally> for ChoiceResultResponse {
    fn from(tally: &ChoiceTally) -> Self {
        Self {
            id: tally.choice.id().to_string(),
            choice_text: tally.choice.choice_text().to_string(),
            votes: tally.votes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub question_id: String,
    pub question_text: String,
    pub total_votes: u64,
    pub choices: Vec<ChoiceResultResponse>,
}

impl From<&QuestionResults> for ResultsResponse {
    fn from(results: &QuestionResults) -> Self {
        Self {
            question_id: results.question.id().to_string(),
            question_text: results.question.question_text().to_string(),
            total_votes: results.total_votes(),
            choices: results.tallies.iter().map(ChoiceResultResponse::from).collect(),
        }
    }
}

/// Response to a recorded vote: the outcome, a confirmation message and
/// the question's results after the vote.
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    #[serde(flatten)]
    pub outcome: VoteOutcome,
    pub message: String,
    pub results: ResultsResponse,
}

impl VoteResponse {
    pub fn new(outcome: VoteOutcome, results: &QuestionResults) -> Self {
        let choice_text = outcome
            .current_choice()
            .and_then(|id| {
                results
                    .tallies
                    .iter()
                    .find(|t| t.choice.id() == &id)
                    .map(|t| t.choice.choice_text().to_string())
            })
            .unwrap_or_default();

        let message = match outcome {
            VoteOutcome::Created { .. } => format!("You voted for '{}'", choice_text),
            VoteOutcome::Updated { .. } => format!("Your vote was updated to '{}'", choice_text),
            VoteOutcome::Rejected { reason } => reason.user_message().to_string(),
        };

        Self {
            outcome,
            message,
            results: results.into(),
        }
    }
}
