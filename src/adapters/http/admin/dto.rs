//! DTOs for the staff question-management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapters::http::poll::ChoiceResponse;
use crate::domain::poll::{Choice, Question};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    /// Defaults to now.
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuestionRequest {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddChoiceRequest {
    pub choice_text: String,
}

/// A question as seen by staff, regardless of publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminQuestionResponse {
    pub id: String,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub choices: Vec<ChoiceResponse>,
}

impl AdminQuestionResponse {
    pub fn new(question: &Question, choices: &[Choice]) -> Self {
        Self {
            id: question.id().to_string(),
            question_text: question.question_text().to_string(),
            pub_date: *question.pub_date().as_datetime(),
            end_date: question.end_date().map(|d| *d.as_datetime()),
            choices: choices.iter().map(ChoiceResponse::from).collect(),
        }
    }
}
