//! Poll-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ValidationError};

/// Errors returned by the poll use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// Question does not exist (or is not visible yet).
    QuestionNotFound(QuestionId),
    /// Submitted choice is missing or belongs to another question.
    InvalidChoice,
    /// User lacks permission for the operation.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PollError {
    pub fn not_found(id: QuestionId) -> Self {
        PollError::QuestionNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PollError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PollError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PollError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            PollError::InvalidChoice => ErrorCode::InvalidChoice,
            PollError::Forbidden => ErrorCode::Forbidden,
            PollError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PollError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PollError::QuestionNotFound(id) => format!("Question not found: {}", id),
            PollError::InvalidChoice => "You didn't select a choice.".to_string(),
            PollError::Forbidden => "Permission denied".to_string(),
            PollError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PollError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PollError {}

impl From<ValidationError> for PollError {
    fn from(err: ValidationError) -> Self {
        PollError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for PollError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidChoice | ErrorCode::ChoiceNotFound => PollError::InvalidChoice,
            ErrorCode::Forbidden | ErrorCode::Unauthorized => PollError::Forbidden,
            ErrorCode::ValidationFailed => PollError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PollError::Infrastructure(err.to_string()),
        }
    }
}
