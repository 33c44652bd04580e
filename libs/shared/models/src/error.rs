use serde_json::{json, Value};
use thiserror::Error;

/// Error surfaced to the presentation layer. Every variant is recoverable:
/// the user corrects the input and resubmits, or an empty state is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::ValidationError(msg)
            | AppError::Conflict(msg) => msg,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::ValidationError(_) => "validation_error",
            AppError::Conflict(_) => "conflict",
        }
    }

    /// JSON body the presentation layer renders in place of a view-model.
    pub fn to_json(&self) -> Value {
        tracing::warn!("{}: {}", self.kind(), self.message());

        json!({
            "error": self.kind(),
            "message": self.message(),
        })
    }
}
