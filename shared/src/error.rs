use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let details = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}: {}", field, details)
            })
            .collect();
        messages.sort();
        SharedError::Validation(messages.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
