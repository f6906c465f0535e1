//! Error types for promptcraft.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Task types are a closed enum, so there is no "invalid task type" variant;
//! unknown ids are rejected when arguments are parsed.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptcraft operations.
#[derive(Error, Debug)]
pub enum PromptcraftError {
    /// Required free-text input was empty or whitespace only.
    #[error("{0} must not be empty")]
    EmptyContext(String),

    /// The completion API could not be reached, rejected the request, or
    /// returned no usable text.
    #[error("Completion API unavailable: {0}")]
    CompletionUnavailable(String),

    /// The completion API's text could not be interpreted as an architecture plan.
    #[error("Malformed architecture response: {0}")]
    MalformedArchitectureResponse(String),

    /// User provided invalid arguments or referenced something that does not exist.
    #[error("{0}")]
    UserError(String),

    /// Reading or writing local state failed.
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl PromptcraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptcraftError::EmptyContext(_) => exit_codes::USER_ERROR,
            PromptcraftError::UserError(_) => exit_codes::USER_ERROR,
            PromptcraftError::CompletionUnavailable(_) => exit_codes::COMPLETION_UNAVAILABLE,
            PromptcraftError::MalformedArchitectureResponse(_) => exit_codes::MALFORMED_RESPONSE,
            PromptcraftError::StorageError(_) => exit_codes::STORAGE_FAILURE,
        }
    }

    /// Whether the user can reasonably re-trigger the same operation.
    ///
    /// Nothing is retried automatically; the CLI uses this to print a hint.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PromptcraftError::CompletionUnavailable(_)
                | PromptcraftError::MalformedArchitectureResponse(_)
        )
    }
}

/// Result type alias for promptcraft operations.
pub type Result<T> = std::result::Result<T, PromptcraftError>;
