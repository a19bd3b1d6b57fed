//! # Structured Error Handling
//!
//! Top-level error type for FRED core. Workflow rejections keep their own
//! typed variants (see [`crate::state_machine::errors`]) so callers can
//! distinguish user-correctable rule violations from infrastructure
//! failures.

use crate::state_machine::WorkflowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FredError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

pub type Result<T> = std::result::Result<T, FredError>;

impl FredError {
    /// True when the error is a workflow rejection the user can correct,
    /// as opposed to an infrastructure failure.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, FredError::Workflow(err) if err.is_rejection())
    }
}
