//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionSummaryError;

/// Errors emitted by quiz sessions.
///
/// `Completed` and `NotComplete` mean the caller invoked an operation the
/// session's current state forbids. The session is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
    #[error("session not complete yet (question {question_index} of {total})")]
    NotComplete { question_index: u8, total: u8 },
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}

impl SessionError {
    /// True for calls made in a state that forbids them.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::Completed | Self::NotComplete { .. })
    }
}
