//! Shared error types for the services crate.

use thiserror::Error;

use gdd_core::model::{AnswerError, QuestionId, ResponseError, SectionId};

/// Broad classes of session failure, so callers can branch without matching every
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was malformed or does not belong to the session. State is unchanged.
    InvalidInput,
    /// The operation is not allowed at this point of the walk.
    SequenceViolation,
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no sections available for session")]
    Empty,
    #[error("section {0} appears more than once in the catalog")]
    DuplicateSection(SectionId),
    #[error("question {question} is not part of section {section}")]
    UnknownQuestion {
        section: SectionId,
        question: QuestionId,
    },
    #[error("invalid answer for question {question}: {source}")]
    InvalidAnswer {
        question: QuestionId,
        #[source]
        source: AnswerError,
    },
    #[error("question {0} has not been answered yet")]
    Unanswered(QuestionId),
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Responses(#[from] ResponseError),
}

impl SessionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Empty
            | SessionError::DuplicateSection(_)
            | SessionError::UnknownQuestion { .. }
            | SessionError::InvalidAnswer { .. } => ErrorKind::InvalidInput,
            SessionError::Unanswered(_)
            | SessionError::Completed
            | SessionError::Responses(_) => ErrorKind::SequenceViolation,
        }
    }
}
