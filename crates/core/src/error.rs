use thiserror::Error;

use crate::model::{AnswerError, QuestionError, ResponseError, SectionError};

/// Umbrella error for callers that do not need to tell core failures apart.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Response(#[from] ResponseError),
}
