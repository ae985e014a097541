use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyCatalog,
    InvalidAnswer,
    NotAnswered,
    SessionFinished,
    Unknown,
}

impl ViewError {
    /// Collapse a service failure into something the user can act on.
    #[must_use]
    pub fn from_session(err: SessionError) -> Self {
        match err {
            SessionError::Empty | SessionError::DuplicateSection(_) => Self::EmptyCatalog,
            SessionError::UnknownQuestion { .. } | SessionError::InvalidAnswer { .. } => {
                Self::InvalidAnswer
            }
            SessionError::Unanswered(_) => Self::NotAnswered,
            SessionError::Completed | SessionError::Responses(_) => Self::SessionFinished,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyCatalog => "There are no questions to answer.",
            Self::InvalidAnswer => "That answer is not valid for this question.",
            Self::NotAnswered => "Please answer the question before continuing.",
            Self::SessionFinished => "This assessment is already complete.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
