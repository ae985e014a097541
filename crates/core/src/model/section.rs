use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuestionId, SectionId};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    #[error("section id cannot be empty")]
    EmptyId,

    #[error("section {section} contains question {question} more than once")]
    DuplicateQuestion {
        section: SectionId,
        question: QuestionId,
    },
}

/// An ordered group of questions covering one assessed topic.
///
/// A section may have no questions at all; walkers treat it as immediately complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SectionRecord")]
pub struct Section {
    id: SectionId,
    title: String,
    description: String,
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct SectionRecord {
    id: SectionId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl TryFrom<SectionRecord> for Section {
    type Error = SectionError;

    fn try_from(record: SectionRecord) -> Result<Self, Self::Error> {
        let section = Self::new(record.id, record.title, record.questions)?;
        Ok(section.with_description(record.description))
    }
}

impl Section {
    /// # Errors
    ///
    /// Returns `SectionError::EmptyId` for a blank id and
    /// `SectionError::DuplicateQuestion` when two questions share an id.
    pub fn new(
        id: impl Into<SectionId>,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, SectionError> {
        let id = id.into();
        if id.as_str().trim().is_empty() {
            return Err(SectionError::EmptyId);
        }
        for (idx, question) in questions.iter().enumerate() {
            if questions[..idx].iter().any(|q| q.id() == question.id()) {
                return Err(SectionError::DuplicateQuestion {
                    section: id,
                    question: question.id().clone(),
                });
            }
        }

        Ok(Self {
            id,
            title: title.into(),
            description: String::new(),
            questions,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id().as_str() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
