use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;
use thiserror::Error;

use crate::model::answer::Answer;
use crate::model::ids::{QuestionId, SectionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("responses for section {0} were already recorded")]
    AlreadyRecorded(SectionId),
}

//
// ─── SECTION RESPONSES ────────────────────────────────────────────────────────
//

/// Answers given within one section, keyed by question id.
///
/// A missing key means the question was never answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionResponses {
    answers: BTreeMap<QuestionId, Answer>,
}

impl SectionResponses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for a question, returning the previous one.
    pub fn upsert(&mut self, question_id: QuestionId, answer: Answer) -> Option<Answer> {
        self.answers.insert(question_id, answer)
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, QuestionId, Answer> {
        self.answers.iter()
    }

    /// Rating values only, in question-id order.
    pub fn ratings(&self) -> impl Iterator<Item = u8> + '_ {
        self.answers.values().filter_map(Answer::as_rating)
    }

    /// Choice values only, in question-id order.
    pub fn choices(&self) -> impl Iterator<Item = &str> + '_ {
        self.answers.values().filter_map(Answer::as_choice)
    }
}

impl<Q: Into<QuestionId>> FromIterator<(Q, Answer)> for SectionResponses {
    fn from_iter<T: IntoIterator<Item = (Q, Answer)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().map(|(id, a)| (id.into(), a)).collect(),
        }
    }
}

//
// ─── ASSESSMENT RESPONSES ─────────────────────────────────────────────────────
//

/// Completed section response sets, keyed by section id.
///
/// Each section is written exactly once; recorded sets are never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssessmentResponses {
    sections: BTreeMap<SectionId, SectionResponses>,
}

impl AssessmentResponses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finalized section.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::AlreadyRecorded` if the section already has an entry;
    /// the existing entry is left untouched.
    pub fn record(
        &mut self,
        section_id: SectionId,
        responses: SectionResponses,
    ) -> Result<(), ResponseError> {
        match self.sections.entry(section_id) {
            btree_map::Entry::Occupied(entry) => {
                Err(ResponseError::AlreadyRecorded(entry.key().clone()))
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(responses);
                Ok(())
            }
        }
    }

    /// Builder-style `record` for fixtures and callers that assemble maps by hand.
    ///
    /// # Errors
    ///
    /// Same as [`AssessmentResponses::record`].
    pub fn with_section(
        mut self,
        section_id: impl Into<SectionId>,
        responses: SectionResponses,
    ) -> Result<Self, ResponseError> {
        self.record(section_id.into(), responses)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, section_id: &str) -> Option<&SectionResponses> {
        self.sections.get(section_id)
    }

    #[must_use]
    pub fn contains(&self, section_id: &str) -> bool {
        self.sections.contains_key(section_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &SectionId> + '_ {
        self.sections.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, SectionId, SectionResponses> {
        self.sections.iter()
    }

    /// Total number of answers across all sections.
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.sections.values().map(SectionResponses::len).sum()
    }
}
