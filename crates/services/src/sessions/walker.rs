use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use gdd_core::model::{
    Answer, AssessmentResponses, Question, Section, SectionId, SectionResponses,
};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ADVANCE OUTCOME ──────────────────────────────────────────────────────────
//

/// What happened when the walker moved forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question of the same section.
    NextQuestion { question_index: usize },
    /// The section finished and the walker entered the next one.
    SectionComplete {
        section_id: SectionId,
        responses: SectionResponses,
    },
    /// The last section finished. Carries one entry per catalog section.
    SessionComplete { responses: AssessmentResponses },
}

//
// ─── WALKER ───────────────────────────────────────────────────────────────────
//

/// Forward-only walk over an ordered list of sections and their questions.
///
/// Answers for the active section are collected in an in-progress set that is frozen
/// into the response map when the section completes. Once the last section completes
/// the walker is terminal and rejects further input.
#[derive(Debug, Clone)]
pub struct SessionWalker {
    sections: Vec<Section>,
    section_index: usize,
    question_index: usize,
    in_progress: SectionResponses,
    completed: AssessmentResponses,
    started_at: DateTime<Utc>,
    is_complete: bool,
}

impl SessionWalker {
    /// Start a walk over `sections`.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no sections are provided and
    /// `SessionError::DuplicateSection` if two sections share an id.
    pub fn new(sections: Vec<Section>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if sections.is_empty() {
            return Err(SessionError::Empty);
        }
        for (idx, section) in sections.iter().enumerate() {
            if sections[..idx].iter().any(|s| s.id() == section.id()) {
                return Err(SessionError::DuplicateSection(section.id().clone()));
            }
        }

        Ok(Self {
            sections,
            section_index: 0,
            question_index: 0,
            in_progress: SectionResponses::new(),
            completed: AssessmentResponses::new(),
            started_at,
            is_complete: false,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// The section being walked, or `None` once the session is complete.
    #[must_use]
    pub fn active_section(&self) -> Option<&Section> {
        if self.is_complete {
            None
        } else {
            self.sections.get(self.section_index)
        }
    }

    /// The question awaiting an answer. `None` for an empty section or a finished walk.
    #[must_use]
    pub fn active_question(&self) -> Option<&Question> {
        self.active_section()
            .and_then(|section| section.questions().get(self.question_index))
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.active_section()
            .is_some_and(|section| self.question_index + 1 >= section.questions().len())
    }

    /// Answer recorded for a question of the active section.
    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.in_progress.get(question_id)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&Answer> {
        self.active_question()
            .and_then(|question| self.in_progress.get(question.id().as_str()))
    }

    /// Sections finalized so far.
    #[must_use]
    pub fn completed_responses(&self) -> &AssessmentResponses {
        &self.completed
    }

    /// Returns a summary of the current walk progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let question_count = self
            .active_section()
            .map_or(0, |section| section.questions().len());
        SessionProgress {
            section_index: self.section_index,
            section_count: self.sections.len(),
            question_index: self.question_index,
            question_count,
            answered_in_section: self.in_progress.len(),
            percent: if self.is_complete {
                100
            } else {
                SessionProgress::percent_for(self.section_index, self.sections.len())
            },
            is_complete: self.is_complete,
        }
    }

    /// Record or replace the answer to a question of the active section.
    ///
    /// Returns the answer it replaced, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the walk has finished,
    /// `SessionError::UnknownQuestion` for ids outside the active section, and
    /// `SessionError::InvalidAnswer` when the answer breaks the question's contract.
    /// State is unchanged on error.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        answer: Answer,
    ) -> Result<Option<Answer>, SessionError> {
        if self.is_complete {
            warn!(question = question_id, "answer rejected: session already completed");
            return Err(SessionError::Completed);
        }

        let section = &self.sections[self.section_index];
        let Some(question) = section.question(question_id) else {
            warn!(section = %section.id(), question = question_id, "answer rejected: unknown question");
            return Err(SessionError::UnknownQuestion {
                section: section.id().clone(),
                question: question_id.into(),
            });
        };
        if let Err(source) = question.check_answer(&answer) {
            warn!(question = question_id, error = %source, "answer rejected");
            return Err(SessionError::InvalidAnswer {
                question: question.id().clone(),
                source,
            });
        }

        let id = question.id().clone();
        debug!(section = %section.id(), question = %id, answer = %answer, "answer recorded");
        Ok(self.in_progress.upsert(id, answer))
    }

    /// True iff the active question has an answer. An empty section can always advance.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        if self.is_complete {
            return false;
        }
        match self.active_question() {
            Some(question) => self.in_progress.contains(question.id().as_str()),
            None => true,
        }
    }

    /// Move past the active question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the walk has finished and
    /// `SessionError::Unanswered` if the active question has no answer yet.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.is_complete {
            warn!("advance rejected: session already completed");
            return Err(SessionError::Completed);
        }
        if let Some(question) = self.active_question() {
            if !self.in_progress.contains(question.id().as_str()) {
                return Err(SessionError::Unanswered(question.id().clone()));
            }
        }

        let section = &self.sections[self.section_index];
        let question_count = section.questions().len();
        if self.question_index + 1 < question_count {
            self.question_index += 1;
            debug!(section = %section.id(), question_index = self.question_index, "next question");
            return Ok(Advance::NextQuestion {
                question_index: self.question_index,
            });
        }

        let section_id = section.id().clone();
        let responses = self.in_progress.clone();
        self.completed.record(section_id.clone(), responses.clone())?;
        self.in_progress = SectionResponses::new();
        self.question_index = 0;
        info!(section = %section_id, answers = responses.len(), "section complete");

        if self.section_index + 1 < self.sections.len() {
            self.section_index += 1;
            return Ok(Advance::SectionComplete {
                section_id,
                responses,
            });
        }

        self.is_complete = true;
        info!(
            sections = self.completed.len(),
            answers = self.completed.answer_count(),
            "session complete"
        );
        Ok(Advance::SessionComplete {
            responses: self.completed.clone(),
        })
    }
}
