use std::sync::Arc;

use gdd_core::model::{Answer, QuestionKind, RATING_MAX, RATING_MIN};
use services::{AssessmentOutcome, AssessmentService, SessionError, SessionWalker};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    Rate(u8),
    Choose(String),
    Next,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentStep {
    Continue,
    Completed(Box<AssessmentOutcome>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionInputVm {
    Rating {
        min: u8,
        max: u8,
        selected: Option<u8>,
    },
    Choice {
        options: Vec<String>,
        selected: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: String,
    pub prompt: String,
    pub position_label: String,
    pub situation: Option<String>,
    pub input: QuestionInputVm,
    pub answered: bool,
}

/// Everything the assessment view renders for the current step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentScreenVm {
    pub section_title: String,
    pub section_description: String,
    pub section_label: String,
    pub percent: u8,
    pub percent_label: String,
    pub section_percent: u8,
    pub question: Option<QuestionVm>,
    pub can_advance: bool,
    pub next_label: &'static str,
}

/// Drives one walk for the assessment view.
pub struct AssessmentVm {
    service: Arc<AssessmentService>,
    walker: SessionWalker,
}

impl AssessmentVm {
    /// # Errors
    ///
    /// Returns `ViewError::EmptyCatalog` when there is nothing to walk.
    pub fn start(service: Arc<AssessmentService>) -> Result<Self, ViewError> {
        let walker = service.start_session().map_err(ViewError::from_session)?;
        Ok(Self { service, walker })
    }

    #[must_use]
    pub fn screen(&self) -> AssessmentScreenVm {
        AssessmentScreenVm {
            section_title: self.section_title().to_string(),
            section_description: self.section_description().to_string(),
            section_label: self.section_label(),
            percent: self.percent(),
            percent_label: self.percent_label(),
            section_percent: self.section_percent(),
            question: self.question(),
            can_advance: self.can_advance(),
            next_label: self.next_label(),
        }
    }

    #[must_use]
    pub fn section_title(&self) -> &str {
        self.walker.active_section().map_or("", |s| s.title())
    }

    #[must_use]
    pub fn section_description(&self) -> &str {
        self.walker.active_section().map_or("", |s| s.description())
    }

    #[must_use]
    pub fn section_label(&self) -> String {
        let progress = self.walker.progress();
        format!(
            "Section {} of {}",
            progress.section_index + 1,
            progress.section_count
        )
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.walker.progress().percent
    }

    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}% Complete", self.percent())
    }

    /// Share of the active section's questions reached, as 0-100.
    #[must_use]
    pub fn section_percent(&self) -> u8 {
        let progress = self.walker.progress();
        if progress.question_count == 0 {
            return 100;
        }
        let reached = (progress.question_index + 1) as f64 / progress.question_count as f64;
        (reached * 100.0).round() as u8
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.walker.can_advance()
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.walker.active_question().is_none() {
            "Continue"
        } else if self.walker.is_last_question() {
            "Complete Section"
        } else {
            "Next Question"
        }
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let question = self.walker.active_question()?;
        let progress = self.walker.progress();
        let current = self.walker.current_answer();

        let input = match question.kind() {
            QuestionKind::Rating => QuestionInputVm::Rating {
                min: RATING_MIN,
                max: RATING_MAX,
                selected: current.and_then(Answer::as_rating),
            },
            kind => QuestionInputVm::Choice {
                options: kind.options().to_vec(),
                selected: current.and_then(Answer::as_choice).map(str::to_string),
            },
        };

        Some(QuestionVm {
            id: question.id().to_string(),
            prompt: question.prompt().to_string(),
            position_label: format!(
                "Question {} of {}",
                progress.question_index + 1,
                progress.question_count
            ),
            situation: question.kind().situation().map(str::to_string),
            input,
            answered: current.is_some(),
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError` when the walker rejects the intent.
    pub fn apply(&mut self, intent: AssessmentIntent) -> Result<AssessmentStep, ViewError> {
        match intent {
            AssessmentIntent::Rate(value) => self.answer(Answer::Rating(value)),
            AssessmentIntent::Choose(option) => self.answer(Answer::Choice(option)),
            AssessmentIntent::Next => {
                let result = self
                    .service
                    .advance(&mut self.walker)
                    .map_err(ViewError::from_session)?;
                Ok(match result.outcome {
                    Some(outcome) => AssessmentStep::Completed(Box::new(outcome)),
                    None => AssessmentStep::Continue,
                })
            }
        }
    }

    fn answer(&mut self, answer: Answer) -> Result<AssessmentStep, ViewError> {
        let Some(question_id) = self.walker.active_question().map(|q| q.id().to_string()) else {
            return Err(ViewError::from_session(SessionError::Completed));
        };
        self.service
            .answer(&mut self.walker, &question_id, answer)
            .map_err(ViewError::from_session)?;
        Ok(AssessmentStep::Continue)
    }
}
