use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::{Answer, AnswerError, AnswerKind, RATING_MAX, RATING_MIN};
use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while building a question definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: QuestionId },

    #[error("choice question {id} has no options")]
    NoOptions { id: QuestionId },

    #[error("choice question {id} lists \"{option}\" more than once")]
    DuplicateOption { id: QuestionId, option: String },
}

//
// ─── QUESTION KIND ────────────────────────────────────────────────────────────
//

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Answered with an integer on the 1-5 scale.
    Rating,
    /// Plain multiple choice.
    SingleChoice { options: Vec<String> },
    /// Multiple choice framed by a situation. The situation is display-only.
    ScenarioChoice {
        situation: String,
        options: Vec<String>,
    },
}

impl QuestionKind {
    #[must_use]
    pub fn answer_kind(&self) -> AnswerKind {
        match self {
            QuestionKind::Rating => AnswerKind::Rating,
            QuestionKind::SingleChoice { .. } | QuestionKind::ScenarioChoice { .. } => {
                AnswerKind::Choice
            }
        }
    }

    /// Option list for choice kinds; empty for rating questions.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            QuestionKind::Rating => &[],
            QuestionKind::SingleChoice { options }
            | QuestionKind::ScenarioChoice { options, .. } => options,
        }
    }

    #[must_use]
    pub fn situation(&self) -> Option<&str> {
        match self {
            QuestionKind::ScenarioChoice { situation, .. } => Some(situation),
            _ => None,
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// An immutable question definition supplied by a catalog.
///
/// Deserialization goes through the same checks as the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
}

#[derive(Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.prompt, record.kind)
    }
}

impl Question {
    /// Build a 1-5 rating question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyId` or `QuestionError::EmptyPrompt` for blank text.
    pub fn rating(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        Self::new(id.into(), prompt.into(), QuestionKind::Rating)
    }

    /// Build a plain multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for blank text, no options, or repeated options.
    pub fn single_choice<I, S>(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: I,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(id.into(), prompt.into(), QuestionKind::SingleChoice { options })
    }

    /// Build a scenario question: a situation followed by a choice.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for blank text, no options, or repeated options.
    pub fn scenario<I, S>(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        situation: impl Into<String>,
        options: I,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(
            id.into(),
            prompt.into(),
            QuestionKind::ScenarioChoice {
                situation: situation.into(),
                options,
            },
        )
    }

    fn new(id: QuestionId, prompt: String, kind: QuestionKind) -> Result<Self, QuestionError> {
        if id.as_str().trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }
        if kind.answer_kind() == AnswerKind::Choice {
            let options = kind.options();
            if options.is_empty() {
                return Err(QuestionError::NoOptions { id });
            }
            for (idx, option) in options.iter().enumerate() {
                if options[..idx].contains(option) {
                    return Err(QuestionError::DuplicateOption {
                        id,
                        option: option.clone(),
                    });
                }
            }
        }

        Ok(Self { id, prompt, kind })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check an answer against this question's kind contract.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::KindMismatch` when the answer variant does not fit the
    /// question, `AnswerError::RatingOutOfRange` for ratings outside 1-5, and
    /// `AnswerError::UnknownOption` for choices that are not listed verbatim.
    pub fn check_answer(&self, answer: &Answer) -> Result<(), AnswerError> {
        let expected = self.kind.answer_kind();
        if answer.kind() != expected {
            return Err(AnswerError::KindMismatch {
                expected,
                actual: answer.kind(),
            });
        }

        match answer {
            Answer::Rating(value) if !(RATING_MIN..=RATING_MAX).contains(value) => {
                Err(AnswerError::RatingOutOfRange { value: *value })
            }
            Answer::Choice(value) if !self.kind.options().iter().any(|o| o == value) => {
                Err(AnswerError::UnknownOption {
                    value: value.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone_question() -> Question {
        Question::single_choice(
            "tone_1",
            "When you need to disagree politely in a meeting, what tone do you adopt?",
            ["Direct", "Collaborative", "Questioning"],
        )
        .unwrap()
    }

    #[test]
    fn rating_accepts_whole_scale() {
        let q = Question::rating("trust_1", "I am dependable and open.").unwrap();
        for value in RATING_MIN..=RATING_MAX {
            assert!(q.check_answer(&Answer::Rating(value)).is_ok());
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        let q = Question::rating("trust_1", "I am dependable and open.").unwrap();
        assert_eq!(
            q.check_answer(&Answer::Rating(0)),
            Err(AnswerError::RatingOutOfRange { value: 0 })
        );
        assert_eq!(
            q.check_answer(&Answer::Rating(6)),
            Err(AnswerError::RatingOutOfRange { value: 6 })
        );
    }

    #[test]
    fn choice_requires_listed_option() {
        let q = tone_question();
        assert!(q.check_answer(&Answer::choice("Questioning")).is_ok());
        assert_eq!(
            q.check_answer(&Answer::choice("questioning")),
            Err(AnswerError::UnknownOption {
                value: "questioning".into()
            })
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let q = tone_question();
        assert_eq!(
            q.check_answer(&Answer::Rating(3)),
            Err(AnswerError::KindMismatch {
                expected: AnswerKind::Choice,
                actual: AnswerKind::Rating,
            })
        );
    }

    #[test]
    fn scenario_keeps_situation() {
        let q = Question::scenario(
            "conflict_1",
            "Two team members clash. How do you handle it?",
            "A disagreement is stalling the team.",
            ["Mediate", "Take a break"],
        )
        .unwrap();
        assert_eq!(q.kind().situation(), Some("A disagreement is stalling the team."));
        assert_eq!(q.kind().answer_kind(), AnswerKind::Choice);
    }

    #[test]
    fn deserialization_applies_validation() {
        let json = r#"{"id":"tone_1","prompt":"Which tone?","kind":{"type":"single_choice","options":[]}}"#;
        let err = serde_json::from_str::<Question>(json).unwrap_err();
        assert!(err.to_string().contains("has no options"), "{err}");

        let json = r#"{"id":"","prompt":"Prompt","kind":{"type":"rating"}}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());

        let json = r#"{"id":"tone_1","prompt":"Which tone?","kind":{"type":"single_choice","options":["A","A"]}}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn valid_json_builds_a_usable_question() {
        let q = tone_question();
        let json = serde_json::to_string(&q).unwrap();
        let parsed: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, q);
        assert!(parsed.check_answer(&Answer::choice("Direct")).is_ok());
    }

    #[test]
    fn construction_validates_options() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Question::single_choice("q", "Prompt", empty),
            Err(QuestionError::NoOptions { .. })
        ));
        assert!(matches!(
            Question::single_choice("q", "Prompt", ["A", "A"]),
            Err(QuestionError::DuplicateOption { .. })
        ));
        assert_eq!(Question::rating(" ", "Prompt"), Err(QuestionError::EmptyId));
    }
}
