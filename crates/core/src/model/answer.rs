use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lowest value on the rating scale.
pub const RATING_MIN: u8 = 1;
/// Highest value on the rating scale.
pub const RATING_MAX: u8 = 5;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Reasons an answer does not satisfy its question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("rating {value} is outside the 1-5 scale")]
    RatingOutOfRange { value: u8 },

    #[error("\"{value}\" is not one of the question's options")]
    UnknownOption { value: String },

    #[error("expected a {expected} answer, got a {actual} answer")]
    KindMismatch {
        expected: AnswerKind,
        actual: AnswerKind,
    },
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// The shape of answer a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Rating,
    Choice,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Rating => f.write_str("rating"),
            AnswerKind::Choice => f.write_str("choice"),
        }
    }
}

/// A recorded response to one question.
///
/// The variant is fixed when the answer is recorded, so scoring can branch on it
/// without inspecting values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Intensity on the 1-5 scale.
    Rating(u8),
    /// One of the question's option strings, verbatim.
    Choice(String),
}

impl Answer {
    #[must_use]
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    #[must_use]
    pub fn kind(&self) -> AnswerKind {
        match self {
            Answer::Rating(_) => AnswerKind::Rating,
            Answer::Choice(_) => AnswerKind::Choice,
        }
    }

    #[must_use]
    pub fn as_rating(&self) -> Option<u8> {
        match self {
            Answer::Rating(value) => Some(*value),
            Answer::Choice(_) => None,
        }
    }

    #[must_use]
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Rating(_) => None,
            Answer::Choice(value) => Some(value),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Rating(value) => write!(f, "{value}/{RATING_MAX}"),
            Answer::Choice(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Answer::Rating(3).kind(), AnswerKind::Rating);
        assert_eq!(Answer::choice("Stay calm").kind(), AnswerKind::Choice);
    }

    #[test]
    fn accessors_do_not_cross_variants() {
        let rating = Answer::Rating(4);
        assert_eq!(rating.as_rating(), Some(4));
        assert_eq!(rating.as_choice(), None);

        let choice = Answer::choice("Suggest taking a break to cool down");
        assert_eq!(choice.as_rating(), None);
        assert_eq!(choice.as_choice(), Some("Suggest taking a break to cool down"));
    }

    #[test]
    fn serializes_with_explicit_tag() {
        let json = serde_json::to_string(&Answer::Rating(5)).unwrap();
        assert_eq!(json, r#"{"kind":"rating","value":5}"#);
    }
}
