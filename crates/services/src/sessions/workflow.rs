use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use gdd_core::model::{Answer, AssessmentResponses, Section};
use gdd_core::scoring::{ProfileReport, RandomFallback, ScoreAggregator};

use super::walker::{Advance, SessionWalker};
use crate::Clock;
use crate::error::SessionError;

/// Final result of a walk: the frozen responses and the derived report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentOutcome {
    pub responses: AssessmentResponses,
    pub report: ProfileReport,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentOutcome {
    /// Whole minutes between start and completion.
    #[must_use]
    pub fn minutes_taken(&self) -> i64 {
        (self.completed_at - self.started_at).num_minutes().max(0)
    }
}

/// Result of a single advance through the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceResult {
    pub advance: Advance,
    /// Present only when the walk just finished.
    pub outcome: Option<AssessmentOutcome>,
}

impl AdvanceResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Orchestrates session start, answering, and scoring on completion.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    clock: Clock,
    catalog: Arc<[Section]>,
    aggregator: ScoreAggregator,
    seed: Option<u64>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, catalog: impl Into<Arc<[Section]>>) -> Self {
        Self {
            clock,
            catalog: catalog.into(),
            aggregator: ScoreAggregator::default(),
            seed: None,
        }
    }

    /// Pin the choice-only fallback so identical answers give identical reports.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_aggregator(mut self, aggregator: ScoreAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &[Section] {
        &self.catalog
    }

    #[must_use]
    pub fn aggregator(&self) -> &ScoreAggregator {
        &self.aggregator
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Start a fresh walk over the catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the catalog is empty or has duplicate sections.
    pub fn start_session(&self) -> Result<SessionWalker, SessionError> {
        SessionWalker::new(self.catalog.to_vec(), self.clock.now())
    }

    /// Record an answer for a question of the active section.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the walker; the walker is unchanged on error.
    pub fn answer(
        &self,
        walker: &mut SessionWalker,
        question_id: &str,
        answer: Answer,
    ) -> Result<(), SessionError> {
        walker.record_answer(question_id, answer).map(|_| ())
    }

    /// Advance the walker and score the assessment when it completes.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the walker.
    pub fn advance(&self, walker: &mut SessionWalker) -> Result<AdvanceResult, SessionError> {
        let advance = walker.advance()?;
        let outcome = match &advance {
            Advance::SessionComplete { responses } => {
                Some(self.score(responses.clone(), walker.started_at()))
            }
            _ => None,
        };

        Ok(AdvanceResult { advance, outcome })
    }

    /// Score a completed response map.
    #[must_use]
    pub fn score(&self, responses: AssessmentResponses, started_at: DateTime<Utc>) -> AssessmentOutcome {
        let report = match self.seed {
            Some(seed) => self
                .aggregator
                .compute_profile(&responses, RandomFallback::seeded(seed)),
            None => self
                .aggregator
                .compute_profile(&responses, RandomFallback::from_entropy()),
        };
        let fallback_areas: Vec<&str> = report.fallback_areas().map(|a| a.key()).collect();
        info!(
            overall = report.overall(),
            label = report.label().name(),
            ?fallback_areas,
            "assessment scored"
        );

        AssessmentOutcome {
            responses,
            report,
            started_at,
            completed_at: self.clock.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdd_core::model::Question;
    use gdd_core::scoring::ProfileLabel;
    use gdd_core::time::{fixed_clock, fixed_now};

    fn service() -> AssessmentService {
        let catalog = vec![
            Section::new(
                "comm_intel_gdd",
                "Communication",
                vec![Question::rating("clarity_1", "I explain clearly.").unwrap()],
            )
            .unwrap(),
            Section::new(
                "collab_intel_gdd",
                "Collaboration",
                vec![Question::rating("trust_1", "I am dependable.").unwrap()],
            )
            .unwrap(),
        ];
        AssessmentService::new(fixed_clock(), catalog).with_seed(Some(3))
    }

    #[test]
    fn outcome_only_on_final_advance() {
        let service = service();
        let mut walker = service.start_session().unwrap();

        service.answer(&mut walker, "clarity_1", Answer::Rating(4)).unwrap();
        let first = service.advance(&mut walker).unwrap();
        assert!(!first.is_complete());

        service.answer(&mut walker, "trust_1", Answer::Rating(4)).unwrap();
        let last = service.advance(&mut walker).unwrap();
        let outcome = last.outcome.expect("outcome on completion");
        assert_eq!(outcome.report.sub_scores().communication, 80);
        assert_eq!(outcome.report.sub_scores().collaboration, 80);
        assert_eq!(outcome.report.label(), ProfileLabel::EmpathicLeader);
        assert_eq!(outcome.responses.len(), 2);
        assert_eq!(outcome.started_at, fixed_now());
        assert_eq!(outcome.minutes_taken(), 0);
    }

    #[test]
    fn each_start_is_a_fresh_session() {
        let service = service();
        let mut walker = service.start_session().unwrap();
        service.answer(&mut walker, "clarity_1", Answer::Rating(2)).unwrap();

        let fresh = service.start_session().unwrap();
        assert!(fresh.answer_for("clarity_1").is_none());
        assert!(fresh.completed_responses().is_empty());
    }

    #[test]
    fn advance_errors_pass_through() {
        let service = service();
        let mut walker = service.start_session().unwrap();
        assert!(matches!(
            service.advance(&mut walker),
            Err(SessionError::Unanswered(_))
        ));
    }
}
