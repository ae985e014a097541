use tracing::{debug, trace};

use crate::model::{AssessmentResponses, RATING_MAX, SectionResponses};
use crate::scoring::area::{AreaSections, ScoredArea};
use crate::scoring::fallback::{FallbackScorer, RandomFallback};
use crate::scoring::report::{AreaScore, ProfileReport, ScoreBasis};

/// Sub-score for a section that is missing or has no answers.
pub const DEFAULT_SUB_SCORE: u8 = 65;

/// Turns a completed response map into a [`ProfileReport`].
///
/// Holds only configuration, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    sections: AreaSections,
}

impl ScoreAggregator {
    #[must_use]
    pub fn new(sections: AreaSections) -> Self {
        Self { sections }
    }

    #[must_use]
    pub fn sections(&self) -> &AreaSections {
        &self.sections
    }

    /// Build the report. Never fails: missing or empty sections score the default.
    ///
    /// `fallback` is consulted only for sections answered exclusively with choices.
    pub fn compute_profile<F>(&self, responses: &AssessmentResponses, mut fallback: F) -> ProfileReport
    where
        F: FallbackScorer,
    {
        let areas = ScoredArea::ALL.map(|area| {
            let section = responses.get(self.sections.section_for(area).as_str());
            score_area(area, section, &mut fallback)
        });

        let report = ProfileReport::from_area_scores(areas);
        debug!(
            overall = report.overall(),
            label = report.label().name(),
            "computed profile"
        );
        report
    }
}

/// Score one area from its section's responses.
pub fn score_area<F>(area: ScoredArea, section: Option<&SectionResponses>, fallback: &mut F) -> AreaScore
where
    F: FallbackScorer + ?Sized,
{
    let (score, basis) = match section {
        None => (DEFAULT_SUB_SCORE, ScoreBasis::Default),
        Some(responses) if responses.is_empty() => (DEFAULT_SUB_SCORE, ScoreBasis::Default),
        Some(responses) => match rating_score(responses) {
            Some((score, count)) => (score, ScoreBasis::RatingMean { count }),
            None => (fallback.fallback_score(area, responses), ScoreBasis::Fallback),
        },
    };

    trace!(area = area.key(), score, ?basis, "scored area");
    AreaScore { area, score, basis }
}

/// `round(mean / 5 * 100)` over rating answers; `None` when there are none.
fn rating_score(responses: &SectionResponses) -> Option<(u8, usize)> {
    let (sum, count) = responses
        .ratings()
        .fold((0_u32, 0_usize), |(sum, count), value| (sum + u32::from(value), count + 1));
    if count == 0 {
        return None;
    }

    let mean = f64::from(sum) / count as f64;
    let scaled = (mean / f64::from(RATING_MAX) * 100.0).round();
    Some((scaled.clamp(0.0, 100.0) as u8, count))
}

/// Convenience entry point using the default section mapping and an entropy-seeded
/// fallback. Reports containing choice-only sections differ between calls.
#[must_use]
pub fn compute_profile(responses: &AssessmentResponses) -> ProfileReport {
    ScoreAggregator::default().compute_profile(responses, RandomFallback::from_entropy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;
    use crate::scoring::fallback::{FALLBACK_CEILING, FALLBACK_FLOOR, FixedFallback};
    use crate::scoring::profile::ProfileLabel;

    fn ratings(values: &[u8]) -> SectionResponses {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| (format!("q{idx}"), Answer::Rating(*value)))
            .collect()
    }

    fn choices(values: &[&str]) -> SectionResponses {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| (format!("q{idx}"), Answer::choice(*value)))
            .collect()
    }

    fn map(sections: Vec<(&str, SectionResponses)>) -> AssessmentResponses {
        sections
            .into_iter()
            .try_fold(AssessmentResponses::new(), |acc, (id, responses)| {
                acc.with_section(id, responses)
            })
            .unwrap()
    }

    #[test]
    fn rating_mean_scales_to_hundred() {
        let score = score_area(ScoredArea::Communication, Some(&ratings(&[3, 4, 5])), &mut FixedFallback(0));
        assert_eq!(score.score, 80);
        assert_eq!(score.basis, ScoreBasis::RatingMean { count: 3 });
    }

    #[test]
    fn rating_mean_rounds() {
        // mean 1.666.. -> 33.33
        assert_eq!(rating_score(&ratings(&[1, 2, 2])), Some((33, 3)));
        // mean 3.5 -> 70
        assert_eq!(rating_score(&ratings(&[3, 4])), Some((70, 2)));
        assert_eq!(rating_score(&ratings(&[5])), Some((100, 1)));
        assert_eq!(rating_score(&ratings(&[1])), Some((20, 1)));
    }

    #[test]
    fn choices_are_ignored_when_ratings_exist() {
        let mut responses = ratings(&[4, 4]);
        responses.upsert("listening_1".into(), Answer::choice("Wait for my turn"));
        let score = score_area(ScoredArea::Communication, Some(&responses), &mut FixedFallback(0));
        assert_eq!(score.score, 80);
        assert_eq!(score.basis, ScoreBasis::RatingMean { count: 2 });
    }

    #[test]
    fn missing_and_empty_sections_default() {
        let report = ScoreAggregator::default().compute_profile(
            &map(vec![("comm_intel_gdd", ratings(&[5, 5])), ("context_gdd", SectionResponses::new())]),
            FixedFallback(0),
        );
        let sub = report.sub_scores();
        assert_eq!(sub.communication, 100);
        assert_eq!(sub.collaboration, DEFAULT_SUB_SCORE);
        assert_eq!(sub.contextual, DEFAULT_SUB_SCORE);
        assert_eq!(sub.coach, DEFAULT_SUB_SCORE);
        assert_eq!(report.fallback_areas().count(), 0);
    }

    #[test]
    fn empty_map_scores_all_defaults() {
        let report = compute_profile(&AssessmentResponses::new());
        assert_eq!(report.overall(), 65);
        assert_eq!(report.label(), ProfileLabel::DevelopingCollaborator);
    }

    #[test]
    fn choice_only_section_uses_fallback_range() {
        let responses = map(vec![("collab_intel_gdd", choices(&["Mediate", "Take a break"]))]);
        for _ in 0..100 {
            let report = compute_profile(&responses);
            let score = report.sub_scores().collaboration;
            assert!((FALLBACK_FLOOR..FALLBACK_CEILING).contains(&score), "{score}");
            assert_eq!(report.fallback_areas().collect::<Vec<_>>(), [ScoredArea::Collaboration]);
        }
    }

    #[test]
    fn fixed_fallback_pins_choice_only_score() {
        let responses = map(vec![("collab_intel_gdd", choices(&["Mediate"]))]);
        let aggregator = ScoreAggregator::default();
        let a = aggregator.compute_profile(&responses, FixedFallback(77));
        let b = aggregator.compute_profile(&responses, FixedFallback(77));
        assert_eq!(a, b);
        assert_eq!(a.sub_scores().collaboration, 77);
        assert_eq!(a.label(), ProfileLabel::TeamHarmonizer);
    }

    #[test]
    fn seeded_fallback_is_reproducible() {
        let responses = map(vec![
            ("comm_intel_gdd", choices(&["Direct"])),
            ("coach_gdd", choices(&["Calm"])),
        ]);
        let aggregator = ScoreAggregator::default();
        let a = aggregator.compute_profile(&responses, RandomFallback::seeded(42));
        let b = aggregator.compute_profile(&responses, RandomFallback::seeded(42));
        assert_eq!(a, b);
    }

    #[test]
    fn unmapped_sections_are_not_scored() {
        let responses = map(vec![("intro_gdd", choices(&["I usually lead"]))]);
        let report = ScoreAggregator::default().compute_profile(&responses, FixedFallback(99));
        assert_eq!(report.overall(), DEFAULT_SUB_SCORE);
        assert_eq!(report.fallback_areas().count(), 0);
    }

    #[test]
    fn custom_section_mapping() {
        let aggregator = ScoreAggregator::new(AreaSections::new("a", "b", "c", "d"));
        let responses = map(vec![("a", ratings(&[4])), ("b", ratings(&[4])), ("comm_intel_gdd", ratings(&[1]))]);
        let report = aggregator.compute_profile(&responses, FixedFallback(0));
        assert_eq!(report.sub_scores().communication, 80);
        assert_eq!(report.label(), ProfileLabel::EmpathicLeader);
    }

    #[test]
    fn report_serializes_for_presentation() {
        let report = ScoreAggregator::default().compute_profile(
            &map(vec![("comm_intel_gdd", ratings(&[3, 4, 5]))]),
            FixedFallback(0),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["overall"], 69);
        assert_eq!(json["label"], "clear_communicator");
        assert_eq!(json["sub_scores"]["communication"], 80);
        assert_eq!(json["areas"][0]["basis"]["basis"], "rating_mean");
    }
}
