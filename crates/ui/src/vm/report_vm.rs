use gdd_core::scoring::{AreaScore, DimensionScore, RankedArea, ScoredArea};
use services::AssessmentOutcome;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreCardVm {
    pub key: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub score: u8,
    pub band: &'static str,
}

impl From<&AreaScore> for ScoreCardVm {
    fn from(area: &AreaScore) -> Self {
        Self {
            key: area.area.key(),
            title: area.area.title(),
            blurb: area.area.blurb(),
            score: area.score,
            band: area.band().label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionVm {
    pub label: &'static str,
    pub description: &'static str,
    pub score: u8,
    pub band: &'static str,
}

impl From<&DimensionScore> for DimensionVm {
    fn from(dimension: &DimensionScore) -> Self {
        Self {
            label: dimension.dimension.label(),
            description: dimension.dimension.description(),
            score: dimension.score,
            band: dimension.band().label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedAreaVm {
    pub title: &'static str,
    pub detail: String,
}

impl From<&RankedArea> for RankedAreaVm {
    fn from(ranked: &RankedArea) -> Self {
        Self {
            title: ranked.area.title(),
            detail: format!("Score: {} - {}", ranked.score, ranked.note),
        }
    }
}

/// Display-ready copy of an assessment outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub overall: u8,
    pub overall_band: &'static str,
    pub profile_name: &'static str,
    pub profile_description: &'static str,
    pub areas: Vec<ScoreCardVm>,
    pub dimensions: Vec<DimensionVm>,
    pub strengths: Vec<RankedAreaVm>,
    pub growth_areas: Vec<RankedAreaVm>,
    pub completed_at_str: String,
    pub duration_label: String,
    /// Set when some scores came from the random fallback.
    pub estimate_note: Option<String>,
}

impl From<&AssessmentOutcome> for ReportVm {
    fn from(outcome: &AssessmentOutcome) -> Self {
        let report = &outcome.report;
        let estimated: Vec<&str> = report.fallback_areas().map(ScoredArea::title).collect();
        let estimate_note = (!estimated.is_empty())
            .then(|| format!("Estimated from choice answers: {}", estimated.join(", ")));
        let minutes = outcome.minutes_taken();

        Self {
            overall: report.overall(),
            overall_band: report.overall_band().label(),
            profile_name: report.label().name(),
            profile_description: report.label().description(),
            areas: report.areas().iter().map(ScoreCardVm::from).collect(),
            dimensions: report.dimensions().iter().map(DimensionVm::from).collect(),
            strengths: report.strengths().iter().map(RankedAreaVm::from).collect(),
            growth_areas: report.growth_areas().iter().map(RankedAreaVm::from).collect(),
            completed_at_str: format_datetime(outcome.completed_at),
            duration_label: if minutes == 1 {
                "1 minute".to_string()
            } else {
                format!("{minutes} minutes")
            },
            estimate_note,
        }
    }
}

#[must_use]
pub fn map_report(outcome: &AssessmentOutcome) -> ReportVm {
    ReportVm::from(outcome)
}
