use serde::Serialize;

use crate::scoring::area::ScoredArea;
use crate::scoring::profile::{Dimension, ProfileLabel, ScoreBand};

/// Advice attached to each of the two strongest areas.
pub const STRENGTH_NOTE: &str = "Continue developing this strength in leadership roles.";
/// Advice attached to each of the two weakest areas.
pub const GROWTH_NOTE: &str = "Focus on practice and skill development in this area.";

//
// ─── AREA SCORES ──────────────────────────────────────────────────────────────
//

/// Which rule produced an area's sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum ScoreBasis {
    /// Section missing or unanswered.
    Default,
    /// Mean of `count` rating answers.
    RatingMean { count: usize },
    /// Choice-only section scored by the fallback source. Not reproducible unless
    /// the source was seeded or fixed.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaScore {
    pub area: ScoredArea,
    pub score: u8,
    pub basis: ScoreBasis,
}

impl AreaScore {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}

/// One 0-100 score per scored area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub communication: u8,
    pub collaboration: u8,
    pub contextual: u8,
    pub coach: u8,
}

impl SubScores {
    #[must_use]
    pub fn get(&self, area: ScoredArea) -> u8 {
        match area {
            ScoredArea::Communication => self.communication,
            ScoredArea::Collaboration => self.collaboration,
            ScoredArea::Contextual => self.contextual,
            ScoredArea::Coach => self.coach,
        }
    }

    /// Scores in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoredArea, u8)> + '_ {
        ScoredArea::ALL.into_iter().map(move |area| (area, self.get(area)))
    }

    /// Equal-weighted mean of the four scores, rounded half up.
    #[must_use]
    pub fn overall(&self) -> u8 {
        let sum: u16 = self.iter().map(|(_, score)| u16::from(score)).sum();
        let mean = f64::from(sum) / 4.0;
        // Inputs are 0-100, so the mean always fits.
        mean.round() as u8
    }

    #[must_use]
    pub fn label(&self) -> ProfileLabel {
        ProfileLabel::from_scores(self.communication, self.collaboration)
    }

    #[must_use]
    pub fn dimension(&self, dimension: Dimension) -> u8 {
        dimension.derive(self.communication, self.collaboration, self.contextual)
    }

    /// Split the areas into the two highest and the two lowest.
    ///
    /// Areas are sorted by descending score. The first two are strengths; the remaining
    /// two, lowest first, are growth areas. Ties keep enumeration order in both lists and
    /// every area lands in exactly one list.
    #[must_use]
    pub fn rankings(&self) -> (Vec<RankedArea>, Vec<RankedArea>) {
        let mut ordered: Vec<(ScoredArea, u8)> = self.iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));

        let strengths = ordered[..2]
            .iter()
            .map(|&(area, score)| RankedArea::new(area, score, STRENGTH_NOTE))
            .collect();
        let mut lowest = ordered[2..].to_vec();
        lowest.sort_by_key(|&(_, score)| score);
        let growth_areas = lowest
            .iter()
            .map(|&(area, score)| RankedArea::new(area, score, GROWTH_NOTE))
            .collect();

        (strengths, growth_areas)
    }
}

//
// ─── REPORT PARTS ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: u8,
}

impl DimensionScore {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}

/// An area placed in the strengths or growth list, with its advice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedArea {
    pub area: ScoredArea,
    pub score: u8,
    pub note: &'static str,
}

impl RankedArea {
    fn new(area: ScoredArea, score: u8, note: &'static str) -> Self {
        Self { area, score, note }
    }
}

//
// ─── PROFILE REPORT ───────────────────────────────────────────────────────────
//

/// Everything shown on the results view. Built once by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReport {
    areas: Vec<AreaScore>,
    sub_scores: SubScores,
    overall: u8,
    label: ProfileLabel,
    dimensions: Vec<DimensionScore>,
    strengths: Vec<RankedArea>,
    growth_areas: Vec<RankedArea>,
}

impl ProfileReport {
    pub(crate) fn from_area_scores(areas: [AreaScore; 4]) -> Self {
        let score_of = |area: ScoredArea| {
            areas
                .iter()
                .find(|a| a.area == area)
                .map_or(0, |a| a.score)
        };
        let sub_scores = SubScores {
            communication: score_of(ScoredArea::Communication),
            collaboration: score_of(ScoredArea::Collaboration),
            contextual: score_of(ScoredArea::Contextual),
            coach: score_of(ScoredArea::Coach),
        };

        let dimensions = Dimension::ALL
            .into_iter()
            .map(|dimension| DimensionScore {
                dimension,
                score: sub_scores.dimension(dimension),
            })
            .collect();
        let (strengths, growth_areas) = sub_scores.rankings();

        Self {
            areas: areas.to_vec(),
            sub_scores,
            overall: sub_scores.overall(),
            label: sub_scores.label(),
            dimensions,
            strengths,
            growth_areas,
        }
    }

    #[must_use]
    pub fn areas(&self) -> &[AreaScore] {
        &self.areas
    }

    #[must_use]
    pub fn sub_scores(&self) -> SubScores {
        self.sub_scores
    }

    #[must_use]
    pub fn overall(&self) -> u8 {
        self.overall
    }

    #[must_use]
    pub fn overall_band(&self) -> ScoreBand {
        ScoreBand::for_score(self.overall)
    }

    #[must_use]
    pub fn label(&self) -> ProfileLabel {
        self.label
    }

    #[must_use]
    pub fn dimensions(&self) -> &[DimensionScore] {
        &self.dimensions
    }

    #[must_use]
    pub fn strengths(&self) -> &[RankedArea] {
        &self.strengths
    }

    #[must_use]
    pub fn growth_areas(&self) -> &[RankedArea] {
        &self.growth_areas
    }

    /// Areas whose score came from the fallback source.
    pub fn fallback_areas(&self) -> impl Iterator<Item = ScoredArea> + '_ {
        self.areas
            .iter()
            .filter(|a| a.basis == ScoreBasis::Fallback)
            .map(|a| a.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(communication: u8, collaboration: u8, contextual: u8, coach: u8) -> SubScores {
        SubScores {
            communication,
            collaboration,
            contextual,
            coach,
        }
    }

    fn areas(ranked: &[RankedArea]) -> Vec<ScoredArea> {
        ranked.iter().map(|r| r.area).collect()
    }

    #[test]
    fn overall_rounds_mean() {
        assert_eq!(scores(80, 60, 65, 90).overall(), 74);
        assert_eq!(scores(65, 65, 65, 65).overall(), 65);
        assert_eq!(scores(100, 100, 100, 100).overall(), 100);
        // 70.5 rounds up
        assert_eq!(scores(70, 71, 70, 71).overall(), 71);
    }

    #[test]
    fn rankings_split_high_and_low() {
        let (strengths, growth) = scores(80, 60, 65, 90).rankings();
        assert_eq!(areas(&strengths), [ScoredArea::Coach, ScoredArea::Communication]);
        assert_eq!(areas(&growth), [ScoredArea::Collaboration, ScoredArea::Contextual]);
        assert_eq!(strengths[0].note, STRENGTH_NOTE);
        assert_eq!(growth[0].note, GROWTH_NOTE);
    }

    #[test]
    fn rankings_never_overlap_on_ties() {
        let (strengths, growth) = scores(65, 65, 65, 65).rankings();
        assert_eq!(areas(&strengths), [ScoredArea::Communication, ScoredArea::Collaboration]);
        assert_eq!(areas(&growth), [ScoredArea::Contextual, ScoredArea::Coach]);

        let mut all = areas(&strengths);
        all.extend(areas(&growth));
        all.sort();
        assert_eq!(all, ScoredArea::ALL);
    }

    #[test]
    fn growth_ties_keep_enumeration_order() {
        let (strengths, growth) = scores(80, 60, 60, 90).rankings();
        assert_eq!(areas(&strengths), [ScoredArea::Coach, ScoredArea::Communication]);
        assert_eq!(areas(&growth), [ScoredArea::Collaboration, ScoredArea::Contextual]);

        let (_, growth) = scores(70, 50, 70, 50).rankings();
        assert_eq!(areas(&growth), [ScoredArea::Collaboration, ScoredArea::Coach]);
    }

    #[test]
    fn report_derives_every_part() {
        let report = ProfileReport::from_area_scores([
            AreaScore { area: ScoredArea::Communication, score: 98, basis: ScoreBasis::RatingMean { count: 3 } },
            AreaScore { area: ScoredArea::Collaboration, score: 45, basis: ScoreBasis::RatingMean { count: 2 } },
            AreaScore { area: ScoredArea::Contextual, score: 70, basis: ScoreBasis::Fallback },
            AreaScore { area: ScoredArea::Coach, score: 65, basis: ScoreBasis::Default },
        ]);

        assert_eq!(report.overall(), 70);
        assert_eq!(report.overall_band(), ScoreBand::Good);
        assert_eq!(report.label(), ProfileLabel::ClearCommunicator);
        let dims: Vec<u8> = report.dimensions().iter().map(|d| d.score).collect();
        assert_eq!(dims, [98, 100, 45, 40, 70]);
        assert_eq!(report.fallback_areas().collect::<Vec<_>>(), [ScoredArea::Contextual]);
        assert_eq!(report.strengths().len(), 2);
        assert_eq!(report.growth_areas().len(), 2);
    }
}
