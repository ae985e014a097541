//! Profile scoring: response map in, immutable [`ProfileReport`] out.

mod aggregator;
mod area;
mod fallback;
mod profile;
mod report;

pub use aggregator::{DEFAULT_SUB_SCORE, ScoreAggregator, compute_profile, score_area};
pub use area::{AreaSections, ScoredArea};
pub use fallback::{FALLBACK_CEILING, FALLBACK_FLOOR, FallbackScorer, FixedFallback, RandomFallback};
pub use profile::{Dimension, LABEL_THRESHOLD, ProfileLabel, ScoreBand};
pub use report::{
    AreaScore, DimensionScore, GROWTH_NOTE, ProfileReport, RankedArea, STRENGTH_NOTE, ScoreBasis,
    SubScores,
};
