//! Score source for sections answered only with choices.
//!
//! Choice answers carry no intensity, so such sections get a moderate score drawn from
//! `[FALLBACK_FLOOR, FALLBACK_CEILING)`. The draw is isolated here so callers can pin it
//! with a seed or replace it with a fixed value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::SectionResponses;
use crate::scoring::area::ScoredArea;

/// Inclusive lower bound of the fallback range.
pub const FALLBACK_FLOOR: u8 = 65;
/// Exclusive upper bound of the fallback range.
pub const FALLBACK_CEILING: u8 = 85;

/// Produces a sub-score for a non-empty section that holds no rating answers.
pub trait FallbackScorer {
    fn fallback_score(&mut self, area: ScoredArea, responses: &SectionResponses) -> u8;
}

impl<F: FallbackScorer + ?Sized> FallbackScorer for &mut F {
    fn fallback_score(&mut self, area: ScoredArea, responses: &SectionResponses) -> u8 {
        (**self).fallback_score(area, responses)
    }
}

/// Uniform draw over the fallback range from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomFallback<R> {
    rng: R,
}

impl<R: Rng> RandomFallback<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomFallback<StdRng> {
    /// Seeded from the operating system; results are not reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FallbackScorer for RandomFallback<R> {
    fn fallback_score(&mut self, _area: ScoredArea, _responses: &SectionResponses) -> u8 {
        self.rng.random_range(FALLBACK_FLOOR..FALLBACK_CEILING)
    }
}

/// Always returns the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFallback(pub u8);

impl FallbackScorer for FixedFallback {
    fn fallback_score(&mut self, _area: ScoredArea, _responses: &SectionResponses) -> u8 {
        self.0.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_draws_stay_in_range() {
        let mut fallback = RandomFallback::from_entropy();
        let responses = SectionResponses::new();
        for _ in 0..500 {
            let score = fallback.fallback_score(ScoredArea::Coach, &responses);
            assert!((FALLBACK_FLOOR..FALLBACK_CEILING).contains(&score), "{score}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let responses = SectionResponses::new();
        let mut a = RandomFallback::seeded(7);
        let mut b = RandomFallback::seeded(7);
        for _ in 0..20 {
            assert_eq!(
                a.fallback_score(ScoredArea::Contextual, &responses),
                b.fallback_score(ScoredArea::Contextual, &responses)
            );
        }
    }

    #[test]
    fn fixed_fallback_is_capped() {
        let responses = SectionResponses::new();
        assert_eq!(FixedFallback(72).fallback_score(ScoredArea::Coach, &responses), 72);
        assert_eq!(FixedFallback(250).fallback_score(ScoredArea::Coach, &responses), 100);
    }
}
