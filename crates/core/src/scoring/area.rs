use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::SectionId;

/// The four areas that receive a sub-score.
///
/// Declaration order is the tie-break order for rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoredArea {
    Communication,
    Collaboration,
    Contextual,
    Coach,
}

impl ScoredArea {
    pub const ALL: [ScoredArea; 4] = [
        ScoredArea::Communication,
        ScoredArea::Collaboration,
        ScoredArea::Contextual,
        ScoredArea::Coach,
    ];

    /// Stable machine-readable key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ScoredArea::Communication => "communication",
            ScoredArea::Collaboration => "collaboration",
            ScoredArea::Contextual => "contextual",
            ScoredArea::Coach => "coach",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ScoredArea::Communication => "Communication Intelligence",
            ScoredArea::Collaboration => "Collaboration Intelligence",
            ScoredArea::Contextual => "Contextual Intelligence",
            ScoredArea::Coach => "COACH Framework",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            ScoredArea::Communication => {
                "Your ability to express ideas clearly, listen actively, and adapt your tone appropriately."
            }
            ScoredArea::Collaboration => {
                "Your approach to teamwork, trust-building, and managing conflicts constructively."
            }
            ScoredArea::Contextual => {
                "How well you adapt your communication style to different situations and environments."
            }
            ScoredArea::Coach => {
                "Your comprehensive collaboration skills across clarity, openness, alignment, conflict resolution, and harmony."
            }
        }
    }
}

impl fmt::Display for ScoredArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Which section feeds which scored area.
///
/// Sections that are not listed here (an introduction, for instance) are collected by
/// the walker but never scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSections {
    communication: SectionId,
    collaboration: SectionId,
    contextual: SectionId,
    coach: SectionId,
}

impl AreaSections {
    #[must_use]
    pub fn new(
        communication: impl Into<SectionId>,
        collaboration: impl Into<SectionId>,
        contextual: impl Into<SectionId>,
        coach: impl Into<SectionId>,
    ) -> Self {
        Self {
            communication: communication.into(),
            collaboration: collaboration.into(),
            contextual: contextual.into(),
            coach: coach.into(),
        }
    }

    #[must_use]
    pub fn section_for(&self, area: ScoredArea) -> &SectionId {
        match area {
            ScoredArea::Communication => &self.communication,
            ScoredArea::Collaboration => &self.collaboration,
            ScoredArea::Contextual => &self.contextual,
            ScoredArea::Coach => &self.coach,
        }
    }

    #[must_use]
    pub fn area_for(&self, section_id: &str) -> Option<ScoredArea> {
        ScoredArea::ALL
            .into_iter()
            .find(|area| self.section_for(*area).as_str() == section_id)
    }
}

impl Default for AreaSections {
    fn default() -> Self {
        Self::new("comm_intel_gdd", "collab_intel_gdd", "context_gdd", "coach_gdd")
    }
}
