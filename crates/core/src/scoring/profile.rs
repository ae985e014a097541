use serde::Serialize;
use std::fmt;

/// Score at or above which an area counts as a strength for labelling.
pub const LABEL_THRESHOLD: u8 = 75;

//
// ─── PROFILE LABEL ────────────────────────────────────────────────────────────
//

/// Categorical profile chosen from the communication and collaboration scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileLabel {
    EmpathicLeader,
    ClearCommunicator,
    TeamHarmonizer,
    DevelopingCollaborator,
}

impl ProfileLabel {
    /// First matching rule wins: both high, then communication, then collaboration.
    #[must_use]
    pub fn from_scores(communication: u8, collaboration: u8) -> Self {
        let communicates = communication >= LABEL_THRESHOLD;
        let collaborates = collaboration >= LABEL_THRESHOLD;
        match (communicates, collaborates) {
            (true, true) => ProfileLabel::EmpathicLeader,
            (true, false) => ProfileLabel::ClearCommunicator,
            (false, true) => ProfileLabel::TeamHarmonizer,
            (false, false) => ProfileLabel::DevelopingCollaborator,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProfileLabel::EmpathicLeader => "Empathic Leader",
            ProfileLabel::ClearCommunicator => "Clear Communicator",
            ProfileLabel::TeamHarmonizer => "Team Harmonizer",
            ProfileLabel::DevelopingCollaborator => "Developing Collaborator",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ProfileLabel::EmpathicLeader => {
                "You excel at both clear communication and collaborative teamwork, making you a natural leader in group settings."
            }
            ProfileLabel::ClearCommunicator => {
                "Your strength lies in expressing ideas clearly and listening actively to others."
            }
            ProfileLabel::TeamHarmonizer => {
                "You excel at building trust, adapting to team needs, and maintaining group cohesion."
            }
            ProfileLabel::DevelopingCollaborator => {
                "You have solid fundamentals with great potential for growth in both communication and collaboration."
            }
        }
    }
}

impl fmt::Display for ProfileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//
// ─── SCORE BAND ───────────────────────────────────────────────────────────────
//

/// Coarse qualitative reading of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Developing,
}

impl ScoreBand {
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            _ => ScoreBand::Developing,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Developing => "Developing",
        }
    }
}

//
// ─── DIMENSIONS ───────────────────────────────────────────────────────────────
//

/// The five COACH dimensions, each derived from a single sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Clarity,
    Openness,
    Alignment,
    ConflictNavigation,
    Harmony,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Clarity,
        Dimension::Openness,
        Dimension::Alignment,
        Dimension::ConflictNavigation,
        Dimension::Harmony,
    ];

    /// Derive this dimension's score.
    ///
    /// Openness is capped at 100 and Conflict Navigation never drops below 40.
    #[must_use]
    pub fn derive(self, communication: u8, collaboration: u8, contextual: u8) -> u8 {
        match self {
            Dimension::Clarity => communication,
            Dimension::Openness => communication.saturating_add(5).min(100),
            Dimension::Alignment => collaboration,
            Dimension::ConflictNavigation => collaboration.saturating_sub(10).max(40),
            Dimension::Harmony => contextual,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Clarity => "Clarity",
            Dimension::Openness => "Openness",
            Dimension::Alignment => "Alignment",
            Dimension::ConflictNavigation => "Conflict Navigation",
            Dimension::Harmony => "Harmony",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Dimension::Clarity => "How clearly you express ideas and check understanding",
            Dimension::Openness => "Your receptiveness to feedback and new perspectives",
            Dimension::Alignment => "How well you consider team emotions and goals",
            Dimension::ConflictNavigation => "Your ability to resolve conflicts constructively",
            Dimension::Harmony => "How you maintain team harmony and follow through",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_priority() {
        assert_eq!(ProfileLabel::from_scores(80, 80), ProfileLabel::EmpathicLeader);
        assert_eq!(ProfileLabel::from_scores(80, 50), ProfileLabel::ClearCommunicator);
        assert_eq!(ProfileLabel::from_scores(50, 80), ProfileLabel::TeamHarmonizer);
        assert_eq!(ProfileLabel::from_scores(74, 74), ProfileLabel::DevelopingCollaborator);
    }

    #[test]
    fn label_threshold_is_inclusive() {
        assert_eq!(ProfileLabel::from_scores(75, 75), ProfileLabel::EmpathicLeader);
        assert_eq!(ProfileLabel::EmpathicLeader.name(), "Empathic Leader");
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::Developing);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Developing);
    }

    #[test]
    fn dimension_clamps_hold_at_extremes() {
        assert_eq!(Dimension::Openness.derive(98, 0, 0), 100);
        assert_eq!(Dimension::Openness.derive(60, 0, 0), 65);
        assert_eq!(Dimension::ConflictNavigation.derive(0, 45, 0), 40);
        assert_eq!(Dimension::ConflictNavigation.derive(0, 5, 0), 40);
        assert_eq!(Dimension::ConflictNavigation.derive(0, 90, 0), 80);
    }

    #[test]
    fn dimensions_copy_their_source() {
        assert_eq!(Dimension::Clarity.derive(71, 12, 33), 71);
        assert_eq!(Dimension::Alignment.derive(71, 12, 33), 12);
        assert_eq!(Dimension::Harmony.derive(71, 12, 33), 33);
    }
}
