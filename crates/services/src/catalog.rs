//! The Group Decision Dynamics question catalog.
//!
//! Content lives here, outside the core, and is handed to the walker at session start.
//! Section ids line up with `gdd_core::scoring::AreaSections::default()`.

use gdd_core::model::{Question, Section};

pub const INTRO_SECTION: &str = "intro_gdd";
pub const COMMUNICATION_SECTION: &str = "comm_intel_gdd";
pub const COLLABORATION_SECTION: &str = "collab_intel_gdd";
pub const CONTEXT_SECTION: &str = "context_gdd";
pub const COACH_SECTION: &str = "coach_gdd";

/// Build the five-section catalog in walk order.
///
/// # Errors
///
/// Returns `gdd_core::Error` if a definition fails validation.
pub fn default_catalog() -> Result<Vec<Section>, gdd_core::Error> {
    Ok(vec![
        introduction()?,
        communication()?,
        collaboration()?,
        contextual()?,
        coach()?,
    ])
}

fn introduction() -> Result<Section, gdd_core::Error> {
    let questions = vec![Question::single_choice(
        "intro_1",
        "What best describes your typical role in group decisions?",
        [
            "I usually lead the discussion and guide the group",
            "I contribute ideas and support others' suggestions",
            "I listen carefully and provide thoughtful input",
            "I help synthesize different viewpoints into solutions",
        ],
    )?];
    Ok(Section::new(INTRO_SECTION, "Introduction", questions)?
        .with_description("Understanding Group Decision Dynamics"))
}

fn communication() -> Result<Section, gdd_core::Error> {
    let questions = vec![
        Question::rating(
            "clarity_1",
            "I explain my ideas clearly and check that others understand.",
        )?,
        Question::scenario(
            "listening_1",
            "In a heated discussion, what do you typically do?",
            "Your team is having an intense debate about project direction, and emotions are running high.",
            [
                "Actively paraphrase others' points to show understanding",
                "Wait for my turn to speak and then present my perspective",
                "Try to calm everyone down before continuing",
                "Ask clarifying questions to better understand the concerns",
            ],
        )?,
        Question::single_choice(
            "tone_1",
            "When you need to disagree politely in a meeting, what tone do you adopt?",
            [
                "Direct but respectful: 'I see it differently because...'",
                "Collaborative: 'What if we considered this angle...'",
                "Questioning: 'Help me understand why we think...'",
                "Bridge-building: 'I appreciate that view, and I'd also like to add...'",
            ],
        )?,
        Question::rating(
            "feedback_1",
            "When receiving feedback, I listen without becoming defensive.",
        )?,
    ];
    Ok(Section::new(COMMUNICATION_SECTION, "Communication Intelligence", questions)?
        .with_description("How effectively do you express ideas and listen?"))
}

fn collaboration() -> Result<Section, gdd_core::Error> {
    let questions = vec![
        Question::scenario(
            "adaptability_1",
            "Your group decides on a plan you disagree with. What do you do?",
            "After extensive discussion, your team chooses an approach you believe is suboptimal.",
            [
                "Adapt and fully support the team's decision",
                "Express my concerns once more, then support the decision",
                "Support it publicly but continue advocating for changes privately",
                "Ask to revisit the decision with additional information",
            ],
        )?,
        Question::rating("trust_1", "I am dependable and open with my team members.")?,
        Question::scenario(
            "conflict_1",
            "Two team members clash during decision-making. How do you handle it?",
            "Two colleagues are having a strong disagreement that's affecting the whole team's progress.",
            [
                "Step in to mediate and find common ground",
                "Suggest taking a break to cool down",
                "Redirect focus to shared goals and objectives",
                "Address each person's concerns individually",
            ],
        )?,
        Question::rating("ownership_1", "I support my teammates and share credit fairly.")?,
    ];
    Ok(Section::new(COLLABORATION_SECTION, "Collaboration Intelligence", questions)?
        .with_description("Your approach to teamwork and shared goals"))
}

fn contextual() -> Result<Section, gdd_core::Error> {
    let questions = vec![
        Question::rating(
            "one_on_one_1",
            "During one-on-ones, I confirm understanding and show empathy.",
        )?,
        Question::rating(
            "group_meeting_1",
            "I contribute to building group cohesion and encourage quieter voices.",
        )?,
        Question::single_choice(
            "conflict_zone_1",
            "When discussions get tense, how do you keep your tone constructive?",
            [
                "Stay calm and speak slowly",
                "Remain assertive but respectful",
                "Step back and observe before responding",
                "Focus on facts rather than emotions",
            ],
        )?,
        Question::rating(
            "digital_1",
            "I respond thoughtfully and promptly to digital communications.",
        )?,
    ];
    Ok(Section::new(CONTEXT_SECTION, "Contextual Intelligence", questions)?
        .with_description("Adapting your style to different situations"))
}

fn coach() -> Result<Section, gdd_core::Error> {
    let questions = vec![
        Question::rating(
            "clarity_coach",
            "I clearly express ideas and check understanding with my team.",
        )?,
        Question::rating(
            "openness_coach",
            "I accept constructive feedback gracefully and learn from it.",
        )?,
        Question::rating(
            "alignment_coach",
            "I consider team emotions and goals when communicating.",
        )?,
        Question::rating("conflict_coach", "I resolve conflicts calmly without escalation.")?,
        Question::rating(
            "harmony_coach",
            "I help maintain team harmony and complete agreed tasks.",
        )?,
    ];
    Ok(Section::new(COACH_SECTION, "COACH Framework", questions)?
        .with_description("Comprehensive collaboration assessment"))
}
