mod progress;
mod walker;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use walker::{Advance, SessionWalker};
pub use workflow::{AdvanceResult, AssessmentOutcome, AssessmentService};
