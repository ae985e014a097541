#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;

pub use gdd_core::Clock;

pub use catalog::default_catalog;
pub use error::{ErrorKind, SessionError};
pub use sessions::{
    Advance, AdvanceResult, AssessmentOutcome, AssessmentService, SessionProgress, SessionWalker,
};
