mod answer;
mod ids;
mod question;
mod response;
mod section;

pub use answer::{Answer, AnswerError, AnswerKind, RATING_MAX, RATING_MIN};
pub use ids::{QuestionId, SectionId};
pub use question::{Question, QuestionError, QuestionKind};
pub use response::{AssessmentResponses, ResponseError, SectionResponses};
pub use section::{Section, SectionError};
