mod assessment_vm;
mod landing_vm;
mod report_vm;
mod time_fmt;

pub use assessment_vm::{
    AssessmentIntent, AssessmentScreenVm, AssessmentStep, AssessmentVm, QuestionInputVm, QuestionVm,
};
pub use landing_vm::{SectionOverviewVm, map_section_overview};
pub use report_vm::{DimensionVm, RankedAreaVm, ReportVm, ScoreCardVm, map_report};
