use services::AssessmentService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionOverviewVm {
    pub position: usize,
    pub title: String,
    pub description: String,
}

/// Scored sections in walk order, numbered from 1. Unscored sections are skipped.
#[must_use]
pub fn map_section_overview(service: &AssessmentService) -> Vec<SectionOverviewVm> {
    let mapping = service.aggregator().sections();
    service
        .catalog()
        .iter()
        .filter(|section| mapping.area_for(section.id().as_str()).is_some())
        .enumerate()
        .map(|(idx, section)| SectionOverviewVm {
            position: idx + 1,
            title: section.title().to_string(),
            description: section.description().to_string(),
        })
        .collect()
}
