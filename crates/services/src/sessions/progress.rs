/// Aggregated view of walk progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based index of the active section.
    pub section_index: usize,
    pub section_count: usize,
    /// Zero-based index of the active question within its section.
    pub question_index: usize,
    pub question_count: usize,
    /// Answers recorded so far in the active section.
    pub answered_in_section: usize,
    /// Share of sections reached, counting the active one, as 0-100.
    pub percent: u8,
    pub is_complete: bool,
}

impl SessionProgress {
    pub(crate) fn percent_for(section_index: usize, section_count: usize) -> u8 {
        if section_count == 0 {
            return 100;
        }
        let reached = (section_index + 1).min(section_count);
        let percent = (reached as f64 / section_count as f64 * 100.0).round();
        percent as u8
    }
}
