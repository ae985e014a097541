use gdd_core::model::{Answer, AssessmentResponses, SectionResponses};
use gdd_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness, test_service};
use crate::vm::map_report;

fn sample_report() -> crate::vm::ReportVm {
    let ratings = |value: u8| -> SectionResponses {
        [("q1", Answer::Rating(value)), ("q2", Answer::Rating(value))]
            .into_iter()
            .collect()
    };
    let responses = AssessmentResponses::new()
        .with_section("comm_intel_gdd", ratings(5))
        .and_then(|r| r.with_section("collab_intel_gdd", ratings(4)))
        .and_then(|r| r.with_section("context_gdd", ratings(3)))
        .expect("responses");
    let outcome = test_service(1).score(responses, fixed_now());
    map_report(&outcome)
}

#[test]
fn landing_view_smoke_lists_scored_sections() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Group Decision Dynamics"), "missing heading in {html}");
    assert!(html.contains("COACH Framework"), "missing section in {html}");
    assert!(!html.contains("Introduction"), "intro should be hidden in {html}");
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
}

#[test]
fn assessment_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Section 1 of 5"), "missing section label in {html}");
    assert!(html.contains("20% Complete"), "missing progress in {html}");
    assert!(html.contains("Introduction"), "missing section title in {html}");
    assert!(html.contains("disabled"), "continue should start disabled in {html}");
}

#[test]
fn results_view_smoke_renders_profile() {
    let report = sample_report();
    let mut harness = setup_view_harness(ViewKind::Results(report));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Empathic Leader"), "missing label in {html}");
    assert!(html.contains("Dimension Breakdown"), "missing dimensions in {html}");
    assert!(html.contains("Conflict Navigation"), "missing dimension row in {html}");
    assert!(html.contains("Growth Areas"), "missing recommendations in {html}");
    assert!(html.contains("Retake Assessment"), "missing restart in {html}");
}
