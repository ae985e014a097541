use dioxus::prelude::*;

use crate::views::{AssessmentView, LandingView, ResultsView};
use crate::vm::ReportVm;

/// The three screens of a walk. Each restart begins a fresh session.
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Landing,
    Assessment,
    Results(ReportVm),
}

#[component]
pub fn App() -> Element {
    let mut phase = use_signal(|| Phase::Landing);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Group Decision Dynamics" }

        div { class: "app-root",
            match phase() {
                Phase::Landing => rsx! {
                    LandingView { on_start: move |_| phase.set(Phase::Assessment) }
                },
                Phase::Assessment => rsx! {
                    AssessmentView { on_complete: move |report: ReportVm| phase.set(Phase::Results(report)) }
                },
                Phase::Results(report) => rsx! {
                    ResultsView { report, on_restart: move |_| phase.set(Phase::Landing) }
                },
            }
        }
    }
}
