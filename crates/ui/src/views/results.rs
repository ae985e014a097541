use dioxus::prelude::*;

use crate::vm::{RankedAreaVm, ReportVm};

#[component]
pub fn ResultsView(report: ReportVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page results",
            section { class: "overall",
                h2 { "Your Group Decision Profile" }
                div { class: "overall-score", "{report.overall}" }
                span { class: "band", "{report.overall_band}" }
                h3 { "{report.profile_name}" }
                p { "{report.profile_description}" }
                if let Some(note) = report.estimate_note.clone() {
                    p { class: "estimate-note", "{note}" }
                }
            }

            section { class: "score-cards",
                for card in report.areas.iter() {
                    div { class: "score-card", key: "{card.key}",
                        h4 { "{card.title}" }
                        div { class: "score", "{card.score}" }
                        span { class: "band", "{card.band}" }
                        p { "{card.blurb}" }
                    }
                }
            }

            section { class: "dimensions",
                h3 { "Dimension Breakdown" }
                for dimension in report.dimensions.iter() {
                    div { class: "dimension", key: "{dimension.label}",
                        div { class: "dimension-header",
                            span { "{dimension.label}" }
                            span { "{dimension.score}" }
                        }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {dimension.score}%" }
                        }
                        p { "{dimension.description}" }
                    }
                }
            }

            section { class: "recommendations",
                RankedList { title: "Strengths", items: report.strengths.clone() }
                RankedList { title: "Growth Areas", items: report.growth_areas.clone() }
            }

            dl { class: "timing",
                dt { "Completed" }
                dd { "{report.completed_at_str}" }
                dt { "Time taken" }
                dd { "{report.duration_label}" }
            }

            button { class: "btn", onclick: move |_| on_restart.call(()), "Retake Assessment" }
        }
    }
}

#[component]
fn RankedList(title: &'static str, items: Vec<RankedAreaVm>) -> Element {
    rsx! {
        div { class: "ranked-list",
            h4 { "{title}" }
            ul {
                for item in items {
                    li { key: "{item.title}",
                        strong { "{item.title}" }
                        p { "{item.detail}" }
                    }
                }
            }
        }
    }
}
