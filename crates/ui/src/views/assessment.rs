use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{
    AssessmentIntent, AssessmentStep, AssessmentVm, QuestionInputVm, ReportVm, map_report,
};

#[component]
pub fn AssessmentView(on_complete: EventHandler<ReportVm>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(move || AssessmentVm::start(ctx.assessment()));
    let mut error = use_signal(|| None::<ViewError>);

    let mut dispatch = move |intent: AssessmentIntent| {
        let step = match &mut *vm.write() {
            Ok(active) => active.apply(intent),
            Err(err) => Err(*err),
        };
        match step {
            Ok(AssessmentStep::Continue) => error.set(None),
            Ok(AssessmentStep::Completed(outcome)) => {
                error.set(None);
                on_complete.call(map_report(&outcome));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let screen = match &*vm.read() {
        Ok(active) => Ok(active.screen()),
        Err(err) => Err(*err),
    };

    let screen = match screen {
        Ok(screen) => screen,
        Err(err) => {
            return rsx! {
                div { class: "page",
                    p { class: "error", "{err.message()}" }
                }
            };
        }
    };

    rsx! {
        div { class: "page assessment",
            header { class: "progress",
                span { "{screen.section_label}" }
                span { "{screen.percent_label}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {screen.percent}%" }
                }
            }

            h2 { "{screen.section_title}" }
            p { class: "section-description", "{screen.section_description}" }

            if let Some(question) = screen.question.clone() {
                div { class: "question", key: "{question.id}",
                    span { class: "question-position", "{question.position_label}" }
                    if let Some(situation) = question.situation {
                        blockquote { class: "situation", "{situation}" }
                    }
                    h3 { "{question.prompt}" }

                    match question.input {
                        QuestionInputVm::Rating { min, max, selected } => rsx! {
                            div { class: "rating-scale",
                                for value in min..=max {
                                    button {
                                        key: "{value}",
                                        class: if selected == Some(value) { "rating-option selected" } else { "rating-option" },
                                        onclick: move |_| dispatch(AssessmentIntent::Rate(value)),
                                        "{value}"
                                    }
                                }
                            }
                            div { class: "rating-legend",
                                span { "Strongly Disagree" }
                                span { "Strongly Agree" }
                            }
                        },
                        QuestionInputVm::Choice { options, selected } => rsx! {
                            div { class: "choice-list",
                                for option in options {
                                    ChoiceButton {
                                        key: "{option}",
                                        selected: selected.as_deref() == Some(option.as_str()),
                                        label: option.clone(),
                                        on_choose: move |value: String| dispatch(AssessmentIntent::Choose(value)),
                                    }
                                }
                            }
                        },
                    }
                }
            } else {
                p { class: "empty-section", "This section has no questions." }
            }

            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }

            footer { class: "actions",
                button {
                    class: "btn primary",
                    disabled: !screen.can_advance,
                    onclick: move |_| dispatch(AssessmentIntent::Next),
                    "{screen.next_label}"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(selected: bool, label: String, on_choose: EventHandler<String>) -> Element {
    let value = label.clone();
    rsx! {
        button {
            class: if selected { "choice-option selected" } else { "choice-option" },
            onclick: move |_| on_choose.call(value.clone()),
            "{label}"
        }
    }
}
