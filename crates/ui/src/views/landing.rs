use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_section_overview;

#[component]
pub fn LandingView(on_start: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let overview = map_section_overview(&ctx.assessment());

    rsx! {
        div { class: "page landing",
            h1 { "Group Decision Dynamics" }
            p { class: "lede",
                "Discover how you communicate, collaborate and adapt when groups make decisions together."
            }

            ol { class: "section-overview",
                for section in overview {
                    li { key: "{section.position}",
                        span { class: "section-index", "{section.position}" }
                        div {
                            h3 { "{section.title}" }
                            p { "{section.description}" }
                        }
                    }
                }
            }

            button { class: "btn primary", onclick: move |_| on_start.call(()), "Start Assessment" }
        }
    }
}
