use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use gdd_core::time::fixed_clock;
use services::{AssessmentService, default_catalog};

use crate::context::{UiApp, build_app_context};
use crate::views::{AssessmentView, LandingView, ResultsView};
use crate::vm::ReportVm;

struct TestApp {
    assessment: Arc<AssessmentService>,
}

impl UiApp for TestApp {
    fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Landing,
    Assessment,
    Results(ReportVm),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Landing => rsx! { LandingView { on_start: |_| {} } },
        ViewKind::Assessment => rsx! { AssessmentView { on_complete: |_| {} } },
        ViewKind::Results(report) => rsx! { ResultsView { report, on_restart: |_| {} } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn test_service(seed: u64) -> Arc<AssessmentService> {
    let catalog = default_catalog().expect("default catalog");
    Arc::new(AssessmentService::new(fixed_clock(), catalog).with_seed(Some(seed)))
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let app = Arc::new(TestApp {
        assessment: test_service(7),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
