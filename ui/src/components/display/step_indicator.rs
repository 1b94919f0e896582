use dioxus::prelude::*;

use crate::permit::state::WizardStep;

#[derive(Props, PartialEq, Clone)]
pub struct StepIndicatorProps {
    pub current: WizardStep,
}

pub fn step_class(step: WizardStep, current: WizardStep) -> &'static str {
    if step.number() < current.number() {
        "step complete"
    } else if step == current {
        "step current"
    } else {
        "step upcoming"
    }
}

#[component]
pub fn StepIndicator(props: StepIndicatorProps) -> Element {
    let current = props.current;

    rsx! {
        ol {
            class: "step-indicator",
            for step in WizardStep::ALL {
                li {
                    class: "{step_class(step, current)}",
                    span {
                        class: "step-number",
                        if step.number() < current.number() { "✓" } else { "{step.number()}" }
                    }
                    span {
                        class: "step-title",
                        "{step.title()}"
                    }
                }
            }
        }
    }
}
