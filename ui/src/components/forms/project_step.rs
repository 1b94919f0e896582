use dioxus::prelude::*;

use crate::components::inputs::{InputType, OptionSelect, TextAreaInput, ValidatedInput};
use crate::permit::form_validation::MIN_ADDRESS_LENGTH;
use crate::permit::state::{WizardAction, WizardState};
use crate::permit::types::{PermitType, SelectOption, WorkType};
use crate::utils::validation::required_field_class;

#[derive(Props, PartialEq, Clone)]
pub struct ProjectStepProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

#[component]
pub fn ProjectStep(props: ProjectStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let draft = state().draft;
    let disabled = state().is_busy();

    rsx! {
        div {
            class: "wizard-form step-project",

            h2 {
                class: "form-title",
                "Step 2: Project"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Permit type *"
                }
                OptionSelect {
                    options: PermitType::options(),
                    selected: draft.permit_type.map(|t| t.as_str()).unwrap_or_default().to_string(),
                    placeholder: "Select a permit type".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetPermitType(PermitType::parse(&value)))
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Work type *"
                }
                OptionSelect {
                    options: WorkType::options(),
                    selected: draft.work_type.map(|t| t.as_str()).unwrap_or_default().to_string(),
                    placeholder: "Select a work type".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetWorkType(WorkType::parse(&value)))
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Project address *"
                }
                ValidatedInput {
                    value: draft.address.clone(),
                    placeholder: "123 Main Street".to_string(),
                    input_type: InputType::Text,
                    input_class: required_field_class(&draft.address, MIN_ADDRESS_LENGTH).to_string(),
                    disabled: disabled,
                    on_change: move |value: String| dispatch.call(WizardAction::SetAddress(value))
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Description of work"
                }
                TextAreaInput {
                    value: draft.description.clone(),
                    placeholder: "Describe the scope of work".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| dispatch.call(WizardAction::SetDescription(value))
                }
            }
        }
    }
}
