use dioxus::prelude::*;

use crate::components::inputs::{EmailValidationFeedback, InputType, ValidatedInput};
use crate::permit::form_validation::{validate_email, MIN_NAME_LENGTH};
use crate::permit::state::{WizardAction, WizardState};
use crate::utils::validation::{email_validation_class, required_field_class};

#[derive(Props, PartialEq, Clone)]
pub struct ApplicantStepProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

#[component]
pub fn ApplicantStep(props: ApplicantStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let applicant = state().draft.applicant;
    let disabled = state().is_busy();
    let email_validation = validate_email(&applicant.email);

    rsx! {
        div {
            class: "wizard-form step-applicant",

            h2 {
                class: "form-title",
                "Step 1: Applicant"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Full name *"
                }
                ValidatedInput {
                    value: applicant.name.clone(),
                    placeholder: "Jane Smith".to_string(),
                    input_type: InputType::Text,
                    input_class: required_field_class(&applicant.name, MIN_NAME_LENGTH).to_string(),
                    disabled: disabled,
                    on_change: move |value: String| dispatch.call(WizardAction::SetApplicantName(value))
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Email *"
                }
                ValidatedInput {
                    value: applicant.email.clone(),
                    placeholder: "jane@example.com".to_string(),
                    input_type: InputType::Email,
                    input_class: email_validation_class(&email_validation).to_string(),
                    disabled: disabled,
                    on_change: move |value: String| dispatch.call(WizardAction::SetApplicantEmail(value))
                }
                EmailValidationFeedback { validation: email_validation }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Phone"
                }
                ValidatedInput {
                    value: applicant.phone.clone(),
                    placeholder: "Optional".to_string(),
                    input_type: InputType::Tel,
                    input_class: "input-field".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| dispatch.call(WizardAction::SetApplicantPhone(value))
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Company"
                }
                ValidatedInput {
                    value: applicant.company.clone(),
                    placeholder: "Optional".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| dispatch.call(WizardAction::SetApplicantCompany(value))
                }
            }
        }
    }
}
