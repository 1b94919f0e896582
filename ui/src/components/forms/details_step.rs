use dioxus::prelude::*;

use crate::components::inputs::{FieldFeedback, InputType, OptionSelect, ValidatedInput};
use crate::permit::form_validation::parse_optional_number;
use crate::permit::state::{WizardAction, WizardState};
use crate::permit::types::{ConstructionType, OccupancyGroup, SelectOption};
use crate::utils::formatting::{format_area, format_currency};

#[derive(Props, PartialEq, Clone)]
pub struct DetailsStepProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

fn number_text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn DetailsStep(props: DetailsStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let draft = state().draft;
    let disabled = state().is_busy();

    // Parse errors stay local; the draft only ever holds valid numbers
    let mut value_error = use_signal(|| None::<String>);
    let mut area_error = use_signal(|| None::<String>);
    let mut storeys_error = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "wizard-form step-details",

            h2 {
                class: "form-title",
                "Step 3: Building Details"
            }

            p {
                class: "form-hint",
                "All fields on this step are optional."
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Occupancy group"
                }
                OptionSelect {
                    options: OccupancyGroup::options(),
                    selected: draft.occupancy_group.map(|g| g.as_str()).unwrap_or_default().to_string(),
                    placeholder: "Not specified".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetOccupancyGroup(OccupancyGroup::parse(&value)))
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Construction type"
                }
                OptionSelect {
                    options: ConstructionType::options(),
                    selected: draft.construction_type.map(|c| c.as_str()).unwrap_or_default().to_string(),
                    placeholder: "Not specified".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| {
                        dispatch.call(WizardAction::SetConstructionType(ConstructionType::parse(&value)))
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Estimated construction value (USD)"
                }
                ValidatedInput {
                    value: number_text(draft.estimated_value),
                    placeholder: "250000".to_string(),
                    input_type: InputType::Number,
                    input_class: "input-field".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| match parse_optional_number::<f64>(&value) {
                        Ok(parsed) => {
                            value_error.set(None);
                            dispatch.call(WizardAction::SetEstimatedValue(parsed));
                        }
                        Err(message) => value_error.set(Some(message)),
                    }
                }
                if let Some(value) = draft.estimated_value {
                    div {
                        class: "input-preview",
                        "{format_currency(value)}"
                    }
                }
                FieldFeedback { message: value_error() }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Building area (sq ft)"
                }
                ValidatedInput {
                    value: number_text(draft.building_area),
                    placeholder: "1200".to_string(),
                    input_type: InputType::Number,
                    input_class: "input-field".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| match parse_optional_number::<f64>(&value) {
                        Ok(parsed) => {
                            area_error.set(None);
                            dispatch.call(WizardAction::SetBuildingArea(parsed));
                        }
                        Err(message) => area_error.set(Some(message)),
                    }
                }
                if let Some(area) = draft.building_area {
                    div {
                        class: "input-preview",
                        "{format_area(area)}"
                    }
                }
                FieldFeedback { message: area_error() }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Number of storeys"
                }
                ValidatedInput {
                    value: number_text(draft.storeys),
                    placeholder: "2".to_string(),
                    input_type: InputType::Number,
                    input_class: "input-field".to_string(),
                    disabled: disabled,
                    on_change: move |value: String| match parse_optional_number::<u32>(&value) {
                        Ok(parsed) => {
                            storeys_error.set(None);
                            dispatch.call(WizardAction::SetStoreys(parsed));
                        }
                        Err(message) => storeys_error.set(Some(message)),
                    }
                }
                FieldFeedback { message: storeys_error() }
            }
        }
    }
}
