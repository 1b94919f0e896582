//! Form controls shared by the wizard steps

use crate::permit::form_validation::EmailValidation;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaInputProps {
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    #[props(default = 4)]
    pub rows: u32,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextAreaInput(props: TextAreaInputProps) -> Element {
    rsx! {
        textarea {
            class: "input-field input-textarea",
            rows: "{props.rows}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            value: "{props.value}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

/// `<select>` over `(value, label)` pairs with an empty placeholder option
#[derive(Props, PartialEq, Clone)]
pub struct OptionSelectProps {
    pub options: Vec<(String, String)>,
    /// Empty string when nothing is selected
    pub selected: String,
    pub placeholder: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn OptionSelect(props: OptionSelectProps) -> Element {
    let on_change = props.on_change;
    let selected = props.selected.clone();

    rsx! {
        select {
            class: "input-field option-select",
            value: "{selected}",
            disabled: props.disabled,
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            option {
                value: "",
                selected: selected.is_empty(),
                "{props.placeholder}"
            }
            for (value, label) in props.options {
                option {
                    selected: value == selected,
                    value: "{value}",
                    "{label}"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct EmailValidationFeedbackProps {
    pub validation: EmailValidation,
}

#[component]
pub fn EmailValidationFeedback(props: EmailValidationFeedbackProps) -> Element {
    match props.validation {
        EmailValidation::Valid => rsx! {
            div {
                class: "validation-feedback valid",
                "✓ Valid email address"
            }
        },
        EmailValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                role: "alert",
                "⚠ Email addresses need an @"
            }
        },
        EmailValidation::None => rsx! {},
    }
}

/// Inline message under a field or step; renders nothing without a message
#[derive(Props, PartialEq, Clone)]
pub struct FieldFeedbackProps {
    pub message: Option<String>,
}

#[component]
pub fn FieldFeedback(props: FieldFeedbackProps) -> Element {
    let Some(message) = props.message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "validation-feedback invalid",
            role: "alert",
            "⚠ {message}"
        }
    }
}
