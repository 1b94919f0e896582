use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::components::inputs::{FieldFeedback, OptionSelect};
use crate::permit::commands::{WizardCommand, SAVE_DRAFT_FIRST_MESSAGE};
use crate::permit::state::{PendingRequest, WizardState};
use crate::permit::types::{DocumentId, DocumentRecord, DocumentUpload};
use crate::utils::formatting::{format_file_size, format_optional_timestamp};
use crate::console_info;

fn document_type_label(document_type: &str) -> String {
    let spaced = document_type.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DocumentListProps {
    pub documents: Vec<DocumentRecord>,
    pub can_remove: bool,
    #[props(default)]
    pub removing: Option<DocumentId>,
    #[props(default)]
    pub disabled: bool,
    pub on_remove: EventHandler<DocumentId>,
}

#[component]
pub fn DocumentList(props: DocumentListProps) -> Element {
    if props.documents.is_empty() {
        return rsx! {
            p {
                class: "empty-state",
                "No documents uploaded yet."
            }
        };
    }
    let on_remove = props.on_remove;

    rsx! {
        table {
            class: "document-list",
            thead {
                tr {
                    th { "File" }
                    th { "Type" }
                    th { "Size" }
                    th { "Uploaded" }
                    if props.can_remove {
                        th {}
                    }
                }
            }
            tbody {
                for document in props.documents {
                    tr {
                        key: "{document.id}",
                        td {
                            if let Some(url) = document.url.clone() {
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    "{document.file_name}"
                                }
                            } else {
                                "{document.file_name}"
                            }
                        }
                        td { "{document_type_label(&document.document_type)}" }
                        td { "{document.size_bytes.map(format_file_size).unwrap_or_default()}" }
                        td { "{format_optional_timestamp(document.uploaded_at.as_deref())}" }
                        if props.can_remove {
                            td {
                                if props.removing.as_ref() == Some(&document.id) {
                                    LoadingIndicator { message: "Removing...".to_string(), inline: true }
                                } else {
                                    button {
                                        class: "button-link danger",
                                        r#type: "button",
                                        disabled: props.disabled,
                                        onclick: {
                                            let id = document.id.clone();
                                            move |_| on_remove.call(id.clone())
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DocumentsStepProps {
    pub state: Signal<WizardState>,
    /// Value for the file input's `accept` attribute
    pub accept: String,
    pub on_command: EventHandler<WizardCommand>,
}

/// Upload widget; enabled once the application has an id
#[component]
pub fn DocumentsStep(props: DocumentsStepProps) -> Element {
    let state = props.state;
    let on_command = props.on_command;
    let mut selected_type = use_signal(String::new);

    let current = state();
    let enabled = current.documents_enabled();
    let busy = current.is_busy();
    let removing = match &current.pending {
        Some(PendingRequest::Removing(id)) => Some(id.clone()),
        _ => None,
    };
    let type_options: Vec<(String, String)> = current
        .document_types
        .iter()
        .map(|t| (t.clone(), document_type_label(t)))
        .collect();

    rsx! {
        div {
            class: "wizard-form step-documents",

            h2 {
                class: "form-title",
                "Step 4: Documents"
            }

            if !enabled {
                div {
                    class: "save-first-prompt",
                    "{SAVE_DRAFT_FIRST_MESSAGE}"
                }
            }

            div {
                class: "upload-widget",
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Document type"
                    }
                    if type_options.is_empty() {
                        input {
                            class: "input-field",
                            r#type: "text",
                            placeholder: "e.g. site_plan",
                            value: "{selected_type}",
                            disabled: !enabled || busy,
                            oninput: move |evt| selected_type.set(evt.value()),
                        }
                    } else {
                        OptionSelect {
                            options: type_options,
                            selected: selected_type(),
                            placeholder: "Select a document type".to_string(),
                            disabled: !enabled || busy,
                            on_change: move |value: String| selected_type.set(value)
                        }
                    }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "File"
                    }
                    input {
                        class: "file-input",
                        r#type: "file",
                        accept: "{props.accept}",
                        disabled: !enabled || busy,
                        onchange: move |evt: FormEvent| async move {
                            let Some(file_engine) = evt.files() else {
                                return;
                            };
                            for file_name in file_engine.files() {
                                let Some(bytes) = file_engine.read_file(&file_name).await else {
                                    continue;
                                };
                                console_info!("[UPLOAD] Selected {} ({} bytes)", file_name, bytes.len());
                                on_command.call(WizardCommand::Upload(DocumentUpload::new(
                                    file_name,
                                    selected_type(),
                                    bytes,
                                )));
                            }
                        }
                    }
                }

                if current.pending == Some(PendingRequest::Uploading) {
                    LoadingIndicator { message: "Uploading document...".to_string() }
                }
                FieldFeedback { message: current.upload_error.clone() }
            }

            h3 {
                class: "section-title",
                "Uploaded documents"
            }
            DocumentList {
                documents: current.documents.clone(),
                can_remove: current.can_remove_documents(),
                removing: removing,
                disabled: busy,
                on_remove: move |id: DocumentId| on_command.call(WizardCommand::Remove(id))
            }
        }
    }
}
