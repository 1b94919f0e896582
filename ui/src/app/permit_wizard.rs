use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::app::{NavTarget, PERMIT_PORTAL_CSS};
use crate::components::display::{ErrorBanner, LoadingIndicator, NoticeBanner, StepIndicator};
use crate::components::forms::{ApplicantStep, DetailsStep, DocumentsStep, ProjectStep};
use crate::components::inputs::FieldFeedback;
use crate::permit::commands::{
    CommandOutcome, WizardCommand, WizardController, LOAD_FAILED_MESSAGE, SAVE_FAILED_MESSAGE,
};
use crate::permit::form_validation::step_validation_message;
use crate::permit::state::{WizardAction, WizardMode, WizardState, WizardStep};
use crate::permit::storage::{DraftStorage, FlashStorage};
use crate::permit::types::ApplicationId;
use crate::services::client::{HttpPermitGateway, Session};
use crate::services::config::PortalConfig;
use crate::{console_info, console_warn};

const NOTICE_DISMISS_MS: u32 = 3_000;
const DRAFT_RESTORED_NOTICE: &str = "Restored your unsaved draft";

#[derive(Props, PartialEq, Clone)]
pub struct PermitWizardProps {
    pub session: Session,
    pub config: PortalConfig,
    /// `None` starts a new application
    pub application_id: Option<ApplicationId>,
    #[props(default)]
    pub initial_step: Option<WizardStep>,
    pub on_navigate: EventHandler<NavTarget>,
}

#[component]
pub fn PermitWizard(props: PermitWizardProps) -> Element {
    let mode = if props.application_id.is_some() {
        WizardMode::Edit
    } else {
        WizardMode::Create
    };
    let on_navigate = props.on_navigate;
    let accept = props.config.accept_attribute();

    let mut state = use_signal(|| WizardState::new(mode));

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: WizardAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Load the application (edit) or restore the local draft (create) once on mount
    {
        let config = props.config.clone();
        let session = props.session.clone();
        let application_id = props.application_id.clone();
        let initial_step = props.initial_step;
        use_hook(move || {
            spawn(async move {
                let apply = move |action: WizardAction| dispatch.call(action);
                let gateway = match HttpPermitGateway::new(&config, &session) {
                    Ok(gateway) => gateway,
                    Err(e) => {
                        apply(WizardAction::SetError(Some(e.user_message(LOAD_FAILED_MESSAGE))));
                        return;
                    }
                };
                let controller = WizardController::new(&gateway, &config);

                match &application_id {
                    Some(id) => {
                        if controller.load_application(id, &apply).await.is_ok() {
                            if let Some(step) = initial_step {
                                apply(WizardAction::SetCurrentStep(step));
                            }
                        }
                        // Error raised just before the route change that mounted this page
                        if let Some(message) = FlashStorage::new(&config.flash_storage_key).take() {
                            apply(WizardAction::SetError(Some(message)));
                        }
                    }
                    None => {
                        if let Some(draft) = DraftStorage::new(&config.draft_storage_key).load_draft() {
                            console_info!("[WIZARD] Restoring unsaved draft from local storage");
                            apply(WizardAction::RestoreDraft(draft));
                            apply(WizardAction::SetNotice(Some(DRAFT_RESTORED_NOTICE.to_string())));
                        }
                    }
                }

                controller.load_document_types(&apply).await;
            })
        });
    }

    // Keep the unsaved create-mode draft in local storage
    {
        let draft_storage_key = props.config.draft_storage_key.clone();
        use_effect(move || {
            let current = state();
            if current.mode != WizardMode::Create || current.application_id.is_some() {
                return;
            }
            if let Err(e) = DraftStorage::new(&draft_storage_key).store_draft(&current.draft) {
                console_warn!("[WIZARD] Could not cache draft locally: {:?}", e);
            }
        });
    }

    // Auto-dismiss confirmations; track only the notice to avoid re-arming on every keystroke
    let notice = use_memo(move || state().notice.clone());
    use_effect(move || {
        if notice().is_some() {
            spawn(async move {
                TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                dispatch.call(WizardAction::SetNotice(None));
            });
        }
    });

    let mut blocked_message = use_signal(|| None::<String>);

    let run_command = {
        let config = props.config.clone();
        let session = props.session.clone();
        use_callback(move |command: WizardCommand| {
            let config = config.clone();
            let session = session.clone();
            spawn(async move {
                let apply = move |action: WizardAction| dispatch.call(action);
                let gateway = match HttpPermitGateway::new(&config, &session) {
                    Ok(gateway) => gateway,
                    Err(e) => {
                        apply(WizardAction::SetError(Some(e.user_message(SAVE_FAILED_MESSAGE))));
                        return;
                    }
                };
                let controller = WizardController::new(&gateway, &config);

                // Snapshot on first poll, so a command queued behind another sees its pending flag
                let snapshot = state.peek().clone();
                let outcome = controller.execute(&snapshot, command, &apply).await;
                console_info!("[WIZARD] Command outcome: {:?}", outcome);

                match outcome {
                    CommandOutcome::Blocked(message) => blocked_message.set(Some(message)),
                    CommandOutcome::StepChanged(_) => blocked_message.set(None),
                    CommandOutcome::Created(id) => {
                        DraftStorage::new(&config.draft_storage_key).clear_draft();
                        let step = state.peek().current_step;
                        on_navigate.call(NavTarget::EditApplication { id, step });
                    }
                    CommandOutcome::CreatedNotSubmitted { id, message } => {
                        // The draft now lives on the server under `id`
                        DraftStorage::new(&config.draft_storage_key).clear_draft();
                        FlashStorage::new(&config.flash_storage_key).store(&message);
                        let step = state.peek().current_step;
                        on_navigate.call(NavTarget::EditApplication { id, step });
                    }
                    CommandOutcome::Submitted(id) => {
                        DraftStorage::new(&config.draft_storage_key).clear_draft();
                        on_navigate.call(NavTarget::ApplicationDetails(id));
                    }
                    _ => {}
                }
            });
        })
    };

    let current = state();
    let busy = current.is_busy();
    let step = current.current_step;
    let editable = current.status.is_draft();
    let title = match mode {
        WizardMode::Create => "New permit application",
        WizardMode::Edit => "Edit permit application",
    };
    let step_body = match step {
        WizardStep::Applicant => rsx! { ApplicantStep { state: state, dispatch: dispatch } },
        WizardStep::Project => rsx! { ProjectStep { state: state, dispatch: dispatch } },
        WizardStep::Details => rsx! { DetailsStep { state: state, dispatch: dispatch } },
        WizardStep::Documents => rsx! {
            DocumentsStep {
                state: state,
                accept: accept,
                on_command: move |command: WizardCommand| run_command.call(command)
            }
        },
    };
    let step_hint = if current.can_proceed() {
        None
    } else {
        step_validation_message(&current.draft, step)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PERMIT_PORTAL_CSS }

        div {
            class: "page wizard-page",

            div {
                class: "page-header",
                h1 {
                    class: "page-title",
                    "{title}"
                }
                if let Some(reference) = current.reference_number.clone() {
                    span {
                        class: "reference-number",
                        "{reference}"
                    }
                }
            }

            StepIndicator { current: step }

            ErrorBanner {
                message: current.error.clone(),
                on_dismiss: move |_| dispatch.call(WizardAction::SetError(None))
            }
            NoticeBanner { message: current.notice.clone() }

            if let Some(pending) = current.pending.clone() {
                LoadingIndicator { message: pending.label().to_string(), inline: true }
            }

            if !editable {
                div {
                    class: "read-only-notice",
                    "This application is {current.status.label()} and can no longer be edited."
                    if let Some(id) = current.application_id.clone() {
                        button {
                            class: "button-link",
                            r#type: "button",
                            onclick: move |_| on_navigate.call(NavTarget::ApplicationDetails(id.clone())),
                            "View details"
                        }
                    }
                }
            } else {
                div {
                    class: "wizard-body",
                    {step_body}
                }

                FieldFeedback { message: step_hint.or(blocked_message()) }

                div {
                    class: "wizard-controls",
                    button {
                        class: "button-secondary",
                        r#type: "button",
                        disabled: busy || step.previous().is_none(),
                        onclick: move |_| run_command.call(WizardCommand::Back),
                        "Back"
                    }
                    button {
                        class: "button-secondary",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| run_command.call(WizardCommand::Save),
                        "Save draft"
                    }
                    if step.next().is_some() {
                        button {
                            class: "button-primary",
                            r#type: "button",
                            disabled: busy || !current.can_proceed(),
                            onclick: move |_| run_command.call(WizardCommand::Advance),
                            "Next"
                        }
                    } else {
                        button {
                            class: "button-primary",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| run_command.call(WizardCommand::Submit),
                            "Submit application"
                        }
                    }
                }
            }
        }
    }
}
