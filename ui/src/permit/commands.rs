//! Wizard commands and the controller that executes them against a gateway.
//!
//! Every user intent (next, back, save, submit, upload, remove) becomes a
//! [`WizardCommand`]. [`WizardController::execute`] is the only place that
//! talks to the gateway on the wizard's behalf; it reports state changes
//! through `dispatch` and returns a [`CommandOutcome`] the page uses to
//! navigate.

use super::form_validation::{step_validation_message, validate_upload};
use super::state::{PendingRequest, WizardAction, WizardMode, WizardState, WizardStep};
use super::types::{ApplicationDraft, ApplicationId, DocumentId, DocumentUpload, RemoteApplication};
use crate::services::client::{GatewayError, PermitGateway};
use crate::services::config::PortalConfig;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save application";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit application";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload document";
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove document";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load application";
pub const SAVE_DRAFT_FIRST_MESSAGE: &str = "Save the draft before adding documents";
pub const REMOVAL_LOCKED_MESSAGE: &str =
    "Documents can only be removed while the application is a draft";
pub const DRAFT_SAVED_NOTICE: &str = "Draft saved";

#[derive(Clone, Debug, PartialEq)]
pub enum WizardCommand {
    Advance,
    Back,
    Save,
    Submit,
    Upload(DocumentUpload),
    Remove(DocumentId),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    StepChanged(WizardStep),
    /// Nothing to do, e.g. back from the first step
    Unchanged,
    /// Rejected on the client; the message is shown inline
    Blocked(String),
    /// First save created the application; the page moves to its edit URL
    Created(ApplicationId),
    Saved(ApplicationId),
    Submitted(ApplicationId),
    /// Submit created the application but the transition failed; the page
    /// still moves to the new id's URL
    CreatedNotSubmitted { id: ApplicationId, message: String },
    DocumentUploaded,
    DocumentRemoved,
    /// Another request is still pending; no gateway call was made
    Busy,
    Failed(String),
}

pub struct WizardController<'a, G: PermitGateway + ?Sized> {
    gateway: &'a G,
    config: &'a PortalConfig,
}

impl<'a, G: PermitGateway + ?Sized> WizardController<'a, G> {
    pub fn new(gateway: &'a G, config: &'a PortalConfig) -> Self {
        Self { gateway, config }
    }

    /// Runs `command` against a snapshot of the wizard state
    pub async fn execute<D>(
        &self,
        state: &WizardState,
        command: WizardCommand,
        dispatch: &D,
    ) -> CommandOutcome
    where
        D: Fn(WizardAction),
    {
        match command {
            WizardCommand::Advance => self.advance(state, dispatch).await,
            WizardCommand::Back => match state.current_step.previous() {
                Some(step) => {
                    dispatch(WizardAction::SetCurrentStep(step));
                    CommandOutcome::StepChanged(step)
                }
                None => CommandOutcome::Unchanged,
            },
            WizardCommand::Save => {
                if state.is_busy() {
                    return CommandOutcome::Busy;
                }
                match self
                    .persist(&state.draft, state.application_id.as_ref(), dispatch)
                    .await
                {
                    Ok((application, true)) => CommandOutcome::Created(application.id),
                    Ok((application, false)) => CommandOutcome::Saved(application.id),
                    Err(message) => CommandOutcome::Failed(message),
                }
            }
            WizardCommand::Submit => self.submit(state, dispatch).await,
            WizardCommand::Upload(upload) => self.upload(state, upload, dispatch).await,
            WizardCommand::Remove(document_id) => self.remove(state, document_id, dispatch).await,
        }
    }

    async fn advance<D: Fn(WizardAction)>(&self, state: &WizardState, dispatch: &D) -> CommandOutcome {
        let Some(next) = state.current_step.next() else {
            return CommandOutcome::Unchanged;
        };

        if !state.can_proceed() {
            let message = step_validation_message(&state.draft, state.current_step)
                .unwrap_or_else(|| "Please complete this step".to_string());
            return CommandOutcome::Blocked(message);
        }

        dispatch(WizardAction::SetCurrentStep(next));

        let implicit_save = next == WizardStep::Documents && state.mode == WizardMode::Create;
        if !implicit_save {
            return CommandOutcome::StepChanged(next);
        }
        if state.is_busy() {
            crate::console_warn!("[WIZARD] Skipping implicit save, a request is pending");
            return CommandOutcome::StepChanged(next);
        }

        // The step change stands even if this save fails
        match self
            .persist(&state.draft, state.application_id.as_ref(), dispatch)
            .await
        {
            Ok((application, true)) => CommandOutcome::Created(application.id),
            Ok((_, false)) => CommandOutcome::StepChanged(next),
            Err(message) => CommandOutcome::Failed(message),
        }
    }

    /// Creates or updates with the full payload; returns the saved copy and
    /// whether it was newly created
    async fn persist<D: Fn(WizardAction)>(
        &self,
        draft: &ApplicationDraft,
        application_id: Option<&ApplicationId>,
        dispatch: &D,
    ) -> Result<(RemoteApplication, bool), String> {
        dispatch(WizardAction::SetPending(Some(PendingRequest::Saving)));
        dispatch(WizardAction::SetError(None));

        let payload = draft.to_payload();
        let result = match application_id {
            Some(id) => self
                .gateway
                .update_application(id, &payload)
                .await
                .map(|application| (application, false)),
            None => self
                .gateway
                .create_application(&payload)
                .await
                .map(|application| (application, true)),
        };

        dispatch(WizardAction::SetPending(None));
        match result {
            Ok((application, created)) => {
                crate::console_info!(
                    "[WIZARD] Application {} {}",
                    application.id,
                    if created { "created" } else { "updated" }
                );
                dispatch(WizardAction::ApplicationSaved(application.clone()));
                dispatch(WizardAction::SetNotice(Some(DRAFT_SAVED_NOTICE.to_string())));
                Ok((application, created))
            }
            Err(error) => Err(self.report(&error, SAVE_FAILED_MESSAGE, dispatch)),
        }
    }

    async fn submit<D: Fn(WizardAction)>(&self, state: &WizardState, dispatch: &D) -> CommandOutcome {
        if state.is_busy() {
            return CommandOutcome::Busy;
        }

        dispatch(WizardAction::SetPending(Some(PendingRequest::Submitting)));
        dispatch(WizardAction::SetError(None));

        let (id, created) = match &state.application_id {
            Some(id) => (id.clone(), false),
            None => match self.gateway.create_application(&state.draft.to_payload()).await {
                Ok(application) => {
                    crate::console_info!("[WIZARD] Application {} created before submit", application.id);
                    let id = application.id.clone();
                    dispatch(WizardAction::ApplicationSaved(application));
                    (id, true)
                }
                Err(error) => {
                    dispatch(WizardAction::SetPending(None));
                    return CommandOutcome::Failed(self.report(&error, SAVE_FAILED_MESSAGE, dispatch));
                }
            },
        };

        let result = self.gateway.submit_application(&id).await;
        dispatch(WizardAction::SetPending(None));
        match result {
            Ok(application) => {
                crate::console_info!("[WIZARD] Application {} submitted", application.id);
                let id = application.id.clone();
                dispatch(WizardAction::ApplicationSaved(application));
                CommandOutcome::Submitted(id)
            }
            Err(error) => {
                let message = self.report(&error, SUBMIT_FAILED_MESSAGE, dispatch);
                if created {
                    CommandOutcome::CreatedNotSubmitted { id, message }
                } else {
                    CommandOutcome::Failed(message)
                }
            }
        }
    }

    async fn upload<D: Fn(WizardAction)>(
        &self,
        state: &WizardState,
        upload: DocumentUpload,
        dispatch: &D,
    ) -> CommandOutcome {
        if state.is_busy() {
            return CommandOutcome::Busy;
        }
        let Some(id) = &state.application_id else {
            return blocked_upload(SAVE_DRAFT_FIRST_MESSAGE.to_string(), dispatch);
        };
        if let Err(message) = validate_upload(&upload, self.config, &state.document_types) {
            return blocked_upload(message, dispatch);
        }

        dispatch(WizardAction::SetPending(Some(PendingRequest::Uploading)));
        dispatch(WizardAction::SetUploadError(None));
        dispatch(WizardAction::SetError(None));

        let result = self.gateway.upload_document(id, upload).await;
        dispatch(WizardAction::SetPending(None));
        match result {
            Ok(document) => {
                crate::console_info!("[WIZARD] Uploaded {} to {}", document.file_name, id);
                dispatch(WizardAction::DocumentAdded(document));
                CommandOutcome::DocumentUploaded
            }
            Err(error) => CommandOutcome::Failed(self.report(&error, UPLOAD_FAILED_MESSAGE, dispatch)),
        }
    }

    async fn remove<D: Fn(WizardAction)>(
        &self,
        state: &WizardState,
        document_id: DocumentId,
        dispatch: &D,
    ) -> CommandOutcome {
        if state.is_busy() {
            return CommandOutcome::Busy;
        }
        let Some(id) = &state.application_id else {
            return blocked_upload(SAVE_DRAFT_FIRST_MESSAGE.to_string(), dispatch);
        };
        if !state.status.is_draft() {
            return CommandOutcome::Blocked(REMOVAL_LOCKED_MESSAGE.to_string());
        }

        dispatch(WizardAction::SetPending(Some(PendingRequest::Removing(document_id.clone()))));
        dispatch(WizardAction::SetError(None));

        let result = self.gateway.remove_document(id, &document_id).await;
        dispatch(WizardAction::SetPending(None));
        match result {
            Ok(()) => {
                dispatch(WizardAction::DocumentRemoved(document_id));
                CommandOutcome::DocumentRemoved
            }
            Err(error) => CommandOutcome::Failed(self.report(&error, REMOVE_FAILED_MESSAGE, dispatch)),
        }
    }

    /// Loads an existing application and its documents for edit mode
    pub async fn load_application<D>(&self, id: &ApplicationId, dispatch: &D) -> Result<(), String>
    where
        D: Fn(WizardAction),
    {
        dispatch(WizardAction::SetPending(Some(PendingRequest::Loading)));
        let (application, documents) = futures::join!(
            self.gateway.get_application(id),
            self.gateway.list_documents(id)
        );
        dispatch(WizardAction::SetPending(None));

        let application = match application {
            Ok(application) => application,
            Err(error) => return Err(self.report(&error, LOAD_FAILED_MESSAGE, dispatch)),
        };

        let documents = documents.unwrap_or_else(|e| {
            crate::console_warn!("[WIZARD] Could not list documents for {}: {}", id, e);
            Vec::new()
        });

        dispatch(WizardAction::HydrateFromRemote(application));
        dispatch(WizardAction::SetDocuments(documents));
        Ok(())
    }

    /// Document types are optional; on failure the type check is relaxed
    pub async fn load_document_types<D>(&self, dispatch: &D)
    where
        D: Fn(WizardAction),
    {
        match self.gateway.get_document_types().await {
            Ok(types) => dispatch(WizardAction::SetDocumentTypes(types)),
            Err(e) => crate::console_warn!("[WIZARD] Could not load document types: {}", e),
        }
    }

    fn report<D: Fn(WizardAction)>(&self, error: &GatewayError, fallback: &str, dispatch: &D) -> String {
        let message = error.user_message(fallback);
        dispatch(WizardAction::SetError(Some(message.clone())));
        message
    }
}

fn blocked_upload<D: Fn(WizardAction)>(message: String, dispatch: &D) -> CommandOutcome {
    dispatch(WizardAction::SetUploadError(Some(message.clone())));
    CommandOutcome::Blocked(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permit::test_support::{api_error, RecordingGateway};
    use crate::permit::types::{ApplicationStatus, PermitType, WorkType};
    use std::cell::RefCell;

    struct Harness {
        gateway: RecordingGateway,
        config: PortalConfig,
        state: RefCell<WizardState>,
    }

    impl Harness {
        fn new(mode: WizardMode) -> Self {
            Self {
                gateway: RecordingGateway::new(),
                config: PortalConfig::default(),
                state: RefCell::new(WizardState::new(mode)),
            }
        }

        fn apply(&self, action: WizardAction) {
            self.state.borrow_mut().reduce_in_place(action);
        }

        async fn run(&self, command: WizardCommand) -> CommandOutcome {
            let snapshot = self.state.borrow().clone();
            let controller = WizardController::new(&self.gateway, &self.config);
            controller
                .execute(&snapshot, command, &|action| self.apply(action))
                .await
        }

        fn fill_valid_draft(&self) {
            self.apply(WizardAction::SetApplicantName("Jo Builder".to_string()));
            self.apply(WizardAction::SetApplicantEmail("jo@example.com".to_string()));
            self.apply(WizardAction::SetPermitType(Some(PermitType::Building)));
            self.apply(WizardAction::SetWorkType(Some(WorkType::Alteration)));
            self.apply(WizardAction::SetAddress("12 Main Street".to_string()));
        }
    }

    #[tokio::test]
    async fn test_advance_blocked_until_step_is_valid() {
        let h = Harness::new(WizardMode::Create);
        h.apply(WizardAction::SetApplicantName("J".to_string()));
        h.apply(WizardAction::SetApplicantEmail("a@b.com".to_string()));

        let outcome = h.run(WizardCommand::Advance).await;
        assert!(matches!(outcome, CommandOutcome::Blocked(_)));
        assert_eq!(h.state.borrow().current_step, WizardStep::Applicant);
        assert!(h.gateway.calls().is_empty());

        h.apply(WizardAction::SetApplicantName("Jo".to_string()));
        assert_eq!(
            h.run(WizardCommand::Advance).await,
            CommandOutcome::StepChanged(WizardStep::Project)
        );
    }

    #[tokio::test]
    async fn test_back_is_unvalidated_and_stops_at_first_step() {
        let h = Harness::new(WizardMode::Create);
        assert_eq!(h.run(WizardCommand::Back).await, CommandOutcome::Unchanged);

        h.apply(WizardAction::SetCurrentStep(WizardStep::Project));
        assert_eq!(
            h.run(WizardCommand::Back).await,
            CommandOutcome::StepChanged(WizardStep::Applicant)
        );
    }

    #[tokio::test]
    async fn test_entering_documents_in_create_mode_saves_once() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.apply(WizardAction::SetCurrentStep(WizardStep::Details));

        let outcome = h.run(WizardCommand::Advance).await;
        assert_eq!(outcome, CommandOutcome::Created(ApplicationId::new("100")));

        let state = h.state.borrow();
        assert_eq!(state.current_step, WizardStep::Documents);
        assert_eq!(state.application_id, Some(ApplicationId::new("100")));
        assert!(state.documents_enabled());
        assert_eq!(h.gateway.calls(), vec!["create"]);
    }

    #[tokio::test]
    async fn test_entering_documents_in_edit_mode_does_not_save() {
        let h = Harness::new(WizardMode::Edit);
        h.fill_valid_draft();
        h.apply(WizardAction::SetCurrentStep(WizardStep::Details));

        assert_eq!(
            h.run(WizardCommand::Advance).await,
            CommandOutcome::StepChanged(WizardStep::Documents)
        );
        assert!(h.gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_implicit_save_keeps_step_change() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.apply(WizardAction::SetCurrentStep(WizardStep::Details));
        h.gateway.fail("create", api_error(422, "Address is outside the jurisdiction"));

        let outcome = h.run(WizardCommand::Advance).await;
        assert_eq!(
            outcome,
            CommandOutcome::Failed("Address is outside the jurisdiction".to_string())
        );

        let state = h.state.borrow();
        assert_eq!(state.current_step, WizardStep::Documents);
        assert_eq!(state.error.as_deref(), Some("Address is outside the jurisdiction"));
        assert!(!state.documents_enabled());
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();

        let first = h.run(WizardCommand::Save).await;
        assert_eq!(first, CommandOutcome::Created(ApplicationId::new("100")));

        h.apply(WizardAction::SetDescription("Kitchen remodel".to_string()));
        let second = h.run(WizardCommand::Save).await;
        assert_eq!(second, CommandOutcome::Saved(ApplicationId::new("100")));

        assert_eq!(h.gateway.calls(), vec!["create", "update:100"]);
        assert_eq!(h.state.borrow().notice.as_deref(), Some(DRAFT_SAVED_NOTICE));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_field_values() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.apply(WizardAction::SetCurrentStep(WizardStep::Project));
        h.gateway.fail(
            "create",
            GatewayError::Network {
                message: "connection reset".to_string(),
            },
        );

        let before = h.state.borrow().draft.clone();
        let outcome = h.run(WizardCommand::Save).await;

        assert_eq!(outcome, CommandOutcome::Failed(SAVE_FAILED_MESSAGE.to_string()));
        let state = h.state.borrow();
        assert_eq!(state.draft, before);
        assert_eq!(state.current_step, WizardStep::Project);
        assert_eq!(state.application_id, None);
        assert_eq!(state.error.as_deref(), Some(SAVE_FAILED_MESSAGE));
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_submit_unsaved_draft_creates_then_submits() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();

        let outcome = h.run(WizardCommand::Submit).await;
        assert_eq!(outcome, CommandOutcome::Submitted(ApplicationId::new("100")));
        assert_eq!(h.gateway.calls(), vec!["create", "submit:100"]);
        assert_eq!(h.state.borrow().status, ApplicationStatus::Submitted);
    }

    #[tokio::test]
    async fn test_submit_saved_draft_only_transitions() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.run(WizardCommand::Save).await;

        h.run(WizardCommand::Submit).await;
        assert_eq!(h.gateway.count("create"), 1);
        assert_eq!(h.gateway.count("submit"), 1);
        assert_eq!(h.gateway.count("update"), 0);
    }

    #[tokio::test]
    async fn test_submit_stops_when_create_fails() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.gateway.fail("create", api_error(500, ""));

        let outcome = h.run(WizardCommand::Submit).await;
        assert_eq!(outcome, CommandOutcome::Failed(SAVE_FAILED_MESSAGE.to_string()));
        assert_eq!(h.gateway.count("submit"), 0);
        assert_eq!(h.state.borrow().status, ApplicationStatus::Draft);
    }

    #[tokio::test]
    async fn test_failed_submit_leaves_status_draft() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.run(WizardCommand::Save).await;
        h.gateway.fail("submit", api_error(409, "A site plan is required"));

        let outcome = h.run(WizardCommand::Submit).await;
        assert_eq!(outcome, CommandOutcome::Failed("A site plan is required".to_string()));
        let state = h.state.borrow();
        assert_eq!(state.status, ApplicationStatus::Draft);
        assert_eq!(state.error.as_deref(), Some("A site plan is required"));
    }

    #[tokio::test]
    async fn test_failed_submit_after_create_reports_new_id() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.gateway.fail("submit", api_error(409, "A site plan is required"));

        let outcome = h.run(WizardCommand::Submit).await;
        assert_eq!(
            outcome,
            CommandOutcome::CreatedNotSubmitted {
                id: ApplicationId::new("100"),
                message: "A site plan is required".to_string(),
            }
        );
        assert_eq!(h.gateway.calls(), vec!["create", "submit:100"]);

        let state = h.state.borrow();
        assert_eq!(state.application_id, Some(ApplicationId::new("100")));
        assert_eq!(state.status, ApplicationStatus::Draft);
        assert_eq!(state.error.as_deref(), Some("A site plan is required"));
    }

    #[tokio::test]
    async fn test_commands_while_pending_make_no_calls() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.apply(WizardAction::SetPending(Some(PendingRequest::Saving)));

        assert_eq!(h.run(WizardCommand::Save).await, CommandOutcome::Busy);
        assert_eq!(h.run(WizardCommand::Submit).await, CommandOutcome::Busy);
        assert_eq!(
            h.run(WizardCommand::Upload(DocumentUpload::new("a.pdf", "site_plan", vec![1])))
                .await,
            CommandOutcome::Busy
        );
        assert_eq!(
            h.run(WizardCommand::Remove(DocumentId::new("d1"))).await,
            CommandOutcome::Busy
        );

        // Pending implicit save is skipped, the step still changes
        h.apply(WizardAction::SetCurrentStep(WizardStep::Details));
        assert_eq!(
            h.run(WizardCommand::Advance).await,
            CommandOutcome::StepChanged(WizardStep::Documents)
        );
        assert!(h.gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_document_commands_need_bound_id() {
        let h = Harness::new(WizardMode::Create);
        let upload = DocumentUpload::new("plan.pdf", "site_plan", vec![1, 2, 3]);

        assert_eq!(
            h.run(WizardCommand::Upload(upload)).await,
            CommandOutcome::Blocked(SAVE_DRAFT_FIRST_MESSAGE.to_string())
        );
        assert_eq!(
            h.run(WizardCommand::Remove(DocumentId::new("d1"))).await,
            CommandOutcome::Blocked(SAVE_DRAFT_FIRST_MESSAGE.to_string())
        );
        assert_eq!(h.state.borrow().upload_error.as_deref(), Some(SAVE_DRAFT_FIRST_MESSAGE));
        assert!(h.gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_and_remove_with_bound_id() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.run(WizardCommand::Save).await;

        let rejected = DocumentUpload::new("plan.exe", "site_plan", vec![1]);
        assert!(matches!(
            h.run(WizardCommand::Upload(rejected)).await,
            CommandOutcome::Blocked(_)
        ));
        assert_eq!(h.gateway.count("upload"), 0);

        let upload = DocumentUpload::new("plan.pdf", "site_plan", vec![1, 2, 3]);
        assert_eq!(
            h.run(WizardCommand::Upload(upload)).await,
            CommandOutcome::DocumentUploaded
        );
        let document_id = h.state.borrow().documents[0].id.clone();
        assert_eq!(h.state.borrow().upload_error, None);

        assert_eq!(
            h.run(WizardCommand::Remove(document_id)).await,
            CommandOutcome::DocumentRemoved
        );
        assert!(h.state.borrow().documents.is_empty());
    }

    #[tokio::test]
    async fn test_remove_rejected_after_submission() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.run(WizardCommand::Submit).await;

        assert_eq!(
            h.run(WizardCommand::Remove(DocumentId::new("d1"))).await,
            CommandOutcome::Blocked(REMOVAL_LOCKED_MESSAGE.to_string())
        );
        assert_eq!(h.gateway.count("remove"), 0);
    }

    #[tokio::test]
    async fn test_unauthorized_shows_session_message() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.gateway.fail("create", GatewayError::Unauthorized);

        h.run(WizardCommand::Save).await;
        assert_eq!(
            h.state.borrow().error.as_deref(),
            Some(crate::services::client::SESSION_EXPIRED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_load_application_hydrates_state() {
        let h = Harness::new(WizardMode::Create);
        h.fill_valid_draft();
        h.run(WizardCommand::Save).await;

        let edit = Harness::new(WizardMode::Edit);
        *edit.gateway.application.borrow_mut() = h.gateway.application.borrow().clone();
        let controller = WizardController::new(&edit.gateway, &edit.config);
        let id = ApplicationId::new("100");

        let result = controller
            .load_application(&id, &|action| edit.apply(action))
            .await;
        assert_eq!(result, Ok(()));

        let state = edit.state.borrow();
        assert_eq!(state.draft.applicant.name, "Jo Builder");
        assert_eq!(state.application_id, Some(id));
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_load_missing_application_reports_error() {
        let h = Harness::new(WizardMode::Edit);
        h.gateway.fail("get", GatewayError::Network { message: "offline".to_string() });
        let controller = WizardController::new(&h.gateway, &h.config);

        let result = controller
            .load_application(&ApplicationId::new("9"), &|action| h.apply(action))
            .await;
        assert_eq!(result, Err(LOAD_FAILED_MESSAGE.to_string()));
        assert_eq!(h.state.borrow().error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_load_document_types() {
        let h = Harness::new(WizardMode::Create);
        let controller = WizardController::new(&h.gateway, &h.config);
        controller.load_document_types(&|action| h.apply(action)).await;
        assert_eq!(h.state.borrow().document_types, vec!["site_plan", "floor_plan"]);
    }
}
