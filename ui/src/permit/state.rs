// Wizard state machine - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use super::form_validation;
use super::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Applicant,
    Project,
    Details,
    Documents,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Applicant,
        WizardStep::Project,
        WizardStep::Details,
        WizardStep::Documents,
    ];

    /// 1-based position shown to the user
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Applicant => 1,
            WizardStep::Project => 2,
            WizardStep::Details => 3,
            WizardStep::Documents => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|step| step.number() == number)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Applicant => "Applicant",
            WizardStep::Project => "Project",
            WizardStep::Details => "Details",
            WizardStep::Documents => "Documents",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardMode {
    /// New application, no id bound until the first save
    Create,
    /// Existing application hydrated from the server
    Edit,
}

/// The request currently in flight, if any
#[derive(Clone, Debug, PartialEq)]
pub enum PendingRequest {
    Loading,
    Saving,
    Submitting,
    Uploading,
    Removing(DocumentId),
}

impl PendingRequest {
    pub fn label(&self) -> &'static str {
        match self {
            PendingRequest::Loading => "Loading application...",
            PendingRequest::Saving => "Saving draft...",
            PendingRequest::Submitting => "Submitting application...",
            PendingRequest::Uploading => "Uploading document...",
            PendingRequest::Removing(_) => "Removing document...",
        }
    }
}

#[derive(Clone, Debug)]
pub enum WizardAction {
    // Step 1 - applicant
    SetApplicantName(String),
    SetApplicantEmail(String),
    SetApplicantPhone(String),
    SetApplicantCompany(String),

    // Step 2 - project
    SetPermitType(Option<PermitType>),
    SetWorkType(Option<WorkType>),
    SetAddress(String),
    SetDescription(String),

    // Step 3 - details
    SetOccupancyGroup(Option<OccupancyGroup>),
    SetEstimatedValue(Option<f64>),
    SetBuildingArea(Option<f64>),
    SetStoreys(Option<u32>),
    SetConstructionType(Option<ConstructionType>),

    // Navigation and loading
    SetCurrentStep(WizardStep),
    RestoreDraft(ApplicationDraft),
    HydrateFromRemote(RemoteApplication),
    ApplicationSaved(RemoteApplication),

    // Documents
    SetDocuments(Vec<DocumentRecord>),
    DocumentAdded(DocumentRecord),
    DocumentRemoved(DocumentId),
    SetDocumentTypes(Vec<String>),

    // Request and feedback
    SetPending(Option<PendingRequest>),
    SetError(Option<String>),
    SetNotice(Option<String>),
    SetUploadError(Option<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct WizardState {
    pub mode: WizardMode,
    pub current_step: WizardStep,
    pub draft: ApplicationDraft,
    pub application_id: Option<ApplicationId>,
    pub status: ApplicationStatus,
    pub reference_number: Option<String>,
    pub documents: Vec<DocumentRecord>,
    pub document_types: Vec<String>,
    pub pending: Option<PendingRequest>,
    /// Message shown in the dismissible error banner
    pub error: Option<String>,
    /// Short-lived confirmation such as "Draft saved"
    pub notice: Option<String>,
    /// Inline message under the upload widget
    pub upload_error: Option<String>,
}

impl WizardState {
    pub fn new(mode: WizardMode) -> Self {
        Self {
            mode,
            current_step: WizardStep::Applicant,
            draft: ApplicationDraft::default(),
            application_id: None,
            status: ApplicationStatus::Draft,
            reference_number: None,
            documents: Vec::new(),
            document_types: Vec::new(),
            pending: None,
            error: None,
            notice: None,
            upload_error: None,
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: WizardAction) {
        match action {
            WizardAction::SetApplicantName(name) => {
                self.draft.applicant.name = name;
            }
            WizardAction::SetApplicantEmail(email) => {
                self.draft.applicant.email = email;
            }
            WizardAction::SetApplicantPhone(phone) => {
                self.draft.applicant.phone = phone;
            }
            WizardAction::SetApplicantCompany(company) => {
                self.draft.applicant.company = company;
            }

            WizardAction::SetPermitType(permit_type) => {
                self.draft.permit_type = permit_type;
            }
            WizardAction::SetWorkType(work_type) => {
                self.draft.work_type = work_type;
            }
            WizardAction::SetAddress(address) => {
                self.draft.address = address;
            }
            WizardAction::SetDescription(description) => {
                self.draft.description = description;
            }

            WizardAction::SetOccupancyGroup(group) => {
                self.draft.occupancy_group = group;
            }
            WizardAction::SetEstimatedValue(value) => {
                self.draft.estimated_value = value;
            }
            WizardAction::SetBuildingArea(area) => {
                self.draft.building_area = area;
            }
            WizardAction::SetStoreys(storeys) => {
                self.draft.storeys = storeys;
            }
            WizardAction::SetConstructionType(construction_type) => {
                self.draft.construction_type = construction_type;
            }

            WizardAction::SetCurrentStep(step) => {
                crate::console_debug!(
                    "[WIZARD] Step {} -> {}",
                    self.current_step.number(),
                    step.number()
                );
                self.current_step = step;
            }
            WizardAction::RestoreDraft(draft) => {
                self.draft = draft;
            }
            WizardAction::HydrateFromRemote(application) => {
                crate::console_info!("[WIZARD] Hydrating from application {}", application.id);
                // Remote copy is authoritative
                self.draft = ApplicationDraft::from_remote(&application);
                self.bind(application);
            }
            WizardAction::ApplicationSaved(application) => {
                if let Some(previous) = &self.application_id {
                    if *previous != application.id {
                        crate::console_warn!(
                            "[WIZARD] Bound id changed from {} to {}",
                            previous,
                            application.id
                        );
                    }
                }
                self.bind(application);
            }

            WizardAction::SetDocuments(documents) => {
                self.documents = documents;
            }
            WizardAction::DocumentAdded(document) => {
                self.documents.retain(|existing| existing.id != document.id);
                self.documents.push(document);
            }
            WizardAction::DocumentRemoved(document_id) => {
                self.documents.retain(|existing| existing.id != document_id);
            }
            WizardAction::SetDocumentTypes(types) => {
                self.document_types = types;
            }

            WizardAction::SetPending(pending) => {
                self.pending = pending;
            }
            WizardAction::SetError(error) => {
                if let Some(message) = &error {
                    crate::console_error!("[WIZARD] {}", message);
                }
                self.error = error;
            }
            WizardAction::SetNotice(notice) => {
                self.notice = notice;
            }
            WizardAction::SetUploadError(error) => {
                self.upload_error = error;
            }
        }
    }

    /// Binds id, status and reference number; draft fields are left alone
    fn bind(&mut self, application: RemoteApplication) {
        self.application_id = Some(application.id);
        self.status = application.status;
        if application.reference_number.is_some() {
            self.reference_number = application.reference_number;
        }
    }

    pub fn can_proceed(&self) -> bool {
        form_validation::can_proceed(&self.draft, self.current_step)
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Upload and removal need a bound application id
    pub fn documents_enabled(&self) -> bool {
        self.application_id.is_some()
    }

    pub fn can_remove_documents(&self) -> bool {
        self.documents_enabled() && self.status.is_draft()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn remote(value: serde_json::Value) -> RemoteApplication {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_step_navigation_bounds() {
        assert_eq!(WizardStep::Applicant.previous(), None);
        assert_eq!(WizardStep::Applicant.next(), Some(WizardStep::Project));
        assert_eq!(WizardStep::Details.next(), Some(WizardStep::Documents));
        assert_eq!(WizardStep::Documents.next(), None);
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(3), Some(WizardStep::Details));
    }

    #[test]
    fn test_field_actions_update_draft() {
        let mut state = WizardState::new(WizardMode::Create);
        state.reduce_in_place(WizardAction::SetApplicantName("Jo".to_string()));
        state.reduce_in_place(WizardAction::SetApplicantEmail("a@b.com".to_string()));
        state.reduce_in_place(WizardAction::SetPermitType(Some(PermitType::Sign)));
        state.reduce_in_place(WizardAction::SetStoreys(Some(4)));

        assert_eq!(state.draft.applicant.name, "Jo");
        assert_eq!(state.draft.applicant.email, "a@b.com");
        assert_eq!(state.draft.permit_type, Some(PermitType::Sign));
        assert_eq!(state.draft.storeys, Some(4));
        assert!(state.can_proceed());
    }

    #[test]
    fn test_saved_application_binds_without_touching_fields() {
        let mut state = WizardState::new(WizardMode::Create);
        state.reduce_in_place(WizardAction::SetAddress("12 Main Street".to_string()));

        state.reduce_in_place(WizardAction::ApplicationSaved(remote(json!({
            "id": 7,
            "reference_number": "BP-7",
            "status": "draft",
            "address": "something else"
        }))));

        assert_eq!(state.application_id, Some(ApplicationId::new("7")));
        assert_eq!(state.reference_number.as_deref(), Some("BP-7"));
        assert_eq!(state.draft.address, "12 Main Street");
        assert!(state.documents_enabled());
        assert!(state.can_remove_documents());
    }

    #[test]
    fn test_last_saved_response_wins() {
        let mut state = WizardState::new(WizardMode::Create);
        state.reduce_in_place(WizardAction::ApplicationSaved(remote(
            json!({"id": "a", "status": "draft"}),
        )));
        state.reduce_in_place(WizardAction::ApplicationSaved(remote(
            json!({"id": "b", "status": "submitted"}),
        )));

        assert_eq!(state.application_id, Some(ApplicationId::new("b")));
        assert_eq!(state.status, ApplicationStatus::Submitted);
        assert!(!state.can_remove_documents());
    }

    #[test]
    fn test_hydrate_overwrites_local_fields() {
        let mut state = WizardState::new(WizardMode::Edit);
        state.reduce_in_place(WizardAction::SetApplicantName("Local".to_string()));
        state.reduce_in_place(WizardAction::HydrateFromRemote(remote(json!({
            "id": "x1",
            "status": "draft",
            "applicant": {"name": "Remote", "email": "r@example.com"}
        }))));

        assert_eq!(state.draft.applicant.name, "Remote");
        assert_eq!(state.application_id, Some(ApplicationId::new("x1")));
    }

    #[test]
    fn test_document_actions() {
        let mut state = WizardState::new(WizardMode::Edit);
        let document: DocumentRecord = serde_json::from_value(json!({
            "id": 1, "file_name": "plan.pdf", "document_type": "site_plan"
        }))
        .unwrap();

        state.reduce_in_place(WizardAction::DocumentAdded(document.clone()));
        state.reduce_in_place(WizardAction::DocumentAdded(document));
        assert_eq!(state.documents.len(), 1);

        state.reduce_in_place(WizardAction::DocumentRemoved(DocumentId::new("1")));
        assert!(state.documents.is_empty());
    }

    #[test]
    fn test_documents_disabled_without_id() {
        let state = WizardState::new(WizardMode::Create);
        assert!(!state.documents_enabled());
        assert!(!state.can_remove_documents());
        assert!(!state.is_busy());
    }
}
