//! In-memory gateway used by controller and loader tests

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::types::*;
use crate::services::client::{GatewayError, GatewayResult, PermitGateway};

/// Records every call in order and fails the operations it is told to fail
#[derive(Default)]
pub struct RecordingGateway {
    calls: RefCell<Vec<String>>,
    failures: RefCell<HashMap<&'static str, GatewayError>>,
    next_id: Cell<u32>,
    pub application: RefCell<Option<RemoteApplication>>,
    pub documents: RefCell<Vec<DocumentRecord>>,
    pub document_types: Vec<String>,
    pub history: Vec<StatusEvent>,
    pub reviews: Vec<ReviewComment>,
    pub compliance: Vec<ComplianceCheck>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(100),
            document_types: vec!["site_plan".to_string(), "floor_plan".to_string()],
            ..Default::default()
        }
    }

    /// Every later call to `operation` returns `error`
    pub fn fail(&self, operation: &'static str, error: GatewayError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.split(':').next() == Some(operation))
            .count()
    }

    fn record(&self, operation: &'static str, detail: Option<&str>) -> GatewayResult<()> {
        let entry = match detail {
            Some(detail) => format!("{}:{}", operation, detail),
            None => operation.to_string(),
        };
        self.calls.borrow_mut().push(entry);
        match self.failures.borrow().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn store(&self, id: ApplicationId, status: ApplicationStatus, payload: &ApplicationPayload) -> RemoteApplication {
        let application = RemoteApplication {
            reference_number: Some(format!("BP-{}", id)),
            id,
            status,
            applicant: Some(ApplicantRecord {
                name: payload.applicant.name.clone(),
                email: payload.applicant.email.clone(),
                phone: payload.applicant.phone.clone(),
                company: payload.applicant.company.clone(),
            }),
            permit_type: payload.permit_type,
            work_type: payload.work_type,
            address: payload.address.clone(),
            description: payload.description.clone(),
            occupancy_group: payload.occupancy_group,
            estimated_value: payload.estimated_value,
            building_area: payload.building_area,
            storeys: payload.storeys,
            construction_type: payload.construction_type,
            created_at: None,
            updated_at: None,
            submitted_at: None,
        };
        *self.application.borrow_mut() = Some(application.clone());
        application
    }

    fn current(&self, id: &ApplicationId) -> GatewayResult<RemoteApplication> {
        match self.application.borrow().as_ref() {
            Some(application) if application.id == *id => Ok(application.clone()),
            _ => Err(GatewayError::Api {
                status: 404,
                message: Some("Application not found".to_string()),
            }),
        }
    }
}

pub fn api_error(status: u16, message: &str) -> GatewayError {
    GatewayError::Api {
        status,
        message: Some(message.to_string()),
    }
}

#[async_trait(?Send)]
impl PermitGateway for RecordingGateway {
    async fn create_application(
        &self,
        payload: &ApplicationPayload,
    ) -> GatewayResult<RemoteApplication> {
        self.record("create", None)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(self.store(ApplicationId::new(id.to_string()), ApplicationStatus::Draft, payload))
    }

    async fn update_application(
        &self,
        id: &ApplicationId,
        payload: &ApplicationPayload,
    ) -> GatewayResult<RemoteApplication> {
        self.record("update", Some(id.as_str()))?;
        let status = self
            .application
            .borrow()
            .as_ref()
            .map(|application| application.status)
            .unwrap_or(ApplicationStatus::Draft);
        Ok(self.store(id.clone(), status, payload))
    }

    async fn submit_application(&self, id: &ApplicationId) -> GatewayResult<RemoteApplication> {
        self.record("submit", Some(id.as_str()))?;
        let mut application = self.current(id)?;
        application.status = ApplicationStatus::Submitted;
        *self.application.borrow_mut() = Some(application.clone());
        Ok(application)
    }

    async fn get_application(&self, id: &ApplicationId) -> GatewayResult<RemoteApplication> {
        self.record("get", Some(id.as_str()))?;
        self.current(id)
    }

    async fn list_applications(&self) -> GatewayResult<Vec<ApplicationSummary>> {
        self.record("list", None)?;
        Ok(self
            .application
            .borrow()
            .iter()
            .map(|application| ApplicationSummary {
                id: application.id.clone(),
                reference_number: application.reference_number.clone(),
                status: application.status,
                permit_type: application.permit_type,
                address: application.address.clone(),
                updated_at: application.updated_at.clone(),
            })
            .collect())
    }

    async fn list_documents(&self, id: &ApplicationId) -> GatewayResult<Vec<DocumentRecord>> {
        self.record("documents", Some(id.as_str()))?;
        Ok(self.documents.borrow().clone())
    }

    async fn upload_document(
        &self,
        id: &ApplicationId,
        upload: DocumentUpload,
    ) -> GatewayResult<DocumentRecord> {
        self.record("upload", Some(id.as_str()))?;
        let record = DocumentRecord {
            id: DocumentId::new(format!("doc-{}", self.documents.borrow().len() + 1)),
            size_bytes: Some(upload.size()),
            file_name: upload.file_name,
            document_type: upload.document_type,
            uploaded_at: None,
            url: None,
        };
        self.documents.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn remove_document(
        &self,
        id: &ApplicationId,
        document_id: &DocumentId,
    ) -> GatewayResult<()> {
        self.record("remove", Some(id.as_str()))?;
        self.documents
            .borrow_mut()
            .retain(|document| document.id != *document_id);
        Ok(())
    }

    async fn get_document_types(&self) -> GatewayResult<Vec<String>> {
        self.record("document_types", None)?;
        Ok(self.document_types.clone())
    }

    async fn list_status_history(&self, id: &ApplicationId) -> GatewayResult<Vec<StatusEvent>> {
        self.record("history", Some(id.as_str()))?;
        Ok(self.history.clone())
    }

    async fn list_review_comments(&self, id: &ApplicationId) -> GatewayResult<Vec<ReviewComment>> {
        self.record("reviews", Some(id.as_str()))?;
        Ok(self.reviews.clone())
    }

    async fn list_compliance_checks(
        &self,
        id: &ApplicationId,
    ) -> GatewayResult<Vec<ComplianceCheck>> {
        self.record("compliance", Some(id.as_str()))?;
        Ok(self.compliance.clone())
    }
}
