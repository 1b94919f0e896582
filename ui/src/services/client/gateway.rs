//! Remote data gateway abstraction
//!
//! The wizard, list, and detail pages only talk to the permit API through this
//! trait, so the HTTP client can be swapped for an in-memory one in tests.

use async_trait::async_trait;

use super::errors::GatewayResult;
use crate::permit::types::{
    ApplicationId, ApplicationPayload, ApplicationSummary, ComplianceCheck, DocumentId,
    DocumentRecord, DocumentUpload, RemoteApplication, ReviewComment, StatusEvent,
};

/// Operations exposed by the permit REST API - WASM-only, hence `?Send`
#[async_trait(?Send)]
pub trait PermitGateway {
    async fn create_application(
        &self,
        payload: &ApplicationPayload,
    ) -> GatewayResult<RemoteApplication>;

    async fn update_application(
        &self,
        id: &ApplicationId,
        payload: &ApplicationPayload,
    ) -> GatewayResult<RemoteApplication>;

    /// Requests the `draft -> submitted` transition
    async fn submit_application(&self, id: &ApplicationId) -> GatewayResult<RemoteApplication>;

    async fn get_application(&self, id: &ApplicationId) -> GatewayResult<RemoteApplication>;

    async fn list_applications(&self) -> GatewayResult<Vec<ApplicationSummary>>;

    async fn list_documents(&self, id: &ApplicationId) -> GatewayResult<Vec<DocumentRecord>>;

    async fn upload_document(
        &self,
        id: &ApplicationId,
        upload: DocumentUpload,
    ) -> GatewayResult<DocumentRecord>;

    async fn remove_document(
        &self,
        id: &ApplicationId,
        document_id: &DocumentId,
    ) -> GatewayResult<()>;

    async fn get_document_types(&self) -> GatewayResult<Vec<String>>;

    async fn list_status_history(&self, id: &ApplicationId) -> GatewayResult<Vec<StatusEvent>>;

    async fn list_review_comments(&self, id: &ApplicationId) -> GatewayResult<Vec<ReviewComment>>;

    async fn list_compliance_checks(
        &self,
        id: &ApplicationId,
    ) -> GatewayResult<Vec<ComplianceCheck>>;
}
