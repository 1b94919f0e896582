use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::errors::{extract_error_message, GatewayError, GatewayResult};
use super::gateway::PermitGateway;
use super::session::Session;
use crate::permit::types::{
    ApplicationId, ApplicationPayload, ApplicationSummary, ComplianceCheck, DocumentId,
    DocumentRecord, DocumentUpload, RemoteApplication, ReviewComment, StatusEvent,
};
use crate::services::config::PortalConfig;

/// List responses arrive either bare or wrapped in `{ "data": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

/// Single resources arrive either bare or wrapped in `{ "data": {...} }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemEnvelope<T> {
    Bare(T),
    Wrapped { data: T },
}

pub(crate) fn decode_list<T: DeserializeOwned>(operation: &str, body: &str) -> GatewayResult<Vec<T>> {
    match serde_json::from_str::<ListEnvelope<T>>(body) {
        Ok(ListEnvelope::Bare(items)) | Ok(ListEnvelope::Wrapped { data: items }) => Ok(items),
        Err(e) => Err(GatewayError::InvalidResponse {
            operation: operation.to_string(),
            message: e.to_string(),
        }),
    }
}

pub(crate) fn decode_item<T: DeserializeOwned>(operation: &str, body: &str) -> GatewayResult<T> {
    match serde_json::from_str::<ItemEnvelope<T>>(body) {
        Ok(ItemEnvelope::Bare(item)) | Ok(ItemEnvelope::Wrapped { data: item }) => Ok(item),
        Err(e) => Err(GatewayError::InvalidResponse {
            operation: operation.to_string(),
            message: e.to_string(),
        }),
    }
}

/// JSON-over-HTTP implementation of [`PermitGateway`]
#[derive(Clone)]
pub struct HttpPermitGateway {
    http_client: Client,
    base_url: Url,
    access_token: String,
}

impl HttpPermitGateway {
    /// Build a gateway acting on behalf of `session`
    pub fn new(config: &PortalConfig, session: &Session) -> GatewayResult<Self> {
        if session.access_token.trim().is_empty() {
            return Err(GatewayError::Setup {
                message: "session has no access token".to_string(),
            });
        }

        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GatewayError::Setup {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        let base_url = Url::parse(&config.api_base_url).map_err(|e| GatewayError::Setup {
            message: format!("Invalid API base URL {}: {}", config.api_base_url, e),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Setup {
                message: format!("API base URL {} cannot carry a path", config.api_base_url),
            });
        }

        Ok(Self {
            http_client,
            base_url,
            access_token: session.access_token.clone(),
        })
    }

    /// Base URL with `segments` appended, each percent-encoded as one path segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn application_url(&self, id: &ApplicationId, suffix: &[&str]) -> Url {
        let mut segments = vec!["applications", id.as_str()];
        segments.extend_from_slice(suffix);
        self.endpoint(&segments)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header(ACCEPT, "application/json")
    }

    /// Sends the request and maps transport failures and non-2xx statuses
    async fn send(&self, operation: &str, builder: RequestBuilder) -> GatewayResult<Response> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|e| GatewayError::Network {
                message: format!("{} request failed: {}", operation, e),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            error!("{} rejected: session no longer valid", operation);
            return Err(GatewayError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        error!("{} failed ({}): {:?}", operation, status, message);
        Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_body(&self, operation: &str, response: Response) -> GatewayResult<String> {
        response.text().await.map_err(|e| GatewayError::Network {
            message: format!("Failed to read {} response: {}", operation, e),
        })
    }

    async fn fetch_item<T: DeserializeOwned>(
        &self,
        operation: &str,
        builder: RequestBuilder,
    ) -> GatewayResult<T> {
        let response = self.send(operation, builder).await?;
        let body = self.read_body(operation, response).await?;
        decode_item(operation, &body)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        operation: &str,
        builder: RequestBuilder,
    ) -> GatewayResult<Vec<T>> {
        let response = self.send(operation, builder).await?;
        let body = self.read_body(operation, response).await?;
        decode_list(operation, &body)
    }
}

#[async_trait(?Send)]
impl PermitGateway for HttpPermitGateway {
    #[instrument(skip(self, payload), err)]
    async fn create_application(
        &self,
        payload: &ApplicationPayload,
    ) -> GatewayResult<RemoteApplication> {
        let url = self.endpoint(&["applications"]);
        let application: RemoteApplication = self
            .fetch_item("create_application", self.http_client.post(url).json(payload))
            .await?;
        info!("Created application {}", application.id);
        Ok(application)
    }

    #[instrument(skip(self, payload), err)]
    async fn update_application(
        &self,
        id: &ApplicationId,
        payload: &ApplicationPayload,
    ) -> GatewayResult<RemoteApplication> {
        let url = self.application_url(id, &[]);
        self.fetch_item("update_application", self.http_client.put(url).json(payload))
            .await
    }

    #[instrument(skip(self), err)]
    async fn submit_application(&self, id: &ApplicationId) -> GatewayResult<RemoteApplication> {
        let url = self.application_url(id, &["submit"]);
        let application: RemoteApplication = self
            .fetch_item("submit_application", self.http_client.post(url))
            .await?;
        info!("Application {} is now {:?}", application.id, application.status);
        Ok(application)
    }

    #[instrument(skip(self), err)]
    async fn get_application(&self, id: &ApplicationId) -> GatewayResult<RemoteApplication> {
        let url = self.application_url(id, &[]);
        self.fetch_item("get_application", self.http_client.get(url))
            .await
    }

    #[instrument(skip(self), err)]
    async fn list_applications(&self) -> GatewayResult<Vec<ApplicationSummary>> {
        let url = self.endpoint(&["applications"]);
        self.fetch_list("list_applications", self.http_client.get(url))
            .await
    }

    #[instrument(skip(self), err)]
    async fn list_documents(&self, id: &ApplicationId) -> GatewayResult<Vec<DocumentRecord>> {
        let url = self.application_url(id, &["documents"]);
        self.fetch_list("list_documents", self.http_client.get(url))
            .await
    }

    #[instrument(skip(self, upload), err)]
    async fn upload_document(
        &self,
        id: &ApplicationId,
        upload: DocumentUpload,
    ) -> GatewayResult<DocumentRecord> {
        let url = self.application_url(id, &["documents"]);
        info!(
            "Uploading {} ({} bytes) as {} to application {}",
            upload.file_name,
            upload.bytes.len(),
            upload.document_type,
            id
        );

        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(|e| GatewayError::Setup {
                message: format!("Invalid content type {}: {}", content_type, e),
            })?;
        }
        let form = Form::new()
            .part("file", part)
            .text("document_type", upload.document_type);

        self.fetch_item("upload_document", self.http_client.post(url).multipart(form))
            .await
    }

    #[instrument(skip(self), err)]
    async fn remove_document(
        &self,
        id: &ApplicationId,
        document_id: &DocumentId,
    ) -> GatewayResult<()> {
        let url = self.application_url(id, &["documents", document_id.as_str()]);
        self.send("remove_document", self.http_client.delete(url))
            .await?;
        info!("Removed document {} from application {}", document_id, id);
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn get_document_types(&self) -> GatewayResult<Vec<String>> {
        let url = self.endpoint(&["document-types"]);
        self.fetch_list("get_document_types", self.http_client.get(url))
            .await
    }

    #[instrument(skip(self), err)]
    async fn list_status_history(&self, id: &ApplicationId) -> GatewayResult<Vec<StatusEvent>> {
        let url = self.application_url(id, &["history"]);
        self.fetch_list("list_status_history", self.http_client.get(url))
            .await
    }

    #[instrument(skip(self), err)]
    async fn list_review_comments(&self, id: &ApplicationId) -> GatewayResult<Vec<ReviewComment>> {
        let url = self.application_url(id, &["reviews"]);
        self.fetch_list("list_review_comments", self.http_client.get(url))
            .await
    }

    #[instrument(skip(self), err)]
    async fn list_compliance_checks(
        &self,
        id: &ApplicationId,
    ) -> GatewayResult<Vec<ComplianceCheck>> {
        let url = self.application_url(id, &["compliance-checks"]);
        self.fetch_list("list_compliance_checks", self.http_client.get(url))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permit::types::ApplicationStatus;
    use crate::services::client::session::Role;

    #[test]
    fn test_decode_list_bare_and_wrapped() {
        let bare: Vec<String> = decode_list("types", r#"["site_plan", "floor_plan"]"#).unwrap();
        assert_eq!(bare, vec!["site_plan", "floor_plan"]);

        let wrapped: Vec<String> = decode_list("types", r#"{"data": ["structural"]}"#).unwrap();
        assert_eq!(wrapped, vec!["structural"]);

        let err = decode_list::<String>("types", r#"{"items": 3}"#).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse { ref operation, .. } if operation == "types"));
    }

    #[test]
    fn test_decode_item_bare_and_wrapped() {
        let bare: RemoteApplication =
            decode_item("get", r#"{"id": 3, "status": "draft"}"#).unwrap();
        assert_eq!(bare.id.as_str(), "3");

        let wrapped: RemoteApplication =
            decode_item("get", r#"{"data": {"id": "x9", "status": "approved"}}"#).unwrap();
        assert_eq!(wrapped.id.as_str(), "x9");
        assert_eq!(wrapped.status, ApplicationStatus::Approved);
    }

    #[test]
    fn test_gateway_requires_access_token() {
        let session = Session::new("u1", "Jo", vec![Role::Applicant], "  ");
        let result = HttpPermitGateway::new(&PortalConfig::default(), &session);
        assert!(matches!(result, Err(GatewayError::Setup { .. })));
    }

    #[test]
    fn test_application_urls() {
        let session = Session::new("u1", "Jo", vec![Role::Applicant], "token");
        let gateway = HttpPermitGateway::new(&PortalConfig::default(), &session).unwrap();
        let id = ApplicationId::new("42");
        assert_eq!(
            gateway.application_url(&id, &["submit"]).as_str(),
            "http://localhost:8000/api/applications/42/submit"
        );
        assert_eq!(
            gateway.endpoint(&["document-types"]).as_str(),
            "http://localhost:8000/api/document-types"
        );
    }

    #[test]
    fn test_opaque_ids_stay_single_path_segments() {
        let session = Session::new("u1", "Jo", vec![Role::Applicant], "token");
        let gateway = HttpPermitGateway::new(&PortalConfig::default(), &session).unwrap();

        let url = gateway.application_url(
            &ApplicationId::new("a/b c"),
            &["documents", DocumentId::new("d?1").as_str()],
        );
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/applications/a%2Fb%20c/documents/d%3F1"
        );
    }
}
