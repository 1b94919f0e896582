// Core domain types for permit applications - no dioxus imports needed here
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Accepts an identifier encoded either as a JSON string or a JSON number.
fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Opaque server-side identifier of a permit application
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ApplicationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_opaque_id(deserializer).map(Self)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ApplicationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque server-side identifier of an uploaded document
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_opaque_id(deserializer).map(Self)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Enumerations rendered as `<select>` options.
///
/// `as_str` is the wire value and the option value; `label` is what the user sees.
pub trait SelectOption: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.as_str() == value)
    }

    /// `(value, label)` pairs for every option, in display order
    fn options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|option| (option.as_str().to_string(), option.label().to_string()))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitType {
    Building,
    Demolition,
    Electrical,
    Plumbing,
    Mechanical,
    FireProtection,
    Sign,
}

impl SelectOption for PermitType {
    const ALL: &'static [Self] = &[
        PermitType::Building,
        PermitType::Demolition,
        PermitType::Electrical,
        PermitType::Plumbing,
        PermitType::Mechanical,
        PermitType::FireProtection,
        PermitType::Sign,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            PermitType::Building => "building",
            PermitType::Demolition => "demolition",
            PermitType::Electrical => "electrical",
            PermitType::Plumbing => "plumbing",
            PermitType::Mechanical => "mechanical",
            PermitType::FireProtection => "fire_protection",
            PermitType::Sign => "sign",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PermitType::Building => "Building",
            PermitType::Demolition => "Demolition",
            PermitType::Electrical => "Electrical",
            PermitType::Plumbing => "Plumbing",
            PermitType::Mechanical => "Mechanical",
            PermitType::FireProtection => "Fire Protection",
            PermitType::Sign => "Sign",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    NewConstruction,
    Addition,
    Alteration,
    Repair,
    ChangeOfUse,
    Demolition,
}

impl SelectOption for WorkType {
    const ALL: &'static [Self] = &[
        WorkType::NewConstruction,
        WorkType::Addition,
        WorkType::Alteration,
        WorkType::Repair,
        WorkType::ChangeOfUse,
        WorkType::Demolition,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            WorkType::NewConstruction => "new_construction",
            WorkType::Addition => "addition",
            WorkType::Alteration => "alteration",
            WorkType::Repair => "repair",
            WorkType::ChangeOfUse => "change_of_use",
            WorkType::Demolition => "demolition",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WorkType::NewConstruction => "New Construction",
            WorkType::Addition => "Addition",
            WorkType::Alteration => "Alteration",
            WorkType::Repair => "Repair",
            WorkType::ChangeOfUse => "Change of Use",
            WorkType::Demolition => "Demolition",
        }
    }
}

/// IBC occupancy classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyGroup {
    A,
    B,
    E,
    F,
    H,
    I,
    M,
    R,
    S,
    U,
}

impl SelectOption for OccupancyGroup {
    const ALL: &'static [Self] = &[
        OccupancyGroup::A,
        OccupancyGroup::B,
        OccupancyGroup::E,
        OccupancyGroup::F,
        OccupancyGroup::H,
        OccupancyGroup::I,
        OccupancyGroup::M,
        OccupancyGroup::R,
        OccupancyGroup::S,
        OccupancyGroup::U,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            OccupancyGroup::A => "A",
            OccupancyGroup::B => "B",
            OccupancyGroup::E => "E",
            OccupancyGroup::F => "F",
            OccupancyGroup::H => "H",
            OccupancyGroup::I => "I",
            OccupancyGroup::M => "M",
            OccupancyGroup::R => "R",
            OccupancyGroup::S => "S",
            OccupancyGroup::U => "U",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OccupancyGroup::A => "A - Assembly",
            OccupancyGroup::B => "B - Business",
            OccupancyGroup::E => "E - Educational",
            OccupancyGroup::F => "F - Factory / Industrial",
            OccupancyGroup::H => "H - High Hazard",
            OccupancyGroup::I => "I - Institutional",
            OccupancyGroup::M => "M - Mercantile",
            OccupancyGroup::R => "R - Residential",
            OccupancyGroup::S => "S - Storage",
            OccupancyGroup::U => "U - Utility / Miscellaneous",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionType {
    IA,
    IB,
    IIA,
    IIB,
    IIIA,
    IIIB,
    IV,
    VA,
    VB,
}

impl SelectOption for ConstructionType {
    const ALL: &'static [Self] = &[
        ConstructionType::IA,
        ConstructionType::IB,
        ConstructionType::IIA,
        ConstructionType::IIB,
        ConstructionType::IIIA,
        ConstructionType::IIIB,
        ConstructionType::IV,
        ConstructionType::VA,
        ConstructionType::VB,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ConstructionType::IA => "IA",
            ConstructionType::IB => "IB",
            ConstructionType::IIA => "IIA",
            ConstructionType::IIB => "IIB",
            ConstructionType::IIIA => "IIIA",
            ConstructionType::IIIB => "IIIB",
            ConstructionType::IV => "IV",
            ConstructionType::VA => "VA",
            ConstructionType::VB => "VB",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ConstructionType::IA => "Type IA - Noncombustible, protected",
            ConstructionType::IB => "Type IB - Noncombustible, protected",
            ConstructionType::IIA => "Type IIA - Noncombustible, protected",
            ConstructionType::IIB => "Type IIB - Noncombustible, unprotected",
            ConstructionType::IIIA => "Type IIIA - Exterior noncombustible, protected",
            ConstructionType::IIIB => "Type IIIB - Exterior noncombustible, unprotected",
            ConstructionType::IV => "Type IV - Heavy timber",
            ConstructionType::VA => "Type VA - Combustible, protected",
            ConstructionType::VB => "Type VB - Combustible, unprotected",
        }
    }
}

/// Lifecycle status of an application as reported by the server
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    RevisionsRequested,
    Approved,
    Rejected,
    Issued,
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "Draft",
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::RevisionsRequested => "Revisions Requested",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Issued => "Permit Issued",
            ApplicationStatus::Unknown => "Unknown",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "status-badge status-draft",
            ApplicationStatus::Submitted => "status-badge status-submitted",
            ApplicationStatus::UnderReview => "status-badge status-review",
            ApplicationStatus::RevisionsRequested => "status-badge status-revisions",
            ApplicationStatus::Approved => "status-badge status-approved",
            ApplicationStatus::Rejected => "status-badge status-rejected",
            ApplicationStatus::Issued => "status-badge status-issued",
            ApplicationStatus::Unknown => "status-badge",
        }
    }

    /// Only drafts may be edited or have documents removed
    pub fn is_draft(&self) -> bool {
        matches!(self, ApplicationStatus::Draft)
    }

    /// Statuses that belong in a reviewer's queue
    pub fn awaits_review(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Submitted | ApplicationStatus::UnderReview
        )
    }
}

/// Applicant identity as entered in the first wizard step
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// In-memory draft held by the wizard for the duration of a session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub applicant: ApplicantDetails,
    pub permit_type: Option<PermitType>,
    pub work_type: Option<WorkType>,
    pub address: String,
    pub description: String,
    pub occupancy_group: Option<OccupancyGroup>,
    pub estimated_value: Option<f64>,
    pub building_area: Option<f64>,
    pub storeys: Option<u32>,
    pub construction_type: Option<ConstructionType>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ApplicationDraft {
    /// True when nothing has been typed or selected yet
    pub fn is_blank(&self) -> bool {
        *self == ApplicationDraft::default()
    }

    /// Builds the full create/update request body, including the nested applicant
    pub fn to_payload(&self) -> ApplicationPayload {
        ApplicationPayload {
            applicant: ApplicantPayload {
                name: self.applicant.name.trim().to_string(),
                email: self.applicant.email.trim().to_string(),
                phone: non_empty(&self.applicant.phone),
                company: non_empty(&self.applicant.company),
            },
            permit_type: self.permit_type,
            work_type: self.work_type,
            address: self.address.trim().to_string(),
            description: self.description.trim().to_string(),
            occupancy_group: self.occupancy_group,
            estimated_value: self.estimated_value,
            building_area: self.building_area,
            storeys: self.storeys,
            construction_type: self.construction_type,
        }
    }

    /// Reconciles local fields from the authoritative server copy
    pub fn from_remote(application: &RemoteApplication) -> Self {
        let applicant = application
            .applicant
            .as_ref()
            .map(|record| ApplicantDetails {
                name: record.name.clone(),
                email: record.email.clone(),
                phone: record.phone.clone().unwrap_or_default(),
                company: record.company.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        Self {
            applicant,
            permit_type: application.permit_type,
            work_type: application.work_type,
            address: application.address.clone(),
            description: application.description.clone(),
            occupancy_group: application.occupancy_group,
            estimated_value: application.estimated_value,
            building_area: application.building_area,
            storeys: application.storeys,
            construction_type: application.construction_type,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApplicantPayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Request body for create and update calls
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApplicationPayload {
    pub applicant: ApplicantPayload,
    pub permit_type: Option<PermitType>,
    pub work_type: Option<WorkType>,
    pub address: String,
    pub description: String,
    pub occupancy_group: Option<OccupancyGroup>,
    pub estimated_value: Option<f64>,
    pub building_area: Option<f64>,
    pub storeys: Option<u32>,
    pub construction_type: Option<ConstructionType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApplicantRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Server-side persisted application
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RemoteApplication {
    pub id: ApplicationId,
    #[serde(default)]
    pub reference_number: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applicant: Option<ApplicantRecord>,
    #[serde(default)]
    pub permit_type: Option<PermitType>,
    #[serde(default)]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub occupancy_group: Option<OccupancyGroup>,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default)]
    pub building_area: Option<f64>,
    #[serde(default)]
    pub storeys: Option<u32>,
    #[serde(default)]
    pub construction_type: Option<ConstructionType>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl RemoteApplication {
    /// Reference number if the server has assigned one, otherwise the raw id
    pub fn display_reference(&self) -> String {
        self.reference_number
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Row in the applications list
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationSummary {
    pub id: ApplicationId,
    #[serde(default)]
    pub reference_number: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub permit_type: Option<PermitType>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub id: DocumentId,
    #[serde(alias = "filename", alias = "name")]
    pub file_name: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A file picked in the upload widget, ready to send
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub document_type: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, document_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).map(str::to_string);
        Self {
            file_name,
            document_type: document_type.into(),
            content_type,
            bytes,
        }
    }

    /// Lowercased extension without the dot
    pub fn extension(&self) -> Option<String> {
        file_extension(&self.file_name)
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

pub fn guess_content_type(file_name: &str) -> Option<&'static str> {
    match file_extension(file_name)?.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "tif" | "tiff" => Some("image/tiff"),
        "dwg" => Some("image/vnd.dwg"),
        "dxf" => Some("image/vnd.dxf"),
        _ => None,
    }
}

/// One entry of an application's status history
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusEvent {
    pub status: ApplicationStatus,
    pub occurred_at: String,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewComment {
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub discipline: Option<String>,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub resolved: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceResult {
    Pass,
    Fail,
    NotApplicable,
    #[serde(other)]
    Pending,
}

impl ComplianceResult {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceResult::Pass => "Pass",
            ComplianceResult::Fail => "Fail",
            ComplianceResult::NotApplicable => "N/A",
            ComplianceResult::Pending => "Pending",
        }
    }
}

/// Outcome of a single code-compliance check run by the reviewing office
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComplianceCheck {
    pub code_section: String,
    #[serde(default)]
    pub description: String,
    pub result: ComplianceResult,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_id_accepts_string_and_number() {
        let from_text: ApplicationId = serde_json::from_value(json!("app-42")).unwrap();
        assert_eq!(from_text.as_str(), "app-42");

        let from_number: ApplicationId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(from_number.as_str(), "42");

        // Serializes back as a plain string
        assert_eq!(serde_json::to_value(&from_number).unwrap(), json!("42"));
    }

    #[test]
    fn test_remote_application_decoding() {
        let application: RemoteApplication = serde_json::from_value(json!({
            "id": 17,
            "reference_number": "BP-2024-0017",
            "status": "under_review",
            "applicant": { "name": "Jo Builder", "email": "jo@example.com", "phone": null },
            "permit_type": "fire_protection",
            "work_type": "change_of_use",
            "address": "12 Main Street",
            "occupancy_group": "B",
            "construction_type": "IIIB",
            "storeys": 3
        }))
        .unwrap();

        assert_eq!(application.id.as_str(), "17");
        assert_eq!(application.status, ApplicationStatus::UnderReview);
        assert_eq!(application.permit_type, Some(PermitType::FireProtection));
        assert_eq!(application.work_type, Some(WorkType::ChangeOfUse));
        assert_eq!(application.occupancy_group, Some(OccupancyGroup::B));
        assert_eq!(application.construction_type, Some(ConstructionType::IIIB));
        assert_eq!(application.description, "");
        assert_eq!(application.display_reference(), "BP-2024-0017");
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let status: ApplicationStatus = serde_json::from_value(json!("on_hold")).unwrap();
        assert_eq!(status, ApplicationStatus::Unknown);
        assert!(!status.is_draft());
    }

    #[test]
    fn test_payload_nests_applicant_and_trims_optional_fields() {
        let draft = ApplicationDraft {
            applicant: ApplicantDetails {
                name: "  Jo Builder ".to_string(),
                email: "jo@example.com".to_string(),
                phone: "   ".to_string(),
                company: "Builder & Co".to_string(),
            },
            permit_type: Some(PermitType::Building),
            work_type: Some(WorkType::Addition),
            address: "12 Main Street".to_string(),
            storeys: Some(2),
            ..Default::default()
        };

        let body = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(body["applicant"]["name"], json!("Jo Builder"));
        assert_eq!(body["applicant"]["phone"], json!(null));
        assert_eq!(body["applicant"]["company"], json!("Builder & Co"));
        assert_eq!(body["permit_type"], json!("building"));
        assert_eq!(body["work_type"], json!("addition"));
        assert_eq!(body["storeys"], json!(2));
        assert_eq!(body["occupancy_group"], json!(null));
    }

    #[test]
    fn test_draft_from_remote_reconciles_fields() {
        let application: RemoteApplication = serde_json::from_value(json!({
            "id": "a1",
            "status": "draft",
            "applicant": { "name": "Sam", "email": "sam@example.com", "company": "Acme" },
            "address": "99 Harbour Road",
            "estimated_value": 125000.0
        }))
        .unwrap();

        let draft = ApplicationDraft::from_remote(&application);
        assert_eq!(draft.applicant.name, "Sam");
        assert_eq!(draft.applicant.phone, "");
        assert_eq!(draft.applicant.company, "Acme");
        assert_eq!(draft.address, "99 Harbour Road");
        assert_eq!(draft.estimated_value, Some(125000.0));
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_select_option_parse() {
        assert_eq!(PermitType::parse("electrical"), Some(PermitType::Electrical));
        assert_eq!(WorkType::parse("change_of_use"), Some(WorkType::ChangeOfUse));
        assert_eq!(ConstructionType::parse("VB"), Some(ConstructionType::VB));
        assert_eq!(OccupancyGroup::parse(""), None);
        assert_eq!(PermitType::options().len(), PermitType::ALL.len());
    }

    #[test]
    fn test_document_upload_extension_and_content_type() {
        let upload = DocumentUpload::new("Site Plan.PDF", "site_plan", vec![1, 2, 3]);
        assert_eq!(upload.extension().as_deref(), Some("pdf"));
        assert_eq!(upload.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(upload.size(), 3);

        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".hidden"), None);
        assert_eq!(guess_content_type("drawing.xyz"), None);
    }

    #[test]
    fn test_document_record_accepts_filename_alias() {
        let record: DocumentRecord = serde_json::from_value(json!({
            "id": 5,
            "filename": "plans.pdf",
            "document_type": "architectural_plans",
            "size_bytes": 2048
        }))
        .unwrap();
        assert_eq!(record.id.as_str(), "5");
        assert_eq!(record.file_name, "plans.pdf");
        assert_eq!(record.size_bytes, Some(2048));
    }
}
