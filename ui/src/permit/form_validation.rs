use std::str::FromStr;

use super::state::WizardStep;
use super::types::{ApplicationDraft, DocumentUpload};
use crate::services::config::PortalConfig;
use crate::utils::formatting::format_file_size;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_ADDRESS_LENGTH: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailValidation {
    None,
    Valid,
    Invalid,
}

/// The portal only requires an `@`; the server does the real check
pub fn validate_email(email: &str) -> EmailValidation {
    let email = email.trim();
    if email.is_empty() {
        EmailValidation::None
    } else if email.contains('@') {
        EmailValidation::Valid
    } else {
        EmailValidation::Invalid
    }
}

fn meets_length(value: &str, minimum: usize) -> bool {
    value.trim().chars().count() >= minimum
}

/// Validates that the applicant step is complete
pub fn validate_applicant_step(draft: &ApplicationDraft) -> bool {
    meets_length(&draft.applicant.name, MIN_NAME_LENGTH)
        && validate_email(&draft.applicant.email) == EmailValidation::Valid
}

/// Validates that permit type, work type and address are set
pub fn validate_project_step(draft: &ApplicationDraft) -> bool {
    draft.permit_type.is_some()
        && draft.work_type.is_some()
        && meets_length(&draft.address, MIN_ADDRESS_LENGTH)
}

/// Whether the wizard may move forward from `step`
pub fn can_proceed(draft: &ApplicationDraft, step: WizardStep) -> bool {
    match step {
        WizardStep::Applicant => validate_applicant_step(draft),
        WizardStep::Project => validate_project_step(draft),
        WizardStep::Details | WizardStep::Documents => true,
    }
}

/// Gets user-friendly validation message for the given step
pub fn step_validation_message(draft: &ApplicationDraft, step: WizardStep) -> Option<String> {
    match step {
        WizardStep::Applicant => {
            if !meets_length(&draft.applicant.name, MIN_NAME_LENGTH) {
                return Some(format!(
                    "Please enter the applicant's name (at least {} characters)",
                    MIN_NAME_LENGTH
                ));
            }
            match validate_email(&draft.applicant.email) {
                EmailValidation::None => Some("Please enter an email address".to_string()),
                EmailValidation::Invalid => {
                    Some("Please enter a valid email address".to_string())
                }
                EmailValidation::Valid => None,
            }
        }
        WizardStep::Project => {
            if draft.permit_type.is_none() {
                return Some("Please select a permit type".to_string());
            }
            if draft.work_type.is_none() {
                return Some("Please select a work type".to_string());
            }
            if !meets_length(&draft.address, MIN_ADDRESS_LENGTH) {
                return Some(format!(
                    "Please enter the project address (at least {} characters)",
                    MIN_ADDRESS_LENGTH
                ));
            }
            None
        }
        WizardStep::Details | WizardStep::Documents => None,
    }
}

/// Parses an optional numeric input; blank means "not provided"
pub fn parse_optional_number<T: FromStr>(input: &str) -> Result<Option<T>, String> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned
        .parse::<T>()
        .map(Some)
        .map_err(|_| format!("'{}' is not a valid number", input.trim()))
}

/// Client-side checks run before any upload reaches the gateway
pub fn validate_upload(
    upload: &DocumentUpload,
    config: &PortalConfig,
    document_types: &[String],
) -> Result<(), String> {
    if upload.bytes.is_empty() {
        return Err(format!("{} is empty", upload.file_name));
    }

    if upload.size() > config.max_upload_bytes {
        return Err(format!(
            "{} is {}, the limit is {}",
            upload.file_name,
            format_file_size(upload.size()),
            format_file_size(config.max_upload_bytes)
        ));
    }

    match upload.extension() {
        Some(extension) if config.accepts_extension(&extension) => {}
        _ => {
            return Err(format!(
                "{} is not an accepted file type. Accepted: {}",
                upload.file_name,
                config.accepted_document_extensions.join(", ")
            ))
        }
    }

    let document_type = upload.document_type.trim();
    if document_type.is_empty() {
        return Err("Please choose a document type".to_string());
    }
    if !document_types.is_empty() && !document_types.iter().any(|t| t == document_type) {
        return Err(format!("Unknown document type: {}", document_type));
    }

    Ok(())
}
