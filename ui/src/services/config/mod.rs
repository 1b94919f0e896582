use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::console_warn;

/// Default API endpoint for local development
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_AUTH_URL: &str = "http://localhost:8000/auth/login";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} = {value}")]
    InvalidUrl { field: String, value: String },

    #[error("Configuration error: {field} must not be empty")]
    Empty { field: String },
}

/// Portal-wide settings shared by every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the permit REST API, without trailing slash
    pub api_base_url: String,
    /// Where signed-out users are sent to obtain a session
    pub auth_url: String,
    pub user_agent: String,
    /// Largest document accepted by the upload widget
    pub max_upload_bytes: u64,
    /// Lowercase extensions, without the dot
    pub accepted_document_extensions: Vec<String>,
    pub session_storage_key: String,
    pub draft_storage_key: String,
    /// One-shot messages that must survive a route change
    pub flash_storage_key: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            user_agent: "permit-portal-web/0.1".to_string(),
            max_upload_bytes: 25 * 1024 * 1024, // 25MB
            accepted_document_extensions: ["pdf", "png", "jpg", "jpeg", "dwg", "dxf", "tif", "tiff"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            session_storage_key: "permit_portal_session".to_string(),
            draft_storage_key: "permit_portal_unsaved_draft".to_string(),
            flash_storage_key: "permit_portal_flash".to_string(),
        }
    }
}

impl PortalConfig {
    /// Defaults overlaid with build-time overrides, then validated
    pub fn load() -> Result<Self, ConfigError> {
        Self::with_overrides(
            option_env!("PERMIT_API_BASE_URL"),
            option_env!("PERMIT_AUTH_URL"),
        )
    }

    /// Same as [`PortalConfig::load`], falling back to defaults on invalid overrides
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                console_warn!("[CONFIG] {} - using defaults", e);
                Self::default()
            }
        }
    }

    pub fn with_overrides(
        api_base_url: Option<&str>,
        auth_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = api_base_url {
            config.api_base_url = url.to_string();
        }
        if let Some(url) = auth_url {
            config.auth_url = url.to_string();
        }
        config.validated()
    }

    /// Normalises URLs and rejects settings the client cannot work with
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url("api_base_url", &self.api_base_url)?;
        self.auth_url = normalize_base_url("auth_url", &self.auth_url)?;

        if self.session_storage_key.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "session_storage_key".to_string(),
            });
        }
        if self.draft_storage_key.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "draft_storage_key".to_string(),
            });
        }
        if self.flash_storage_key.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "flash_storage_key".to_string(),
            });
        }

        self.accepted_document_extensions = self
            .accepted_document_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Ok(self)
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.accepted_document_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }

    /// Value for the file input's `accept` attribute, e.g. `.pdf,.png`
    pub fn accept_attribute(&self) -> String {
        self.accepted_document_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn normalize_base_url(field: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Empty {
            field: field.to_string(),
        });
    }

    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
    if !has_host {
        return Err(ConfigError::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(trimmed.to_string())
}
